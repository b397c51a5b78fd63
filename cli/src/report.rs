use std::fmt::{self, Display};

use anyhow::Context as _;
use cmplx_lib::{
    math::{ComplexValue, NoNeg},
    utils::Float,
};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ValueReport {
    text: String,
    value: ComplexValue,
    magnitude: NoNeg<Float>,
}

impl From<ComplexValue> for ValueReport {
    fn from(value: ComplexValue) -> Self {
        Self {
            text: value.to_string(),
            value,
            magnitude: value.magnitude(),
        }
    }
}

impl Display for ValueReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, magnitude: {}", self.text, self.magnitude)
    }
}

#[derive(Debug, Serialize)]
pub struct SumReport {
    terms: Vec<ValueReport>,
    sum: ValueReport,
}

impl SumReport {
    pub fn new(terms: Vec<ComplexValue>, sum: ComplexValue) -> Self {
        Self {
            terms: terms.into_iter().map(ValueReport::from).collect(),
            sum: sum.into(),
        }
    }
}

impl Display for SumReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let terms: Vec<_> = self
            .terms
            .iter()
            .map(|term| format!("({})", term.text))
            .collect();
        write!(f, "{} = {}", terms.join(" + "), self.sum.text)
    }
}

/// Every comparison operator applied to `a` and `b`
#[derive(Debug, Serialize)]
pub struct CompareReport {
    a: ValueReport,
    b: ValueReport,
    eq: bool,
    ne: bool,
    lt: bool,
    le: bool,
    gt: bool,
    ge: bool,
}

impl CompareReport {
    pub fn new(a: ComplexValue, b: ComplexValue) -> Self {
        Self {
            eq: a == b,
            ne: a != b,
            lt: a < b,
            le: a <= b,
            gt: a > b,
            ge: a >= b,
            a: a.into(),
            b: b.into(),
        }
    }
}

impl Display for CompareReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "a = {}", self.a)?;
        writeln!(f, "b = {}", self.b)?;
        writeln!(f, "a == b: {}", self.eq)?;
        writeln!(f, "a != b: {}", self.ne)?;
        writeln!(f, "a <  b: {}", self.lt)?;
        writeln!(f, "a <= b: {}", self.le)?;
        writeln!(f, "a >  b: {}", self.gt)?;
        write!(f, "a >= b: {}", self.ge)
    }
}

#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct SortReport {
    values: Vec<ValueReport>,
}

impl SortReport {
    /// Stable, so values of equal magnitude keep their input order
    pub fn new(mut values: Vec<ComplexValue>) -> Self {
        values.sort();
        Self {
            values: values.into_iter().map(ValueReport::from).collect(),
        }
    }
}

impl Display for SortReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines: Vec<_> = self.values.iter().map(ToString::to_string).collect();
        write!(f, "{}", lines.join("\n"))
    }
}

pub fn emit<R: Serialize + Display>(report: &R, json: bool) -> anyhow::Result<()> {
    if json {
        let text = serde_json::to_string_pretty(report).context("Failed to serialize report")?;
        println!("{text}");
    } else {
        println!("{report}");
    }
    Ok(())
}
