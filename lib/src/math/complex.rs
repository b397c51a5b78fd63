use std::{
    cmp::Ordering,
    fmt::{self, Display},
    ops::Add,
};

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::{error::ComplexError, utils::Float};

use super::{noneg::HypotAsNoNeg as _, Abs, Component, Hypot, IsFinite, NoNeg, Zero};

/// Complex number ordered by its magnitude.
///
/// All six comparison operators look at [`ComplexValue::magnitude`] only, so values
/// with different components but the same distance from the origin are equal:
/// `(3, 4) == (4, 3)`. Use [`ComplexValue::identical`] to compare components.
///
/// Construction, parsing, deserialization and [`ComplexValue::checked_add`] only
/// produce finite components. `+` is infallible and may overflow to infinite components;
/// the magnitude order stays total for those values too.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ComplexValue<T = Float> {
    real: T,
    imag: T,
}

impl<T> ComplexValue<T> {
    pub fn new(real: T, imag: T) -> Result<Self, ComplexError>
    where
        T: IsFinite + Display,
    {
        if real.is_finite() && imag.is_finite() {
            Ok(Self { real, imag })
        } else {
            let (real, imag) = (real.to_string(), imag.to_string());
            trace!(%real, %imag, "rejecting non-finite complex value");
            Err(ComplexError::NonFinite { real, imag })
        }
    }

    pub fn real_only(real: T) -> Result<Self, ComplexError>
    where
        T: IsFinite + Display + Zero,
    {
        Self::new(real, T::zero())
    }

    pub fn real(&self) -> &T {
        &self.real
    }

    pub fn imag(&self) -> &T {
        &self.imag
    }

    pub fn components(self) -> (T, T) {
        (self.real, self.imag)
    }

    /// Euclidean distance from the origin
    pub fn magnitude(&self) -> NoNeg<T>
    where
        T: Copy + Hypot<Output = T>,
    {
        self.real.hypot_as_noneg(self.imag)
    }

    /// Component-wise equality, unlike `==` which only compares magnitudes
    pub fn identical(&self, other: &Self) -> bool
    where
        T: PartialEq,
    {
        self.real == other.real && self.imag == other.imag
    }

    /// Same as `+` but fails instead of producing an infinite component, so the result
    /// keeps both components finite
    pub fn checked_add(self, rhs: Self) -> Result<Self, ComplexError>
    where
        T: Component,
    {
        let sum = self + rhs;
        if sum.real.is_finite() && sum.imag.is_finite() {
            Ok(sum)
        } else {
            debug!(lhs = %self, rhs = %rhs, "complex addition overflowed");
            Err(ComplexError::Overflow {
                lhs: self.to_string(),
                rhs: rhs.to_string(),
            })
        }
    }
}

impl<T: Zero> Default for ComplexValue<T> {
    fn default() -> Self {
        Self {
            real: T::zero(),
            imag: T::zero(),
        }
    }
}

impl<T> TryFrom<(T, T)> for ComplexValue<T>
where
    T: IsFinite + Display,
{
    type Error = ComplexError;

    fn try_from(value: (T, T)) -> Result<Self, Self::Error> {
        Self::new(value.0, value.1)
    }
}

impl<T> Display for ComplexValue<T>
where
    T: Copy + Display + PartialOrd + Zero + Abs<Output = T>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // zero imaginary part is rendered with a minus sign
        if self.imag > T::zero() {
            write!(f, "{} + {}j", self.real, self.imag)
        } else {
            write!(f, "{} - {}j", self.real, self.imag.abs())
        }
    }
}

impl<T> Add for ComplexValue<T>
where
    T: Add<Output = T>,
{
    type Output = ComplexValue<T>;

    fn add(self, rhs: Self) -> Self::Output {
        Self::Output {
            real: self.real + rhs.real,
            imag: self.imag + rhs.imag,
        }
    }
}

impl<'a, T> Add<&'a ComplexValue<T>> for &'a ComplexValue<T>
where
    T: Copy + Add<Output = T>,
{
    type Output = ComplexValue<T>;

    fn add(self, rhs: &'a ComplexValue<T>) -> Self::Output {
        *self + *rhs
    }
}

impl<T: Component> PartialEq for ComplexValue<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T: Component> Eq for ComplexValue<T> {}

impl<T: Component> PartialOrd for ComplexValue<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: Component> Ord for ComplexValue<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.magnitude().total_cmp(&other.magnitude())
    }
}

impl<'de, T> Deserialize<'de> for ComplexValue<T>
where
    T: Deserialize<'de> + IsFinite + Display,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct TmpComplex<T> {
            real: T,
            imag: T,
        }

        let val = TmpComplex::deserialize(deserializer)?;
        Self::new(val.real, val.imag).map_err(serde::de::Error::custom)
    }
}
