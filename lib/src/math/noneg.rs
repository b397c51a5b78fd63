use std::{
    cmp::Ordering,
    fmt::{Debug, Display},
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{Hypot, IsNeg, TotalCmp};

/// Can not store negative numbers
#[derive(Clone, Copy, Debug, Serialize)]
#[serde(transparent)]
pub struct NoNeg<T> {
    value: T,
}

impl<T: Display> Display for NoNeg<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.value.fmt(f)
    }
}

#[derive(Debug, Error)]
#[error("value can not be negative: {original_value:?}")]
pub struct NegError<T: Debug> {
    original_value: T,
}

impl<T> NoNeg<T> {
    pub fn wrap(value: T) -> Result<Self, NegError<T>>
    where
        T: IsNeg + Debug,
    {
        if value.is_neg() {
            Err(NegError {
                original_value: value,
            })
        } else {
            Ok(Self { value })
        }
    }

    pub fn unwrap(self) -> T {
        self.value
    }

    pub fn total_cmp(&self, other: &Self) -> Ordering
    where
        T: TotalCmp,
    {
        self.value.total_cmp(&other.value)
    }
}

impl<'de, T> Deserialize<'de> for NoNeg<T>
where
    T: Deserialize<'de> + IsNeg + Debug,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        NoNeg::wrap(T::deserialize(deserializer)?).map_err(serde::de::Error::custom)
    }
}

impl<T, U> PartialEq<NoNeg<U>> for NoNeg<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &NoNeg<U>) -> bool {
        self.value.eq(&other.value)
    }
}

impl<T, U> PartialOrd<NoNeg<U>> for NoNeg<T>
where
    T: PartialOrd<U>,
{
    fn partial_cmp(&self, other: &NoNeg<U>) -> Option<Ordering> {
        self.value.partial_cmp(&other.value)
    }
}

/// A Euclidean norm is never negative, so no check is needed
pub(crate) trait HypotAsNoNeg
where
    Self: Sized,
{
    type Output;
    fn hypot_as_noneg(self, rhs: Self) -> NoNeg<Self::Output>;
}

impl<T> HypotAsNoNeg for T
where
    T: Hypot,
{
    type Output = <T as Hypot>::Output;
    fn hypot_as_noneg(self, rhs: Self) -> NoNeg<Self::Output> {
        NoNeg {
            value: self.hypot(rhs),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{HypotAsNoNeg as _, NoNeg};

    #[test]
    fn wrap() {
        assert_eq!(NoNeg::wrap(2.5).map(NoNeg::unwrap).ok(), Some(2.5));
        assert_eq!(NoNeg::wrap(0.).map(NoNeg::unwrap).ok(), Some(0.));

        let err = NoNeg::wrap(-1.).unwrap_err();
        assert_eq!(err.to_string(), "value can not be negative: -1.0");

        assert!(NoNeg::wrap(f64::NAN).is_err());
    }

    #[test]
    fn hypot() {
        let five = NoNeg::wrap(5.).unwrap();
        assert_eq!((-3.0_f64).hypot_as_noneg(4.), five);
        assert!(NoNeg::wrap(4.).unwrap() < five);
        assert_eq!(
            3.0_f64.hypot_as_noneg(-4.).total_cmp(&five),
            std::cmp::Ordering::Equal
        );
        assert_eq!(five.to_string(), "5");
    }

    #[test]
    fn serde() {
        let value: NoNeg<f64> = serde_json::from_str("1.5").unwrap();
        assert_eq!(value.unwrap(), 1.5);
        assert_eq!(serde_json::to_string(&value).unwrap(), "1.5");
        assert!(serde_json::from_str::<NoNeg<f64>>("-1.5").is_err());
    }
}
