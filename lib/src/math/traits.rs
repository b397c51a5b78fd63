use std::{
    cmp::Ordering,
    fmt::{Debug, Display},
    ops::Add,
    str::FromStr,
};

/// Euclidean norm of `(self, other)` without overflow or underflow in the intermediate squares
pub trait Hypot<Rhs = Self> {
    type Output;
    fn hypot(self, rhs: Rhs) -> Self::Output;
}

impl Hypot for f32 {
    type Output = f32;

    fn hypot(self, rhs: Self) -> Self::Output {
        f32::hypot(self, rhs)
    }
}

impl Hypot for f64 {
    type Output = f64;

    fn hypot(self, rhs: Self) -> Self::Output {
        f64::hypot(self, rhs)
    }
}

pub trait Abs {
    type Output;
    fn abs(self) -> Self::Output;
}

impl Abs for f32 {
    type Output = f32;

    fn abs(self) -> Self::Output {
        f32::abs(self)
    }
}

impl Abs for f64 {
    type Output = f64;

    fn abs(self) -> Self::Output {
        f64::abs(self)
    }
}

pub trait Zero {
    fn zero() -> Self;
}

impl Zero for f32 {
    fn zero() -> Self {
        0.
    }
}

impl Zero for f64 {
    fn zero() -> Self {
        0.
    }
}

/// `NaN` counts as negative
pub trait IsNeg {
    fn is_neg(&self) -> bool;
}

impl IsNeg for f32 {
    fn is_neg(&self) -> bool {
        self.is_nan() || *self < 0.
    }
}

impl IsNeg for f64 {
    fn is_neg(&self) -> bool {
        self.is_nan() || *self < 0.
    }
}

pub trait IsFinite {
    fn is_finite(&self) -> bool;
}

impl IsFinite for f32 {
    fn is_finite(&self) -> bool {
        f32::is_finite(*self)
    }
}

impl IsFinite for f64 {
    fn is_finite(&self) -> bool {
        f64::is_finite(*self)
    }
}

pub trait TotalCmp {
    fn total_cmp(&self, other: &Self) -> Ordering;
}

impl TotalCmp for f32 {
    fn total_cmp(&self, other: &Self) -> Ordering {
        f32::total_cmp(self, other)
    }
}

impl TotalCmp for f64 {
    fn total_cmp(&self, other: &Self) -> Ordering {
        f64::total_cmp(self, other)
    }
}

/// Scalar that can be stored in a [`ComplexValue`](super::ComplexValue)
pub trait Component:
    Copy
    + Debug
    + Display
    + FromStr
    + PartialOrd
    + Zero
    + IsFinite
    + TotalCmp
    + Abs<Output = Self>
    + Hypot<Output = Self>
    + Add<Output = Self>
{
}

impl Component for f32 {}

impl Component for f64 {}
