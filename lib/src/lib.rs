#![deny(unused_imports)]

pub mod error;
pub mod math;
pub mod utils;
