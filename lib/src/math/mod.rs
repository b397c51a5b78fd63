mod complex;
mod noneg;
mod parse;
mod traits;

pub use complex::*;
pub use noneg::*;
pub use traits::*;
