use super::*;

pub mod safe_math;
pub mod accrual;

pub use safe_math::*;
pub use accrual::*;
