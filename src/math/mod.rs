pub mod base;
pub mod bmi;
pub mod error;
pub mod parsefmt;

pub type Num = num_bigint::BigUint;
