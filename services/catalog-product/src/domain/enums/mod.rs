//! 领域枚举

mod gender;

pub use gender::Gender;
