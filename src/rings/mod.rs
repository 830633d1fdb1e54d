pub mod field_impl;
pub mod finite_field;
pub mod poly;
pub mod quotient;
pub mod zn;
