//! Business logic: validation, batch orchestration, single-item
//! submission, and bulk input loading

pub mod batch;
pub mod input;
pub mod single;
pub mod validate;
