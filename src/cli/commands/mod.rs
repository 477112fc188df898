//! Command implementations

pub mod init;
pub mod run;
pub mod send;
pub mod validate;
