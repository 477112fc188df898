//! External integrations

pub mod gateway;
