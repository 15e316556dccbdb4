//! Configuration and the command envelope shared by both Lambdas

pub mod config;
pub mod envelope;
pub mod models;
