//! Intake Lambda handler and request processing

pub mod handler;
pub mod helpers;
pub mod intake;
pub mod parsing;
pub mod token;

// Re-export the main handler for convenience
pub use handler::handler;
