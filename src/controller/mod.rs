//! Controller Lambda: hands queued commands to the DJ controller

pub mod drain;
pub mod handler;

pub use handler::handler;
