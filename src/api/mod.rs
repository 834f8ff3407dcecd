//! API Lambda handler, route table, and gateway adaptation

pub mod gateway;
pub mod handler;
pub mod health;
pub mod router;

// Re-export the main handler for convenience
pub use handler::handler;
