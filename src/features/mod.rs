// Event-driven features module
pub mod message_guard;
