// Data models module
pub mod guild;
pub mod player;
