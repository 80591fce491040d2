// Utility functions module
pub mod config;
pub mod cooldown;
pub mod formatters;
pub mod report;
