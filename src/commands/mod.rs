// Bot commands module
pub mod channels;
pub mod info;
