pub mod gateway;
pub mod log;
