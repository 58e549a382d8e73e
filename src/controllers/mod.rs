pub mod cli;
pub mod ports;
pub mod rendering;
pub mod viewport;
