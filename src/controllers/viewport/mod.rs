pub mod commands;
pub mod config;
pub mod controller;
pub mod errors;
pub mod explicit_view;
