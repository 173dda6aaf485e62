#[macro_use]
extern crate slog;

pub mod config;
pub mod goalstate;
pub mod harness;
pub mod logger;
pub mod schema;
