// src/lib.rs
pub mod app;
pub mod args;
pub mod config;
pub mod error;
pub mod version;

pub use version::VERSION;
