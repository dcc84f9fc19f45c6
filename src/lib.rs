// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod cli;
pub mod config;
pub mod csv;
pub mod error;
pub mod file;
pub mod gui;
pub mod model;
pub mod progress;
pub mod report;
pub mod roster;
pub mod source;
pub mod stats;
pub mod store;
