pub mod app;
pub mod assistants;
pub mod cli;
pub mod config;
pub mod document;
pub mod error;
pub mod highlight;
pub mod paths;
pub mod persistence;
pub mod util;
