//! Headless content catalog browser: CLI, document model and event loop.

pub mod cli;
pub mod commands;
pub mod platform;
pub mod script;
