//! Invocation-level types shared by the runner and the blocks.

pub mod config;
pub mod models;
