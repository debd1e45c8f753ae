//! Shared building blocks for `ipnotify`: configuration loading and the
//! address filtering rules applied to network interfaces.

pub mod config;
pub mod network;
pub mod utils;
