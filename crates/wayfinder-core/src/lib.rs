//! Wayfinder Core Library
//!
//! Graph model and search engines for small weighted road networks.

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
pub mod roadmap;
