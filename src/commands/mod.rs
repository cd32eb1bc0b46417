//! CLI commands for wayfinder

pub mod cities;
pub mod dispatch;
pub mod kpaths;
pub mod network;
pub mod path;
pub mod roads;
pub mod traverse;
