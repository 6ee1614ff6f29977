pub mod config;
pub mod dashboard;
pub mod histogram;
pub mod list;
pub mod stats;
