pub mod config;
pub mod energy;
