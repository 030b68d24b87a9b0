pub mod builder;
pub mod defaults;
pub mod file;
pub mod models;

pub use builder::{ConfigOverrides, build_config};
pub use defaults::DEFAULT_CONFIG_FILE_NAME;
pub use models::OutputFormat;
