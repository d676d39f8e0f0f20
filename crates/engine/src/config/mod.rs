mod loader;
mod validation;

pub use loader::{load_config, ConfigError, CONFIG_FILE};
pub use validation::validate;
