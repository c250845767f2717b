mod loader;
mod model;
mod validation;

pub use loader::{ConfigLoader, FileConfigLoader, LOCAL_CONFIG_NAME, LoadResult};
pub use model::{CONFIG_VERSION, Config, HeadConfig, LinksConfig, ScannerConfig};
pub use validation::validate_config_semantics;
