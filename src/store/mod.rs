pub mod catalog;
pub mod embedded;
pub mod file;
pub mod traits;

pub use catalog::*;
pub use embedded::*;
pub use file::*;
pub use traits::*;

use crate::config::DataConfig;

/// Pick the reference source named by the configuration.
pub fn source_from_config(config: &DataConfig) -> Box<dyn ReferenceSource> {
    match &config.reference_file {
        Some(path) if !path.is_empty() => Box::new(JsonFileSource::new(path)),
        _ => Box::new(EmbeddedSource),
    }
}
