// Engine configuration: dataset locations and load policies.
pub mod settings;

pub use settings::{EngineSettings, FactorPolicy};
