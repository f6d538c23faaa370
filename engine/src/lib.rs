// Engine library root
// Loaders for the PPP and currency datasets, the loaded-data context, and the converter.

pub mod cli;
pub mod config;
pub mod data;
pub mod error;
pub mod logging;
pub mod models;
pub mod services;

pub use data::loaded_data::LoadedData;
pub use error::{EngineError, ErrorKind};
pub use services::{convert_salary, ConversionService, SalaryConverter};
