pub mod models;
pub mod utils;

pub use models::{ConversionRequest, ConversionResponse, PppFactor, PppRecord, UNKNOWN_CURRENCY};
