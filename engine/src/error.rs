use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("CSV parsing system error: {source}")]
    CsvSystemError {
        #[from]
        source: csv::Error,
    },

    #[error("XML parsing system error: {source}")]
    XmlSystemError {
        #[from]
        source: quick_xml::Error,
    },

    #[error("I/O error: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },

    #[error("Data format error: {0}")]
    DataFormatError(String),

    #[error("Lookup error: no PPP factor for country '{0}'")]
    LookupError(String),

    #[error("Arithmetic error: {0}")]
    ArithmeticError(String),
}

/// Coarse classification used by callers that only care about the failure class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Config,
    Io,
    DataFormat,
    Lookup,
    Arithmetic,
}

impl EngineError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            EngineError::ConfigError(_) => ErrorKind::Config,
            EngineError::IoError { .. } => ErrorKind::Io,
            // Malformed CSV/XML structure is a data format problem just like a bad number.
            EngineError::CsvSystemError { .. }
            | EngineError::XmlSystemError { .. }
            | EngineError::DataFormatError(_) => ErrorKind::DataFormat,
            EngineError::LookupError(_) => ErrorKind::Lookup,
            EngineError::ArithmeticError(_) => ErrorKind::Arithmetic,
        }
    }
}
