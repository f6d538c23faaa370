// Conversion services: the pure converter and the request-level service on top of it
pub mod conversion_service;
pub mod salary_converter;

pub use conversion_service::ConversionService;
pub use salary_converter::{convert_salary, SalaryConverter};
