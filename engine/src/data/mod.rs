// Dataset loaders and the loaded-data context built from them
pub mod currency_parser;
pub mod loaded_data;
pub mod ppp_parser;
