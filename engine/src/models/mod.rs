// Engine-side lookup tables built by the loaders in `crate::data`.
// The plain records they are built from live in `ppp_shared::models`.

pub mod currency_table;
pub mod factor_table;

pub use currency_table::CurrencyCodeTable;
pub use factor_table::PppFactorTable;
