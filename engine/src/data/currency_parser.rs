use csv::{ReaderBuilder, StringRecord};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::error::EngineError;
use crate::models::CurrencyCodeTable;

pub const ENTITY_COLUMN: &str = "Entity";
pub const CODE_COLUMN: &str = "AlphabeticCode";

pub struct CurrencyCsvParser;

impl CurrencyCsvParser {
    // CSV Header: Entity,Currency,AlphabeticCode,NumericCode,MinorUnit,WithdrawalDate
    // Example Row: FRANCE,Euro,EUR,978,2,
    // Only Entity and AlphabeticCode are read; they may appear in any position.
    pub fn load_codes<R: Read>(source: R) -> Result<CurrencyCodeTable, EngineError> {
        let mut rdr = ReaderBuilder::new().has_headers(true).from_reader(source);

        let headers = rdr.headers()?.clone();
        let entity_pos = Self::column_position(&headers, ENTITY_COLUMN)?;
        let code_pos = Self::column_position(&headers, CODE_COLUMN)?;

        let mut table = CurrencyCodeTable::new();
        let mut rows = 0usize;
        let mut without_code = 0usize;

        for (idx, result) in rdr.records().enumerate() {
            let record = result?;
            rows += 1;

            let entity = Self::get_field(&record, entity_pos, ENTITY_COLUMN, idx + 2)?;
            let code = Self::get_field(&record, code_pos, CODE_COLUMN, idx + 2)?;

            // Entities such as "ANTARCTICA" have no universal currency.
            if code.trim().is_empty() {
                without_code += 1;
                continue;
            }
            table.insert(entity, code);
        }

        tracing::info!(rows, without_code, entities = table.len(), "Parsed currency code dataset");
        Ok(table)
    }

    pub fn load_codes_from_path<P: AsRef<Path>>(path: P) -> Result<CurrencyCodeTable, EngineError> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "Opening currency code dataset");
        let file = File::open(path)?;
        Self::load_codes(BufReader::new(file))
    }

    fn column_position(headers: &StringRecord, name: &str) -> Result<usize, EngineError> {
        headers
            .iter()
            .position(|header| header.trim() == name)
            .ok_or_else(|| EngineError::DataFormatError(format!("Missing '{}' column in currency code header", name)))
    }

    fn get_field<'a>(record: &'a StringRecord, pos: usize, name: &str, line: usize) -> Result<&'a str, EngineError> {
        record
            .get(pos)
            .ok_or_else(|| EngineError::DataFormatError(format!("Missing '{}' field in CSV record at line {}", name, line)))
    }
}
