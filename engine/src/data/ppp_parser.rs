use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use ppp_shared::models::PppRecord;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::error::EngineError;
use crate::models::PppFactorTable;

pub const COUNTRY_FIELD: &str = "Country or Area";
pub const YEAR_FIELD: &str = "Year";
pub const VALUE_FIELD: &str = "Value";

const RECORD_TAG: &[u8] = b"record";
const FIELD_TAG: &[u8] = b"field";

// Field texts collected for one <record>, before numeric parsing.
#[derive(Default)]
struct RawRecord {
    country: Option<String>,
    year: Option<String>,
    value: Option<String>,
}

impl RawRecord {
    fn set(&mut self, field: &str, text: String) {
        let slot = match field {
            COUNTRY_FIELD => &mut self.country,
            YEAR_FIELD => &mut self.year,
            VALUE_FIELD => &mut self.value,
            _ => return,
        };
        // First occurrence of a field name wins.
        if slot.is_none() {
            *slot = Some(text);
        }
    }

    fn into_record(self, number: usize) -> Result<PppRecord, EngineError> {
        let country = self
            .country
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty())
            .ok_or_else(|| missing_field(COUNTRY_FIELD, number))?;

        let year_str = self.year.ok_or_else(|| missing_field(YEAR_FIELD, number))?;
        let year = year_str.trim().parse::<i32>().map_err(|e| {
            EngineError::DataFormatError(format!(
                "Error parsing '{}' in record {}: '{}' ({})",
                YEAR_FIELD, number, year_str, e
            ))
        })?;

        let value_str = self.value.ok_or_else(|| missing_field(VALUE_FIELD, number))?;
        let value = match value_str.trim() {
            "" => None,
            v => Some(v.parse::<f64>().map_err(|e| {
                EngineError::DataFormatError(format!(
                    "Error parsing '{}' in record {}: '{}' ({})",
                    VALUE_FIELD, number, v, e
                ))
            })?),
        };

        Ok(PppRecord { country, year, value })
    }
}

fn missing_field(name: &str, number: usize) -> EngineError {
    EngineError::DataFormatError(format!("Missing '{}' field in record {}", name, number))
}

fn field_name(element: &BytesStart<'_>) -> Result<Option<String>, EngineError> {
    match element.try_get_attribute("name")? {
        Some(attr) => Ok(Some(attr.unescape_value()?.into_owned())),
        None => Ok(None),
    }
}

/// Reduces records to the latest valued factor per country.
pub fn latest_factors(records: &[PppRecord]) -> PppFactorTable {
    records.iter().collect()
}

/// Reader for the UN data XML export of PPP conversion factors.
///
/// Expected shape: `<record>` elements at any depth, each holding
/// `<field name="...">` children. Only the country, year and value fields are
/// read; a `Value` field that is empty or self-closing marks a missing value.
pub struct PppXmlParser;

impl PppXmlParser {
    pub fn parse_records<R: BufRead>(source: R) -> Result<Vec<PppRecord>, EngineError> {
        let mut reader = Reader::from_reader(source);
        reader.trim_text(true);

        let mut buf = Vec::new();
        let mut records = Vec::new();
        let mut current: Option<RawRecord> = None;
        // (field name, accumulated text) of the <field> being read
        let mut field: Option<(String, String)> = None;

        loop {
            match reader.read_event_into(&mut buf)? {
                Event::Start(e) if e.name().as_ref() == RECORD_TAG => {
                    current = Some(RawRecord::default());
                }
                Event::Empty(e) if e.name().as_ref() == RECORD_TAG => {
                    records.push(RawRecord::default().into_record(records.len() + 1)?);
                }
                Event::Start(e) if e.name().as_ref() == FIELD_TAG && current.is_some() => {
                    field = Some((field_name(&e)?.unwrap_or_default(), String::new()));
                }
                Event::Empty(e) if e.name().as_ref() == FIELD_TAG => {
                    if let Some(raw) = current.as_mut() {
                        raw.set(&field_name(&e)?.unwrap_or_default(), String::new());
                    }
                }
                Event::Text(t) => {
                    if let Some((_, text)) = field.as_mut() {
                        text.push_str(&t.unescape()?);
                    }
                }
                Event::CData(t) => {
                    if let Some((_, text)) = field.as_mut() {
                        text.push_str(&String::from_utf8_lossy(&t));
                    }
                }
                Event::End(e) if e.name().as_ref() == FIELD_TAG => {
                    if let (Some((name, text)), Some(raw)) = (field.take(), current.as_mut()) {
                        raw.set(&name, text);
                    }
                }
                Event::End(e) if e.name().as_ref() == RECORD_TAG => {
                    if let Some(raw) = current.take() {
                        records.push(raw.into_record(records.len() + 1)?);
                    }
                }
                Event::Eof => break,
                _ => {}
            }
            buf.clear();
        }

        Ok(records)
    }

    pub fn load_factors<R: BufRead>(source: R) -> Result<PppFactorTable, EngineError> {
        let records = Self::parse_records(source)?;
        let missing_values = records.iter().filter(|r| r.value.is_none()).count();
        let table = latest_factors(&records);
        tracing::info!(
            records = records.len(),
            missing_values,
            countries = table.len(),
            "Parsed PPP factor dataset"
        );
        Ok(table)
    }

    pub fn load_factors_from_path<P: AsRef<Path>>(path: P) -> Result<PppFactorTable, EngineError> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "Opening PPP factor dataset");
        let file = File::open(path)?;
        Self::load_factors(BufReader::new(file))
    }
}
