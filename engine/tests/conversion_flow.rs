use std::io::Write;
use std::sync::Arc;

use ppp_engine::config::{EngineSettings, FactorPolicy};
use ppp_engine::{ConversionService, ErrorKind, LoadedData};
use ppp_shared::models::ConversionRequest;
use tempfile::NamedTempFile;

const PPP_XML: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<ROOT xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">
  <data>
    <record>
      <field name="Country or Area" key="FRA">France</field>
      <field name="Item" key="PA.NUS.PPP">PPP conversion factor, GDP (LCU per international $)</field>
      <field name="Year">2010</field>
      <field name="Value">0.9</field>
    </record>
    <record>
      <field name="Country or Area" key="FRA">France</field>
      <field name="Item" key="PA.NUS.PPP">PPP conversion factor, GDP (LCU per international $)</field>
      <field name="Year">2015</field>
      <field name="Value">0.85</field>
    </record>
    <record>
      <field name="Country or Area" key="FRA">France</field>
      <field name="Item" key="PA.NUS.PPP">PPP conversion factor, GDP (LCU per international $)</field>
      <field name="Year">2020</field>
      <field name="Value" />
    </record>
    <record>
      <field name="Country or Area" key="USA">United States</field>
      <field name="Item" key="PA.NUS.PPP">PPP conversion factor, GDP (LCU per international $)</field>
      <field name="Year">2015</field>
      <field name="Value">1</field>
    </record>
    <record>
      <field name="Country or Area" key="TUV">Tuvalu</field>
      <field name="Item" key="PA.NUS.PPP">PPP conversion factor, GDP (LCU per international $)</field>
      <field name="Year">2015</field>
      <field name="Value">0</field>
    </record>
  </data>
</ROOT>"#;

const CODES_CSV: &str = "\
Entity,Currency,AlphabeticCode,NumericCode,MinorUnit,WithdrawalDate
FRANCE,Euro,EUR,978,2,
UNITED STATES,US Dollar,USD,840,2,
ANTARCTICA,No universal currency,,,,";

fn write_temp(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", content).unwrap();
    file.flush().unwrap();
    file
}

fn settings(ppp: &NamedTempFile, codes: &NamedTempFile, factor_policy: FactorPolicy) -> EngineSettings {
    EngineSettings {
        ppp_data_path: ppp.path().to_path_buf(),
        currency_data_path: codes.path().to_path_buf(),
        factor_policy,
    }
}

#[test]
fn test_load_and_convert() {
    let ppp = write_temp(PPP_XML);
    let codes = write_temp(CODES_CSV);
    let data = LoadedData::load(&settings(&ppp, &codes, FactorPolicy::Keep)).unwrap();
    let service = ConversionService::new(Arc::new(data));

    assert_eq!(service.list_countries(), vec!["France", "Tuvalu", "United States"]);
    assert_eq!(service.data().ppp_factors().get("France"), Some(0.85));
    assert_eq!(service.currency_code("france"), "EUR");
    assert_eq!(service.currency_code("Tuvalu"), "Unknown");

    let response = service
        .handle_convert(ConversionRequest::new("France", "United States", 80000.0))
        .unwrap();
    assert!(response.success);
    assert!((response.converted_salary.unwrap() - 94117.647).abs() < 1e-3);
    assert!(response.message.starts_with("You require a salary of 94117.65 USD in United States"));

    let back = service
        .handle_convert(ConversionRequest::new("United States", "France", response.converted_salary.unwrap()))
        .unwrap();
    assert!((back.converted_salary.unwrap() - 80000.0).abs() < 1e-6);
}

#[test]
fn test_zero_factor_surfaces_at_conversion_with_keep_policy() {
    let ppp = write_temp(PPP_XML);
    let codes = write_temp(CODES_CSV);
    let data = LoadedData::load(&settings(&ppp, &codes, FactorPolicy::Keep)).unwrap();
    let service = ConversionService::new(Arc::new(data));

    let err = service
        .handle_convert(ConversionRequest::new("Tuvalu", "France", 1000.0))
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Arithmetic);
}

#[test]
fn test_zero_factor_fails_load_with_reject_policy() {
    let ppp = write_temp(PPP_XML);
    let codes = write_temp(CODES_CSV);
    let err = LoadedData::load(&settings(&ppp, &codes, FactorPolicy::Reject)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DataFormat);
    assert!(err.to_string().contains("Tuvalu"));
}

#[test]
fn test_loading_twice_yields_equal_data() {
    let ppp = write_temp(PPP_XML);
    let codes = write_temp(CODES_CSV);
    let settings = settings(&ppp, &codes, FactorPolicy::Keep);
    assert_eq!(LoadedData::load(&settings).unwrap(), LoadedData::load(&settings).unwrap());
}
