//! Wireshark diameter dictionary, as shipped in `diameter/dictionary.xml`
//! and the per-vendor files it includes.
//!
//! Lists may be interleaved with each other and with elements this model does
//! not know (`<base>`, `<typedefn>`, ...), as in merged vendor files.

use std::io::BufRead;

use serde::Deserialize;

use crate::{
    error::ConvertError,
    flags::{Mandatory, MayEncrypt, Protected},
};

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename = "dictionary")]
pub struct Dictionary {
    #[serde(rename = "vendor", default)]
    pub vendors: Vec<Vendor>,
    #[serde(rename = "application", default)]
    pub applications: Vec<Application>,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct Vendor {
    /// Symbolic tag referenced by `<avp vendor-id="..">`.
    #[serde(rename = "@vendor-id")]
    pub vendor_id: Option<String>,
    #[serde(rename = "@code", alias = "@id", default)]
    pub code: u32,
    #[serde(rename = "@name", default)]
    pub name: String,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct Application {
    #[serde(rename = "@id", default)]
    pub id: u32,
    #[serde(rename = "@type", default)]
    pub app_type: String,
    #[serde(rename = "@name", default)]
    pub name: String,
    #[serde(rename = "command", default)]
    pub commands: Vec<Command>,
    #[serde(rename = "avp", default)]
    pub avps: Vec<Avp>,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct Command {
    #[serde(rename = "@code", default)]
    pub code: u32,
    #[serde(rename = "@name", default)]
    pub name: String,
    #[serde(rename = "request", default)]
    pub request: CommandRules,
    #[serde(rename = "answer", default)]
    pub answer: CommandRules,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct CommandRules {
    #[serde(rename = "fixed", default)]
    pub fixed: RuleList,
    #[serde(rename = "required", default)]
    pub required: RuleList,
    #[serde(rename = "optional", default)]
    pub optional: RuleList,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct RuleList {
    #[serde(rename = "avp", default)]
    pub rules: Vec<Rule>,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct Rule {
    #[serde(rename = "@name", default)]
    pub name: String,
    #[serde(rename = "@min", default)]
    pub min: u32,
    #[serde(rename = "@max", default)]
    pub max: u32,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct Avp {
    #[serde(rename = "@name", default)]
    pub name: String,
    #[serde(rename = "@code", default)]
    pub code: u32,
    #[serde(rename = "@mandatory", default)]
    pub mandatory: Mandatory,
    #[serde(rename = "@may-encrypt", default)]
    pub may_encrypt: MayEncrypt,
    #[serde(rename = "@protected", default)]
    pub protected: Protected,
    #[serde(rename = "@vendor-id")]
    pub vendor_id: Option<String>,
    #[serde(rename = "type")]
    pub data_type: Option<AvpType>,
    #[serde(rename = "enum", default)]
    pub enums: Vec<EnumValue>,
    #[serde(rename = "grouped", default)]
    pub grouped: Vec<Grouped>,
}

impl Avp {
    pub fn type_name(&self) -> &str {
        self.data_type
            .as_ref()
            .map(|t| t.type_name.as_str())
            .unwrap_or_default()
    }
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct AvpType {
    #[serde(rename = "@type-name", default)]
    pub type_name: String,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct EnumValue {
    #[serde(rename = "@name", default)]
    pub name: String,
    #[serde(rename = "@code", default)]
    pub code: i32,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct Grouped {
    #[serde(rename = "gavp", default)]
    pub members: Vec<Rule>,
    #[serde(rename = "required", default)]
    pub required: RuleList,
    #[serde(rename = "optional", default)]
    pub optional: RuleList,
}

/// Decodes a whole dictionary. Bytes that are not UTF-8 are a decode error.
pub fn parse_dictionary<R: BufRead>(reader: R) -> Result<Dictionary, ConvertError> {
    quick_xml::de::from_reader(reader).map_err(ConvertError::Decode)
}
