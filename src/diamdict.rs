//! Diameter dictionary in the format loaded by go-diameter's `diamdict`
//! package.

use serde::{Deserialize, Serialize};

use crate::error::ConvertError;

pub const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename = "diameter")]
pub struct File {
    #[serde(rename = "application", default)]
    pub applications: Vec<Application>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Application {
    #[serde(rename = "@id")]
    pub id: u32,
    #[serde(rename = "@type")]
    pub app_type: String,
    #[serde(rename = "@name")]
    pub name: String,
    #[serde(rename = "vendor", default)]
    pub vendors: Vec<Vendor>,
    #[serde(rename = "command", default)]
    pub commands: Vec<Command>,
    #[serde(rename = "avp", default)]
    pub avps: Vec<Avp>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Vendor {
    #[serde(rename = "@id")]
    pub id: u32,
    #[serde(rename = "@name")]
    pub name: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Command {
    #[serde(rename = "@code")]
    pub code: u32,
    #[serde(rename = "@name")]
    pub name: String,
    #[serde(rename = "@short")]
    pub short: String,
    #[serde(rename = "request", default)]
    pub request: CommandRules,
    #[serde(rename = "answer", default)]
    pub answer: CommandRules,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct CommandRules {
    #[serde(rename = "rule", default)]
    pub rules: Vec<Rule>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Rule {
    #[serde(rename = "@avp")]
    pub avp: String,
    #[serde(rename = "@required")]
    pub required: bool,
    #[serde(rename = "@min")]
    pub min: u32,
    #[serde(rename = "@max")]
    pub max: u32,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Avp {
    #[serde(rename = "@name")]
    pub name: String,
    #[serde(rename = "@code")]
    pub code: u32,
    #[serde(rename = "@must", default, skip_serializing_if = "Option::is_none")]
    pub must: Option<String>,
    #[serde(rename = "@may", default, skip_serializing_if = "Option::is_none")]
    pub may: Option<String>,
    #[serde(rename = "@may-encrypt")]
    pub may_encrypt: String,
    #[serde(rename = "@vendor-id", default, skip_serializing_if = "Option::is_none")]
    pub vendor_id: Option<u32>,
    #[serde(rename = "data")]
    pub data: Data,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Data {
    #[serde(rename = "@type", default)]
    pub type_name: String,
    #[serde(rename = "item", default)]
    pub enums: Vec<Enum>,
    #[serde(rename = "rule", default)]
    pub rules: Vec<Rule>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Enum {
    #[serde(rename = "@name")]
    pub name: String,
    #[serde(rename = "@code")]
    pub code: i32,
}

/// Renders the XML declaration followed by the tab-indented document.
pub fn to_xml(file: &File) -> Result<String, ConvertError> {
    let mut xml = String::from(XML_DECLARATION);
    xml.push('\n');

    let mut serializer = quick_xml::se::Serializer::new(&mut xml);
    serializer.indent('\t', 1);
    file.serialize(serializer).map_err(ConvertError::Encode)?;

    xml.push('\n');
    Ok(xml)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> File {
        File {
            applications: vec![Application {
                id: 4,
                app_type: "auth".to_string(),
                name: "Diameter Credit Control".to_string(),
                vendors: vec![Vendor {
                    id: 10415,
                    name: "3GPP".to_string(),
                }],
                commands: vec![Command {
                    code: 272,
                    name: "Credit-Control".to_string(),
                    short: "Credit-Control".to_string(),
                    request: CommandRules {
                        rules: vec![Rule {
                            avp: "Session-Id".to_string(),
                            required: true,
                            min: 1,
                            max: 1,
                        }],
                    },
                    answer: CommandRules::default(),
                }],
                avps: vec![Avp {
                    name: "CC-Request-Type".to_string(),
                    code: 416,
                    must: Some("M".to_string()),
                    may: None,
                    may_encrypt: "-".to_string(),
                    vendor_id: None,
                    data: Data {
                        type_name: "Enumerated".to_string(),
                        enums: vec![Enum {
                            name: "INITIAL_REQUEST".to_string(),
                            code: 1,
                        }],
                        rules: Vec::new(),
                    },
                }],
            }],
        }
    }

    #[test]
    fn test_to_xml_layout() {
        let xml = to_xml(&sample()).unwrap();

        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<diameter>"));
        assert!(xml.contains("\n\t<application id=\"4\" type=\"auth\" name=\"Diameter Credit Control\">"));
        assert!(xml.contains("\n\t\t<vendor id=\"10415\" name=\"3GPP\"/>"));
        assert!(xml.contains(
            "<rule avp=\"Session-Id\" required=\"true\" min=\"1\" max=\"1\"/>"
        ));
        assert!(xml.contains("<item name=\"INITIAL_REQUEST\" code=\"1\"/>"));
        assert!(xml.ends_with("</diameter>\n"));
    }

    #[test]
    fn test_unset_flags_are_omitted() {
        let mut file = sample();
        let xml = to_xml(&file).unwrap();
        assert!(xml.contains("must=\"M\""));
        assert!(!xml.contains(" may=\""));
        assert!(!xml.contains("vendor-id="));

        let avp = &mut file.applications[0].avps[0];
        avp.must = None;
        avp.may = Some(String::new());
        avp.vendor_id = Some(10415);
        let xml = to_xml(&file).unwrap();
        assert!(!xml.contains("must="));
        assert!(xml.contains(" may=\"\""));
        assert!(xml.contains("vendor-id=\"10415\""));
    }

    #[test]
    fn test_to_xml_reads_back() {
        let file = sample();
        let xml = to_xml(&file).unwrap();
        let parsed: File = quick_xml::de::from_str(&xml).unwrap();
        assert_eq!(parsed, file);
    }
}
