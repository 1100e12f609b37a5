//! AVP flag attributes of the wireshark dictionary and the codes they map to
//! in a diameter dictionary.

use serde::Deserialize;

const MUST: &str = "M";
const PROTECTED: &str = "P";
const ENCRYPT_YES: &str = "Y";
const ENCRYPT_NO: &str = "N";
const ENCRYPT_UNSPECIFIED: &str = "-";

/// The `mandatory` attribute of a wireshark AVP.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(from = "String")]
pub enum Mandatory {
    Must,
    May,
    #[default]
    Unspecified,
}

impl From<String> for Mandatory {
    fn from(value: String) -> Self {
        match value.as_str() {
            "must" => Mandatory::Must,
            "may" => Mandatory::May,
            _ => Mandatory::Unspecified,
        }
    }
}

/// The `may-encrypt` attribute of a wireshark AVP.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(from = "String")]
pub enum MayEncrypt {
    Yes,
    No,
    #[default]
    Unspecified,
}

impl From<String> for MayEncrypt {
    fn from(value: String) -> Self {
        match value.as_str() {
            "yes" => MayEncrypt::Yes,
            "no" => MayEncrypt::No,
            _ => MayEncrypt::Unspecified,
        }
    }
}

impl MayEncrypt {
    pub fn code(self) -> &'static str {
        match self {
            MayEncrypt::Yes => ENCRYPT_YES,
            MayEncrypt::No => ENCRYPT_NO,
            MayEncrypt::Unspecified => ENCRYPT_UNSPECIFIED,
        }
    }
}

/// The `protected` attribute of a wireshark AVP.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(from = "String")]
pub enum Protected {
    May,
    #[default]
    Unspecified,
}

impl From<String> for Protected {
    fn from(value: String) -> Self {
        match value.as_str() {
            "may" => Protected::May,
            _ => Protected::Unspecified,
        }
    }
}

/// The `must` and `may` codes of a diameter AVP. `None` leaves the attribute
/// out of the element, `Some("")` writes it empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MustMay {
    pub must: Option<&'static str>,
    pub may: Option<&'static str>,
}

impl MustMay {
    /// `protected` only matters when the AVP is `mandatory="may"`.
    pub fn new(mandatory: Mandatory, protected: Protected) -> Self {
        match mandatory {
            Mandatory::Must => Self {
                must: Some(MUST),
                may: None,
            },
            Mandatory::May => Self {
                must: None,
                may: Some(match protected {
                    Protected::May => PROTECTED,
                    Protected::Unspecified => "",
                }),
            },
            Mandatory::Unspecified => Self {
                must: Some(""),
                may: None,
            },
        }
    }
}
