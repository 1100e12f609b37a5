use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("Failed to decode wireshark dictionary: {0}")]
    Decode(#[source] quick_xml::DeError),

    #[error("Failed to encode diameter dictionary: {0}")]
    Encode(#[source] quick_xml::DeError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
