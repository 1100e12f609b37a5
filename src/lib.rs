pub mod convert;
pub mod diamdict;
mod error;
pub mod flags;
pub mod wireshark;

use std::io::{Read, Write};
use std::sync::Once;

use tracing::info;

pub use error::ConvertError;

static INIT: Once = Once::new();

fn initialize_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::INFO)
            .with_writer(std::io::stderr)
            .init();
    });
}

pub fn convert_str(input: &str) -> Result<String, ConvertError> {
    convert_bytes(input.as_bytes())
}

/// Converts a wireshark dictionary document into a diameter dictionary
/// document. Nothing is written unless the whole input decodes.
pub fn convert_bytes(input: &[u8]) -> Result<String, ConvertError> {
    let dictionary = wireshark::parse_dictionary(input)?;
    let file = convert::convert_dictionary(&dictionary);

    info!(
        "Converted {} application(s) with {} command(s) and {} AVP(s)",
        file.applications.len(),
        file.applications.iter().map(|a| a.commands.len()).sum::<usize>(),
        file.applications.iter().map(|a| a.avps.len()).sum::<usize>()
    );

    diamdict::to_xml(&file)
}

pub fn convert<R: Read, W: Write>(mut input: R, mut output: W) -> Result<(), ConvertError> {
    initialize_tracing();
    let mut xml = Vec::new();
    input.read_to_end(&mut xml)?;
    let converted = convert_bytes(&xml)?;
    output.write_all(converted.as_bytes())?;
    output.flush()?;
    Ok(())
}
