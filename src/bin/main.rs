use std::io;
use std::process::ExitCode;

use tracing::error;
use wireshark_dict_tool::convert;

fn main() -> ExitCode {
    match convert(io::stdin().lock(), io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
