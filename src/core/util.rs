//! Input helpers shared by the CLI commands.

use std::io::Read;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::core::error::AppError;

/// Read a whole input: a file path, or stdin when `source` is "-".
pub fn read_input(source: &str) -> Result<String, AppError> {
    if source == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .map_err(AppError::Stdin)?;
        return Ok(buf);
    }
    std::fs::read_to_string(source).map_err(|e| AppError::Read {
        path: Path::new(source).to_path_buf(),
        source: e,
    })
}

/// Parse JSON read from `origin` (used in error messages). Blank input is an error.
pub fn parse_json<T: DeserializeOwned>(data: &str, origin: &str) -> Result<T, AppError> {
    if data.trim().is_empty() {
        return Err(AppError::EmptyInput(display_origin(origin)));
    }
    serde_json::from_str(data).map_err(|source| AppError::Json {
        origin: display_origin(origin),
        source,
    })
}

/// Read and parse a JSON input in one step.
pub fn load_json<T: DeserializeOwned>(source: &str) -> Result<T, AppError> {
    let data = read_input(source)?;
    parse_json(&data, source)
}

fn display_origin(origin: &str) -> String {
    if origin == "-" {
        "stdin".to_string()
    } else {
        origin.to_string()
    }
}
