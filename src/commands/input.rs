//! Reading raw git output from a file or stdin.

use crate::error::{DiffscanError, Result};
use log::debug;
use std::io::Read;

/// Read the whole input. `-` means stdin.
///
/// Invalid UTF-8 is replaced rather than rejected; git passes file content
/// through untouched and a stray byte shouldn't sink the whole parse.
pub(super) fn read_input(source: &str) -> Result<String> {
    let mut bytes = Vec::new();

    if source == "-" {
        std::io::stdin().lock().read_to_end(&mut bytes)?;
    } else {
        bytes = std::fs::read(source).map_err(|e| {
            DiffscanError::UserError(format!("failed to read input '{}': {}", source, e))
        })?;
    }

    debug!("read {} bytes from {}", bytes.len(), source);
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
