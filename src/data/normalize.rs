//! Ticker canonicalisation.

use crate::error::AnalysisError;

const MAX_TICKER_LEN: usize = 5;

/// Trim and uppercase a user-supplied ticker, rejecting anything that cannot
/// be a listed symbol.
pub fn ticker(raw: &str) -> Result<String, AnalysisError> {
    let symbol = raw.trim().to_ascii_uppercase();
    let valid = !symbol.is_empty()
        && symbol.len() <= MAX_TICKER_LEN
        && symbol
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-');
    if valid {
        Ok(symbol)
    } else {
        Err(AnalysisError::InvalidTicker(raw.to_string()))
    }
}
