use crate::error::Error;
use crate::Value;

/// Parses raw text as a comma-separated list of integers.
///
/// Tokens are trimmed and blank tokens are skipped, so `"1, 2,,3"` is fine.
/// The whole input is rejected if any token fails to parse; the heap never
/// sees a partial batch.
pub fn parse_values(text: &str) -> Result<Vec<Value>, Error> {
    let mut values = Vec::new();
    for token in text.split(',') {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }
        match token.parse::<Value>() {
            Ok(value) => values.push(value),
            Err(_) => return Err(Error::InvalidValue(token.to_string())),
        }
    }
    Ok(values)
}
