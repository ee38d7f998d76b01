use serde::Deserialize;
use serde_json::Value;

use crate::error::CheckinError;
use crate::models::CheckInResponse;

/// Decode a raw check-in response body.
///
/// Works on the body alone; the HTTP status line is not consulted. Only a body that
/// isn't a JSON object is an error. Missing or mistyped fields come back empty.
/// Invalid UTF-8 is replaced with U+FFFD rather than failing the decode.
pub fn decode_response(body: &[u8]) -> Result<CheckInResponse, CheckinError> {
    let text = String::from_utf8_lossy(body);
    let value: Value = serde_json::from_str(&text)?;

    if !value.is_object() {
        return Err(CheckinError::UnexpectedBody("expected a JSON object"));
    }

    Ok(CheckInResponse::deserialize(value)?)
}
