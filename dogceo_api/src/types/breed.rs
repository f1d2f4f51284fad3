//! Wire format of `GET /api/breed/{breed}/list`.

use std::borrow::Cow;

use serde::Deserialize;
use serde_json::Value;

/// Response body of the sub-breed listing endpoint.
///
/// Both fields are optional on the wire. Any other field the API sends
/// (`code` on errors, for instance) is ignored.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct SubBreedsResponse {
    #[serde(default)]
    pub status: Option<Value>,
    #[serde(default)]
    pub message: Option<Value>,
}

/// The `message` array held an element that is not a string.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("message[{index}] is not a string")]
pub struct DecodeError {
    pub index: usize,
}

impl SubBreedsResponse {
    /// Parses a response body. The top level must be a JSON object.
    pub fn from_body(body: &str) -> Result<Self, serde_json::Error> {
        let root: serde_json::Map<String, Value> = serde_json::from_str(body)?;
        serde_json::from_value(Value::Object(root))
    }

    /// The reported status. A missing or null status reads as `"error"`;
    /// a non-string status is rendered as its JSON text.
    pub fn status_text(&self) -> Cow<'_, str> {
        match &self.status {
            None | Some(Value::Null) => Cow::Borrowed("error"),
            Some(Value::String(s)) => Cow::Borrowed(s.as_str()),
            Some(other) => Cow::Owned(other.to_string()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status_text().eq_ignore_ascii_case("success")
    }

    /// Extracts the sub-breed names in array order.
    ///
    /// A `message` that is absent or not an array yields an empty list.
    /// Elements are never skipped: the first non-string one is an error.
    pub fn into_sub_breeds(self) -> Result<Vec<String>, DecodeError> {
        let items = match self.message {
            Some(Value::Array(items)) => items,
            _ => return Ok(Vec::new()),
        };
        items
            .into_iter()
            .enumerate()
            .map(|(index, item)| match item {
                Value::String(name) => Ok(name),
                _ => Err(DecodeError { index }),
            })
            .collect()
    }
}
