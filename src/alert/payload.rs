//! Alert payload decoding.

use serde_json::Value;

use crate::error::ReceiverError;

/// The decode outcome of one request body.
///
/// Constructed per request and dropped once recorded; the receiver holds
/// no durable state.
#[derive(Debug, Clone, PartialEq)]
pub enum AlertPayload {
    /// The body was a valid JSON document (object, array, string, number,
    /// bool, or null).
    Decoded(Value),

    /// The body was not valid JSON. Carries the decode error text so the
    /// failure is still visible in the observation sink.
    Undecodable { error: String },
}

impl AlertPayload {
    /// Decode a request body. Malformed input becomes
    /// [`AlertPayload::Undecodable`] rather than an error; the listener
    /// must acknowledge the request either way.
    pub fn decode(body: &[u8]) -> Self {
        match serde_json::from_slice::<Value>(body) {
            Ok(document) => AlertPayload::Decoded(document),
            Err(e) => AlertPayload::Undecodable {
                error: ReceiverError::MalformedPayload(e).to_string(),
            },
        }
    }

    /// Whether the body decoded successfully.
    pub fn is_decoded(&self) -> bool {
        matches!(self, AlertPayload::Decoded(_))
    }
}

impl std::fmt::Display for AlertPayload {
    /// Decoded payloads render as compact JSON, so the recorded line can
    /// be parsed back into a document structurally equal to the one
    /// submitted.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AlertPayload::Decoded(document) => write!(f, "{}", document),
            AlertPayload::Undecodable { error } => write!(f, "<undecodable: {}>", error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_any_json_document() {
        assert!(AlertPayload::decode(b"{}").is_decoded());
        assert!(AlertPayload::decode(b"[1, 2, 3]").is_decoded());
        assert!(AlertPayload::decode(b"null").is_decoded());
        assert!(AlertPayload::decode(br#"{"a":{"b":{"c":[1,"x",true]}}}"#).is_decoded());
    }

    #[test]
    fn malformed_body_is_undecodable_not_a_panic() {
        let payload = AlertPayload::decode(b"not json");
        match payload {
            AlertPayload::Undecodable { error } => {
                assert!(error.contains("malformed payload"));
            }
            AlertPayload::Decoded(_) => panic!("garbage must not decode"),
        }
    }

    #[test]
    fn empty_body_is_undecodable() {
        assert!(!AlertPayload::decode(b"").is_decoded());
    }

    #[test]
    fn display_round_trips_to_an_equal_document() {
        let document = json!({
            "alert": "disk_full",
            "severity": "critical",
            "details": {"free_bytes": 0, "mounts": ["/", "/var"]},
            "silenced": null,
        });
        let payload = AlertPayload::decode(document.to_string().as_bytes());

        let reparsed: Value = serde_json::from_str(&payload.to_string()).unwrap();
        assert_eq!(reparsed, document);
    }
}
