//! QR payload resolution
//!
//! The camera and QR decoding are external capabilities; this module
//! receives the decoded payload string as-is. Parsing is structural (URL
//! first, then JSON), and a successfully parsed payload is always
//! verified against the backend before a candidate is produced. A parse
//! failure and a verification failure are different errors with different
//! guidance.

use std::sync::Arc;

use serde_json::Value;
use shared::models::{QrVerifyRequest, SignalMethod};
use url::Url;

use crate::api::OrderingApi;
use crate::error::{CheckInError, CheckInResult};
use crate::resolve::types::{Confidence, ResolutionCandidate};

/// Structured content of a table QR code
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrPayload {
    pub table_id: String,
    pub table_number: Option<String>,
    pub restaurant_id: Option<String>,
}

/// Parse a decoded QR payload.
///
/// Accepted forms, tried in order:
/// 1. a URL with `tableId` / `tableNumber` / `restaurantId` query params;
/// 2. a JSON object with the same fields.
///
/// Anything else is [`CheckInError::InvalidPayload`].
pub fn parse_qr_payload(payload: &str) -> CheckInResult<QrPayload> {
    let trimmed = payload.trim();

    if let Ok(parsed) = Url::parse(trimmed) {
        let mut table_id = None;
        let mut table_number = None;
        let mut restaurant_id = None;
        for (key, value) in parsed.query_pairs() {
            match key.as_ref() {
                "tableId" => table_id = Some(value.into_owned()),
                "tableNumber" => table_number = Some(value.into_owned()),
                "restaurantId" => restaurant_id = Some(value.into_owned()),
                _ => {}
            }
        }
        return match table_id {
            Some(table_id) => Ok(QrPayload {
                table_id,
                table_number,
                restaurant_id,
            }),
            None => Err(CheckInError::InvalidPayload(
                "URL is missing the tableId parameter".to_string(),
            )),
        };
    }

    if let Ok(Value::Object(obj)) = serde_json::from_str::<Value>(trimmed) {
        let field = |key: &str| {
            obj.get(key).and_then(|v| match v {
                Value::String(s) => Some(s.clone()),
                Value::Number(n) => Some(n.to_string()),
                _ => None,
            })
        };
        return match field("tableId") {
            Some(table_id) => Ok(QrPayload {
                table_id,
                table_number: field("tableNumber"),
                restaurant_id: field("restaurantId"),
            }),
            None => Err(CheckInError::InvalidPayload(
                "JSON object is missing the tableId field".to_string(),
            )),
        };
    }

    Err(CheckInError::InvalidPayload(
        "payload is neither a table URL nor a table JSON object".to_string(),
    ))
}

/// Resolver for scanned QR payloads
pub struct QrResolver {
    api: Arc<dyn OrderingApi>,
    restaurant_id: String,
}

impl QrResolver {
    pub fn new(api: Arc<dyn OrderingApi>, restaurant_id: impl Into<String>) -> Self {
        Self {
            api,
            restaurant_id: restaurant_id.into(),
        }
    }

    /// Parse and remotely verify a decoded payload
    pub async fn resolve(&self, payload: &str) -> CheckInResult<ResolutionCandidate> {
        let parsed = parse_qr_payload(payload)?;

        if let Some(restaurant_id) = &parsed.restaurant_id {
            if restaurant_id != &self.restaurant_id {
                return Err(CheckInError::VerificationFailed(format!(
                    "QR code belongs to restaurant '{restaurant_id}'"
                )));
            }
        }

        let table = match self
            .api
            .verify_qr_table(QrVerifyRequest {
                table_id: parsed.table_id.clone(),
                restaurant_id: self.restaurant_id.clone(),
            })
            .await
        {
            Ok(table) => table,
            // A backend rejection of a well-formed payload is a
            // verification failure, never an invalid payload
            Err(CheckInError::Api(err)) => {
                return Err(CheckInError::VerificationFailed(err.message));
            }
            Err(err) => return Err(err),
        };

        tracing::debug!(table = table.number, "QR table verified");
        Ok(ResolutionCandidate {
            table,
            distance_m: None,
            method: SignalMethod::Qr,
            confidence: Confidence::High,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_payload_parses() {
        let parsed =
            parse_qr_payload("https://x/?tableId=7&tableNumber=3&restaurantId=r1").unwrap();
        assert_eq!(parsed.table_id, "7");
        assert_eq!(parsed.table_number.as_deref(), Some("3"));
        assert_eq!(parsed.restaurant_id.as_deref(), Some("r1"));
    }

    #[test]
    fn json_payload_parses_equivalently() {
        let parsed = parse_qr_payload(r#"{"tableId":"7","tableNumber":"3"}"#).unwrap();
        assert_eq!(parsed.table_id, "7");
        assert_eq!(parsed.table_number.as_deref(), Some("3"));
        assert_eq!(parsed.restaurant_id, None);
    }

    #[test]
    fn json_numeric_fields_are_accepted() {
        let parsed = parse_qr_payload(r#"{"tableId":7,"tableNumber":3}"#).unwrap();
        assert_eq!(parsed.table_id, "7");
        assert_eq!(parsed.table_number.as_deref(), Some("3"));
    }

    #[test]
    fn garbage_is_invalid_payload() {
        let err = parse_qr_payload("not a url or json").unwrap_err();
        assert!(matches!(err, CheckInError::InvalidPayload(_)));
    }

    #[test]
    fn url_without_table_id_is_invalid_payload() {
        let err = parse_qr_payload("https://x/?restaurantId=r1").unwrap_err();
        assert!(matches!(err, CheckInError::InvalidPayload(_)));
    }

    #[test]
    fn json_without_table_id_is_invalid_payload() {
        let err = parse_qr_payload(r#"{"restaurantId":"r1"}"#).unwrap_err();
        assert!(matches!(err, CheckInError::InvalidPayload(_)));
    }
}
