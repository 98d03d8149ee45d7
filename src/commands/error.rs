//! Command Gateway Errors
//!
//! Rejected invoke payloads are untyped on the wire; this module validates
//! them into a discriminated error type so the views never touch raw values.

use std::collections::HashMap;
use std::fmt;

use serde::Deserialize;
use wasm_bindgen::JsValue;

/// One field-level validation failure, as serialized by the backend.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FieldError {
    pub code: String,
    #[serde(default)]
    pub message: Option<String>,
}

impl FieldError {
    /// Human-readable text, falling back to the machine code.
    pub fn text(&self) -> &str {
        self.message.as_deref().unwrap_or(&self.code)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
struct UnknownPayload {
    #[serde(default)]
    description: Option<String>,
}

/// Wire shape of a rejection: a single-entry map tagging the kind.
#[derive(Debug, Clone, PartialEq, Deserialize)]
enum GatewayPayload {
    #[serde(rename = "validation")]
    Validation(HashMap<String, Vec<FieldError>>),
    #[serde(rename = "unknown")]
    Unknown(UnknownPayload),
}

/// Typed outcome of a failed command invocation.
#[derive(Debug, Clone, PartialEq)]
pub enum CommandError {
    /// Field-level validation failures, keyed by field name.
    Validation(HashMap<String, Vec<FieldError>>),
    /// Backend failure the gateway could not classify.
    Unknown { description: Option<String> },
    /// The invocation itself failed, or the payload was undecodable.
    Invoke(String),
}

impl CommandError {
    /// Decode the payload of a rejected invoke promise.
    pub fn from_rejection(value: JsValue) -> Self {
        match serde_wasm_bindgen::from_value::<GatewayPayload>(value) {
            Ok(GatewayPayload::Validation(fields)) => CommandError::Validation(fields),
            Ok(GatewayPayload::Unknown(payload)) => CommandError::Unknown {
                description: payload.description,
            },
            Err(err) => CommandError::Invoke(err.to_string()),
        }
    }

    pub fn from_decode(err: serde_wasm_bindgen::Error) -> Self {
        CommandError::Invoke(err.to_string())
    }

    /// Messages attached to one field by a validation failure.
    pub fn field_messages(&self, field: &str) -> Vec<String> {
        match self {
            CommandError::Validation(fields) => fields
                .get(field)
                .map(|errors| errors.iter().map(|e| e.text().to_string()).collect())
                .unwrap_or_default(),
            _ => Vec::new(),
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, CommandError::Validation(_))
    }
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::Validation(fields) => {
                write!(f, "validation failed for {} field(s)", fields.len())
            }
            CommandError::Unknown {
                description: Some(description),
            } => write!(f, "{}", description),
            CommandError::Unknown { description: None } => write!(f, "unknown backend error"),
            CommandError::Invoke(message) => write!(f, "command invocation failed: {}", message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_validation_payload() {
        let json = r#"{"validation":{"name":[{"code":"length","message":"required","params":{"min":3}}]}}"#;
        let payload: GatewayPayload = serde_json::from_str(json).unwrap();

        let GatewayPayload::Validation(fields) = payload else {
            panic!("expected validation payload");
        };
        assert_eq!(fields["name"].len(), 1);
        assert_eq!(fields["name"][0].text(), "required");
    }

    #[test]
    fn decodes_unknown_payload() {
        let json = r#"{"unknown":{"description":"disk on fire","source":null}}"#;
        let payload: GatewayPayload = serde_json::from_str(json).unwrap();

        assert_eq!(
            payload,
            GatewayPayload::Unknown(UnknownPayload {
                description: Some("disk on fire".to_string())
            })
        );
    }

    #[test]
    fn message_falls_back_to_code() {
        let json = r#"{"validation":{"name":[{"code":"length","message":null}]}}"#;
        let payload: GatewayPayload = serde_json::from_str(json).unwrap();

        let GatewayPayload::Validation(fields) = payload else {
            panic!("expected validation payload");
        };
        assert_eq!(fields["name"][0].text(), "length");
    }

    #[test]
    fn field_messages_only_for_matching_field() {
        let error = CommandError::Validation(HashMap::from([(
            "name".to_string(),
            vec![FieldError {
                code: "length".to_string(),
                message: Some("required".to_string()),
            }],
        )]));

        assert_eq!(error.field_messages("name"), vec!["required".to_string()]);
        assert!(error.field_messages("description").is_empty());
        assert!(error.is_validation());
    }

    #[test]
    fn non_validation_errors_have_no_field_messages() {
        let error = CommandError::Unknown { description: None };
        assert!(error.field_messages("name").is_empty());
        assert_eq!(error.to_string(), "unknown backend error");
    }
}
