//! Job definition forwarded on save.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::CoreError;

/// Job definition accepted by `POST /v2/jobs`.
///
/// Only these six fields are sent; anything else in the source document is
/// dropped on deserialization. Field values other than `name` are forwarded
/// as written, whatever their JSON type. Absent optional fields are omitted
/// from the request body rather than sent as `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobSpec {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<Value>,
    /// String or argv array, passed through as given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memory: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vcpus: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub environment: Option<Value>,
}

impl JobSpec {
    /// Check the definition is addressable before it is sent.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] if the job name is blank.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.name.trim().is_empty() {
            return Err(CoreError::Validation("job name must not be empty".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn unknown_fields_are_dropped_and_absent_fields_omitted() {
        let spec: JobSpec = serde_json::from_value(json!({
            "name": "nightly-train",
            "image": "c12e/train:latest",
            "vcpus": 2,
            "owner": "ignored"
        }))
        .expect("spec should parse");

        let body = serde_json::to_value(&spec).expect("spec should serialize");
        assert_eq!(
            body,
            json!({"name": "nightly-train", "image": "c12e/train:latest", "vcpus": 2})
        );
    }

    #[test]
    fn numbers_keep_their_representation() {
        let spec: JobSpec = serde_json::from_value(json!({
            "name": "j",
            "memory": 2048,
            "vcpus": 0.5
        }))
        .expect("spec should parse");

        let body = serde_json::to_string(&spec).expect("spec should serialize");
        assert!(body.contains(r#""memory":2048"#));
        assert!(body.contains(r#""vcpus":0.5"#));
    }

    #[test]
    fn values_of_any_shape_pass_through() {
        let source = json!({
            "name": "j",
            "image": {"repo": "c12e/train", "tag": "1"},
            "memory": "2g",
            "vcpus": "2"
        });
        let spec: JobSpec = serde_json::from_value(source.clone()).expect("spec should parse");

        assert_eq!(serde_json::to_value(&spec).expect("serialize"), source);
        assert!(spec.validate().is_ok());
    }

    #[test]
    fn validate_rejects_blank_name() {
        let spec: JobSpec = serde_json::from_value(json!({"name": "  "})).expect("parse");
        assert!(matches!(spec.validate(), Err(CoreError::Validation(_))));
    }
}
