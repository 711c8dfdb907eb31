use serde::{Deserialize, Serialize};

/// One contact-form entry. Lives only for the duration of the call.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SubmissionRequest {
  pub name: String,
  pub phone: String,
  pub email: String,
  /// The practice/service the visitor selected on the form.
  pub practic: String,
  pub comment: String,
  /// The front end sends one entry per file input, null for inputs left
  /// empty, so entries are nullable and skipped when absent.
  #[serde(default)]
  pub files: Vec<Option<FileAttachment>>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FileAttachment {
  /// Used verbatim as the attachment filename.
  pub name: String,
  /// Standard base64-encoded file bytes.
  pub content: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum RelayResponse {
  Success,
  Error { message: String },
}

impl RelayResponse {
  pub fn success() -> Self {
    RelayResponse::Success
  }

  pub fn error(message: impl Into<String>) -> Self {
    RelayResponse::Error {
      message: message.into(),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_success_response_shape() {
    let json = serde_json::to_value(RelayResponse::success()).expect("serialize response");
    assert_eq!(json, serde_json::json!({ "status": "success" }));
  }

  #[test]
  fn test_error_response_shape() {
    let json = serde_json::to_value(RelayResponse::error("connection refused")).expect("serialize response");
    assert_eq!(
      json,
      serde_json::json!({ "status": "error", "message": "connection refused" })
    );
  }

  #[test]
  fn test_files_field_defaults_to_empty() {
    let request: SubmissionRequest = serde_json::from_str(
      r#"{"name":"Ann","phone":"123","email":"a@b.com","practic":"loan","comment":"hi"}"#,
    )
    .expect("deserialize request");
    assert!(request.files.is_empty());
  }

  #[test]
  fn test_null_file_entries_deserialize() {
    let request: SubmissionRequest = serde_json::from_str(
      r#"{"name":"Ann","phone":"123","email":"a@b.com","practic":"loan","comment":"hi","files":[null,{"name":"a.txt","content":"aGVsbG8="}]}"#,
    )
    .expect("deserialize request");
    assert_eq!(request.files.len(), 2);
    assert!(request.files[0].is_none());
    assert_eq!(request.files[1].as_ref().expect("attachment").name, "a.txt");
  }

  #[test]
  fn test_missing_required_field_is_rejected() {
    let result = serde_json::from_str::<SubmissionRequest>(r#"{"name":"Ann","phone":"123"}"#);
    assert!(result.is_err());
  }
}
