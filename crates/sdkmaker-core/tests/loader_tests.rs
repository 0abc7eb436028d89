use std::io::Write;

use sdkmaker_core::error::ErrorKind;
use sdkmaker_core::{DocumentFetcher, FetchedDocument, RawInput, SdkError, load_document};
use serde_json::json;

/// Test double for the transport collaborator.
struct StubFetcher {
    response: Result<FetchedDocument, SdkError>,
}

impl StubFetcher {
    fn returning(content: &str) -> Self {
        Self {
            response: Ok(FetchedDocument {
                content: content.to_string(),
                content_type: "application/json".to_string(),
            }),
        }
    }

    fn failing() -> Self {
        Self {
            response: Err(SdkError::network(
                "fetch",
                "failed to fetch the API description",
                json!({ "status": 503 }),
            )),
        }
    }
}

impl DocumentFetcher for StubFetcher {
    async fn fetch(&self, _url: &str) -> Result<FetchedDocument, SdkError> {
        self.response.clone()
    }
}

#[tokio::test]
async fn loads_inline_json() {
    let input = RawInput::Inline(r#"{"openapi": "3.0.0", "paths": {}}"#.to_string());
    let doc = load_document(&input, &StubFetcher::returning("")).await.unwrap();
    assert_eq!(doc["openapi"], "3.0.0");
}

#[tokio::test]
async fn loads_from_a_file_path() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "openapi: 3.0.0\npaths: {{}}\n").unwrap();

    let input = RawInput::Path(file.path().to_path_buf());
    let doc = load_document(&input, &StubFetcher::returning("")).await.unwrap();
    assert_eq!(doc["openapi"], "3.0.0");
}

#[tokio::test]
async fn missing_file_is_a_validation_error() {
    let input = RawInput::Path("/nonexistent/openapi.yaml".into());
    let err = load_document(&input, &StubFetcher::returning("")).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::Validation);
}

#[tokio::test]
async fn empty_inline_input_is_a_validation_error() {
    let input = RawInput::Inline("   ".to_string());
    let err = load_document(&input, &StubFetcher::returning("")).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::Validation);
}

#[tokio::test]
async fn url_content_goes_through_the_fetcher() {
    let fetcher = StubFetcher::returning("swagger: \"2.0\"\npaths: {}\n");
    let input = RawInput::Url("https://example.com/openapi.yaml".to_string());
    let doc = load_document(&input, &fetcher).await.unwrap();
    assert_eq!(doc["swagger"], "2.0");
}

#[tokio::test]
async fn fetch_failures_surface_unchanged() {
    let input = RawInput::Url("https://example.com/openapi.yaml".to_string());
    let err = load_document(&input, &StubFetcher::failing()).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::Network);
    assert_eq!(err.method, "fetch");
}

#[tokio::test]
async fn unparseable_content_names_both_formats() {
    let input = RawInput::Inline("{{{ not : valid".to_string());
    let err = load_document(&input, &StubFetcher::returning("")).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::ContentParsing);
    assert_eq!(err.details["attemptedFormats"], json!(["JSON", "YAML"]));
}
