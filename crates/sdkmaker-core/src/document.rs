use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Value, json};

use crate::error::SdkError;

/// Where the raw document text comes from. Consumed once by the loader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawInput {
    /// A filesystem path to a JSON or YAML document.
    Path(PathBuf),
    /// The document text itself.
    Inline(String),
    /// An HTTP(S) location serving the document.
    Url(String),
}

impl RawInput {
    /// Classify a source string: URL first, then an existing file path,
    /// otherwise inline document text.
    pub fn detect(source: &str) -> RawInput {
        if is_valid_url(source) {
            RawInput::Url(source.to_string())
        } else if Path::new(source).exists() {
            RawInput::Path(PathBuf::from(source))
        } else {
            RawInput::Inline(source.to_string())
        }
    }
}

/// True for absolute http/https URLs with a host.
pub fn is_valid_url(source: &str) -> bool {
    match url::Url::parse(source.trim()) {
        Ok(parsed) => {
            matches!(parsed.scheme(), "http" | "https") && parsed.host_str().is_some()
        }
        Err(_) => false,
    }
}

/// Raw document text plus the transport's stated content type. The content
/// type is informational only; format detection never trusts it.
#[derive(Debug, Clone)]
pub struct FetchedDocument {
    pub content: String,
    pub content_type: String,
}

/// Transport collaborator for URL inputs. A failed fetch is terminal; the
/// loader never retries.
pub trait DocumentFetcher {
    fn fetch(
        &self,
        url: &str,
    ) -> impl Future<Output = Result<FetchedDocument, SdkError>>;
}

/// Acquire and parse a document into its canonical in-memory form.
pub async fn load_document<F: DocumentFetcher>(
    input: &RawInput,
    fetcher: &F,
) -> Result<Value, SdkError> {
    let content = match input {
        RawInput::Path(path) => {
            if path.as_os_str().is_empty() {
                return Err(SdkError::validation("load_document", "input document source is empty"));
            }
            fs::read_to_string(path).map_err(|e| {
                SdkError::validation(
                    "load_document",
                    format!("failed to read {}: {e}", path.display()),
                )
            })?
        }
        RawInput::Inline(text) => {
            if text.trim().is_empty() {
                return Err(SdkError::validation("load_document", "input document source is empty"));
            }
            text.clone()
        }
        RawInput::Url(url) => {
            log::debug!("fetching document from {url}");
            fetcher.fetch(url).await?.content
        }
    };

    parse_content(&content)
}

/// Parse raw text as strict JSON first, falling back to YAML. Content-type
/// hints are deliberately ignored; file extensions and transport headers
/// mislabel API descriptions often enough that only the text itself decides.
pub fn parse_content(content: &str) -> Result<Value, SdkError> {
    if let Ok(value) = serde_json::from_str::<Value>(content) {
        return Ok(value);
    }

    if let Ok(value) = serde_yaml_ng::from_str::<Value>(content) {
        // YAML parses almost any text as a scalar; only maps and sequences
        // can be API documents.
        if value.is_object() || value.is_array() {
            return Ok(value);
        }
    }

    Err(SdkError::content_parsing(
        "parse_content",
        "failed to parse content as JSON or YAML",
        json!({ "attemptedFormats": ["JSON", "YAML"] }),
    ))
}
