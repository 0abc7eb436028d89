pub mod document;
pub mod error;
pub mod organize;
pub mod resolve;
pub mod validate;

pub use document::{DocumentFetcher, FetchedDocument, RawInput, load_document, parse_content};
pub use error::{ErrorKind, SdkError, Severity};
pub use organize::{Operation, Parameter, SdkModel, organize};

/// A generated file with path and content, relative to the output root.
#[derive(Debug, Clone)]
pub struct GeneratedFile {
    pub path: String,
    pub content: String,
}

/// Options shared by every artifact emitter.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Package name for the generated SDK's manifest and README.
    pub package_name: String,
}

/// Trait for SDK generators that produce files from an organized model.
pub trait SdkGenerator {
    fn generate(
        &self,
        model: &SdkModel,
        options: &GenerateOptions,
    ) -> Result<Vec<GeneratedFile>, SdkError>;
}
