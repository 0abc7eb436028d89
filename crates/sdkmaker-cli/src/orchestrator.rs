use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use futures_util::future::join_all;
use sdkmaker_core::{
    DocumentFetcher, GenerateOptions, GeneratedFile, RawInput, SdkError, load_document, organize,
    validate,
};
use sdkmaker_node_client::NodeClientGenerator;

use crate::npm;

/// One full generation run.
#[derive(Debug, Clone)]
pub struct SdkRequest {
    /// Path, URL, or inline text of the API document.
    pub source: String,
    pub output_dir: PathBuf,
    pub package_name: String,
    /// Skip the npm install/build step after writing files.
    pub skip_build: bool,
}

/// Sequence the pipeline: load → validate → organize → emit, then fan the
/// writes out concurrently and run the build step. Loader, validator, and
/// organizer failures are fatal before any file is written; a single
/// emitter failure only costs its own artifact but still fails the run.
pub async fn make_sdk<F: DocumentFetcher>(request: &SdkRequest, fetcher: &F) -> Result<()> {
    if request.package_name.trim().is_empty() {
        return Err(SdkError::validation("make_sdk", "a valid package name is required").into());
    }

    let input = RawInput::detect(&request.source);
    let doc = load_document(&input, fetcher).await?;
    validate::ensure_api_document(&doc)?;
    let model = organize(&doc)?;
    log::info!(
        "organized {} controllers from {}",
        model.controllers.len(),
        if model.name.is_empty() { "(untitled)" } else { &model.name }
    );

    let options = GenerateOptions {
        package_name: request.package_name.clone(),
    };

    let mut first_emit_error: Option<SdkError> = None;
    let mut writes = Vec::new();
    for artifact in NodeClientGenerator::emit_all(&model, &options) {
        match artifact {
            Ok(file) => writes.push(write_file(&request.output_dir, file)),
            Err(err) => {
                log::error!("artifact emission failed: {err}");
                first_emit_error.get_or_insert(err);
            }
        }
    }

    // Filenames are distinct per task by construction, so the write order
    // does not matter; await them all before surfacing any failure.
    for outcome in join_all(writes).await {
        outcome?;
    }
    if let Some(err) = first_emit_error {
        return Err(err.into());
    }

    if request.skip_build {
        log::info!("skipping npm build step");
    } else if !npm::build_sdk(&request.output_dir) {
        eprintln!("warning: npm build failed; generated files were left in place");
    }

    Ok(())
}

async fn write_file(base: &Path, file: GeneratedFile) -> Result<()> {
    let path = base.join(&file.path);
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .with_context(|| format!("failed to create directory {}", parent.display()))?;
    }
    tokio::fs::write(&path, &file.content)
        .await
        .with_context(|| format!("failed to write {}", path.display()))?;
    log::debug!("wrote {}", path.display());
    Ok(())
}
