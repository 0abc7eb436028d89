use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde::Deserialize;

/// Default project configuration file, JSON with camelCase keys.
pub const CONFIG_FILE_NAME: &str = "sdk.json";

/// Options read from `sdk.json`. Every field is optional; CLI flags take
/// precedence over anything found here.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FileConfig {
    pub swagger_path_or_content: Option<String>,
    pub output_dir: Option<String>,
    pub package_name: Option<String>,
}

/// Load the config file. Returns `None` when the file does not exist.
pub fn load_file_config(path: &Path) -> Result<Option<FileConfig>> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let config: FileConfig = serde_json::from_str(&content)
        .with_context(|| format!("failed to parse config {}", path.display()))?;
    Ok(Some(config))
}

/// Options passed on the command line, before merging.
#[derive(Debug, Clone, Default)]
pub struct GenerateArgs {
    pub swagger: Option<String>,
    pub output: Option<PathBuf>,
    pub package_name: Option<String>,
}

/// Fully resolved generation options.
#[derive(Debug, Clone)]
pub struct ResolvedOptions {
    pub source: String,
    pub output_dir: PathBuf,
    pub package_name: String,
}

/// Merge CLI flags over file config values; either source may supply any
/// option, but all three must end up present.
pub fn merge(cli: GenerateArgs, file: FileConfig) -> Result<ResolvedOptions> {
    let source = cli.swagger.or(file.swagger_path_or_content);
    let output_dir = cli
        .output
        .or_else(|| file.output_dir.map(PathBuf::from));
    let package_name = cli.package_name.or(file.package_name);

    let (Some(source), Some(output_dir)) = (source, output_dir) else {
        bail!(
            "'swagger' and 'outputDir' are required. Specify them in {CONFIG_FILE_NAME} or via CLI options."
        );
    };
    let Some(package_name) = package_name else {
        bail!("a package name is required. Specify it in {CONFIG_FILE_NAME} or via --package-name.");
    };

    Ok(ResolvedOptions {
        source,
        output_dir,
        package_name,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_flags_take_precedence() {
        let file = FileConfig {
            swagger_path_or_content: Some("file.yaml".to_string()),
            output_dir: Some("from-file".to_string()),
            package_name: Some("file-pkg".to_string()),
        };
        let cli = GenerateArgs {
            swagger: Some("cli.yaml".to_string()),
            output: None,
            package_name: Some("cli-pkg".to_string()),
        };

        let resolved = merge(cli, file).unwrap();
        assert_eq!(resolved.source, "cli.yaml");
        assert_eq!(resolved.output_dir, PathBuf::from("from-file"));
        assert_eq!(resolved.package_name, "cli-pkg");
    }

    #[test]
    fn missing_source_or_output_is_an_error() {
        let err = merge(GenerateArgs::default(), FileConfig::default()).unwrap_err();
        assert!(err.to_string().contains("required"));
    }

    #[test]
    fn parses_camel_case_config() {
        let config: FileConfig = serde_json::from_str(
            r#"{ "swaggerPathOrContent": "api.yaml", "outputDir": "out", "packageName": "sdk" }"#,
        )
        .unwrap();
        assert_eq!(config.swagger_path_or_content.as_deref(), Some("api.yaml"));
        assert_eq!(config.output_dir.as_deref(), Some("out"));
        assert_eq!(config.package_name.as_deref(), Some("sdk"));
    }
}
