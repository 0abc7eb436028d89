use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use sdkmaker_cli::config::{self, GenerateArgs};
use sdkmaker_cli::fetch::HttpFetcher;
use sdkmaker_cli::orchestrator::{SdkRequest, make_sdk};
use sdkmaker_core::{RawInput, load_document, organize, validate};

#[derive(Parser)]
#[command(
    name = "sdkmaker",
    about = "Generate a TypeScript SDK from a Swagger/OpenAPI document",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate SDK files
    Generate {
        /// Path, URL, or inline content of the API document
        #[arg(short, long)]
        swagger: Option<String>,

        /// Output directory for the generated SDK
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Package name for the generated SDK
        #[arg(short, long)]
        package_name: Option<String>,

        /// Path to a sdk.json configuration file
        #[arg(short, long, default_value = "./sdk.json")]
        config: PathBuf,

        /// Write files but skip the npm install/build step
        #[arg(long)]
        no_build: bool,
    },

    /// Validate an API document without generating files
    Validate {
        /// Path, URL, or inline content of the API document
        #[arg(short, long)]
        input: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            swagger,
            output,
            package_name,
            config,
            no_build,
        } => cmd_generate(swagger, output, package_name, config, no_build).await,

        Commands::Validate { input } => cmd_validate(input).await,
    }
}

async fn cmd_generate(
    swagger: Option<String>,
    output: Option<PathBuf>,
    package_name: Option<String>,
    config_path: PathBuf,
    no_build: bool,
) -> Result<()> {
    let file_config = config::load_file_config(&config_path)?.unwrap_or_default();
    let resolved = config::merge(
        GenerateArgs {
            swagger,
            output,
            package_name,
        },
        file_config,
    )?;

    let request = SdkRequest {
        source: resolved.source,
        output_dir: resolved.output_dir,
        package_name: resolved.package_name,
        skip_build: no_build,
    };

    make_sdk(&request, &HttpFetcher::new()).await?;
    eprintln!("SDK generated successfully");
    Ok(())
}

async fn cmd_validate(input: String) -> Result<()> {
    let fetcher = HttpFetcher::new();
    let doc = load_document(&RawInput::detect(&input), &fetcher).await?;
    validate::ensure_api_document(&doc)?;
    let model = organize(&doc)?;

    let title = if model.name.is_empty() {
        "(untitled)"
    } else {
        &model.name
    };
    eprintln!("Valid API document: {title}");
    eprintln!("  Version: {}", model.version);
    eprintln!("  Controllers: {}", model.controllers.len());
    let operations: usize = model.controllers.values().map(Vec::len).sum();
    eprintln!("  Operations: {operations}");
    eprintln!("Validation successful.");
    Ok(())
}
