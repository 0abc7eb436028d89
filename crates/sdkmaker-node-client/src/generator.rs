use sdkmaker_core::{GenerateOptions, GeneratedFile, SdkError, SdkGenerator, SdkModel};

use crate::emitters;

/// TypeScript/axios SDK generator.
pub struct NodeClientGenerator;

impl NodeClientGenerator {
    /// Emit every artifact independently. A failed artifact yields its own
    /// error entry and never blocks siblings; the orchestrator decides how
    /// to surface failures after the fan-out completes.
    pub fn emit_all(
        model: &SdkModel,
        options: &GenerateOptions,
    ) -> Vec<Result<GeneratedFile, SdkError>> {
        let mut artifacts = Vec::new();

        artifacts.push(
            emitters::models::emit_models(&model.components).map(|content| GeneratedFile {
                path: "src/models.ts".to_string(),
                content,
            }),
        );

        artifacts.push(Ok(GeneratedFile {
            path: "src/axiosClient.ts".to_string(),
            content: emitters::client::emit_http_client(),
        }));

        for (controller, operations) in &model.controllers {
            if operations.is_empty() {
                continue;
            }
            artifacts.push(Ok(GeneratedFile {
                path: format!("src/{controller}.ts"),
                content: emitters::methods::emit_controller(operations),
            }));
        }

        artifacts.push(Ok(GeneratedFile {
            path: "src/API.ts".to_string(),
            content: emitters::aggregator::emit_aggregator(&model.controllers),
        }));

        artifacts.push(Ok(GeneratedFile {
            path: "src/createClient.ts".to_string(),
            content: emitters::client::emit_create_client(model),
        }));

        artifacts.push(Ok(GeneratedFile {
            path: "src/index.ts".to_string(),
            content: emitters::scaffold::emit_index(),
        }));

        artifacts.push(Ok(GeneratedFile {
            path: "package.json".to_string(),
            content: emitters::scaffold::emit_package_json(
                &options.package_name,
                &model.version,
                &model.description,
            ),
        }));

        artifacts.push(Ok(GeneratedFile {
            path: "tsconfig.json".to_string(),
            content: emitters::scaffold::emit_tsconfig(),
        }));

        artifacts.push(
            emitters::readme::emit_readme(model, &options.package_name).map(|content| {
                GeneratedFile {
                    path: "README.md".to_string(),
                    content,
                }
            }),
        );

        log::debug!("emitted {} artifacts", artifacts.len());
        artifacts
    }
}

impl SdkGenerator for NodeClientGenerator {
    fn generate(
        &self,
        model: &SdkModel,
        options: &GenerateOptions,
    ) -> Result<Vec<GeneratedFile>, SdkError> {
        Self::emit_all(model, options).into_iter().collect()
    }
}
