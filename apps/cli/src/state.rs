use crate::config::Config;
use crate::errors::AppError;
use crate::fragments::{FragmentStore, SectionAssembler};
use crate::llm_client::{LlmClient, LlmConfig};
use crate::output::JOB_DESCRIPTION_FILE;
use crate::render::{RenderConfig, Renderer};

/// Components shared by every command, built once from `Config`.
pub struct AppState {
    pub config: Config,
    pub assembler: SectionAssembler,
    pub renderer: Renderer,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let assembler = SectionAssembler::new(FragmentStore::new(config.fragment_dir.clone()));
        let renderer = Renderer::new(RenderConfig {
            program: config.render_program.clone(),
            retained_files: vec![JOB_DESCRIPTION_FILE.to_string()],
        });

        Self {
            config,
            assembler,
            renderer,
        }
    }

    /// Builds the generation client. Only `cover` calls this, so the other
    /// commands work without a credential.
    pub fn llm_client(&self) -> Result<LlmClient, AppError> {
        let api_key = self
            .config
            .require_api_key()
            .map_err(|e| AppError::Config(e.to_string()))?
            .to_string();
        let client = LlmClient::new(
            api_key,
            LlmConfig {
                base_url: self.config.llm_base_url.clone(),
                model: self.config.llm_model.clone(),
                ..LlmConfig::default()
            },
        )?;
        Ok(client)
    }
}
