use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::llm_client::{DEFAULT_BASE_URL, DEFAULT_MODEL};

pub const DEFAULT_RESUME_TYPES: &[&str] = &[
    "backend",
    "frontend",
    "fullstack",
    "javascript",
    "python",
    "java",
    "general",
];

pub const API_KEY_VAR: &str = "DEEPSEEK_API";

/// Application configuration loaded from environment variables.
/// Everything has a default except the generation credential, which only
/// `cover` needs and which is checked when the LLM client is built.
#[derive(Debug, Clone)]
pub struct Config {
    pub fragment_dir: PathBuf,
    pub output_root: PathBuf,
    pub resume_types: Vec<String>,
    pub render_program: String,
    pub llm_api_key: Option<String>,
    pub llm_base_url: String,
    pub llm_model: String,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable source. `from_env` passes the process env.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let resume_types = match lookup("RESUMAKE_RESUME_TYPES") {
            Some(raw) => parse_resume_types(&raw)
                .context("RESUMAKE_RESUME_TYPES must list at least one resume type")?,
            None => DEFAULT_RESUME_TYPES.iter().map(|t| t.to_string()).collect(),
        };

        Ok(Config {
            fragment_dir: lookup("RESUMAKE_FRAGMENT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("tex")),
            output_root: lookup("RESUMAKE_OUTPUT_ROOT")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(".")),
            resume_types,
            render_program: lookup("RESUMAKE_RENDER_PROGRAM")
                .unwrap_or_else(|| "pdflatex".to_string()),
            llm_api_key: lookup(API_KEY_VAR).filter(|key| !key.trim().is_empty()),
            llm_base_url: lookup("DEEPSEEK_BASE_URL")
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            llm_model: lookup("DEEPSEEK_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }

    /// Returns the generation credential or a message naming the variable to set.
    pub fn require_api_key(&self) -> Result<&str> {
        self.llm_api_key
            .as_deref()
            .with_context(|| format!("Required environment variable '{API_KEY_VAR}' is not set"))
    }
}

fn parse_resume_types(raw: &str) -> Option<Vec<String>> {
    let types: Vec<String> = raw
        .split(',')
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .collect();
    if types.is_empty() {
        None
    } else {
        Some(types)
    }
}
