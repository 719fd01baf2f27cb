pub mod cli;
pub mod commands;
pub mod config;
pub mod cover_letter;
pub mod errors;
pub mod fragments;
pub mod latex;
pub mod llm_client;
pub mod output;
pub mod render;
pub mod state;
