use clap::{Parser, Subcommand};

/// Build tailored résumés and cover letters from LaTeX fragments.
#[derive(Debug, Parser)]
#[command(name = "resumake", version, arg_required_else_help = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Assemble a résumé for <identifier> from the <resume_type> fragments and render it
    Create {
        /// One of the configured resume types (backend, frontend, fullstack, ...)
        resume_type: String,
        /// Target name, e.g. the company; also the output directory name
        identifier: String,
    },
    /// Re-render the existing résumé source for <identifier> without rebuilding it
    Generate { identifier: String },
    /// Generate, render and keep the PDF of a cover letter for <identifier>
    Cover { identifier: String },
}
