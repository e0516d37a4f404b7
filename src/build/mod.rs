// Build orchestration: run the converter per target and post-process.
//
// One build processes the project's targets in order. Each target assembles
// its own converter argument list, stages whatever files the output needs,
// runs pandoc, and (for HTML) restyles the produced document in place.

pub(crate) mod assets;
mod html;
mod pandoc;
mod pdf;

pub use pandoc::DEFAULT_TIMEOUT;

use std::time::Duration;

use crate::error::Result;
use crate::project::{Project, Target};

/// Knobs for one build run.
#[derive(Debug, Clone)]
pub struct BuildOptions {
    /// Converter executable, resolved through `PATH`.
    pub program: String,
    /// Hard ceiling on one converter invocation.
    pub timeout: Duration,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            program: "pandoc".to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl BuildOptions {
    /// Create options with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the converter executable.
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    /// Set the converter timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Build every target the project lists, in order.
pub fn build_project(project: &Project, options: &BuildOptions) -> Result<()> {
    for target in &project.targets {
        match target {
            Target::Html => html::build_html(project, options)?,
            Target::Pdf => pdf::build_pdf(project, options)?,
        }
    }
    Ok(())
}
