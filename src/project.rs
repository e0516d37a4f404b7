// Project configuration: the `project.json` file at the project root.
//
// Field names mirror the on-disk JSON (camelCase, `toc` for the table of
// contents switch). Absent fields deserialize to their zero values, so a
// minimal file with just `format` and `sources` is valid.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Canonical name of the configuration file inside a project directory.
pub const PROJECT_FILE: &str = "project.json";

/// Output targets a build can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Target {
    Html,
    Pdf,
}

/// HTML target settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HtmlTarget {
    /// Subdirectory of the output folder receiving the rendered site.
    #[serde(default)]
    pub output_folder: String,
    /// Template directory holding `index.html` and a `public/` asset tree.
    #[serde(default)]
    pub template: String,
    /// Extra arguments passed to the converter verbatim.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<String>,
}

/// PDF target settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PdfTarget {
    #[serde(default)]
    pub output_folder: String,
    /// Template directory holding `template.tex`.
    #[serde(default)]
    pub template: String,
    /// File name of the produced document, e.g. `book.pdf`.
    #[serde(default)]
    pub output_file_name: String,
    /// Extra arguments passed to the converter verbatim.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<String>,
    /// Language passed to the PDF engine as `-V lang=...`. Hand-edited
    /// files spell "no language" either as a missing key or an explicit
    /// `null`; both load as `None`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// A document project as described by `project.json`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub author: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub version: String,
    /// Source markup format, handed to the converter's `-f` flag.
    #[serde(default)]
    pub format: String,
    /// Whether the converter should generate a table of contents.
    #[serde(rename = "toc", default)]
    pub table_of_contents: bool,
    /// Bibliography file activating citation processing.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub bibliography: String,
    /// Use biblatex instead of the default citation processor.
    #[serde(default)]
    pub biblatex: bool,
    /// Source files, in the order the converter should concatenate them.
    #[serde(default)]
    pub sources: Vec<String>,
    /// Asset directories copied next to the HTML output.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub assets: Vec<String>,
    /// Root directory for all build output.
    #[serde(default)]
    pub output_folder: String,
    /// Targets built by default.
    #[serde(default)]
    pub targets: Vec<Target>,
    #[serde(default)]
    pub html: HtmlTarget,
    #[serde(default)]
    pub pdf: PdfTarget,
}

impl Project {
    /// Load a project from a `project.json` file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let data = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&data)?)
    }

    /// Write the project back out as pretty-printed JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Whether the project lists the given target.
    pub fn has_target(&self, target: Target) -> bool {
        self.targets.contains(&target)
    }

    /// Drop targets the caller did not ask for.
    pub fn retain_targets(&mut self, html: bool, pdf: bool) {
        self.targets.retain(|t| match t {
            Target::Html => html,
            Target::Pdf => pdf,
        });
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_full_project_deserializes() {
        let json = r#"{
            "name": "book",
            "author": "A. Writer",
            "version": "1.0.0",
            "format": "markdown",
            "toc": true,
            "bibliography": "refs.bib",
            "sources": ["src/index.md", "src/ch1.md"],
            "assets": ["img"],
            "outputFolder": "output",
            "targets": ["html", "pdf"],
            "html": {
                "outputFolder": "html",
                "template": "templates/html"
            },
            "pdf": {
                "outputFolder": "pdf",
                "template": "templates/pdf",
                "outputFileName": "book.pdf",
                "args": ["--top-level-division=chapter"],
                "language": "sr-RS"
            }
        }"#;
        let project: Project = serde_json::from_str(json).unwrap();

        assert_eq!(project.name, "book");
        assert!(project.table_of_contents);
        assert_eq!(project.sources.len(), 2);
        assert_eq!(project.targets, [Target::Html, Target::Pdf]);
        assert_eq!(project.html.output_folder, "html");
        assert_eq!(project.pdf.output_file_name, "book.pdf");
        assert_eq!(project.pdf.args, ["--top-level-division=chapter"]);
        assert_eq!(project.pdf.language.as_deref(), Some("sr-RS"));
    }

    #[test]
    fn test_minimal_project_fills_defaults() {
        let project: Project =
            serde_json::from_str(r#"{"format": "markdown", "sources": ["a.md"]}"#).unwrap();

        assert_eq!(project.name, "");
        assert!(!project.table_of_contents);
        assert!(!project.biblatex);
        assert!(project.targets.is_empty());
        assert_eq!(project.html.template, "");
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(PROJECT_FILE);

        let mut project = Project {
            name: "demo".to_string(),
            format: "markdown".to_string(),
            sources: vec!["src/index.md".to_string()],
            targets: vec![Target::Html],
            ..Default::default()
        };
        project.html.output_folder = "html".to_string();
        project.save(&path).unwrap();

        let loaded = Project::load(&path).unwrap();
        assert_eq!(loaded.name, "demo");
        assert_eq!(loaded.targets, [Target::Html]);
        assert_eq!(loaded.html.output_folder, "html");
    }

    #[test]
    fn test_retain_targets_filters() {
        let mut project = Project {
            targets: vec![Target::Html, Target::Pdf],
            ..Default::default()
        };
        project.retain_targets(false, true);
        assert_eq!(project.targets, [Target::Pdf]);
        assert!(project.has_target(Target::Pdf));
        assert!(!project.has_target(Target::Html));
    }

    #[test]
    fn test_load_missing_file_is_an_io_error() {
        let err = Project::load("definitely/not/here/project.json").unwrap_err();
        assert!(matches!(err, crate::Error::Io(_)));
    }

    #[test]
    fn test_load_malformed_json_is_a_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(PROJECT_FILE);
        fs::write(&path, "{not json").unwrap();

        let err = Project::load(&path).unwrap_err();
        assert!(matches!(err, crate::Error::Config(_)));
    }

    #[test]
    fn test_unknown_target_string_is_rejected() {
        let err = serde_json::from_str::<Project>(r#"{"targets": ["epub"]}"#).unwrap_err();
        assert!(err.to_string().contains("epub"));
    }

    #[test]
    fn test_pdf_language_null_reads_as_absent() {
        let project: Project =
            serde_json::from_str(r#"{"pdf": {"language": null}}"#).unwrap();
        assert_eq!(project.pdf.language, None);

        let project: Project = serde_json::from_str(r#"{"pdf": {}}"#).unwrap();
        assert_eq!(project.pdf.language, None);
    }
}
