// Project scaffolding: lay down a ready-to-build document project.
//
// The starter templates are compiled into the binary, so `new` works
// anywhere without an installation directory to resolve.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::project::{HtmlTarget, PdfTarget, Project, Target, PROJECT_FILE};

const INDEX_MD: &str = include_str!("../templates/index.md");
const HTML_TEMPLATE: &str = include_str!("../templates/html/index.html");
const HTML_STYLE: &str = include_str!("../templates/html/public/style.css");
const PDF_TEMPLATE: &str = include_str!("../templates/pdf/template.tex");

/// Create a new project directory named `name` under `parent` and return
/// its path. Refuses to touch a directory that already exists.
pub fn create_project(parent: &Path, name: &str) -> Result<PathBuf> {
    let root = parent.join(name);
    if root.exists() {
        return Err(Error::ProjectExists(root));
    }

    log::info!("creating project in {}", root.display());

    fs::create_dir_all(root.join("src"))?;
    fs::create_dir_all(root.join("templates/html/public"))?;
    fs::create_dir_all(root.join("templates/pdf"))?;

    fs::write(root.join("src/index.md"), INDEX_MD)?;
    fs::write(root.join("templates/html/index.html"), HTML_TEMPLATE)?;
    fs::write(root.join("templates/html/public/style.css"), HTML_STYLE)?;
    fs::write(root.join("templates/pdf/template.tex"), PDF_TEMPLATE)?;

    starter_project(name).save(root.join(PROJECT_FILE))?;

    Ok(root)
}

/// The configuration a fresh project starts with.
fn starter_project(name: &str) -> Project {
    Project {
        name: name.to_string(),
        version: "0.1.0".to_string(),
        format: "markdown".to_string(),
        table_of_contents: true,
        sources: vec!["src/index.md".to_string()],
        output_folder: "output".to_string(),
        targets: vec![Target::Html, Target::Pdf],
        html: HtmlTarget {
            output_folder: "html".to_string(),
            template: "templates/html".to_string(),
            args: Vec::new(),
        },
        pdf: PdfTarget {
            output_folder: "pdf".to_string(),
            template: "templates/pdf".to_string(),
            output_file_name: format!("{name}.pdf"),
            args: Vec::new(),
            language: None,
        },
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_create_lays_down_the_full_tree() {
        let dir = tempfile::tempdir().unwrap();
        let root = create_project(dir.path(), "book").unwrap();

        assert_eq!(root, dir.path().join("book"));
        for file in [
            "project.json",
            "src/index.md",
            "templates/html/index.html",
            "templates/html/public/style.css",
            "templates/pdf/template.tex",
        ] {
            assert!(root.join(file).is_file(), "missing {file}");
        }
    }

    #[test]
    fn test_created_project_loads_and_points_at_its_files() {
        let dir = tempfile::tempdir().unwrap();
        let root = create_project(dir.path(), "report").unwrap();

        let project = Project::load(root.join(PROJECT_FILE)).unwrap();
        assert_eq!(project.name, "report");
        assert_eq!(project.format, "markdown");
        assert_eq!(project.sources, ["src/index.md"]);
        assert_eq!(project.targets, [Target::Html, Target::Pdf]);
        assert_eq!(project.html.template, "templates/html");
        assert_eq!(project.pdf.output_file_name, "report.pdf");
    }

    #[test]
    fn test_existing_directory_is_refused() {
        let dir = tempfile::tempdir().unwrap();
        create_project(dir.path(), "twice").unwrap();

        let err = create_project(dir.path(), "twice").unwrap_err();
        assert!(matches!(err, Error::ProjectExists(_)));
    }

    #[test]
    fn test_html_template_carries_the_markers() {
        // The starter template must expose every reserved id the restyle
        // pass dispatches on.
        for marker in [
            "author-toc",
            "author-body",
            "author-date",
            "author-copyright-year",
        ] {
            assert!(HTML_TEMPLATE.contains(marker), "missing {marker}");
        }
    }
}
