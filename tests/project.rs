// End-to-end tests for project scaffolding and configuration.

use bindery::build::{BuildOptions, DEFAULT_TIMEOUT};
use bindery::project::{Project, Target, PROJECT_FILE};
use bindery::scaffold::create_project;
use bindery::watch::{WatchOptions, DEFAULT_INTERVAL};
use pretty_assertions::assert_eq;

#[test]
fn test_new_project_loads_and_lists_both_targets() {
    let dir = tempfile::tempdir().unwrap();
    let root = create_project(dir.path(), "book").unwrap();

    let project = Project::load(root.join(PROJECT_FILE)).unwrap();
    assert_eq!(project.name, "book");
    assert_eq!(project.targets, [Target::Html, Target::Pdf]);
    assert!(project.table_of_contents);

    // Everything the configuration points at exists on disk.
    assert!(root.join(&project.sources[0]).is_file());
    assert!(root.join(&project.html.template).join("index.html").is_file());
    assert!(root.join(&project.pdf.template).join("template.tex").is_file());
}

#[test]
fn test_scaffolded_template_survives_restyling() {
    // The raw template is not valid output yet (it still holds converter
    // placeholders), but the marked-up scaffolding must already be
    // restylable without error.
    let dir = tempfile::tempdir().unwrap();
    let root = create_project(dir.path(), "book").unwrap();

    let template = std::fs::read_to_string(root.join("templates/html/index.html")).unwrap();
    let out = bindery::restyle(&template).unwrap();
    assert!(out.contains("author-toc"));
    assert!(out.contains("author-body"));
}

#[test]
fn test_edited_project_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let root = create_project(dir.path(), "book").unwrap();
    let path = root.join(PROJECT_FILE);

    let mut project = Project::load(&path).unwrap();
    project.retain_targets(true, false);
    project.bibliography = "refs.bib".to_string();
    project.save(&path).unwrap();

    let reloaded = Project::load(&path).unwrap();
    assert_eq!(reloaded.targets, [Target::Html]);
    assert_eq!(reloaded.bibliography, "refs.bib");
    // Untouched fields keep their scaffolded values.
    assert_eq!(reloaded.pdf.output_file_name, "book.pdf");
}

#[test]
fn test_option_defaults_line_up_with_their_constants() {
    let build = BuildOptions::default();
    assert_eq!(build.program, "pandoc");
    assert_eq!(build.timeout, DEFAULT_TIMEOUT);

    let watch = WatchOptions::default();
    assert_eq!(watch.interval, DEFAULT_INTERVAL);
    assert!(!watch.html);
    assert!(!watch.pdf);
    assert_eq!(watch.build.program, build.program);
}
