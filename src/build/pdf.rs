// PDF target: convert through the xelatex engine, no post-processing.

use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::project::Project;

use super::{pandoc, BuildOptions};

pub(crate) fn build_pdf(project: &Project, options: &BuildOptions) -> Result<()> {
    log::info!("building pdf target");

    let out_dir = Path::new(&project.output_folder).join(&project.pdf.output_folder);
    fs::create_dir_all(&out_dir)?;

    pandoc::convert(&project.sources, &pdf_args(project), options)
}

/// Converter arguments for the PDF target, minus the source files.
fn pdf_args(project: &Project) -> Vec<String> {
    // Relative image paths in multi-file projects resolve against each
    // source file, not the working directory.
    let format = if project.format == "markdown" {
        "markdown+rebase_relative_paths".to_string()
    } else {
        project.format.clone()
    };

    let template = Path::new(&project.pdf.template).join("template.tex");
    let output = Path::new(&project.output_folder)
        .join(&project.pdf.output_folder)
        .join(&project.pdf.output_file_name);

    let mut args = vec![
        "-f".to_string(),
        format,
        "-t".to_string(),
        "pdf".to_string(),
        "--template".to_string(),
        template.to_string_lossy().into_owned(),
        "-s".to_string(),
        "-o".to_string(),
        output.to_string_lossy().into_owned(),
        "--listings".to_string(),
    ];

    if let Some(language) = &project.pdf.language {
        args.push("-V".to_string());
        args.push(format!("lang={language}"));
    }

    args.push("--pdf-engine".to_string());
    args.push("xelatex".to_string());

    args.extend(project.pdf.args.iter().cloned());

    if project.table_of_contents {
        args.push("--toc".to_string());
    }

    if !project.bibliography.is_empty() {
        args.push("--bibliography".to_string());
        args.push(project.bibliography.clone());
        args.push("--citeproc".to_string());
    }

    if project.biblatex {
        args.push("--biblatex".to_string());
    }

    args
}
