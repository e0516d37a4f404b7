// HTML target: stage template assets, convert, restyle the result.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::project::Project;

use super::{assets, pandoc, BuildOptions};

pub(crate) fn build_html(project: &Project, options: &BuildOptions) -> Result<()> {
    log::info!("building html target");

    // Staging clears and recreates the output directory, so it runs before
    // the converter writes index.html into it.
    assets::stage_html_assets(project)?;

    pandoc::convert(&project.sources, &html_args(project), options)?;

    let index = output_dir(project).join("index.html");
    postprocess_file(&index)?;

    Ok(())
}

fn output_dir(project: &Project) -> PathBuf {
    Path::new(&project.output_folder).join(&project.html.output_folder)
}

/// Converter arguments for the HTML target, minus the source files.
fn html_args(project: &Project) -> Vec<String> {
    let template = Path::new(&project.html.template).join("index.html");
    let output = output_dir(project).join("index.html");

    let mut args = vec![
        "-f".to_string(),
        project.format.clone(),
        "-t".to_string(),
        "html".to_string(),
        "--template".to_string(),
        template.to_string_lossy().into_owned(),
        "-s".to_string(),
        "-o".to_string(),
        output.to_string_lossy().into_owned(),
    ];

    args.extend(project.html.args.iter().cloned());

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

/// Read a converted HTML file, apply the restyle pass, write it back.
pub(crate) fn postprocess_file(path: &Path) -> Result<()> {
    let html = fs::read_to_string(path)?;
    let restyled = crate::restyle(&html)?;
    fs::write(path, restyled)?;
    Ok(())
}
