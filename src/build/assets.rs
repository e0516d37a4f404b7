// Asset staging for the HTML target.
//
// Every build restages from scratch: the output directory is cleared, the
// template's `public/` tree is copied in, then each project asset directory
// is merged into `assets/`.

use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::project::Project;

pub(crate) fn stage_html_assets(project: &Project) -> Result<()> {
    let dst = Path::new(&project.output_folder).join(&project.html.output_folder);
    let public = Path::new(&project.html.template).join("public");

    if dst.exists() {
        fs::remove_dir_all(&dst)?;
    }
    fs::create_dir_all(&dst)?;
    copy_dir(&public, &dst)?;

    let assets_dir = dst.join("assets");
    fs::create_dir_all(&assets_dir)?;
    for asset in &project.assets {
        copy_dir(Path::new(asset), &assets_dir)?;
    }

    Ok(())
}

/// Recursively copy the contents of `src` into `dst`, creating directories
/// as needed. Existing files are overwritten.
pub(crate) fn copy_dir(src: &Path, dst: &Path) -> Result<()> {
    fs::create_dir_all(dst)?;
    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let target = dst.join(entry.file_name());
        if entry.file_type()?.is_dir() {
            copy_dir(&entry.path(), &target)?;
        } else {
            fs::copy(entry.path(), &target)?;
        }
    }
    Ok(())
}
