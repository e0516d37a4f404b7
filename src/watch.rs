// Polling file watcher: rebuild whenever a source file changes.
//
// No inotify; a fixed-interval modification-time scan is portable and plenty
// for a handful of markup files. Source mtimes start at the epoch so the
// first poll always triggers a full build. Edits to `project.json` reload
// the configuration (and reset the source map, forcing a rebuild). Builds
// run back to back on the polling thread, never concurrently.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::thread;
use std::time::{Duration, SystemTime};

use crate::build::{self, BuildOptions};
use crate::error::Result;
use crate::project::Project;

/// Default delay between polls.
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(100);

/// Knobs for a watch session.
#[derive(Debug, Clone)]
pub struct WatchOptions {
    /// Delay between modification-time scans.
    pub interval: Duration,
    /// Rebuild the HTML target.
    pub html: bool,
    /// Rebuild the PDF target.
    pub pdf: bool,
    /// Converter settings for the triggered builds.
    pub build: BuildOptions,
}

impl Default for WatchOptions {
    fn default() -> Self {
        Self {
            interval: DEFAULT_INTERVAL,
            html: false,
            pdf: false,
            build: BuildOptions::default(),
        }
    }
}

impl WatchOptions {
    /// Create options with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the polling interval.
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Set the converter options used by triggered builds.
    pub fn with_build(mut self, build: BuildOptions) -> Self {
        self.build = build;
        self
    }
}

/// Watch the given project file and rebuild on changes. Runs until the
/// process is interrupted.
///
/// Asking for no target at all means both.
pub fn watch(project_path: impl Into<PathBuf>, options: WatchOptions) -> Result<()> {
    let mut options = options;
    if !options.html && !options.pdf {
        options.html = true;
        options.pdf = true;
    }

    let mut watcher = Watcher::new(project_path.into(), options);
    watcher.load_project()?;

    log::info!("watching for changes...");
    loop {
        watcher.reload_project();
        watcher.run_build();
        thread::sleep(watcher.options.interval);
    }
}

struct Watcher {
    options: WatchOptions,
    project_path: PathBuf,
    project: Project,
    project_mtime: SystemTime,
    sources: HashMap<String, SystemTime>,
}

impl Watcher {
    fn new(project_path: PathBuf, options: WatchOptions) -> Self {
        Self {
            options,
            project_path,
            project: Project::default(),
            project_mtime: SystemTime::UNIX_EPOCH,
            sources: HashMap::new(),
        }
    }

    /// Load (or reload) the project file, filter its targets down to the
    /// requested ones and reset the source map so everything rebuilds.
    fn load_project(&mut self) -> Result<()> {
        let mut project = Project::load(&self.project_path)?;
        let mtime = mod_time(&self.project_path)?;

        project.retain_targets(self.options.html, self.options.pdf);

        self.sources = project
            .sources
            .iter()
            .map(|s| (s.clone(), SystemTime::UNIX_EPOCH))
            .collect();
        self.project = project;
        self.project_mtime = mtime;
        Ok(())
    }

    /// Pick up edits to the project file between builds. Failures leave the
    /// previous configuration in place.
    fn reload_project(&mut self) {
        let Ok(mtime) = mod_time(&self.project_path) else {
            return;
        };
        if mtime > self.project_mtime {
            if let Err(e) = self.load_project() {
                log::warn!("project reload failed: {e}");
            }
        }
    }

    /// Scan the sources and build once if anything changed.
    fn run_build(&mut self) {
        if !self.scan_sources() {
            return;
        }

        log::info!("build started");
        match build::build_project(&self.project, &self.options.build) {
            Ok(()) => log::info!("build finished"),
            Err(e) => log::error!("build failed: {e}"),
        }
        log::info!("watching for changes...");
    }

    /// Update the stored modification times. True when any source moved
    /// forward; unreadable files are skipped until they reappear.
    fn scan_sources(&mut self) -> bool {
        let mut rebuild = false;
        for (path, last_seen) in &mut self.sources {
            let Ok(mtime) = mod_time(Path::new(path)) else {
                continue;
            };
            if mtime > *last_seen {
                *last_seen = mtime;
                rebuild = true;
            }
        }
        rebuild
    }
}

fn mod_time(path: &Path) -> io::Result<SystemTime> {
    fs::metadata(path)?.modified()
}
