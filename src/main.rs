//! bindery - build styled documents from markup sources

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::{Parser, Subcommand};

use bindery::build::{self, BuildOptions};
use bindery::project::{Project, PROJECT_FILE};
use bindery::scaffold;
use bindery::watch::{self, WatchOptions};

#[derive(Parser)]
#[command(name = "bindery")]
#[command(version, about = "Build styled documents from markup sources", long_about = None)]
#[command(after_help = "EXAMPLES:
    bindery new mybook          Create a new project
    bindery build               Build every target in project.json
    bindery build --html        Build only the HTML target
    bindery watch               Rebuild whenever a source changes")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the project in the current directory
    Build {
        /// Build only the HTML target
        #[arg(long)]
        html: bool,

        /// Build only the PDF target
        #[arg(long)]
        pdf: bool,

        /// Project file to load
        #[arg(long, default_value = PROJECT_FILE)]
        project: PathBuf,

        /// Converter executable to run
        #[arg(long, default_value = "pandoc")]
        program: String,

        /// Converter timeout in seconds
        #[arg(long, default_value_t = build::DEFAULT_TIMEOUT.as_secs())]
        timeout: u64,
    },

    /// Watch for changes and rebuild
    Watch {
        /// Rebuild only the HTML target
        #[arg(long)]
        html: bool,

        /// Rebuild only the PDF target
        #[arg(long)]
        pdf: bool,

        /// Project file to watch
        #[arg(long, default_value = PROJECT_FILE)]
        project: PathBuf,

        /// Polling interval in milliseconds
        #[arg(long, default_value_t = watch::DEFAULT_INTERVAL.as_millis() as u64)]
        interval: u64,

        /// Converter executable to run
        #[arg(long, default_value = "pandoc")]
        program: String,

        /// Converter timeout in seconds
        #[arg(long, default_value_t = build::DEFAULT_TIMEOUT.as_secs())]
        timeout: u64,
    },

    /// Create a new project
    New {
        /// Project name, also used as the directory name
        name: String,

        /// Parent directory to create the project in
        #[arg(long, default_value = ".")]
        dir: PathBuf,
    },
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> bindery::Result<()> {
    match cli.command {
        Commands::Build {
            html,
            pdf,
            project,
            program,
            timeout,
        } => {
            let options = BuildOptions::new()
                .with_program(program)
                .with_timeout(Duration::from_secs(timeout));

            let mut project = Project::load(project)?;
            if html || pdf {
                project.retain_targets(html, pdf);
            }
            build::build_project(&project, &options)
        }

        Commands::Watch {
            html,
            pdf,
            project,
            interval,
            program,
            timeout,
        } => {
            let build = BuildOptions::new()
                .with_program(program)
                .with_timeout(Duration::from_secs(timeout));
            watch::watch(
                project,
                WatchOptions {
                    interval: Duration::from_millis(interval),
                    html,
                    pdf,
                    build,
                },
            )
        }

        Commands::New { name, dir } => {
            let root = scaffold::create_project(&dir, &name)?;
            println!("created {}", root.display());
            Ok(())
        }
    }
}
