use anyhow::{Context, Result};
use clap::Parser;
use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use termfolio::{filter_projects, ui, util, App, AppOptions, Config, ProjectFilter, Route};

/// Hacker-terminal portfolio for the terminal
#[derive(Debug, Parser)]
#[command(name = "termfolio", version, about)]
struct Cli {
    /// Skip the boot sequence
    #[arg(long)]
    skip_boot: bool,

    /// Screen to open, e.g. /projects or /projects/webserv
    #[arg(long, value_name = "PATH", default_value = "/")]
    route: String,

    /// Data directory (defaults to ~/.termfolio)
    #[arg(long, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Read configuration from this file instead of the data directory
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Print the project archive and exit
    #[arg(long)]
    list_projects: bool,

    /// Category for --list-projects: all, c, python or web
    #[arg(long, value_name = "CATEGORY", default_value = "all", value_parser = parse_filter)]
    filter: ProjectFilter,
}

fn parse_filter(value: &str) -> Result<ProjectFilter, String> {
    ProjectFilter::from_cli(value)
        .ok_or_else(|| format!("unknown category '{value}' (expected all, c, python or web)"))
}

fn list_projects(filter: ProjectFilter) {
    let projects = filter_projects(filter);
    println!("[{}] {} records found", filter.label(), projects.len());
    for project in projects {
        println!(
            "{:<20} {}  [{}]",
            project.id,
            project.title,
            project.tech_stack.join(", ")
        );
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.list_projects {
        list_projects(cli.filter);
        return Ok(());
    }

    util::init_data_dir(cli.data_dir);

    // Initialize logging to file (~/.termfolio/logs/termfolio.log)
    fs::create_dir_all(util::logs_dir())?;

    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(util::log_file_path())?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(log_file)
        .with_ansi(false) // Disable ANSI colors in log file
        .init();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => Config::load(),
    };
    let config = if cli.skip_boot {
        config.with_boot_enabled(false)
    } else {
        config
    };

    let options = AppOptions {
        route: Route::parse(&cli.route),
    };
    tracing::info!(route = %options.route, "Starting termfolio");

    ui::install_panic_hook();

    let app = App::new(config, options);
    app.run().await
}
