use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use webgal::config::Config;
use webgal::pipeline::GalleryOutcome;
use webgal::{config, output, page, pipeline, regen};

#[derive(Parser)]
#[command(name = "webgal")]
#[command(about = "Static photo-gallery generator")]
#[command(long_about = "\
Static photo-gallery generator

Converts directories of raw photos into web-optimized WebP images plus a
JSON manifest per gallery, and keeps each gallery's static HTML page in
sync with its manifest.

The job list lives in webgal.toml:

  [settings]                 # max_width, quality, pages_dir
  [[galleries]]              # source/output/url_prefix per gallery
  [[pages]]                  # metadata for from-scratch page builds

Run 'webgal init' to generate a documented webgal.toml.")]
#[command(version)]
struct Cli {
    /// Configuration file
    #[arg(long, default_value = "webgal.toml", global = true)]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert all configured galleries and refresh their pages
    Process,
    /// Build all configured gallery pages from scratch
    Pages,
    /// Run both: build pages, then process galleries
    Build,
    /// Write a documented stock webgal.toml
    Init,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if let Command::Init = cli.command {
        return init_config(&cli.config);
    }

    let config = Config::load(&cli.config)?;

    if let Some(notice) = output::format_capability_notice() {
        println!("{notice}");
    }

    match cli.command {
        Command::Process => run_process(&config)?,
        Command::Pages => run_pages(&config)?,
        Command::Build => {
            run_pages(&config)?;
            run_process(&config)?;
        }
        Command::Init => unreachable!("handled above"),
    }

    Ok(())
}

/// Convert every configured gallery; each completed gallery triggers a
/// rewrite of its page under the pages directory.
fn run_process(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    for job in &config.galleries {
        println!("{}", output::format_gallery_header(job));

        match pipeline::process_gallery(job, &config.settings)? {
            GalleryOutcome::Skipped(reason) => {
                println!("{}", output::format_skip(job, reason));
            }
            GalleryOutcome::Processed(result) => {
                for image in &result.written {
                    println!("{}", output::format_written(image));
                }
                for failure in &result.failures {
                    println!("{}", output::format_failure(failure));
                }
                println!("{}", output::format_gallery_summary(&result));

                let page_path = job.page_path(&config.settings.pages_dir);
                let outcome = regen::update_gallery_page(&page_path, &result.entries)?;
                if let Some(line) = output::format_regen(&page_path, outcome) {
                    println!("{line}");
                }
            }
        }
    }
    Ok(())
}

fn run_pages(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    for spec in &config.pages {
        page::write_gallery_page(spec)?;
        println!("{}", output::format_page_written(&spec.path));
    }
    Ok(())
}

fn init_config(path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    if path.exists() {
        return Err(format!("{} already exists; not overwriting", path.display()).into());
    }
    std::fs::write(path, config::stock_config_toml())?;
    println!("Wrote {}", path.display());
    Ok(())
}
