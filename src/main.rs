//! Situation questionnaire page generator CLI

use clap::{Parser, Subcommand};
use colored::*;
use indicatif::ProgressBar;
use situations2html::cli::{self, interactive, InspectSummary};
use situations2html::models::{DEFAULT_ARCHIVE_NAME, DEFAULT_OPTION_PREFIX};
use situations2html::{generate_situations, inspect_dataset, GenerationOptions};
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "situations2html")]
#[command(about = "Turn a situation questionnaire spreadsheet into HTML comparison pages", long_about = None)]
#[command(version)]
struct Cli {
    /// Log level or filter (falls back to RUST_LOG, then `warn`)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Runs the interactive mode when omitted
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate one HTML page per row and zip them
    Generate {
        /// Excel or CSV file describing the situations
        #[arg(short, long)]
        input: PathBuf,

        /// Directory the archive is written to
        #[arg(short, long, default_value = ".")]
        output: PathBuf,

        /// Image shown in an option's header, as OPTION=PATH (repeatable)
        #[arg(long = "image", value_name = "OPTION=PATH", value_parser = cli::parse_image_arg)]
        images: Vec<(String, PathBuf)>,

        /// Archive file name
        #[arg(long, default_value = DEFAULT_ARCHIVE_NAME)]
        archive_name: String,

        /// Prefix marking option columns
        #[arg(long, default_value = DEFAULT_OPTION_PREFIX, conflicts_with = "any_prefix")]
        option_prefix: String,

        /// Accept any `<option>.<attribute>` column
        #[arg(long)]
        any_prefix: bool,

        /// Keep the pages in `situations_html/` next to the archive
        #[arg(long)]
        keep_pages: bool,

        /// Write a Markdown report next to the archive
        #[arg(short, long)]
        report: bool,
    },

    /// Preview a dataset and the options/attributes found in it
    Inspect {
        /// Excel or CSV file describing the situations
        #[arg(short, long)]
        input: PathBuf,

        /// Number of rows to preview
        #[arg(long, default_value_t = 5)]
        rows: usize,

        /// Prefix marking option columns
        #[arg(long, default_value = DEFAULT_OPTION_PREFIX, conflicts_with = "any_prefix")]
        option_prefix: String,

        /// Accept any `<option>.<attribute>` column
        #[arg(long)]
        any_prefix: bool,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Guided generation with prompts
    Interactive,
}

fn setup_logging(level: Option<&str>) {
    let filter = level
        .and_then(|l| EnvFilter::try_new(l).ok())
        .or_else(|| EnvFilter::try_from_default_env().ok())
        .unwrap_or_else(|| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_env_filter(filter)
        .init();
}

fn prefix_arg(option_prefix: String, any_prefix: bool) -> Option<String> {
    if any_prefix {
        None
    } else {
        Some(option_prefix)
    }
}

fn main() {
    let cli = Cli::parse();
    setup_logging(cli.log_level.as_deref());

    match cli.command {
        Some(Commands::Generate {
            input,
            output,
            images,
            archive_name,
            option_prefix,
            any_prefix,
            keep_pages,
            report,
        }) => {
            println!("{}", "Situation Page Generator".bold().blue());
            println!("{}", "=".repeat(50).blue());
            println!();

            let options = GenerationOptions {
                archive_name,
                option_prefix: prefix_arg(option_prefix, any_prefix),
                keep_pages,
                generate_report: report,
            };

            let spinner = ProgressBar::new_spinner();
            spinner.set_message("Generating pages...");
            spinner.enable_steady_tick(Duration::from_millis(100));
            let outcome = generate_situations(&input, &images, &output, &options);
            spinner.finish_and_clear();

            match outcome {
                Ok(result) => cli::print_generation_summary(&result),
                Err(e) => {
                    cli::print_error("Generation failed!", &e);
                    std::process::exit(1);
                }
            }
        }

        Some(Commands::Inspect {
            input,
            rows,
            option_prefix,
            any_prefix,
            json,
        }) => {
            let prefix = prefix_arg(option_prefix, any_prefix);
            match inspect_dataset(&input, prefix.as_deref()) {
                Ok((dataset, schema)) if json => {
                    let summary = InspectSummary::new(&dataset, &schema, rows);
                    match serde_json::to_string_pretty(&summary) {
                        Ok(text) => println!("{}", text),
                        Err(e) => {
                            cli::print_error("Failed to encode summary!", &e.into());
                            std::process::exit(1);
                        }
                    }
                }
                Ok((dataset, schema)) => cli::print_preview(&dataset, &schema, rows),
                Err(e) => {
                    cli::print_error("Failed to read dataset!", &e);
                    std::process::exit(1);
                }
            }
        }

        Some(Commands::Interactive) | None => {
            if let Err(e) = interactive::run_interactive_mode() {
                cli::print_error("Interactive mode failed!", &e);
                std::process::exit(1);
            }
        }
    }
}
