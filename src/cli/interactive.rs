//! Interactive CLI mode for the situation page generator

use super::{print_error, print_generation_summary, print_preview};
use crate::models::GenerationOptions;
use crate::packager::ImageStore;
use crate::{generate_from_dataset, inspect_dataset};
use anyhow::Result;
use colored::*;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};
use indicatif::ProgressBar;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const DATASET_EXTENSIONS: &[&str] = &["csv", "xlsx", "xlsm", "xls", "ods"];

/// Datasets in the current directory
fn find_nearby_datasets() -> Vec<PathBuf> {
    let mut datasets = Vec::new();

    if let Ok(entries) = fs::read_dir(".") {
        for entry in entries.flatten() {
            let path = entry.path();
            let is_dataset = path
                .extension()
                .and_then(|e| e.to_str())
                .map(|e| DATASET_EXTENSIONS.contains(&e.to_ascii_lowercase().as_str()))
                .unwrap_or(false);
            if is_dataset && path.is_file() {
                datasets.push(path);
            }
        }
    }

    datasets.sort();
    datasets
}

/// Prompt user to select a dataset file
fn prompt_for_dataset_path(prompt_text: &str) -> Result<PathBuf> {
    let nearby = find_nearby_datasets();

    if nearby.is_empty() {
        let input_path: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt_text)
            .with_initial_text("./")
            .interact_text()?;
        return Ok(PathBuf::from(input_path));
    }

    let mut options: Vec<String> = nearby
        .iter()
        .map(|p| format!("📄 {} (detected)", p.display()))
        .collect();
    options.push("✏️  Enter custom path".to_string());

    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt_text)
        .items(&options)
        .default(0)
        .interact()?;

    if selection < nearby.len() {
        Ok(nearby[selection].clone())
    } else {
        let input_path: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt("Enter dataset path")
            .with_initial_text("./")
            .interact_text()?;
        Ok(PathBuf::from(input_path))
    }
}

/// Run the interactive CLI mode
pub fn run_interactive_mode() -> Result<()> {
    print_banner();

    loop {
        println!();
        let options = vec![
            "🧩 Generate situation pages",
            "📊 Preview a dataset",
            "❌ Exit",
        ];

        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("What would you like to do?")
            .items(&options)
            .default(0)
            .interact()?;

        match selection {
            0 => handle_generate()?,
            1 => handle_preview()?,
            2 => {
                println!("\n{}", "Goodbye! 👋".green().bold());
                break;
            }
            _ => unreachable!(),
        }
    }

    Ok(())
}

fn print_banner() {
    println!("{}", "╔═══════════════════════════════════════════════════════╗".blue());
    println!("{}", "║                                                       ║".blue());
    println!("{}", "║     🧩 Situation Questionnaire Page Generator         ║".blue().bold());
    println!("{}", "║                                                       ║".blue());
    println!("{}", "║     One HTML comparison page per questionnaire row    ║".blue());
    println!("{}", "║                                                       ║".blue());
    println!("{}", "╚═══════════════════════════════════════════════════════╝".blue());
}

fn handle_preview() -> Result<()> {
    println!("\n{}", "=== Preview a Dataset ===".blue().bold());
    println!();

    let input = prompt_for_dataset_path("📁 Select the Excel or CSV file")?;
    if !input.exists() {
        println!("{}", "❌ Error: Input path does not exist!".red().bold());
        return Ok(());
    }

    match inspect_dataset(&input, Some(crate::models::DEFAULT_OPTION_PREFIX)) {
        Ok((dataset, schema)) => {
            println!();
            print_preview(&dataset, &schema, 10);
        }
        Err(e) => print_error("Failed to read dataset!", &e),
    }

    Ok(())
}

fn handle_generate() -> Result<()> {
    println!("\n{}", "=== Generate Situation Pages ===".blue().bold());
    println!();

    let input = prompt_for_dataset_path("📁 Select the Excel or CSV file")?;
    if !input.exists() {
        println!("{}", "❌ Error: Input path does not exist!".red().bold());
        return Ok(());
    }

    let options = GenerationOptions::default();
    let (dataset, schema) = match inspect_dataset(&input, options.option_prefix.as_deref()) {
        Ok(loaded) => loaded,
        Err(e) => {
            print_error("Failed to read dataset!", &e);
            return Ok(());
        }
    };

    println!();
    print_preview(&dataset, &schema, 5);
    println!();

    let store = ImageStore::new()?;
    for option in &schema.options {
        let wants_image = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(format!("🖼️  Add an image for {}?", option))
            .default(false)
            .interact()?;
        if !wants_image {
            continue;
        }

        let image_path: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(format!("Image file for {}", option))
            .interact_text()?;
        if let Err(e) = store.stage_file(option, Path::new(&image_path)) {
            println!("{}", format!("⚠️  Image skipped: {}", e).yellow());
        }
    }

    let output_path: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("📂 Enter the output directory path")
        .with_initial_text("./")
        .interact_text()?;
    let output = PathBuf::from(output_path);

    let keep_pages = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt("📁 Keep the HTML pages next to the archive?")
        .default(false)
        .interact()?;

    let generate_report = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt("📄 Generate a generation report?")
        .default(false)
        .interact()?;

    let options = GenerationOptions {
        keep_pages,
        generate_report,
        ..options
    };

    println!();
    let spinner = ProgressBar::new_spinner();
    spinner.set_message("Generating pages...");
    spinner.enable_steady_tick(Duration::from_millis(100));
    let outcome = generate_from_dataset(&dataset, &store, &output, &options);
    spinner.finish_and_clear();

    match outcome {
        Ok(result) => {
            print_generation_summary(&result);
            println!();
            println!(
                "{} {}",
                "📦 Download:".cyan().bold(),
                result.archive_path.display()
            );
        }
        Err(e) => print_error("Generation failed!", &e),
    }

    Ok(())
}
