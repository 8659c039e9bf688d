//! Command line front end for the QR batch pipeline.
//!
//! Runs the same validation, generation and rendering as `POST /generate-qr`
//! without starting the HTTP server.
//!
//! # Usage
//!
//! ```bash
//! # List the available categories
//! cargo run --bin qrgen -- categories
//!
//! # Write 10 website QR codes to a PDF
//! cargo run --bin qrgen -- generate --category WEBSITE_URL --count 10 --color '#112233'
//!
//! # Reproducible output, print samples only
//! cargo run --bin qrgen -- generate --category MECARD --count 5 --seed 42 --dry-run
//! ```
//!
//! When `--category` is omitted an interactive picker is shown. An existing
//! output file is only replaced after confirmation, or with `--force`.

use qr_batch::api::dto::generate::GenerateQrForm;
use qr_batch::api::handlers::generate::PDF_FILE_NAME;
use qr_batch::domain::entities::{Category, GenerationRequest};
use qr_batch::error::AppError;
use qr_batch::state::AppState;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Select};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;

/// CLI tool for generating QR code sheets.
#[derive(Parser)]
#[command(name = "qrgen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the sample data categories
    Categories,

    /// Generate a PDF of QR codes
    Generate {
        /// Category key (e.g. WEBSITE_URL, E-MAIL); prompts when omitted
        #[arg(short = 'p', long)]
        category: Option<String>,

        /// Number of codes (1-100)
        #[arg(short = 'n', long, default_value_t = 10)]
        count: u32,

        /// Dark module color as #RRGGBB
        #[arg(short, long, default_value = "#000000")]
        color: String,

        /// Output file
        #[arg(short, long, default_value = PDF_FILE_NAME)]
        output: PathBuf,

        /// Seed for reproducible samples
        #[arg(long)]
        seed: Option<u64>,

        /// Print the generated samples without writing a PDF
        #[arg(long)]
        dry_run: bool,

        /// Overwrite the output file without asking
        #[arg(short, long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Categories => list_categories(),
        Commands::Generate {
            category,
            count,
            color,
            output,
            seed,
            dry_run,
            force,
        } => {
            let prefix = match category {
                Some(key) => key,
                None => pick_category()?,
            };

            let form = GenerateQrForm {
                code_count: count.to_string(),
                prefix,
                color,
            };

            let request = GenerationRequest::try_from(form).map_err(describe_error)?;
            generate(request, output, seed, dry_run, force)?;
        }
    }

    Ok(())
}

fn list_categories() {
    println!("{}", "Categories".bright_blue().bold());
    for category in Category::ALL {
        println!("  {:<14} {}", category.key().cyan(), category.label());
    }
}

fn pick_category() -> Result<String> {
    let labels: Vec<_> = Category::ALL.iter().map(|c| c.label()).collect();

    let index = Select::new()
        .with_prompt("Data type")
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(Category::ALL[index].key().to_string())
}

/// Flattens a validation error into one line per failing field.
fn describe_error(err: AppError) -> anyhow::Error {
    let info = err.to_error_info();

    let fields = info
        .details
        .as_object()
        .map(|fields| {
            fields
                .iter()
                .map(|(field, errors)| {
                    let message = errors[0]["message"].as_str().unwrap_or_default();
                    format!("  {field}: {message}")
                })
                .collect::<Vec<_>>()
                .join("\n")
        })
        .unwrap_or_default();

    anyhow::anyhow!("{}\n{}", info.message, fields)
}

fn generate(
    request: GenerationRequest,
    output: PathBuf,
    seed: Option<u64>,
    dry_run: bool,
    force: bool,
) -> Result<()> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let state = AppState::default();
    let document = state.batch_generator.generate(&request, &mut rng)?;

    println!(
        "{} {} {} codes",
        "Generated".green().bold(),
        document.len(),
        request.category().label()
    );
    for (i, entry) in document.iter().enumerate() {
        println!("  {:>3}. {}", i + 1, entry.data);
    }

    if dry_run {
        return Ok(());
    }

    if output.exists() && !force {
        let overwrite = Confirm::new()
            .with_prompt(format!("{} exists. Overwrite?", output.display()))
            .default(false)
            .interact()?;

        if !overwrite {
            println!("{}", "Cancelled".yellow());
            return Ok(());
        }
    }

    let bytes = state.batch_generator.render_document(&document)?;
    std::fs::write(&output, &bytes)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    println!(
        "{} {} ({} bytes)",
        "Saved".green().bold(),
        output.display().to_string().cyan(),
        bytes.len()
    );

    Ok(())
}
