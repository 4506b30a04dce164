//! CLI entry point for the job-advertisement preprocessing pipeline.

use anyhow::{anyhow, Result};
use clap::Parser;
use dotenv::dotenv;
use jobad_processing::translate::{HttpTranslationProvider, HttpTranslatorConfig};
use jobad_processing::{
    Lexicon, Pipeline, PipelineConfig, PipelineResult, TranslationProvider,
};
use polars::io::csv::read::CsvReadOptions;
use polars::prelude::*;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Job-advertisement preprocessing pipeline",
    long_about = "Cleans, translates, and imputes a spreadsheet of bilingual\n\
                  (Persian/English) job advertisements.\n\n\
                  ENVIRONMENT VARIABLES:\n  \
                  TRANSLATE_URL        Translation endpoint (LibreTranslate-compatible)\n  \
                  TRANSLATE_API_KEY    API key for the translation endpoint\n\n\
                  EXAMPLES:\n  \
                  # Basic usage with both lexicons\n  \
                  jobad-processing -i ads.csv -o cleaned.csv \\\n      \
                      --city-lexicon lexicons/cities.txt \\\n      \
                      --keyword-lexicon lexicons/keywords.txt\n\n  \
                  # Offline run (Persian text left untranslated)\n  \
                  jobad-processing -i ads.csv -o cleaned.csv --no-translate"
)]
struct Args {
    /// Path to the CSV file of raw job advertisements
    #[arg(short, long)]
    input: PathBuf,

    /// Path for the cleaned output CSV
    #[arg(short, long, default_value = "cleaned_ads.csv")]
    output: PathBuf,

    /// City-name lexicon file (key:value per line)
    ///
    /// Unknown cities pass through unchanged; without a lexicon every
    /// city does.
    #[arg(long)]
    city_lexicon: Option<PathBuf>,

    /// Keyword canonicalization lexicon file (key:value per line)
    #[arg(long)]
    keyword_lexicon: Option<PathBuf>,

    /// Skip translation entirely (Persian text passes through as-is)
    #[arg(long)]
    no_translate: bool,

    /// Translation endpoint URL (overrides TRANSLATE_URL)
    #[arg(long)]
    translate_url: Option<String>,

    /// Extra attempts after a failed translation call
    #[arg(long, default_value = "2")]
    translation_retries: usize,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Suppress progress output (only show warnings and errors)
    #[arg(short, long)]
    quiet: bool,

    /// Output the run summary as JSON to stdout instead of human-readable text
    ///
    /// Disables all progress logs; only the JSON summary reaches stdout.
    #[arg(long)]
    json: bool,
}

/// Initialize the tracing subscriber for logging.
///
/// When `json_output` is true, logging is completely disabled to ensure
/// only JSON is written to stdout.
fn init_logging(level: &str, quiet: bool, json_output: bool) {
    if json_output {
        return;
    }

    use tracing_subscriber::EnvFilter;

    let effective_level = if quiet { "warn" } else { level };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(effective_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(&args.log_level, args.quiet, args.json);

    // Load environment variables from .env file
    dotenv().ok();

    if !args.input.exists() {
        return Err(anyhow!("Input file not found: {}", args.input.display()));
    }

    // Lexicon load failures are fatal: the run cannot proceed without its
    // controlled vocabularies.
    let city_lexicon = load_lexicon(args.city_lexicon.as_deref(), "city")?;
    let keyword_lexicon = load_lexicon(args.keyword_lexicon.as_deref(), "keyword")?;

    let config = PipelineConfig::builder()
        .translation_retries(args.translation_retries)
        .build()?;

    let mut builder = Pipeline::builder()
        .config(config)
        .city_lexicon(city_lexicon)
        .keyword_lexicon(keyword_lexicon);

    if !args.no_translate {
        builder = builder.translation_provider(build_translation_provider(&args)?);
    } else {
        info!("Translation disabled; Persian text passes through as-is");
    }

    let pipeline = builder.build()?;

    info!("Loading dataset from: {}", args.input.display());
    let data = load_csv(&args.input)?;
    info!("Dataset loaded successfully: {:?}", data.shape());

    let result = pipeline.process(data)?;

    write_output(&result, &args.output)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result.summary)?);
    } else {
        print_summary(&result, &args);
    }

    Ok(())
}

/// Load one of the two lexicons, or default to an empty pass-through one.
fn load_lexicon(path: Option<&std::path::Path>, kind: &str) -> Result<Lexicon> {
    match path {
        Some(path) => {
            let lexicon = Lexicon::load(path)?;
            info!(
                "Loaded {} lexicon from {} ({} entries)",
                kind,
                path.display(),
                lexicon.len()
            );
            Ok(lexicon)
        }
        None => {
            warn!("No {} lexicon given; tokens pass through unchanged", kind);
            Ok(Lexicon::default())
        }
    }
}

/// Build the HTTP translation provider from CLI flags and environment.
fn build_translation_provider(args: &Args) -> Result<Arc<dyn TranslationProvider>> {
    let mut builder = HttpTranslatorConfig::builder();

    if let Some(url) = args
        .translate_url
        .clone()
        .or_else(|| std::env::var("TRANSLATE_URL").ok())
    {
        builder = builder.base_url(url);
    }
    if let Ok(key) = std::env::var("TRANSLATE_API_KEY") {
        builder = builder.api_key(key);
    }

    let config = builder.build();
    info!("Using translation endpoint: {}", config.base_url);
    Ok(Arc::new(HttpTranslationProvider::with_config(config)?))
}

/// Read the input CSV with every column as a String series.
///
/// Type inference is disabled on purpose: the cleaners own all parsing,
/// and a column like Remote must not arrive pre-coerced to boolean.
fn load_csv(path: &std::path::Path) -> Result<DataFrame> {
    CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))?
        .finish()
        .map_err(|e| anyhow!("Failed to read {}: {}", path.display(), e))
}

/// Write the cleaned dataset to the output CSV.
fn write_output(result: &PipelineResult, path: &PathBuf) -> Result<()> {
    let mut df = result.data.clone();
    let mut file = std::fs::File::create(path)
        .map_err(|e| anyhow!("Failed to create {}: {}", path.display(), e))?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(&mut df)?;
    info!("Cleaned dataset written to: {}", path.display());
    Ok(())
}

/// Print a human-readable summary of the run.
///
/// Uses `println!` intentionally: this is the primary user-facing output
/// and should be visible regardless of log level.
fn print_summary(result: &PipelineResult, args: &Args) {
    let summary = &result.summary;

    println!();
    println!("{}", "=".repeat(70));
    println!("PREPROCESSING COMPLETE");
    println!("{}", "=".repeat(70));
    println!();
    println!(
        "Input:  {} ({} rows)",
        args.input.display(),
        summary.rows_before
    );
    println!(
        "Output: {} ({} rows)",
        args.output.display(),
        summary.rows_after
    );
    println!();
    println!("Processing Summary:");
    println!("  Duration: {}ms", summary.duration_ms);
    println!(
        "  Empty rows/columns dropped: {}/{}",
        summary.empty_rows_dropped, summary.empty_columns_dropped
    );
    println!(
        "  Cells translated: {} ({} left untranslated)",
        summary.translated_cells, summary.untranslated_cells
    );
    println!(
        "  Keyword vocabulary: {} tokens, {} rows enriched",
        summary.vocabulary_size, summary.rows_with_inferred_keywords
    );
    println!(
        "  Rows dropped for missing keywords: {}",
        summary.rows_dropped_missing_keywords
    );

    if summary.imputed_cells.is_empty() {
        println!("  Imputed cells: none");
    } else {
        println!("  Imputed cells:");
        for (column, count) in &summary.imputed_cells {
            println!("    {:<15} {}", column, count);
        }
    }
    println!();
}
