//! md2wx: CLI tool to convert Markdown to paste-ready WeChat article HTML

mod config;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use config::Config;
use md2wx_core::{Converter, DEFAULT_THEME, Theme};

#[derive(Parser, Debug)]
#[command(name = "md2wx")]
#[command(about = "Convert Markdown to paste-ready WeChat article HTML")]
#[command(version)]
#[command(after_help = "Examples:
  md2wx post.md                     # Convert single file to post.html
  md2wx post.md -t dark             # Convert with the dark theme
  md2wx post.md -o out.html         # Convert to specific output file
  md2wx posts/ -o html/             # Convert directory
  md2wx posts/ -o html/ -j4         # Use 4 parallel jobs
  md2wx init                        # Write a sample _md2wx.toml")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Input Markdown file or directory
    input: Option<PathBuf>,

    /// Output file or directory
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Theme name (professional, elegant, vibrant, dark)
    #[arg(short, long)]
    theme: Option<String>,

    /// Number of parallel jobs (defaults to number of CPUs)
    #[arg(short, long)]
    jobs: Option<usize>,

    /// Process directories recursively
    #[arg(short, long)]
    recursive: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Quiet mode - only show errors
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write a sample `_md2wx.toml` configuration file
    Init {
        /// Output path for the configuration file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print the configuration JSON schema to stdout instead
        #[arg(long)]
        schema: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(Command::Init { output, schema }) = &cli.command {
        return init_config(output.as_deref(), *schema);
    }

    let Some(input) = cli.input.as_deref() else {
        anyhow::bail!("No input given. Run `md2wx --help` for usage.");
    };

    let settings = Settings::resolve(&cli, input)?;

    if input.is_file() {
        convert_file(input, cli.output.as_deref(), &settings)?;
    } else if input.is_dir() {
        convert_directory(input, cli.output.as_deref(), &cli, &settings)?;
    } else {
        anyhow::bail!("Input path does not exist: {}", input.display());
    }

    Ok(())
}

/// Effective conversion settings: CLI flag > config file > built-in default.
struct Settings {
    theme: String,
    extension: String,
    verbose: bool,
    quiet: bool,
}

impl Settings {
    fn resolve(cli: &Cli, input: &Path) -> Result<Self> {
        let config_dir = if input.is_file() {
            input.parent().unwrap_or(Path::new("."))
        } else {
            input
        };
        let config = Config::load_from_dir(config_dir)?.unwrap_or_default();

        let theme = cli
            .theme
            .clone()
            .or(config.output.theme)
            .unwrap_or_else(|| DEFAULT_THEME.to_string());

        if cli.verbose && Theme::lookup(&theme).name != theme {
            eprintln!(
                "Unknown theme '{}', using '{}' (available: {})",
                theme,
                DEFAULT_THEME,
                Theme::names().collect::<Vec<_>>().join(", ")
            );
        }

        Ok(Self {
            theme,
            extension: config.output.extension.unwrap_or_else(|| "html".to_string()),
            verbose: cli.verbose,
            quiet: cli.quiet,
        })
    }
}

/// Write a sample configuration file, or print the JSON schema.
fn init_config(output: Option<&Path>, schema: bool) -> Result<()> {
    if schema {
        println!("{}", Config::json_schema_string()?);
        return Ok(());
    }

    let path = output.unwrap_or(Path::new(config::CONFIG_FILE_NAME));
    let content = Config::sample().to_toml_with_schema()?;
    fs::write(path, content).with_context(|| format!("Failed to write: {}", path.display()))?;
    println!("{}", path.display());
    Ok(())
}

/// Convert a single Markdown file
fn convert_file(input: &Path, output: Option<&Path>, settings: &Settings) -> Result<()> {
    let output_path = match output {
        Some(p) => p.to_path_buf(),
        None => input.with_extension(&settings.extension),
    };

    if settings.verbose {
        eprintln!(
            "Converting: {} -> {} (theme: {})",
            input.display(),
            output_path.display(),
            settings.theme
        );
    }

    convert_file_inner(input, &output_path, settings)?;

    if !settings.quiet {
        println!("{}", output_path.display());
    }

    Ok(())
}

/// Convert a directory of Markdown files
fn convert_directory(
    input: &Path,
    output: Option<&Path>,
    cli: &Cli,
    settings: &Settings,
) -> Result<()> {
    let output_dir = output.unwrap_or(input);

    let files = collect_markdown_files(input, cli.recursive)?;

    if files.is_empty() {
        if !settings.quiet {
            eprintln!("No Markdown files found in {}", input.display());
        }
        return Ok(());
    }

    if settings.verbose {
        eprintln!("Found {} Markdown files", files.len());
    }

    // Configure thread pool if jobs specified
    if let Some(n) = cli.jobs {
        rayon::ThreadPoolBuilder::new()
            .num_threads(n)
            .build_global()
            .ok(); // Ignore error if already initialized
    }

    // Atomic counters for thread-safe progress tracking
    let success = AtomicUsize::new(0);
    let failed = AtomicUsize::new(0);

    // Parallel conversion; each file gets its own converter instance
    let errors: Vec<_> = files
        .par_iter()
        .filter_map(|file| {
            let relative = file.strip_prefix(input).unwrap_or(file);
            let output_file = output_dir
                .join(relative)
                .with_extension(&settings.extension);

            match convert_file_inner(file, &output_file, settings) {
                Ok(()) => {
                    success.fetch_add(1, Ordering::Relaxed);
                    if !settings.quiet {
                        println!("{}", output_file.display());
                    }
                    None
                }
                Err(e) => {
                    failed.fetch_add(1, Ordering::Relaxed);
                    Some((file.clone(), e))
                }
            }
        })
        .collect();

    // Report errors
    for (file, e) in &errors {
        eprintln!("Error converting {}: {}", file.display(), e);
    }

    let success_count = success.load(Ordering::Relaxed);
    let failed_count = failed.load(Ordering::Relaxed);

    if !settings.quiet {
        eprintln!("Converted {} files, {} failed", success_count, failed_count);
    }

    if failed_count > 0 {
        anyhow::bail!("{} files failed to convert", failed_count);
    }

    Ok(())
}

/// Inner conversion function that doesn't print (for parallel use)
fn convert_file_inner(input: &Path, output: &Path, settings: &Settings) -> Result<()> {
    let content = fs::read_to_string(input)
        .with_context(|| format!("Failed to read: {}", input.display()))?;

    let html = Converter::new(&settings.theme)
        .convert(&content)
        .with_context(|| format!("Failed to convert: {}", input.display()))?;

    if let Some(parent) = output.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    fs::write(output, &html).with_context(|| format!("Failed to write: {}", output.display()))?;

    Ok(())
}

/// Collect all Markdown files in a directory
fn collect_markdown_files(dir: &Path, recursive: bool) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in
        fs::read_dir(dir).with_context(|| format!("Failed to read directory: {}", dir.display()))?
    {
        let entry = entry?;
        let path = entry.path();

        if path.is_file() {
            if let Some(ext) = path.extension() {
                if ext.eq_ignore_ascii_case("md") || ext.eq_ignore_ascii_case("markdown") {
                    files.push(path);
                }
            }
        } else if path.is_dir() && recursive {
            files.extend(collect_markdown_files(&path, recursive)?);
        }
    }

    files.sort();
    Ok(files)
}
