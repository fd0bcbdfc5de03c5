//! uncolumn CLI - two-column transcript reflow tool

use std::collections::HashSet;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use uncolumn::{BatchJob, JsonFormat, NormalizePreset, ReflowStats, Uncolumn, UncolumnResult};

#[derive(Parser)]
#[command(name = "uncolumn")]
#[command(version)]
#[command(about = "Reflow two-column transcripts into a single text stream", long_about = None)]
struct Cli {
    /// Input transcript file
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,

    /// Output file (default: <stem>_cleansed.txt next to the input)
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Normalization preset
    #[arg(long, value_enum, global = true, env = "UNCOLUMN_NORMALIZE")]
    normalize: Option<NormalizeLevel>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Reflow a transcript to a file or stdout
    #[command(alias = "convert")]
    Text {
        /// Input transcript file ("-" reads stdin)
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Reflow several transcripts in parallel
    Batch {
        /// Input transcript files
        #[arg(value_name = "INPUT", required = true)]
        inputs: Vec<PathBuf>,

        /// Output directory
        #[arg(short, long, value_name = "DIR")]
        output: PathBuf,
    },

    /// Show page markers and statistics for a transcript
    Info {
        /// Input transcript file ("-" reads stdin)
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show version information
    Version,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum NormalizeLevel {
    /// No rewrites, just the reflowed columns
    Raw,
    /// Strip page numbers after sentences and collapse whitespace (default)
    Standard,
    /// Unicode NFC plus the standard rewrites
    Unicode,
}

impl From<NormalizeLevel> for NormalizePreset {
    fn from(level: NormalizeLevel) -> Self {
        match level {
            NormalizeLevel::Raw => NormalizePreset::Raw,
            NormalizeLevel::Standard => NormalizePreset::Standard,
            NormalizeLevel::Unicode => NormalizePreset::Unicode,
        }
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let normalize = cli.normalize;
    let result = match cli.command {
        Some(Commands::Text { input, output }) => cmd_text(&input, output.as_deref(), normalize),
        Some(Commands::Batch { inputs, output }) => cmd_batch(&inputs, &output, normalize),
        Some(Commands::Info { input, json }) => cmd_info(&input, json),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: reflow if input is provided
            if let Some(input) = cli.input {
                cmd_reflow(&input, cli.output.as_deref(), normalize)
            } else {
                println!("{}", "Usage: uncolumn <INPUT> [OUTPUT]".yellow());
                println!("       uncolumn --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn builder(normalize: Option<NormalizeLevel>) -> Uncolumn {
    let preset = normalize.map(NormalizePreset::from).unwrap_or_default();
    Uncolumn::new().with_preset(preset)
}

/// Read from a path, or from stdin when the path is `-`.
fn process_input(reflower: &Uncolumn, input: &Path) -> uncolumn::Result<UncolumnResult> {
    if input == Path::new("-") {
        reflower.process_reader(io::stdin().lock(), "<stdin>")
    } else {
        reflower.process_file(input)
    }
}

fn output_name(input: &Path) -> String {
    let stem = input.file_stem().unwrap_or_default().to_string_lossy();
    format!("{}_cleansed.txt", stem)
}

fn default_output(input: &Path) -> PathBuf {
    input.with_file_name(output_name(input))
}

/// Resolve a path for comparison, falling back to the absolute form when it
/// does not exist yet.
fn resolve(path: &Path) -> io::Result<PathBuf> {
    match fs::canonicalize(path) {
        Ok(p) => Ok(p),
        Err(_) if path.is_absolute() => Ok(path.to_path_buf()),
        Err(_) => Ok(std::env::current_dir()?.join(path)),
    }
}

/// Map each input to `DIR/<stem>_cleansed.txt`, refusing any plan where two
/// jobs share an output or an output would replace an input.
fn plan_batch(inputs: &[PathBuf], output_dir: &Path) -> Result<Vec<BatchJob>, String> {
    let dir = resolve(output_dir).map_err(|e| format!("{}: {}", output_dir.display(), e))?;

    let mut sources = HashSet::new();
    for input in inputs {
        let resolved = resolve(input).map_err(|e| format!("{}: {}", input.display(), e))?;
        sources.insert(resolved);
    }

    let mut targets = HashSet::new();
    let mut jobs = Vec::with_capacity(inputs.len());
    for input in inputs {
        let output = dir.join(output_name(input));
        if sources.contains(&output) {
            return Err(format!(
                "output {} would overwrite an input file",
                output.display()
            ));
        }
        if !targets.insert(output.clone()) {
            return Err(format!(
                "{} maps to {}, which another input already uses",
                input.display(),
                output.display()
            ));
        }
        jobs.push(BatchJob::new(input, output));
    }
    Ok(jobs)
}

/// Write the reflowed text exactly as produced, with no trailing newline.
fn write_text<W: Write>(out: &mut W, text: &str) -> io::Result<()> {
    out.write_all(text.as_bytes())?;
    out.flush()
}

fn cmd_reflow(
    input: &Path,
    output: Option<&Path>,
    normalize: Option<NormalizeLevel>,
) -> Result<(), Box<dyn std::error::Error>> {
    let output = output
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| default_output(input));

    let result = builder(normalize).process_file(input)?;
    result.write_to(&output)?;

    println!(
        "{} {} ({} pages, {} words)",
        "Saved to".green(),
        output.display(),
        result.stats.page_count,
        result.stats.word_count
    );

    Ok(())
}

fn cmd_text(
    input: &Path,
    output: Option<&Path>,
    normalize: Option<NormalizeLevel>,
) -> Result<(), Box<dyn std::error::Error>> {
    let result = process_input(&builder(normalize), input)?;

    if let Some(path) = output {
        result.write_to(path)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        write_text(&mut io::stdout().lock(), &result.text)?;
    }

    Ok(())
}

fn cmd_batch(
    inputs: &[PathBuf],
    output_dir: &Path,
    normalize: Option<NormalizeLevel>,
) -> Result<(), Box<dyn std::error::Error>> {
    fs::create_dir_all(output_dir)?;

    let jobs = plan_batch(inputs, output_dir)?;
    log::debug!("Reflowing {} files into {}", jobs.len(), output_dir.display());

    let pb = ProgressBar::new(jobs.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("#>-"),
    );

    let results = builder(normalize).process_batch(&jobs, |job, _| {
        pb.set_message(job.input.display().to_string());
        pb.inc(1);
    });
    pb.finish_with_message("Done!");

    let mut failed = 0;
    let mut total = ReflowStats::new();
    println!("\n{}", "Output files:".green().bold());
    for (job, result) in jobs.iter().zip(&results) {
        match result {
            Ok(stats) => {
                total.merge(stats);
                println!(
                    "  {} {} ({} pages)",
                    "├─".dimmed(),
                    job.output.display(),
                    stats.page_count
                );
            }
            Err(e) => {
                failed += 1;
                println!(
                    "  {} {} {}",
                    "├─".dimmed(),
                    job.input.display(),
                    e.to_string().red()
                );
            }
        }
    }

    println!(
        "  {} {} pages, {} words",
        "└─".dimmed(),
        total.page_count,
        total.word_count
    );

    if failed > 0 {
        return Err(format!("{} of {} files failed", failed, jobs.len()).into());
    }

    Ok(())
}

fn cmd_info(input: &Path, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let result = process_input(&Uncolumn::new(), input)?;

    if json {
        println!("{}", result.to_json(JsonFormat::Pretty)?);
        return Ok(());
    }

    let stats = &result.stats;

    println!("{}", "Transcript Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    println!("{}: {}", "Lines".bold(), stats.line_count);
    println!("{}: {}", "Blank lines".bold(), stats.blank_line_count);
    println!("{}: {}", "Page markers".bold(), stats.marker_count);
    println!("{}: {}", "Pages".bold(), stats.page_count);
    println!("{}: {}", "Left fragments".bold(), stats.left_fragment_count);
    println!("{}: {}", "Right fragments".bold(), stats.right_fragment_count);

    println!();
    println!("{}", "Output Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "Words".bold(), stats.word_count);
    println!("{}: {}", "Characters".bold(), stats.char_count);

    if !result.markers.is_empty() {
        println!();
        println!("{}", "Page Markers".cyan().bold());
        println!("{}", "─".repeat(40).dimmed());
        for marker in &result.markers {
            println!("  {} {}", "•".dimmed(), marker);
        }
    }

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "uncolumn".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Two-column transcript reflow tool");
    println!();
    println!("License: MIT");
}
