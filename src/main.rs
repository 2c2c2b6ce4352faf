use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;

use job_signals::{
    extract_mentions, filter_by_level, level_counts, normalize_description, Analyzer,
    ExperienceLevel, JobPosting, JobRecord, Settings,
};

#[derive(Parser)]
#[command(name = "job_signals", about = "Seniority and years-of-experience signals from job postings")]
struct Cli {
    /// TOML settings file (resolution policy)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a single title + description and print the result as JSON
    Analyze {
        #[arg(short, long)]
        title: String,
        /// Description text (plain, no markup)
        #[arg(short, long, conflicts_with = "description_file")]
        description: Option<String>,
        /// Read the description from a file instead
        #[arg(long)]
        description_file: Option<PathBuf>,
        /// Also print every matched phrase with its resolved value
        #[arg(long)]
        mentions: bool,
    },
    /// Analyze a JSON array of postings
    Batch {
        /// Postings file (scraper or JobTech JSON)
        input: PathBuf,
        /// Keep only records at this level (senior, junior, mid-level, not-specified)
        #[arg(short, long)]
        level: Option<ExperienceLevel>,
        /// Write analyzed records as JSON
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Max rows to display
        #[arg(short = 'n', long, default_value = "50")]
        limit: usize,
    },
    /// Per-level counts for a postings file
    Stats {
        input: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();

    job_signals::extract::patterns::warm_up();
    let settings = Settings::load(cli.config.as_deref())?;
    let analyzer = Analyzer::new(settings.policy);
    info!(policy = ?analyzer.policy(), "analyzer ready");

    let result = match cli.command {
        Commands::Analyze {
            title,
            description,
            description_file,
            mentions,
        } => {
            let raw = match description_file {
                Some(path) => std::fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read {:?}", path))?,
                None => description.unwrap_or_default(),
            };
            let description = normalize_description(&raw);
            let analysis = analyzer.analyze(&title, &description);
            println!("{}", serde_json::to_string_pretty(&analysis)?);

            if mentions {
                for m in extract_mentions(&description) {
                    let value = m.value.map(|v| v.to_string()).unwrap_or_else(|| "-".into());
                    println!(
                        "{:>6}..{:<6} {:<16} {:>3}  {}",
                        m.span.start,
                        m.span.end,
                        format!("{:?}", m.kind),
                        value,
                        m.text
                    );
                }
            }
            Ok(())
        }
        Commands::Batch {
            input,
            level,
            output,
            limit,
        } => {
            let postings = load_postings(&input)?;
            if postings.is_empty() {
                println!("No postings in {:?}.", input);
                return Ok(());
            }
            println!("Analyzing {} postings...", postings.len());
            let records = analyze_postings(&analyzer, &postings)?;

            let selected: Vec<&JobRecord> = match level {
                Some(lvl) => filter_by_level(&records, lvl),
                None => records.iter().collect(),
            };

            print_overview(&selected, limit);

            if let Some(path) = output {
                let json = serde_json::to_string_pretty(&selected)?;
                std::fs::write(&path, json).with_context(|| format!("Failed to write {:?}", path))?;
                println!("Wrote {} records to {:?}", selected.len(), path);
            }
            Ok(())
        }
        Commands::Stats { input } => {
            let postings = load_postings(&input)?;
            let records = analyze_postings(&analyzer, &postings)?;
            for (lvl, count) in level_counts(&records) {
                println!("{:<14} {}", format!("{}:", lvl), count);
            }
            let with_years = records.iter().filter(|r| !r.years_of_experience.is_empty()).count();
            println!("{:<14} {}", "With years:", with_years);
            println!("{:<14} {}", "Total:", records.len());
            Ok(())
        }
    };

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        println!("\nDone in {}", format_duration(elapsed));
    }

    result
}

fn load_postings(path: &Path) -> anyhow::Result<Vec<JobPosting>> {
    let raw = std::fs::read_to_string(path).with_context(|| format!("Failed to read {:?}", path))?;
    let postings: Vec<JobPosting> =
        serde_json::from_str(&raw).with_context(|| format!("Failed to parse postings in {:?}", path))?;
    info!(count = postings.len(), path = ?path, "loaded postings");
    Ok(postings)
}

fn analyze_postings(analyzer: &Analyzer, postings: &[JobPosting]) -> anyhow::Result<Vec<JobRecord>> {
    use indicatif::{ProgressBar, ProgressStyle};
    use rayon::prelude::*;

    let pb = ProgressBar::new(postings.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({per_sec})")?
            .progress_chars("#>-"),
    );

    let mut records = Vec::with_capacity(postings.len());
    for chunk in postings.chunks(500) {
        let analyzed: Vec<JobRecord> = chunk
            .par_iter()
            .map(|p| {
                let posting = JobPosting {
                    description: p.description.as_deref().map(normalize_description),
                    ..p.clone()
                };
                analyzer.analyze_posting(&posting)
            })
            .collect();
        records.extend(analyzed);
        pb.inc(chunk.len() as u64);
    }

    pb.finish_and_clear();
    Ok(records)
}

fn print_overview(records: &[&JobRecord], limit: usize) {
    if records.is_empty() {
        println!("No matching postings.");
        return;
    }

    println!(
        "{:>3} | {:<32} | {:<20} | {:<13} | {:>4} | {:<12}",
        "#", "Title", "Company", "Level", "Min", "Years"
    );
    println!("{}", "-".repeat(98));

    for (i, r) in records.iter().take(limit).enumerate() {
        let title = truncate(r.posting.title.as_deref().unwrap_or("-"), 32);
        let company = truncate(r.posting.company.as_deref().unwrap_or("-"), 20);
        let years = r
            .years_of_experience
            .iter()
            .map(|y| y.to_string())
            .collect::<Vec<_>>()
            .join(",");
        println!(
            "{:>3} | {:<32} | {:<20} | {:<13} | {:>4} | {:<12}",
            i + 1,
            title,
            company,
            r.experience_level,
            r.min_years_required,
            truncate(&years, 12)
        );
    }

    if records.len() > limit {
        println!("... {} more", records.len() - limit);
    }
    println!("\n{} postings", records.len());
}

/// Cut to at most `max` chars, ellipsis included, so table columns stay aligned.
fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out: String = s.chars().take(max.saturating_sub(1)).collect();
    out.push('…');
    out
}

fn format_duration(d: std::time::Duration) -> String {
    match d.as_secs() {
        s if s < 60 => format!("{:.1}s", d.as_secs_f64()),
        s => format!("{}m {:02}s", s / 60, s % 60),
    }
}
