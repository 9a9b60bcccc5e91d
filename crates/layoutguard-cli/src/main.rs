//! CLI entry point for layoutguard.
//!
//! This module is thin: it handles argument parsing, I/O, logging setup and exit codes.
//! All business logic lives in the `layoutguard-app` crate.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use layoutguard_app::{
    CheckInput, ExplainOutput, PathSource, parse_report_json, render_annotations,
    render_markdown, render_text, run_check, run_explain, runtime_error_report, serialize_report,
    to_renderable, verdict_exit_code,
};
use layoutguard_settings::Overrides;
use tracing::debug;

#[derive(Parser, Debug)]
#[command(
    name = "layoutguard",
    version,
    about = "Directory layout convention guard for source trees"
)]
struct Cli {
    /// Base directory the checked tree lives in.
    #[arg(long, default_value = ".")]
    root: Utf8PathBuf,

    /// Path to layoutguard config TOML, relative to --root. It is never checked itself.
    #[arg(long, default_value = "layoutguard.toml")]
    config: Utf8PathBuf,

    /// Override profile (strict|warn).
    #[arg(long)]
    profile: Option<String>,

    /// Override maximum findings to emit.
    #[arg(long)]
    max_findings: Option<u32>,

    /// Increase log verbosity (-v debug, -vv trace). RUST_LOG wins when set.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Markdown,
    Annotations,
    Json,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Check every path below <root>/<sub-dir> against the layout conventions.
    ///
    /// Hidden entries such as `.git` are listed like any other; add them to
    /// `exclude` in layoutguard.toml to skip them.
    Check {
        /// Subdirectory of --root to list; reported paths are relative to it.
        #[arg(long, default_value = ".")]
        sub_dir: Utf8PathBuf,

        /// Read newline-separated tree paths from FILE (or `-` for stdin) instead of listing.
        #[arg(long, value_name = "FILE")]
        paths_from: Option<String>,

        /// Output format written to stdout.
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Also write the JSON report to this file.
        #[arg(long)]
        report_out: Option<Utf8PathBuf>,
    },

    /// Render markdown from an existing JSON report.
    Md {
        /// Path to the JSON report file.
        #[arg(long)]
        report: Utf8PathBuf,

        /// Where to write the Markdown output (if not specified, prints to stdout).
        #[arg(long, short)]
        output: Option<Utf8PathBuf>,
    },

    /// Render GitHub Actions annotations from an existing JSON report.
    Annotations {
        /// Path to the JSON report file.
        #[arg(long)]
        report: Utf8PathBuf,

        /// Prefix joined to tree paths to form repo-relative file names.
        #[arg(long, default_value = ".")]
        path_prefix: String,

        /// Maximum number of annotations to emit.
        #[arg(long, default_value = "10")]
        max: usize,
    },

    /// Explain a rule_id or code with remediation guidance.
    Explain {
        /// The rule_id (e.g., "communication.subdir") or code (e.g., "invalid_source_file").
        identifier: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.cmd {
        Commands::Check {
            ref sub_dir,
            ref paths_from,
            format,
            ref report_out,
        } => cmd_check(
            &cli,
            sub_dir.clone(),
            paths_from.clone(),
            format,
            report_out.clone(),
        ),
        Commands::Md { report, output } => cmd_md(report, output),
        Commands::Annotations {
            report,
            path_prefix,
            max,
        } => cmd_annotations(report, &path_prefix, max),
        Commands::Explain { identifier } => cmd_explain(&identifier),
    }
}

fn init_tracing(verbose: u8) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn cmd_check(
    cli: &Cli,
    sub_dir: Utf8PathBuf,
    paths_from: Option<String>,
    format: OutputFormat,
    report_out: Option<Utf8PathBuf>,
) -> anyhow::Result<()> {
    let result = (|| -> anyhow::Result<i32> {
        if !cli.root.is_dir() {
            anyhow::bail!("root is not a directory: {}", cli.root);
        }

        // Missing config file is allowed (defaults apply).
        let cfg_path = cli.root.join(&cli.config);
        let cfg_text = if cfg_path.is_file() {
            std::fs::read_to_string(&cfg_path).with_context(|| format!("read config: {cfg_path}"))?
        } else {
            debug!(%cfg_path, "no config file, using defaults");
            String::new()
        };

        let overrides = Overrides {
            profile: cli.profile.clone(),
            max_findings: cli.max_findings,
        };

        let source = match paths_from.as_deref() {
            Some(from) => PathSource::List(layoutguard_repo::read_path_list(&read_input(from)?)),
            None => PathSource::Directory {
                root: &cli.root,
                sub_dir: &sub_dir,
                config_file: Some(&cfg_path),
            },
        };

        let output = run_check(CheckInput {
            source,
            config_text: &cfg_text,
            overrides,
        })?;

        if let Some(path) = &report_out {
            let data = serialize_report(&output.report)?;
            write_file(path, &data).context("write report json")?;
        }

        match format {
            OutputFormat::Json => {
                let data = serialize_report(&output.report)?;
                println!("{}", String::from_utf8_lossy(&data));
            }
            OutputFormat::Text => println!("{}", render_text(&to_renderable(&output.report))),
            OutputFormat::Markdown => print!("{}", render_markdown(&to_renderable(&output.report))),
            OutputFormat::Annotations => {
                let renderable = to_renderable(&output.report);
                for line in render_annotations(&renderable, sub_dir.as_str(), usize::MAX) {
                    println!("{}", line);
                }
            }
        }

        Ok(verdict_exit_code(output.report.verdict))
    })();

    match result {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
            Ok(())
        }
        Err(err) => {
            if let Some(path) = &report_out {
                let report = runtime_error_report(&format!("{err:#}"));
                if let Ok(data) = serialize_report(&report) {
                    let _ = write_file(path, &data);
                }
            }
            eprintln!("layoutguard error: {err:#}");
            std::process::exit(1);
        }
    }
}

fn read_input(from: &str) -> anyhow::Result<String> {
    if from == "-" {
        std::io::read_to_string(std::io::stdin()).context("read paths from stdin")
    } else {
        std::fs::read_to_string(from).with_context(|| format!("read paths: {from}"))
    }
}

fn write_file(path: &Utf8Path, data: &[u8]) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_str().is_empty()
    {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {}", parent))?;
    }
    std::fs::write(path, data).with_context(|| format!("write: {}", path))?;
    Ok(())
}

fn cmd_md(report_path: Utf8PathBuf, output: Option<Utf8PathBuf>) -> anyhow::Result<()> {
    let report_text = std::fs::read_to_string(&report_path)
        .with_context(|| format!("read report: {}", report_path))?;
    let report = parse_report_json(&report_text)?;
    let md = render_markdown(&to_renderable(&report));

    if let Some(out_path) = output {
        write_file(&out_path, md.as_bytes()).context("write markdown output")?;
    } else {
        print!("{}", md);
    }

    Ok(())
}

fn cmd_annotations(report_path: Utf8PathBuf, path_prefix: &str, max: usize) -> anyhow::Result<()> {
    let report_text = std::fs::read_to_string(&report_path)
        .with_context(|| format!("read report: {}", report_path))?;
    let report = parse_report_json(&report_text)?;
    let renderable = to_renderable(&report);

    for annotation in render_annotations(&renderable, path_prefix, max) {
        println!("{}", annotation);
    }

    Ok(())
}

fn cmd_explain(identifier: &str) -> anyhow::Result<()> {
    match run_explain(identifier) {
        ExplainOutput::Found(card) => {
            print!("{}", layoutguard_app::format_explanation(&card));
            Ok(())
        }
        ExplainOutput::NotFound {
            identifier,
            suggestions,
        } => {
            eprint!(
                "{}",
                layoutguard_app::format_not_found(&identifier, &suggestions)
            );
            std::process::exit(1);
        }
    }
}
