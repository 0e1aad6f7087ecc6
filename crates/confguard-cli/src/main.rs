//! CLI entry point for confguard.
//!
//! This module is intentionally thin: it handles argument parsing, I/O, and exit codes.
//! All business logic lives in the `confguard-app` crate.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand, ValueEnum};
use confguard_app::{
    CheckInput, ExplainOutput, RuleSource, parse_report_json, render_annotations, render_console,
    render_markdown, run_check, run_explain, runtime_error_report, serialize_report,
    to_renderable, verdict_exit_code,
};
use confguard_types::ConfguardReport;
use std::collections::BTreeMap;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const LOG_ENV: &str = "CONFGUARD_LOG";

#[derive(Parser, Debug)]
#[command(
    name = "confguard",
    version,
    about = "Declarative policy checks for YAML configuration files"
)]
struct Cli {
    /// Log filter (e.g. `warn`, `debug`, `confguard_repo=trace`); overrides CONFGUARD_LOG.
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Emit log lines as JSON.
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate configuration files and report findings.
    Check {
        /// Files or directories to validate.
        #[arg(required = true)]
        paths: Vec<Utf8PathBuf>,

        /// Product catalog used to pick the rules for each file.
        #[arg(long, default_value = "products.yaml")]
        products: Utf8PathBuf,

        /// Validate every file against this rules directory instead of detecting products.
        #[arg(long)]
        rules_dir: Option<Utf8PathBuf>,

        /// Print the JSON report to stdout instead of the console summary.
        #[arg(long)]
        json: bool,

        /// Where to write the JSON report.
        #[arg(long)]
        report_out: Option<Utf8PathBuf>,

        /// Write a Markdown report.
        #[arg(long)]
        write_markdown: bool,

        /// Where to write the Markdown report (if enabled).
        #[arg(long, default_value = "artifacts/confguard/comment.md")]
        markdown_out: Utf8PathBuf,
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

        /// Maximum number of annotations to emit.
        #[arg(long, default_value = "10")]
        max: usize,
    },

    /// Explain a rule kind with its parameters and an example rule file.
    Explain {
        /// The rule kind (e.g. "required_field").
        kind: String,
    },

    /// Print a JSON schema.
    Schema {
        #[arg(value_enum)]
        which: SchemaKind,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum SchemaKind {
    /// The JSON report emitted by `check`.
    Report,
    /// A rule definition file.
    Rule,
    /// The product catalog.
    Products,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.log_level.as_deref(), cli.log_json);

    let result = match cli.cmd {
        Commands::Check {
            paths,
            products,
            rules_dir,
            json,
            report_out,
            write_markdown,
            markdown_out,
        } => cmd_check(CheckArgs {
            paths,
            products,
            rules_dir,
            json,
            report_out,
            markdown_out: write_markdown.then_some(markdown_out),
        }),
        Commands::Md { report, output } => cmd_md(&report, output.as_deref()).map(|()| 0),
        Commands::Annotations { report, max } => cmd_annotations(&report, max).map(|()| 0),
        Commands::Explain { kind } => Ok(cmd_explain(&kind)),
        Commands::Schema { which } => cmd_schema(which).map(|()| 0),
    };

    match result {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("confguard error: {err:#}");
            std::process::exit(1);
        }
    }
}

fn init_tracing(level: Option<&str>, json: bool) {
    let filter = match level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

struct CheckArgs {
    paths: Vec<Utf8PathBuf>,
    products: Utf8PathBuf,
    rules_dir: Option<Utf8PathBuf>,
    json: bool,
    report_out: Option<Utf8PathBuf>,
    markdown_out: Option<Utf8PathBuf>,
}

fn cmd_check(args: CheckArgs) -> anyhow::Result<i32> {
    let source = match &args.rules_dir {
        Some(dir) => RuleSource::RulesDir(dir),
        None => RuleSource::Products(&args.products),
    };
    let input = CheckInput {
        paths: &args.paths,
        source,
    };

    let output = match run_check(input) {
        Ok(output) => output,
        Err(err) => {
            if let Some(path) = &args.report_out {
                let report = runtime_error_report(&format!("{err:#}"));
                if let Err(write_err) = write_report_file(path, &report) {
                    tracing::warn!(error = %write_err, "failed to write runtime error report");
                }
            }
            return Err(err);
        }
    };
    let report = output.report;

    if let Some(path) = &args.report_out {
        write_report_file(path, &report).context("write report json")?;
    }

    let renderable = to_renderable(&report);
    if let Some(path) = &args.markdown_out {
        write_text_file(path, &render_markdown(&renderable)).context("write markdown")?;
    }

    if args.json {
        let data = serialize_report(&report)?;
        println!("{}", String::from_utf8_lossy(&data));
    } else {
        print!("{}", format_product_counts(&report.data.products));
        print!("{}", render_console(&renderable));
    }

    Ok(verdict_exit_code(report.verdict))
}

fn format_product_counts(products: &BTreeMap<String, u32>) -> String {
    if products.is_empty() {
        return String::new();
    }
    let mut out = format!("Loaded rules for {} product(s):\n", products.len());
    for (name, count) in products {
        out.push_str(&format!("  - {name}: {count} rule(s)\n"));
    }
    out.push('\n');
    out
}

fn write_report_file(path: &Utf8Path, report: &ConfguardReport) -> anyhow::Result<()> {
    let data = serialize_report(report)?;
    create_parent(path)?;
    std::fs::write(path, data).with_context(|| format!("write report: {}", path))?;
    Ok(())
}

fn write_text_file(path: &Utf8Path, text: &str) -> anyhow::Result<()> {
    create_parent(path)?;
    std::fs::write(path, text).with_context(|| format!("write text: {}", path))?;
    Ok(())
}

fn create_parent(path: &Utf8Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create directory: {}", parent))?;
    }
    Ok(())
}

fn read_report(path: &Utf8Path) -> anyhow::Result<ConfguardReport> {
    let text =
        std::fs::read_to_string(path).with_context(|| format!("read report: {}", path))?;
    parse_report_json(&text)
}

fn cmd_md(report_path: &Utf8Path, output: Option<&Utf8Path>) -> anyhow::Result<()> {
    let report = read_report(report_path)?;
    let md = render_markdown(&to_renderable(&report));

    match output {
        Some(out_path) => write_text_file(out_path, &md).context("write markdown output")?,
        None => print!("{}", md),
    }

    Ok(())
}

fn cmd_annotations(report_path: &Utf8Path, max: usize) -> anyhow::Result<()> {
    let report = read_report(report_path)?;
    for annotation in render_annotations(&to_renderable(&report), max) {
        println!("{}", annotation);
    }
    Ok(())
}

fn cmd_explain(kind: &str) -> i32 {
    match run_explain(kind) {
        ExplainOutput::Found(exp) => {
            print!("{}", confguard_app::format_explanation(&exp));
            0
        }
        ExplainOutput::NotFound {
            identifier,
            available_kinds,
        } => {
            eprint!(
                "{}",
                confguard_app::format_not_found(&identifier, available_kinds)
            );
            1
        }
    }
}

fn cmd_schema(which: SchemaKind) -> anyhow::Result<()> {
    let schema = match which {
        SchemaKind::Report => schemars::schema_for!(ConfguardReport),
        SchemaKind::Rule => confguard_settings::rule_file_schema(),
        SchemaKind::Products => confguard_settings::products_schema(),
    };
    let text = serde_json::to_string_pretty(&schema).context("serialize schema")?;
    println!("{text}");
    Ok(())
}
