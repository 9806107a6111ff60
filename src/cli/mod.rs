//! Dataset Voyage CLI Module
//!
//! Command-line interface for serving the page and running evaluations in the terminal.

use clap::{Parser, Subcommand};
use colored::*;
use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Instant;

use crate::datasets::{self, DatasetName};
use crate::pipeline::{self, Selection};
use crate::training::ClassifierKind;

// ─── Styling helpers ───────────────────────────────────────────────────────────

const W: usize = 58; // box inner width

fn dim(s: &str) -> ColoredString   { s.truecolor(100, 100, 100) }
fn accent(s: &str) -> ColoredString { s.truecolor(120, 170, 255) }
fn muted(s: &str) -> ColoredString  { s.truecolor(140, 140, 140) }
fn ok(s: &str) -> ColoredString     { s.truecolor(100, 210, 120) }

fn line_box_top()    { println!("  {}", dim("┌─────────────────────────────────────────────────────────┐")); }
fn line_box_bottom() { println!("  {}", dim("└─────────────────────────────────────────────────────────┘")); }
fn line_box_sep()    { println!("  {}", dim("├─────────────────────────────────────────────────────────┤")); }

fn line_box(content: &str) {
    let visible_len = strip_ansi(content).chars().count();
    let pad = W.saturating_sub(visible_len);
    println!("  {}  {}{} {}", dim("│"), content, " ".repeat(pad), dim("│"));
}

fn line_box_center(content: &str) {
    let visible_len = strip_ansi(content).chars().count();
    let total_pad = W.saturating_sub(visible_len);
    let left = total_pad / 2;
    let right = total_pad - left;
    println!("  {}  {}{}{} {}", dim("│"), " ".repeat(left), content, " ".repeat(right), dim("│"));
}

fn line_box_empty() { line_box(""); }

fn strip_ansi(s: &str) -> String {
    let mut out = String::new();
    let mut in_escape = false;
    for c in s.chars() {
        if c == '\x1b' { in_escape = true; continue; }
        if in_escape { if c == 'm' { in_escape = false; } continue; }
        out.push(c);
    }
    out
}

fn kv(key: &str, val: &str) -> String {
    format!("{} {}", muted(key), val.white())
}

fn step_ok(msg: &str) {
    println!("  {} {}", ok("✓"), msg);
}

fn step_run(msg: &str) {
    print!("  {} {}... ", accent("›"), msg);
}

fn step_done(detail: &str) {
    println!("{} {}", ok("done"), dim(detail));
}

fn section(title: &str) {
    println!();
    println!("  {}", title.white().bold());
    println!("  {}", dim(&"─".repeat(56)));
}

// ─── CLI definition ────────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(name = "voyage")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Explore toy datasets with interactive classifiers")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the interactive web page (default)
    Serve {
        /// Host to bind to (defaults to API_HOST or 0.0.0.0)
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on (defaults to API_PORT or 8501)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Run one evaluation in the terminal
    Evaluate {
        /// Dataset name (Iris, "Breast Cancer", "Wine dataset", "Handwritten digits", Diabetes)
        #[arg(short, long)]
        dataset: String,

        /// Classifier name (KNN, SVM, "Random Forest")
        #[arg(short, long)]
        classifier: String,

        /// Number of neighbors (KNN)
        #[arg(short = 'k', long = "k")]
        k: Option<f64>,

        /// Regularization strength (SVM)
        #[arg(long = "c")]
        c: Option<f64>,

        /// Maximum tree depth (Random Forest)
        #[arg(long)]
        max_depth: Option<f64>,

        /// Number of trees (Random Forest)
        #[arg(long)]
        n_estimators: Option<f64>,

        /// Write the scatter plot to this SVG file
        #[arg(long)]
        plot: Option<PathBuf>,
    },

    /// List the dataset catalog
    Datasets,
}

/// Slider values from the command line, with unset sliders at their defaults.
///
/// Flags that do not belong to the classifier are passed through so they are
/// rejected during parameter resolution.
fn slider_values(
    kind: ClassifierKind,
    k: Option<f64>,
    c: Option<f64>,
    max_depth: Option<f64>,
    n_estimators: Option<f64>,
) -> HashMap<String, f64> {
    let mut values: HashMap<String, f64> = [("K", k), ("C", c), ("max_depth", max_depth), ("n_estimators", n_estimators)]
        .into_iter()
        .filter_map(|(name, v)| v.map(|v| (name.to_string(), v)))
        .collect();

    for slider in kind.sliders() {
        values.entry(slider.name.to_string()).or_insert(slider.default);
    }
    values
}

// ─── Evaluate ──────────────────────────────────────────────────────────────────

pub fn cmd_evaluate(
    dataset: &str,
    classifier: &str,
    k: Option<f64>,
    c: Option<f64>,
    max_depth: Option<f64>,
    n_estimators: Option<f64>,
    plot: Option<&PathBuf>,
) -> anyhow::Result<()> {
    let kind: ClassifierKind = classifier.parse()?;
    let sliders = slider_values(kind, k, c, max_depth, n_estimators);
    let selection = Selection::from_raw(dataset, classifier, &sliders)?;

    section("Evaluation");

    step_run(&format!("Fitting {} on {}", selection.classifier(), selection.dataset));
    let start = Instant::now();
    let result = pipeline::evaluate(&selection)?;
    step_done(&format!("{:.2}s", start.elapsed().as_secs_f64()));

    let d = &result.dataset;
    println!();
    println!("  {:<18} ({}, {})", muted("Shape of dataset"), d.n_samples, d.n_features);
    println!("  {:<18} {}", muted("Number of classes"), d.n_classes);
    println!("  {:<18} {}", muted("Classifier"), result.classifier());
    println!("  {:<18} {}", muted("Parameters"), result.params);
    println!("  {:<18} {}", muted("Accuracy"), format!("{:.4}", result.accuracy()).white().bold());
    println!(
        "  {:<18} {}",
        muted("Explained var."),
        result
            .projection
            .explained_variance_ratio
            .iter()
            .map(|r| format!("{:.3}", r))
            .collect::<Vec<_>>()
            .join(", ")
    );
    println!();

    if let Some(path) = plot {
        let svg = result.plot()?;
        std::fs::write(path, svg)?;
        step_ok(&format!("Plot written to {}", path.display()));
        println!();
    }

    Ok(())
}

// ─── Datasets ──────────────────────────────────────────────────────────────────

pub fn cmd_datasets() -> anyhow::Result<()> {
    section("Datasets");

    println!(
        "  {:<20} {:<14} {:>8} {:>9} {:>8}",
        muted("Name"),
        muted("Key"),
        muted("Samples"),
        muted("Features"),
        muted("Classes")
    );
    println!("  {}", dim(&"─".repeat(63)));

    for name in DatasetName::ALL {
        let summary = datasets::load(name)?.summary();
        println!(
            "  {:<20} {:<14} {:>8} {:>9} {:>8}",
            summary.name,
            summary.key.truecolor(140, 140, 140),
            summary.n_samples,
            summary.n_features,
            summary.n_classes
        );
    }

    println!();
    Ok(())
}

// ─── Serve ─────────────────────────────────────────────────────────────────────

pub async fn cmd_serve(host: Option<String>, port: Option<u16>) -> anyhow::Result<()> {
    use crate::server::{run_server, ServerConfig};

    let defaults = ServerConfig::default();
    let config = ServerConfig {
        host: host.unwrap_or(defaults.host),
        port: port.unwrap_or(defaults.port),
        cors_origin: defaults.cors_origin,
    };

    println!();
    line_box_top();
    line_box_empty();
    line_box_center(&format!("{}", "Dataset Voyage".white().bold()));
    line_box_center(&format!("{}", dim(&format!("v{}", env!("CARGO_PKG_VERSION")))));
    line_box_empty();
    line_box_sep();
    line_box_empty();
    line_box(&kv("Web UI ", &format!("http://{}:{}", config.host, config.port)));
    line_box(&kv("API    ", &format!("http://{}:{}/api", config.host, config.port)));
    line_box(&kv("Health ", &format!("http://{}:{}/api/health", config.host, config.port)));
    line_box_empty();
    line_box_sep();
    line_box_empty();
    line_box_center(&format!("{}", dim("ctrl+c to stop")));
    line_box_empty();
    line_box_bottom();
    println!();

    run_server(config).await
}
