use console::{style, StyledObject, Term};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

// ── Terminal helpers ──────────────────────────────────────────────────────────

fn term_width() -> usize {
    Term::stdout().size().1.max(60) as usize
}

fn rule() {
    println!("{}", style("─".repeat(term_width().min(52))).dim());
}

// ── Banner ────────────────────────────────────────────────────────────────────

pub fn print_banner() {
    let logo = [
        r"   ┌┬┐┌─┐┌┬┐┌─┐┬┬  ┌─┐┌─┐",
        r"    │││ │ │ ├┤ ││  ├┤ └─┐",
        r"   ─┴┘└─┘ ┴ └  ┴┴─┘└─┘└─┘",
    ];

    println!();
    for line in &logo {
        println!("{}", style(line).cyan().bold());
    }
    println!();
    println!(
        "{}",
        style("   Dotfiles Installation Tool  ·  v0.1.0")
            .dim()
            .italic()
    );
    println!();
    rule();
    println!();
}

// ── Step header ───────────────────────────────────────────────────────────────

/// `[n/total]` tag plus title, underlined.
pub fn print_step(step: usize, total: usize, title: &str) {
    println!();
    let tag = style(format!(" {}/{} ", step, total)).black().on_cyan().bold();
    let heading = style(format!("  {}", title)).white().bold();
    println!("{}{}", tag, heading);
    rule();
}

/// Dimmed one-liner for a step that will not run this time.
pub fn print_skipped(step: usize, total: usize, title: &str, reason: &str) {
    println!();
    let tag = style(format!(" {}/{} ", step, total)).black().on_white();
    println!(
        "{}  {}  {}",
        tag,
        style(title).dim(),
        style(format!("SKIPPED · {}", reason)).dim().italic()
    );
}

// ── Feedback messages ─────────────────────────────────────────────────────────
//
// One indented line each: a coloured mark, then the message. Everything
// goes to stdout so a failed run reads top to bottom in one stream.

fn feedback(mark: StyledObject<&str>, msg: impl std::fmt::Display) {
    println!("  {}  {}", mark, msg);
}

pub fn print_success(msg: &str) {
    feedback(style("✓").green().bold(), style(msg).green());
}

/// Plain progress notes, including every `[dry-run]` announcement.
pub fn print_info(msg: &str) {
    feedback(style("→").blue().bold(), msg);
}

/// Something was skipped or assumed; the run carries on.
pub fn print_warning(msg: &str) {
    feedback(style("⚠").yellow().bold(), style(msg).yellow());
}

pub fn print_error(msg: &str) {
    feedback(style("✗").red().bold(), style(msg).red());
}

// ── Info box ──────────────────────────────────────────────────────────────────

/// Summary box, as shown after the setup questions:
///
/// ```text
/// ┌─ Configuration ───────────────────┐
/// │  Dotfiles    https://github.com/… │
/// │  Zsh         yes                  │
/// │  Oh My Zsh   no                   │
/// └───────────────────────────────────┘
/// ```
pub fn print_kv_box(title: &str, rows: &[(&str, &str)]) {
    const BOX_INNER: usize = 38;

    let dashes = "─".repeat(BOX_INNER.saturating_sub(title.chars().count() + 2));
    println!(
        "  ┌─ {} {}┐",
        style(title).white().bold(),
        style(&dashes).dim()
    );

    for (key, val) in rows {
        println!(
            "  │  {:<13}{}",
            style(*key).dim(),
            style(*val).white().bold()
        );
    }

    println!("  └{}┘", style("─".repeat(BOX_INNER + 2)).dim());
}

// ── Spinner ───────────────────────────────────────────────────────────────────

/// Ticks while a child process runs; the caller clears it.
pub fn spinner(msg: impl Into<String>) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("  {spinner:.cyan.bold}  {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]),
    );
    pb.set_message(msg.into());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}
