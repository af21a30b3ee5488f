//! Display functions for command results

use super::formatters::{colored_guess, create_progress_bar};
use crate::commands::{CheckResult, VerifyReport};
use crate::core::Equation;
use colored::Colorize;

/// Print the result of checking an equation
pub fn print_check_result(result: &CheckResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("Checking: {}", result.input.bright_yellow().bold());
    println!("{}", "─".repeat(60).cyan());

    match &result.format {
        Ok(()) => println!("  Format:      {}", "well-formed".green()),
        Err(e) => {
            println!("  Format:      {}", e.to_string().red());
            return;
        }
    }

    match &result.left_value {
        Some(Ok(value)) => println!("  Left side:   {value}"),
        Some(Err(e)) => println!("  Left side:   {}", e.to_string().red()),
        None => {}
    }

    match &result.evaluation {
        Some(Ok(())) => println!("  Equation:    {}", "correct".green().bold()),
        Some(Err(e)) => println!("  Equation:    {}", e.to_string().red()),
        None => {}
    }

    if let Some((secret, score)) = &result.score
        && let Ok(guess) = Equation::new(result.input.as_str())
    {
        println!(
            "\n  Against {}: {}  {}",
            secret.text().bright_white().bold(),
            colored_guess(&guess, score),
            score.to_emoji()
        );
    }

    println!();
    if result.is_valid() {
        println!("{}", "✅ Accepted as a guess".green().bold());
    } else {
        println!("{}", "❌ Would be rejected as a guess".red().bold());
    }
}

/// Print the result of verifying a corpus
pub fn print_verify_result(report: &VerifyReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "CORPUS VERIFICATION".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    let bar = create_progress_bar(report.valid as f64, report.total as f64, 30);
    println!("\n📊 {}", "Summary:".bright_cyan().bold());
    println!("   Entries:      {}", report.total);
    println!(
        "   Valid:        [{}] {}",
        bar.green(),
        report.valid.to_string().bright_yellow()
    );
    println!("   Invalid:      {}", report.invalid.len());
    println!("   Duplicates:   {}", report.duplicates.len());
    println!("   Time taken:   {:.3}s", report.duration.as_secs_f64());

    if !report.invalid.is_empty() {
        println!("\n⚠️  {}", "Invalid entries:".bright_red().bold());
        for entry in report.invalid.iter().take(20) {
            println!(
                "   line {:>5}: {:<10} {}",
                entry.line,
                entry.text.bright_white(),
                entry.reason.bright_black()
            );
        }
        if report.invalid.len() > 20 {
            println!("   ... and {} more", report.invalid.len() - 20);
        }
    }

    if !report.duplicates.is_empty() {
        println!("\n🔁 {}", "Duplicates:".yellow().bold());
        for (text, count) in &report.duplicates {
            println!("   {text} ×{count}");
        }
    }

    println!();
    if report.is_clean() {
        println!("{}", "✅ Every entry is a valid secret".green().bold());
    } else {
        println!("{}", "❌ Corpus has problems".red().bold());
    }
}
