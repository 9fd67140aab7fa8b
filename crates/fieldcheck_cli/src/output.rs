use anyhow::Result;
use colored::*;
use fieldcheck_core::{Catalog, ErrorBag, Language, Section};
use serde_json::json;

/// Catalog strings used by the text report, with English fallbacks baked in.
struct Labels {
    title: String,
    passed: String,
    failed: String,
    errors: String,
    summary: String,
    total_errors: String,
}

impl Labels {
    fn new(catalog: &Catalog, language: Language) -> Self {
        let message = |key: &str, fallback: &str| {
            catalog
                .trans_msg(language, key)
                .unwrap_or(fallback)
                .to_string()
        };
        Self {
            title: catalog
                .sys_info("report_title")
                .unwrap_or("VALIDATION REPORT")
                .to_string(),
            passed: message("validation_passed", "Validation passed"),
            failed: message("validation_failed", "Validation failed"),
            errors: message("errors", "Errors"),
            summary: message("summary", "Summary"),
            total_errors: message("total_errors", "Total errors"),
        }
    }
}

pub fn print_error_bag(bag: &ErrorBag, catalog: &Catalog, language: Language, format: &str) -> Result<()> {
    match format {
        "json" => print_json_report(bag),
        _ => {
            print_text_report(bag, &Labels::new(catalog, language));
            Ok(())
        }
    }
}

fn print_text_report(bag: &ErrorBag, labels: &Labels) {
    println!("\n{}", "═".repeat(60));
    println!("  {}", labels.title.bold());
    println!("{}", "═".repeat(60));

    if bag.passed() {
        println!("\n{} {}", "✓".green().bold(), labels.passed.green().bold());
    } else {
        println!("\n{} {}", "✗".red().bold(), labels.failed.red().bold());
    }

    for (attribute, errors) in bag.iter() {
        if errors.is_empty() {
            continue;
        }
        println!("\n{} {}", format!("{}:", labels.errors).red().bold(), attribute.bold());
        for (i, error) in errors.iter().enumerate() {
            println!(
                "  {}. {} {}",
                i + 1,
                error.message.red(),
                format!("[{}]", error.rule).dimmed()
            );
        }
    }

    println!("\n{}", format!("{}:", labels.summary).bold());
    println!("  {}: {}", labels.total_errors, bag.error_count());
    println!("{}", "═".repeat(60));
}

fn print_json_report(bag: &ErrorBag) -> Result<()> {
    let output = json!({
        "passed": bag.passed(),
        "errors": bag,
        "summary": {
            "error_count": bag.error_count(),
        }
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

/// Missing keys per language and section.
pub type CoverageReport = Vec<(Language, Section, Vec<String>)>;

pub fn print_coverage(report: &CoverageReport, catalog: &Catalog, format: &str) -> Result<()> {
    match format {
        "json" => {
            let mut output = serde_json::Map::new();
            for (language, section, missing) in report {
                let entry = output
                    .entry(language.code())
                    .or_insert_with(|| json!({}));
                entry[section.name()] = json!(missing);
            }
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        _ => {
            let title = catalog
                .sys_info("coverage_title")
                .unwrap_or("TRANSLATION COVERAGE");
            println!("\n{}", "═".repeat(60));
            println!("  {}", title.bold());
            println!("{}", "═".repeat(60));

            for (language, section, missing) in report {
                let params = [
                    ("section", section.name().to_string()),
                    ("language", language.code().to_string()),
                    ("count", missing.len().to_string()),
                ];
                if missing.is_empty() {
                    let line = catalog
                        .render(Language::En, Section::Info, "coverage_complete", &params)
                        .unwrap_or_else(|_| format!("{} {}: complete", language, section));
                    print_success(&line);
                } else {
                    let line = catalog
                        .render(Language::En, Section::Info, "coverage_missing", &params)
                        .unwrap_or_else(|_| format!("{} {}: incomplete", language, section));
                    print_warning(&line);
                    for key in missing {
                        println!("    - {}", key.yellow());
                    }
                }
            }
            println!("{}", "═".repeat(60));
        }
    }
    Ok(())
}

pub fn print_success(message: &str) {
    println!("{} {}", "✓".green().bold(), message.green());
}

pub fn print_warning(message: &str) {
    println!("{} {}", "!".yellow().bold(), message.yellow());
}

pub fn print_info(message: &str) {
    println!("{} {}", "ℹ".blue().bold(), message);
}
