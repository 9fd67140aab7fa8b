use anyhow::{Context, Result, anyhow};
use fieldcheck_core::Section;
use std::path::Path;
use tracing::info;

use super::{load_context, parse_language};

pub fn execute(config_path: Option<&Path>, key: &str, section: &str, lang: Option<&str>) -> Result<()> {
    let (config, catalog) = load_context(config_path)?;
    let section = parse_section(section)?;
    let language = parse_language(lang, config.language)?;

    info!("Looking up {} entry '{}' for '{}'", section, key, language);
    let template = catalog
        .lookup(language, section, key)
        .with_context(|| format!("No template for '{}'", key))?;

    println!("{}", template);
    Ok(())
}

fn parse_section(section: &str) -> Result<Section> {
    match section.to_lowercase().as_str() {
        "errors" | "error" => Ok(Section::Errors),
        "messages" | "message" => Ok(Section::Messages),
        "info" => Ok(Section::Info),
        other => Err(anyhow!(
            "Unknown catalog section: {}. Expected one of: errors, messages, info",
            other
        )),
    }
}
