mod commands;
mod dns;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "fieldcheck")]
#[command(version, about = "Fluent field validation with localized messages", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Validator configuration file (YAML or TOML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the sample rule chain against a value
    Demo {
        /// Value to validate, as JSON (defaults to null)
        #[arg(long)]
        value: Option<String>,

        /// Attribute name the chain is built for
        #[arg(short, long, default_value = "pan")]
        attribute: String,

        /// Value of the `name` session field
        #[arg(short, long, default_value = "mehrab")]
        name: String,

        /// Message language: en, fa
        #[arg(short, long)]
        lang: Option<String>,

        /// Hosts treated as resolvable, instead of querying DNS
        #[arg(long, value_delimiter = ',')]
        hosts: Option<Vec<String>>,

        /// Output format: text, json
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Print a catalog entry
    Lookup {
        /// Message key, e.g. "required" or "attributes.email"
        key: String,

        /// Catalog section: errors, messages, info
        #[arg(short, long, default_value = "errors")]
        section: String,

        /// Language: en, fa
        #[arg(short, long)]
        lang: Option<String>,
    },

    /// Report catalog keys missing from each language
    Coverage {
        /// Output format: text, json
        #[arg(short, long, default_value = "text")]
        format: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_level(true)
                .compact(),
        )
        .with(tracing_subscriber::filter::LevelFilter::from_level(
            log_level,
        ))
        .init();

    let config = cli.config.as_deref();

    // Execute command
    match cli.command {
        Commands::Demo {
            value,
            attribute,
            name,
            lang,
            hosts,
            format,
        } => {
            let options = commands::demo::DemoOptions {
                value,
                attribute,
                name,
                lang,
                hosts,
            };
            commands::demo::execute(config, options, &format).await
        }

        Commands::Lookup { key, section, lang } => {
            commands::lookup::execute(config, &key, &section, lang.as_deref())
        }

        Commands::Coverage { format } => commands::coverage::execute(config, &format),
    }
}
