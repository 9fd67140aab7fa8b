use anyhow::{Context, Result};
use chrono::Utc;
use fieldcheck_core::{HostResolver, InMemoryStore, Session, StaticHosts, Value};
use fieldcheck_rules::{Attribute, Validator};
use std::path::Path;
use tokio::runtime::Handle;
use tracing::info;

use super::{load_context, parse_language};
use crate::dns::DnsResolver;
use crate::output;

pub struct DemoOptions {
    pub value: Option<String>,
    pub attribute: String,
    pub name: String,
    pub lang: Option<String>,
    pub hosts: Option<Vec<String>>,
}

pub async fn execute(config_path: Option<&Path>, options: DemoOptions, format: &str) -> Result<()> {
    let (mut config, catalog) = load_context(config_path)?;
    config.language = parse_language(options.lang.as_deref(), config.language)?;
    let language = config.language;

    let value = match options.value.as_deref() {
        Some(raw) => serde_json::from_str::<serde_json::Value>(raw)
            .map(Value::from)
            .with_context(|| format!("--value is not valid JSON: {}", raw))?,
        None => Value::Null,
    };
    info!("Running demo chain for '{}' with {}", options.attribute, value);

    let session = Session::new().with("name", options.name.as_str());
    let records = InMemoryStore::new()
        .with("users", "name", "mehrab")
        .with("users", "ip", "127.0.0.1");
    let hosts: Box<dyn HostResolver> = match options.hosts {
        Some(hosts) => Box::new(StaticHosts::new(hosts)),
        None => Box::new(DnsResolver::new(Handle::current())),
    };
    let attribute = options.attribute;

    if format != "json" {
        output::print_info(&format!("Validating '{}' = {}", attribute, value));
    }

    let (bag, catalog) = tokio::task::spawn_blocking(move || {
        let validator = Validator::new(&catalog, &session)
            .with_config(config)
            .with_host_resolver(&*hosts)
            .with_record_store(&records);
        let bag = sample_chain(validator.attribute(attribute).is(value)).errors();
        drop(validator);
        (bag, catalog)
    })
    .await
    .context("Validation task failed")?;

    let bag = bag.context("Rule chain is misconfigured")?;
    output::print_error_bag(&bag, &catalog, language, format)?;

    if bag.has_errors() {
        std::process::exit(1);
    }

    Ok(())
}

/// Applies one instance of every rule family.
fn sample_chain(attribute: Attribute<'_>) -> Attribute<'_> {
    let now = Utc::now();

    attribute
        .required()
        .string()
        .numeric()
        .accepted()
        .accepted_if("name", "mehrab")
        .active_url()
        .after(now)
        .after_or_equal(now)
        .alpha()
        .alpha_dash()
        .alpha_num()
        .array()
        .before(now)
        .before_or_equal(now)
        .boolean()
        .confirmed("name")
        .date()
        .date_equals(now)
        .date_format("%Y-%m-%d %H:%M:%S")
        .different("name")
        .declined_if("name", "test")
        .digits(10)
        .digits_between(1, 20)
        .dimensions(1, 1, 1, 1)
        .distinct()
        .email()
        .ends_with(["tcp"])
        .exists("users", "ip")
        .exists_in_string(["test"])
        .filled()
        .image()
        .in_list(["mehrab"])
        .integer()
        .in_array(["test"])
        .ip()
        .ipv4()
        .ipv6()
        .json()
        .mimes(["test"])
        .not_in(["test"])
        .not_regex(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
        .present()
        .prohibited()
        .prohibited_if("name", "mehrab")
        .regex(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
        .required_if("name", "mehrab")
        .required_unless("name", ["mehrab"])
        .same("name")
        .starts_with(["https://"])
        .timezone()
        .unique("users", "name")
        .url()
        .uuid()
        .password_letters()
        .password_mixed()
        .password_numbers()
        .password_symbols()
        .password_uncompromised(["123456"])
        .max_numeric(120)
        .min_numeric(0)
        .max_string(255)
        .min_string(1)
}
