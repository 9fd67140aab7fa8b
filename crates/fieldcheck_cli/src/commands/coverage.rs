use anyhow::Result;
use fieldcheck_core::{Catalog, Language, Section};
use std::path::Path;
use tracing::info;

use super::load_context;
use crate::output::{self, CoverageReport};

pub fn execute(config_path: Option<&Path>, format: &str) -> Result<()> {
    let (_config, catalog) = load_context(config_path)?;
    info!(
        "Checking translation coverage against '{}'",
        catalog.default_language()
    );

    let report = coverage(&catalog);
    output::print_coverage(&report, &catalog, format)
}

/// Collects, for every non-default language, the keys it lacks in each
/// section. Info strings are English-only and not checked.
fn coverage(catalog: &Catalog) -> CoverageReport {
    let default = catalog.default_language();

    Language::ALL
        .iter()
        .filter(|language| **language != default)
        .flat_map(|language| {
            [Section::Errors, Section::Messages].into_iter().map(|section| {
                let missing = catalog
                    .missing_keys(*language, section)
                    .into_iter()
                    .map(str::to_string)
                    .collect();
                (*language, section, missing)
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_builtin_catalog_is_complete() {
        let report = coverage(&Catalog::builtin());
        assert_eq!(report.len(), 2);
        for (language, _, missing) in &report {
            assert_eq!(*language, Language::Fa);
            assert!(missing.is_empty(), "{:?}", missing);
        }
    }

    #[test]
    fn test_reports_missing_keys() {
        let mut catalog = Catalog::builtin();
        catalog.insert(Language::En, Section::Errors, "custom", "Custom rule failed.");

        let report = coverage(&catalog);
        let (_, section, missing) = &report[0];
        assert_eq!(*section, Section::Errors);
        assert_eq!(missing, &vec!["custom".to_string()]);
    }
}
