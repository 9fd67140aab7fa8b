//! File rules.
//!
//! An upload is described by its file name, either as a plain string or as a
//! mapping with a `name` entry. Image dimensions come from `width` and
//! `height` entries of the same mapping.

use super::{Outcome, collect_strings, join_values};
use crate::Attribute;
use fieldcheck_core::{Rule, Value};
use std::path::Path;

const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "bmp", "svg", "webp"];

/// Pixel bounds for [`Attribute::dimensions`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Bounds {
    min_width: u32,
    min_height: u32,
    max_width: u32,
    max_height: u32,
}

impl Bounds {
    fn check(&self) -> Result<(), String> {
        if [self.min_width, self.min_height, self.max_width, self.max_height].contains(&0) {
            return Err("dimensions must be greater than zero".to_string());
        }
        if self.min_width > self.max_width || self.min_height > self.max_height {
            return Err(format!(
                "minimum {}x{} exceeds maximum {}x{}",
                self.min_width, self.min_height, self.max_width, self.max_height
            ));
        }
        Ok(())
    }

    fn contains(&self, width: i64, height: i64) -> bool {
        (i64::from(self.min_width)..=i64::from(self.max_width)).contains(&width)
            && (i64::from(self.min_height)..=i64::from(self.max_height)).contains(&height)
    }

    fn params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("min_width", self.min_width.to_string()),
            ("min_height", self.min_height.to_string()),
            ("max_width", self.max_width.to_string()),
            ("max_height", self.max_height.to_string()),
        ]
    }
}

fn file_name(value: &Value) -> Option<&str> {
    match value {
        Value::String(name) => Some(name),
        Value::Map(entries) => entries.get("name").and_then(Value::as_str),
        _ => None,
    }
}

fn extension(value: &Value) -> Option<String> {
    file_name(value)
        .and_then(|name| Path::new(name).extension())
        .and_then(|ext| ext.to_str())
        .map(str::to_lowercase)
}

fn normalize_extension(ext: String) -> String {
    ext.trim().trim_start_matches('.').to_lowercase()
}

fn mimes(value: &Value, extensions: &[String]) -> Outcome {
    let passed = extension(value).is_some_and(|ext| extensions.contains(&ext));
    Outcome::check_with(passed, vec![("values", join_values(extensions))])
}

fn image(value: &Value) -> Outcome {
    let passed = extension(value).is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext.as_str()));
    Outcome::check(passed)
}

fn dimensions(value: &Value, bounds: &Bounds) -> Outcome {
    let size = value.as_map().and_then(|entries| {
        let width = entries.get("width")?.to_integer()?;
        let height = entries.get("height")?.to_integer()?;
        Some((width, height))
    });

    match size {
        Some((width, height)) => Outcome::check_with(bounds.contains(width, height), bounds.params()),
        None => Outcome::TypeMismatch("dimensions"),
    }
}

impl Attribute<'_> {
    /// The file extension must be one of `extensions`, compared
    /// case-insensitively. A leading dot is ignored.
    pub fn mimes<I, S>(self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let extensions: Vec<String> = collect_strings(extensions)
            .into_iter()
            .map(normalize_extension)
            .collect();
        if extensions.is_empty() || extensions.iter().any(String::is_empty) {
            return self.reject(Rule::Mimes, "extensions must be non-empty");
        }
        let outcome = mimes(self.value(), &extensions);
        self.apply(Rule::Mimes, outcome)
    }

    /// The file must be an image: jpg, jpeg, png, gif, bmp, svg or webp.
    pub fn image(self) -> Self {
        let outcome = image(self.value());
        self.apply(Rule::Image, outcome)
    }

    /// The image width and height must lie within the given pixel bounds,
    /// inclusive.
    pub fn dimensions(self, min_width: u32, min_height: u32, max_width: u32, max_height: u32) -> Self {
        let bounds = Bounds {
            min_width,
            min_height,
            max_width,
            max_height,
        };
        if let Err(reason) = bounds.check() {
            return self.reject(Rule::Dimensions, reason);
        }
        let outcome = dimensions(self.value(), &bounds);
        self.apply(Rule::Dimensions, outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::BTreeMap;

    fn upload(name: &str, width: i64, height: i64) -> Value {
        let mut entries = BTreeMap::new();
        entries.insert("name".to_string(), Value::from(name));
        entries.insert("width".to_string(), Value::Int(width));
        entries.insert("height".to_string(), Value::Int(height));
        Value::Map(entries)
    }

    #[test]
    fn test_mimes() {
        let allowed = vec!["pdf".to_string(), "docx".to_string()];
        assert_eq!(mimes(&Value::from("report.PDF"), &allowed), Outcome::Pass);
        assert_eq!(mimes(&upload("cv.docx", 0, 0), &allowed), Outcome::Pass);
        assert_eq!(
            mimes(&Value::from("photo.png"), &allowed),
            Outcome::Fail(vec![("values", "pdf, docx".to_string())])
        );
        assert!(matches!(
            mimes(&Value::from("no_extension"), &allowed),
            Outcome::Fail(_)
        ));
        assert_eq!(normalize_extension(".PDF".to_string()), "pdf");
    }

    #[test]
    fn test_image() {
        assert_eq!(image(&Value::from("avatar.webp")), Outcome::Pass);
        assert_eq!(image(&upload("scan.JPG", 10, 10)), Outcome::Pass);
        assert_eq!(image(&Value::from("avatar.exe")), Outcome::Fail(vec![]));
        assert_eq!(image(&Value::Int(3)), Outcome::Fail(vec![]));
    }

    #[test]
    fn test_dimensions() {
        let bounds = Bounds {
            min_width: 100,
            min_height: 100,
            max_width: 800,
            max_height: 600,
        };
        assert_eq!(dimensions(&upload("a.png", 100, 600), &bounds), Outcome::Pass);
        assert!(matches!(
            dimensions(&upload("a.png", 801, 300), &bounds),
            Outcome::Fail(_)
        ));
        assert_eq!(
            dimensions(&Value::from("a.png"), &bounds),
            Outcome::TypeMismatch("dimensions")
        );
    }

    #[test]
    fn test_bounds_check() {
        let inverted = Bounds {
            min_width: 900,
            min_height: 100,
            max_width: 800,
            max_height: 600,
        };
        assert!(inverted.check().is_err());

        let zero = Bounds {
            min_width: 0,
            min_height: 100,
            max_width: 800,
            max_height: 600,
        };
        assert!(zero.check().is_err());
    }
}
