//! Frontmatter extraction from content files.
//!
//! Supports YAML-style (`---`) and TOML-style (`+++`) metadata blocks.
//! Extraction produces an untyped record; shape and type checking is the
//! schema's job, so every value comes out as plain JSON.
//!
//! TOML is the canonical format. The YAML-style parser is a deliberate
//! line-based subset (`key: value`, no nesting) kept for imported content.

use super::JsonMap;
use anyhow::{Result, anyhow};
use serde_json::Value;

/// Extract frontmatter and return (record, body).
///
/// Returns `Ok(None)` when the file has no metadata block. An
/// unterminated block is treated as body text, not an error.
pub fn extract_frontmatter(content: &str) -> Result<Option<(JsonMap, &str)>> {
    match detect_frontmatter(content) {
        Some((fm, body, is_toml)) => {
            let record = if is_toml {
                parse_toml(fm)?
            } else {
                parse_yaml_like(fm)
            };
            Ok(Some((record, body)))
        }
        None => Ok(None),
    }
}

/// Detect and extract frontmatter.
/// Returns `(frontmatter, body, is_toml)` if found.
fn detect_frontmatter(content: &str) -> Option<(&str, &str, bool)> {
    let trimmed = content.trim_start();

    // YAML: ---...---
    if trimmed.starts_with("---")
        && let Some(end) = trimmed[3..].find("\n---")
    {
        let fm = trimmed[3..3 + end].trim();
        let body = trimmed[3 + end + 4..].trim_start_matches('\n');
        return Some((fm, body, false));
    }

    // TOML: +++...+++
    if trimmed.starts_with("+++")
        && let Some(end) = trimmed[3..].find("\n+++")
    {
        let fm = trimmed[3..3 + end].trim();
        let body = trimmed[3 + end + 4..].trim_start_matches('\n');
        return Some((fm, body, true));
    }

    None
}

/// Parse simple YAML-like frontmatter (`key: value` lines).
fn parse_yaml_like(content: &str) -> JsonMap {
    let mut record = JsonMap::new();

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if let Some((key, value)) = line.split_once(':') {
            record.insert(key.trim().to_string(), parse_yaml_value(value.trim()));
        }
    }

    record
}

/// Parse TOML frontmatter into a JSON record.
fn parse_toml(content: &str) -> Result<JsonMap> {
    let table: toml::Table =
        toml::from_str(content).map_err(|e| anyhow!("invalid TOML frontmatter: {e}"))?;
    Ok(table
        .into_iter()
        .map(|(key, value)| (key, toml_to_json(value)))
        .collect())
}

/// Convert a TOML value to JSON. Datetimes become their string form so the
/// schema's date parser sees every date uniformly.
fn toml_to_json(value: toml::Value) -> Value {
    match value {
        toml::Value::String(s) => Value::String(s),
        toml::Value::Integer(i) => Value::from(i),
        toml::Value::Float(f) => serde_json::Number::from_f64(f)
            .map(Value::Number)
            .unwrap_or(Value::Null),
        toml::Value::Boolean(b) => Value::Bool(b),
        toml::Value::Datetime(dt) => Value::String(dt.to_string()),
        toml::Value::Array(items) => Value::Array(items.into_iter().map(toml_to_json).collect()),
        toml::Value::Table(table) => Value::Object(
            table
                .into_iter()
                .map(|(key, value)| (key, toml_to_json(value)))
                .collect(),
        ),
    }
}

/// Parse a YAML-like value string to a JSON value
///
/// Supports:
/// - Booleans: `true`, `false`
/// - Null: `null`, `~`
/// - Numbers: `123`, `3.14`
/// - Arrays: `[a, b]`
/// - Strings: everything else (surrounding quotes stripped)
fn parse_yaml_value(s: &str) -> Value {
    // Quoted scalar, as-is. Checked first so commas inside quotes
    // ("Hello, World") never look like a list.
    if let Some(stripped) = try_strip_quotes(s) {
        return Value::String(stripped.to_string());
    }

    // Bracketed array
    if let Some(inner) = s.strip_prefix('[').and_then(|rest| rest.strip_suffix(']')) {
        let items = inner
            .split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(|item| Value::String(strip_quotes(item).to_string()))
            .collect();
        return Value::Array(items);
    }

    // Boolean
    if s.eq_ignore_ascii_case("true") {
        return Value::Bool(true);
    }
    if s.eq_ignore_ascii_case("false") {
        return Value::Bool(false);
    }

    // Null
    if s.eq_ignore_ascii_case("null") || s == "~" {
        return Value::Null;
    }

    // Number (integer)
    if let Ok(n) = s.parse::<i64>() {
        return Value::Number(n.into());
    }

    // Number (float)
    if let Ok(n) = s.parse::<f64>()
        && let Some(num) = serde_json::Number::from_f64(n)
    {
        return Value::Number(num);
    }

    // Default: string. Bare commas stay part of the scalar; lists use
    // the bracketed form.
    Value::String(s.to_string())
}

/// Strip one matching pair of surrounding quotes, if present.
fn try_strip_quotes(s: &str) -> Option<&str> {
    for quote in ['"', '\''] {
        if s.len() >= 2 && s.starts_with(quote) && s.ends_with(quote) {
            return Some(&s[1..s.len() - 1]);
        }
    }
    None
}

/// Strip one matching pair of surrounding quotes.
fn strip_quotes(s: &str) -> &str {
    try_strip_quotes(s).unwrap_or(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yaml_frontmatter() {
        let content = "---\ntitle: Hello\npubDate: 2024-01-01\ntags: [a, b]\n---\n\n# Body";
        let (record, body) = extract_frontmatter(content).unwrap().unwrap();

        assert_eq!(record["title"], "Hello");
        assert_eq!(record["pubDate"], "2024-01-01");
        assert_eq!(record["tags"], serde_json::json!(["a", "b"]));
        assert!(body.starts_with("# Body"));
    }

    #[test]
    fn test_toml_frontmatter() {
        let content =
            "+++\ntitle = \"Hello\"\nrecommend = true\ntags = [\"a\", \"b\"]\n+++\n\n# Body";
        let (record, body) = extract_frontmatter(content).unwrap().unwrap();

        assert_eq!(record["title"], "Hello");
        assert_eq!(record["recommend"], true);
        assert_eq!(record["tags"], serde_json::json!(["a", "b"]));
        assert!(body.starts_with("# Body"));
    }

    #[test]
    fn test_toml_datetime_becomes_string() {
        let content = "+++\npubDate = 2024-01-01\n+++\nbody";
        let (record, _) = extract_frontmatter(content).unwrap().unwrap();
        assert_eq!(record["pubDate"], "2024-01-01");
    }

    #[test]
    fn test_invalid_toml_frontmatter_is_error() {
        let content = "+++\ntitle = \n+++\nbody";
        assert!(extract_frontmatter(content).is_err());
    }

    #[test]
    fn test_no_frontmatter() {
        assert!(extract_frontmatter("# Just content").unwrap().is_none());
    }

    #[test]
    fn test_unterminated_frontmatter() {
        assert!(extract_frontmatter("---\ntitle: Hello").unwrap().is_none());
    }

    #[test]
    fn test_yaml_empty_tags_array() {
        let content = "---\ntags: []\n---\nbody";
        let (record, _) = extract_frontmatter(content).unwrap().unwrap();
        assert_eq!(record["tags"], serde_json::json!([]));
    }

    #[test]
    fn test_yaml_value_coercion() {
        assert_eq!(parse_yaml_value("true"), Value::Bool(true));
        assert_eq!(parse_yaml_value("42"), serde_json::json!(42));
        assert_eq!(parse_yaml_value("~"), Value::Null);
        assert_eq!(parse_yaml_value("\"quoted\""), "quoted");
        assert_eq!(parse_yaml_value("[a, b]"), serde_json::json!(["a", "b"]));
        assert_eq!(parse_yaml_value("plain text"), "plain text");
    }

    #[test]
    fn test_yaml_comma_scalars_stay_strings() {
        // Commas only mean a list inside brackets; titles and
        // descriptions keep theirs.
        assert_eq!(parse_yaml_value("\"Hello, World\""), "Hello, World");
        assert_eq!(parse_yaml_value("Hello, World"), "Hello, World");
        assert_eq!(parse_yaml_value("'10,000 hours'"), "10,000 hours");

        let content = "---\ntitle: \"Hello, World\"\n---\nbody";
        let (record, _) = extract_frontmatter(content).unwrap().unwrap();
        assert_eq!(record["title"], "Hello, World");
    }

    #[test]
    fn test_yaml_comments_skipped() {
        let content = "---\n# a comment\ntitle: Hello\n---\nbody";
        let (record, _) = extract_frontmatter(content).unwrap().unwrap();
        assert_eq!(record.len(), 1);
        assert_eq!(record["title"], "Hello");
    }
}
