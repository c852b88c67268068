use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use leavechain_core::config::{AppConfig, LoadOptions, LogFormat};
use toml::Value;

pub fn run() -> String {
    let config = match AppConfig::load(LoadOptions::default()) {
        Ok(config) => config,
        Err(error) => return format!("config validation failed: {error}"),
    };

    let config_file_path = detect_config_path();
    let config_file_doc = load_config_file_doc(config_file_path.as_deref());

    let mut lines =
        vec!["effective config (source precedence: env > file > default):".to_string()];

    lines.push(render_line(
        "logging.level",
        &config.logging.level,
        field_source(
            "logging.level",
            &["LEAVECHAIN_LOGGING_LEVEL", "LEAVECHAIN_LOG_LEVEL"],
            config_file_doc.as_ref(),
            config_file_path.as_deref(),
        ),
    ));

    let format_value = match config.logging.format {
        LogFormat::Compact => "compact",
        LogFormat::Pretty => "pretty",
        LogFormat::Json => "json",
    };
    lines.push(render_line(
        "logging.format",
        format_value,
        field_source(
            "logging.format",
            &["LEAVECHAIN_LOGGING_FORMAT", "LEAVECHAIN_LOG_FORMAT"],
            config_file_doc.as_ref(),
            config_file_path.as_deref(),
        ),
    ));

    lines.join("\n")
}

fn detect_config_path() -> Option<PathBuf> {
    [PathBuf::from("leavechain.toml"), PathBuf::from("config/leavechain.toml")]
        .into_iter()
        .find(|path| path.exists())
}

fn load_config_file_doc(path: Option<&Path>) -> Option<Value> {
    let raw = fs::read_to_string(path?).ok()?;
    raw.parse::<Value>().ok()
}

fn field_source(
    dotted_key: &str,
    env_keys: &[&str],
    doc: Option<&Value>,
    path: Option<&Path>,
) -> String {
    for key in env_keys {
        let is_set = env::var(key).map(|value| !value.trim().is_empty()).unwrap_or(false);
        if is_set {
            return format!("env:{key}");
        }
    }

    if let (Some(doc), Some(path)) = (doc, path) {
        if doc_contains_key(doc, dotted_key) {
            return format!("file:{}", path.display());
        }
    }

    "default".to_string()
}

fn doc_contains_key(doc: &Value, dotted_key: &str) -> bool {
    let mut current = doc;
    for part in dotted_key.split('.') {
        match current.get(part) {
            Some(next) => current = next,
            None => return false,
        }
    }
    true
}

fn render_line(key: &str, value: &str, source: String) -> String {
    format!("  {key} = {value} ({source})")
}

#[cfg(test)]
mod tests {
    use crate::commands::config::doc_contains_key;
    use toml::Value;

    #[test]
    fn dotted_key_lookup_walks_nested_tables() {
        let doc: Value = "[logging]\nlevel = \"debug\"\n".parse().expect("parse toml");
        assert!(doc_contains_key(&doc, "logging.level"));
        assert!(!doc_contains_key(&doc, "logging.format"));
        assert!(!doc_contains_key(&doc, "server.port"));
    }
}
