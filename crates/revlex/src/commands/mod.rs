//! Command implementations.

use camino::{Utf8Path, Utf8PathBuf};
use revlex_core::config::Config;

pub mod check;
pub mod common;
pub mod database;
pub mod extract;
pub mod index;
pub mod info;

/// Resolve the path of a build artifact.
///
/// An explicit path always wins. Otherwise the file lives under the configured
/// `data_dir`, falling back to `data/` in the current directory so that the
/// pipeline commands compose without any configuration.
pub fn artifact_path(explicit: Option<Utf8PathBuf>, config: &Config, name: &str) -> Utf8PathBuf {
    if let Some(path) = explicit {
        return path;
    }
    config
        .data_dir
        .clone()
        .unwrap_or_else(|| Utf8PathBuf::from("data"))
        .join(name)
}

/// Resolve the frequency list path.
///
/// Order: explicit flag, then `frequency_list` from config, then
/// `<lang>_10k.tsv` next to the other artifacts.
pub fn frequency_path(explicit: Option<Utf8PathBuf>, config: &Config, lang: &str) -> Utf8PathBuf {
    if let Some(path) = explicit {
        return path;
    }
    if let Some(ref path) = config.frequency_list {
        return path.clone();
    }
    artifact_path(None, config, &format!("{lang}_10k.tsv"))
}

/// Ensure the parent directory of an artifact exists before writing.
pub fn ensure_parent_dir(path: &Utf8Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .map_err(|e| anyhow::anyhow!("failed to create directory {parent}: {e}"))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_path_wins() {
        let config = Config::default();
        let path = artifact_path(Some(Utf8PathBuf::from("/tmp/x.json")), &config, "fr-dict.json");
        assert_eq!(path, Utf8PathBuf::from("/tmp/x.json"));
    }

    #[test]
    fn default_artifact_dir_is_data() {
        let config = Config::default();
        let path = artifact_path(None, &config, "fr-dict.json.gz");
        assert_eq!(path, Utf8PathBuf::from("data/fr-dict.json.gz"));
    }

    #[test]
    fn configured_data_dir_is_used() {
        let config = Config {
            data_dir: Some(Utf8PathBuf::from("/var/revlex")),
            ..Config::default()
        };
        let path = artifact_path(None, &config, "fr.jsonl");
        assert_eq!(path, Utf8PathBuf::from("/var/revlex/fr.jsonl"));
    }

    #[test]
    fn frequency_list_from_config() {
        let config = Config {
            frequency_list: Some(Utf8PathBuf::from("lists/fr_10k.tsv")),
            ..Config::default()
        };
        let path = frequency_path(None, &config, "fr");
        assert_eq!(path, Utf8PathBuf::from("lists/fr_10k.tsv"));
    }

    #[test]
    fn frequency_default_follows_language() {
        let config = Config::default();
        let path = frequency_path(None, &config, "es");
        assert_eq!(path, Utf8PathBuf::from("data/es_10k.tsv"));
    }
}
