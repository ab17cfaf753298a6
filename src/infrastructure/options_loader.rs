use crate::domain::catalog::OptionsCatalog;
use crate::domain::errors::CatalogError;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// On-disk shape of the options source
#[derive(Debug, Clone, Deserialize)]
struct RawOptions {
    languages: Vec<String>,
    genres: Vec<String>,
}

/// Reads the options catalog from a JSON or TOML file.
///
/// The format follows the file extension; anything other than `.toml`
/// is parsed as JSON.
pub struct OptionsLoader {
    file_path: PathBuf,
}

impl OptionsLoader {
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }

    pub fn load(&self) -> Result<OptionsCatalog, CatalogError> {
        let content = fs::read_to_string(&self.file_path).map_err(|source| CatalogError::Io {
            path: self.file_path.clone(),
            source,
        })?;

        let raw = self.parse(&content)?;
        let catalog = OptionsCatalog::new(raw.languages, raw.genres)?;

        info!(
            "Loaded options from {:?}: {} languages, {} genres",
            self.file_path,
            catalog.languages().len(),
            catalog.genres().len()
        );
        Ok(catalog)
    }

    fn parse(&self, content: &str) -> Result<RawOptions, CatalogError> {
        let is_toml = self
            .file_path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

        let parsed = if is_toml {
            toml::from_str::<RawOptions>(content).map_err(|e| e.to_string())
        } else {
            serde_json::from_str::<RawOptions>(content).map_err(|e| e.to_string())
        };

        parsed.map_err(|reason| CatalogError::Parse {
            path: self.file_path.clone(),
            reason,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_file(dir: &tempfile::TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_load_json_options() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            &dir,
            "options.json",
            r#"{"languages": ["fr", "en"], "genres": ["Drama", "Action"], "extra": 1}"#,
        );

        let catalog = OptionsLoader::new(&path).load().unwrap();
        assert_eq!(catalog.languages().len(), 2);
        assert_eq!(catalog.default_language(), "en");
        assert_eq!(catalog.default_genre(), "Drama");
    }

    #[test]
    fn test_load_toml_options() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            &dir,
            "options.toml",
            "languages = [\"ja\", \"ko\"]\ngenres = [\"Animation\"]\n",
        );

        let catalog = OptionsLoader::new(&path).load().unwrap();
        assert_eq!(catalog.default_language(), "ja");
        assert_eq!(catalog.genres(), &["Animation".to_string()][..]);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = OptionsLoader::new(dir.path().join("absent.json"))
            .load()
            .unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
    }

    #[test]
    fn test_missing_key_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "options.json", r#"{"languages": ["en"]}"#);

        let err = OptionsLoader::new(&path).load().unwrap_err();
        match err {
            CatalogError::Parse { reason, .. } => assert!(reason.contains("genres")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_empty_list_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "options.json", r#"{"languages": [], "genres": ["Drama"]}"#);

        let err = OptionsLoader::new(&path).load().unwrap_err();
        assert!(matches!(err, CatalogError::EmptyList { key: "languages" }));
    }
}
