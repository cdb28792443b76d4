//! Configuration for the optional tokenization capabilities.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TrisectError};

/// Segmentation modes accepted by Lindera.
pub const LINDERA_MODES: &[&str] = &["normal", "decompose"];

/// URI prefix of the dictionaries compiled into the binary.
pub const EMBEDDED_SCHEME: &str = "embedded://";

/// Names of the dictionaries that can be embedded, each behind the cargo
/// feature `lindera-<name>`.
pub const EMBEDDED_DICTIONARIES: &[&str] =
    &["ipadic", "ipadic-neologd", "unidic", "ko-dic", "cc-cedict"];

/// Where a Lindera dictionary is loaded from.
///
/// ```
/// use std::path::Path;
///
/// use trisect::config::DictionarySource;
///
/// assert_eq!(
///     DictionarySource::parse("embedded://unidic"),
///     DictionarySource::Embedded("unidic")
/// );
/// assert_eq!(
///     DictionarySource::parse("/opt/dict"),
///     DictionarySource::Path(Path::new("/opt/dict"))
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DictionarySource<'a> {
    /// A dictionary compiled in with a `lindera-<name>` feature.
    Embedded(&'a str),
    /// A directory holding a dictionary built with the lindera CLI.
    Path(&'a Path),
}

impl<'a> DictionarySource<'a> {
    /// Split a dictionary URI into its source.
    pub fn parse(uri: &'a str) -> Self {
        match uri.strip_prefix(EMBEDDED_SCHEME) {
            Some(name) => DictionarySource::Embedded(name),
            None => DictionarySource::Path(Path::new(uri)),
        }
    }

    /// Whether an embedded name is one of [`EMBEDDED_DICTIONARIES`].
    /// Paths are always known.
    pub fn is_known(&self) -> bool {
        match self {
            DictionarySource::Embedded(name) => EMBEDDED_DICTIONARIES.contains(name),
            DictionarySource::Path(_) => true,
        }
    }

    /// Remediation command for a dictionary that failed to load.
    pub fn install_command(&self) -> String {
        match self {
            DictionarySource::Embedded(name) if self.is_known() => {
                format!("cargo build --features lindera-{name}")
            }
            DictionarySource::Embedded(_) => format!(
                "cargo build --features lindera-<name>, with <name> one of: {}",
                EMBEDDED_DICTIONARIES.join(", ")
            ),
            DictionarySource::Path(path) => {
                format!("lindera build --src <source> --dest {}", path.display())
            }
        }
    }
}

/// Top-level configuration.
///
/// Every field has a default, so a configuration file only needs to name the
/// settings it changes:
///
/// ```
/// use trisect::config::TrisectConfig;
///
/// let config: TrisectConfig =
///     serde_json::from_str(r#"{ "lindera": { "dictionary": "embedded://unidic" } }"#).unwrap();
/// assert_eq!(config.lindera.dictionary, "embedded://unidic");
/// assert_eq!(config.lindera.mode, "normal");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrisectConfig {
    /// Settings for the Lindera capability.
    pub lindera: LinderaConfig,
}

/// Settings for the Lindera capability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinderaConfig {
    /// Segmentation mode, `normal` or `decompose`.
    pub mode: String,

    /// Dictionary URI, either `embedded://<name>` or a directory path.
    pub dictionary: String,

    /// Optional user dictionary path, a `.csv` source or a compiled `.bin`.
    pub user_dictionary: Option<String>,
}

impl Default for LinderaConfig {
    fn default() -> Self {
        Self {
            mode: "normal".to_string(),
            dictionary: "embedded://ipadic".to_string(),
            user_dictionary: None,
        }
    }
}

impl TrisectConfig {
    /// Load and validate a JSON configuration file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: TrisectConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the settings can be used to build the capabilities.
    pub fn validate(&self) -> Result<()> {
        self.lindera.validate()
    }
}

impl LinderaConfig {
    /// Check the mode and dictionary settings.
    pub fn validate(&self) -> Result<()> {
        if !LINDERA_MODES.contains(&self.mode.as_str()) {
            return Err(TrisectError::config(format!(
                "unknown lindera mode '{}', expected one of: {}",
                self.mode,
                LINDERA_MODES.join(", ")
            )));
        }
        if self.dictionary.trim().is_empty() {
            return Err(TrisectError::config("lindera dictionary must not be empty"));
        }
        if !DictionarySource::parse(&self.dictionary).is_known() {
            return Err(TrisectError::config(format!(
                "unknown embedded dictionary '{}', expected one of: {}",
                self.dictionary,
                EMBEDDED_DICTIONARIES.join(", ")
            )));
        }
        if let Some(user_dictionary) = &self.user_dictionary {
            if user_dictionary.trim().is_empty() {
                return Err(TrisectError::config(
                    "lindera user dictionary must not be empty when set",
                ));
            }
            let extension = Path::new(user_dictionary)
                .extension()
                .and_then(|ext| ext.to_str());
            if !matches!(extension, Some("csv" | "bin")) {
                return Err(TrisectError::config(format!(
                    "lindera user dictionary '{user_dictionary}' must be a .csv or .bin file"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn test_default_config() {
        let config = TrisectConfig::default();
        assert_eq!(config.lindera.mode, "normal");
        assert_eq!(config.lindera.dictionary, "embedded://ipadic");
        assert!(config.lindera.user_dictionary.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{ "lindera": {{ "mode": "decompose", "dictionary": "/opt/dict" }} }}"#
        )
        .unwrap();

        let config = TrisectConfig::from_file(file.path()).unwrap();
        assert_eq!(config.lindera.mode, "decompose");
        assert_eq!(config.lindera.dictionary, "/opt/dict");
    }

    #[test]
    fn test_from_file_rejects_bad_json() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        assert!(matches!(
            TrisectConfig::from_file(file.path()),
            Err(TrisectError::Json(_))
        ));
    }

    #[test]
    fn test_from_missing_file() {
        assert!(matches!(
            TrisectConfig::from_file("/nonexistent/trisect.json"),
            Err(TrisectError::Io(_))
        ));
    }

    #[test]
    fn test_validate_rejects_unknown_mode() {
        let config = LinderaConfig {
            mode: "fast".to_string(),
            ..LinderaConfig::default()
        };
        assert!(matches!(config.validate(), Err(TrisectError::Config(_))));
    }

    #[test]
    fn test_validate_rejects_empty_dictionary() {
        let config = LinderaConfig {
            dictionary: "  ".to_string(),
            ..LinderaConfig::default()
        };
        assert!(config.validate().is_err());

        let config = LinderaConfig {
            user_dictionary: Some(String::new()),
            ..LinderaConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_unknown_embedded_dictionary() {
        let config = LinderaConfig {
            dictionary: "embedded://klingon".to_string(),
            ..LinderaConfig::default()
        };
        let error = config.validate().unwrap_err();
        assert!(error.to_string().contains("ipadic, ipadic-neologd, unidic, ko-dic, cc-cedict"));

        for name in EMBEDDED_DICTIONARIES {
            let config = LinderaConfig {
                dictionary: format!("embedded://{name}"),
                ..LinderaConfig::default()
            };
            assert!(config.validate().is_ok(), "{name} should be accepted");
        }
    }

    #[test]
    fn test_validate_user_dictionary_extension() {
        for (path, ok) in [
            ("/opt/user.csv", true),
            ("/opt/user.bin", true),
            ("/opt/user.txt", false),
            ("/opt/user", false),
        ] {
            let config = LinderaConfig {
                user_dictionary: Some(path.to_string()),
                ..LinderaConfig::default()
            };
            assert_eq!(config.validate().is_ok(), ok, "{path}");
        }
    }

    #[test]
    fn test_dictionary_source_parse() {
        assert_eq!(
            DictionarySource::parse("embedded://ko-dic"),
            DictionarySource::Embedded("ko-dic")
        );
        assert_eq!(
            DictionarySource::parse("relative/dict"),
            DictionarySource::Path(Path::new("relative/dict"))
        );
        assert!(!DictionarySource::parse("embedded://").is_known());
    }

    #[test]
    fn test_install_command() {
        assert_eq!(
            DictionarySource::parse("embedded://ipadic").install_command(),
            "cargo build --features lindera-ipadic"
        );
        assert_eq!(
            DictionarySource::parse("/opt/dict").install_command(),
            "lindera build --src <source> --dest /opt/dict"
        );

        let unknown = DictionarySource::parse("embedded://klingon").install_command();
        assert!(!unknown.contains("lindera-klingon"));
        assert!(unknown.contains("ipadic, ipadic-neologd, unidic, ko-dic, cc-cedict"));
    }

    #[test]
    fn test_install_command_names_declared_features() {
        let manifest = include_str!("../Cargo.toml");
        for name in EMBEDDED_DICTIONARIES {
            let command = DictionarySource::Embedded(name).install_command();
            let feature = command
                .strip_prefix("cargo build --features ")
                .unwrap_or_else(|| panic!("unexpected command {command}"));
            let declaration = format!(r#"{feature} = ["lindera", "lindera/{name}"]"#);
            assert!(
                manifest.lines().any(|line| line.trim() == declaration),
                "Cargo.toml must declare {declaration}"
            );
        }
    }
}
