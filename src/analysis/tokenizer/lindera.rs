//! Dictionary-based morphological tokenizer backed by Lindera.

use std::borrow::Cow;
use std::path::Path;
use std::str::FromStr;
use std::sync::OnceLock;

use lindera::dictionary::{
    DictionaryKind, UserDictionary, load_dictionary_from_kind, load_dictionary_from_path,
    load_user_dictionary_from_bin, load_user_dictionary_from_csv,
};
use lindera::mode::Mode;
use lindera::segmenter::Segmenter;
use log::debug;

use super::Tokenizer;
use crate::analysis::token::{Token, TokenStream};
use crate::config::{DictionarySource, LinderaConfig};
use crate::error::{Result, TrisectError};

/// A tokenizer that segments text with a Lindera dictionary.
///
/// The dictionary is the language resource of this capability. It is loaded
/// on the first call to [`tokenize`](Tokenizer::tokenize) and kept for later
/// calls; a dictionary that cannot be loaded is reported as
/// [`TrisectError::ResourceMissing`] on every call until it becomes available.
pub struct LinderaTokenizer {
    config: LinderaConfig,
    segmenter: OnceLock<Segmenter>,
}

impl LinderaTokenizer {
    /// Create a new Lindera tokenizer. Nothing is loaded yet.
    pub fn new(config: LinderaConfig) -> Self {
        Self {
            config,
            segmenter: OnceLock::new(),
        }
    }

    fn segmenter(&self) -> Result<&Segmenter> {
        if let Some(segmenter) = self.segmenter.get() {
            return Ok(segmenter);
        }
        let loaded = self.load_segmenter()?;
        Ok(self.segmenter.get_or_init(|| loaded))
    }

    fn load_segmenter(&self) -> Result<Segmenter> {
        let mode = Mode::from_str(&self.config.mode).map_err(|e| {
            TrisectError::config(format!("Invalid mode '{}': {}", self.config.mode, e))
        })?;

        let uri = self.config.dictionary.as_str();
        let source = DictionarySource::parse(uri);
        debug!("loading lindera dictionary {uri}");
        let (loaded, kind) = match source {
            DictionarySource::Embedded(name) => {
                let kind = embedded_kind(name)?;
                (load_dictionary_from_kind(kind.clone()), Some(kind))
            }
            DictionarySource::Path(path) => (load_dictionary_from_path(path), None),
        };
        let dictionary = loaded.map_err(|e| {
            debug!("failed to load lindera dictionary {uri}: {e}");
            TrisectError::resource_missing(
                format!("Lindera dictionary '{uri}'"),
                source.install_command(),
            )
        })?;

        let user_dictionary = match self.config.user_dictionary.as_deref() {
            Some(path) => Some(load_user_dictionary(Path::new(path), kind)?),
            None => None,
        };

        Ok(Segmenter::new(mode, dictionary, user_dictionary))
    }
}

/// The dictionary kind of an `embedded://<name>` URI.
fn embedded_kind(name: &str) -> Result<DictionaryKind> {
    DictionaryKind::from_str(name).map_err(|_| {
        TrisectError::config(format!(
            "Unknown embedded dictionary '{name}'. {}",
            DictionarySource::Embedded(name).install_command()
        ))
    })
}

/// Load a user dictionary: a `.csv` source is compiled against the kind of
/// the embedded main dictionary, a `.bin` file is read as is.
fn load_user_dictionary(path: &Path, kind: Option<DictionaryKind>) -> Result<UserDictionary> {
    let is_csv = path.extension().and_then(|ext| ext.to_str()) == Some("csv");
    debug!("loading lindera user dictionary {}", path.display());

    let loaded = if is_csv {
        let Some(kind) = kind else {
            return Err(TrisectError::config(format!(
                "CSV user dictionary '{}' needs an embedded main dictionary",
                path.display()
            )));
        };
        load_user_dictionary_from_csv(kind, path)
    } else {
        load_user_dictionary_from_bin(path)
    };

    loaded.map_err(|e| {
        debug!("failed to load lindera user dictionary {}: {e}", path.display());
        TrisectError::resource_missing(
            format!("Lindera user dictionary '{}'", path.display()),
            user_install_command(path, is_csv),
        )
    })
}

fn user_install_command(path: &Path, is_csv: bool) -> String {
    if is_csv {
        format!("create the CSV user dictionary at {}", path.display())
    } else {
        format!("lindera build --user --src <source.csv> --dest {}", path.display())
    }
}

impl Tokenizer for LinderaTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let segmenter = self.segmenter()?;

        let mut tokens = Vec::new();
        for token in segmenter
            .segment(Cow::Borrowed(text))
            .map_err(|e| TrisectError::analysis(format!("Failed to segment text: {e}")))?
        {
            tokens.push(Token::with_offsets(
                token.text.into_owned(),
                token.position,
                token.byte_start,
                token.byte_end,
            ));
        }

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "lindera"
    }
}
