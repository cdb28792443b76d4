//! Optional tokenization capabilities.
//!
//! A [`CapabilityRegistry`] holds one optional provider per [`Capability`].
//! It is resolved once, either by [`CapabilityRegistry::detect`], which
//! installs whatever the crate was compiled with, or by injecting providers
//! directly:
//!
//! ```
//! use std::sync::Arc;
//!
//! use trisect::analysis::capability::{Capability, CapabilityRegistry};
//! use trisect::analysis::tokenizer::SimpleTokenizer;
//!
//! let registry = CapabilityRegistry::new()
//!     .with_provider(Capability::Unicode, Arc::new(SimpleTokenizer::new()));
//! assert!(registry.is_available(Capability::Unicode));
//! assert!(!registry.is_available(Capability::Lindera));
//! ```

use std::fmt;
use std::sync::Arc;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::analysis::tokenizer::Tokenizer;
use crate::config::TrisectConfig;
use crate::error::TrisectError;

/// The optional tokenization capabilities.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Capability {
    /// UAX #29 word segmentation (`unicode-segmentation`).
    Unicode,
    /// Dictionary-based morphological analysis (`lindera`).
    Lindera,
}

impl Capability {
    /// All capabilities in declaration order.
    pub const ALL: [Capability; 2] = [Capability::Unicode, Capability::Lindera];

    /// Name of the library providing this capability.
    pub fn library(&self) -> &'static str {
        match self {
            Capability::Unicode => "unicode-segmentation",
            Capability::Lindera => "lindera",
        }
    }

    /// Cargo feature that compiles this capability in.
    pub fn feature(&self) -> &'static str {
        match self {
            Capability::Unicode => "unicode",
            Capability::Lindera => "lindera",
        }
    }

    /// Command that makes this capability available.
    pub fn install_command(&self) -> String {
        format!("cargo build --features {}", self.feature())
    }

    /// Whether this capability was compiled into the crate.
    pub fn is_compiled(&self) -> bool {
        match self {
            Capability::Unicode => cfg!(feature = "unicode"),
            Capability::Lindera => cfg!(feature = "lindera"),
        }
    }

    /// The error reported when this capability has no provider.
    pub fn unavailable_error(&self) -> TrisectError {
        TrisectError::unavailable(self.library(), self.install_command())
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.library())
    }
}

/// Optional providers for each capability, resolved once.
#[derive(Clone, Default)]
pub struct CapabilityRegistry {
    unicode: Option<Arc<dyn Tokenizer>>,
    lindera: Option<Arc<dyn Tokenizer>>,
}

impl CapabilityRegistry {
    /// Create a registry with no capability available.
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the providers compiled into this build.
    ///
    /// A capability whose feature is disabled simply stays unavailable.
    pub fn detect(config: &TrisectConfig) -> Self {
        #[allow(unused_mut)]
        let mut registry = Self::new();

        #[cfg(feature = "unicode")]
        {
            registry = registry.with_provider(
                Capability::Unicode,
                Arc::new(crate::analysis::tokenizer::UnicodeWordTokenizer::new()),
            );
        }

        #[cfg(feature = "lindera")]
        {
            registry = registry.with_provider(
                Capability::Lindera,
                Arc::new(crate::analysis::tokenizer::LinderaTokenizer::new(
                    config.lindera.clone(),
                )),
            );
        }
        #[cfg(not(feature = "lindera"))]
        let _ = config;

        for capability in Capability::ALL {
            debug!(
                "capability {} available: {}",
                capability,
                registry.is_available(capability)
            );
        }

        registry
    }

    /// Install a provider for a capability, replacing any previous one.
    pub fn with_provider(mut self, capability: Capability, provider: Arc<dyn Tokenizer>) -> Self {
        *self.slot_mut(capability) = Some(provider);
        self
    }

    /// Remove the provider for a capability.
    pub fn without(mut self, capability: Capability) -> Self {
        *self.slot_mut(capability) = None;
        self
    }

    /// The provider for a capability, if one is installed.
    pub fn provider(&self, capability: Capability) -> Option<&Arc<dyn Tokenizer>> {
        match capability {
            Capability::Unicode => self.unicode.as_ref(),
            Capability::Lindera => self.lindera.as_ref(),
        }
    }

    /// Check if a capability has a provider.
    pub fn is_available(&self, capability: Capability) -> bool {
        self.provider(capability).is_some()
    }

    fn slot_mut(&mut self, capability: Capability) -> &mut Option<Arc<dyn Tokenizer>> {
        match capability {
            Capability::Unicode => &mut self.unicode,
            Capability::Lindera => &mut self.lindera,
        }
    }
}

impl fmt::Debug for CapabilityRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CapabilityRegistry")
            .field("unicode", &self.unicode.as_ref().map(|p| p.name()))
            .field("lindera", &self.lindera.as_ref().map(|p| p.name()))
            .finish()
    }
}
