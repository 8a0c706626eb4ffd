//! Locale-backed display labels.
//!
//! A [`LocaleStore`] maps a raw element identifier to the display title and
//! description authored for it. The store is a best-effort collaborator:
//! lookups may fail or time out, and the resolver degrades gracefully when
//! they do (see [`crate::resolver::labels`]).

use std::collections::HashMap;
use std::future::Future;
use std::path::PathBuf;
use thiserror::Error;

/// File name of the per-element locale bundle.
pub const BUNDLE_FILE_NAME: &str = "strings.en";

/// Errors raised by locale lookups.
#[derive(Debug, Error)]
pub enum LocaleError {
    /// No bundle exists for the requested identifier.
    #[error("no locale bundle for {id}")]
    MissingBundle {
        /// Raw element identifier.
        id: String,
    },

    /// The bundle exists but lacks a required key.
    #[error("locale bundle for {id} is missing key {key}")]
    MissingKey {
        /// Raw element identifier.
        id: String,
        /// The absent property key.
        key: String,
    },

    /// I/O error while reading a bundle.
    #[error("failed to read locale bundle: {0}")]
    Io(#[from] std::io::Error),
}

/// Display labels resolved for one entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleBundle {
    /// Display title.
    pub title: String,
    /// Display description.
    pub description: String,
}

impl LocaleBundle {
    /// Create a bundle from title and description.
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

/// Keyed lookup from raw element identifier to display labels.
///
/// Implementations may hit the filesystem or a remote store; the resolver
/// bounds each lookup with a timeout, so implementations do not need their
/// own deadline handling.
pub trait LocaleStore: Send + Sync {
    /// Look up the labels authored for `id`.
    fn lookup(&self, id: &str) -> impl Future<Output = Result<LocaleBundle, LocaleError>> + Send;
}

// ============================================================================
// File-backed store
// ============================================================================

/// Locale store reading per-element property files from disk.
///
/// Each element owns a resource directory `<root>/<id>/` containing a
/// [`BUNDLE_FILE_NAME`] file with `<id>.title` and `<id>.description`
/// entries:
///
/// ```text
/// # resources/flowrate/strings.en
/// flowrate.title=Flow Rate Sensor
/// flowrate.description=Reports water flow rate
/// ```
#[derive(Debug, Clone)]
pub struct FileLocaleStore {
    root: PathBuf,
}

impl FileLocaleStore {
    /// Create a store rooted at the given resource directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn bundle_path(&self, id: &str) -> PathBuf {
        self.root.join(id).join(BUNDLE_FILE_NAME)
    }
}

impl LocaleStore for FileLocaleStore {
    async fn lookup(&self, id: &str) -> Result<LocaleBundle, LocaleError> {
        let path = self.bundle_path(id);
        let contents = match tokio::fs::read_to_string(&path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(LocaleError::MissingBundle { id: id.to_string() });
            }
            Err(e) => return Err(e.into()),
        };

        let properties = parse_properties(&contents);
        let title_key = format!("{id}.title");
        let description_key = format!("{id}.description");

        let title = properties
            .get(title_key.as_str())
            .ok_or_else(|| LocaleError::MissingKey {
                id: id.to_string(),
                key: title_key.clone(),
            })?;
        let description = properties
            .get(description_key.as_str())
            .map(String::as_str)
            .unwrap_or_default();

        Ok(LocaleBundle::new(title.clone(), description))
    }
}

/// Parse a minimal `key=value` properties file.
///
/// Blank lines and `#` comments are skipped; later entries win.
fn parse_properties(contents: &str) -> HashMap<&str, String> {
    let mut properties = HashMap::new();
    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some((key, value)) = line.split_once('=') {
            properties.insert(key.trim(), value.trim().to_string());
        }
    }
    properties
}

// ============================================================================
// In-memory store
// ============================================================================

/// In-memory locale store, mainly for tests and embedded setups.
#[derive(Debug, Clone, Default)]
pub struct MemoryLocaleStore {
    entries: HashMap<String, LocaleBundle>,
}

impl MemoryLocaleStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert labels for an identifier.
    pub fn insert(&mut self, id: impl Into<String>, bundle: LocaleBundle) {
        self.entries.insert(id.into(), bundle);
    }
}

impl LocaleStore for MemoryLocaleStore {
    async fn lookup(&self, id: &str) -> Result<LocaleBundle, LocaleError> {
        self.entries
            .get(id)
            .cloned()
            .ok_or_else(|| LocaleError::MissingBundle { id: id.to_string() })
    }
}

/// Locale store with no entries; every lookup misses.
///
/// Useful for registries that do not ship locale resources.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLocales;

impl LocaleStore for NoLocales {
    async fn lookup(&self, id: &str) -> Result<LocaleBundle, LocaleError> {
        Err(LocaleError::MissingBundle { id: id.to_string() })
    }
}
