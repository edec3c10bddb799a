//! Content index of the docs source directory.
//!
//! Provides [`ContentIndex`]: the set of route paths backed by an existing
//! markdown document, used by validation to detect dangling references.
//!
//! # Route derivation
//!
//! - `index.md` -> `/`
//! - `guide.md` -> `/guide`
//! - `tool-kotlin/index.md` -> `/tool-kotlin/`
//! - `tool-kotlin/FxGl.md` -> `/tool-kotlin/FxGl`
//!
//! Hidden and underscore-prefixed entries are skipped, as are common
//! non-documentation directories.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

/// Set of route paths backed by existing content documents.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContentIndex {
    routes: BTreeSet<String>,
}

impl ContentIndex {
    /// Scan a source directory for markdown documents.
    ///
    /// A missing directory yields an empty index; an unreadable directory is
    /// logged and skipped.
    #[must_use]
    pub fn scan(source_dir: &Path) -> Self {
        let mut routes = BTreeSet::new();
        if source_dir.exists() {
            scan_directory(source_dir, "", &mut routes);
        }
        Self { routes }
    }

    /// Build an index from known route paths.
    ///
    /// Useful when the document set comes from somewhere other than a
    /// filesystem scan.
    #[must_use]
    pub fn from_routes<I, S>(routes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            routes: routes.into_iter().map(Into::into).collect(),
        }
    }

    /// True if a document exists at the given route path.
    #[must_use]
    pub fn contains(&self, route: &str) -> bool {
        self.routes.contains(route)
    }

    /// Iterate route paths in deterministic (sorted) order.
    pub fn routes(&self) -> impl Iterator<Item = &str> {
        self.routes.iter().map(String::as_str)
    }

    /// Number of indexed documents.
    #[must_use]
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// True if no document was found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

/// Recursively collect markdown routes under a directory.
fn scan_directory(dir_path: &Path, base: &str, routes: &mut BTreeSet<String>) {
    let entries = match fs::read_dir(dir_path) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::warn!(dir = %dir_path.display(), error = %e, "Failed to read directory during content scan");
            return;
        }
    };

    for entry in entries.filter_map(Result::ok) {
        let name = entry.file_name().to_string_lossy().into_owned();

        // Skip hidden and underscore-prefixed files/dirs
        if name.starts_with('.') || name.starts_with('_') {
            continue;
        }

        let is_dir = entry.file_type().is_ok_and(|t| t.is_dir());
        if is_dir {
            // Skip common non-documentation directories
            if matches!(
                name.as_str(),
                "node_modules" | "target" | "dist" | "build" | "vendor" | "__pycache__"
            ) {
                continue;
            }
            let rel = join_rel(base, &name);
            scan_directory(&entry.path(), &rel, routes);
        } else if entry.path().extension().is_some_and(|e| e == "md") {
            let rel = join_rel(base, &name);
            routes.insert(route_from_source(&rel));
        }
    }
}

/// Join a relative source path with forward slashes.
fn join_rel(base: &str, name: &str) -> String {
    if base.is_empty() {
        name.to_owned()
    } else {
        format!("{base}/{name}")
    }
}

/// Convert a relative source path to its route path.
fn route_from_source(source: &str) -> String {
    if source == "index.md" {
        return "/".to_owned();
    }

    let without_ext = source.strip_suffix(".md").unwrap_or(source);

    // Directory index files map to the directory route with trailing slash
    if let Some(dir) = without_ext.strip_suffix("/index") {
        return format!("/{dir}/");
    }

    format!("/{without_ext}")
}
