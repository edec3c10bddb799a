//! Site configuration assembly.
//!
//! Provides [`SiteConfig`], the root aggregate handed to the rendering
//! engine, and [`SiteAssembler`] which composes it from the navigation
//! model, the sidebar map, and the loaded settings. Assembly is pure and
//! deterministic: the same inputs always produce a deep-equal config.

use std::collections::BTreeMap;

use serde::Serialize;

use folio_config::{Config, LocaleConfig, ThemeConfig};
use folio_nav::NavEntry;
use folio_sidebar::SidebarMap;

/// Root site configuration consumed by the rendering engine at startup.
///
/// Constructed once at build/serve start, immutable thereafter.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SiteConfig {
    /// Site title.
    pub title: String,
    /// Site description.
    pub description: String,
    /// Public base URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    /// Locale table keyed by locale path.
    pub locales: BTreeMap<String, LocaleConfig>,
    /// Ordered top-level navigation entries.
    pub nav: Vec<NavEntry>,
    /// Sidebars keyed by route prefix.
    pub sidebars: SidebarMap,
    /// Presentational options passed through to the engine.
    pub theme: ThemeConfig,
}

/// Composes a [`SiteConfig`] from builder outputs and loaded settings.
#[derive(Debug)]
pub struct SiteAssembler<'a> {
    settings: &'a Config,
}

impl<'a> SiteAssembler<'a> {
    /// Create an assembler over loaded settings.
    #[must_use]
    pub fn new(settings: &'a Config) -> Self {
        Self { settings }
    }

    /// Compose the site configuration.
    ///
    /// Order of `nav` entries and sidebar iteration order are preserved as
    /// authored; no further computation occurs after this call.
    #[must_use]
    pub fn assemble(&self, nav: Vec<NavEntry>, sidebars: SidebarMap) -> SiteConfig {
        SiteConfig {
            title: self.settings.site.title.clone(),
            description: self.settings.site.description.clone(),
            base_url: self.settings.site.base_url.clone(),
            locales: self.settings.locale.clone(),
            nav,
            sidebars,
            theme: self.settings.theme.clone(),
        }
    }
}
