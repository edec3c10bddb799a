//! Site configuration assembly and validation for folio.
//!
//! This crate provides:
//! - [`SiteAssembler`]: composes nav, sidebars, and settings into [`SiteConfig`]
//! - [`ContentIndex`]: scan of the docs source directory for validation
//! - [`validate`]: build-time structural checks (dangling links, coverage)
//! - [`Engine`] / [`bootstrap`]: explicit handoff to the rendering engine
//!
//! # Quick Start
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use folio_config::Config;
//! use folio_nav::{NavBuilder, NavLink};
//! use folio_sidebar::{RouteSidebar, SidebarItem, SidebarMap};
//! use folio_site::{ContentIndex, SiteAssembler, validate};
//!
//! let settings = Config::load(None)?;
//!
//! let nav = NavBuilder::new()
//!     .group("tool", "^/tool-", [NavLink::new("kotlin", "/tool-kotlin/")])
//!     .link("think", "/think/")
//!     .build();
//!
//! let mut sidebars = SidebarMap::new();
//! sidebars.insert(
//!     "/tool-kotlin/",
//!     RouteSidebar::new("/tool-kotlin/", vec![SidebarItem::leaf("FxGl", "FxGl")]),
//! );
//!
//! let site = SiteAssembler::new(&settings).assemble(nav, sidebars);
//!
//! let index = ContentIndex::scan(&settings.docs_resolved.source_dir);
//! let report = validate(&site, &index);
//! assert!(report.is_clean());
//! # Ok(())
//! # }
//! ```

pub(crate) mod assemble;
pub(crate) mod content;
pub(crate) mod engine;
pub(crate) mod validate;

pub use assemble::{SiteAssembler, SiteConfig};
pub use content::ContentIndex;
pub use engine::{Engine, InlineComponent, LONG_FORM, SHORT_FORM, bootstrap, reveal_components};
pub use validate::{Finding, ValidationReport, validate};
