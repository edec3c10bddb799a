//! Per-route sidebar model for folio.
//!
//! Each route prefix owns one [`RouteSidebar`]: an ordered, possibly nested
//! tree of [`SidebarItem`] sections and leaves plus the `base_path` under
//! which leaf targets resolve. [`SidebarMap`] keys the sidebars by route
//! prefix and answers longest-prefix-wins lookups for request paths.
//!
//! # Relative targets
//!
//! Leaf targets are stored relative to the route's `base_path`, so renaming
//! a top-level route prefix touches exactly one `base_path` value instead of
//! every leaf. The flip side is that `base_path + target` must resolve to an
//! existing document for every leaf; the site-level validation pass checks
//! this on every assembly.

use std::collections::BTreeMap;

use serde::Serialize;

/// Leaf entry linking directly to a document.
///
/// `target` is relative to the owning route's `base_path`; an empty target
/// points at the route landing page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SidebarLeaf {
    /// Display label.
    pub label: String,
    /// Document path relative to the route's `base_path`.
    pub target: String,
}

/// Collapsible header grouping child items.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SidebarSection {
    /// Display label.
    pub label: String,
    /// Whether the section starts collapsed.
    pub collapsed: bool,
    /// Ordered child items.
    pub children: Vec<SidebarItem>,
}

/// Sidebar tree node.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SidebarItem {
    /// Direct link to a document.
    Leaf(SidebarLeaf),
    /// Collapsible group of child items.
    Section(SidebarSection),
}

impl SidebarItem {
    /// Create a leaf item.
    #[must_use]
    pub fn leaf(label: impl Into<String>, target: impl Into<String>) -> Self {
        Self::Leaf(SidebarLeaf {
            label: label.into(),
            target: target.into(),
        })
    }

    /// Create an expanded section.
    #[must_use]
    pub fn section(label: impl Into<String>, children: Vec<SidebarItem>) -> Self {
        Self::Section(SidebarSection {
            label: label.into(),
            collapsed: false,
            children,
        })
    }

    /// Create a section that starts collapsed.
    #[must_use]
    pub fn collapsed_section(label: impl Into<String>, children: Vec<SidebarItem>) -> Self {
        Self::Section(SidebarSection {
            label: label.into(),
            collapsed: true,
            children,
        })
    }

    /// Display label of the item.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Leaf(leaf) => &leaf.label,
            Self::Section(section) => &section.label,
        }
    }

    fn collect_leaves<'a>(&'a self, out: &mut Vec<&'a SidebarLeaf>) {
        match self {
            Self::Leaf(leaf) => out.push(leaf),
            Self::Section(section) => {
                for child in &section.children {
                    child.collect_leaves(out);
                }
            }
        }
    }
}

/// Sidebar definition for one route prefix.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RouteSidebar {
    /// Base path under which leaf targets resolve.
    pub base_path: String,
    /// Ordered top-level items.
    pub items: Vec<SidebarItem>,
}

impl RouteSidebar {
    /// Create a route sidebar.
    #[must_use]
    pub fn new(base_path: impl Into<String>, items: Vec<SidebarItem>) -> Self {
        Self {
            base_path: base_path.into(),
            items,
        }
    }

    /// Resolve a leaf target to a full document path.
    ///
    /// Joins `base_path` and `target` with a single slash. An empty target
    /// resolves to the base path itself (the route landing page).
    #[must_use]
    pub fn resolve(&self, target: &str) -> String {
        let target = target.trim_start_matches('/');
        if target.is_empty() {
            return self.base_path.clone();
        }
        let base = self.base_path.trim_end_matches('/');
        format!("{base}/{target}")
    }

    /// All leaves of the tree in authored order.
    #[must_use]
    pub fn leaves(&self) -> Vec<&SidebarLeaf> {
        let mut out = Vec::new();
        for item in &self.items {
            item.collect_leaves(&mut out);
        }
        out
    }
}

/// Sidebars keyed by route prefix.
///
/// Backed by a `BTreeMap` so iteration order is deterministic and keys are
/// unique by construction.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SidebarMap {
    routes: BTreeMap<String, RouteSidebar>,
}

impl SidebarMap {
    /// Create an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a sidebar under a route prefix.
    ///
    /// A repeated prefix replaces the previous sidebar; the replacement is
    /// logged because it is almost certainly an authoring mistake.
    pub fn insert(&mut self, prefix: impl Into<String>, sidebar: RouteSidebar) {
        let prefix = prefix.into();
        if self.routes.insert(prefix.clone(), sidebar).is_some() {
            tracing::warn!(prefix = %prefix, "Duplicate sidebar prefix, previous definition replaced");
        }
    }

    /// Look up the sidebar for a request path.
    ///
    /// A path may fall under several prefixes; the longest one wins.
    #[must_use]
    pub fn match_route(&self, path: &str) -> Option<(&str, &RouteSidebar)> {
        self.routes
            .iter()
            .filter(|(prefix, _)| path.starts_with(prefix.as_str()))
            .max_by_key(|(prefix, _)| prefix.len())
            .map(|(prefix, sidebar)| (prefix.as_str(), sidebar))
    }

    /// Sidebar registered under an exact prefix.
    #[must_use]
    pub fn get(&self, prefix: &str) -> Option<&RouteSidebar> {
        self.routes.get(prefix)
    }

    /// Iterate entries in deterministic (sorted) key order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &RouteSidebar)> {
        self.routes
            .iter()
            .map(|(prefix, sidebar)| (prefix.as_str(), sidebar))
    }

    /// Number of registered route prefixes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// True if no sidebar is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}
