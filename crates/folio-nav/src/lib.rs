//! Top navigation model for folio.
//!
//! Provides [`NavEntry`] (a direct link or a drop-down group of links) and
//! [`NavBuilder`] for assembling the ordered top-level menu handed to the
//! rendering engine.
//!
//! # Design
//!
//! Construction cannot fail. A malformed active-prefix pattern degrades to a
//! pattern that never matches (the menu item is simply never highlighted),
//! and a link without a target carries an empty target the engine refuses to
//! navigate to. Both cases are authoring mistakes surfaced by the site-level
//! validation pass, not by this crate.

use regex::Regex;
use serde::{Serialize, Serializer};

/// Pattern over route paths used to highlight the active drop-down group.
///
/// Wraps a compiled regex. A pattern that fails to compile is kept in raw
/// form and never matches.
#[derive(Clone, Debug)]
pub struct PrefixPattern {
    raw: String,
    regex: Option<Regex>,
}

impl PrefixPattern {
    /// Compile a pattern from its raw source.
    ///
    /// Never fails: a malformed pattern is logged and degrades to a
    /// never-matching pattern.
    #[must_use]
    pub fn new(raw: &str) -> Self {
        let regex = match Regex::new(raw) {
            Ok(re) => Some(re),
            Err(e) => {
                tracing::warn!(pattern = raw, error = %e, "Invalid active-prefix pattern, group will never highlight");
                None
            }
        };
        Self {
            raw: raw.to_owned(),
            regex,
        }
    }

    /// Raw pattern source as authored.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// True if the pattern compiled successfully.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.regex.is_some()
    }

    /// Check whether a route path matches this pattern.
    #[must_use]
    pub fn is_match(&self, path: &str) -> bool {
        self.regex.as_ref().is_some_and(|re| re.is_match(path))
    }
}

impl PartialEq for PrefixPattern {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl Eq for PrefixPattern {}

impl Serialize for PrefixPattern {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.raw)
    }
}

/// Direct link, either top-level or inside a group.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NavLink {
    /// Display label.
    pub label: String,
    /// Link target path (empty for an unresolved placeholder).
    pub target: String,
}

impl NavLink {
    /// Create a link with a target path.
    #[must_use]
    pub fn new(label: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            target: target.into(),
        }
    }

    /// Create a link without a target.
    ///
    /// The engine refuses to navigate to an empty target; validation reports
    /// it as a dangling link.
    #[must_use]
    pub fn placeholder(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            target: String::new(),
        }
    }
}

/// Drop-down group of links.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NavGroup {
    /// Display label.
    pub label: String,
    /// Pattern highlighting this group as active for matching route paths.
    pub active_prefix: PrefixPattern,
    /// Ordered sub-links.
    pub children: Vec<NavLink>,
}

/// Top-level navigation entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum NavEntry {
    /// Direct link.
    Link(NavLink),
    /// Drop-down group of links.
    Group(NavGroup),
}

impl NavEntry {
    /// Display label of the entry.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Link(link) => &link.label,
            Self::Group(group) => &group.label,
        }
    }

    /// Check whether the entry should render as active for a route path.
    ///
    /// Links are active on an exact target match, groups when their
    /// active-prefix pattern matches.
    #[must_use]
    pub fn is_active(&self, path: &str) -> bool {
        match self {
            Self::Link(link) => !link.target.is_empty() && link.target == path,
            Self::Group(group) => group.active_prefix.is_match(path),
        }
    }
}

/// Builder for the ordered top-level navigation.
///
/// Preserves authored order of entries and of each group's children.
#[derive(Debug, Default)]
pub struct NavBuilder {
    entries: Vec<NavEntry>,
}

impl NavBuilder {
    /// Create an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a direct link.
    #[must_use]
    pub fn link(mut self, label: impl Into<String>, target: impl Into<String>) -> Self {
        self.entries.push(NavEntry::Link(NavLink::new(label, target)));
        self
    }

    /// Append a drop-down group.
    ///
    /// `active_prefix` is compiled as a route-path pattern; a malformed
    /// pattern degrades to never matching.
    #[must_use]
    pub fn group(
        mut self,
        label: impl Into<String>,
        active_prefix: &str,
        children: impl IntoIterator<Item = NavLink>,
    ) -> Self {
        self.entries.push(NavEntry::Group(NavGroup {
            label: label.into(),
            active_prefix: PrefixPattern::new(active_prefix),
            children: children.into_iter().collect(),
        }));
        self
    }

    /// Finish and return the ordered entries.
    #[must_use]
    pub fn build(self) -> Vec<NavEntry> {
        self.entries
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_builder_preserves_entry_order() {
        let nav = NavBuilder::new()
            .group("work", "^/work-", [NavLink::new("Java", "/work-java/")])
            .link("think", "/think/")
            .group("tool", "^/tool-", [NavLink::new("kotlin", "/tool-kotlin/")])
            .build();

        let labels: Vec<_> = nav.iter().map(NavEntry::label).collect();
        assert_eq!(labels, vec!["work", "think", "tool"]);
    }

    #[test]
    fn test_builder_preserves_child_order() {
        let nav = NavBuilder::new()
            .group(
                "book",
                "^/book-",
                [
                    NavLink::new("KinA", "/book-kina/"),
                    NavLink::new("Blender", "/book-blender/"),
                ],
            )
            .build();

        let NavEntry::Group(group) = &nav[0] else {
            panic!("expected group");
        };
        assert_eq!(group.children[0].label, "KinA");
        assert_eq!(group.children[1].label, "Blender");
    }

    #[test]
    fn test_link_active_on_exact_target() {
        let entry = NavEntry::Link(NavLink::new("think", "/think/"));

        assert!(entry.is_active("/think/"));
        assert!(!entry.is_active("/think/deep"));
    }

    #[test]
    fn test_placeholder_link_never_active() {
        let entry = NavEntry::Link(NavLink::placeholder("draft"));

        assert_eq!(entry.label(), "draft");
        assert!(!entry.is_active(""));
    }

    #[test]
    fn test_group_active_on_prefix_match() {
        let nav = NavBuilder::new()
            .group("tool", "^/tool-", [NavLink::new("kotlin", "/tool-kotlin/")])
            .build();

        assert!(nav[0].is_active("/tool-kotlin/FxGl"));
        assert!(!nav[0].is_active("/work-java/intro"));
    }

    #[test]
    fn test_malformed_pattern_degrades_to_never_matching() {
        let pattern = PrefixPattern::new("^/tool-[");

        assert!(!pattern.is_valid());
        assert!(!pattern.is_match("/tool-kotlin/"));
        assert_eq!(pattern.as_str(), "^/tool-[");
    }

    #[test]
    fn test_malformed_pattern_does_not_fail_construction() {
        let nav = NavBuilder::new()
            .group("broken", "(((", [NavLink::new("page", "/page")])
            .build();

        assert_eq!(nav.len(), 1);
        assert!(!nav[0].is_active("/page"));
    }

    #[test]
    fn test_prefix_pattern_equality_on_raw_source() {
        assert_eq!(PrefixPattern::new("^/a"), PrefixPattern::new("^/a"));
        assert_ne!(PrefixPattern::new("^/a"), PrefixPattern::new("^/b"));
    }

    #[test]
    fn test_link_serialization() {
        let entry = NavEntry::Link(NavLink::new("think", "/think/"));

        let json = serde_json::to_value(&entry).unwrap();

        assert_eq!(json["label"], "think");
        assert_eq!(json["target"], "/think/");
        assert!(json.get("children").is_none());
    }

    #[test]
    fn test_group_serialization() {
        let nav = NavBuilder::new()
            .group("tool", "^/tool-", [NavLink::new("kotlin", "/tool-kotlin/")])
            .build();

        let json = serde_json::to_value(&nav[0]).unwrap();

        assert_eq!(json["label"], "tool");
        assert_eq!(json["active_prefix"], "^/tool-");
        assert_eq!(json["children"][0]["label"], "kotlin");
        assert_eq!(json["children"][0]["target"], "/tool-kotlin/");
    }
}
