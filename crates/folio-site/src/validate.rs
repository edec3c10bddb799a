//! Build-time structural validation.
//!
//! Checks the assembled [`SiteConfig`] against the [`ContentIndex`] for the
//! two classes of authoring mistakes the data model permits: dangling
//! references (a nav link or sidebar leaf whose resolved path matches no
//! document) and structural mismatches (a sidebar prefix covering no
//! documents, or a document covered by no sidebar prefix).
//!
//! Findings are warnings collected into a [`ValidationReport`] and logged;
//! assembly never fails on them. A build script can turn a non-clean report
//! into a hard error via [`ValidationReport::is_clean`].

use std::collections::HashSet;

use folio_nav::{NavEntry, NavLink};
use folio_sidebar::SidebarMap;

use crate::{ContentIndex, SiteConfig};

/// A structural defect found during validation.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Finding {
    /// Sidebar leaf whose `base_path + target` matches no document.
    #[error("sidebar leaf '{label}' under '{prefix}' resolves to missing document '{resolved}'")]
    DanglingLeaf {
        /// Route prefix owning the leaf.
        prefix: String,
        /// Leaf label.
        label: String,
        /// Resolved document path.
        resolved: String,
    },
    /// Nav link whose target matches no document.
    #[error("nav link '{label}' points at missing document '{target}'")]
    DanglingNavLink {
        /// Link label.
        label: String,
        /// Authored target (possibly empty).
        target: String,
    },
    /// Label repeated within one navigation sequence.
    #[error("duplicate label '{label}' in {scope}")]
    DuplicateLabel {
        /// Containing sequence (top-level nav or a named group).
        scope: String,
        /// Repeated label.
        label: String,
    },
    /// Drop-down group without children.
    #[error("nav group '{label}' has no children")]
    EmptyGroup {
        /// Group label.
        label: String,
    },
    /// Sidebar prefix under which no document lives.
    #[error("sidebar prefix '{prefix}' matches no documents")]
    OrphanPrefix {
        /// Unmatched route prefix.
        prefix: String,
    },
    /// Document reachable by URL but outside every sidebar.
    #[error("document '{route}' is not covered by any sidebar prefix")]
    UncoveredDocument {
        /// Orphaned document route.
        route: String,
    },
}

/// Result of a validation pass.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationReport {
    findings: Vec<Finding>,
}

impl ValidationReport {
    /// True if no defect was found.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.findings.is_empty()
    }

    /// All findings in detection order.
    #[must_use]
    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }
}

/// Validate an assembled site configuration against the content index.
///
/// Every leaf of every prefix is re-resolved on each run, so a `base_path`
/// change is always fully re-checked rather than trusted from history.
/// Findings are logged as warnings and returned; this function never fails.
#[must_use]
pub fn validate(config: &SiteConfig, index: &ContentIndex) -> ValidationReport {
    let mut findings = Vec::new();

    check_nav(&config.nav, index, &mut findings);
    check_sidebars(&config.sidebars, index, &mut findings);
    check_coverage(&config.sidebars, index, &mut findings);

    for finding in &findings {
        tracing::warn!("{finding}");
    }

    ValidationReport { findings }
}

/// Check navigation entries: duplicate labels, empty groups, dangling links.
fn check_nav(nav: &[NavEntry], index: &ContentIndex, findings: &mut Vec<Finding>) {
    let mut seen = HashSet::new();
    for entry in nav {
        if !seen.insert(entry.label()) {
            findings.push(Finding::DuplicateLabel {
                scope: "top-level nav".to_owned(),
                label: entry.label().to_owned(),
            });
        }

        match entry {
            NavEntry::Link(link) => check_link(link, index, findings),
            NavEntry::Group(group) => {
                if group.children.is_empty() {
                    findings.push(Finding::EmptyGroup {
                        label: group.label.clone(),
                    });
                }
                let mut child_seen = HashSet::new();
                for child in &group.children {
                    if !child_seen.insert(child.label.as_str()) {
                        findings.push(Finding::DuplicateLabel {
                            scope: format!("nav group '{}'", group.label),
                            label: child.label.clone(),
                        });
                    }
                    check_link(child, index, findings);
                }
            }
        }
    }
}

/// Check a single nav link target against the index.
///
/// External `http(s)` targets are out of scope for the content index and
/// skipped.
fn check_link(link: &NavLink, index: &ContentIndex, findings: &mut Vec<Finding>) {
    if link.target.starts_with("http://") || link.target.starts_with("https://") {
        return;
    }
    if link.target.is_empty() || !index.contains(&link.target) {
        findings.push(Finding::DanglingNavLink {
            label: link.label.clone(),
            target: link.target.clone(),
        });
    }
}

/// Check sidebar leaves (resolvability) and prefixes (orphans).
fn check_sidebars(sidebars: &SidebarMap, index: &ContentIndex, findings: &mut Vec<Finding>) {
    for (prefix, sidebar) in sidebars.entries() {
        for leaf in sidebar.leaves() {
            let resolved = sidebar.resolve(&leaf.target);
            if !index.contains(&resolved) {
                findings.push(Finding::DanglingLeaf {
                    prefix: prefix.to_owned(),
                    label: leaf.label.clone(),
                    resolved,
                });
            }
        }

        if !index.routes().any(|route| route.starts_with(prefix)) {
            findings.push(Finding::OrphanPrefix {
                prefix: prefix.to_owned(),
            });
        }
    }
}

/// Check that every document falls under some sidebar prefix.
fn check_coverage(sidebars: &SidebarMap, index: &ContentIndex, findings: &mut Vec<Finding>) {
    for route in index.routes() {
        if sidebars.match_route(route).is_none() {
            findings.push(Finding::UncoveredDocument {
                route: route.to_owned(),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use folio_nav::{NavBuilder, NavLink};
    use folio_sidebar::{RouteSidebar, SidebarItem};
    use pretty_assertions::assert_eq;

    use crate::SiteAssembler;

    use super::*;

    fn assemble(nav: Vec<NavEntry>, sidebars: SidebarMap) -> SiteConfig {
        let settings = folio_config::Config::default();
        SiteAssembler::new(&settings).assemble(nav, sidebars)
    }

    fn kotlin_sidebars(base_path: &str) -> SidebarMap {
        let mut sidebars = SidebarMap::new();
        sidebars.insert(
            "/tool-kotlin/",
            RouteSidebar::new(
                base_path,
                vec![
                    SidebarItem::leaf("Intro", ""),
                    SidebarItem::leaf("FxGl", "FxGl"),
                ],
            ),
        );
        sidebars
    }

    #[test]
    fn test_clean_site_passes() {
        let index = ContentIndex::from_routes(["/tool-kotlin/", "/tool-kotlin/FxGl"]);
        let nav = NavBuilder::new()
            .group("tool", "^/tool-", [NavLink::new("kotlin", "/tool-kotlin/")])
            .build();

        let report = validate(&assemble(nav, kotlin_sidebars("/tool-kotlin/")), &index);

        assert!(report.is_clean(), "unexpected findings: {:?}", report.findings());
    }

    #[test]
    fn test_dangling_leaf_detected() {
        let index = ContentIndex::from_routes(["/tool-kotlin/"]);

        let report = validate(
            &assemble(Vec::new(), kotlin_sidebars("/tool-kotlin/")),
            &index,
        );

        assert!(report.findings().iter().any(|f| matches!(
            f,
            Finding::DanglingLeaf { label, resolved, .. }
                if label == "FxGl" && resolved == "/tool-kotlin/FxGl"
        )));
    }

    #[test]
    fn test_base_path_change_is_fully_rechecked() {
        let index = ContentIndex::from_routes(["/tool-kotlin/", "/tool-kotlin/FxGl"]);

        // Same leaves validated against a renamed base_path: every target
        // resolves elsewhere and must be reported.
        let report = validate(&assemble(Vec::new(), kotlin_sidebars("/kotlin/")), &index);

        let dangling = report
            .findings()
            .iter()
            .filter(|f| matches!(f, Finding::DanglingLeaf { .. }))
            .count();
        assert_eq!(dangling, 2);
    }

    #[test]
    fn test_dangling_nav_link_detected() {
        let index = ContentIndex::from_routes(["/think/"]);
        let nav = NavBuilder::new().link("gone", "/gone/").build();

        let report = validate(&assemble(nav, SidebarMap::new()), &index);

        assert!(report.findings().iter().any(|f| matches!(
            f,
            Finding::DanglingNavLink { label, target }
                if label == "gone" && target == "/gone/"
        )));
    }

    #[test]
    fn test_empty_nav_target_reported_as_dangling() {
        let index = ContentIndex::default();
        let nav = vec![NavEntry::Link(NavLink::placeholder("draft"))];

        let report = validate(&assemble(nav, SidebarMap::new()), &index);

        assert!(report.findings().iter().any(|f| matches!(
            f,
            Finding::DanglingNavLink { label, target } if label == "draft" && target.is_empty()
        )));
    }

    #[test]
    fn test_external_nav_target_skipped() {
        let index = ContentIndex::default();
        let nav = NavBuilder::new()
            .link("source", "https://github.com/example/notes")
            .build();

        let report = validate(&assemble(nav, SidebarMap::new()), &index);

        assert!(
            !report
                .findings()
                .iter()
                .any(|f| matches!(f, Finding::DanglingNavLink { .. }))
        );
    }

    #[test]
    fn test_empty_group_detected() {
        let index = ContentIndex::default();
        let nav = NavBuilder::new()
            .group("tool", "^/tool-", std::iter::empty())
            .build();

        let report = validate(&assemble(nav, SidebarMap::new()), &index);

        assert!(report.findings().iter().any(
            |f| matches!(f, Finding::EmptyGroup { label } if label == "tool")
        ));
    }

    #[test]
    fn test_duplicate_top_level_labels_detected() {
        let index = ContentIndex::from_routes(["/a", "/b"]);
        let nav = NavBuilder::new().link("notes", "/a").link("notes", "/b").build();

        let report = validate(&assemble(nav, SidebarMap::new()), &index);

        assert!(report.findings().iter().any(|f| matches!(
            f,
            Finding::DuplicateLabel { scope, label }
                if scope == "top-level nav" && label == "notes"
        )));
    }

    #[test]
    fn test_duplicate_group_child_labels_detected() {
        let index = ContentIndex::from_routes(["/tool-kotlin/", "/tool-python/"]);
        let nav = NavBuilder::new()
            .group(
                "tool",
                "^/tool-",
                [
                    NavLink::new("kotlin", "/tool-kotlin/"),
                    NavLink::new("kotlin", "/tool-python/"),
                ],
            )
            .build();

        let report = validate(&assemble(nav, SidebarMap::new()), &index);

        assert!(report.findings().iter().any(|f| matches!(
            f,
            Finding::DuplicateLabel { scope, label }
                if scope == "nav group 'tool'" && label == "kotlin"
        )));
    }

    #[test]
    fn test_orphan_prefix_detected() {
        let index = ContentIndex::from_routes(["/think/"]);
        let mut sidebars = SidebarMap::new();
        sidebars.insert("/gone/", RouteSidebar::new("/gone/", vec![]));

        let report = validate(&assemble(Vec::new(), sidebars), &index);

        assert!(report.findings().iter().any(
            |f| matches!(f, Finding::OrphanPrefix { prefix } if prefix == "/gone/")
        ));
    }

    #[test]
    fn test_uncovered_document_detected() {
        let index = ContentIndex::from_routes(["/tool-kotlin/", "/stray"]);

        let mut sidebars = SidebarMap::new();
        sidebars.insert(
            "/tool-kotlin/",
            RouteSidebar::new("/tool-kotlin/", vec![SidebarItem::leaf("Intro", "")]),
        );

        let report = validate(&assemble(Vec::new(), sidebars), &index);

        assert!(report.findings().iter().any(
            |f| matches!(f, Finding::UncoveredDocument { route } if route == "/stray")
        ));
        // The covered landing page is not reported
        assert!(!report.findings().iter().any(
            |f| matches!(f, Finding::UncoveredDocument { route } if route == "/tool-kotlin/")
        ));
    }

    #[test]
    fn test_validation_against_scanned_content_tree() {
        let temp_dir = tempfile::tempdir().unwrap();
        let kotlin = temp_dir.path().join("tool-kotlin");
        fs::create_dir(&kotlin).unwrap();
        fs::write(kotlin.join("index.md"), "# Kotlin").unwrap();
        fs::write(kotlin.join("FxGl.md"), "# FxGl").unwrap();

        let index = ContentIndex::scan(temp_dir.path());
        let nav = NavBuilder::new()
            .group("tool", "^/tool-", [NavLink::new("kotlin", "/tool-kotlin/")])
            .build();

        let report = validate(&assemble(nav, kotlin_sidebars("/tool-kotlin/")), &index);

        assert!(report.is_clean(), "unexpected findings: {:?}", report.findings());
    }

    #[test]
    fn test_finding_display_names_the_document() {
        let finding = Finding::DanglingLeaf {
            prefix: "/tool-kotlin/".to_owned(),
            label: "FxGl".to_owned(),
            resolved: "/tool-kotlin/FxGl".to_owned(),
        };

        let msg = finding.to_string();

        assert!(msg.contains("FxGl"));
        assert!(msg.contains("/tool-kotlin/FxGl"));
    }
}
