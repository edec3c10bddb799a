//! Rendering engine boundary.
//!
//! The external rendering engine (Markdown pipeline, theming, dev server) is
//! out of scope and modeled as the [`Engine`] trait: it accepts the
//! assembled [`SiteConfig`] once at startup and exposes a registration hook
//! for custom inline components.
//!
//! [`bootstrap`] performs the one-time startup sequence explicitly, taking
//! the engine as a parameter instead of mutating ambient global state, which
//! keeps the dependency visible and testable.

use serde::Serialize;

use crate::SiteConfig;

/// Component name for the block-level bilingual reveal.
pub const LONG_FORM: &str = "long-form";

/// Component name for the inline bilingual reveal.
pub const SHORT_FORM: &str = "short-form";

/// Descriptor of a custom inline component usable from content documents
/// via a tag-like syntax.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct InlineComponent {
    /// Tag name used inside content documents.
    pub name: String,
    /// Whether the component renders as a block (vs. inline span).
    pub block: bool,
}

/// The external rendering engine's initialization surface.
///
/// Implementations read the configuration once at startup; there is no
/// teardown because the process lifetime equals the build/serve lifetime.
pub trait Engine {
    /// Register a custom inline component with the application context.
    fn register_component(&mut self, component: InlineComponent);

    /// Hand over the assembled site configuration.
    fn initialize(&mut self, config: SiteConfig);
}

/// The two bilingual text-reveal components shipped with every site.
///
/// Both wrap a span of text to toggle visibility of a translation:
/// `long-form` as a collapsible block, `short-form` as an inline toggle.
#[must_use]
pub fn reveal_components() -> [InlineComponent; 2] {
    [
        InlineComponent {
            name: LONG_FORM.to_owned(),
            block: true,
        },
        InlineComponent {
            name: SHORT_FORM.to_owned(),
            block: false,
        },
    ]
}

/// One-time engine startup: register the built-in inline components, then
/// hand over the site configuration.
pub fn bootstrap<E: Engine + ?Sized>(engine: &mut E, config: SiteConfig) {
    for component in reveal_components() {
        engine.register_component(component);
    }
    engine.initialize(config);
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    /// Engine mock recording the startup sequence.
    #[derive(Default)]
    struct RecordingEngine {
        components: Vec<InlineComponent>,
        config: Option<SiteConfig>,
        components_registered_before_init: bool,
    }

    impl Engine for RecordingEngine {
        fn register_component(&mut self, component: InlineComponent) {
            assert!(
                self.config.is_none(),
                "component registered after initialize"
            );
            self.components.push(component);
        }

        fn initialize(&mut self, config: SiteConfig) {
            self.components_registered_before_init = self.components.len() == 2;
            self.config = Some(config);
        }
    }

    fn empty_site() -> SiteConfig {
        let settings = folio_config::Config::default();
        crate::SiteAssembler::new(&settings)
            .assemble(Vec::new(), folio_sidebar::SidebarMap::new())
    }

    #[test]
    fn test_bootstrap_registers_both_reveal_components() {
        let mut engine = RecordingEngine::default();

        bootstrap(&mut engine, empty_site());

        let names: Vec<_> = engine.components.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec![LONG_FORM, SHORT_FORM]);
    }

    #[test]
    fn test_bootstrap_registers_components_before_initialize() {
        let mut engine = RecordingEngine::default();

        bootstrap(&mut engine, empty_site());

        assert!(engine.components_registered_before_init);
        assert!(engine.config.is_some());
    }

    #[test]
    fn test_reveal_components_block_flags() {
        let [long, short] = reveal_components();

        assert!(long.block);
        assert!(!short.block);
    }

    #[test]
    fn test_component_serialization() {
        let [long, _] = reveal_components();

        let json = serde_json::to_value(&long).unwrap();

        assert_eq!(json["name"], "long-form");
        assert_eq!(json["block"], true);
    }
}
