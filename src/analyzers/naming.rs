//! Naming rule engine for the async suffix convention.
//!
//! Combines the awaitability verdict with the exemption checks and
//! produces at most one violation per declaration: the two rules require
//! opposite verdicts, so they are mutually exclusive by construction.

use crate::analyzers::awaitable;
use crate::config::NamingConfig;
use crate::core::{CallableDeclaration, Violation, ViolationKind};
use crate::transform;
use rayon::prelude::*;

/// Stateless rule engine.
///
/// Holds only its configuration, reads only its input declaration, and
/// may be invoked concurrently from any number of worker threads.
#[derive(Debug, Clone, Default)]
pub struct NamingRuleEngine {
    config: NamingConfig,
}

impl NamingRuleEngine {
    /// Create an engine with the default convention
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine with a custom convention
    pub fn with_config(config: NamingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &NamingConfig {
        &self.config
    }

    /// Classify one declaration against the convention.
    ///
    /// Total for any input: exemptions and unresolvable return types fall
    /// through to "no violation" rather than erroring.
    pub fn classify(&self, declaration: &CallableDeclaration) -> Option<Violation> {
        if self.is_exempt(declaration) {
            return None;
        }
        // An override must match its base signature; renaming it would
        // break the override contract.
        if declaration.is_override {
            return None;
        }

        let suffix = &self.config.suffix;
        if awaitable::is_awaitable(declaration) {
            if self.is_entry_point(declaration) || declaration.name.ends_with(suffix.as_str()) {
                return None;
            }
            Some(Violation::new(
                ViolationKind::MissingSuffix,
                declaration,
                transform::append_suffix(&declaration.name, suffix),
            ))
        } else {
            if !declaration.name.ends_with(suffix.as_str()) {
                return None;
            }
            Some(Violation::new(
                ViolationKind::UnnecessarySuffix,
                declaration,
                transform::strip_suffix(&declaration.name, suffix),
            ))
        }
    }

    /// Classify a batch of declarations in parallel.
    ///
    /// Results are independent per declaration; no ordering is imposed
    /// beyond the input order rayon preserves when collecting. Callers
    /// needing deterministic diagnostics sort by source position.
    pub fn analyze_all(&self, declarations: &[CallableDeclaration]) -> Vec<Violation> {
        declarations
            .par_iter()
            .filter_map(|decl| self.classify(decl))
            .collect()
    }

    /// Names dictated by an external contract are not renameable
    fn is_exempt(&self, declaration: &CallableDeclaration) -> bool {
        if declaration.implements_interface_member {
            return true;
        }
        declaration.attributes.iter().any(|attribute| {
            self.config
                .exempt_attributes
                .iter()
                .any(|marker| attribute.starts_with(marker.as_str()))
        })
    }

    fn is_entry_point(&self, declaration: &CallableDeclaration) -> bool {
        declaration.is_entry_point
            || self
                .config
                .entry_points
                .iter()
                .any(|entry| *entry == declaration.name)
    }
}
