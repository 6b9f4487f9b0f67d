//! Diagnostic surface consumed by reporting sinks.
//!
//! Each violation kind maps to one stable descriptor so hosts can key
//! suppressions and fix registrations off the identifier rather than the
//! message text.

use crate::core::{Severity, SourceLocation, Violation, ViolationKind};
use serde::Serialize;
use std::fmt;

/// Immutable description of one diagnostic kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiagnosticDescriptor {
    pub id: &'static str,
    pub title: &'static str,
    /// Template with a `{}` hole for the current name
    pub message_format: &'static str,
    pub severity: Severity,
}

pub const MISSING_SUFFIX: DiagnosticDescriptor = DiagnosticDescriptor {
    id: "async-suffix-missing",
    title: "Asynchronous callable name lacks the async suffix",
    message_format: "'{}' is asynchronous; its name should end with the async suffix",
    severity: Severity::Warning,
};

pub const UNNECESSARY_SUFFIX: DiagnosticDescriptor = DiagnosticDescriptor {
    id: "async-suffix-unnecessary",
    title: "Non-asynchronous callable name carries the async suffix",
    message_format: "'{}' is not asynchronous; its name should not end with the async suffix",
    severity: Severity::Warning,
};

/// Look up the descriptor for a violation kind
pub fn descriptor(kind: ViolationKind) -> &'static DiagnosticDescriptor {
    match kind {
        ViolationKind::MissingSuffix => &MISSING_SUFFIX,
        ViolationKind::UnnecessarySuffix => &UNNECESSARY_SUFFIX,
    }
}

/// One rendered diagnostic ready for a reporting sink
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diagnostic {
    pub id: &'static str,
    pub severity: Severity,
    pub message: String,
    pub location: Option<SourceLocation>,
}

impl Diagnostic {
    pub fn from_violation(violation: &Violation) -> Self {
        let descriptor = descriptor(violation.kind);
        Self {
            id: descriptor.id,
            severity: descriptor.severity,
            message: descriptor.message_format.replacen("{}", &violation.name, 1),
            location: violation.location.clone(),
        }
    }

    /// Whether the diagnostic carries a source position a sink can point at
    pub fn is_reportable(&self) -> bool {
        self.location.is_some()
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.location {
            Some(location) => write!(
                f,
                "{}:{}:{}: warning[{}]: {}",
                location.file.display(),
                location.line,
                location.column,
                self.id,
                self.message
            ),
            None => write!(f, "warning[{}]: {}", self.id, self.message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CallableDeclaration, CallableKind};
    use std::path::PathBuf;

    #[test]
    fn test_descriptor_ids_are_distinct() {
        assert_ne!(MISSING_SUFFIX.id, UNNECESSARY_SUFFIX.id);
        assert_eq!(MISSING_SUFFIX.severity, Severity::Warning);
        assert_eq!(UNNECESSARY_SUFFIX.severity, Severity::Warning);
    }

    #[test]
    fn test_message_carries_current_name() {
        let decl = CallableDeclaration::new("Download", CallableKind::Method);
        let violation = Violation::new(
            ViolationKind::MissingSuffix,
            &decl,
            "DownloadAsync".to_string(),
        );
        let diagnostic = Diagnostic::from_violation(&violation);
        assert!(diagnostic.message.contains("'Download'"));
        assert!(!diagnostic.is_reportable());
    }

    #[test]
    fn test_display_includes_location() {
        let decl = CallableDeclaration::new("ComputeAsync", CallableKind::Method)
            .at(SourceLocation::new(PathBuf::from("svc.cs"), 42, 9));
        let violation = Violation::new(
            ViolationKind::UnnecessarySuffix,
            &decl,
            "Compute".to_string(),
        );
        let diagnostic = Diagnostic::from_violation(&violation);
        let rendered = diagnostic.to_string();
        assert!(rendered.starts_with("svc.cs:42:9"));
        assert!(rendered.contains("async-suffix-unnecessary"));
    }
}
