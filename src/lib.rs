// Export modules for library usage
pub mod analyzers;
pub mod config;
pub mod core;
pub mod diagnostics;
pub mod errors;
pub mod fix;
pub mod io;
pub mod transform;

// Re-export commonly used types
pub use crate::core::{
    CallableDeclaration, CallableKind, InterfaceDescriptor, Severity, SourceLocation,
    TypeDescriptor, Violation, ViolationKind,
};

pub use crate::analyzers::{is_awaitable, NamingRuleEngine};

pub use crate::config::NamingConfig;

pub use crate::diagnostics::{Diagnostic, DiagnosticDescriptor};

pub use crate::errors::{AwaitlintError, AwaitlintResult};

pub use crate::fix::{apply_fixes, FixOutcome, RenameFix, Renamer};

pub use crate::io::output::{create_writer, JsonWriter, OutputFormat, OutputWriter, TerminalWriter};
