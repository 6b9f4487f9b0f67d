pub mod types;

pub use types::{
    CallableDeclaration, CallableKind, InterfaceDescriptor, Severity, SourceLocation,
    TypeDescriptor, Violation, ViolationKind,
};
