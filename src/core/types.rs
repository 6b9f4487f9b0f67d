//! Common type definitions used across the crate

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Kind of callable a declaration represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CallableKind {
    Method,
    Property,
}

impl CallableKind {
    /// Get the display name for this kind
    pub fn display_name(&self) -> &str {
        match self {
            CallableKind::Method => "method",
            CallableKind::Property => "property",
        }
    }
}

/// Severity levels for reported issues
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Severity {
    Info,
    Warning,
    Major,
    Critical,
}

/// Location in source code
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourceLocation {
    pub file: PathBuf,
    pub line: usize,
    pub column: usize,
    pub end_line: Option<usize>,
    pub end_column: Option<usize>,
}

impl SourceLocation {
    /// Create a new source location
    pub fn new(file: PathBuf, line: usize, column: usize) -> Self {
        Self {
            file,
            line,
            column,
            end_line: None,
            end_column: None,
        }
    }

    /// Set the end position
    pub fn with_end(mut self, end_line: usize, end_column: usize) -> Self {
        self.end_line = Some(end_line);
        self.end_column = Some(end_column);
        self
    }
}

/// One interface implemented by a return type, with its declared member names
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterfaceDescriptor {
    pub name: String,
    pub members: Vec<String>,
}

impl InterfaceDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            members: Vec::new(),
        }
    }

    pub fn with_member(mut self, member: impl Into<String>) -> Self {
        self.members.push(member.into());
        self
    }
}

/// Resolved description of a callable's return type.
///
/// Carries just enough of the bound type to answer the classification
/// questions: the simple type name, the type's own member names, and the
/// member names of every interface it implements. Base-type chains are not
/// represented.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDescriptor {
    pub name: String,
    pub members: Vec<String>,
    pub interfaces: Vec<InterfaceDescriptor>,
}

impl TypeDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            members: Vec::new(),
            interfaces: Vec::new(),
        }
    }

    pub fn with_member(mut self, member: impl Into<String>) -> Self {
        self.members.push(member.into());
        self
    }

    pub fn with_interface(mut self, interface: InterfaceDescriptor) -> Self {
        self.interfaces.push(interface);
        self
    }
}

/// One fully-resolved method or property declaration handed in by the
/// front end.
///
/// All flags are computed by the front end before analysis: types bound,
/// attributes resolved, override and interface-implementation status known.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallableDeclaration {
    pub name: String,
    pub kind: CallableKind,
    /// Resolved return type; `None` when the front end could not bind it
    pub return_type: Option<TypeDescriptor>,
    /// Syntactically marked asynchronous (covers async-void forms)
    pub is_declared_async: bool,
    /// Overrides a base member; the name is fixed by the base signature
    pub is_override: bool,
    /// Name matches a member of an interface the containing type implements
    pub implements_interface_member: bool,
    /// Attribute type names attached to the declaration
    pub attributes: Vec<String>,
    /// Name is the program's designated entry point
    pub is_entry_point: bool,
    /// Declarations without a location still classify; they are just not
    /// reportable as located diagnostics
    pub location: Option<SourceLocation>,
}

impl CallableDeclaration {
    pub fn new(name: impl Into<String>, kind: CallableKind) -> Self {
        Self {
            name: name.into(),
            kind,
            return_type: None,
            is_declared_async: false,
            is_override: false,
            implements_interface_member: false,
            attributes: Vec::new(),
            is_entry_point: false,
            location: None,
        }
    }

    pub fn with_return_type(mut self, return_type: TypeDescriptor) -> Self {
        self.return_type = Some(return_type);
        self
    }

    pub fn declared_async(mut self) -> Self {
        self.is_declared_async = true;
        self
    }

    pub fn as_override(mut self) -> Self {
        self.is_override = true;
        self
    }

    pub fn implementing_interface_member(mut self) -> Self {
        self.implements_interface_member = true;
        self
    }

    pub fn with_attribute(mut self, attribute: impl Into<String>) -> Self {
        self.attributes.push(attribute.into());
        self
    }

    pub fn as_entry_point(mut self) -> Self {
        self.is_entry_point = true;
        self
    }

    pub fn at(mut self, location: SourceLocation) -> Self {
        self.location = Some(location);
        self
    }
}

/// The two mutually exclusive rule outcomes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ViolationKind {
    /// Asynchronous callable whose name lacks the suffix
    MissingSuffix,
    /// Non-asynchronous callable whose name carries the suffix
    UnnecessarySuffix,
}

/// A detected naming violation with its suggested correction.
///
/// Produced at most once per declaration per pass and consumed immediately
/// by the reporting or fix-offering collaborator; never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Violation {
    pub kind: ViolationKind,
    pub callable_kind: CallableKind,
    pub name: String,
    pub suggested_name: String,
    pub location: Option<SourceLocation>,
}

impl Violation {
    pub fn new(
        kind: ViolationKind,
        declaration: &CallableDeclaration,
        suggested_name: String,
    ) -> Self {
        Self {
            kind,
            callable_kind: declaration.kind,
            name: declaration.name.clone(),
            suggested_name,
            location: declaration.location.clone(),
        }
    }
}
