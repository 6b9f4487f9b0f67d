//! Awaitability classification for callable declarations.
//!
//! A callable is asynchronous in the semantic sense when it is declared
//! with the async modifier, when its return type exposes an
//! awaiter-producing member (directly or through an implemented
//! interface), or when its return type is the async-stream marker. The
//! check generalizes beyond any single concrete future type to custom
//! awaitables.

use crate::core::{CallableDeclaration, TypeDescriptor};

/// Member name that makes a type awaitable by convention
pub const AWAITER_MEMBER: &str = "GetAwaiter";

/// Simple name of the asynchronous-sequence marker type
pub const ASYNC_STREAM_MARKER: &str = "IAsyncEnumerable";

/// Decide whether a declaration is semantically asynchronous.
///
/// Pure function of its input; an unresolvable return type is treated
/// conservatively as not awaitable.
///
/// Known limitation: the return type's base-type chain is not walked. A
/// type that only inherits its awaiter from a base class, without
/// re-exposing the member or an interface carrying it, is not detected.
pub fn is_awaitable(declaration: &CallableDeclaration) -> bool {
    // Declared-async covers async-void forms with no inspectable awaiter
    if declaration.is_declared_async {
        return true;
    }

    match &declaration.return_type {
        Some(return_type) => {
            exposes_awaiter(return_type) || return_type.name == ASYNC_STREAM_MARKER
        }
        None => {
            log::debug!(
                "unresolved return type for '{}', treating as not awaitable",
                declaration.name
            );
            false
        }
    }
}

/// Check the type's own members and every implemented interface's members
/// for the awaiter member name.
fn exposes_awaiter(return_type: &TypeDescriptor) -> bool {
    return_type.members.iter().any(|m| m == AWAITER_MEMBER)
        || return_type
            .interfaces
            .iter()
            .any(|i| i.members.iter().any(|m| m == AWAITER_MEMBER))
}
