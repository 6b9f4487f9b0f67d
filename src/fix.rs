//! Rename-fix boundary.
//!
//! The engine computes what to rename and to what; the project-wide
//! identifier substitution itself belongs to an external refactoring
//! engine behind the [`Renamer`] trait. A fix that fails (for example on
//! a name collision) is recorded and reported, never allowed to abort
//! the rest of the pass; the diagnostic for the violation stands either
//! way.

use crate::core::{CallableKind, SourceLocation, Violation};
use crate::errors::{AwaitlintError, AwaitlintResult};
use serde::{Deserialize, Serialize};

/// Descriptor handed to the external rename collaborator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenameFix {
    pub kind: CallableKind,
    pub current_name: String,
    pub new_name: String,
    pub location: Option<SourceLocation>,
}

impl RenameFix {
    pub fn from_violation(violation: &Violation) -> Self {
        Self {
            kind: violation.callable_kind,
            current_name: violation.name.clone(),
            new_name: violation.suggested_name.clone(),
            location: violation.location.clone(),
        }
    }

    /// User-facing action title
    pub fn title(&self) -> String {
        format!("Rename '{}' to '{}'", self.current_name, self.new_name)
    }
}

/// External refactoring engine seam.
///
/// Implementations update the declaration and all its references
/// consistently, and fail when the new name collides with an existing
/// member.
pub trait Renamer {
    fn rename(&mut self, fix: &RenameFix) -> AwaitlintResult<()>;
}

/// Result of attempting one fix
#[derive(Debug)]
pub struct FixOutcome {
    pub fix: RenameFix,
    pub error: Option<AwaitlintError>,
}

impl FixOutcome {
    pub fn applied(&self) -> bool {
        self.error.is_none()
    }
}

/// Apply each fix, collecting per-fix outcomes without aborting
pub fn apply_fixes(renamer: &mut dyn Renamer, fixes: &[RenameFix]) -> Vec<FixOutcome> {
    fixes
        .iter()
        .map(|fix| {
            let result = renamer.rename(fix);
            if let Err(error) = &result {
                log::warn!("fix '{}' failed: {}", fix.title(), error);
            }
            FixOutcome {
                fix: fix.clone(),
                error: result.err(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CallableDeclaration, Violation, ViolationKind};

    struct CollidingRenamer {
        taken: Vec<String>,
        applied: Vec<String>,
    }

    impl Renamer for CollidingRenamer {
        fn rename(&mut self, fix: &RenameFix) -> AwaitlintResult<()> {
            if self.taken.contains(&fix.new_name) {
                return Err(AwaitlintError::NameCollision {
                    current: fix.current_name.clone(),
                    requested: fix.new_name.clone(),
                });
            }
            self.applied.push(fix.new_name.clone());
            Ok(())
        }
    }

    fn fix_for(name: &str, suggested: &str) -> RenameFix {
        let decl = CallableDeclaration::new(name, CallableKind::Method);
        RenameFix::from_violation(&Violation::new(
            ViolationKind::MissingSuffix,
            &decl,
            suggested.to_string(),
        ))
    }

    #[test]
    fn test_title_names_both_identifiers() {
        let fix = fix_for("Download", "DownloadAsync");
        assert_eq!(fix.title(), "Rename 'Download' to 'DownloadAsync'");
    }

    #[test]
    fn test_collision_does_not_abort_remaining_fixes() {
        let mut renamer = CollidingRenamer {
            taken: vec!["FetchAsync".to_string()],
            applied: Vec::new(),
        };
        let fixes = vec![
            fix_for("Fetch", "FetchAsync"),
            fix_for("Download", "DownloadAsync"),
        ];
        let outcomes = apply_fixes(&mut renamer, &fixes);
        assert_eq!(outcomes.len(), 2);
        assert!(!outcomes[0].applied());
        assert!(outcomes[1].applied());
        assert_eq!(renamer.applied, vec!["DownloadAsync".to_string()]);
    }
}
