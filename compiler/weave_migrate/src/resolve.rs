//! Identity resolution against a container's existing methods.

use weave_ir::{LogLevel, TargetContainer, TypeRef};

use crate::MigrationError;

/// The method a legacy call wants, before it has a final name.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Candidate {
    /// Derived from the template; the final name may carry a suffix.
    pub base_name: String,
    /// Logger first, then the optional level and exception, then the
    /// template arguments.
    pub param_types: Vec<TypeRef>,
    pub level: Option<LogLevel>,
    pub template: String,
}

/// Outcome of [`resolve`].
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Resolution {
    pub name: String,
    /// An identical method already exists and is reused as is.
    pub reused: bool,
    /// The reused method's id, or a freshly allocated one.
    pub event_id: i32,
}

/// Find or name the method for `candidate` in `container`.
///
/// Names are tried in the order `Base`, `Base2`, `Base3`, ... The first
/// name whose existing methods include one of the same shape is reused.
/// The first name with no methods at all is minted with the next free
/// event id. A name taken only by methods of another shape is skipped.
///
/// Minting fails with [`MigrationError::EventIdsExhausted`] once the
/// container already uses `i32::MAX`; reuse still succeeds.
pub fn resolve(
    candidate: &Candidate,
    container: &TargetContainer,
    first_event_id: i32,
) -> Result<Resolution, MigrationError> {
    let mut suffix = 1u32;
    loop {
        let name = if suffix == 1 {
            candidate.base_name.clone()
        } else {
            format!("{}{suffix}", candidate.base_name)
        };

        let (taken, matching) = {
            let mut existing = container.find_by_name(&name).peekable();
            let taken = existing.peek().is_some();
            let matching = existing
                .find(|m| m.same_shape(&candidate.param_types, candidate.level, &candidate.template))
                .map(|m| m.event_id);
            (taken, matching)
        };

        if let Some(event_id) = matching {
            tracing::trace!(%name, event_id, "reusing existing method");
            return Ok(Resolution {
                name,
                reused: true,
                event_id,
            });
        }

        if !taken {
            let event_id = container
                .next_event_id(first_event_id)
                .ok_or_else(|| MigrationError::EventIdsExhausted {
                    container: container.name.clone(),
                })?;
            tracing::trace!(%name, event_id, "minting new method");
            return Ok(Resolution {
                name,
                reused: false,
                event_id,
            });
        }
        suffix += 1;
    }
}
