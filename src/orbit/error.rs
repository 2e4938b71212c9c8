//! Error types for the orbit engine.

use super::data::CelestialBodyId;

/// Identity of an [`OrbitError`] for log de-duplication.
pub type ErrorKey = (Option<CelestialBodyId>, std::mem::Discriminant<OrbitError>);

/// Per-body failure while computing a frame. Never fatal: the body keeps its
/// previous position and the rest of the frame proceeds.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum OrbitError {
    #[error("unknown body: {0}")]
    UnknownBody(String),

    #[error("{body} has eccentricity {eccentricity}, expected 0 <= e < 1")]
    InvalidEccentricity {
        body: CelestialBodyId,
        eccentricity: f64,
    },

    #[error("{body} produced a non-finite position")]
    NonFiniteResult { body: CelestialBodyId },

    #[error("{body} orbits {parent}, which has no position this frame")]
    MissingParent {
        body: CelestialBodyId,
        parent: CelestialBodyId,
    },
}

impl OrbitError {
    /// Body the error is about, when known.
    pub fn body(&self) -> Option<CelestialBodyId> {
        match self {
            OrbitError::UnknownBody(_) => None,
            OrbitError::InvalidEccentricity { body, .. }
            | OrbitError::NonFiniteResult { body }
            | OrbitError::MissingParent { body, .. } => Some(*body),
        }
    }

    /// Body and variant, ignoring payload values. Two reports of the same
    /// fault share a key even when the payload is NaN.
    pub fn log_key(&self) -> ErrorKey {
        (self.body(), std::mem::discriminant(self))
    }
}

/// Structural problem in a body registry.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("registry has no star")]
    NoStar,

    #[error("registry has more than one star ({0} and {1})")]
    MultipleStars(CelestialBodyId, CelestialBodyId),

    #[error("star {0} must have a zero orbital radius")]
    StarHasOrbit(CelestialBodyId),

    #[error("{0} is registered twice")]
    DuplicateBody(CelestialBodyId),

    #[error("{body} orbits {parent}, which is not registered")]
    ParentNotRegistered {
        body: CelestialBodyId,
        parent: CelestialBodyId,
    },

    #[error("{body} orbits {parent}, which is itself a moon")]
    ParentIsMoon {
        body: CelestialBodyId,
        parent: CelestialBodyId,
    },

    #[error("{body} is registered before its parent {parent}")]
    ParentAfterChild {
        body: CelestialBodyId,
        parent: CelestialBodyId,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_key_ignores_payload() {
        let nan = |body| OrbitError::InvalidEccentricity {
            body,
            eccentricity: f64::NAN,
        };
        let a = nan(CelestialBodyId::Earth);
        assert_ne!(a, a.clone());
        assert_eq!(a.log_key(), a.clone().log_key());
        assert_ne!(a.log_key(), nan(CelestialBodyId::Mars).log_key());

        let other_kind = OrbitError::NonFiniteResult {
            body: CelestialBodyId::Earth,
        };
        assert_ne!(a.log_key(), other_kind.log_key());
        assert_eq!(OrbitError::UnknownBody("Vulcan".into()).body(), None);
    }
}
