//! Validated, flat table of every body in the scene.

use std::collections::HashMap;

use bevy::prelude::*;

use super::data::{BodyKind, CelestialBodyData, CelestialBodyId, all_bodies};
use super::error::{OrbitError, RegistryError};

/// Resource owning all body data in update order.
///
/// Invariants checked by [`Registry::new`]:
/// - exactly one star, with zero orbital radius;
/// - ids are unique;
/// - every moon's parent is registered earlier and is not a moon.
#[derive(Resource, Clone, Debug)]
pub struct Registry {
    bodies: Vec<CelestialBodyData>,
    index: HashMap<CelestialBodyId, usize>,
}

impl Default for Registry {
    /// The built-in solar system. Covered by `test_solar_system_is_valid`.
    fn default() -> Self {
        Self::solar_system()
    }
}

impl Registry {
    /// Build a registry, validating its structure.
    pub fn new(bodies: Vec<CelestialBodyData>) -> Result<Self, RegistryError> {
        let mut index = HashMap::with_capacity(bodies.len());
        let mut star: Option<CelestialBodyId> = None;

        for (i, body) in bodies.iter().enumerate() {
            if index.insert(body.id, i).is_some() {
                return Err(RegistryError::DuplicateBody(body.id));
            }

            match body.kind {
                BodyKind::Star => {
                    if let Some(existing) = star {
                        return Err(RegistryError::MultipleStars(existing, body.id));
                    }
                    if body.orbit_radius_mkm != 0.0 {
                        return Err(RegistryError::StarHasOrbit(body.id));
                    }
                    star = Some(body.id);
                }
                BodyKind::Planet => {}
                BodyKind::Moon { parent } => {
                    let Some(parent_pos) = bodies.iter().position(|b| b.id == parent) else {
                        return Err(RegistryError::ParentNotRegistered { body: body.id, parent });
                    };
                    if bodies[parent_pos].is_moon() {
                        return Err(RegistryError::ParentIsMoon { body: body.id, parent });
                    }
                    if parent_pos > i {
                        return Err(RegistryError::ParentAfterChild { body: body.id, parent });
                    }
                }
            }
        }

        if star.is_none() {
            return Err(RegistryError::NoStar);
        }

        Ok(Self { bodies, index })
    }

    /// The full solar system from [`all_bodies`].
    pub fn solar_system() -> Self {
        let bodies = all_bodies();
        let index = bodies.iter().enumerate().map(|(i, b)| (b.id, i)).collect();
        Self { bodies, index }
    }

    /// Bodies in update order.
    pub fn bodies(&self) -> &[CelestialBodyData] {
        &self.bodies
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn get(&self, id: CelestialBodyId) -> Option<&CelestialBodyData> {
        self.index.get(&id).map(|&i| &self.bodies[i])
    }

    /// Look a body up by id, failing with [`OrbitError::UnknownBody`].
    pub fn require(&self, id: CelestialBodyId) -> Result<&CelestialBodyData, OrbitError> {
        self.get(id)
            .ok_or_else(|| OrbitError::UnknownBody(id.name().to_string()))
    }

    /// Look a body up by display name (case-insensitive).
    pub fn find(&self, name: &str) -> Result<&CelestialBodyData, OrbitError> {
        let id: CelestialBodyId = name.parse()?;
        self.get(id)
            .ok_or_else(|| OrbitError::UnknownBody(name.to_string()))
    }

    /// Moons orbiting `parent`, in registry order.
    pub fn moons_of(&self, parent: CelestialBodyId) -> impl Iterator<Item = &CelestialBodyData> {
        self.bodies
            .iter()
            .filter(move |b| b.parent() == Some(parent))
    }

    pub fn has_moons(&self, id: CelestialBodyId) -> bool {
        self.moons_of(id).next().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orbit::data::get_body_data;
    use crate::test_utils::fixtures;

    #[test]
    fn test_solar_system_is_valid() {
        let built = Registry::new(all_bodies()).expect("built-in registry should validate");
        assert_eq!(built.len(), Registry::solar_system().len());
    }

    #[test]
    fn test_rejects_missing_star() {
        let bodies = vec![get_body_data(CelestialBodyId::Earth)];
        assert_eq!(Registry::new(bodies).unwrap_err(), RegistryError::NoStar);
    }

    #[test]
    fn test_rejects_duplicate() {
        let bodies = vec![
            get_body_data(CelestialBodyId::Sun),
            get_body_data(CelestialBodyId::Earth),
            get_body_data(CelestialBodyId::Earth),
        ];
        assert_eq!(
            Registry::new(bodies).unwrap_err(),
            RegistryError::DuplicateBody(CelestialBodyId::Earth)
        );
    }

    #[test]
    fn test_rejects_star_with_orbit() {
        let mut sun = get_body_data(CelestialBodyId::Sun);
        sun.orbit_radius_mkm = 1.0;
        assert_eq!(
            Registry::new(vec![sun]).unwrap_err(),
            RegistryError::StarHasOrbit(CelestialBodyId::Sun)
        );
    }

    #[test]
    fn test_rejects_second_star() {
        let mut fake = get_body_data(CelestialBodyId::Jupiter);
        fake.kind = BodyKind::Star;
        fake.orbit_radius_mkm = 0.0;
        let bodies = vec![get_body_data(CelestialBodyId::Sun), fake];
        assert_eq!(
            Registry::new(bodies).unwrap_err(),
            RegistryError::MultipleStars(CelestialBodyId::Sun, CelestialBodyId::Jupiter)
        );
    }

    #[test]
    fn test_rejects_orphan_moon() {
        let bodies = vec![
            get_body_data(CelestialBodyId::Sun),
            get_body_data(CelestialBodyId::Moon),
        ];
        assert_eq!(
            Registry::new(bodies).unwrap_err(),
            RegistryError::ParentNotRegistered {
                body: CelestialBodyId::Moon,
                parent: CelestialBodyId::Earth,
            }
        );
    }

    #[test]
    fn test_rejects_moon_before_parent() {
        let bodies = vec![
            get_body_data(CelestialBodyId::Sun),
            get_body_data(CelestialBodyId::Moon),
            get_body_data(CelestialBodyId::Earth),
        ];
        assert_eq!(
            Registry::new(bodies).unwrap_err(),
            RegistryError::ParentAfterChild {
                body: CelestialBodyId::Moon,
                parent: CelestialBodyId::Earth,
            }
        );
    }

    #[test]
    fn test_rejects_moon_of_moon() {
        let mut phobos = get_body_data(CelestialBodyId::Phobos);
        phobos.kind = BodyKind::Moon {
            parent: CelestialBodyId::Moon,
        };
        let bodies = vec![
            get_body_data(CelestialBodyId::Sun),
            get_body_data(CelestialBodyId::Earth),
            get_body_data(CelestialBodyId::Moon),
            phobos,
        ];
        assert_eq!(
            Registry::new(bodies).unwrap_err(),
            RegistryError::ParentIsMoon {
                body: CelestialBodyId::Phobos,
                parent: CelestialBodyId::Moon,
            }
        );
    }

    #[test]
    fn test_lookup_by_name_and_id() {
        let registry = fixtures::earth_system();
        assert_eq!(registry.find("moon").map(|b| b.id), Ok(CelestialBodyId::Moon));
        assert!(matches!(registry.find("Mars"), Err(OrbitError::UnknownBody(_))));
        assert!(registry.require(CelestialBodyId::Jupiter).is_err());
    }

    #[test]
    fn test_moons_of() {
        let registry = Registry::solar_system();
        let jovian: Vec<_> = registry
            .moons_of(CelestialBodyId::Jupiter)
            .map(|b| b.id)
            .collect();
        assert_eq!(
            jovian,
            vec![
                CelestialBodyId::Io,
                CelestialBodyId::Europa,
                CelestialBodyId::Ganymede,
                CelestialBodyId::Callisto,
            ]
        );
        assert!(registry.has_moons(CelestialBodyId::Earth));
        assert!(!registry.has_moons(CelestialBodyId::Venus));
    }
}
