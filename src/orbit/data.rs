//! Physical and orbital data for solar system bodies.
//! Values are rounded NASA fact-sheet figures; orbital phases are mean
//! longitudes at J2000.

use std::fmt;
use std::str::FromStr;

use super::error::OrbitError;

/// Identifier for celestial bodies in the simulation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CelestialBodyId {
    Sun,
    Mercury,
    Venus,
    Earth,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    // Moons
    Moon,
    Phobos,
    Deimos,
    Io,
    Europa,
    Ganymede,
    Callisto,
    Titan,
}

impl CelestialBodyId {
    /// Every body, in registry order (Sun, planets outward, then moons).
    pub const ALL: &'static [CelestialBodyId] = &[
        CelestialBodyId::Sun,
        CelestialBodyId::Mercury,
        CelestialBodyId::Venus,
        CelestialBodyId::Earth,
        CelestialBodyId::Mars,
        CelestialBodyId::Jupiter,
        CelestialBodyId::Saturn,
        CelestialBodyId::Uranus,
        CelestialBodyId::Neptune,
        CelestialBodyId::Moon,
        CelestialBodyId::Phobos,
        CelestialBodyId::Deimos,
        CelestialBodyId::Io,
        CelestialBodyId::Europa,
        CelestialBodyId::Ganymede,
        CelestialBodyId::Callisto,
        CelestialBodyId::Titan,
    ];

    /// Human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            CelestialBodyId::Sun => "Sun",
            CelestialBodyId::Mercury => "Mercury",
            CelestialBodyId::Venus => "Venus",
            CelestialBodyId::Earth => "Earth",
            CelestialBodyId::Mars => "Mars",
            CelestialBodyId::Jupiter => "Jupiter",
            CelestialBodyId::Saturn => "Saturn",
            CelestialBodyId::Uranus => "Uranus",
            CelestialBodyId::Neptune => "Neptune",
            CelestialBodyId::Moon => "Moon",
            CelestialBodyId::Phobos => "Phobos",
            CelestialBodyId::Deimos => "Deimos",
            CelestialBodyId::Io => "Io",
            CelestialBodyId::Europa => "Europa",
            CelestialBodyId::Ganymede => "Ganymede",
            CelestialBodyId::Callisto => "Callisto",
            CelestialBodyId::Titan => "Titan",
        }
    }
}

impl fmt::Display for CelestialBodyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CelestialBodyId {
    type Err = OrbitError;

    /// Case-insensitive lookup by display name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        CelestialBodyId::ALL
            .iter()
            .copied()
            .find(|id| id.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| OrbitError::UnknownBody(s.to_string()))
    }
}

/// Structural role of a body in the hierarchy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BodyKind {
    /// The single central body, fixed at the origin.
    Star,
    /// Orbits the star.
    Planet,
    /// Orbits a planet. The parent is a relation only; the registry owns both.
    Moon { parent: CelestialBodyId },
}

/// Ring system, sized relative to the owner's scene radius.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RingSpec {
    pub inner_factor: f32,
    pub outer_factor: f32,
    pub texture: &'static str,
}

/// Translucent atmosphere shell drawn around the body.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AtmosphereSpec {
    /// Shell radius relative to the body's scene radius.
    pub scale: f32,
    /// sRGB tint.
    pub tint: [f32; 3],
    pub opacity: f32,
}

/// Optional visual features of a body. Moons are derived from the registry.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Capabilities {
    pub rings: Option<RingSpec>,
    pub atmosphere: Option<AtmosphereSpec>,
}

/// Static data for a celestial body.
#[derive(Clone, Debug, PartialEq)]
pub struct CelestialBodyData {
    pub id: CelestialBodyId,
    pub kind: BodyKind,
    /// Texture path relative to `assets/`
    pub texture: &'static str,
    /// Mean diameter in km
    pub diameter_km: f64,
    /// Semi-major axis in million km (parent-relative for moons, 0 for the Sun)
    pub orbit_radius_mkm: f64,
    pub eccentricity: f64,
    /// Orbital period in days (0 for the Sun)
    pub orbital_period_days: f64,
    /// Sidereal rotation period in hours, negative when retrograde
    pub rotation_period_hours: f64,
    pub axial_tilt_deg: f64,
    /// Orbital longitude at J2000 in degrees
    pub orbit_phase_deg: f64,
    pub capabilities: Capabilities,
}

impl CelestialBodyData {
    /// Parent body, for moons.
    pub fn parent(&self) -> Option<CelestialBodyId> {
        match self.kind {
            BodyKind::Moon { parent } => Some(parent),
            BodyKind::Star | BodyKind::Planet => None,
        }
    }

    pub fn is_moon(&self) -> bool {
        matches!(self.kind, BodyKind::Moon { .. })
    }

    pub fn has_rings(&self) -> bool {
        self.capabilities.rings.is_some()
    }

    pub fn has_atmosphere(&self) -> bool {
        self.capabilities.atmosphere.is_some()
    }

    pub fn is_retrograde(&self) -> bool {
        self.rotation_period_hours < 0.0
    }
}

const SATURN_RINGS: RingSpec = RingSpec {
    inner_factor: 1.3,
    outer_factor: 2.2,
    texture: "textures/saturn_ring.png",
};

fn atmosphere(tint: [f32; 3], opacity: f32) -> Option<AtmosphereSpec> {
    Some(AtmosphereSpec {
        scale: 1.08,
        tint,
        opacity,
    })
}

fn planet(
    id: CelestialBodyId,
    texture: &'static str,
    diameter_km: f64,
    orbit_radius_mkm: f64,
    eccentricity: f64,
    orbital_period_days: f64,
    rotation_period_hours: f64,
    axial_tilt_deg: f64,
    orbit_phase_deg: f64,
) -> CelestialBodyData {
    CelestialBodyData {
        id,
        kind: BodyKind::Planet,
        texture,
        diameter_km,
        orbit_radius_mkm,
        eccentricity,
        orbital_period_days,
        rotation_period_hours,
        axial_tilt_deg,
        orbit_phase_deg,
        capabilities: Capabilities::default(),
    }
}

fn moon(
    id: CelestialBodyId,
    parent: CelestialBodyId,
    texture: &'static str,
    diameter_km: f64,
    orbit_radius_mkm: f64,
    eccentricity: f64,
    orbital_period_days: f64,
    rotation_period_hours: f64,
    orbit_phase_deg: f64,
) -> CelestialBodyData {
    CelestialBodyData {
        id,
        kind: BodyKind::Moon { parent },
        texture,
        diameter_km,
        orbit_radius_mkm,
        eccentricity,
        orbital_period_days,
        rotation_period_hours,
        axial_tilt_deg: 0.0,
        orbit_phase_deg,
        capabilities: Capabilities::default(),
    }
}

/// Get orbital and physical data for a celestial body.
pub fn get_body_data(id: CelestialBodyId) -> CelestialBodyData {
    use CelestialBodyId as B;

    match id {
        B::Sun => CelestialBodyData {
            id,
            kind: BodyKind::Star,
            texture: "textures/sun.jpg",
            diameter_km: 1_392_000.0,
            orbit_radius_mkm: 0.0,
            eccentricity: 0.0,
            orbital_period_days: 0.0,
            rotation_period_hours: 609.6,
            axial_tilt_deg: 7.25,
            orbit_phase_deg: 0.0,
            capabilities: Capabilities::default(),
        },

        // Planets (heliocentric)
        B::Mercury => planet(id, "textures/mercury.jpg", 4879.0, 57.9, 0.2056, 88.0, 1407.6, 0.034, 252.25),
        B::Venus => CelestialBodyData {
            capabilities: Capabilities {
                rings: None,
                atmosphere: atmosphere([0.95, 0.85, 0.6], 0.35),
            },
            ..planet(id, "textures/venus.jpg", 12104.0, 108.2, 0.0068, 224.7, -5832.5, 177.4, 181.98)
        },
        B::Earth => CelestialBodyData {
            capabilities: Capabilities {
                rings: None,
                atmosphere: atmosphere([0.45, 0.7, 1.0], 0.25),
            },
            ..planet(id, "textures/earth.jpg", 12756.0, 149.6, 0.0167, 365.2, 23.9, 23.4, 100.46)
        },
        B::Mars => CelestialBodyData {
            capabilities: Capabilities {
                rings: None,
                atmosphere: atmosphere([0.9, 0.55, 0.4], 0.12),
            },
            ..planet(id, "textures/mars.jpg", 6792.0, 227.9, 0.0934, 687.0, 24.6, 25.2, 355.45)
        },
        B::Jupiter => planet(id, "textures/jupiter.jpg", 142_984.0, 778.6, 0.0489, 4331.0, 9.9, 3.1, 34.40),
        B::Saturn => CelestialBodyData {
            capabilities: Capabilities {
                rings: Some(SATURN_RINGS),
                atmosphere: None,
            },
            ..planet(id, "textures/saturn.jpg", 120_536.0, 1433.5, 0.0565, 10_747.0, 10.7, 26.7, 49.94)
        },
        B::Uranus => planet(id, "textures/uranus.jpg", 51_118.0, 2872.5, 0.0457, 30_589.0, -17.2, 97.8, 313.23),
        B::Neptune => planet(id, "textures/neptune.jpg", 49_528.0, 4495.1, 0.0113, 59_800.0, 16.1, 28.3, 304.88),

        // Moons (parent-relative, synchronous rotation)
        B::Moon => moon(id, B::Earth, "textures/moon.jpg", 3475.0, 0.384, 0.0549, 27.3, 655.7, 218.32),
        B::Phobos => moon(id, B::Mars, "textures/phobos.jpg", 22.2, 0.0094, 0.0151, 0.3189, 7.66, 35.06),
        B::Deimos => moon(id, B::Mars, "textures/deimos.jpg", 12.6, 0.0235, 0.0003, 1.263, 30.3, 79.41),
        B::Io => moon(id, B::Jupiter, "textures/io.jpg", 3643.0, 0.4217, 0.0041, 1.769, 42.5, 342.02),
        B::Europa => moon(id, B::Jupiter, "textures/europa.jpg", 3122.0, 0.6711, 0.009, 3.551, 85.2, 171.02),
        B::Ganymede => moon(id, B::Jupiter, "textures/ganymede.jpg", 5268.0, 1.0704, 0.0013, 7.155, 171.7, 317.54),
        B::Callisto => moon(id, B::Jupiter, "textures/callisto.jpg", 4821.0, 1.8827, 0.0074, 16.689, 400.5, 181.41),
        B::Titan => CelestialBodyData {
            capabilities: Capabilities {
                rings: None,
                atmosphere: atmosphere([0.9, 0.65, 0.3], 0.4),
            },
            ..moon(id, B::Saturn, "textures/titan.jpg", 5150.0, 1.2219, 0.0288, 15.945, 382.7, 163.31)
        },
    }
}

/// Get all celestial bodies in registry order.
pub fn all_bodies() -> Vec<CelestialBodyData> {
    CelestialBodyId::ALL.iter().map(|&id| get_body_data(id)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_bodies_have_data() {
        // Sun + 8 planets + 8 moons
        assert_eq!(all_bodies().len(), 17);
    }

    #[test]
    fn test_sun_is_the_only_star() {
        let stars: Vec<_> = all_bodies()
            .into_iter()
            .filter(|b| b.kind == BodyKind::Star)
            .collect();
        assert_eq!(stars.len(), 1);
        assert_eq!(stars[0].id, CelestialBodyId::Sun);
        assert_eq!(stars[0].orbit_radius_mkm, 0.0);
    }

    #[test]
    fn test_moon_parents() {
        assert_eq!(get_body_data(CelestialBodyId::Moon).parent(), Some(CelestialBodyId::Earth));
        assert_eq!(get_body_data(CelestialBodyId::Phobos).parent(), Some(CelestialBodyId::Mars));
        assert_eq!(get_body_data(CelestialBodyId::Io).parent(), Some(CelestialBodyId::Jupiter));
        assert_eq!(get_body_data(CelestialBodyId::Titan).parent(), Some(CelestialBodyId::Saturn));
        assert_eq!(get_body_data(CelestialBodyId::Earth).parent(), None);
    }

    #[test]
    fn test_retrograde_rotators() {
        assert!(get_body_data(CelestialBodyId::Venus).is_retrograde());
        assert!(get_body_data(CelestialBodyId::Uranus).is_retrograde());
        assert!(!get_body_data(CelestialBodyId::Earth).is_retrograde());
    }

    #[test]
    fn test_only_saturn_has_rings() {
        let ringed: Vec<_> = all_bodies().into_iter().filter(|b| b.has_rings()).collect();
        assert_eq!(ringed.len(), 1);
        assert_eq!(ringed[0].id, CelestialBodyId::Saturn);
    }

    #[test]
    fn test_name_lookup() {
        assert_eq!("earth".parse::<CelestialBodyId>().ok(), Some(CelestialBodyId::Earth));
        assert_eq!(" Io ".parse::<CelestialBodyId>().ok(), Some(CelestialBodyId::Io));
        assert!(matches!(
            "Pluto".parse::<CelestialBodyId>(),
            Err(OrbitError::UnknownBody(name)) if name == "Pluto"
        ));
    }

    #[test]
    fn test_eccentricities_are_elliptical() {
        for body in all_bodies() {
            assert!(
                (0.0..1.0).contains(&body.eccentricity),
                "{} has eccentricity {}",
                body.id,
                body.eccentricity
            );
        }
    }
}
