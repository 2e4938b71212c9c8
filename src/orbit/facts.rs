//! Descriptive facts for the info panel.

use super::data::CelestialBodyId;

/// Text shown alongside a body's physical data.
#[derive(Clone, Debug)]
pub struct BodyFacts {
    pub description: &'static str,
    /// Label/value pairs in display order
    pub facts: &'static [(&'static str, &'static str)],
    /// Known moons in reality, which may exceed those drawn in the scene
    pub known_moons: Option<u32>,
    /// Surface gravity in Earth g's
    pub surface_gravity_g: f64,
    pub fun_fact: &'static str,
}

/// Get facts for a celestial body.
pub fn get_facts(id: CelestialBodyId) -> BodyFacts {
    use CelestialBodyId as B;

    match id {
        B::Sun => BodyFacts {
            description: "The star at the center of the solar system, a nearly perfect sphere of hot plasma.",
            facts: &[
                ("Mass", "1.989 × 10^30 kg"),
                ("Surface temperature", "5,500 °C"),
                ("Core temperature", "15,000,000 °C"),
                ("Age", "~4.6 billion years"),
                ("Spectral class", "G2V"),
                ("Luminosity", "3.828 × 10^26 W"),
            ],
            known_moons: None,
            surface_gravity_g: 28.0,
            fun_fact: "Contains 99.86% of the solar system's mass",
        },
        B::Mercury => BodyFacts {
            description: "The smallest and innermost planet, with extreme temperature swings.",
            facts: &[
                ("Mass", "3.301 × 10^23 kg"),
                ("Surface temperature", "-173 to 427 °C"),
                ("Escape velocity", "4.3 km/s"),
            ],
            known_moons: Some(0),
            surface_gravity_g: 0.38,
            fun_fact: "A solar day lasts two Mercury years",
        },
        B::Venus => BodyFacts {
            description: "The second planet, wrapped in a thick toxic atmosphere with a runaway greenhouse effect.",
            facts: &[
                ("Mass", "4.868 × 10^24 kg"),
                ("Surface temperature", "462 °C"),
                ("Escape velocity", "10.36 km/s"),
                ("Atmosphere", "96.5% CO₂, 3.5% N₂"),
            ],
            known_moons: Some(0),
            surface_gravity_g: 0.91,
            fun_fact: "Rotates backwards, slower than it orbits",
        },
        B::Earth => BodyFacts {
            description: "The third planet and the only world known to harbor life.",
            facts: &[
                ("Mass", "5.972 × 10^24 kg"),
                ("Surface temperature", "-88 to 58 °C"),
                ("Escape velocity", "11.2 km/s"),
                ("Atmosphere", "78% N₂, 21% O₂"),
            ],
            known_moons: Some(1),
            surface_gravity_g: 1.0,
            fun_fact: "Only known body with life",
        },
        B::Mars => BodyFacts {
            description: "The fourth planet, called the Red Planet for its iron-oxide dust.",
            facts: &[
                ("Mass", "6.417 × 10^23 kg"),
                ("Surface temperature", "-87 to -5 °C"),
                ("Escape velocity", "5.0 km/s"),
                ("Atmosphere", "95.3% CO₂, 2.7% N₂"),
            ],
            known_moons: Some(2),
            surface_gravity_g: 0.38,
            fun_fact: "Home to Olympus Mons, the tallest volcano known",
        },
        B::Jupiter => BodyFacts {
            description: "The largest planet, a gas giant with more than twice the mass of all other planets combined.",
            facts: &[
                ("Mass", "1.898 × 10^27 kg"),
                ("Cloud-top temperature", "-108 °C"),
                ("Escape velocity", "59.5 km/s"),
                ("Atmosphere", "89% H₂, 10% He"),
            ],
            known_moons: Some(95),
            surface_gravity_g: 2.53,
            fun_fact: "The Great Red Spot is a storm wider than Earth",
        },
        B::Saturn => BodyFacts {
            description: "The second-largest planet, known for its extensive ring system.",
            facts: &[
                ("Mass", "5.683 × 10^26 kg"),
                ("Cloud-top temperature", "-139 °C"),
                ("Escape velocity", "35.5 km/s"),
                ("Ring span", "7,000 to 80,000 km above the clouds"),
            ],
            known_moons: Some(146),
            surface_gravity_g: 1.07,
            fun_fact: "Less dense than water",
        },
        B::Uranus => BodyFacts {
            description: "The seventh planet, an ice giant that rotates on its side.",
            facts: &[
                ("Mass", "8.681 × 10^25 kg"),
                ("Cloud-top temperature", "-195 °C"),
                ("Escape velocity", "21.3 km/s"),
                ("Atmosphere", "83% H₂, 15% He, 2% CH₄"),
            ],
            known_moons: Some(28),
            surface_gravity_g: 0.89,
            fun_fact: "Each pole gets 42 years of continuous sunlight",
        },
        B::Neptune => BodyFacts {
            description: "The eighth and farthest planet, the densest of the giant planets.",
            facts: &[
                ("Mass", "1.024 × 10^26 kg"),
                ("Cloud-top temperature", "-201 °C"),
                ("Escape velocity", "23.5 km/s"),
                ("Atmosphere", "80% H₂, 19% He, 1% CH₄"),
            ],
            known_moons: Some(16),
            surface_gravity_g: 1.14,
            fun_fact: "Has the fastest winds in the solar system",
        },
        B::Moon => BodyFacts {
            description: "Earth's only natural satellite and the fifth-largest moon in the solar system.",
            facts: &[
                ("Mass", "7.342 × 10^22 kg"),
                ("Surface temperature", "-173 to 127 °C"),
                ("Distance from Earth", "384,400 km"),
                ("Inclination", "5.14° to the ecliptic"),
            ],
            known_moons: None,
            surface_gravity_g: 0.17,
            fun_fact: "Drifts 3.8 cm farther from Earth every year",
        },
        B::Phobos => BodyFacts {
            description: "The larger and closer of Mars' two moons, orbiting just 6,000 km above the surface.",
            facts: &[
                ("Mass", "1.066 × 10^16 kg"),
                ("Dimensions", "27 × 22 × 18 km"),
                ("Distance from Mars", "9,376 km"),
            ],
            known_moons: None,
            surface_gravity_g: 0.0006,
            fun_fact: "Spiraling inward and will break up within 50 million years",
        },
        B::Deimos => BodyFacts {
            description: "The smaller and farther of Mars' two moons.",
            facts: &[
                ("Mass", "1.476 × 10^15 kg"),
                ("Dimensions", "15 × 12 × 11 km"),
                ("Distance from Mars", "23,463 km"),
            ],
            known_moons: None,
            surface_gravity_g: 0.0003,
            fun_fact: "Escape velocity is about 5.6 m/s",
        },
        B::Io => BodyFacts {
            description: "The innermost Galilean moon of Jupiter, kneaded by tides into constant eruption.",
            facts: &[
                ("Mass", "8.932 × 10^22 kg"),
                ("Distance from Jupiter", "421,700 km"),
            ],
            known_moons: None,
            surface_gravity_g: 0.18,
            fun_fact: "The most volcanically active body known",
        },
        B::Europa => BodyFacts {
            description: "An icy Galilean moon hiding a global saltwater ocean beneath its crust.",
            facts: &[
                ("Mass", "4.800 × 10^22 kg"),
                ("Distance from Jupiter", "671,100 km"),
            ],
            known_moons: None,
            surface_gravity_g: 0.13,
            fun_fact: "Likely holds more water than all of Earth's oceans",
        },
        B::Ganymede => BodyFacts {
            description: "The largest moon in the solar system, bigger than the planet Mercury.",
            facts: &[
                ("Mass", "1.482 × 10^23 kg"),
                ("Distance from Jupiter", "1,070,400 km"),
            ],
            known_moons: None,
            surface_gravity_g: 0.15,
            fun_fact: "The only moon with its own magnetic field",
        },
        B::Callisto => BodyFacts {
            description: "The outermost Galilean moon, an ancient, heavily cratered world.",
            facts: &[
                ("Mass", "1.076 × 10^23 kg"),
                ("Distance from Jupiter", "1,882,700 km"),
            ],
            known_moons: None,
            surface_gravity_g: 0.13,
            fun_fact: "The most heavily cratered surface known",
        },
        B::Titan => BodyFacts {
            description: "Saturn's largest moon, with a dense nitrogen atmosphere and methane lakes.",
            facts: &[
                ("Mass", "1.345 × 10^23 kg"),
                ("Distance from Saturn", "1,221,900 km"),
                ("Atmosphere", "95% N₂, 5% CH₄"),
            ],
            known_moons: None,
            surface_gravity_g: 0.14,
            fun_fact: "The only moon with a thick atmosphere",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_body_has_facts() {
        for &id in CelestialBodyId::ALL {
            let facts = get_facts(id);
            assert!(!facts.description.is_empty(), "{id} has no description");
            assert!(!facts.facts.is_empty(), "{id} has no facts");
            assert!(facts.surface_gravity_g > 0.0);
        }
    }

    #[test]
    fn test_moons_have_no_moon_count() {
        assert_eq!(get_facts(CelestialBodyId::Titan).known_moons, None);
        assert_eq!(get_facts(CelestialBodyId::Earth).known_moons, Some(1));
    }
}
