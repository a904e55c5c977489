//! Built-in solar system catalog.
//!
//! Distances and radii are in scene units and chosen for legibility, not scale.
//! Periods are real (years for orbits, days for rotation). Planet starting
//! angles come from J2000 mean longitudes (JPL approximate elements); moons use
//! fixed starting angles.

use super::catalog::{AngleSource, BodyDef, Catalog, CatalogError};
use super::epoch::MeanLongitude;
use crate::types::{CalendarAnchor, DAYS_PER_YEAR};

/// Name of the central star.
pub const SUN: &str = "Sun";

fn planet(
    name: &str,
    distance: f64,
    radius: f64,
    period_years: f64,
    rotation_days: f64,
    l0_deg: f64,
    rate_deg_per_year: f64,
) -> BodyDef {
    BodyDef::orbiting(
        name,
        distance,
        radius,
        period_years,
        rotation_days,
        AngleSource::MeanLongitude(MeanLongitude::new(l0_deg, rate_deg_per_year)),
    )
}

/// Tidally locked moon: rotation period equals orbital period.
fn moon(name: &str, distance: f64, radius: f64, period_days: f64, base_angle: f64) -> BodyDef {
    BodyDef::orbiting(
        name,
        distance,
        radius,
        period_days / DAYS_PER_YEAR,
        period_days,
        AngleSource::Fixed(base_angle),
    )
}

/// Definitions for the Sun, eight planets, Pluto and their major moons.
pub fn solar_system() -> Vec<BodyDef> {
    vec![
        BodyDef::root(SUN, 2.0, 25.38),
        planet("Mercury", 4.0, 0.15, 0.2408, 58.646, 252.25032350, 1494.7267411175),
        planet("Venus", 6.0, 0.3, 0.6152, -243.025, 181.97909950, 585.1781538729),
        planet("Earth", 8.5, 0.32, 1.0, 0.99727, 100.46457166, 359.9937244981)
            .with_children(vec![moon("Moon", 0.7, 0.09, 27.3217, 0.0)]),
        planet("Mars", 11.0, 0.2, 1.8808, 1.02596, -4.55343205, 191.4030268499).with_children(
            vec![
                moon("Phobos", 0.35, 0.03, 0.31891, 1.2),
                moon("Deimos", 0.5, 0.025, 1.26244, 4.1),
            ],
        ),
        planet("Jupiter", 16.0, 0.9, 11.862, 0.41354, 34.39644051, 30.3474612775)
            .with_children(vec![
                moon("Io", 1.3, 0.08, 1.769138, 0.0),
                moon("Europa", 1.6, 0.07, 3.551181, 1.6),
                moon("Ganymede", 2.0, 0.11, 7.154553, 3.2),
                moon("Callisto", 2.5, 0.1, 16.689018, 4.8),
            ]),
        planet("Saturn", 22.0, 0.75, 29.457, 0.44401, 49.95424423, 12.2249362201)
            .with_rings()
            .with_children(vec![
                moon("Enceladus", 1.8, 0.04, 1.370218, 2.5),
                moon("Titan", 2.4, 0.11, 15.945421, 0.8),
            ]),
        planet("Uranus", 27.0, 0.5, 84.011, -0.71833, 313.23810451, 4.2848202785)
            .with_rings()
            .with_children(vec![moon("Titania", 0.9, 0.05, 8.706234, 5.3)]),
        planet("Neptune", 31.0, 0.48, 164.79, 0.67125, -55.12002969, 2.1845945325),
        planet("Pluto", 35.0, 0.08, 247.94, -6.38723, 238.92903833, 1.4520780515)
            .with_children(vec![moon("Charon", 0.25, 0.04, 6.38723, 3.6)]),
    ]
}

/// Load the built-in catalog with base angles resolved for `anchor`.
pub fn load_solar_system(anchor: CalendarAnchor) -> Result<Catalog, CatalogError> {
    Catalog::load(&solar_system(), anchor)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        load_solar_system(CalendarAnchor::default()).expect("built-in catalog is valid")
    }

    #[test]
    fn test_builtin_catalog_loads() {
        let catalog = catalog();
        assert_eq!(catalog.len(), 21);
        assert_eq!(catalog.get(catalog.root()).unwrap().name, SUN);
    }

    #[test]
    fn test_sun_has_no_orbit() {
        let catalog = catalog();
        let sun = catalog.get(catalog.find(SUN).unwrap()).unwrap();
        assert!(sun.is_root());
        assert_eq!(sun.distance(), 0.0);
    }

    #[test]
    fn test_moon_parents() {
        let catalog = catalog();
        let parent_of = |name: &str| {
            let body = catalog.get(catalog.find(name).unwrap()).unwrap();
            catalog.get(body.parent.unwrap()).unwrap().name.clone()
        };
        assert_eq!(parent_of("Moon"), "Earth");
        assert_eq!(parent_of("Phobos"), "Mars");
        assert_eq!(parent_of("Ganymede"), "Jupiter");
        assert_eq!(parent_of("Titan"), "Saturn");
        assert_eq!(parent_of("Charon"), "Pluto");
        assert_eq!(parent_of("Earth"), SUN);
    }

    #[test]
    fn test_earth_is_reference_body() {
        let catalog = catalog();
        let earth = catalog.get(catalog.find("Earth").unwrap()).unwrap();
        let orbit = earth.orbit.unwrap();
        assert!((orbit.period_days() - 365.25).abs() < 0.001);
    }

    #[test]
    fn test_retrograde_rotators() {
        let catalog = catalog();
        for name in ["Venus", "Uranus", "Pluto"] {
            let body = catalog.get(catalog.find(name).unwrap()).unwrap();
            assert!(body.spin.is_retrograde(), "{} should rotate retrograde", name);
        }
        let earth = catalog.get(catalog.find("Earth").unwrap()).unwrap();
        assert!(!earth.spin.is_retrograde());
    }

    #[test]
    fn test_moons_clear_parent_surface() {
        let catalog = catalog();
        for body in catalog.bodies() {
            if let Some(parent) = body.parent.and_then(|p| catalog.get(p)) {
                assert!(
                    body.distance() > parent.radius + body.radius,
                    "{} intersects {}",
                    body.name,
                    parent.name
                );
            }
        }
    }

    #[test]
    fn test_planet_order_by_distance() {
        let catalog = catalog();
        let root = catalog.get(catalog.root()).unwrap();
        let distances: Vec<f64> = root
            .children
            .iter()
            .map(|&i| catalog.get(i).unwrap().distance())
            .collect();
        assert!(distances.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_ringed_planets() {
        let catalog = catalog();
        let ringed: Vec<_> = catalog
            .bodies()
            .iter()
            .filter(|b| b.has_rings)
            .map(|b| b.name.as_str())
            .collect();
        assert_eq!(ringed, ["Saturn", "Uranus"]);
    }
}
