//! Body catalog: nested static definitions flattened into an immutable arena.
//!
//! Definitions are written as a tree (star → planets → moons). Loading validates
//! every constant, resolves base angles once against the calendar anchor, and
//! stores bodies in pre-order with parent indices, so a parent always precedes
//! its children.

use super::epoch::MeanLongitude;
use super::orbit::{CircularOrbit, SpinModel};
use crate::types::CalendarAnchor;

/// Errors produced while loading a body catalog.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    #[error("body has an empty name")]
    EmptyName,

    #[error("duplicate body name: {0}")]
    DuplicateName(String),

    #[error("{body}: {field} is not finite")]
    NonFinite { body: String, field: &'static str },

    #[error("{body}: orbital period must be positive (got {value} years)")]
    NonPositivePeriod { body: String, value: f64 },

    #[error("{body}: radius must be positive (got {value})")]
    NonPositiveRadius { body: String, value: f64 },

    #[error("{body}: distance from parent must be positive (got {value})")]
    NonPositiveDistance { body: String, value: f64 },

    #[error("{body}: rotation period must be non-zero")]
    ZeroRotationPeriod { body: String },

    #[error("catalog has no root body")]
    MissingRoot,

    #[error("catalog has more than one root body ({first} and {second})")]
    MultipleRoots { first: String, second: String },
}

/// How a body's starting orbital angle is obtained.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AngleSource {
    /// Derived from published J2000 mean-longitude constants.
    MeanLongitude(MeanLongitude),
    /// Designer-supplied angle in radians.
    Fixed(f64),
}

impl AngleSource {
    fn resolve(&self, anchor: CalendarAnchor) -> f64 {
        match self {
            AngleSource::MeanLongitude(ml) => ml.base_angle(anchor),
            AngleSource::Fixed(angle) => *angle,
        }
    }
}

/// Static definition of a body and its satellites.
#[derive(Clone, Debug)]
pub struct BodyDef {
    pub name: String,
    /// Distance from parent in scene units (0 only for the root star)
    pub distance: f64,
    /// Render radius in scene units
    pub radius: f64,
    /// Orbital period in years (ignored for the root)
    pub period_years: f64,
    /// Rotation period in days, negative for retrograde
    pub rotation_days: f64,
    pub angle: AngleSource,
    pub has_rings: bool,
    pub children: Vec<BodyDef>,
}

impl BodyDef {
    /// Definition for the central star.
    pub fn root(name: &str, radius: f64, rotation_days: f64) -> Self {
        Self {
            name: name.to_string(),
            distance: 0.0,
            radius,
            period_years: 0.0,
            rotation_days,
            angle: AngleSource::Fixed(0.0),
            has_rings: false,
            children: Vec::new(),
        }
    }

    /// Definition for an orbiting body.
    pub fn orbiting(
        name: &str,
        distance: f64,
        radius: f64,
        period_years: f64,
        rotation_days: f64,
        angle: AngleSource,
    ) -> Self {
        Self {
            name: name.to_string(),
            distance,
            radius,
            period_years,
            rotation_days,
            angle,
            has_rings: false,
            children: Vec::new(),
        }
    }

    pub fn with_rings(mut self) -> Self {
        self.has_rings = true;
        self
    }

    pub fn with_children(mut self, children: Vec<BodyDef>) -> Self {
        self.children = children;
        self
    }

    fn validate(&self, is_root: bool) -> Result<(), CatalogError> {
        if self.name.trim().is_empty() {
            return Err(CatalogError::EmptyName);
        }

        let non_finite = |field: &'static str| CatalogError::NonFinite {
            body: self.name.clone(),
            field,
        };
        if !self.distance.is_finite() {
            return Err(non_finite("distance"));
        }
        if !self.radius.is_finite() {
            return Err(non_finite("radius"));
        }
        if !self.period_years.is_finite() {
            return Err(non_finite("orbital period"));
        }
        if !self.rotation_days.is_finite() {
            return Err(non_finite("rotation period"));
        }
        match self.angle {
            AngleSource::Fixed(a) if !a.is_finite() => return Err(non_finite("base angle")),
            AngleSource::MeanLongitude(ml)
                if !ml.l0_deg.is_finite() || !ml.rate_deg_per_year.is_finite() =>
            {
                return Err(non_finite("mean longitude"));
            }
            _ => {}
        }

        if self.radius <= 0.0 {
            return Err(CatalogError::NonPositiveRadius {
                body: self.name.clone(),
                value: self.radius,
            });
        }
        if self.rotation_days == 0.0 {
            return Err(CatalogError::ZeroRotationPeriod {
                body: self.name.clone(),
            });
        }

        if !is_root {
            if self.distance <= 0.0 {
                return Err(CatalogError::NonPositiveDistance {
                    body: self.name.clone(),
                    value: self.distance,
                });
            }
            if self.period_years <= 0.0 {
                return Err(CatalogError::NonPositivePeriod {
                    body: self.name.clone(),
                    value: self.period_years,
                });
            }
        }

        Ok(())
    }
}

/// A loaded body in the catalog arena.
#[derive(Clone, Debug)]
pub struct OrbitalBody {
    pub name: String,
    pub radius: f64,
    /// `None` for the root star
    pub orbit: Option<CircularOrbit>,
    pub spin: SpinModel,
    /// Index of the parent body in the arena
    pub parent: Option<usize>,
    /// Indices of direct satellites, in definition order
    pub children: Vec<usize>,
    pub has_rings: bool,
}

impl OrbitalBody {
    pub fn is_root(&self) -> bool {
        self.orbit.is_none()
    }

    /// Distance from parent (0 for the root).
    pub fn distance(&self) -> f64 {
        self.orbit.map_or(0.0, |o| o.distance)
    }

    /// Starting orbital angle in radians (0 for the root).
    pub fn base_angle(&self) -> f64 {
        self.orbit.map_or(0.0, |o| o.base_angle)
    }
}

/// Immutable, validated body catalog.
#[derive(Clone, Debug)]
pub struct Catalog {
    bodies: Vec<OrbitalBody>,
    root: usize,
}

impl Catalog {
    /// Validate and flatten top-level definitions.
    ///
    /// Exactly one top-level definition must have zero distance; it becomes the
    /// root. Other top-level definitions orbit the root.
    pub fn load(defs: &[BodyDef], anchor: CalendarAnchor) -> Result<Self, CatalogError> {
        let mut root_def: Option<&BodyDef> = None;
        for def in defs {
            if def.distance == 0.0 {
                if let Some(first) = root_def {
                    return Err(CatalogError::MultipleRoots {
                        first: first.name.clone(),
                        second: def.name.clone(),
                    });
                }
                root_def = Some(def);
            }
        }
        let root_def = root_def.ok_or(CatalogError::MissingRoot)?;

        let mut bodies = Vec::new();
        push_body(&mut bodies, root_def, None, anchor)?;
        for def in defs {
            if !std::ptr::eq(def, root_def) {
                push_body(&mut bodies, def, Some(0), anchor)?;
            }
        }

        for (i, body) in bodies.iter().enumerate() {
            if bodies[..i]
                .iter()
                .any(|b| b.name.eq_ignore_ascii_case(&body.name))
            {
                return Err(CatalogError::DuplicateName(body.name.clone()));
            }
        }

        Ok(Self { bodies, root: 0 })
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn root(&self) -> usize {
        self.root
    }

    pub fn get(&self, index: usize) -> Option<&OrbitalBody> {
        self.bodies.get(index)
    }

    /// All bodies in arena (pre-order) order.
    pub fn bodies(&self) -> &[OrbitalBody] {
        &self.bodies
    }

    /// Look up a body index by name, ignoring case and surrounding whitespace.
    pub fn find(&self, name: &str) -> Option<usize> {
        let name = name.trim();
        self.bodies
            .iter()
            .position(|b| b.name.eq_ignore_ascii_case(name))
    }

    /// Nesting depth of a body (0 for the root).
    pub fn depth(&self, index: usize) -> usize {
        let mut depth = 0;
        let mut current = self.bodies.get(index).and_then(|b| b.parent);
        while let Some(parent) = current {
            depth += 1;
            current = self.bodies.get(parent).and_then(|b| b.parent);
        }
        depth
    }
}

fn push_body(
    bodies: &mut Vec<OrbitalBody>,
    def: &BodyDef,
    parent: Option<usize>,
    anchor: CalendarAnchor,
) -> Result<usize, CatalogError> {
    def.validate(parent.is_none())?;

    let orbit = parent.map(|_| {
        CircularOrbit::new(def.distance, def.period_years, def.angle.resolve(anchor))
    });

    let index = bodies.len();
    bodies.push(OrbitalBody {
        name: def.name.trim().to_string(),
        radius: def.radius,
        orbit,
        spin: SpinModel::new(def.rotation_days),
        parent,
        children: Vec::new(),
        has_rings: def.has_rings,
    });

    for child in &def.children {
        let child_index = push_body(bodies, child, Some(index), anchor)?;
        bodies[index].children.push(child_index);
    }

    Ok(index)
}
