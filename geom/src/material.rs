use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use thiserror::Error;

/// Density reported by materials that were never given one.
/// Any mass computed from it is negative and thus invalid.
pub const UNKNOWN_DENSITY: f32 = -1.0;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaterialType {
    Styrofoam,
    Pine,
    Wood,
    Oak,
    Ice,
    Water,
    Plastic,
    Concrete,
    Aluminum,
    SteelAlloy,
    SteelStainless,
    Iron,
    Brass,
    Copper,
    Tungsten,
    #[default]
    Unknown,
}

impl MaterialType {
    /// Every material with a known density, lightest first
    pub const PREDEFINED: [MaterialType; 15] = [
        MaterialType::Styrofoam,
        MaterialType::Pine,
        MaterialType::Wood,
        MaterialType::Oak,
        MaterialType::Ice,
        MaterialType::Water,
        MaterialType::Plastic,
        MaterialType::Concrete,
        MaterialType::Aluminum,
        MaterialType::SteelAlloy,
        MaterialType::SteelStainless,
        MaterialType::Iron,
        MaterialType::Brass,
        MaterialType::Copper,
        MaterialType::Tungsten,
    ];

    pub fn name(self) -> &'static str {
        use MaterialType::*;
        match self {
            Styrofoam => "styrofoam",
            Pine => "pine",
            Wood => "wood",
            Oak => "oak",
            Ice => "ice",
            Water => "water",
            Plastic => "plastic",
            Concrete => "concrete",
            Aluminum => "aluminum",
            SteelAlloy => "steel_alloy",
            SteelStainless => "steel_stainless",
            Iron => "iron",
            Brass => "brass",
            Copper => "copper",
            Tungsten => "tungsten",
            Unknown => "",
        }
    }

    /// Density in kg/m³
    pub fn density(self) -> f32 {
        use MaterialType::*;
        match self {
            Styrofoam => 75.0,
            Pine => 373.0,
            Wood => 700.0,
            Oak => 760.0,
            Ice => 916.0,
            Water => 1000.0,
            Plastic => 1175.0,
            Concrete => 2000.0,
            Aluminum => 2700.0,
            SteelAlloy => 7600.0,
            SteelStainless => 7800.0,
            Iron => 7870.0,
            Brass => 8600.0,
            Copper => 8940.0,
            Tungsten => 19300.0,
            Unknown => UNKNOWN_DENSITY,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MaterialParseError {
    #[error("Unknown material: {0}")]
    Unknown(String),
}

impl FromStr for MaterialType {
    type Err = MaterialParseError;

    /// Parse a predefined material from its name, ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::PREDEFINED
            .into_iter()
            .find(|m| m.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| MaterialParseError::Unknown(s.to_string()))
    }
}

/// A named density. Only the density takes part in mass computations.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Material {
    kind: MaterialType,
    name: String,
    density: f32,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            kind: MaterialType::Unknown,
            name: String::new(),
            density: UNKNOWN_DENSITY,
        }
    }
}

impl Material {
    pub fn new(kind: MaterialType) -> Self {
        Self {
            kind,
            name: kind.name().to_string(),
            density: kind.density(),
        }
    }

    pub fn from_density(density: f32) -> Self {
        Self {
            density,
            ..Self::default()
        }
    }

    /// A material that is not part of the predefined table
    pub fn custom(name: impl Into<String>, density: f32) -> Self {
        Self {
            kind: MaterialType::Unknown,
            name: name.into(),
            density,
        }
    }

    pub fn predefined() -> impl Iterator<Item = Material> {
        MaterialType::PREDEFINED.into_iter().map(Material::new)
    }

    #[inline]
    pub fn kind(&self) -> MaterialType {
        self.kind
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    #[inline]
    pub fn density(&self) -> f32 {
        self.density
    }

    /// Replaces the density. The kind and name are kept.
    pub fn set_density(&mut self, density: f32) {
        self.density = density;
    }

    fn key(&self) -> (MaterialType, &str, OrderedFloat<f32>) {
        (self.kind, &self.name, OrderedFloat(self.density))
    }
}

impl PartialEq for Material {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Material {}

impl Hash for Material {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state)
    }
}

impl From<MaterialType> for Material {
    fn from(kind: MaterialType) -> Self {
        Self::new(kind)
    }
}

impl FromStr for Material {
    type Err = MaterialParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MaterialType::from_str(s).map(Material::new)
    }
}

impl Display for Material {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.name.is_empty() {
            write!(f, "<unnamed> ({} kg/m³)", self.density)
        } else {
            write!(f, "{} ({} kg/m³)", self.name, self.density)
        }
    }
}
