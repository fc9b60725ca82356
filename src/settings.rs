//! Grid and angle settings
//!
//! Persisted as JSON. Missing fields fall back to defaults.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::Result;
use crate::grid::{CoordinateOrder2D, MatrixAccessor};
use crate::math::PeriodicInterval;

/// Unit used for angle measures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum AngleUnit {
    #[default]
    Degrees,
    Radians,
}

impl AngleUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            AngleUnit::Degrees => "Degrees",
            AngleUnit::Radians => "Radians",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "degrees" | "deg" => Some(AngleUnit::Degrees),
            "radians" | "rad" => Some(AngleUnit::Radians),
            _ => None,
        }
    }

    /// One full turn in this unit
    pub fn full_turn(&self) -> f32 {
        match self {
            AngleUnit::Degrees => 360.0,
            AngleUnit::Radians => std::f32::consts::TAU,
        }
    }
}

/// Shape and addressing of a grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridSettings {
    /// Columns
    pub width: usize,
    /// Rows
    pub height: usize,
    /// How coordinate pairs are read
    pub order: CoordinateOrder2D,
    /// Coordinates start at 0 (true) or 1 (false)
    pub zero_indexed: bool,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            width: 8,
            height: 8,
            order: CoordinateOrder2D::RightThenUp,
            zero_indexed: false,
        }
    }
}

/// How angles wrap
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AngleSettings {
    pub unit: AngleUnit,
    /// Wrap to a range centered on zero instead of starting at zero
    pub signed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Settings {
    pub grid: GridSettings,
    pub angle: AngleSettings,
}

impl Settings {
    /// Parse settings from a JSON document
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Accessor for the configured grid
    pub fn accessor(&self) -> Result<MatrixAccessor> {
        MatrixAccessor::new(
            self.grid.width,
            self.grid.height,
            self.grid.order,
            self.grid.zero_indexed,
        )
    }

    /// Interval that angles wrap on
    pub fn angle_interval(&self) -> PeriodicInterval {
        match (self.angle.unit, self.angle.signed) {
            (AngleUnit::Degrees, false) => PeriodicInterval::UNSIGNED_DEGREES,
            (AngleUnit::Degrees, true) => PeriodicInterval::SIGNED_DEGREES,
            (AngleUnit::Radians, false) => PeriodicInterval::UNSIGNED_RADIANS,
            (AngleUnit::Radians, true) => PeriodicInterval::SIGNED_RADIANS,
        }
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Load settings from a JSON file, falling back to defaults if it is missing or invalid
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        match Self::load(path.as_ref()) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Using default settings ({})", e);
                Self::default()
            }
        }
    }

    /// Save settings to a JSON file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        std::fs::write(path, self.to_json()?)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }
}
