use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CatalogueError;

type Result<T> = std::result::Result<T, CatalogueError>;

/// One country's statistics. Countries know their name, the continent they
/// sit on, their population, and their surface area.
///
/// Equality is structural over all four fields, exact for the numerics (no
/// tolerance on `area`). Fields are fixed at construction; a catalogue only
/// ever hands them back out by reference or as clones.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Country {
    pub name: String,
    pub continent: String,
    pub population: u64,
    pub area: f64,
}

impl Country {
    /// Create a country holding the four values verbatim. No validation is
    /// performed; a negative or zero `area` is accepted silently and only
    /// surfaces when a density is asked for.
    pub fn new(
        name: impl Into<String>,
        continent: impl Into<String>,
        population: u64,
        area: f64,
    ) -> Self {
        Self {
            name: name.into(),
            continent: continent.into(),
            population,
            area,
        }
    }

    /// Population density, `population / area`. Computed on demand, never
    /// stored. Fails when the area is exactly zero.
    pub fn density(&self) -> Result<f64> {
        if self.area == 0.0 {
            return Err(CatalogueError::ZeroArea(self.name.clone()));
        }
        Ok(self.population as f64 / self.area)
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Country(name={}, continent={}, population={}, area={})",
            self.name, self.continent, self.population, self.area
        )
    }
}
