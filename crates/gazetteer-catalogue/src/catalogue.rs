use std::fmt;

use serde::{Deserialize, Serialize};

use crate::country::Country;
use crate::error::CatalogueError;

type Result<T> = std::result::Result<T, CatalogueError>;

/// Ordered collection of countries. Insertion order is preserved and
/// duplicates are permitted as separate entries; every query scans the
/// sequence linearly so that first-match semantics hold when duplicates or
/// tied values are present.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CountryCatalogue {
    countries: Vec<Country>,
}

impl CountryCatalogue {
    pub fn new() -> Self {
        Self {
            countries: Vec::new(),
        }
    }

    // -----------------------------------------------------------------------
    // Membership
    // -----------------------------------------------------------------------

    /// Index of the first country structurally equal to `country`, or `None`
    /// when no entry matches.
    pub fn find(&self, country: &Country) -> Option<usize> {
        for (index, candidate) in self.countries.iter().enumerate() {
            if candidate == country {
                return Some(index);
            }
        }
        None
    }

    pub fn contains(&self, country: &Country) -> bool {
        self.find(country).is_some()
    }

    /// Append a country to the end of the catalogue. Duplicates are kept.
    pub fn add(&mut self, country: Country) {
        self.countries.push(country);
    }

    /// Remove and return the first country structurally equal to `country`.
    /// A country present `k` times needs `k` calls to disappear entirely.
    /// The catalogue is left untouched when nothing matches.
    pub fn remove(&mut self, country: &Country) -> Result<Country> {
        match self.find(country) {
            Some(index) => Ok(self.countries.remove(index)),
            None => Err(CatalogueError::NotFound(country.name.clone())),
        }
    }

    // -----------------------------------------------------------------------
    // Density queries
    // -----------------------------------------------------------------------

    /// The country with the largest population density. Earlier entries win
    /// ties: a later country with an equal density never replaces the
    /// current maximum. A zero-area entry anywhere fails the whole query.
    pub fn most_dense(&self) -> Result<&Country> {
        let mut best: Option<(&Country, f64)> = None;
        for country in &self.countries {
            let density = country.density()?;
            let replace = match best {
                Some((_, current)) => density > current,
                None => true,
            };
            if replace {
                best = Some((country, density));
            }
        }
        match best {
            Some((country, _)) => Ok(country),
            None => Err(CatalogueError::Empty),
        }
    }

    /// The country with the smallest population density. Earlier entries win
    /// ties, mirroring [`most_dense`](Self::most_dense).
    pub fn least_dense(&self) -> Result<&Country> {
        let mut best: Option<(&Country, f64)> = None;
        for country in &self.countries {
            let density = country.density()?;
            let replace = match best {
                Some((_, current)) => density < current,
                None => true,
            };
            if replace {
                best = Some((country, density));
            }
        }
        match best {
            Some((country, _)) => Ok(country),
            None => Err(CatalogueError::Empty),
        }
    }

    /// A new catalogue holding a copy of every country whose density lies in
    /// `[low, high)`, in original order: `low` is inclusive, `high` is
    /// exclusive. The result owns its entries and shares nothing with
    /// `self`. `low > high` is not an error; nothing can satisfy it, so the
    /// result is empty.
    pub fn filter_by_density(&self, low: f64, high: f64) -> Result<CountryCatalogue> {
        let mut filtered = CountryCatalogue::new();
        for country in &self.countries {
            let density = country.density()?;
            if density >= low && density < high {
                filtered.add(country.clone());
            }
        }
        Ok(filtered)
    }

    // -----------------------------------------------------------------------
    // Continent totals
    // -----------------------------------------------------------------------

    /// Name of the continent with the largest summed population. Continents
    /// accumulate in first-seen order, and on equal totals the continent
    /// whose first country appears earliest in the catalogue wins.
    pub fn most_populous_continent(&self) -> Result<&str> {
        let mut totals: Vec<(&str, u64)> = Vec::new();
        for country in &self.countries {
            match totals
                .iter()
                .position(|(continent, _)| *continent == country.continent)
            {
                Some(index) => totals[index].1 += country.population,
                None => totals.push((country.continent.as_str(), country.population)),
            }
        }

        let mut winner: Option<(&str, u64)> = None;
        for &(continent, total) in &totals {
            let replace = match winner {
                Some((_, best)) => total > best,
                None => true,
            };
            if replace {
                winner = Some((continent, total));
            }
        }
        match winner {
            Some((continent, _)) => Ok(continent),
            None => Err(CatalogueError::Empty),
        }
    }

    // -----------------------------------------------------------------------
    // Indexed access
    // -----------------------------------------------------------------------

    /// The country at zero-based `index`.
    pub fn get(&self, index: usize) -> Result<&Country> {
        self.countries
            .get(index)
            .ok_or(CatalogueError::OutOfBounds {
                index,
                len: self.countries.len(),
            })
    }

    pub fn len(&self) -> usize {
        self.countries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }

    /// Iterate countries in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Country> {
        self.countries.iter()
    }
}

impl fmt::Display for CountryCatalogue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for country in &self.countries {
            writeln!(f, "{country}")?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a CountryCatalogue {
    type Item = &'a Country;
    type IntoIter = std::slice::Iter<'a, Country>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
