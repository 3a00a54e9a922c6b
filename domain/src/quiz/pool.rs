//! Country pool that rounds are drawn from

use super::round::CHOICES_PER_ROUND;
use crate::core::country::Country;
use crate::core::error::DomainError;
use std::collections::HashSet;

/// Immutable set of distinct countries a session draws its rounds from
///
/// Always holds at least [`CHOICES_PER_ROUND`] entries so that every round
/// can show three different flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryPool {
    countries: Vec<Country>,
}

impl CountryPool {
    pub fn new(countries: impl IntoIterator<Item = Country>) -> Result<Self, DomainError> {
        let countries: Vec<Country> = countries.into_iter().collect();

        let mut seen = HashSet::new();
        for country in &countries {
            if !seen.insert(*country) {
                return Err(DomainError::DuplicateCountry(country.to_string()));
            }
        }

        if countries.len() < CHOICES_PER_ROUND {
            return Err(DomainError::PoolTooSmall {
                required: CHOICES_PER_ROUND,
                actual: countries.len(),
            });
        }

        Ok(Self { countries })
    }

    /// Parse a pool from country names, e.g. from a config file
    pub fn from_names<S: AsRef<str>>(names: &[S]) -> Result<Self, DomainError> {
        let countries = names
            .iter()
            .map(|name| name.as_ref().parse::<Country>())
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(countries)
    }

    pub fn countries(&self) -> &[Country] {
        &self.countries
    }

    pub fn len(&self) -> usize {
        self.countries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }

    pub fn contains(&self, country: Country) -> bool {
        self.countries.contains(&country)
    }
}

impl Default for CountryPool {
    fn default() -> Self {
        Self {
            countries: Country::ALL.to_vec(),
        }
    }
}
