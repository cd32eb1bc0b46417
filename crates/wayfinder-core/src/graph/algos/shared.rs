use std::collections::HashSet;

use crate::error::{Result, WayfinderError};

/// Build the membership set for a declared city universe
pub fn universe(cities: &[String]) -> HashSet<&str> {
    cities.iter().map(String::as_str).collect()
}

/// Fail with `UnknownCity` unless `city` belongs to the universe
pub fn require_city(universe: &HashSet<&str>, city: &str) -> Result<()> {
    if universe.contains(city) {
        Ok(())
    } else {
        Err(WayfinderError::unknown_city(city))
    }
}
