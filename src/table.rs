//! Emission Table and Point Lookup
//!
//! Wraps the embedded forecast data in nested hash maps keyed by
//! year → mode → engine → fuel and answers point queries.

use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::data::{self, FORECAST};

/// Lifecycle GHG intensity for one (year, mode, engine, fuel) combination.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EmissionRecord {
    /// GHG intensity; negative for net-negative (credited) pathways.
    pub ghg: f64,
    /// Physical unit, `"g/mile"` or `"g/ton.mile"` depending on mode.
    pub unit: &'static str,
}

type FuelMap = FxHashMap<&'static str, EmissionRecord>;
type EngineMap = FxHashMap<&'static str, FuelMap>;
type ModeMap = FxHashMap<&'static str, EngineMap>;

/// Static lookup table of lifecycle GHG emission factors.
///
/// Built once from the embedded GREET 2023rev1 forecast and never mutated
/// afterwards, so a single instance can be shared freely across threads.
/// The only operation is [`query`](Self::query); key discovery is the
/// caller's responsibility.
pub struct EmissionTable {
    years: FxHashMap<i32, ModeMap>,
}

impl EmissionTable {
    /// Build the nested maps from the embedded forecast data.
    ///
    /// Infallible: the data is a compile-time literal and there is no
    /// partially-constructed state.
    pub fn new() -> Self {
        let mut years = FxHashMap::default();
        for year_table in FORECAST {
            let mut modes: ModeMap = FxHashMap::default();
            for mode_group in year_table.modes {
                let mut engines: EngineMap = FxHashMap::default();
                for engine_group in mode_group.engines {
                    let mut fuels: FuelMap = FxHashMap::default();
                    for record in engine_group.fuels {
                        fuels.insert(
                            record.fuel,
                            EmissionRecord {
                                ghg: record.ghg,
                                unit: record.unit,
                            },
                        );
                    }
                    engines.insert(engine_group.engine, fuels);
                }
                modes.insert(mode_group.mode, engines);
            }
            years.insert(year_table.year, modes);
        }
        Self { years }
    }

    /// Retrieve the GHG emission factor and its unit.
    ///
    /// Performs the four-level lookup `year → mode → engine → fuel` and
    /// short-circuits at the first missing key: a miss at any level yields
    /// `None`, never a panic. Misses are routine — a fuel pathway present in
    /// one forecast year may be absent (or labeled differently) in another.
    ///
    /// # Examples
    /// ```
    /// use gleam::EmissionTable;
    ///
    /// let table = EmissionTable::new();
    /// assert_eq!(
    ///     table.query(2025, "Long_Haul", "CIDI", "Diesel"),
    ///     Some((1489.00, "g/mile")),
    /// );
    /// assert_eq!(table.query(1999, "Long_Haul", "CIDI", "Diesel"), None);
    /// ```
    pub fn query(
        &self,
        year: i32,
        mode: &str,
        engine: &str,
        fuel: &str,
    ) -> Option<(f64, &'static str)> {
        let record = self
            .years
            .get(&year)?
            .get(mode)?
            .get(engine)?
            .get(fuel)?;
        Some((record.ghg, record.unit))
    }

    /// Provenance string for the embedded data.
    pub fn metadata(&self) -> &'static str {
        data::METADATA
    }
}

impl Default for EmissionTable {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// TESTS - Validate against the GREET 2023rev1 extraction
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_known_factors_match_source() {
        let table = EmissionTable::new();

        let (ghg, unit) = table.query(2025, "Long_Haul", "CIDI", "Diesel").unwrap();
        assert_relative_eq!(ghg, 1489.00);
        assert_eq!(unit, "g/mile");

        let (ghg, unit) = table
            .query(2025, "Rail", "Diesel-Electric", "Electricity")
            .unwrap();
        assert_relative_eq!(ghg, 13.00);
        assert_eq!(unit, "g/ton.mile");
    }

    /// Negative factors (credited pathways) come through exactly as stored.
    #[test]
    fn test_negative_factor_preserved() {
        let table = EmissionTable::new();
        let (ghg, unit) = table.query(2030, "Marine", "MeOH", "RNG").unwrap();
        assert_relative_eq!(ghg, -66.72);
        assert_eq!(unit, "g/ton.mile");
    }

    /// A miss at any of the four levels yields the same None.
    #[test]
    fn test_miss_at_every_level() {
        let table = EmissionTable::new();
        assert_eq!(table.query(1999, "Long_Haul", "CIDI", "Diesel"), None);
        assert_eq!(table.query(2025, "Air", "CIDI", "Diesel"), None);
        assert_eq!(table.query(2025, "Long_Haul", "Steam", "Diesel"), None);
        assert_eq!(table.query(2025, "Long_Haul", "CIDI", "Unobtainium"), None);
    }

    /// The 2025 Marine/MeOH fuel labels differ from later years; the drift
    /// is preserved rather than aliased.
    #[test]
    fn test_fuel_label_drift_not_aliased() {
        let table = EmissionTable::new();
        assert!(table
            .query(2025, "Marine", "MeOH", "Renewable-Natural-Gas")
            .is_some());
        assert_eq!(table.query(2025, "Marine", "MeOH", "RNG"), None);
        assert!(table.query(2050, "Marine", "MeOH", "RNG").is_some());
        assert_eq!(
            table.query(2050, "Marine", "MeOH", "Renewable-Natural-Gas"),
            None
        );
    }

    #[test]
    fn test_query_is_idempotent() {
        let table = EmissionTable::new();
        let first = table.query(2035, "Short_Haul", "Fuel-Cell", "GH2");
        let second = table.query(2035, "Short_Haul", "Fuel-Cell", "GH2");
        assert_eq!(first, second);
        assert!(first.is_some());
    }

    #[test]
    fn test_metadata_names_source() {
        let table = EmissionTable::new();
        assert!(table.metadata().contains("GREET 2023rev1"));
    }
}
