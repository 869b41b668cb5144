//! GLEAM - Life-cycle GHG Emission Assessment
//!
//! Static lookup table of lifecycle greenhouse-gas emission factors for
//! freight transportation, extracted from GREET 2023rev1:
//! - `data`: the embedded forecast data (year → mode → engine → fuel)
//! - `table`: `EmissionTable`, the nested-map wrapper with the single
//!   `query` accessor
//!
//! The table is read-only after construction; callers supply
//! (year, mode, engine, fuel) keys and receive `(ghg, unit)` or `None`.
//! Valid key vocabulary is documented in README.md.

pub mod data;
pub mod table;

// Re-export commonly used types
pub use table::{EmissionRecord, EmissionTable};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_constructs() {
        let table = EmissionTable::new();
        assert!(table.query(2050, "Rail", "Diesel-Electric", "Diesel").is_some());
    }
}
