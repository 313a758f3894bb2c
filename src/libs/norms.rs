//! Per-furnace duration norms.
//!
//! Each furnace has an expected duration for both treatment cycles, the
//! break between them and the whole run. The table is built once at startup,
//! either from the built-in defaults or from the `norms` section of the
//! configuration file, and is read-only afterwards.

use super::error::ReportError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Expected durations for one furnace, in minutes.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct NormSet {
    /// Program 1 running time.
    pub cycle1: u32,
    /// Program 2 running time.
    pub cycle2: u32,
    /// Idle time between the end of program 1 and the start of program 2.
    pub break_time: u32,
    /// Whole run: both cycles plus the break.
    pub total: u32,
}

/// Read-only mapping from furnace name to its [`NormSet`].
///
/// Furnaces are kept sorted by name so listings are stable.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct NormsTable {
    furnaces: BTreeMap<String, NormSet>,
}

impl Default for NormsTable {
    /// The norms used on the shop floor:
    ///
    /// - Furnace 1: 8:30 + 3:30, 0:40 break, 12:40 total
    /// - Furnace 2: 11:00 + 3:30, 0:40 break, 15:10 total
    fn default() -> Self {
        let mut furnaces = BTreeMap::new();
        furnaces.insert(
            "Furnace 1".to_string(),
            NormSet {
                cycle1: 510,
                cycle2: 210,
                break_time: 40,
                total: 760,
            },
        );
        furnaces.insert(
            "Furnace 2".to_string(),
            NormSet {
                cycle1: 660,
                cycle2: 210,
                break_time: 40,
                total: 910,
            },
        );
        Self { furnaces }
    }
}

impl NormsTable {
    pub fn new(furnaces: BTreeMap<String, NormSet>) -> Self {
        Self { furnaces }
    }

    /// Returns the norms for `furnace`.
    ///
    /// # Errors
    ///
    /// [`ReportError::UnknownFurnace`] if the name is not configured. Names
    /// are matched exactly.
    pub fn lookup(&self, furnace: &str) -> Result<&NormSet, ReportError> {
        self.furnaces
            .get(furnace)
            .ok_or_else(|| ReportError::UnknownFurnace(furnace.to_string()))
    }

    /// Furnace names in display order.
    pub fn furnaces(&self) -> Vec<&str> {
        self.furnaces.keys().map(String::as_str).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &NormSet)> {
        self.furnaces.iter().map(|(name, norms)| (name.as_str(), norms))
    }

    pub fn is_empty(&self) -> bool {
        self.furnaces.is_empty()
    }
}
