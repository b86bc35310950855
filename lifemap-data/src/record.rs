use std::collections::BTreeMap;

use log::warn;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const FIRST_YEAR: u16 = 1960;
pub const LAST_YEAR: u16 = 2022;

/// Life expectancy and population of a region in one year
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearStats {
    pub life: f32,
    pub population: f32,
}

/// A map region and the years for which it has data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionRecord {
    pub name: String,
    pub years: BTreeMap<u16, YearStats>,
}

impl RegionRecord {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            years: BTreeMap::new(),
        }
    }

    pub fn with_year(mut self, year: u16, stats: YearStats) -> Self {
        self.years.insert(year, stats);
        self
    }

    pub fn get(&self, year: u16) -> Option<&YearStats> {
        self.years.get(&year)
    }

    /// Reads a geometry's `properties` object: a `name` plus one
    /// `{"life": .., "population": ..}` entry per year key.
    ///
    /// Returns `None` when the region has no name. Years outside
    /// 1960..=2022 and malformed year entries are skipped.
    pub fn from_properties(properties: &Map<String, Value>) -> Option<Self> {
        let name = properties.get("name").and_then(Value::as_str)?;
        let mut record = RegionRecord::new(name);

        for (key, value) in properties {
            let Ok(year) = key.parse::<u16>() else {
                continue;
            };
            if !(FIRST_YEAR..=LAST_YEAR).contains(&year) {
                continue;
            }
            match serde_json::from_value::<YearStats>(value.clone()) {
                Ok(stats) if stats.life.is_finite() && stats.population.is_finite() => {
                    record.years.insert(year, stats);
                }
                _ => warn!("Skipping malformed {year} entry for {name}: {value}"),
            }
        }
        Some(record)
    }
}
