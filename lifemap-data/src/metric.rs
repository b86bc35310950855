use lifemap_scales::array::extent;
use lifemap_scales::format::LegendMode;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, VariantNames};

use crate::error::LifemapDataError;
use crate::record::{RegionRecord, YearStats};

/// The quantity a choropleth shades regions by
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    VariantNames,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Metric {
    #[default]
    LifeExpectancy,
    Population,
}

impl Metric {
    /// Life expectancies read best on a linear axis, populations span orders of magnitude
    pub fn legend_mode(&self) -> LegendMode {
        match self {
            Metric::LifeExpectancy => LegendMode::Linear,
            Metric::Population => LegendMode::Logarithmic,
        }
    }

    pub fn low_label(&self) -> &'static str {
        match self {
            Metric::LifeExpectancy => "Low Life Expectancy",
            Metric::Population => "Low Pop. Number",
        }
    }

    pub fn high_label(&self) -> &'static str {
        match self {
            Metric::LifeExpectancy => "High Life Expectancy",
            Metric::Population => "High Pop. Number",
        }
    }

    pub fn value(&self, stats: &YearStats) -> f32 {
        match self {
            Metric::LifeExpectancy => stats.life,
            Metric::Population => stats.population,
        }
    }

    /// One value per region that has data for `year`
    pub fn values_for_year(&self, records: &[RegionRecord], year: u16) -> Vec<f32> {
        records
            .iter()
            .filter_map(|r| r.get(year))
            .map(|s| self.value(s))
            .collect()
    }

    /// Every recorded value across all regions and years
    pub fn all_values(&self, records: &[RegionRecord]) -> Vec<f32> {
        records
            .iter()
            .flat_map(|r| r.years.values())
            .map(|s| self.value(s))
            .collect()
    }

    /// Values for `year`, or across all years when `None`
    pub fn values(&self, records: &[RegionRecord], year: Option<u16>) -> Vec<f32> {
        match year {
            Some(year) => self.values_for_year(records, year),
            None => self.all_values(records),
        }
    }

    pub fn extent(
        &self,
        records: &[RegionRecord],
        year: Option<u16>,
    ) -> Result<(f32, f32), LifemapDataError> {
        extent(&self.values(records, year)).ok_or_else(|| LifemapDataError::NoValues {
            metric: self.to_string(),
            year,
        })
    }
}
