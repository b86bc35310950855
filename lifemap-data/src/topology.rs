use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use log::{debug, warn};
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::LifemapDataError;
use crate::record::RegionRecord;

pub const DEFAULT_OBJECT: &str = "countries";

/// The parts of a TopoJSON topology that carry region properties.
/// Arcs and transforms are not decoded.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Topology {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub objects: BTreeMap<String, TopologyObject>,
    /// Summary fields written by the enrichment step, when present
    #[serde(default)]
    pub min_life_exp: Option<f32>,
    #[serde(default)]
    pub max_life_exp: Option<f32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TopologyObject {
    #[serde(default)]
    pub geometries: Vec<TopologyGeometry>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TopologyGeometry {
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default)]
    pub properties: Option<Map<String, Value>>,
}

impl Topology {
    pub fn from_json(text: &str) -> Result<Self, LifemapDataError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn from_reader(reader: impl Read) -> Result<Self, LifemapDataError> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, LifemapDataError> {
        let path = path.as_ref();
        debug!("Reading topology from {}", path.display());
        Self::from_reader(BufReader::new(File::open(path)?))
    }

    pub fn object_names(&self) -> Vec<&str> {
        self.objects.keys().map(String::as_str).collect()
    }

    /// Region records of the named object collection, in geometry order.
    /// Geometries without a region name are skipped.
    pub fn regions(&self, object: &str) -> Result<Vec<RegionRecord>, LifemapDataError> {
        let collection = self
            .objects
            .get(object)
            .ok_or_else(|| LifemapDataError::MissingObject(object.to_string()))?;

        let mut records = Vec::with_capacity(collection.geometries.len());
        for (i, geometry) in collection.geometries.iter().enumerate() {
            match geometry
                .properties
                .as_ref()
                .and_then(RegionRecord::from_properties)
            {
                Some(record) => records.push(record),
                None => warn!("Skipping geometry {i} of {object:?}: no region name"),
            }
        }
        debug!(
            "Read {} of {} regions from {object:?}",
            records.len(),
            collection.geometries.len()
        );
        Ok(records)
    }
}
