use itertools::izip;
use lifemap_common::types::{RgbaColor, BLACK};
use lifemap_common::value::ScalarOrArray;
use serde::{Deserialize, Serialize};

use super::check_channel;
use super::mark::SceneMark;
use crate::error::LifemapSceneGraphError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct SceneRuleMark {
    pub name: String,
    pub len: u32,
    pub x: ScalarOrArray<f32>,
    pub y: ScalarOrArray<f32>,
    pub x2: ScalarOrArray<f32>,
    pub y2: ScalarOrArray<f32>,
    pub stroke: ScalarOrArray<RgbaColor>,
    pub stroke_width: ScalarOrArray<f32>,
    pub zindex: Option<i32>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RuleInstance {
    pub x: f32,
    pub y: f32,
    pub x2: f32,
    pub y2: f32,
    pub stroke: RgbaColor,
    pub stroke_width: f32,
}

impl SceneRuleMark {
    pub fn x_vec(&self) -> Vec<f32> {
        self.x.as_vec(self.len as usize)
    }

    pub fn x2_vec(&self) -> Vec<f32> {
        self.x2.as_vec(self.len as usize)
    }

    pub fn instances(&self) -> impl Iterator<Item = RuleInstance> + '_ {
        let n = self.len as usize;
        izip!(
            self.x.as_iter(n),
            self.y.as_iter(n),
            self.x2.as_iter(n),
            self.y2.as_iter(n),
            self.stroke.as_iter(n),
            self.stroke_width.as_iter(n)
        )
        .map(|(x, y, x2, y2, stroke, stroke_width)| RuleInstance {
            x: *x,
            y: *y,
            x2: *x2,
            y2: *y2,
            stroke: *stroke,
            stroke_width: *stroke_width,
        })
    }

    pub fn validate(&self) -> Result<(), LifemapSceneGraphError> {
        check_channel(&self.name, "x", &self.x, self.len)?;
        check_channel(&self.name, "y", &self.y, self.len)?;
        check_channel(&self.name, "x2", &self.x2, self.len)?;
        check_channel(&self.name, "y2", &self.y2, self.len)?;
        check_channel(&self.name, "stroke", &self.stroke, self.len)?;
        check_channel(&self.name, "stroke_width", &self.stroke_width, self.len)
    }
}

impl Default for SceneRuleMark {
    fn default() -> Self {
        Self {
            name: "rule_mark".to_string(),
            len: 1,
            x: ScalarOrArray::new_scalar(0.0),
            y: ScalarOrArray::new_scalar(0.0),
            x2: ScalarOrArray::new_scalar(0.0),
            y2: ScalarOrArray::new_scalar(0.0),
            stroke: ScalarOrArray::new_scalar(BLACK),
            stroke_width: ScalarOrArray::new_scalar(1.0),
            zindex: None,
        }
    }
}

impl From<SceneRuleMark> for SceneMark {
    fn from(mark: SceneRuleMark) -> Self {
        SceneMark::Rule(mark)
    }
}
