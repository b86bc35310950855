use itertools::izip;
use lifemap_common::types::{RgbaColor, TRANSPARENT};
use lifemap_common::value::ScalarOrArray;
use serde::{Deserialize, Serialize};

use super::check_channel;
use super::mark::SceneMark;
use crate::error::LifemapSceneGraphError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct SceneRectMark {
    pub name: String,
    pub len: u32,
    pub x: ScalarOrArray<f32>,
    pub y: ScalarOrArray<f32>,
    pub width: ScalarOrArray<f32>,
    pub height: ScalarOrArray<f32>,
    pub fill: ScalarOrArray<RgbaColor>,
    pub stroke: ScalarOrArray<RgbaColor>,
    pub stroke_width: ScalarOrArray<f32>,
    pub zindex: Option<i32>,
}

/// A single resolved rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectInstance {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub fill: RgbaColor,
    pub stroke: RgbaColor,
    pub stroke_width: f32,
}

impl SceneRectMark {
    pub fn x_vec(&self) -> Vec<f32> {
        self.x.as_vec(self.len as usize)
    }

    pub fn y_vec(&self) -> Vec<f32> {
        self.y.as_vec(self.len as usize)
    }

    pub fn width_vec(&self) -> Vec<f32> {
        self.width.as_vec(self.len as usize)
    }

    pub fn height_vec(&self) -> Vec<f32> {
        self.height.as_vec(self.len as usize)
    }

    /// Right edge of each rectangle
    pub fn x2_vec(&self) -> Vec<f32> {
        self.x_vec()
            .into_iter()
            .zip(self.width_vec())
            .map(|(x, w)| x + w)
            .collect()
    }

    pub fn fill_vec(&self) -> Vec<RgbaColor> {
        self.fill.as_vec(self.len as usize)
    }

    pub fn instances(&self) -> impl Iterator<Item = RectInstance> + '_ {
        let n = self.len as usize;
        izip!(
            self.x.as_iter(n),
            self.y.as_iter(n),
            self.width.as_iter(n),
            self.height.as_iter(n),
            self.fill.as_iter(n),
            self.stroke.as_iter(n),
            self.stroke_width.as_iter(n)
        )
        .map(
            |(x, y, width, height, fill, stroke, stroke_width)| RectInstance {
                x: *x,
                y: *y,
                width: *width,
                height: *height,
                fill: *fill,
                stroke: *stroke,
                stroke_width: *stroke_width,
            },
        )
    }

    pub fn validate(&self) -> Result<(), LifemapSceneGraphError> {
        check_channel(&self.name, "x", &self.x, self.len)?;
        check_channel(&self.name, "y", &self.y, self.len)?;
        check_channel(&self.name, "width", &self.width, self.len)?;
        check_channel(&self.name, "height", &self.height, self.len)?;
        check_channel(&self.name, "fill", &self.fill, self.len)?;
        check_channel(&self.name, "stroke", &self.stroke, self.len)?;
        check_channel(&self.name, "stroke_width", &self.stroke_width, self.len)
    }
}

impl Default for SceneRectMark {
    fn default() -> Self {
        Self {
            name: "rect_mark".to_string(),
            len: 1,
            x: ScalarOrArray::new_scalar(0.0),
            y: ScalarOrArray::new_scalar(0.0),
            width: ScalarOrArray::new_scalar(1.0),
            height: ScalarOrArray::new_scalar(1.0),
            fill: ScalarOrArray::new_scalar(TRANSPARENT),
            stroke: ScalarOrArray::new_scalar(TRANSPARENT),
            stroke_width: ScalarOrArray::new_scalar(0.0),
            zindex: None,
        }
    }
}

impl From<SceneRectMark> for SceneMark {
    fn from(mark: SceneRectMark) -> Self {
        SceneMark::Rect(mark)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_channels_broadcast() {
        let mark = SceneRectMark {
            len: 3,
            x: ScalarOrArray::new_array(vec![0.0, 10.0, 20.0]),
            width: ScalarOrArray::new_scalar(10.0),
            fill: ScalarOrArray::new_scalar([1.0, 0.0, 0.0, 1.0]),
            ..Default::default()
        };
        assert_eq!(mark.x2_vec(), vec![10.0, 20.0, 30.0]);
        assert_eq!(mark.y_vec(), vec![0.0, 0.0, 0.0]);
        assert_eq!(mark.height_vec().len(), 3);
        assert_eq!(mark.fill_vec().len(), 3);
        assert_eq!(mark.instances().count(), 3);
        assert_eq!(mark.validate(), Ok(()));
    }

    #[test]
    fn test_validate_length_mismatch() {
        let mark = SceneRectMark {
            name: "bar".to_string(),
            len: 3,
            x: ScalarOrArray::new_array(vec![0.0, 10.0]),
            ..Default::default()
        };
        assert_eq!(
            mark.validate(),
            Err(LifemapSceneGraphError::ChannelLengthMismatch {
                mark: "bar".to_string(),
                channel: "x",
                expected: 3,
                actual: 2
            })
        );
    }
}
