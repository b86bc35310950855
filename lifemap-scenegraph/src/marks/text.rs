use itertools::izip;
use lifemap_common::types::{RgbaColor, TextAlign, TextBaseline, BLACK};
use lifemap_common::value::ScalarOrArray;
use serde::{Deserialize, Serialize};

use super::check_channel;
use super::mark::SceneMark;
use crate::error::LifemapSceneGraphError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct SceneTextMark {
    pub name: String,
    pub len: u32,
    pub text: ScalarOrArray<String>,
    pub x: ScalarOrArray<f32>,
    pub y: ScalarOrArray<f32>,
    /// Extra vertical offset in ems, like SVG `dy`
    pub dy: ScalarOrArray<f32>,
    pub align: ScalarOrArray<TextAlign>,
    pub baseline: ScalarOrArray<TextBaseline>,
    pub color: ScalarOrArray<RgbaColor>,
    pub font: ScalarOrArray<String>,
    pub font_size: ScalarOrArray<f32>,
    pub zindex: Option<i32>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextInstance<'a> {
    pub text: &'a str,
    pub x: f32,
    pub y: f32,
    pub dy: f32,
    pub align: TextAlign,
    pub baseline: TextBaseline,
    pub color: RgbaColor,
    pub font: &'a str,
    pub font_size: f32,
}

impl SceneTextMark {
    pub fn text_vec(&self) -> Vec<String> {
        self.text.as_vec(self.len as usize)
    }

    pub fn x_vec(&self) -> Vec<f32> {
        self.x.as_vec(self.len as usize)
    }

    pub fn instances(&self) -> impl Iterator<Item = TextInstance<'_>> + '_ {
        let n = self.len as usize;
        izip!(
            self.text.as_iter(n),
            self.x.as_iter(n),
            self.y.as_iter(n),
            self.dy.as_iter(n),
            self.align.as_iter(n),
            self.baseline.as_iter(n),
            self.color.as_iter(n),
            self.font.as_iter(n),
            self.font_size.as_iter(n)
        )
        .map(
            |(text, x, y, dy, align, baseline, color, font, font_size)| TextInstance {
                text,
                x: *x,
                y: *y,
                dy: *dy,
                align: *align,
                baseline: *baseline,
                color: *color,
                font,
                font_size: *font_size,
            },
        )
    }

    pub fn validate(&self) -> Result<(), LifemapSceneGraphError> {
        check_channel(&self.name, "text", &self.text, self.len)?;
        check_channel(&self.name, "x", &self.x, self.len)?;
        check_channel(&self.name, "y", &self.y, self.len)?;
        check_channel(&self.name, "dy", &self.dy, self.len)?;
        check_channel(&self.name, "align", &self.align, self.len)?;
        check_channel(&self.name, "baseline", &self.baseline, self.len)?;
        check_channel(&self.name, "color", &self.color, self.len)?;
        check_channel(&self.name, "font", &self.font, self.len)?;
        check_channel(&self.name, "font_size", &self.font_size, self.len)
    }
}

impl Default for SceneTextMark {
    fn default() -> Self {
        Self {
            name: "text_mark".to_string(),
            len: 1,
            text: ScalarOrArray::new_scalar(String::new()),
            x: ScalarOrArray::new_scalar(0.0),
            y: ScalarOrArray::new_scalar(0.0),
            dy: ScalarOrArray::new_scalar(0.0),
            align: ScalarOrArray::new_scalar(TextAlign::Left),
            baseline: ScalarOrArray::new_scalar(TextBaseline::Alphabetic),
            color: ScalarOrArray::new_scalar(BLACK),
            font: ScalarOrArray::new_scalar("sans-serif".to_string()),
            font_size: ScalarOrArray::new_scalar(10.0),
            zindex: None,
        }
    }
}

impl From<SceneTextMark> for SceneMark {
    fn from(mark: SceneTextMark) -> Self {
        SceneMark::Text(mark)
    }
}
