use std::fmt::{self, Write};

use lifemap_common::types::{Color, RgbaColor};
use lifemap_scenegraph::marks::group::SceneGroup;
use lifemap_scenegraph::marks::mark::SceneMark;
use lifemap_scenegraph::marks::rect::SceneRectMark;
use lifemap_scenegraph::marks::rule::SceneRuleMark;
use lifemap_scenegraph::marks::text::SceneTextMark;
use lifemap_scenegraph::scene_graph::SceneGraph;
use log::debug;

use crate::error::LifemapSvgError;

/// Serialize a scene graph as a standalone SVG document
pub fn render_svg(scene_graph: &SceneGraph) -> Result<String, LifemapSvgError> {
    let mut out = String::new();
    write_document(&mut out, scene_graph)
        .map_err(|err| LifemapSvgError::InternalError(err.to_string()))?;
    debug!(
        "Rendered {}x{} scene graph to {} bytes of SVG",
        scene_graph.width,
        scene_graph.height,
        out.len()
    );
    Ok(out)
}

fn write_document(out: &mut String, scene_graph: &SceneGraph) -> fmt::Result {
    writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = scene_graph.width,
        h = scene_graph.height
    )?;
    let [ox, oy] = scene_graph.origin;
    let translated = ox != 0.0 || oy != 0.0;
    if translated {
        writeln!(out, r#"<g transform="translate({ox},{oy})">"#)?;
    }
    write_marks(out, &scene_graph.marks, 1)?;
    if translated {
        writeln!(out, "</g>")?;
    }
    writeln!(out, "</svg>")
}

/// Marks are drawn in ascending zindex, ties keep insertion order
fn write_marks(out: &mut String, marks: &[SceneMark], depth: usize) -> fmt::Result {
    let mut ordered: Vec<&SceneMark> = marks.iter().collect();
    ordered.sort_by_key(|m| m.zindex().unwrap_or(0));
    for mark in ordered {
        match mark {
            SceneMark::Group(group) => write_group(out, group, depth)?,
            SceneMark::Rect(mark) => write_rects(out, mark, depth)?,
            SceneMark::Rule(mark) => write_rules(out, mark, depth)?,
            SceneMark::Text(mark) => write_texts(out, mark, depth)?,
        }
    }
    Ok(())
}

fn write_group(out: &mut String, group: &SceneGroup, depth: usize) -> fmt::Result {
    let [x, y] = group.origin;
    indent(out, depth)?;
    writeln!(
        out,
        r#"<g class="{}" transform="translate({x},{y})">"#,
        escape(&group.name)
    )?;
    write_marks(out, &group.marks, depth + 1)?;
    indent(out, depth)?;
    writeln!(out, "</g>")
}

fn write_rects(out: &mut String, mark: &SceneRectMark, depth: usize) -> fmt::Result {
    for rect in mark.instances() {
        indent(out, depth)?;
        write!(
            out,
            r#"<rect x="{}" y="{}" width="{}" height="{}""#,
            rect.x, rect.y, rect.width, rect.height
        )?;
        write_paint(out, "fill", rect.fill)?;
        if rect.stroke_width > 0.0 && rect.stroke[3] > 0.0 {
            write_paint(out, "stroke", rect.stroke)?;
            write!(out, r#" stroke-width="{}""#, rect.stroke_width)?;
        }
        writeln!(out, "/>")?;
    }
    Ok(())
}

fn write_rules(out: &mut String, mark: &SceneRuleMark, depth: usize) -> fmt::Result {
    for rule in mark.instances() {
        indent(out, depth)?;
        write!(
            out,
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}""#,
            rule.x, rule.y, rule.x2, rule.y2
        )?;
        write_paint(out, "stroke", rule.stroke)?;
        writeln!(out, r#" stroke-width="{}"/>"#, rule.stroke_width)?;
    }
    Ok(())
}

fn write_texts(out: &mut String, mark: &SceneTextMark, depth: usize) -> fmt::Result {
    for text in mark.instances() {
        indent(out, depth)?;
        write!(
            out,
            r#"<text x="{}" y="{}" text-anchor="{}" dominant-baseline="{}" font-family="{}" font-size="{}""#,
            text.x,
            text.y,
            text.align.text_anchor(),
            text.baseline.dominant_baseline(),
            escape(text.font),
            text.font_size
        )?;
        if text.dy != 0.0 {
            write!(out, r#" dy="{}em""#, text.dy)?;
        }
        write_paint(out, "fill", text.color)?;
        writeln!(out, ">{}</text>", escape(text.text))?;
    }
    Ok(())
}

fn write_paint(out: &mut String, attr: &str, color: RgbaColor) -> fmt::Result {
    let color = Color(color);
    if color.opacity() <= 0.0 {
        return write!(out, r#" {attr}="none""#);
    }
    write!(out, r#" {attr}="{}""#, color.to_hex())?;
    if color.opacity() < 1.0 {
        write!(out, r#" {attr}-opacity="{}""#, color.opacity())?;
    }
    Ok(())
}

fn indent(out: &mut String, depth: usize) -> fmt::Result {
    write!(out, "{:width$}", "", width = depth * 2)
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use lifemap_common::types::{TextAlign, TextBaseline, BLACK};
    use lifemap_common::value::ScalarOrArray;

    #[test]
    fn test_escape() {
        assert_eq!(escape(r#"<Côte & "Ivoire">"#), "&lt;Côte &amp; &quot;Ivoire&quot;&gt;");
    }

    #[test]
    fn test_transparent_fill_is_none() {
        let mut out = String::new();
        write_paint(&mut out, "fill", [0.0, 0.0, 0.0, 0.0]).unwrap();
        assert_eq!(out, r#" fill="none""#);

        out.clear();
        write_paint(&mut out, "fill", [1.0, 0.0, 0.0, 0.5]).unwrap();
        assert_eq!(out, r##" fill="#ff0000" fill-opacity="0.5""##);
    }

    #[test]
    fn test_zindex_ordering() {
        let mut scene = SceneGraph::new(100.0, 50.0);
        scene.marks.push(SceneMark::Text(SceneTextMark {
            text: ScalarOrArray::new_scalar("top".to_string()),
            zindex: Some(1),
            ..Default::default()
        }));
        scene.marks.push(SceneMark::Rule(SceneRuleMark {
            x2: ScalarOrArray::new_scalar(10.0),
            ..Default::default()
        }));
        let svg = render_svg(&scene).unwrap();
        let line = svg.find("<line").unwrap();
        let text = svg.find("<text").unwrap();
        assert!(line < text);
    }

    #[test]
    fn test_text_attributes() {
        let mark = SceneTextMark {
            text: ScalarOrArray::new_scalar("High".to_string()),
            x: ScalarOrArray::new_scalar(850.0),
            y: ScalarOrArray::new_scalar(10.0),
            align: ScalarOrArray::new_scalar(TextAlign::Right),
            baseline: ScalarOrArray::new_scalar(TextBaseline::Middle),
            color: ScalarOrArray::new_scalar(BLACK),
            font: ScalarOrArray::new_scalar("Monaco".to_string()),
            font_size: ScalarOrArray::new_scalar(15.0),
            ..Default::default()
        };
        let mut out = String::new();
        write_texts(&mut out, &mark, 0).unwrap();
        assert_eq!(
            out,
            "<text x=\"850\" y=\"10\" text-anchor=\"end\" dominant-baseline=\"middle\" \
             font-family=\"Monaco\" font-size=\"15\" fill=\"#000000\">High</text>\n"
        );
    }
}
