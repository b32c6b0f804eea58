//! SVG output - draw detected cycles and lines.
//!
//! Each grid coordinate becomes the centre of a square cell, so a cycle
//! is drawn as a `<polygon>` through its cell centres and a line as a
//! `<line>` between its endpoints. Orphan lines are dashed.

use crate::cycle::Cycle;
use crate::error::{Error, Result};
use crate::geometry::Coordinate;
use crate::line::Line;
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, Event};
use std::fmt::Display;

/// Styling for [`render_svg`].
#[derive(Debug, Clone)]
pub struct SvgStyle {
    /// Width and height of one grid cell, in SVG units.
    pub cell_size: f64,
    /// Blank space around the drawing.
    pub margin: f64,
    pub cycle_stroke: String,
    pub line_stroke: String,
    pub orphan_stroke: String,
    pub stroke_width: f64,
}

impl Default for SvgStyle {
    fn default() -> Self {
        Self {
            cell_size: 10.0,
            margin: 5.0,
            cycle_stroke: "black".to_string(),
            line_stroke: "steelblue".to_string(),
            orphan_stroke: "crimson".to_string(),
            stroke_width: 1.0,
        }
    }
}

impl SvgStyle {
    pub fn with_cell_size(cell_size: f64) -> Self {
        Self { cell_size, ..Self::default() }
    }
}

/// Render cycles and lines as a standalone SVG document.
///
/// Either slice may be empty, but not both.
pub fn render_svg(cycles: &[Cycle], lines: &[Line], style: &SvgStyle) -> Result<String> {
    let points = cycles
        .iter()
        .flat_map(|cycle| cycle.points().iter().copied())
        .chain(lines.iter().flat_map(|line| [line.start(), line.end()]));
    let Some(bounds) = Bounds::around(points) else {
        return Err(Error::NothingToRender);
    };

    let (width, height) = bounds.size(style);
    let view_box = format!("0 0 {width:.2} {height:.2}");
    let stroke_width = format!("{:.2}", style.stroke_width);

    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
    writer
        .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
        .map_err(xml_error)?;

    let mut svg = BytesStart::new("svg");
    svg.push_attribute(("xmlns", "http://www.w3.org/2000/svg"));
    svg.push_attribute(("viewBox", view_box.as_str()));
    writer.write_event(Event::Start(svg)).map_err(xml_error)?;

    if !cycles.is_empty() {
        let mut group = BytesStart::new("g");
        group.push_attribute(("class", "cycles"));
        group.push_attribute(("fill", "none"));
        group.push_attribute(("stroke", style.cycle_stroke.as_str()));
        group.push_attribute(("stroke-width", stroke_width.as_str()));
        writer.write_event(Event::Start(group)).map_err(xml_error)?;

        for cycle in cycles {
            // A polygon closes itself; drop the repeated closing point.
            let open = &cycle.points()[..cycle.len() - 1];
            let points = open
                .iter()
                .map(|&p| {
                    let (x, y) = bounds.project(p, style);
                    format!("{x:.2},{y:.2}")
                })
                .collect::<Vec<_>>()
                .join(" ");

            let mut polygon = BytesStart::new("polygon");
            polygon.push_attribute(("points", points.as_str()));
            writer.write_event(Event::Empty(polygon)).map_err(xml_error)?;
        }

        writer.write_event(Event::End(BytesEnd::new("g"))).map_err(xml_error)?;
    }

    if !lines.is_empty() {
        let mut group = BytesStart::new("g");
        group.push_attribute(("class", "lines"));
        group.push_attribute(("stroke-width", stroke_width.as_str()));
        writer.write_event(Event::Start(group)).map_err(xml_error)?;

        for line in lines {
            let (x1, y1) = bounds.project(line.start(), style);
            let (x2, y2) = bounds.project(line.end(), style);
            let coords = [x1, y1, x2, y2].map(|v| format!("{v:.2}"));

            let mut element = BytesStart::new("line");
            for (name, value) in ["x1", "y1", "x2", "y2"].into_iter().zip(&coords) {
                element.push_attribute((name, value.as_str()));
            }
            if line.is_orphan() {
                element.push_attribute(("stroke", style.orphan_stroke.as_str()));
                element.push_attribute(("stroke-dasharray", "4 2"));
            } else {
                element.push_attribute(("stroke", style.line_stroke.as_str()));
            }
            writer.write_event(Event::Empty(element)).map_err(xml_error)?;
        }

        writer.write_event(Event::End(BytesEnd::new("g"))).map_err(xml_error)?;
    }

    writer.write_event(Event::End(BytesEnd::new("svg"))).map_err(xml_error)?;

    String::from_utf8(writer.into_inner()).map_err(xml_error)
}

fn xml_error(err: impl Display) -> Error {
    Error::Xml(err.to_string())
}

/// Inclusive grid extent of everything being drawn.
struct Bounds {
    min: Coordinate,
    max: Coordinate,
}

impl Bounds {
    fn around(points: impl Iterator<Item = Coordinate>) -> Option<Self> {
        points.fold(None, |bounds: Option<Bounds>, p| {
            Some(match bounds {
                None => Bounds { min: p, max: p },
                Some(b) => Bounds {
                    min: Coordinate::new(b.min.x.min(p.x), b.min.y.min(p.y)),
                    max: Coordinate::new(b.max.x.max(p.x), b.max.y.max(p.y)),
                },
            })
        })
    }

    fn size(&self, style: &SvgStyle) -> (f64, f64) {
        let cells_x = f64::from(self.max.x - self.min.x + 1);
        let cells_y = f64::from(self.max.y - self.min.y + 1);
        (
            cells_x * style.cell_size + 2.0 * style.margin,
            cells_y * style.cell_size + 2.0 * style.margin,
        )
    }

    /// Centre of `p`'s cell in SVG units.
    fn project(&self, p: Coordinate, style: &SvgStyle) -> (f64, f64) {
        let half = style.cell_size / 2.0;
        (
            style.margin + f64::from(p.x - self.min.x) * style.cell_size + half,
            style.margin + f64::from(p.y - self.min.y) * style.cell_size + half,
        )
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn c(x: i32, y: i32) -> Coordinate {
        Coordinate::new(x, y)
    }

    fn square() -> Cycle {
        Cycle::new(vec![c(0, 0), c(1, 0), c(1, 1), c(0, 1), c(0, 0)]).unwrap()
    }

    #[test]
    fn nothing_to_render() {
        let err = render_svg(&[], &[], &SvgStyle::default()).unwrap_err();
        assert_eq!(err, Error::NothingToRender);
    }

    #[test]
    fn renders_cycle_as_polygon() {
        let svg = render_svg(&[square()], &[], &SvgStyle::default()).unwrap();

        assert!(svg.starts_with("<?xml"));
        assert!(svg.contains(r#"viewBox="0 0 30.00 30.00""#));
        assert!(svg.contains(r#"points="10.00,10.00 20.00,10.00 20.00,20.00 10.00,20.00""#));
        assert!(!svg.contains("<line"));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn orphan_lines_are_dashed() {
        let edge = Line::new(c(0, 0), c(2, 0), c(1, 0));
        let mut orphan = Line::new(c(2, 0), c(2, 3), c(0, 1));
        orphan.mark_orphan();

        let svg = render_svg(&[], &[edge, orphan], &SvgStyle::default()).unwrap();

        assert_eq!(svg.matches("<line").count(), 2);
        assert_eq!(svg.matches("stroke-dasharray").count(), 1);
        assert!(svg.contains(r#"stroke="crimson""#));
        assert!(svg.contains(r#"x1="10.00" y1="10.00" x2="30.00" y2="10.00""#));
    }

    #[test]
    fn cell_size_scales_drawing() {
        let svg = render_svg(&[square()], &[], &SvgStyle::with_cell_size(20.0)).unwrap();
        assert!(svg.contains(r#"viewBox="0 0 50.00 50.00""#));
    }

    #[test]
    fn bounds_follow_negative_coordinates() {
        let line = Line::new(c(-3, -1), c(-1, -1), c(1, 0));
        let svg = render_svg(&[], &[line], &SvgStyle::default()).unwrap();
        assert!(svg.contains(r#"viewBox="0 0 40.00 20.00""#));
        assert!(svg.contains(r#"x1="10.00" y1="10.00""#));
    }
}
