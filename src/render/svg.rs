//! Paint draw commands with plotters.
//!
//! Everything is drawn in raw pixel coordinates on the root drawing area;
//! text is emitted as SVG `<text>`, so no font backend is involved.

use plotters::backend::DrawingBackend;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::{FontDesc, FontFamily, FontStyle};
use std::path::Path;

use super::{DrawCommand, draw_commands};
use crate::error::{Result, ScatterError};
use crate::geometry::Vector2;
use crate::layout::RenderData;
use crate::style::Rgb8;

fn rgb(c: Rgb8) -> RGBColor {
    RGBColor(c.r, c.g, c.b)
}

fn px(v: Vector2) -> (i32, i32) {
    (v.x.round() as i32, v.y.round() as i32)
}

fn draw_err<E: std::fmt::Debug>(e: E) -> ScatterError {
    ScatterError::Draw(format!("{e:?}"))
}

/// Paint `commands` in order onto `root`.
pub fn draw_on<DB>(root: &DrawingArea<DB, Shift>, commands: &[DrawCommand]) -> Result<()>
where
    DB: DrawingBackend,
{
    for cmd in commands {
        match cmd {
            DrawCommand::Circle { center, radius, fill } => {
                let r = radius.round().max(1.0) as i32;
                root.draw(&Circle::new(px(*center), r, rgb(*fill).filled()))
                    .map_err(draw_err)?;
            }
            DrawCommand::Ring { center, radius, stroke, width } => {
                let r = radius.round().max(1.0) as i32;
                let style = rgb(*stroke).stroke_width(width.round().max(1.0) as u32);
                root.draw(&Circle::new(px(*center), r, style)).map_err(draw_err)?;
            }
            DrawCommand::Polyline { points, stroke, width } => {
                let style = rgb(*stroke).stroke_width(width.round().max(1.0) as u32);
                let path: Vec<(i32, i32)> = points.iter().copied().map(px).collect();
                root.draw(&PathElement::new(path, style)).map_err(draw_err)?;
            }
            DrawCommand::Arrow { tip, angle_deg, size, fill } => {
                root.draw(&Polygon::new(arrow_points(*tip, *angle_deg, *size), rgb(*fill).filled()))
                    .map_err(draw_err)?;
            }
            DrawCommand::Text { text, top_left, font_size, fill } => {
                let style = FontDesc::new(FontFamily::SansSerif, *font_size, FontStyle::Normal)
                    .color(&rgb(*fill));
                root.draw(&Text::new(text.clone(), px(*top_left), style))
                    .map_err(draw_err)?;
            }
        }
    }
    Ok(())
}

fn arrow_points(tip: Vector2, angle_deg: f64, size: f64) -> Vec<(i32, i32)> {
    let a = angle_deg.to_radians();
    let dir = Vector2::new(a.cos(), a.sin());
    let [perp, _] = dir.normals();
    let base = tip.subtract(dir.times(size * 1.5));
    vec![
        px(tip),
        px(base.add(perp.times(size * 0.6))),
        px(base.subtract(perp.times(size * 0.6))),
    ]
}

/// Render to an in-memory SVG document of `width`×`height` pixels.
pub fn render_svg_string(render: &RenderData, width: u32, height: u32) -> Result<String> {
    let commands = draw_commands(render);
    let mut buf = String::new();
    {
        let root = SVGBackend::with_string(&mut buf, (width, height)).into_drawing_area();
        root.fill(&WHITE).map_err(draw_err)?;
        draw_on(&root, &commands)?;
        root.present().map_err(draw_err)?;
    }
    Ok(buf)
}

/// Render straight to an `.svg` file.
pub fn render_svg_file<P: AsRef<Path>>(
    render: &RenderData,
    out_path: P,
    width: u32,
    height: u32,
) -> Result<()> {
    let commands = draw_commands(render);
    let root = SVGBackend::new(out_path.as_ref(), (width, height)).into_drawing_area();
    root.fill(&WHITE).map_err(draw_err)?;
    draw_on(&root, &commands)?;
    root.present().map_err(draw_err)?;
    Ok(())
}
