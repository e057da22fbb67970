use std::fmt::Write as _;

use mazesight_core::{Maze, Point, Polygon, VisibilityEngine};
use xmlwriter::{Options, XmlWriter};

const STROKE_WIDTH: f64 = 0.005;
const DOT_RADIUS: f64 = 0.01;
const MAZE_FILL: &str = "#AAA";
const MAZE_DOT: &str = "#333";
const LIGHT: &str = "#FD0";
const LIGHT_OPACITY: f64 = 0.2;

#[derive(Copy, Clone, Debug)]
pub struct RenderOptions {
    pub show_maze: bool,
    /// Width and height of the drawing in pixels.
    pub pixels: u32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            show_maze: true,
            pixels: 800,
        }
    }
}

/// Draws in normalized space through the `viewBox`, with the column coordinate on the horizontal axis.
pub fn render(maze: &Maze, engine: &VisibilityEngine, options: RenderOptions) -> String {
    let mut w = XmlWriter::new(Options::default());
    w.start_element("svg");
    w.write_attribute("xmlns", "http://www.w3.org/2000/svg");
    w.write_attribute("width", &options.pixels);
    w.write_attribute("height", &options.pixels);
    w.write_attribute("viewBox", "0 0 1 1");

    if options.show_maze {
        w.start_element("g");
        w.write_attribute("id", "maze");
        write_polygon(&mut w, maze.polygon(), MAZE_FILL, "#000", 1.0);
        write_dots(&mut w, maze.polygon().vertices(), MAZE_DOT, 1.0);
        w.end_element();
    }

    w.start_element("g");
    w.write_attribute("id", "light");
    write_dots(&mut w, &[engine.viewpoint()], LIGHT, LIGHT_OPACITY);
    if !engine.visible().is_empty() {
        write_polygon(&mut w, engine.visible(), LIGHT, LIGHT, LIGHT_OPACITY);
        write_dots(&mut w, engine.visible().vertices(), LIGHT, LIGHT_OPACITY);
    }
    w.end_element();

    w.end_document()
}

fn write_polygon(w: &mut XmlWriter, polygon: &Polygon, fill: &str, stroke: &str, opacity: f64) {
    w.start_element("path");
    w.write_attribute("d", &path_data(polygon));
    w.write_attribute("fill", fill);
    w.write_attribute("fill-opacity", &opacity);
    w.write_attribute("stroke", stroke);
    w.write_attribute("stroke-width", &STROKE_WIDTH);
    w.end_element();
}

fn write_dots(w: &mut XmlWriter, points: &[Point], fill: &str, opacity: f64) {
    for point in points {
        w.start_element("circle");
        w.write_attribute("cx", &point.x);
        w.write_attribute("cy", &point.y);
        w.write_attribute("r", &DOT_RADIUS);
        w.write_attribute("fill", fill);
        w.write_attribute("fill-opacity", &opacity);
        w.end_element();
    }
}

fn path_data(polygon: &Polygon) -> String {
    let mut d = String::new();
    for (i, point) in polygon.vertices().iter().enumerate() {
        let command = if i == 0 { 'M' } else { 'L' };
        let _ = write!(d, "{command}{} {} ", point.x, point.y);
    }
    d.push('Z');
    d
}
