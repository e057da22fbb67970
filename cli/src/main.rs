use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use mazesight_core::*;
use serde::Serialize;

use svg::RenderOptions;
use viewport::{Viewport, parse_pair};

mod svg;
mod viewport;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Cells along each side of the grid
    #[arg(short = 'n', long, default_value_t = 5)]
    size: Coord,

    /// Wall inset as a fraction of a cell, between 0 and 0.5
    #[arg(short, long, default_value_t = 0.25)]
    margin: f64,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// Write to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the maze outline and start point as JSON
    Outline,
    /// Print what a viewpoint sees as JSON
    Sight {
        #[command(flatten)]
        view: ViewArgs,
    },
    /// Draw the maze and the lit region as SVG
    Render {
        #[command(flatten)]
        view: ViewArgs,

        /// Leave the maze outline out of the drawing
        #[arg(long)]
        hide_maze: bool,

        /// Width and height of the drawing
        #[arg(long, default_value_t = 800)]
        pixels: u32,
    },
}

#[derive(clap::Args, Debug, Default)]
struct ViewArgs {
    /// Viewpoint in normalized space as `Y,X`
    #[arg(long, value_parser = parse_pair, conflicts_with = "pointer")]
    at: Option<(f64, f64)>,

    /// Pointer position in pixels as `X,Y`
    #[arg(long, value_parser = parse_pair, requires = "canvas")]
    pointer: Option<(f64, f64)>,

    /// Canvas size in pixels as `W,H`
    #[arg(long, value_parser = parse_pair)]
    canvas: Option<(f64, f64)>,
}

impl ViewArgs {
    fn viewpoint(&self, maze: &Maze) -> Result<Point> {
        match (self.at, self.pointer, self.canvas) {
            (Some((y, x)), _, _) => Ok(Point::new(y, x)),
            (None, Some((px, py)), Some((width, height))) => {
                Ok(Viewport::new(width, height)?.to_normalized(px, py))
            }
            _ => Ok(maze.start()),
        }
    }
}

#[derive(Serialize)]
struct OutlineReport<'a> {
    config: MazeConfig,
    seed: u64,
    start: Point,
    area: f64,
    polygon: &'a [Point],
}

#[derive(Serialize)]
struct SightReport<'a> {
    viewpoint: Point,
    inside: bool,
    area: f64,
    visible: &'a [Point],
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose.log_level_filter())?;

    let seed = args.seed.unwrap_or_else(rand::random);
    log::debug!("seed: {seed}");
    let config = MazeConfig::new(args.size, args.margin).context("Invalid maze parameters")?;
    let maze = Maze::random(config, seed).context("Could not build maze")?;

    let contents = match &args.command {
        Command::Outline => serde_json::to_string_pretty(&OutlineReport {
            config,
            seed,
            start: maze.start(),
            area: maze.polygon().area(),
            polygon: maze.polygon().vertices(),
        })?,
        Command::Sight { view } => {
            let engine = look(&maze, view)?;
            serde_json::to_string_pretty(&SightReport {
                viewpoint: engine.viewpoint(),
                inside: is_inside(maze.polygon(), engine.viewpoint()),
                area: engine.visible().area(),
                visible: engine.visible().vertices(),
            })?
        }
        Command::Render {
            view,
            hide_maze,
            pixels,
        } => {
            let engine = look(&maze, view)?;
            svg::render(
                &maze,
                &engine,
                RenderOptions {
                    show_maze: !hide_maze,
                    pixels: *pixels,
                },
            )
        }
    };

    emit(args.output.as_deref(), &contents)
}

fn look(maze: &Maze, view: &ViewArgs) -> Result<VisibilityEngine> {
    let mut engine = VisibilityEngine::new(maze);
    let viewpoint = view.viewpoint(maze)?;
    if !is_inside(maze.polygon(), viewpoint) {
        log::warn!("Viewpoint ({}, {}) is outside the maze", viewpoint.y, viewpoint.x);
    }
    engine.update(maze.polygon(), viewpoint);
    Ok(engine)
}

fn init_logging(level: log::LevelFilter) -> Result<()> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {}] {}",
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level)
        .chain(io::stderr())
        .apply()
        .context("Error initializing logger")
}

fn emit(output: Option<&Path>, contents: &str) -> Result<()> {
    match output {
        Some(path) => fs::write(path, contents)
            .with_context(|| format!("Could not write {}", path.display())),
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{contents}").context("Could not write to stdout")
        }
    }
}
