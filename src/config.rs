use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result, ensure};
use serde::{Deserialize, Serialize};

use crate::game::{Cell, Mode, Rect};

const DEFAULT_CANVAS_SIZE: i32 = 400;
const DEFAULT_TILE_SIZE: i32 = 20;
const DEFAULT_OBSTACLE_SIZE: i32 = 80;

/// Tick period of each mode, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TickIntervals {
    pub classic: u64,
    pub free: u64,
    pub obstacle: u64,
}

impl Default for TickIntervals {
    fn default() -> Self {
        Self { classic: 120, free: 100, obstacle: 150 }
    }
}

impl TickIntervals {
    pub fn for_mode(&self, mode: Mode) -> Duration {
        let ms = match mode {
            Mode::Classic => self.classic,
            Mode::Free => self.free,
            Mode::Obstacle => self.obstacle,
        };
        Duration::from_millis(ms)
    }
}

/// Board geometry and pacing, read from an optional JSON file.
///
/// Every field may be omitted; omitted fields keep their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub canvas_width: i32,
    pub canvas_height: i32,
    pub tile_size: i32,
    pub start_cell: Cell,
    /// Obstacle block in pixels. Centred on the canvas when absent.
    pub obstacle: Option<Rect>,
    pub tick_ms: TickIntervals,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            canvas_width: DEFAULT_CANVAS_SIZE,
            canvas_height: DEFAULT_CANVAS_SIZE,
            tile_size: DEFAULT_TILE_SIZE,
            start_cell: Cell::new(5, 5),
            obstacle: None,
            tick_ms: TickIntervals::default(),
        }
    }
}

impl Settings {
    /// Defaults when `path` is `None`, otherwise the parsed and validated file.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let settings = match path {
            Some(path) => {
                let text = fs::read_to_string(path)
                    .with_context(|| format!("Failed to read config file {}", path.display()))?;
                Self::from_json(&text)
                    .with_context(|| format!("Invalid config file {}", path.display()))?
            }
            None => Self::default(),
        };
        Ok(settings)
    }

    pub fn from_json(text: &str) -> Result<Self> {
        let settings: Settings = serde_json::from_str(text).context("Failed to parse settings JSON")?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn grid_width(&self) -> i32 {
        self.canvas_width / self.tile_size
    }

    pub fn grid_height(&self) -> i32 {
        self.canvas_height / self.tile_size
    }

    pub fn obstacle_rect(&self) -> Rect {
        self.obstacle.unwrap_or(Rect::new(
            self.canvas_width / 2 - DEFAULT_OBSTACLE_SIZE / 2,
            self.canvas_height / 2 - DEFAULT_OBSTACLE_SIZE / 2,
            DEFAULT_OBSTACLE_SIZE,
            DEFAULT_OBSTACLE_SIZE,
        ))
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(self.tile_size > 0, "tile_size must be positive, got {}", self.tile_size);
        ensure!(
            self.canvas_width >= self.tile_size && self.canvas_height >= self.tile_size,
            "canvas {}x{} is smaller than one {}px tile",
            self.canvas_width,
            self.canvas_height,
            self.tile_size
        );
        let start = self.start_cell;
        ensure!(
            (0..self.grid_width()).contains(&start.x) && (0..self.grid_height()).contains(&start.y),
            "start_cell ({}, {}) lies outside the {}x{} grid",
            start.x,
            start.y,
            self.grid_width(),
            self.grid_height()
        );
        ensure!(
            !start.to_rect(self.tile_size).intersects(&self.obstacle_rect()),
            "start_cell ({}, {}) lies inside the obstacle",
            start.x,
            start.y
        );
        for mode in Mode::all() {
            ensure!(
                !self.tick_ms.for_mode(mode).is_zero(),
                "tick interval for {mode} mode must be positive"
            );
        }
        Ok(())
    }
}
