//! Timetable configuration file support.
//!
//! This module reads the rendering scale used by the lane scheduler from a
//! TOML configuration file. Every setting has a default, so an empty file (or
//! no file at all, via [`TimetableConfig::default`]) is a valid configuration.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ScheduleError, ScheduleResult};

/// Timetable configuration from file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TimetableConfig {
    #[serde(default)]
    pub timeline: TimelineSettings,
}

/// Rendering scale for the arena timetable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineSettings {
    #[serde(default = "default_pixels_per_hour")]
    pub pixels_per_hour: f64,
    /// Gutter subtracted from each block's width so neighbours never touch.
    #[serde(default = "default_gap_pixels")]
    pub gap_pixels: f64,
    #[serde(default = "default_lane_height_pixels")]
    pub lane_height_pixels: f64,
    #[serde(default = "default_lane_gap_pixels")]
    pub lane_gap_pixels: f64,
    /// Minimum span of the rendered timeline, in hours.
    #[serde(default = "default_visible_hours")]
    pub visible_hours: u32,
    /// Furthest hour from the origin that gets a header tick.
    #[serde(default = "default_max_hours")]
    pub max_hours: u32,
}

fn default_pixels_per_hour() -> f64 {
    240.0
}

fn default_gap_pixels() -> f64 {
    4.0
}

fn default_lane_height_pixels() -> f64 {
    48.0
}

fn default_lane_gap_pixels() -> f64 {
    8.0
}

fn default_visible_hours() -> u32 {
    6
}

fn default_max_hours() -> u32 {
    168
}

impl Default for TimelineSettings {
    fn default() -> Self {
        Self {
            pixels_per_hour: default_pixels_per_hour(),
            gap_pixels: default_gap_pixels(),
            lane_height_pixels: default_lane_height_pixels(),
            lane_gap_pixels: default_lane_gap_pixels(),
            visible_hours: default_visible_hours(),
            max_hours: default_max_hours(),
        }
    }
}

impl TimelineSettings {
    /// Horizontal pixels per minute of timeline.
    pub fn pixels_per_minute(&self) -> f64 {
        self.pixels_per_hour / 60.0
    }

    /// Vertical distance between the tops of two adjacent lanes.
    pub fn lane_pitch(&self) -> f64 {
        self.lane_height_pixels + self.lane_gap_pixels
    }

    /// Reject scales that would produce meaningless geometry.
    pub fn validate(&self) -> ScheduleResult<()> {
        if !self.pixels_per_hour.is_finite() || self.pixels_per_hour <= 0.0 {
            return Err(ScheduleError::ValidationError(format!(
                "pixels_per_hour must be positive, got {}",
                self.pixels_per_hour
            )));
        }
        if self.max_hours < self.visible_hours {
            return Err(ScheduleError::ValidationError(format!(
                "max_hours ({}) must be at least visible_hours ({})",
                self.max_hours, self.visible_hours
            )));
        }
        let non_negative = [
            ("gap_pixels", self.gap_pixels),
            ("lane_height_pixels", self.lane_height_pixels),
            ("lane_gap_pixels", self.lane_gap_pixels),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(ScheduleError::ValidationError(format!(
                    "{} must be non-negative, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}

impl TimetableConfig {
    /// Parse configuration from TOML text.
    pub fn from_toml_str(content: &str) -> ScheduleResult<Self> {
        let config: TimetableConfig = toml::from_str(content).map_err(|e| {
            ScheduleError::ConfigurationError(format!("Failed to parse config file: {}", e))
        })?;

        config.timeline.validate().map_err(|e| {
            ScheduleError::ConfigurationError(format!("Invalid timeline settings: {}", e))
        })?;

        Ok(config)
    }

    /// Load timetable configuration from a TOML file.
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    /// * `Ok(TimetableConfig)` if successful
    /// * `Err(ScheduleError::ConfigurationError)` if the file cannot be read, parsed, or validated
    pub fn from_file<P: AsRef<Path>>(path: P) -> ScheduleResult<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            ScheduleError::ConfigurationError(format!("Failed to read config file: {}", e))
        })?;

        let config = Self::from_toml_str(&content)?;
        log::debug!("Loaded timetable config from {}", path.as_ref().display());
        Ok(config)
    }

    /// Load timetable configuration from the default location.
    ///
    /// Searches for `timeline.toml` in:
    /// 1. Current directory
    /// 2. `backend/` directory
    /// 3. Parent directory
    pub fn from_default_location() -> ScheduleResult<Self> {
        let search_paths = [
            PathBuf::from("timeline.toml"),
            PathBuf::from("backend/timeline.toml"),
            PathBuf::from("../timeline.toml"),
        ];

        for path in search_paths {
            if path.exists() {
                return Self::from_file(&path);
            }
        }

        Err(ScheduleError::ConfigurationError(
            "No timeline.toml found in standard locations".to_string(),
        ))
    }
}
