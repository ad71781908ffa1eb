use anyhow::{Context, Result};
use clap::ArgMatches;
use ndarray::Array1;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;
use std::str::FromStr;

use mplot_core::math::arange;
use mplot_core::RangeError;

use crate::util::validate_html_file;

/// Which demonstration plot to render.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DemoKind {
    Simple,
    Multiple,
    Subplots,
    Contour,
    Surface,
}

impl Default for DemoKind {
    fn default() -> Self {
        DemoKind::Contour
    }
}

impl FromStr for DemoKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "simple" => Ok(DemoKind::Simple),
            "multiple" => Ok(DemoKind::Multiple),
            "subplots" => Ok(DemoKind::Subplots),
            "contour" => Ok(DemoKind::Contour),
            "surface" => Ok(DemoKind::Surface),
            _ => Err(format!(
                "Unknown demo kind: {}. Expected one of simple, multiple, subplots, contour, surface",
                s
            )),
        }
    }
}

impl fmt::Display for DemoKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DemoKind::Simple => "simple",
            DemoKind::Multiple => "multiple",
            DemoKind::Subplots => "subplots",
            DemoKind::Contour => "contour",
            DemoKind::Surface => "surface",
        };
        write!(f, "{}", name)
    }
}

/// `arange` arguments as they appear in the config file.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq)]
pub struct RangeConfig {
    pub start: f64,
    pub stop: f64,
    pub step: f64,
}

impl RangeConfig {
    pub fn new(start: f64, stop: f64, step: f64) -> Self {
        Self { start, stop, step }
    }

    pub fn generate(&self) -> Result<Array1<f64>, RangeError> {
        arange(self.start, self.stop, self.step)
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DemoConfig {
    pub version: String,
    pub kind: DemoKind,
    pub title: String,
    pub output_file: String,
    pub x_range: RangeConfig,
    pub y_range: RangeConfig,
}

impl DemoConfig {
    /// Defaults reproducing the data of each demonstration program.
    pub fn for_kind(kind: DemoKind) -> Self {
        let (title, x_range, y_range) = match kind {
            DemoKind::Simple => (
                "simple",
                RangeConfig::new(0.0, 4.0, 1.0),
                RangeConfig::new(0.0, 4.0, 1.0),
            ),
            DemoKind::Multiple => (
                "Multiple curves",
                RangeConfig::new(0.0, 2.01, 0.02),
                RangeConfig::new(0.0, 2.01, 0.02),
            ),
            DemoKind::Subplots => (
                "Subplots",
                RangeConfig::new(0.0, 2.01, 0.02),
                RangeConfig::new(0.0, 2.01, 0.02),
            ),
            DemoKind::Contour => (
                "Shaded contours",
                RangeConfig::new(-3.0, 3.0001, 0.025),
                RangeConfig::new(-2.0, 2.0001, 0.025),
            ),
            DemoKind::Surface => (
                "Surface",
                RangeConfig::new(-5.0, 5.01, 0.25),
                RangeConfig::new(-5.0, 5.01, 0.25),
            ),
        };

        DemoConfig {
            version: clap::crate_version!().to_string(),
            kind,
            title: title.to_string(),
            output_file: format!("mplot_{}.html", kind),
            x_range,
            y_range,
        }
    }

    /// Load a config file (if given), falling back to per-kind defaults for
    /// missing or invalid fields, then apply command line overrides.
    pub fn from_arguments(config_path: Option<&PathBuf>, matches: &ArgMatches) -> Result<Self> {
        let partial: serde_json::Value = match config_path {
            Some(path) => {
                let config_json = fs::read_to_string(path)
                    .with_context(|| format!("Failed to read config file: {:?}", path))?;
                serde_json::from_str(&config_json)
                    .with_context(|| format!("Failed to parse config file: {:?}", path))?
            }
            None => serde_json::Value::Object(Default::default()),
        };

        let kind = match matches.get_one::<String>("kind") {
            Some(kind) => DemoKind::from_str(kind).map_err(anyhow::Error::msg)?,
            None => match partial.get("kind") {
                Some(val) => serde_json::from_value(val.clone()).unwrap_or_else(|_| {
                    log::warn!(
                        "Config Invalid value for 'kind', using default: {:?}",
                        DemoKind::default()
                    );
                    DemoKind::default()
                }),
                None => {
                    if config_path.is_some() {
                        log::warn!(
                            "Config Missing field 'kind', using default: {:?}",
                            DemoKind::default()
                        );
                    }
                    DemoKind::default()
                }
            },
        };
        let mut config = DemoConfig::for_kind(kind);

        if config_path.is_some() {
            macro_rules! load_or_default {
                ($field:ident) => {
                    if let Some(val) = partial.get(stringify!($field)) {
                        if let Ok(parsed) = serde_json::from_value(val.clone()) {
                            config.$field = parsed;
                        } else {
                            log::warn!(
                                "Config Invalid value for '{}', using default: {:?}",
                                stringify!($field),
                                config.$field
                            );
                        }
                    } else {
                        log::warn!(
                            "Config Missing field '{}', using default: {:?}",
                            stringify!($field),
                            config.$field
                        );
                    }
                };
            }

            load_or_default!(title);
            load_or_default!(output_file);
            load_or_default!(x_range);
            load_or_default!(y_range);
        }

        // Apply CLI overrides
        if let Some(output_file) = matches.get_one::<String>("output_file") {
            config.output_file = output_file.clone();
        }
        if let Some(title) = matches.get_one::<String>("title") {
            config.title = title.clone();
        }

        validate_html_file(&config.output_file)?;
        Ok(config)
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        DemoConfig::for_kind(DemoKind::default())
    }
}
