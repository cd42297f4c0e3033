use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result, ensure};
use serde::{Deserialize, Deserializer};

use crate::carousel::{CarouselOptions, DEFAULT_INTERVAL, DEFAULT_LABEL};
use crate::slide::{self, SlideSpec};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct CarouselConfig {
    /// Slides in display order. Missing key means the demo set; an explicit
    /// empty list means no slides.
    #[serde(default = "CarouselConfig::default_slides")]
    pub slides: Vec<SlideSpec>,
    /// Start rotating as soon as the carousel is up.
    #[serde(default)]
    pub auto_rotation: bool,
    /// Rotation period: bare milliseconds (`5000`) or a humantime string
    /// (`5s`, `1500ms`).
    #[serde(
        default = "CarouselConfig::default_time_interval",
        deserialize_with = "deserialize_interval"
    )]
    pub time_interval: Duration,
    /// Accessible name of the carousel.
    #[serde(default = "CarouselConfig::default_label")]
    pub label: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum IntervalRepr {
    Millis(u64),
    Human(#[serde(with = "humantime_serde")] Duration),
}

fn deserialize_interval<'de, D>(deserializer: D) -> Result<Duration, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match IntervalRepr::deserialize(deserializer)? {
        IntervalRepr::Millis(ms) => Duration::from_millis(ms),
        IntervalRepr::Human(d) => d,
    })
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            slides: Self::default_slides(),
            auto_rotation: false,
            time_interval: Self::default_time_interval(),
            label: Self::default_label(),
        }
    }
}

impl CarouselConfig {
    fn default_slides() -> Vec<SlideSpec> {
        slide::demo_slides().iter().map(SlideSpec::from).collect()
    }

    const fn default_time_interval() -> Duration {
        DEFAULT_INTERVAL
    }

    fn default_label() -> String {
        DEFAULT_LABEL.to_string()
    }

    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let s = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&s)
    }

    pub fn from_yaml_str(s: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Reject a zero interval, a blank label and slides without a url.
    pub fn validated(self) -> Result<Self> {
        ensure!(
            !self.time_interval.is_zero(),
            "time-interval must be greater than zero"
        );
        ensure!(!self.label.trim().is_empty(), "label must not be empty");
        for (idx, spec) in self.slides.iter().enumerate() {
            ensure!(
                !spec.url.trim().is_empty(),
                "slides[{idx}].url must not be empty"
            );
        }
        Ok(self)
    }

    /// Resolve into carousel construction parameters.
    pub fn options(&self) -> Result<CarouselOptions> {
        let slides = slide::normalize(self.slides.clone()).context("invalid slides")?;
        Ok(CarouselOptions {
            slides,
            auto_rotation: self.auto_rotation,
            interval: self.time_interval,
            label: self.label.trim().to_string(),
        })
    }
}
