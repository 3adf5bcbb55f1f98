//! Behaviour configuration for the page.
//!
//! Every field has a default, so an empty document yields the stock behaviour.
//! The site ships `content/site.toml`, loaded by [`PortfolioConfig::embedded`].

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

const EMBEDDED_CONFIG: &str = include_str!("../content/site.toml");

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PortfolioConfig {
    pub scroll: ScrollConfig,
    pub typewriter: TypewriterConfig,
    pub reveal: RevealConfig,
}

/// Scroll tracker thresholds, in CSS pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScrollConfig {
    /// The nav bar appears once `scrollTop > innerHeight - hero_margin`.
    pub hero_margin: f64,
    /// The scroll-to-top control appears once within this distance of the bottom.
    pub bottom_margin: f64,
    /// Height of the fixed header, subtracted from nav scroll targets.
    pub header_offset: f64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            hero_margin: 100.0,
            bottom_margin: 100.0,
            header_offset: 80.0,
        }
    }
}

/// Typing effect timers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TypewriterConfig {
    pub tick_ms: u64,
    pub cursor_blink_ms: u64,
}

impl TypewriterConfig {
    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    pub fn cursor_blink(&self) -> Duration {
        Duration::from_millis(self.cursor_blink_ms)
    }
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        Self {
            tick_ms: 100,
            cursor_blink_ms: 530,
        }
    }
}

/// Fade-in reveal settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RevealConfig {
    /// Fraction of the element that must intersect the viewport.
    pub threshold: f32,
    pub duration_ms: u32,
    /// Travel of the hidden frame, in CSS pixels.
    pub distance: f32,
    pub heading_delay_ms: u32,
    pub card_stagger_ms: u32,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: crate::visibility::DEFAULT_THRESHOLD,
            duration_ms: 1000,
            distance: 40.0,
            heading_delay_ms: 200,
            card_stagger_ms: 100,
        }
    }
}

impl PortfolioConfig {
    /// Parses and validates a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self = toml::from_str(source).map_err(Error::Config)?;
        config.validate()?;
        Ok(config)
    }

    /// The configuration compiled into the crate.
    pub fn embedded() -> Result<Self> {
        Self::from_toml_str(EMBEDDED_CONFIG)
    }

    pub fn validate(&self) -> Result<()> {
        let threshold = self.reveal.threshold;
        if !(0.0..=1.0).contains(&threshold) {
            return Err(Error::InvalidThreshold(threshold));
        }
        if self.typewriter.tick_ms == 0 {
            return Err(Error::ZeroInterval("typewriter tick"));
        }
        if self.typewriter.cursor_blink_ms == 0 {
            return Err(Error::ZeroInterval("cursor blink"));
        }
        Ok(())
    }
}
