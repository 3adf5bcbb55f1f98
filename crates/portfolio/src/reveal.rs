//! Fade-in reveal frames.
//!
//! A block fades in and slides into place the first time it becomes visible, and
//! fades back out when it leaves. The host animates between the two frames with a
//! CSS transition.

use std::time::Duration;

use crate::config::RevealConfig;

/// Direction a block travels while it is revealed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RevealAxis {
    /// Starts below its resting place and rises.
    #[default]
    Up,
    /// Starts left of its resting place and slides right.
    Left,
}

/// How one block is revealed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Reveal {
    pub axis: RevealAxis,
    pub delay: Duration,
}

impl Reveal {
    pub fn up() -> Self {
        Self::default()
    }

    pub fn left() -> Self {
        Self {
            axis: RevealAxis::Left,
            delay: Duration::ZERO,
        }
    }

    pub fn delay_ms(mut self, ms: u32) -> Self {
        self.delay = Duration::from_millis(u64::from(ms));
        self
    }

    /// The resting or hidden frame for the given visibility.
    pub fn frame(&self, visible: bool, config: &RevealConfig) -> RevealFrame {
        if visible {
            return RevealFrame::SHOWN;
        }
        let (offset_x, offset_y) = match self.axis {
            RevealAxis::Up => (0.0, config.distance),
            RevealAxis::Left => (-config.distance, 0.0),
        };
        RevealFrame {
            opacity: 0.0,
            offset_x,
            offset_y,
        }
    }

    pub fn transition(&self, config: &RevealConfig) -> RevealTransition {
        RevealTransition {
            duration: Duration::from_millis(u64::from(config.duration_ms)),
            delay: self.delay,
        }
    }
}

/// Opacity and translation of a block, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealFrame {
    pub opacity: f32,
    pub offset_x: f32,
    pub offset_y: f32,
}

impl RevealFrame {
    pub const SHOWN: Self = Self {
        opacity: 1.0,
        offset_x: 0.0,
        offset_y: 0.0,
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealTransition {
    pub duration: Duration,
    pub delay: Duration,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_up_frame_sits_below() {
        let config = RevealConfig::default();
        let frame = Reveal::up().frame(false, &config);
        assert_eq!(
            frame,
            RevealFrame {
                opacity: 0.0,
                offset_x: 0.0,
                offset_y: 40.0
            }
        );
    }

    #[test]
    fn hidden_left_frame_sits_left() {
        let config = RevealConfig::default();
        let frame = Reveal::left().frame(false, &config);
        assert_eq!(frame.offset_x, -40.0);
        assert_eq!(frame.offset_y, 0.0);
    }

    #[test]
    fn visible_frame_is_at_rest() {
        let config = RevealConfig::default();
        assert_eq!(Reveal::left().frame(true, &config), RevealFrame::SHOWN);
        assert_eq!(Reveal::up().frame(true, &config), RevealFrame::SHOWN);
    }

    #[test]
    fn transition_carries_delay() {
        let config = RevealConfig::default();
        let transition = Reveal::up().delay_ms(200).transition(&config);
        assert_eq!(transition.duration, Duration::from_millis(1000));
        assert_eq!(transition.delay, Duration::from_millis(200));
    }
}
