//! Declarative enter/pulse animations.
//!
//! A `Motion` describes an animation as data: where the element starts
//! (opacity, vertical offset), where it ends, how long it takes, and an
//! optional delay or repeat. Rendering lowers the config onto GPUI's
//! `Animation` primitive; callers never write per-frame code.

use std::time::Duration;

use gpui::{Animation, AnimationExt as _, ElementId, IntoElement, ParentElement, Styled, div, px};

/// Declarative animation config applied to a wrapper element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Motion {
    pub from_opacity: f32,
    pub to_opacity: f32,
    /// Starting vertical offset in pixels; animates to zero.
    pub from_offset_y: f32,
    pub duration: Duration,
    pub delay: Duration,
    /// Repeat forever, opacity following a 0 -> 1 -> 0 triangle per cycle.
    pub cycle: bool,
}

impl Motion {
    /// Fade in while rising from 20px below the resting position.
    pub fn rise() -> Self {
        Self {
            from_opacity: 0.0,
            to_opacity: 1.0,
            from_offset_y: 20.0,
            duration: Duration::from_millis(500),
            delay: Duration::ZERO,
            cycle: false,
        }
    }

    /// Fade in while dropping from 20px above the resting position.
    pub fn drop() -> Self {
        Self {
            from_offset_y: -20.0,
            ..Self::rise()
        }
    }

    /// Endless opacity pulse over a two second period.
    pub fn pulse() -> Self {
        Self {
            from_opacity: 0.0,
            to_opacity: 1.0,
            from_offset_y: 0.0,
            duration: Duration::from_millis(2000),
            delay: Duration::ZERO,
            cycle: true,
        }
    }

    /// Hold the starting values for `ms` before the animation begins.
    pub fn delayed_ms(mut self, ms: u64) -> Self {
        self.delay = Duration::from_millis(ms);
        self
    }

    /// Full animation span including the delay.
    pub fn span(&self) -> Duration {
        self.delay + self.duration
    }

    /// Evaluate the config at `delta` (0..=1 across the span).
    ///
    /// Returns `(opacity, offset_y)` for that instant.
    pub fn eval(&self, delta: f32) -> (f32, f32) {
        let delta = delta.clamp(0.0, 1.0);
        let t = if self.cycle {
            // Triangle wave: up during the first half cycle, back down
            // during the second.
            1.0 - (2.0 * delta - 1.0).abs()
        } else {
            let span = self.span().as_secs_f32();
            let hold = if span > 0.0 {
                self.delay.as_secs_f32() / span
            } else {
                0.0
            };
            if delta <= hold {
                0.0
            } else {
                ease_out_cubic((delta - hold) / (1.0 - hold))
            }
        };
        let opacity = self.from_opacity + (self.to_opacity - self.from_opacity) * t;
        let offset = self.from_offset_y * (1.0 - t);
        (opacity, offset)
    }

    /// Wrap `content` in a div animated by this config.
    pub fn animate(self, id: impl Into<ElementId>, content: impl IntoElement) -> impl IntoElement {
        let mut animation = Animation::new(self.span());
        if self.cycle {
            animation = animation.repeat();
        }
        div()
            .child(content)
            .with_animation(id, animation, move |el, delta| {
                let (opacity, offset) = self.eval(delta);
                el.opacity(opacity).mt(px(offset))
            })
    }
}

/// Smooth ease-out cubic.
fn ease_out_cubic(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(3)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rise_starts_hidden_and_offset() {
        let (opacity, offset) = Motion::rise().eval(0.0);
        assert_eq!(opacity, 0.0);
        assert_eq!(offset, 20.0);
    }

    #[test]
    fn test_rise_ends_at_rest() {
        let (opacity, offset) = Motion::rise().eval(1.0);
        assert_eq!(opacity, 1.0);
        assert_eq!(offset, 0.0);
    }

    #[test]
    fn test_drop_offsets_from_above() {
        let (_, offset) = Motion::drop().eval(0.0);
        assert_eq!(offset, -20.0);
    }

    #[test]
    fn test_delay_holds_initial_values() {
        // 200ms delay over a 500ms duration: the first 2/7 of the span
        // must stay at the starting values.
        let motion = Motion::rise().delayed_ms(200);
        let (opacity, offset) = motion.eval(0.25);
        assert_eq!(opacity, 0.0);
        assert_eq!(offset, 20.0);

        let (opacity, _) = motion.eval(0.5);
        assert!(opacity > 0.0);
    }

    #[test]
    fn test_delay_extends_span() {
        let motion = Motion::rise().delayed_ms(400);
        assert_eq!(motion.span(), Duration::from_millis(900));
    }

    #[test]
    fn test_pulse_peaks_mid_cycle_and_returns() {
        let pulse = Motion::pulse();
        assert_eq!(pulse.eval(0.0).0, 0.0);
        assert_eq!(pulse.eval(0.5).0, 1.0);
        assert_eq!(pulse.eval(1.0).0, 0.0);
    }

    #[test]
    fn test_pulse_is_symmetric() {
        let pulse = Motion::pulse();
        assert_eq!(pulse.eval(0.25).0, pulse.eval(0.75).0);
    }

    #[test]
    fn test_easing_is_monotonic() {
        let motion = Motion::rise();
        let mut last = -1.0;
        for step in 0..=10 {
            let (opacity, _) = motion.eval(step as f32 / 10.0);
            assert!(opacity >= last);
            last = opacity;
        }
    }
}
