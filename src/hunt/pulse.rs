//! Found-target pulse
//!
//! Linear grow-and-shrink: the scale factor rises from 1 to `peak` over one
//! half period, falls back over the next, and the whole cycle plays
//! `1 + repeats` times.

use crate::config::PulseConfig;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pulse {
    peak: f32,
    half_period: f32,
    cycles: u32,
    elapsed: f32,
}

impl Pulse {
    pub fn new(config: &PulseConfig) -> Self {
        Self {
            peak: config.scale,
            half_period: config.half_period_secs.max(0.0),
            cycles: config.repeats.saturating_add(1),
            elapsed: 0.0,
        }
    }

    /// Total running time in seconds
    pub fn duration(&self) -> f32 {
        self.half_period * 2.0 * self.cycles as f32
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration()
    }

    pub fn advance(&mut self, dt: f32) {
        if dt.is_finite() && dt > 0.0 {
            self.elapsed = (self.elapsed + dt).min(self.duration());
        }
    }

    /// Current multiplier on the target's base scale
    pub fn factor(&self) -> f32 {
        if self.is_finished() {
            return 1.0;
        }
        let cycle = self.half_period * 2.0;
        let phase = (self.elapsed % cycle) / self.half_period;
        if phase <= 1.0 {
            1.0 + (self.peak - 1.0) * phase
        } else {
            self.peak + (1.0 - self.peak) * (phase - 1.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pulse() -> Pulse {
        Pulse::new(&PulseConfig::default())
    }

    #[test]
    fn test_default_runs_two_cycles() {
        let p = pulse();
        assert!((p.duration() - 0.8).abs() < 0.001);
        assert!((p.factor() - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_peaks_at_half_period() {
        let mut p = pulse();
        p.advance(0.2);
        assert!((p.factor() - 1.2).abs() < 0.001);
        p.advance(0.1);
        assert!((p.factor() - 1.1).abs() < 0.001);
        // Second cycle peak
        p.advance(0.3);
        assert!((p.factor() - 1.2).abs() < 0.001);
    }

    #[test]
    fn test_finishes_at_rest() {
        let mut p = pulse();
        p.advance(5.0);
        assert!(p.is_finished());
        assert!((p.factor() - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_zero_period_is_finished_immediately() {
        let p = Pulse::new(&PulseConfig { scale: 1.2, half_period_secs: 0.0, repeats: 3 });
        assert!(p.is_finished());
        assert!((p.factor() - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_max_repeats_does_not_overflow() {
        let mut p = Pulse::new(&PulseConfig { scale: 1.2, half_period_secs: 0.2, repeats: u32::MAX });
        assert!(p.duration() > 0.8);
        p.advance(0.2);
        assert!((p.factor() - 1.2).abs() < 0.001);
        assert!(!p.is_finished());
    }
}
