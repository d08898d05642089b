//! Whole-second countdown
//!
//! Frame deltas are accumulated and converted into whole seconds, so the
//! clock ticks once per second of (unpaused) play time no matter the frame
//! rate.

#[derive(Debug, Clone)]
pub struct Countdown {
    limit: u32,
    remaining: u32,
    /// Partial second carried between frames
    carry: f32,
}

impl Countdown {
    pub fn new(limit_secs: u32) -> Self {
        Self {
            limit: limit_secs,
            remaining: limit_secs,
            carry: 0.0,
        }
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn is_expired(&self) -> bool {
        self.remaining == 0
    }

    pub fn reset(&mut self) {
        self.remaining = self.limit;
        self.carry = 0.0;
    }

    /// Advance by `dt` seconds and return how many whole seconds elapsed
    pub fn tick(&mut self, dt: f32) -> u32 {
        if self.remaining == 0 || !dt.is_finite() || dt <= 0.0 {
            return 0;
        }
        self.carry += dt;
        let whole = self.carry.floor();
        self.carry -= whole;

        let elapsed = (whole as u32).min(self.remaining);
        self.remaining -= elapsed;
        if self.remaining == 0 {
            self.carry = 0.0;
        }
        elapsed
    }

    /// `MM:SS`, zero padded
    pub fn format_clock(&self) -> String {
        format_clock(self.remaining)
    }
}

pub fn format_clock(secs: u32) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}
