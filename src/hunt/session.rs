//! Round state
//!
//! Score, countdown, pause flag and outcome for one round. Everything here is
//! plain data driven by `press` and `tick`, with no engine calls.

use macroquad::math::Vec2;
use crate::config::{HuntConfig, PulseConfig};
use super::{Countdown, HiddenTarget, HuntEvent, Outcome, FALLBACK_TARGET_SIZE};

pub struct HuntSession {
    targets: Vec<HiddenTarget>,
    score: usize,
    countdown: Countdown,
    paused: bool,
    outcome: Option<Outcome>,
    pulse: PulseConfig,
    /// Events since the last `drain_events`
    events: Vec<HuntEvent>,
}

impl HuntSession {
    /// `sizes[i]` is the texture size of target `i`; missing entries use
    /// `FALLBACK_TARGET_SIZE`
    pub fn new(config: &HuntConfig, sizes: &[Vec2]) -> Self {
        let targets = config
            .targets
            .iter()
            .enumerate()
            .map(|(i, def)| {
                let size = sizes.get(i).copied().unwrap_or(FALLBACK_TARGET_SIZE);
                HiddenTarget::new(i, def, size)
            })
            .collect();

        Self {
            targets,
            score: 0,
            countdown: Countdown::new(config.time_limit_secs),
            paused: false,
            outcome: None,
            pulse: config.pulse,
            events: Vec::new(),
        }
    }

    pub fn events(&self) -> &[HuntEvent] {
        &self.events
    }

    pub fn drain_events(&mut self) -> std::vec::Drain<'_, HuntEvent> {
        self.events.drain(..)
    }

    pub fn targets(&self) -> &[HiddenTarget] {
        &self.targets
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn target_count(&self) -> usize {
        self.targets.len()
    }

    pub fn time_left(&self) -> u32 {
        self.countdown.remaining()
    }

    pub fn clock(&self) -> String {
        self.countdown.format_clock()
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Presses and camera gestures only count while playing
    pub fn accepts_input(&self) -> bool {
        !self.paused && self.outcome.is_none()
    }

    /// Handle a press at a world position. Returns the index of a newly found
    /// target. The last defined target wins where targets overlap.
    pub fn press(&mut self, world: Vec2) -> Option<usize> {
        if !self.accepts_input() {
            return None;
        }

        let index = self
            .targets
            .iter()
            .rev()
            .find(|t| !t.is_found() && t.contains(world))
            .map(|t| t.index)?;

        self.targets[index].mark_found(&self.pulse);
        self.score += 1;
        self.events.push(HuntEvent::TargetFound { index, score: self.score });

        if self.score == self.targets.len() {
            self.finish(Outcome::AllFound);
        }
        Some(index)
    }

    pub fn tick(&mut self, dt: f32) {
        if self.paused {
            return;
        }
        for target in &mut self.targets {
            target.advance_pulse(dt);
        }
        if self.outcome.is_some() {
            return;
        }

        let elapsed = self.countdown.tick(dt);
        let remaining = self.countdown.remaining();
        for step in (0..elapsed).rev() {
            self.events.push(HuntEvent::SecondElapsed { remaining: remaining + step });
        }
        if self.countdown.is_expired() {
            self.finish(Outcome::TimeUp);
        }
    }

    /// Returns true if the session was playing and is now paused
    pub fn pause(&mut self) -> bool {
        if self.paused {
            return false;
        }
        self.paused = true;
        self.events.push(HuntEvent::Paused);
        true
    }

    /// Returns true if the session was paused and now runs again
    pub fn resume(&mut self) -> bool {
        if !self.paused {
            return false;
        }
        self.paused = false;
        self.events.push(HuntEvent::Resumed);
        true
    }

    /// Start the round over with the same targets
    pub fn restart(&mut self) {
        for target in &mut self.targets {
            target.reset();
        }
        self.score = 0;
        self.countdown.reset();
        self.paused = false;
        self.outcome = None;
        self.events.clear();
    }

    fn finish(&mut self, outcome: Outcome) {
        if self.outcome.is_none() {
            self.outcome = Some(outcome);
            self.events.push(HuntEvent::Finished(outcome));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use macroquad::math::vec2;

    fn session() -> HuntSession {
        let config = HuntConfig::embedded().unwrap();
        HuntSession::new(&config, &[vec2(200.0, 200.0); 5])
    }

    fn centers(session: &HuntSession) -> Vec<Vec2> {
        session.targets().iter().map(|t| t.position).collect()
    }

    #[test]
    fn test_press_scores_once_per_target() {
        let mut s = session();
        let first = s.targets()[0].position;

        assert_eq!(s.press(first), Some(0));
        assert_eq!(s.score(), 1);
        assert_eq!(s.press(first), None);
        assert_eq!(s.score(), 1);

        let found: Vec<_> = s.drain_events().collect();
        assert_eq!(found, vec![HuntEvent::TargetFound { index: 0, score: 1 }]);
    }

    #[test]
    fn test_events_kept_in_order_until_drained() {
        let mut s = session();
        let first = s.targets()[0].position;
        s.press(first);
        s.pause();
        s.resume();
        assert_eq!(
            s.events(),
            &[
                HuntEvent::TargetFound { index: 0, score: 1 },
                HuntEvent::Paused,
                HuntEvent::Resumed,
            ]
        );
        assert_eq!(s.drain_events().count(), 3);
        assert!(s.events().is_empty());
    }

    #[test]
    fn test_miss_does_nothing() {
        let mut s = session();
        assert_eq!(s.press(vec2(5.0, 5.0)), None);
        assert_eq!(s.score(), 0);
        assert!(s.events().is_empty());
    }

    #[test]
    fn test_finding_all_wins() {
        let mut s = session();
        for (i, center) in centers(&s).into_iter().enumerate() {
            assert_eq!(s.press(center), Some(i));
        }
        assert_eq!(s.score(), 5);
        assert_eq!(s.outcome(), Some(Outcome::AllFound));
        assert!(s.events().iter().any(|e| *e == HuntEvent::Finished(Outcome::AllFound)));
    }

    #[test]
    fn test_time_up_loses_and_blocks_presses() {
        let mut s = session();
        for _ in 0..44 {
            s.tick(1.0);
        }
        assert_eq!(s.time_left(), 1);
        assert!(!s.is_over());

        s.tick(1.0);
        assert_eq!(s.outcome(), Some(Outcome::TimeUp));
        assert_eq!(s.clock(), "00:00");

        let first = s.targets()[0].position;
        assert_eq!(s.press(first), None);
        assert_eq!(s.score(), 0);
    }

    #[test]
    fn test_clock_stops_after_win() {
        let mut s = session();
        for center in centers(&s) {
            s.press(center);
        }
        let left = s.time_left();
        s.tick(10.0);
        assert_eq!(s.time_left(), left);
    }

    #[test]
    fn test_second_events_count_down() {
        let mut s = session();
        s.tick(2.5);
        let ticks: Vec<_> = s.drain_events().collect();
        assert_eq!(
            ticks,
            vec![
                HuntEvent::SecondElapsed { remaining: 44 },
                HuntEvent::SecondElapsed { remaining: 43 },
            ]
        );
    }

    #[test]
    fn test_paused_ignores_presses_and_time() {
        let mut s = session();
        assert!(s.pause());
        assert!(!s.pause());

        s.tick(5.0);
        assert_eq!(s.time_left(), 45);
        let first = s.targets()[0].position;
        assert_eq!(s.press(first), None);

        assert!(s.resume());
        assert!(!s.resume());
        assert_eq!(s.press(first), Some(0));

        let kinds: Vec<_> = s.drain_events().collect();
        assert_eq!(kinds[0], HuntEvent::Paused);
        assert_eq!(kinds[1], HuntEvent::Resumed);
    }

    #[test]
    fn test_overlapping_targets_prefer_last() {
        let mut config = HuntConfig::embedded().unwrap();
        config.targets[1].x = config.targets[0].x;
        config.targets[1].y = config.targets[0].y;
        let mut s = HuntSession::new(&config, &[vec2(200.0, 200.0); 5]);

        let spot = s.targets()[0].position;
        assert_eq!(s.press(spot), Some(1));
        assert_eq!(s.press(spot), Some(0));
        assert_eq!(s.score(), 2);
    }

    #[test]
    fn test_missing_sizes_use_fallback() {
        let config = HuntConfig::embedded().unwrap();
        let s = HuntSession::new(&config, &[]);
        assert_eq!(s.targets()[4].size, FALLBACK_TARGET_SIZE);
    }

    #[test]
    fn test_restart() {
        let mut s = session();
        let first = s.targets()[0].position;
        s.press(first);
        s.tick(50.0);
        assert!(s.is_over());

        s.restart();
        assert_eq!(s.score(), 0);
        assert_eq!(s.time_left(), 45);
        assert!(!s.is_over());
        assert!(s.events().is_empty());
        assert_eq!(s.press(first), Some(0));
    }
}
