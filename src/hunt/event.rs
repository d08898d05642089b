//! Session events
//!
//! The session never calls into the HUD or the logger directly. It records
//! events during the frame and the app drains them afterwards:
//! 1. Player taps a stag -> `TargetFound`
//! 2. HUD reads `TargetFound` -> pops the matching score icon
//! 3. App logs every event

/// How a round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Every target was found in time
    AllFound,
    /// The countdown reached zero
    TimeUp,
}

impl Outcome {
    pub fn is_win(self) -> bool {
        self == Outcome::AllFound
    }

    /// Dialog headline
    pub fn title(self) -> &'static str {
        match self {
            Outcome::AllFound => "Congratulations!",
            Outcome::TimeUp => "Game Over",
        }
    }

    /// Dialog body line
    pub fn detail(self) -> &'static str {
        match self {
            Outcome::AllFound => "You've found all the stags!",
            Outcome::TimeUp => "Time's up!",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HuntEvent {
    /// A target was found; `score` is the new score
    TargetFound { index: usize, score: usize },
    /// One second of play time passed
    SecondElapsed { remaining: u32 },
    Finished(Outcome),
    Paused,
    Resumed,
}
