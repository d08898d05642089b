//! Hidden-object round logic
//!
//! - `HuntSession`: score, countdown, pause and outcome for one round
//! - `HiddenTarget`: a stag on the map and its hit area
//! - `Countdown`: whole-second timer
//! - `Pulse`: the animation played on a found stag
//! - `HuntEvent` / `Outcome`: what happened this frame

mod countdown;
mod event;
mod pulse;
mod session;
mod target;

pub use countdown::{format_clock, Countdown};
pub use event::{HuntEvent, Outcome};
pub use pulse::Pulse;
pub use session::HuntSession;
pub use target::{HiddenTarget, FALLBACK_TARGET_SIZE};
