//! Pointer and keyboard input
//!
//! Mouse and touch input are flattened into `PointerEvent`s each frame, then
//! fed to the `GestureTracker` which turns them into camera pan and zoom.
//! Keyboard input is exposed as `Action`s.

mod actions;
mod gesture;
mod pointer;

pub use actions::*;
pub use gesture::GestureTracker;
pub use pointer::*;
