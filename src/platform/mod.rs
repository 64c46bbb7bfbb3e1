//! Platform glue: frame pacing and input latching
//!
//! The simulation steps once per frame; these pieces decide when a frame
//! happens and what the player asked for during it.

mod clock;
mod input;

pub use clock::FrameClock;
pub use input::{Action, FrameInput, InputLatch};
