//! Time subsystem.
//!
//! - `FrameClock::new()` follows the wall clock, with delta-time clamps
//! - `FrameClock::fixed(dt)` advances by a constant step, for offline
//!   rendering where every frame must see the same `dt`
//!
//! Call `tick()` once per produced frame.

mod frame_clock;

pub use frame_clock::{FrameClock, FrameTime};
