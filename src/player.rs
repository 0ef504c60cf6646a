//! Playback core: the controller owning play/pause state and elapsed-time
//! accounting for the loaded track.
//!
//! Time is read through the [`Clock`] trait so the arithmetic can be tested
//! deterministically; production code uses [`SystemClock`].

mod clock;
mod controller;
mod track;

pub use clock::*;
pub use controller::*;
pub use track::*;

#[cfg(test)]
mod tests;
