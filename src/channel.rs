//! Control channel between the playback controller and its views.
//!
//! Views send [`Command`] values in, the channel mutates the controller and
//! pushes [`Notification`] values out to every subscriber. Delivery is
//! in-order per direction and at-most-once; there is no durable queue.

mod dispatch;
mod messages;

pub use dispatch::*;
pub use messages::*;
