//! View-side transport state, driven entirely by channel notifications.

mod model;

pub use model::*;

#[cfg(test)]
mod tests;
