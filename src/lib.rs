//! Rule engine for a box-pushing puzzle game.
//!
//! [`Game`] owns the loaded [`Level`], the player and the boxes, resolves
//! moves and pushes, detects the win condition and notifies registered
//! [`GameObserver`]s of every change. Front ends talk to it through the
//! [`SokobanGame`] trait.

pub mod core;

pub use crate::core::*;

#[cfg(test)]
mod test;
