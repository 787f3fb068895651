#![warn(missing_docs)]
#![allow(rustdoc::bare_urls)]
#![doc = include_str!("../README.md")]
//! # Simple player example
//! ```ignore
#![doc = include_str!("../demos/main.rs")]
//! ```

pub mod controller;
pub use controller::{Controller, ControlsLayout, DragSession, HotkeyAction};
mod options;
pub use options::*;
#[cfg(feature = "overlay")]
mod overlay;
#[cfg(feature = "overlay")]
pub use overlay::*;
mod player;
pub use player::*;
pub mod utils;
pub mod view;

#[cfg(test)]
mod testing;
