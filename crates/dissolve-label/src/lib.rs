#![forbid(unsafe_code)]

//! Label: the stateful driver for per-character text fades.
//!
//! [`controller::FadeController`] owns a [`styled::StyledText`] buffer and
//! a `dissolve-core` timeline, advances them on host-supplied frame ticks,
//! and pauses its [`clock::FrameClock`] between runs.

pub mod clock;
pub mod config;
pub mod controller;
pub mod styled;

pub use clock::{FrameClock, ManualClock};
pub use config::FadeConfig;
pub use controller::{FadeController, Tick};
pub use styled::{StyledGrapheme, StyledText};
