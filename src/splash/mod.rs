//! Opening splash: a fixed, non-interactive intro played once per launch.
//!
//! The whole sequence is data ([`timeline::opening_timeline`]) driven by
//! [`SplashSequencer::advance`], which the host calls with the time elapsed
//! since the splash was mounted.

pub mod animation;
pub mod flag;
pub mod sequencer;
pub mod timeline;

pub use flag::ActiveFlag;
pub use sequencer::{SplashFrame, SplashSequencer};
pub use timeline::{Cue, SplashTransition};
