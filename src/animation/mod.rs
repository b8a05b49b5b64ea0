//! Keyframe timelines and the clock driving them.
//!
//! - [`keyframes`]: sorted (time, transform) storage shared by both
//!   timeline kinds
//! - [`timeline`]: the linear and curve evaluation strategies plus the
//!   per-track mode dispatch
//! - [`clock`]: the process-wide animation time source

pub mod clock;
pub mod keyframes;
pub mod timeline;
mod values;

pub use clock::AnimationClock;
pub use keyframes::Keyframes;
pub use timeline::{CurveTimeline, LinearTimeline, Mode, Track};
pub use values::Interpolatable;
