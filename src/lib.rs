//! Scene-graph keyframe animation.
//!
//! The crate computes, for every animated node and an arbitrary query time,
//! the node's local and parent transforms by interpolating between authored
//! keyframes. Two timeline kinds are provided:
//!
//! - [`LinearTimeline`]: piecewise linear/spherical interpolation between
//!   the two keyframes bounding the query time.
//! - [`CurveTimeline`]: a segmented timeline that blends all keyframes of
//!   the enclosing segment with a recursive de Casteljau construction.
//!
//! A [`Node`] owns up to two tracks (local and parent transform) and writes
//! the evaluated matrices into its transform slots on every tick; the
//! [`Scene`] drives all nodes from a single [`AnimationClock`] so the whole
//! graph observes one coherent time per frame. Composing node matrices with
//! their ancestors, as well as meshes, shaders and drawing, is the embedding
//! application's responsibility.

pub mod animation;
pub mod errors;
pub mod scene;

pub use animation::{AnimationClock, CurveTimeline, LinearTimeline, Mode, Track};
pub use errors::{KinemaError, Result};
pub use scene::{Node, NodeHandle, Scene, Transform};
