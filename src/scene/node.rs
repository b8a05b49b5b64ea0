use glam::Mat4;

use crate::animation::timeline::{Mode, Track};
use crate::errors::{KinemaError, Result};
use crate::scene::NodeHandle;
use crate::scene::transform::Transform;

/// A scene-graph node with animated local and parent transform slots.
///
/// # Hierarchy
///
/// Nodes form a tree through parent/child handles. Only the handles live
/// here; composing a node's matrices with its ancestors into a final model
/// matrix is the external composer's job.
///
/// # Animation
///
/// A node owns up to two tracks, one feeding each transform slot. The
/// interpolation mode is fixed at construction; tracks are created lazily
/// on the first keyframe. [`Node::tick`] evaluates every track holding
/// keyframes at the query time and stores the resulting matrices in the
/// slots, leaving untracked slots exactly as they were.
#[derive(Debug, Clone)]
pub struct Node {
    pub(crate) parent: Option<NodeHandle>,
    pub(crate) children: Vec<NodeHandle>,

    local_transform: Mat4,
    parent_transform: Mat4,

    mode: Mode,
    local_track: Option<Track>,
    parent_track: Option<Track>,
}

impl Node {
    #[must_use]
    pub fn new(mode: Mode) -> Self {
        Self {
            parent: None,
            children: Vec::new(),
            local_transform: Mat4::IDENTITY,
            parent_transform: Mat4::IDENTITY,
            mode,
            local_track: None,
            parent_track: None,
        }
    }

    #[inline]
    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Returns the parent node handle, if any.
    #[inline]
    #[must_use]
    pub fn parent(&self) -> Option<NodeHandle> {
        self.parent
    }

    /// Returns a read-only slice of child node handles.
    #[inline]
    #[must_use]
    pub fn children(&self) -> &[NodeHandle] {
        &self.children
    }

    /// Sets the parent of this node. Prefer [`Scene::attach`] which keeps
    /// both sides in sync; this is exposed for building hierarchies outside
    /// of a `Scene`.
    ///
    /// [`Scene::attach`]: crate::scene::Scene::attach
    #[inline]
    pub fn set_parent(&mut self, parent: Option<NodeHandle>) {
        self.parent = parent;
    }

    /// Appends a child handle. Prefer [`Scene::attach`] which keeps both
    /// sides in sync.
    ///
    /// [`Scene::attach`]: crate::scene::Scene::attach
    #[inline]
    pub fn push_child(&mut self, child: NodeHandle) {
        self.children.push(child);
    }

    /// Appends a keyframe to the local-transform track, creating the track
    /// with the node's mode on first use.
    pub fn add_local_transform_keyframe(&mut self, transform: Transform, time: f32) {
        self.local_track
            .get_or_insert_with(|| Track::new(self.mode))
            .add(time, transform);
    }

    /// Appends a keyframe to the parent-transform track, creating the track
    /// with the node's mode on first use.
    pub fn add_parent_transform_keyframe(&mut self, transform: Transform, time: f32) {
        self.parent_track
            .get_or_insert_with(|| Track::new(self.mode))
            .add(time, transform);
    }

    /// Replaces the segmentation of both tracks.
    ///
    /// Only meaningful on curve-mode nodes; tracks not yet created are
    /// created empty so a segmentation set during scene setup applies to
    /// keyframes added later.
    pub fn set_segmentation(&mut self, boundaries: &[f32]) -> Result<()> {
        if self.mode != Mode::Curve {
            return Err(KinemaError::SegmentationUnsupported);
        }
        self.local_track
            .get_or_insert_with(|| Track::new(self.mode))
            .set_segmentation(boundaries)?;
        self.parent_track
            .get_or_insert_with(|| Track::new(self.mode))
            .set_segmentation(boundaries)
    }

    /// Evaluates the populated tracks at `time` and stores the resulting
    /// matrices in the transform slots.
    ///
    /// Tracks without keyframes leave their slot untouched, so statically
    /// posed slots survive the animation pass. Does not recurse into
    /// children.
    pub fn tick(&mut self, time: f32) {
        if let Some(track) = &self.local_track
            && !track.is_empty()
        {
            self.local_transform = track.evaluate(time);
        }
        if let Some(track) = &self.parent_track
            && !track.is_empty()
        {
            self.parent_transform = track.evaluate(time);
        }
    }

    /// Current local transform slot, as consumed by the external composer.
    #[inline]
    #[must_use]
    pub fn local_transform(&self) -> Mat4 {
        self.local_transform
    }

    /// Current parent transform slot, as consumed by the external composer.
    #[inline]
    #[must_use]
    pub fn parent_transform(&self) -> Mat4 {
        self.parent_transform
    }

    /// Statically poses the local slot, for nodes without a local track.
    #[inline]
    pub fn set_local_transform(&mut self, matrix: Mat4) {
        self.local_transform = matrix;
    }

    /// Statically poses the parent slot, for nodes without a parent track.
    #[inline]
    pub fn set_parent_transform(&mut self, matrix: Mat4) {
        self.parent_transform = matrix;
    }
}
