use glam::Mat4;
use smallvec::SmallVec;

use crate::animation::keyframes::Keyframes;
use crate::animation::values::Interpolatable;
use crate::errors::{KinemaError, Result};
use crate::scene::transform::Transform;

/// Interpolation strategy of a track, fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Linear,
    Curve,
}

/// Segment boundary lists stay small (tens of entries at most).
type Segmentation = SmallVec<[f32; 8]>;

// Guards the factor division when two keyed times coincide numerically.
const MIN_KEY_SPACING: f32 = 1e-6;

/// A timeline that interpolates linearly between the two keyframes
/// bounding the query time, with clamping outside the keyed range.
///
/// Translation and scale blend with a lerp, orientation with a slerp.
#[derive(Debug, Clone, Default)]
pub struct LinearTimeline {
    keys: Keyframes,
}

impl LinearTimeline {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a keyframe, overwriting any keyframe at exactly `time`.
    pub fn add(&mut self, time: f32, transform: Transform) {
        self.keys.insert(time, transform);
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Interpolated transform at `time`.
    ///
    /// Empty timelines yield the identity; times outside the keyed range
    /// clamp to the nearest end keyframe. Pure and deterministic.
    #[must_use]
    pub fn sample(&self, time: f32) -> Transform {
        let Some((first_time, first)) = self.keys.first() else {
            return Transform::IDENTITY;
        };
        if time <= first_time {
            return *first;
        }
        if let Some((last_time, last)) = self.keys.last()
            && time >= last_time
        {
            return *last;
        }
        let times = self.keys.times();
        let values = self.keys.values();
        let (lo, hi) = self.keys.bounding(time);
        let factor = (time - times[lo]) / (times[hi] - times[lo]);
        Transform::interpolate_linear(values[lo], values[hi], factor)
    }

    /// Matrix form of [`Self::sample`].
    #[must_use]
    pub fn evaluate(&self, time: f32) -> Mat4 {
        self.sample(time).to_matrix()
    }
}

/// A segmented timeline evaluated with a generalized de Casteljau
/// construction.
///
/// The segmentation partitions the timeline into sub-ranges; one blend only
/// ever considers the keyframes inside the segment enclosing the query
/// time. A segment holding exactly two keyframes degenerates to the
/// [`LinearTimeline`] behavior; with more, the whole sub-sequence is
/// blended recursively, pairwise lerping translation/scale and slerping
/// orientation at every level.
#[derive(Debug, Clone, Default)]
pub struct CurveTimeline {
    keys: Keyframes,
    segmentation: Segmentation,
}

impl CurveTimeline {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a keyframe, overwriting any keyframe at exactly `time`.
    pub fn add(&mut self, time: f32, transform: Transform) {
        self.keys.insert(time, transform);
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Replaces the segment boundary list.
    ///
    /// Boundaries must be strictly ascending and at least two entries long;
    /// malformed lists are rejected here rather than producing degenerate
    /// curves at evaluation time. Without a segmentation the whole keyed
    /// range acts as a single segment.
    pub fn set_segmentation(&mut self, boundaries: &[f32]) -> Result<()> {
        if boundaries.len() < 2 {
            return Err(KinemaError::SegmentationTooShort(boundaries.len()));
        }
        if !boundaries.windows(2).all(|w| w[0] < w[1]) {
            return Err(KinemaError::InvalidSegmentation(boundaries.to_vec()));
        }
        self.segmentation = Segmentation::from_slice(boundaries);
        Ok(())
    }

    #[must_use]
    pub fn segmentation(&self) -> &[f32] {
        &self.segmentation
    }

    /// Blended transform at `time`.
    ///
    /// Clamps against the global first/last keyframe, locates the enclosing
    /// segment, and blends the keyframes inside it. Times outside all
    /// segments clamp to the nearest boundary; segments with fewer than two
    /// keyframes fall back to the nearest keyframe. Pure and deterministic.
    #[must_use]
    pub fn sample(&self, time: f32) -> Transform {
        let Some((first_time, first)) = self.keys.first() else {
            return Transform::IDENTITY;
        };
        if time <= first_time {
            return *first;
        }
        if let Some((last_time, last)) = self.keys.last()
            && time >= last_time
        {
            return *last;
        }

        let times = self.keys.times();
        let values = self.keys.values();
        let (seg_start, seg_end) = self.enclosing_segment(time);
        let time = time.clamp(seg_start, seg_end);
        let (lo, hi) = self.keys.range_within(seg_start, seg_end);
        match hi - lo {
            0 => match self.keys.nearest(time) {
                Some(idx) => values[idx],
                None => Transform::IDENTITY,
            },
            1 => values[lo],
            _ => Self::blend(times, values, lo, hi, time),
        }
    }

    /// Matrix form of [`Self::sample`].
    #[must_use]
    pub fn evaluate(&self, time: f32) -> Mat4 {
        self.sample(time).to_matrix()
    }

    /// Boundaries of the segment enclosing `time`.
    ///
    /// Linear scan; times before the first or after the last boundary land
    /// in the first/last segment (the clamp in [`Self::sample`] then pins
    /// them to the boundary itself).
    fn enclosing_segment(&self, time: f32) -> (f32, f32) {
        let seg: &[f32] = &self.segmentation;
        if seg.len() < 2 {
            let times = self.keys.times();
            return (times[0], times[times.len() - 1]);
        }
        let mut j = 1;
        while j < seg.len() - 1 && time > seg[j] {
            j += 1;
        }
        (seg[j - 1], seg[j])
    }

    /// Generalized de Casteljau blend of the keyframes in `[lo, hi)`.
    ///
    /// The sub-sequence splits after its second element into halves
    /// `[lo, lo + 2)` and `[lo + 1, hi)` overlapping at `lo + 1`; each half
    /// is blended recursively and the two intermediate transforms combine
    /// with this level's factor: the ratio of `time` within the level's
    /// outer keyed times, clamped to [0, 1]. The top-level factor is thus
    /// segment-relative, never a fraction of some unrelated duration.
    fn blend(times: &[f32], values: &[Transform], lo: usize, hi: usize, time: f32) -> Transform {
        debug_assert!(hi - lo >= 2);
        let t0 = times[lo];
        let t1 = times[hi - 1];
        let dt = t1 - t0;
        let factor = if dt > MIN_KEY_SPACING {
            ((time - t0) / dt).clamp(0.0, 1.0)
        } else {
            0.0
        };
        if hi - lo == 2 {
            return Transform::interpolate_linear(values[lo], values[lo + 1], factor);
        }
        let head = Self::blend(times, values, lo, lo + 2, time);
        let tail = Self::blend(times, values, lo + 1, hi, time);
        Transform::interpolate_linear(head, tail, factor)
    }
}

/// A transform track: one timeline tagged with its interpolation mode.
#[derive(Debug, Clone)]
pub enum Track {
    Linear(LinearTimeline),
    Curve(CurveTimeline),
}

impl Track {
    #[must_use]
    pub fn new(mode: Mode) -> Self {
        match mode {
            Mode::Linear => Track::Linear(LinearTimeline::new()),
            Mode::Curve => Track::Curve(CurveTimeline::new()),
        }
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        match self {
            Track::Linear(_) => Mode::Linear,
            Track::Curve(_) => Mode::Curve,
        }
    }

    /// Adds a keyframe, overwriting any keyframe at exactly `time`.
    pub fn add(&mut self, time: f32, transform: Transform) {
        match self {
            Track::Linear(timeline) => timeline.add(time, transform),
            Track::Curve(timeline) => timeline.add(time, transform),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Track::Linear(timeline) => timeline.is_empty(),
            Track::Curve(timeline) => timeline.is_empty(),
        }
    }

    /// Replaces the segmentation of a curve track; linear tracks have none.
    pub fn set_segmentation(&mut self, boundaries: &[f32]) -> Result<()> {
        match self {
            Track::Linear(_) => Err(KinemaError::SegmentationUnsupported),
            Track::Curve(timeline) => timeline.set_segmentation(boundaries),
        }
    }

    /// Interpolated transform at `time`, per the track's mode.
    #[must_use]
    pub fn sample(&self, time: f32) -> Transform {
        match self {
            Track::Linear(timeline) => timeline.sample(time),
            Track::Curve(timeline) => timeline.sample(time),
        }
    }

    /// Matrix form of [`Self::sample`].
    #[must_use]
    pub fn evaluate(&self, time: f32) -> Mat4 {
        self.sample(time).to_matrix()
    }
}
