use crate::scene::transform::Transform;

/// Sorted keyframe storage shared by both timeline kinds.
///
/// Keyframes live in parallel `times`/`values` arrays kept in ascending
/// time order by binary-search insertion, so in-order iteration and range
/// queries are cheap. Times are arbitrary seconds, not necessarily evenly
/// spaced; inserting at an existing time overwrites that keyframe.
#[derive(Debug, Clone, Default)]
pub struct Keyframes {
    times: Vec<f32>,
    values: Vec<Transform>,
}

impl Keyframes {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a keyframe, overwriting any keyframe at exactly `time`.
    pub fn insert(&mut self, time: f32, value: Transform) {
        let idx = self.times.partition_point(|&t| t < time);
        if self.times.get(idx) == Some(&time) {
            self.values[idx] = value;
        } else {
            self.times.insert(idx, time);
            self.values.insert(idx, value);
        }
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn times(&self) -> &[f32] {
        &self.times
    }

    #[inline]
    #[must_use]
    pub fn values(&self) -> &[Transform] {
        &self.values
    }

    /// Earliest keyframe, if any.
    #[must_use]
    pub fn first(&self) -> Option<(f32, &Transform)> {
        self.times.first().map(|&t| (t, &self.values[0]))
    }

    /// Latest keyframe, if any.
    #[must_use]
    pub fn last(&self) -> Option<(f32, &Transform)> {
        self.times
            .last()
            .map(|&t| (t, &self.values[self.values.len() - 1]))
    }

    /// Indices of the unique bounding pair with
    /// `times[lo] <= time < times[hi]`.
    ///
    /// The caller must guarantee `time` lies strictly inside the keyed
    /// range (after clamping against `first`/`last`).
    #[must_use]
    pub fn bounding(&self, time: f32) -> (usize, usize) {
        let hi = self.times.partition_point(|&t| t <= time);
        debug_assert!(hi >= 1 && hi < self.times.len());
        (hi - 1, hi)
    }

    /// Half-open index range `[lo, hi)` of keyframes whose time falls
    /// within `[start, end]`.
    #[must_use]
    pub fn range_within(&self, start: f32, end: f32) -> (usize, usize) {
        let lo = self.times.partition_point(|&t| t < start);
        let hi = self.times.partition_point(|&t| t <= end);
        (lo, hi)
    }

    /// Index of the keyframe closest in time to `time`.
    ///
    /// Used as the clamp fallback when a segment holds fewer than two
    /// keyframes. Returns `None` on an empty collection.
    #[must_use]
    pub fn nearest(&self, time: f32) -> Option<usize> {
        if self.times.is_empty() {
            return None;
        }
        let after = self.times.partition_point(|&t| t < time);
        if after == 0 {
            return Some(0);
        }
        if after == self.times.len() {
            return Some(after - 1);
        }
        let below = self.times[after - 1];
        let above = self.times[after];
        if (time - below) <= (above - time) {
            Some(after - 1)
        } else {
            Some(after)
        }
    }
}
