//! Point-in-time queries over a [`FrameCache`].

use super::{Frame, FrameCache, Point3};

/// Error returned when querying an interpolated frame from an empty cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("no frame available for the given query")]
pub struct NoFrameAvailable;

impl FrameCache {
    /// Index of the lower bracketing frame for `time`, or `None` if the
    /// cache is empty.
    ///
    /// For two or more frames the result is always in
    /// `0..=frame_count() - 2`, so `result + 1` is a valid upper bracket:
    /// times at or before the second frame's time yield 0, times past the
    /// second-to-last frame's time yield `frame_count() - 2`. A cache with
    /// exactly one frame yields 0 for any query time.
    pub fn frame_index_at_time(&self, time: f32) -> Option<usize> {
        let frames = self.frames();
        match frames.len() {
            0 => None,
            1 => Some(0),
            len => {
                // binary search restricted to the interior frames, so both
                // brackets always exist
                let interior = &frames[1..len - 1];
                Some(interior.partition_point(|frame| frame.time() < time))
            }
        }
    }

    /// The frame at [`frame_index_at_time`](FrameCache::frame_index_at_time),
    /// or `None` if the cache is empty.
    pub fn frame_at_time(&self, time: f32) -> Option<&Frame> {
        self.frame_index_at_time(time).map(|i| &self.frames()[i])
    }

    /// A synthetic frame for `time`, linearly interpolated between its
    /// bracketing frames and stamped with the query time.
    ///
    /// The interpolation ratio is not clamped: query times outside the
    /// cache's time range extrapolate along the nearest boundary segment.
    /// Callers wanting clamped behavior must clamp the query time
    /// themselves. A cache with exactly one frame returns that frame's
    /// points restamped with the query time.
    pub fn interpolated_frame_at_time(&self, time: f32) -> Result<Frame, NoFrameAvailable> {
        let index = self.frame_index_at_time(time).ok_or(NoFrameAvailable)?;

        let frames = self.frames();
        if frames.len() == 1 {
            return Ok(Frame::new(time, frames[0].points().to_vec()));
        }

        let (lower, upper) = (&frames[index], &frames[index + 1]);
        let ratio = (time - lower.time()) / (upper.time() - lower.time());

        let points: Vec<Point3> = lower
            .points()
            .iter()
            .zip(upper.points())
            .map(|(a, b)| a.lerp(*b, ratio))
            .collect();

        Ok(Frame::new(time, points))
    }
}
