//! Ordered frame store keyed by time.

use std::fmt;

use super::{Frame, MeshPoints};

/// An ordered collection of [`Frame`]s, sorted ascending by timestamp.
///
/// Every frame in a non-empty cache has the same point count; the first
/// frame inserted into an empty cache defines it. All mutation goes through
/// [`insert_frame`](FrameCache::insert_frame), which keeps the frames
/// sorted.
///
/// The cache is synchronous and does no internal locking: callers using it
/// from multiple threads must serialize mutation against readers.
#[derive(Debug, Clone, Default)]
pub struct FrameCache {
    point_count: usize,
    frames: Vec<Frame>,
}

impl FrameCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Codec constructor: `frames` are already in file order.
    pub(crate) fn from_decoded(point_count: usize, frames: Vec<Frame>) -> Self {
        Self {
            point_count,
            frames,
        }
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Points per frame. Zero until a frame is inserted or a file is loaded.
    pub fn point_count(&self) -> usize {
        self.point_count
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Read-only view of all frames, ascending by time.
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Get a frame by position, or `None` if the index is out of range.
    pub fn frame(&self, index: usize) -> Option<&Frame> {
        self.frames.get(index)
    }

    /// Timestamp of the first frame, or 0.0 if the cache is empty.
    pub fn first_frame_time(&self) -> f32 {
        self.frames.first().map_or(0.0, Frame::time)
    }

    /// Timestamp of the last frame, or 0.0 if the cache is empty.
    pub fn last_frame_time(&self) -> f32 {
        self.frames.last().map_or(0.0, Frame::time)
    }

    /// Insert a frame, keeping the cache sorted by time.
    ///
    /// Returns `false` (leaving the cache unchanged) if the cache is
    /// non-empty and the frame's point count does not match. A frame with a
    /// duplicate timestamp is placed relative to its equals in insertion
    /// order; ties are not normalized.
    pub fn insert_frame(&mut self, frame: Frame) -> bool {
        if !self.frames.is_empty() && frame.point_count() != self.point_count {
            return false;
        }

        if self.frames.is_empty() || frame.time() > self.last_frame_time() {
            self.frames.push(frame);
        } else if frame.time() < self.first_frame_time() {
            self.frames.insert(0, frame);
        } else {
            // lower bracketing index; the new frame lands just after it
            let index = self.frame_index_at_time(frame.time()).unwrap_or(0);
            self.frames.insert(index + 1, frame);
        }

        if self.frames.len() == 1 {
            self.point_count = self.frames[0].point_count();
        }

        true
    }

    /// Capture a mesh's current vertex positions as a frame at `time` and
    /// insert it. Fails under the same point-count-mismatch condition as
    /// [`insert_frame`](FrameCache::insert_frame).
    pub fn insert_frame_from_mesh<M: MeshPoints>(&mut self, time: f32, mesh: &M) -> bool {
        if !self.frames.is_empty() && mesh.point_count() != self.point_count {
            return false;
        }

        self.insert_frame(Frame::from_mesh(time, mesh))
    }

    /// Average of consecutive frame-time differences, or 0.0 with fewer
    /// than 2 frames.
    pub fn mean_frame_delta(&self) -> f32 {
        if self.frames.len() < 2 {
            return 0.0;
        }

        let sum: f32 = self
            .frames
            .windows(2)
            .map(|pair| pair[1].time() - pair[0].time())
            .sum();

        sum / (self.frames.len() - 1) as f32
    }

    /// Reciprocal of the mean frame delta, or 0.0 with fewer than 2 frames.
    /// Assumes frame times are in seconds.
    pub fn approximate_fps(&self) -> f32 {
        if self.frames.len() < 2 {
            return 0.0;
        }

        1.0 / self.mean_frame_delta()
    }

    /// First-to-last time span plus one mean frame delta, modeling a looping
    /// duration. 0.0 with fewer than 2 frames.
    pub fn approximate_duration(&self) -> f32 {
        if self.frames.len() < 2 {
            return 0.0;
        }

        self.last_frame_time() + self.mean_frame_delta() - self.first_frame_time()
    }

    /// Snapshot of the cache's aggregate statistics.
    pub fn summary(&self) -> CacheSummary {
        CacheSummary {
            frame_count: self.frame_count(),
            point_count: self.point_count(),
            approximate_fps: self.approximate_fps(),
            approximate_duration: self.approximate_duration(),
            first_frame_time: self.first_frame_time(),
            last_frame_time: self.last_frame_time(),
        }
    }
}

/// Aggregate statistics for a [`FrameCache`].
#[derive(Debug, Clone, Copy)]
pub struct CacheSummary {
    pub frame_count: usize,
    pub point_count: usize,
    pub approximate_fps: f32,
    pub approximate_duration: f32,
    pub first_frame_time: f32,
    pub last_frame_time: f32,
}

impl fmt::Display for CacheSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} frames x {} points, ~{:.2} fps, ~{:.3}s duration ({:.3}s..{:.3}s)",
            self.frame_count,
            self.point_count,
            self.approximate_fps,
            self.approximate_duration,
            self.first_frame_time,
            self.last_frame_time
        )
    }
}
