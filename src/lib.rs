//! MDD vertex-animation cache - read, write, and query baked mesh animation.
//!
//! An MDD file stores a sequence of time-stamped point clouds: one 3D
//! position per mesh vertex per frame, in a fixed big-endian binary layout.
//! This crate decodes such files into an ordered, time-indexed frame store,
//! answers point-in-time queries with linear interpolation (and unclamped
//! extrapolation), and encodes stores back to bytes.
//!
//! # Architecture
//!
//! The crate is split into two main modules:
//!
//! - `cache`: frame data model, ordered frame store, temporal queries
//! - `codec`: big-endian primitives and whole-file encode/decode
//!
//! # Example
//!
//! ```rust
//! use mdd_cache::{Frame, FrameCache, Point3};
//!
//! let mut cache = FrameCache::new();
//! cache.insert_frame(Frame::new(0.0, vec![Point3::new(0.0, 0.0, 0.0)]));
//! cache.insert_frame(Frame::new(1.0, vec![Point3::new(10.0, 0.0, 0.0)]));
//!
//! // query between the two frames
//! let frame = cache.interpolated_frame_at_time(0.5).unwrap();
//! assert_eq!(frame.points()[0], Point3::new(5.0, 0.0, 0.0));
//!
//! // query past the last frame: linear extrapolation, not clamping
//! let frame = cache.interpolated_frame_at_time(2.0).unwrap();
//! assert_eq!(frame.points()[0], Point3::new(20.0, 0.0, 0.0));
//! ```

pub mod cache;
pub mod codec;

// Re-export commonly used types
pub use cache::{CacheSummary, Frame, FrameCache, MeshPoints, NoFrameAvailable, Point3};
pub use codec::CodecError;
