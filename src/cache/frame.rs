//! Time-stamped point-cloud frames and the mesh collaborator interface.

use bytemuck::{Pod, Zeroable};

/// A single 3D point position.
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
#[repr(C)]
pub struct Point3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Point3 {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Linear interpolation towards `other`.
    ///
    /// `t` is not clamped; values outside `[0, 1]` extrapolate along the
    /// segment.
    pub fn lerp(self, other: Point3, t: f32) -> Point3 {
        Point3 {
            x: self.x + t * (other.x - self.x),
            y: self.y + t * (other.y - self.y),
            z: self.z + t * (other.z - self.z),
        }
    }
}

/// Minimal interface to a renderable mesh: read and write vertex positions
/// by index. Vertex order defines point order.
///
/// Indices passed to [`point`](MeshPoints::point) and
/// [`set_point`](MeshPoints::set_point) are always below
/// [`point_count`](MeshPoints::point_count).
pub trait MeshPoints {
    fn point_count(&self) -> usize;
    fn point(&self, index: usize) -> Point3;
    fn set_point(&mut self, index: usize, point: Point3);
}

impl MeshPoints for Vec<Point3> {
    fn point_count(&self) -> usize {
        self.len()
    }

    fn point(&self, index: usize) -> Point3 {
        self[index]
    }

    fn set_point(&mut self, index: usize, point: Point3) {
        self[index] = point;
    }
}

/// One time-stamped snapshot of all point positions.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    time: f32,
    points: Vec<Point3>,
}

impl Frame {
    /// Create a new frame with the given timestamp and point positions.
    pub fn new(time: f32, points: Vec<Point3>) -> Self {
        Self { time, points }
    }

    /// Build a frame from a mesh's current vertex positions.
    pub fn from_mesh<M: MeshPoints>(time: f32, mesh: &M) -> Self {
        let points = (0..mesh.point_count()).map(|i| mesh.point(i)).collect();
        Self { time, points }
    }

    /// The frame's timestamp (seconds by convention).
    pub fn time(&self) -> f32 {
        self.time
    }

    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    pub fn points(&self) -> &[Point3] {
        &self.points
    }

    /// Get a point by index, or `None` if the index is out of range.
    pub fn point(&self, index: usize) -> Option<Point3> {
        self.points.get(index).copied()
    }

    /// Flat `[x, y, z, x, y, z, ..]` view of the point data, for handing
    /// positions to vertex-buffer style consumers.
    pub fn as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.points)
    }

    /// Write this frame's positions into a mesh.
    ///
    /// Only the first `min(mesh.point_count(), self.point_count())` vertices
    /// are written.
    pub fn apply_to_mesh<M: MeshPoints>(&self, mesh: &mut M) {
        let count = mesh.point_count().min(self.points.len());
        for (i, &point) in self.points[..count].iter().enumerate() {
            mesh.set_point(i, point);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp_unclamped() {
        let a = Point3::new(0.0, 0.0, 0.0);
        let b = Point3::new(10.0, -4.0, 2.0);

        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert_eq!(a.lerp(b, 0.5), Point3::new(5.0, -2.0, 1.0));
        // t outside [0, 1] extrapolates
        assert_eq!(a.lerp(b, 2.0), Point3::new(20.0, -8.0, 4.0));
        assert_eq!(a.lerp(b, -1.0), Point3::new(-10.0, 4.0, -2.0));
    }

    #[test]
    fn test_point_access() {
        let frame = Frame::new(0.5, vec![Point3::new(1.0, 2.0, 3.0)]);

        assert_eq!(frame.time(), 0.5);
        assert_eq!(frame.point_count(), 1);
        assert_eq!(frame.point(0), Some(Point3::new(1.0, 2.0, 3.0)));
        assert_eq!(frame.point(1), None);
    }

    #[test]
    fn test_as_floats_layout() {
        let frame = Frame::new(
            0.0,
            vec![Point3::new(1.0, 2.0, 3.0), Point3::new(4.0, 5.0, 6.0)],
        );

        assert_eq!(frame.as_floats(), &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    }

    #[test]
    fn test_from_mesh_preserves_vertex_order() {
        let mesh = vec![Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 1.0, 1.0)];
        let frame = Frame::from_mesh(2.0, &mesh);

        assert_eq!(frame.time(), 2.0);
        assert_eq!(frame.points(), mesh.as_slice());
    }

    #[test]
    fn test_apply_to_mesh_clamps_to_shorter() {
        let frame = Frame::new(
            0.0,
            vec![
                Point3::new(1.0, 0.0, 0.0),
                Point3::new(2.0, 0.0, 0.0),
                Point3::new(3.0, 0.0, 0.0),
            ],
        );

        // Mesh shorter than frame: only the mesh's vertices are written.
        let mut short = vec![Point3::default(); 2];
        frame.apply_to_mesh(&mut short);
        assert_eq!(short[0], Point3::new(1.0, 0.0, 0.0));
        assert_eq!(short[1], Point3::new(2.0, 0.0, 0.0));

        // Mesh longer than frame: trailing vertices are left untouched.
        let mut long = vec![Point3::new(9.0, 9.0, 9.0); 5];
        frame.apply_to_mesh(&mut long);
        assert_eq!(long[2], Point3::new(3.0, 0.0, 0.0));
        assert_eq!(long[3], Point3::new(9.0, 9.0, 9.0));
        assert_eq!(long[4], Point3::new(9.0, 9.0, 9.0));
    }
}
