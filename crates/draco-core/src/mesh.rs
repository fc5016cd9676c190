use crate::geometry_indices::{FaceIndex, PointIndex};
use crate::point_cloud::PointCloud;
use std::ops::{Deref, DerefMut};

pub type Face = [PointIndex; 3];

/// A point cloud plus triangle connectivity.
#[derive(Debug, Default, Clone)]
pub struct Mesh {
    point_cloud: PointCloud,
    faces: Vec<Face>,
}

impl Mesh {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_face(&mut self, face: Face) {
        self.faces.push(face);
    }

    pub fn face(&self, face_id: FaceIndex) -> Face {
        self.faces[face_id.0 as usize]
    }

    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    pub fn num_faces(&self) -> usize {
        self.faces.len()
    }

    /// Drops the connectivity and keeps the attributes.
    pub fn into_point_cloud(self) -> PointCloud {
        self.point_cloud
    }
}

impl Deref for Mesh {
    type Target = PointCloud;

    fn deref(&self) -> &Self::Target {
        &self.point_cloud
    }
}

impl DerefMut for Mesh {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.point_cloud
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry_attribute::{GeometryAttributeType, PointAttribute};

    #[test]
    fn test_mesh_derefs_to_point_cloud() {
        let mut mesh = Mesh::new();
        mesh.add_attribute(PointAttribute::from_f32(GeometryAttributeType::Position, 3, &[0.0; 9]));
        mesh.add_face([PointIndex(0), PointIndex(1), PointIndex(2)]);

        assert_eq!(mesh.num_points(), 3);
        assert_eq!(mesh.num_faces(), 1);
        assert_eq!(mesh.face(FaceIndex(0))[2], PointIndex(2));

        let pc = mesh.into_point_cloud();
        assert_eq!(pc.num_attributes(), 1);
    }
}
