//! Loaded geometry, tagged by the encode path it takes.

use draco_core::mesh::Mesh;
use draco_core::point_cloud::PointCloud;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryKind {
    Mesh,
    PointCloud,
}

impl GeometryKind {
    /// Human readable name used in reports.
    pub fn label(self) -> &'static str {
        match self {
            GeometryKind::Mesh => "mesh",
            GeometryKind::PointCloud => "point cloud",
        }
    }
}

#[derive(Debug, Clone)]
pub enum Geometry {
    Mesh(Mesh),
    PointCloud(PointCloud),
}

impl Geometry {
    /// Re-tags a mesh without faces as a point cloud. Everything else is
    /// returned unchanged.
    pub fn resolve(self) -> Self {
        match self {
            Geometry::Mesh(mesh) if mesh.num_faces() == 0 => Geometry::PointCloud(mesh.into_point_cloud()),
            other => other,
        }
    }

    pub fn kind(&self) -> GeometryKind {
        match self {
            Geometry::Mesh(_) => GeometryKind::Mesh,
            Geometry::PointCloud(_) => GeometryKind::PointCloud,
        }
    }

    /// Attribute view shared by both variants.
    pub fn point_cloud(&self) -> &PointCloud {
        match self {
            Geometry::Mesh(mesh) => &**mesh,
            Geometry::PointCloud(pc) => pc,
        }
    }
}
