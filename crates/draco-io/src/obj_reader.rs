//! OBJ format reader for meshes and point clouds.
//!
//! Supports `v`, `vt`, `vn` and `f` statements. Polygons are fan
//! triangulated. Every distinct `v/vt/vn` corner tuple becomes one point.

use std::collections::HashMap;
use std::fs;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use draco_core::geometry_attribute::{GeometryAttributeType, PointAttribute};
use draco_core::geometry_indices::PointIndex;
use draco_core::mesh::Mesh;
use draco_core::point_cloud::PointCloud;

use crate::traits::{PointCloudReader, Reader};

/// OBJ format reader.
#[derive(Debug)]
pub struct ObjReader {
    path: PathBuf,
}

impl ObjReader {
    /// Open an OBJ file for reading.
    pub fn open<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let path = path.as_ref().to_path_buf();
        if !path.exists() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("File not found: {}", path.display()),
            ));
        }
        Ok(Self { path })
    }

    fn parse(&self) -> io::Result<ObjData> {
        let file = fs::File::open(&self.path)?;
        parse_obj(BufReader::new(file))
    }
}

impl Reader for ObjReader {
    fn open<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        ObjReader::open(path)
    }

    fn read_mesh(&mut self) -> io::Result<Mesh> {
        self.parse()?.into_mesh()
    }
}

impl PointCloudReader for ObjReader {
    /// Same points and attributes as [`Reader::read_mesh`], without the
    /// faces.
    fn read_point_cloud(&mut self) -> io::Result<PointCloud> {
        Ok(self.parse()?.into_mesh()?.into_point_cloud())
    }
}

/// One face corner: indices into positions, tex coords and normals.
type Corner = (usize, Option<usize>, Option<usize>);

#[derive(Debug, Default)]
struct ObjData {
    positions: Vec<[f32; 3]>,
    tex_coords: Vec<[f32; 2]>,
    normals: Vec<[f32; 3]>,
    triangles: Vec<[Corner; 3]>,
}

impl ObjData {
    fn into_mesh(self) -> io::Result<Mesh> {
        let mut mesh = Mesh::new();
        if self.positions.is_empty() {
            return Ok(mesh);
        }

        if self.triangles.is_empty() {
            let flat: Vec<f32> = self.positions.iter().flatten().copied().collect();
            mesh.add_attribute(PointAttribute::from_f32(GeometryAttributeType::Position, 3, &flat));
            return Ok(mesh);
        }

        let mut point_ids: HashMap<Corner, u32> = HashMap::new();
        let mut corners: Vec<Corner> = Vec::new();
        let mut faces = Vec::with_capacity(self.triangles.len());
        for triangle in &self.triangles {
            let mut face = [PointIndex(0); 3];
            for (slot, corner) in face.iter_mut().zip(triangle) {
                let id = *point_ids.entry(*corner).or_insert_with(|| {
                    corners.push(*corner);
                    (corners.len() - 1) as u32
                });
                *slot = PointIndex(id);
            }
            faces.push(face);
        }

        let positions: Vec<f32> = corners.iter().flat_map(|c| self.positions[c.0]).collect();
        mesh.add_attribute(PointAttribute::from_f32(GeometryAttributeType::Position, 3, &positions));

        if corners.iter().any(|c| c.1.is_some()) {
            let values: Vec<f32> = corners
                .iter()
                .flat_map(|c| c.1.map_or([0.0; 2], |i| self.tex_coords[i]))
                .collect();
            mesh.add_attribute(PointAttribute::from_f32(GeometryAttributeType::TexCoord, 2, &values));
        }
        if corners.iter().any(|c| c.2.is_some()) {
            let values: Vec<f32> = corners
                .iter()
                .flat_map(|c| c.2.map_or([0.0; 3], |i| self.normals[i]))
                .collect();
            mesh.add_attribute(PointAttribute::from_f32(GeometryAttributeType::Normal, 3, &values));
        }

        for face in faces {
            mesh.add_face(face);
        }
        Ok(mesh)
    }
}

fn invalid_data(line_no: usize, msg: impl std::fmt::Display) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, format!("line {}: {}", line_no, msg))
}

fn parse_floats<const N: usize>(line_no: usize, parts: &mut std::str::SplitWhitespace<'_>) -> io::Result<[f32; N]> {
    let mut out = [0.0f32; N];
    for v in out.iter_mut() {
        let token = parts
            .next()
            .ok_or_else(|| invalid_data(line_no, "missing component"))?;
        *v = token
            .parse()
            .map_err(|_| invalid_data(line_no, format!("invalid number '{}'", token)))?;
    }
    Ok(out)
}

/// Resolves a 1-based (or negative, relative) OBJ index.
fn resolve_index(line_no: usize, token: &str, count: usize) -> io::Result<usize> {
    let raw: i64 = token
        .parse()
        .map_err(|_| invalid_data(line_no, format!("invalid index '{}'", token)))?;
    let index = if raw > 0 {
        raw - 1
    } else if raw < 0 {
        count as i64 + raw
    } else {
        -1
    };
    if index < 0 || index as usize >= count {
        return Err(invalid_data(line_no, format!("index {} out of range", raw)));
    }
    Ok(index as usize)
}

fn parse_corner(line_no: usize, token: &str, data: &ObjData) -> io::Result<Corner> {
    let mut refs = token.split('/');
    let position = resolve_index(line_no, refs.next().unwrap_or(""), data.positions.len())?;
    let tex = match refs.next() {
        Some(t) if !t.is_empty() => Some(resolve_index(line_no, t, data.tex_coords.len())?),
        _ => None,
    };
    let normal = match refs.next() {
        Some(n) if !n.is_empty() => Some(resolve_index(line_no, n, data.normals.len())?),
        _ => None,
    };
    Ok((position, tex, normal))
}

fn parse_obj<R: BufRead>(reader: R) -> io::Result<ObjData> {
    let mut data = ObjData::default();

    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = i + 1;
        let mut parts = line.split_whitespace();
        match parts.next() {
            Some("v") => data.positions.push(parse_floats::<3>(line_no, &mut parts)?),
            Some("vt") => data.tex_coords.push(parse_floats::<2>(line_no, &mut parts)?),
            Some("vn") => data.normals.push(parse_floats::<3>(line_no, &mut parts)?),
            Some("f") => {
                let corners = parts
                    .map(|token| parse_corner(line_no, token, &data))
                    .collect::<io::Result<Vec<_>>>()?;
                if corners.len() < 3 {
                    return Err(invalid_data(line_no, "face with fewer than 3 vertices"));
                }
                for k in 1..corners.len() - 1 {
                    data.triangles.push([corners[0], corners[k], corners[k + 1]]);
                }
            }
            // Comments, groups, materials and smoothing groups carry no geometry.
            _ => {}
        }
    }

    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use draco_core::geometry_indices::FaceIndex;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_obj(contents: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".obj").tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_vertices_only_is_point_set() {
        let file = write_obj("# comment\nv 1.0 2.0 3.0\nv 4.5 5.5 6.5\nvn 0 1 0\nvt 0.5 0.5\nv -1.0 -2.0 -3.0\n");
        let mesh = ObjReader::open(file.path()).unwrap().read_mesh().unwrap();
        assert_eq!(mesh.num_faces(), 0);
        assert_eq!(mesh.num_points(), 3);
        assert_eq!(mesh.num_attributes(), 1);

        let mut v = [0.0f32; 3];
        mesh.attribute(0).value_f32(PointIndex(2), &mut v).unwrap();
        assert_eq!(v, [-1.0, -2.0, -3.0]);
    }

    #[test]
    fn test_quad_is_fan_triangulated() {
        let file = write_obj("v 0 0 0\nv 1 0 0\nv 1 1 0\nv 0 1 0\nvn 0 0 1\nf 1//1 2//1 3//1 4//1\n");
        let mesh = ObjReader::open(file.path()).unwrap().read_mesh().unwrap();
        assert_eq!(mesh.num_faces(), 2);
        assert_eq!(mesh.num_points(), 4);
        assert!(mesh.has_named_attribute(GeometryAttributeType::Normal));
        assert!(!mesh.has_named_attribute(GeometryAttributeType::TexCoord));
        assert_eq!(mesh.face(FaceIndex(1)), [PointIndex(0), PointIndex(2), PointIndex(3)]);
    }

    #[test]
    fn test_distinct_tex_coords_split_points() {
        let file = write_obj("v 0 0 0\nv 1 0 0\nv 0 1 0\nvt 0 0\nvt 1 0\nvt 0 1\nvt 1 1\nf 1/1 2/2 3/3\nf -3/4 -1/3 -2/2\n");
        let mesh = ObjReader::open(file.path()).unwrap().read_mesh().unwrap();
        assert_eq!(mesh.num_faces(), 2);
        // Vertex 1 appears with two different tex coords.
        assert_eq!(mesh.num_points(), 4);
        assert!(mesh.has_named_attribute(GeometryAttributeType::TexCoord));
    }

    #[test]
    fn test_bad_index_is_invalid_data() {
        let file = write_obj("v 0 0 0\nf 1 2 3\n");
        let err = ObjReader::open(file.path()).unwrap().read_mesh().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn test_point_cloud_keeps_corner_attributes() {
        let file = write_obj("v 0 0 0\nv 1 0 0\nv 0 1 0\nv 5 5 5\nvn 0 0 1\nf 1//1 2//1 3//1\n");
        let pc = ObjReader::open(file.path()).unwrap().read_point_cloud().unwrap();
        // Points come from face corners, so the unreferenced vertex is dropped.
        assert_eq!(pc.num_points(), 3);
        assert!(pc.has_named_attribute(GeometryAttributeType::Normal));
    }

    #[test]
    fn test_point_cloud_without_faces_keeps_all_vertices() {
        let file = write_obj("v 0 0 0\nv 1 0 0\nv 5 5 5\n");
        let pc = ObjReader::open(file.path()).unwrap().read_point_cloud().unwrap();
        assert_eq!(pc.num_points(), 3);
        assert_eq!(pc.num_attributes(), 1);
    }

    #[test]
    fn test_missing_file() {
        let err = ObjReader::open("/nonexistent/cube.obj").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
