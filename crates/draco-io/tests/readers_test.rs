use std::fs;

use draco_core::geometry_attribute::GeometryAttributeType;
use draco_io::{read_mesh_from_file, read_point_cloud_from_file};

const CUBE_OBJ: &str = "\
# unit cube, positions + normals
v 0 0 0
v 1 0 0
v 1 1 0
v 0 1 0
v 0 0 1
v 1 0 1
v 1 1 1
v 0 1 1
vn 0 0 -1
vn 0 0 1
vn 0 -1 0
vn 0 1 0
vn -1 0 0
vn 1 0 0
f 1//1 4//1 3//1 2//1
f 5//2 6//2 7//2 8//2
f 1//3 2//3 6//3 5//3
f 4//4 8//4 7//4 3//4
f 1//5 5//5 8//5 4//5
f 2//6 3//6 7//6 6//6
";

#[test]
fn test_cube_obj_as_mesh() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cube.obj");
    fs::write(&path, CUBE_OBJ).unwrap();

    let mesh = read_mesh_from_file(&path).unwrap();
    assert_eq!(mesh.num_faces(), 12);
    // Each corner of the cube has three face normals.
    assert_eq!(mesh.num_points(), 24);
    assert!(mesh.has_named_attribute(GeometryAttributeType::Position));
    assert!(mesh.has_named_attribute(GeometryAttributeType::Normal));
    assert!(!mesh.has_named_attribute(GeometryAttributeType::TexCoord));
}

#[test]
fn test_cube_obj_as_point_cloud() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cube.obj");
    fs::write(&path, CUBE_OBJ).unwrap();

    let pc = read_point_cloud_from_file(&path).unwrap();
    assert_eq!(pc.num_points(), 24);
    assert!(pc.has_named_attribute(GeometryAttributeType::Position));
    assert!(pc.has_named_attribute(GeometryAttributeType::Normal));
    assert!(!pc.has_named_attribute(GeometryAttributeType::TexCoord));
}

#[test]
fn test_ply_points_without_faces() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("points.PLY");
    fs::write(
        &path,
        "ply\nformat ascii 1.0\nelement vertex 3\nproperty double x\nproperty double y\nproperty double z\nend_header\n0 0 0\n1 2 3\n-1 -2 -3\n",
    )
    .unwrap();

    let mesh = read_mesh_from_file(&path).unwrap();
    assert_eq!(mesh.num_faces(), 0);
    assert_eq!(mesh.num_points(), 3);
}

#[test]
fn test_unsupported_extension() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("mesh.stl");
    fs::write(&path, "solid x\nendsolid x\n").unwrap();
    assert!(read_mesh_from_file(&path).is_err());
    assert!(read_point_cloud_from_file(&path).is_err());
}
