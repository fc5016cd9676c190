//! PLY format reader for meshes and point clouds.
//!
//! Handles `ascii` and `binary_little_endian` files. Vertex properties
//! `x y z` are required; `nx ny nz` and `s t` (or `u v`,
//! `texture_u texture_v`) are picked up when present. Faces are read from a
//! `vertex_indices` (or `vertex_index`) list and fan triangulated.

use std::fs;
use std::io::{self, BufRead, BufReader, Read};
use std::path::{Path, PathBuf};

use byteorder::{LittleEndian, ReadBytesExt};

use draco_core::geometry_attribute::{GeometryAttributeType, PointAttribute};
use draco_core::geometry_indices::PointIndex;
use draco_core::mesh::Mesh;
use draco_core::point_cloud::PointCloud;

use crate::traits::{PointCloudReader, Reader};

/// PLY format reader.
#[derive(Debug)]
pub struct PlyReader {
    path: PathBuf,
}

impl PlyReader {
    /// Open a PLY file for reading.
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

    fn parse(&self) -> io::Result<PlyData> {
        let file = fs::File::open(&self.path)?;
        parse_ply(BufReader::new(file))
    }
}

impl Reader for PlyReader {
    fn open<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        PlyReader::open(path)
    }

    fn read_mesh(&mut self) -> io::Result<Mesh> {
        let data = self.parse()?;
        let mut mesh = Mesh::new();
        data.add_vertex_attributes(&mut mesh);
        for face in &data.faces {
            if face.len() < 3 {
                return Err(invalid_data("face with fewer than 3 vertices"));
            }
            if let Some(bad) = face.iter().find(|&&i| i as usize >= data.num_vertices) {
                return Err(invalid_data(format!("face index {} out of range", bad)));
            }
            for k in 1..face.len() - 1 {
                mesh.add_face([PointIndex(face[0]), PointIndex(face[k]), PointIndex(face[k + 1])]);
            }
        }
        Ok(mesh)
    }
}

impl PointCloudReader for PlyReader {
    fn read_point_cloud(&mut self) -> io::Result<PointCloud> {
        let data = self.parse()?;
        let mut pc = PointCloud::new();
        data.add_vertex_attributes(&mut pc);
        Ok(pc)
    }
}

fn invalid_data(msg: impl Into<String>) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, msg.into())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Ascii,
    BinaryLittleEndian,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScalarType {
    Int8,
    Uint8,
    Int16,
    Uint16,
    Int32,
    Uint32,
    Float32,
    Float64,
}

impl ScalarType {
    fn parse(name: &str) -> io::Result<Self> {
        Ok(match name {
            "char" | "int8" => ScalarType::Int8,
            "uchar" | "uint8" => ScalarType::Uint8,
            "short" | "int16" => ScalarType::Int16,
            "ushort" | "uint16" => ScalarType::Uint16,
            "int" | "int32" => ScalarType::Int32,
            "uint" | "uint32" => ScalarType::Uint32,
            "float" | "float32" => ScalarType::Float32,
            "double" | "float64" => ScalarType::Float64,
            other => return Err(invalid_data(format!("unknown property type '{}'", other))),
        })
    }

    fn read_binary<R: Read>(self, reader: &mut R) -> io::Result<f64> {
        Ok(match self {
            ScalarType::Int8 => reader.read_i8()? as f64,
            ScalarType::Uint8 => reader.read_u8()? as f64,
            ScalarType::Int16 => reader.read_i16::<LittleEndian>()? as f64,
            ScalarType::Uint16 => reader.read_u16::<LittleEndian>()? as f64,
            ScalarType::Int32 => reader.read_i32::<LittleEndian>()? as f64,
            ScalarType::Uint32 => reader.read_u32::<LittleEndian>()? as f64,
            ScalarType::Float32 => reader.read_f32::<LittleEndian>()? as f64,
            ScalarType::Float64 => reader.read_f64::<LittleEndian>()?,
        })
    }
}

#[derive(Debug, Clone)]
enum Property {
    Scalar { name: String, ty: ScalarType },
    List { name: String, count_ty: ScalarType, item_ty: ScalarType },
}

impl Property {
    fn name(&self) -> &str {
        match self {
            Property::Scalar { name, .. } | Property::List { name, .. } => name,
        }
    }
}

#[derive(Debug, Clone)]
struct Element {
    name: String,
    count: usize,
    properties: Vec<Property>,
}

#[derive(Debug, Default)]
struct PlyData {
    num_vertices: usize,
    positions: Vec<f32>,
    normals: Option<Vec<f32>>,
    tex_coords: Option<Vec<f32>>,
    faces: Vec<Vec<u32>>,
}

impl PlyData {
    fn add_vertex_attributes(&self, pc: &mut PointCloud) {
        if self.num_vertices == 0 {
            return;
        }
        pc.add_attribute(PointAttribute::from_f32(GeometryAttributeType::Position, 3, &self.positions));
        if let Some(normals) = &self.normals {
            pc.add_attribute(PointAttribute::from_f32(GeometryAttributeType::Normal, 3, normals));
        }
        if let Some(tex_coords) = &self.tex_coords {
            pc.add_attribute(PointAttribute::from_f32(GeometryAttributeType::TexCoord, 2, tex_coords));
        }
    }
}

/// Column positions of the recognized vertex properties.
struct VertexLayout {
    position: [usize; 3],
    normal: Option<[usize; 3]>,
    tex_coord: Option<[usize; 2]>,
}

impl VertexLayout {
    fn new(element: &Element) -> io::Result<Self> {
        let position = find_columns(element, &["x", "y", "z"])
            .ok_or_else(|| invalid_data("vertex element lacks x, y, z"))?;
        let normal = find_columns(element, &["nx", "ny", "nz"]);
        let tex_coord = [["s", "t"], ["u", "v"], ["texture_u", "texture_v"]]
            .iter()
            .find_map(|names| find_columns(element, names));

        Ok(Self {
            position: [position[0], position[1], position[2]],
            normal: normal.map(|n| [n[0], n[1], n[2]]),
            tex_coord: tex_coord.map(|t| [t[0], t[1]]),
        })
    }
}

fn find_columns(element: &Element, names: &[&str]) -> Option<Vec<usize>> {
    names
        .iter()
        .map(|name| element.properties.iter().position(|p| p.name() == *name))
        .collect()
}

fn parse_header<R: BufRead>(reader: &mut R) -> io::Result<(Format, Vec<Element>)> {
    let mut line = String::new();
    reader.read_line(&mut line)?;
    if line.trim() != "ply" {
        return Err(invalid_data("missing 'ply' magic"));
    }

    let mut format = None;
    let mut elements: Vec<Element> = Vec::new();
    loop {
        line.clear();
        if reader.read_line(&mut line)? == 0 {
            return Err(invalid_data("unexpected end of header"));
        }
        let tokens: Vec<&str> = line.split_whitespace().collect();
        match tokens.as_slice() {
            ["end_header"] => break,
            ["format", "ascii", _] => format = Some(Format::Ascii),
            ["format", "binary_little_endian", _] => format = Some(Format::BinaryLittleEndian),
            ["format", other, ..] => {
                return Err(invalid_data(format!("unsupported PLY format '{}'", other)));
            }
            ["element", name, count] => {
                let count = count
                    .parse()
                    .map_err(|_| invalid_data(format!("invalid element count '{}'", count)))?;
                elements.push(Element { name: name.to_string(), count, properties: Vec::new() });
            }
            ["property", "list", count_ty, item_ty, name] => {
                let element = elements
                    .last_mut()
                    .ok_or_else(|| invalid_data("property before element"))?;
                element.properties.push(Property::List {
                    name: name.to_string(),
                    count_ty: ScalarType::parse(count_ty)?,
                    item_ty: ScalarType::parse(item_ty)?,
                });
            }
            ["property", ty, name] => {
                let element = elements
                    .last_mut()
                    .ok_or_else(|| invalid_data("property before element"))?;
                element.properties.push(Property::Scalar { name: name.to_string(), ty: ScalarType::parse(ty)? });
            }
            // comment, obj_info
            _ => {}
        }
    }

    let format = format.ok_or_else(|| invalid_data("missing format line"))?;
    Ok((format, elements))
}

/// Reads one element instance as a row of values. List properties are
/// returned separately, in property order.
fn read_row<R: BufRead>(
    reader: &mut R,
    format: Format,
    element: &Element,
    line: &mut String,
) -> io::Result<(Vec<f64>, Vec<Vec<u32>>)> {
    let mut scalars = Vec::with_capacity(element.properties.len());
    let mut lists = Vec::new();

    match format {
        Format::Ascii => {
            line.clear();
            if reader.read_line(line)? == 0 {
                return Err(invalid_data(format!("unexpected end of {} data", element.name)));
            }
            let mut tokens = line.split_whitespace();
            let mut next = || -> io::Result<f64> {
                let token = tokens
                    .next()
                    .ok_or_else(|| invalid_data(format!("short {} row", element.name)))?;
                token
                    .parse()
                    .map_err(|_| invalid_data(format!("invalid value '{}'", token)))
            };
            for property in &element.properties {
                match property {
                    Property::Scalar { .. } => scalars.push(next()?),
                    Property::List { .. } => {
                        let n = list_value(next()?)? as usize;
                        let items = (0..n)
                            .map(|_| next().and_then(list_value))
                            .collect::<io::Result<Vec<_>>>()?;
                        scalars.push(n as f64);
                        lists.push(items);
                    }
                }
            }
        }
        Format::BinaryLittleEndian => {
            for property in &element.properties {
                match property {
                    Property::Scalar { ty, .. } => scalars.push(ty.read_binary(reader)?),
                    Property::List { count_ty, item_ty, .. } => {
                        let n = list_value(count_ty.read_binary(reader)?)? as usize;
                        let items = (0..n)
                            .map(|_| item_ty.read_binary(reader).and_then(list_value))
                            .collect::<io::Result<Vec<_>>>()?;
                        scalars.push(n as f64);
                        lists.push(items);
                    }
                }
            }
        }
    }
    Ok((scalars, lists))
}

/// List counts and vertex indices must be non-negative integers that fit
/// in a `u32`.
fn list_value(v: f64) -> io::Result<u32> {
    if v.fract() != 0.0 || !(0.0..=u32::MAX as f64).contains(&v) {
        return Err(invalid_data(format!("invalid list value {}", v)));
    }
    Ok(v as u32)
}

fn parse_ply<R: BufRead>(mut reader: R) -> io::Result<PlyData> {
    let (format, elements) = parse_header(&mut reader)?;
    let mut data = PlyData::default();
    let mut line = String::new();

    for element in &elements {
        match element.name.as_str() {
            "vertex" => {
                let layout = VertexLayout::new(element)?;
                data.num_vertices = element.count;
                // Grown row by row: the header count is untrusted.
                let mut normals = layout.normal.map(|_| Vec::new());
                let mut tex_coords = layout.tex_coord.map(|_| Vec::new());

                for _ in 0..element.count {
                    let (row, _) = read_row(&mut reader, format, element, &mut line)?;
                    data.positions.extend(layout.position.iter().map(|&c| row[c] as f32));
                    if let (Some(cols), Some(out)) = (layout.normal, normals.as_mut()) {
                        out.extend(cols.iter().map(|&c| row[c] as f32));
                    }
                    if let (Some(cols), Some(out)) = (layout.tex_coord, tex_coords.as_mut()) {
                        out.extend(cols.iter().map(|&c| row[c] as f32));
                    }
                }
                data.normals = normals;
                data.tex_coords = tex_coords;
            }
            "face" => {
                let list_pos = element
                    .properties
                    .iter()
                    .filter(|p| matches!(p, Property::List { .. }))
                    .position(|p| p.name() == "vertex_indices" || p.name() == "vertex_index")
                    .ok_or_else(|| invalid_data("face element lacks vertex_indices"))?;
                for _ in 0..element.count {
                    let (_, mut lists) = read_row(&mut reader, format, element, &mut line)?;
                    data.faces.push(lists.swap_remove(list_pos));
                }
            }
            _ => {
                for _ in 0..element.count {
                    read_row(&mut reader, format, element, &mut line)?;
                }
            }
        }
    }

    Ok(data)
}
