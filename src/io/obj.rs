// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use tracing::{debug, warn};

use crate::{
    error::{GeometryError, GeometryResult},
    geometry::vector::Vector3,
    mesh::source::TriangleMesh,
    numeric::scalar::Scalar,
};

pub fn write_obj<T: Scalar, P: AsRef<Path>>(mesh: &TriangleMesh<T>, path: P) -> GeometryResult<()> {
    let file = File::create(path)?;
    let mut out = BufWriter::new(file);
    write_obj_to(mesh, &mut out)?;
    out.flush()?;
    Ok(())
}

/// Write `v` and `f` lines; face indices are 1-based.
pub fn write_obj_to<T: Scalar, W: Write>(mesh: &TriangleMesh<T>, out: &mut W) -> GeometryResult<()> {
    for v in &mesh.vertices {
        writeln!(out, "v {:?} {:?} {:?}", v[0].as_f64(), v[1].as_f64(), v[2].as_f64())?;
    }
    for [a, b, c] in &mesh.triangles {
        writeln!(out, "f {} {} {}", a + 1, b + 1, c + 1)?;
    }
    Ok(())
}

/// Read a mesh from a Wavefront OBJ file.
pub fn read_obj<T: Scalar, P: AsRef<Path>>(path: P) -> GeometryResult<TriangleMesh<T>> {
    let file = File::open(path)?;
    read_obj_from(BufReader::new(file))
}

/// Parse `v x y z` and `f i j k ...` lines, ignoring every other record.
///
/// Face entries may carry `/vt/vn` suffixes and negative (relative)
/// indices. Polygons are fan-triangulated around their first vertex.
pub fn read_obj_from<T: Scalar, R: BufRead>(reader: R) -> GeometryResult<TriangleMesh<T>> {
    let mut mesh = TriangleMesh::new();
    let mut skipped = 0usize;

    for (n, line) in reader.lines().enumerate() {
        let line_no = n + 1;
        let line = line?;
        let mut parts = line.split_whitespace();
        match parts.next() {
            Some("v") => {
                let mut coords = [T::zero(); 3];
                for c in &mut coords {
                    let token = parts
                        .next()
                        .ok_or_else(|| GeometryError::parse(line_no, "expected 3 vertex coordinates"))?;
                    let value: f64 = token
                        .parse()
                        .map_err(|_| GeometryError::parse(line_no, format!("bad coordinate `{token}`")))?;
                    *c = T::from_f64(value);
                }
                mesh.add_vertex(Vector3::from_coords(coords));
            }
            Some("f") => {
                let vertex_count = mesh.vertices.len();
                let indices = parts
                    .map(|token| face_index(token, vertex_count, line_no))
                    .collect::<GeometryResult<Vec<_>>>()?;
                if indices.len() < 3 {
                    return Err(GeometryError::parse(line_no, "face needs at least 3 vertices"));
                }
                for k in 1..indices.len() - 1 {
                    mesh.triangles.push([indices[0], indices[k], indices[k + 1]]);
                }
            }
            Some(tag) if !tag.starts_with('#') => skipped += 1,
            _ => {}
        }
    }

    if skipped > 0 {
        warn!(records = skipped, "ignored unsupported OBJ records");
    }
    debug!(vertices = mesh.vertices.len(), triangles = mesh.triangles.len(), "read OBJ");
    Ok(mesh)
}

fn face_index(token: &str, vertex_count: usize, line_no: usize) -> GeometryResult<usize> {
    let head = token.split('/').next().unwrap_or(token);
    let raw: i64 = head
        .parse()
        .map_err(|_| GeometryError::parse(line_no, format!("bad face index `{token}`")))?;
    let index = match raw {
        0 => None,
        r if r > 0 => usize::try_from(r - 1).ok(),
        r => usize::try_from(vertex_count as i64 + r).ok(),
    };
    match index {
        Some(i) if i < vertex_count => Ok(i),
        _ => Err(GeometryError::parse(
            line_no,
            format!("face index {raw} out of range for {vertex_count} vertices"),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::vector::Vector3d;

    #[test]
    fn quad_is_fan_triangulated() {
        let text = "# quad\nv 0 0 0\nv 1 0 0\nv 1 1 0\nv 0 1 0\nvn 0 0 1\nf 1//1 2//1 3//1 4//1\n";
        let mesh: TriangleMesh<f64> = read_obj_from(text.as_bytes()).unwrap();
        assert_eq!(mesh.vertices.len(), 4);
        assert_eq!(mesh.triangles, vec![[0, 1, 2], [0, 2, 3]]);
        assert_eq!(mesh.vertices[2], Vector3d::new(1.0, 1.0, 0.0));
    }

    #[test]
    fn negative_indices_are_relative() {
        let text = "v 0 0 0\nv 1 0 0\nv 0 1 0\nf -3 -2 -1\n";
        let mesh: TriangleMesh<f64> = read_obj_from(text.as_bytes()).unwrap();
        assert_eq!(mesh.triangles, vec![[0, 1, 2]]);
    }

    #[test]
    fn malformed_lines_report_line_number() {
        let text = "v 0 0 0\nv 1 zero 0\n";
        match read_obj_from::<f64, _>(text.as_bytes()) {
            Err(GeometryError::Parse { line, .. }) => assert_eq!(line, 2),
            other => panic!("unexpected {other:?}"),
        }
        let text = "v 0 0 0\nf 1 2 3\n";
        assert!(matches!(
            read_obj_from::<f64, _>(text.as_bytes()),
            Err(GeometryError::Parse { line: 2, .. })
        ));
    }

    #[test]
    fn written_text_reads_back() {
        let mut mesh = TriangleMesh::<f64>::new();
        mesh.add_vertex(Vector3d::new(0.5, -1.0, 2.25));
        mesh.add_vertex(Vector3d::new(1.0, 0.0, 0.0));
        mesh.add_vertex(Vector3d::new(0.0, 1.0, 0.0));
        mesh.add_triangle(0, 1, 2).unwrap();
        let mut buf = Vec::new();
        write_obj_to(&mesh, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("f 1 2 3"));
        let back: TriangleMesh<f64> = read_obj_from(text.as_bytes()).unwrap();
        assert_eq!(back, mesh);
    }
}
