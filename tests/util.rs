#![allow(dead_code)]
use pic_mesh::pic::{CellId, EntityType, MeshConfig, PicMesh, VertexId};

/// Handles of a structured quad grid built by [`quad_grid`].
pub struct Grid {
    pub nx: usize,
    pub ny: usize,
    /// Row-major, `(nx + 1) * (ny + 1)` entries.
    pub vertices: Vec<VertexId>,
    /// Row-major, `nx * ny` entries.
    pub cells: Vec<CellId>,
}

impl Grid {
    pub fn vertex(&self, i: usize, j: usize) -> VertexId {
        self.vertices[j * (self.nx + 1) + i]
    }

    pub fn cell(&self, i: usize, j: usize) -> CellId {
        self.cells[j * self.nx + i]
    }
}

fn tag(on_boundary: bool) -> EntityType {
    if on_boundary {
        EntityType::DomainBoundary
    } else {
        EntityType::Interior
    }
}

/// `nx` × `ny` unit quads. Cells and vertices touching the outer edge are
/// tagged `DomainBoundary`, everything else `Interior`. Not initialized.
pub fn quad_grid(nx: usize, ny: usize, config: MeshConfig) -> (PicMesh<2>, Grid) {
    let mut mesh = PicMesh::<2>::with_config(config);
    let mut vertices = Vec::with_capacity((nx + 1) * (ny + 1));
    for j in 0..=ny {
        for i in 0..=nx {
            let on_edge = i == 0 || j == 0 || i == nx || j == ny;
            let v = mesh
                .make_vertex([i as f64, j as f64], tag(on_edge))
                .unwrap();
            vertices.push(v);
        }
    }
    let at = |i: usize, j: usize| vertices[j * (nx + 1) + i];
    let mut cells = Vec::with_capacity(nx * ny);
    for j in 0..ny {
        for i in 0..nx {
            let on_edge = i == 0 || j == 0 || i + 1 == nx || j + 1 == ny;
            let quad = [at(i, j), at(i + 1, j), at(i + 1, j + 1), at(i, j + 1)];
            cells.push(mesh.make_cell(&quad, tag(on_edge)).unwrap());
        }
    }
    (
        mesh,
        Grid {
            nx,
            ny,
            vertices,
            cells,
        },
    )
}

/// Assert vec is a permutation of another vec (order-agnostic).
pub fn assert_permutation<T: Ord + Copy + std::fmt::Debug>(got: &[T], want: &[T]) {
    let mut a = got.to_vec();
    a.sort_unstable();
    let mut b = want.to_vec();
    b.sort_unstable();
    assert_eq!(a, b, "not a permutation\n got={:?}\nwant={:?}", got, want);
}
