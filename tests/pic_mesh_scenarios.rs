mod util;

use pic_mesh::prelude::*;
use util::{assert_permutation, quad_grid};

#[test]
fn counts_match_created_entities() {
    let (mesh, grid) = quad_grid(4, 3, MeshConfig::default());
    assert_eq!(mesh.indices(IndexSpaceId::Vertices as usize), Ok(grid.vertices.len()));
    assert_eq!(mesh.indices(IndexSpaceId::Cells as usize), Ok(grid.cells.len()));
    assert_eq!(mesh.count(IndexSpaceId::Vertices), 20);
    assert_eq!(mesh.count(IndexSpaceId::Cells), 12);
}

#[test]
fn primary_spaces_iterate_in_creation_order() {
    let (mesh, grid) = quad_grid(3, 2, MeshConfig::default());
    assert_eq!(mesh.vertices().collect::<Vec<_>>(), grid.vertices);
    assert_eq!(mesh.cells().collect::<Vec<_>>(), grid.cells);
    assert_eq!(mesh.cells().len(), 6);
}

#[test]
fn cell_vertices_come_back_in_creation_order() {
    let mut mesh = PicMesh::<2>::new();
    let v1 = mesh.make_vertex([0.0, 0.0], EntityType::Interior).unwrap();
    let v2 = mesh.make_vertex([1.0, 0.0], EntityType::Interior).unwrap();
    let v3 = mesh.make_vertex([0.0, 1.0], EntityType::Interior).unwrap();
    let cell = mesh.make_cell(&[v3, v1, v2], EntityType::Interior).unwrap();
    assert_eq!(mesh.vertices_of(cell).unwrap().collect::<Vec<_>>(), vec![v3, v1, v2]);
    mesh.init().unwrap();
    assert_eq!(mesh.vertices_of(cell).unwrap().collect::<Vec<_>>(), vec![v3, v1, v2]);
}

#[test]
fn grid_cells_partition_into_interior_and_boundary() {
    let (mut mesh, grid) = quad_grid(5, 4, MeshConfig::default());
    mesh.init().unwrap();

    let interior = mesh.cells_in(SubIndexSpaceId::Interior).unwrap();
    let boundary = mesh.cells_in(SubIndexSpaceId::Boundary).unwrap();
    assert_eq!(interior.len(), 3 * 2);
    assert_eq!(boundary.len(), 20 - 6);
    assert!(interior.iter().all(|c| !boundary.contains(c)));

    let mut union: Vec<_> = interior.iter().chain(boundary.iter()).collect();
    union.sort_unstable();
    assert_eq!(union, mesh.cells().collect::<Vec<_>>());

    assert!(interior.contains(grid.cell(1, 1)));
    assert!(boundary.contains(grid.cell(0, 2)));
    mesh.validate_invariants().unwrap();
}

#[test]
fn interior_grid_vertices_touch_four_cells() {
    let (mut mesh, grid) = quad_grid(3, 3, MeshConfig::default());
    mesh.init().unwrap();

    let centre: Vec<_> = mesh.cells_of(grid.vertex(1, 1)).unwrap().collect();
    assert_permutation(
        &centre,
        &[grid.cell(0, 0), grid.cell(1, 0), grid.cell(0, 1), grid.cell(1, 1)],
    );
    let corner: Vec<_> = mesh.cells_of(grid.vertex(3, 3)).unwrap().collect();
    assert_eq!(corner, vec![grid.cell(2, 2)]);

    let interior_vertices = mesh.vertices_in(SubIndexSpaceId::Interior).unwrap();
    assert_eq!(interior_vertices.len(), 4);
    for v in interior_vertices {
        assert_eq!(mesh.cells_of(v).unwrap().len(), 4);
    }
}

#[test]
fn nested_iteration_visits_every_incidence_once() {
    let (mut mesh, grid) = quad_grid(2, 2, MeshConfig::default());
    mesh.init().unwrap();
    let mut incidences = 0;
    for cell in mesh.cells() {
        for vertex in mesh.vertices_of(cell).unwrap() {
            assert!(mesh.cells_of(vertex).unwrap().any(|c| c == cell));
            incidences += 1;
        }
    }
    assert_eq!(incidences, 4 * grid.cells.len());
}

#[test]
fn repeated_queries_are_stable() {
    let (mut mesh, _) = quad_grid(3, 3, MeshConfig::all());
    mesh.init().unwrap();
    let cells: Vec<_> = mesh.cells().collect();
    let vertices: Vec<_> = mesh.vertices().collect();
    let interior = mesh.cells_in(SubIndexSpaceId::Interior).unwrap().clone();
    for _ in 0..3 {
        assert_eq!(mesh.cells().collect::<Vec<_>>(), cells);
        assert_eq!(mesh.vertices().collect::<Vec<_>>(), vertices);
        assert_eq!(mesh.cells_in(SubIndexSpaceId::Interior).unwrap(), &interior);
    }
    let pass = mesh.cells();
    assert_eq!(pass.clone().count(), pass.count());
}

#[test]
fn boundary_vertices_follow_the_outer_ring() {
    let (mut mesh, grid) = quad_grid(2, 3, MeshConfig::all());
    mesh.init().unwrap();
    let boundary = mesh.vertices_in(SubIndexSpaceId::Boundary).unwrap();
    assert_eq!(boundary.len(), 2 * (2 + 3));
    assert!(boundary.contains(grid.vertex(0, 0)));
    assert!(!boundary.contains(grid.vertex(1, 1)));
}

#[test]
fn derived_spaces_serialize_as_handle_lists() {
    let (mut mesh, grid) = quad_grid(3, 3, MeshConfig::default());
    mesh.init().unwrap();
    let interior = mesh.cells_in(SubIndexSpaceId::Interior).unwrap();
    let json = serde_json::to_string(interior).unwrap();
    assert_eq!(json, format!("[{}]", grid.cell(1, 1)));
    let back: IndexSpace<CellId> = serde_json::from_str(&json).unwrap();
    assert_eq!(&back, interior);
}
