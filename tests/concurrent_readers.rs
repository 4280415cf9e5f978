mod util;

use pic_mesh::prelude::*;
use util::quad_grid;

#[test]
fn initialized_mesh_is_shared_by_reader_threads() {
    let (mut mesh, _) = quad_grid(8, 8, MeshConfig::default());
    mesh.init().unwrap();
    let mesh = &mesh;

    let expected = mesh.cells_in(SubIndexSpaceId::Interior).unwrap().len();
    let counts: Vec<usize> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                scope.spawn(move || {
                    let interior = mesh.cells_in(SubIndexSpaceId::Interior).unwrap();
                    let mut touched = 0;
                    for cell in interior {
                        touched += mesh.vertices_of(cell).unwrap().len();
                    }
                    assert_eq!(touched, 4 * interior.len());
                    interior.len()
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });
    assert!(counts.iter().all(|&c| c == expected));
    assert_eq!(expected, 36);
}
