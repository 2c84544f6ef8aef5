//! Benchmarks for corner table operations.

use criterion::{criterion_group, criterion_main, Criterion};
use cornertable::corner::{
    attribute_seam_corners, create_corner_table, create_corner_table_from_all_attributes,
    SeamOptions,
};
use cornertable::mesh::{AttributeType, Mesh, PointAttribute};

fn create_grid_mesh(n: usize) -> Mesh {
    let mut faces = Vec::with_capacity(n * n * 2);

    // Create triangles
    for j in 0..n {
        for i in 0..n {
            let v00 = j * (n + 1) + i;
            let v10 = v00 + 1;
            let v01 = v00 + (n + 1);
            let v11 = v01 + 1;

            faces.push([v00, v10, v11]);
            faces.push([v00, v11, v01]);
        }
    }

    let num_points = (n + 1) * (n + 1);
    Mesh::from_faces(num_points, &faces)
        .with_attribute(PointAttribute::identity(AttributeType::Position, num_points))
        .with_attribute(PointAttribute::identity(AttributeType::TexCoord, num_points))
}

fn bench_table_construction(c: &mut Criterion) {
    let mesh = create_grid_mesh(100);

    c.bench_function("create_corner_table_100x100", |b| {
        b.iter(|| create_corner_table(&mesh).unwrap());
    });

    c.bench_function("create_corner_table_from_all_attributes_100x100", |b| {
        b.iter(|| create_corner_table_from_all_attributes(&mesh).unwrap());
    });
}

fn bench_table_traversal(c: &mut Criterion) {
    let mesh = create_grid_mesh(100);
    let table = create_corner_table(&mesh).unwrap();
    let uv = mesh.named_attribute(AttributeType::TexCoord).unwrap();

    c.bench_function("swing_all_vertices", |b| {
        b.iter(|| {
            let mut count = 0;
            for v in table.vertex_ids() {
                count += table.vertex_corners(v).count();
            }
            count
        });
    });

    c.bench_function("seam_scan_sequential", |b| {
        let options = SeamOptions::default().sequential();
        b.iter(|| attribute_seam_corners(uv, &mesh, &table, &options));
    });

    c.bench_function("seam_scan_parallel", |b| {
        let options = SeamOptions::default();
        b.iter(|| attribute_seam_corners(uv, &mesh, &table, &options));
    });
}

criterion_group!(benches, bench_table_construction, bench_table_traversal);
criterion_main!(benches);
