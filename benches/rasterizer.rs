use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use softrast::colors;
use softrast::framebuffer::Framebuffer;
use softrast::math::vec2::Vec2;
use softrast::math::vec3::Vec3;
use softrast::rasterizer::fill_triangle;

const BUFFER_WIDTH: u32 = 800;
const BUFFER_HEIGHT: u32 = 600;

const UVS: [Vec2; 3] = [
    Vec2::new(0.0, 0.0),
    Vec2::new(1.0, 0.0),
    Vec2::new(0.0, 1.0),
];

fn small_triangle() -> [Vec3; 3] {
    [
        Vec3::new(100.0, 100.0, 0.0),
        Vec3::new(120.0, 100.0, 0.0),
        Vec3::new(110.0, 120.0, 0.0),
    ]
}

fn medium_triangle() -> [Vec3; 3] {
    [
        Vec3::new(100.0, 100.0, 0.0),
        Vec3::new(300.0, 100.0, 0.0),
        Vec3::new(200.0, 300.0, 0.0),
    ]
}

fn large_triangle() -> [Vec3; 3] {
    [
        Vec3::new(50.0, 50.0, 0.0),
        Vec3::new(750.0, 100.0, 0.0),
        Vec3::new(400.0, 550.0, 0.0),
    ]
}

fn benchmark_single_triangle(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_triangle");

    for (name, triangle) in [
        ("small", small_triangle()),
        ("medium", medium_triangle()),
        ("large", large_triangle()),
    ] {
        group.bench_with_input(BenchmarkId::new("fill", name), &triangle, |b, tri| {
            let mut fb = Framebuffer::new(BUFFER_WIDTH, BUFFER_HEIGHT);
            b.iter(|| {
                fb.clear_depth();
                fill_triangle(*black_box(tri), UVS, 0.8, |_| colors::RED, &mut fb);
            });
        });
    }

    group.finish();
}

fn benchmark_many_triangles(c: &mut Criterion) {
    let mut group = c.benchmark_group("many_triangles");

    // Generate a grid of small triangles at increasing depth
    let triangles: Vec<[Vec3; 3]> = (0..20)
        .flat_map(|row| {
            (0..20).map(move |col| {
                let x = col as f32 * 40.0;
                let y = row as f32 * 30.0;
                let z = (row * 20 + col) as f32;
                [
                    Vec3::new(x, y, z),
                    Vec3::new(x + 35.0, y, z),
                    Vec3::new(x + 17.5, y + 25.0, z),
                ]
            })
        })
        .collect();

    group.bench_function("fill_400_triangles", |b| {
        let mut fb = Framebuffer::new(BUFFER_WIDTH, BUFFER_HEIGHT);
        b.iter(|| {
            fb.clear_depth();
            for tri in &triangles {
                fill_triangle(*black_box(tri), UVS, 0.8, |_| colors::RED, &mut fb);
            }
        });
    });

    group.finish();
}

criterion_group!(benches, benchmark_single_triangle, benchmark_many_triangles);
criterion_main!(benches);
