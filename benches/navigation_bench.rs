//! Click-path benchmarks: easing, ray picking and framing.
#![allow(missing_docs)]

use atrium::camera::Camera;
use atrium::navigation::{framing_distance, FramingInput};
use atrium::options::CameraOptions;
use atrium::picking::{test_panels, Ray};
use atrium::scene::{PanelSize, Scene, SceneObject, Transform};
use atrium::util::easing::EasingFunction;
use atrium::viewport::Orientation;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use glam::{Vec2, Vec3};

fn easing_benchmark(c: &mut Criterion) {
    let f = EasingFunction::DEFAULT;
    c.bench_function("cubic_hermite_easing", |b| {
        b.iter(|| black_box(f.evaluate(black_box(0.5))));
    });
}

fn gallery(panels: u32) -> Scene {
    let mut scene = Scene::new(40.0);
    for i in 0..panels {
        let x = (i % 10) as f32 * 3.0 - 13.5;
        let z = -5.0 - (i / 10) as f32 * 4.0;
        let id = scene.add(
            SceneObject::panel(format!("panel-{i}"), PanelSize::new(2.0, 1.5))
                .with_transform(Transform::from_translation(Vec3::new(
                    x, 1.6, z,
                ))),
        );
        scene.mark_clickable(id);
    }
    scene
}

fn picking_benchmark(c: &mut Criterion) {
    let camera = Camera::new(
        Vec3::new(0.0, 1.6, 2.0),
        Vec3::new(0.0, 1.6, 1.0),
        16.0 / 9.0,
        &CameraOptions::default(),
    );
    let mut group = c.benchmark_group("test_panels");

    for count in [10, 50, 200] {
        let scene = gallery(count);
        let ray = Ray::from_camera(&camera, Vec2::new(0.1, 0.05));
        group.bench_function(format!("{count}_panels"), |b| {
            b.iter(|| black_box(test_panels(black_box(&ray), &scene)));
        });
    }
    group.finish();
}

fn framing_benchmark(c: &mut Criterion) {
    let input = FramingInput {
        center: Vec3::new(0.0, 1.6, -5.0),
        normal: Vec3::NEG_Z,
        size: PanelSize::new(2.0, 1.0),
        fov: 60f32.to_radians(),
        aspect: 16.0 / 9.0,
        screen: Orientation::Landscape,
        eye_height: 1.6,
    };
    c.bench_function("framing_distance", |b| {
        b.iter(|| {
            black_box(framing_distance(
                black_box(input.size),
                input.fov,
                input.aspect,
                input.screen,
            ))
        });
    });
}

criterion_group!(
    benches,
    easing_benchmark,
    picking_benchmark,
    framing_benchmark
);
criterion_main!(benches);
