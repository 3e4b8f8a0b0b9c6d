use std::sync::Arc;
use std::thread;

use glam::Vec3 as GVec3;
use render::{render_frame, render_frame_serial, Camera, RenderSettings, Renderer, SceneStore};
use sdf::{march, Light, Primitive, PrimitiveKind, Scene, Vec3, BACKGROUND, DEFAULT_CAPACITY};

fn demo_scene() -> Scene {
    Scene::from_primitives(
        DEFAULT_CAPACITY,
        [
            Primitive::sphere(Vec3::new(0.0, 0.0, 5.0), 1.0, Vec3::new(1.0, 0.0, 0.0)).unwrap(),
            Primitive::cube(Vec3::new(3.0, 3.0, 5.0), 1.0, Vec3::new(0.0, 1.0, 0.0)).unwrap(),
        ],
    )
    .unwrap()
}

fn small_settings() -> RenderSettings {
    RenderSettings {
        width: 48,
        height: 32,
        ..RenderSettings::default()
    }
}

#[test]
fn parallel_and_serial_frames_are_identical() {
    let scene = demo_scene();
    let camera = Camera::default();
    let light = Light::default();
    let settings = small_settings();

    let parallel = render_frame(&scene, &camera, &light, &settings);
    let serial = render_frame_serial(&scene, &camera, &light, &settings);

    assert_eq!(parallel.width(), 48);
    assert_eq!(parallel.height(), 32);
    let a: Vec<u32> = parallel.as_floats().iter().map(|f| f.to_bits()).collect();
    let b: Vec<u32> = serial.as_floats().iter().map(|f| f.to_bits()).collect();
    assert_eq!(a, b);
}

#[test]
fn each_pixel_matches_a_direct_march() {
    let scene = demo_scene();
    let camera = Camera::new(GVec3::new(0.2, -0.1, 0.0));
    let light = Light::default();
    let settings = small_settings();
    let frame = render_frame(&scene, &camera, &light, &settings);

    for (x, y) in [(0, 0), (24, 16), (30, 5), (47, 31)] {
        let ray = camera.ray_for_pixel(x, y, 48, 32);
        assert_eq!(frame.get(x, y), Some(march(&ray, &scene, &light, &settings.march)));
    }
}

#[test]
fn demo_scene_shows_sphere_in_centre_and_background_in_corner() {
    let scene = demo_scene();
    let frame = render_frame(
        &scene,
        &Camera::default(),
        &Light::default(),
        &RenderSettings {
            width: 64,
            height: 64,
            ..RenderSettings::default()
        },
    );
    let centre = frame.get(32, 32).unwrap();
    assert!(centre.x > 0.5 && centre.y == 0.0, "{centre:?}");
    assert_eq!(frame.get(0, 63), Some(BACKGROUND));
    assert!(frame.covered_pixels() > 0);
}

#[test]
fn preview_scale_reduces_resolution() {
    let settings = RenderSettings::default().preview(2);
    assert_eq!(settings.resolution(), (150, 150));
    let frame = render_frame(&demo_scene(), &Camera::default(), &Light::default(), &settings);
    assert_eq!((frame.width(), frame.height()), (150, 150));
    assert_eq!(RenderSettings::default().preview(1000).resolution(), (1, 1));
}

#[test]
fn empty_scene_renders_black() {
    let frame = render_frame(
        &Scene::new(),
        &Camera::default(),
        &Light::default(),
        &small_settings(),
    );
    assert_eq!(frame.covered_pixels(), 0);
}

#[test]
fn renderer_counts_frames_in_both_modes() {
    let scene = demo_scene();
    let mut renderer = Renderer::new(small_settings());
    let parallel = renderer.render(&scene, &Camera::default(), &Light::default());
    renderer.parallel = false;
    let serial = renderer.render(&scene, &Camera::default(), &Light::default());
    assert_eq!(renderer.frames_rendered(), 2);
    assert_eq!(parallel, serial);
}

#[test]
fn frames_use_one_generation_while_writers_add_primitives() {
    let store = Arc::new(SceneStore::new(demo_scene()));
    let snapshot = store.snapshot();

    let writer = {
        let store = Arc::clone(&store);
        thread::spawn(move || {
            for i in 0..20u8 {
                let x = f32::from(i) - 10.0;
                let position = Vec3::new(x, -2.0, 4.0);
                let _ = store.add_primitive(PrimitiveKind::Sphere, position, 0.5, Vec3::ONE);
            }
        })
    };

    let settings = small_settings();
    let frame = render_frame(&snapshot.scene, &Camera::default(), &Light::default(), &settings);
    writer.join().unwrap();

    let again = render_frame(&snapshot.scene, &Camera::default(), &Light::default(), &settings);
    assert_eq!(frame, again);
    assert_eq!(snapshot.generation, 0);
    assert_eq!(snapshot.scene.len(), 2);
    assert_eq!(store.snapshot().scene.len(), 22);
    assert_eq!(store.generation(), 20);
}

#[test]
fn capacity_overflow_through_store_is_ignored() {
    let store = SceneStore::new(demo_scene());
    let mut accepted = 0;
    for i in 0..40u8 {
        let z = 10.0 + f32::from(i);
        if store
            .add_primitive(PrimitiveKind::Cube, Vec3::new(0.0, 0.0, z), 0.5, Vec3::ONE)
            .is_ok()
        {
            accepted += 1;
        }
    }
    assert_eq!(accepted, DEFAULT_CAPACITY - 2);
    assert_eq!(store.snapshot().scene.len(), DEFAULT_CAPACITY);
}
