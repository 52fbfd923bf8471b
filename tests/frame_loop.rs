//! Drives the engine the way the window layer does, without a GPU.

use busview::camera::{NavigationMode, ViewOverlay};
use busview::engine::ViewerRequest;
use busview::input::InputEvent;
use busview::options::Options;
use busview::renderer::RecordingRenderer;
use busview::BusViewEngine;

const DT: f32 = 1.0 / 60.0;

fn key(engine: &mut BusViewEngine, name: &str, pressed: bool) {
    engine.handle_input(&InputEvent::Key {
        key: name.to_owned(),
        pressed,
    });
}

fn tap(engine: &mut BusViewEngine, name: &str) -> Vec<ViewerRequest> {
    key(engine, name, true);
    let requests = engine.update(DT);
    key(engine, name, false);
    requests
}

fn draw_count(engine: &BusViewEngine) -> usize {
    let mut renderer = RecordingRenderer::default();
    engine.draw(&mut renderer);
    renderer.calls.len()
}

#[test]
fn exterior_and_interior_draw_different_sets() {
    let mut engine = BusViewEngine::new(Options::default());
    let exterior = draw_count(&engine);
    assert!(exterior > 0);

    let _ = tap(&mut engine, "Digit5");
    assert_eq!(engine.camera().overlay(), ViewOverlay::Driver);
    assert_eq!(draw_count(&engine), engine.scene().interior_len());

    let _ = tap(&mut engine, "KeyB");
    assert_eq!(engine.camera().overlay(), ViewOverlay::BirdsEye);
    assert_eq!(draw_count(&engine), exterior);
}

#[test]
fn driving_for_one_second() {
    let mut engine = BusViewEngine::new(Options::default());
    key(&mut engine, "KeyF", true);
    for _ in 0..60 {
        let _ = engine.update(DT);
    }
    key(&mut engine, "KeyF", false);

    assert!((engine.bus().position + 5.0).abs() < 1e-3);
    assert!((engine.bus().wheel_rotation - 200.0).abs() < 1e-2);
}

#[test]
fn orbit_then_overlay_then_back() {
    let mut engine = BusViewEngine::new(Options::default());
    let _ = tap(&mut engine, "KeyM");
    assert_eq!(engine.camera().navigation_mode(), NavigationMode::Orbit);
    let orbit_pose = *engine.camera().pose();

    let _ = tap(&mut engine, "Digit3");
    assert_eq!(engine.camera().navigation_mode(), NavigationMode::FreeFlight);

    let _ = tap(&mut engine, "Digit3");
    assert_eq!(engine.camera().navigation_mode(), NavigationMode::Orbit);
    assert_eq!(engine.camera().overlay(), ViewOverlay::None);
    assert!((engine.camera().pose().position - orbit_pose.position).length() < 1e-4);
}

#[test]
fn custom_bindings_from_toml() {
    let options = Options::from_toml(
        r#"
[keybindings]
quit = "KeyQ"
move_down = "KeyC"
"#,
    )
    .unwrap();
    let mut engine = BusViewEngine::new(options);
    assert_eq!(tap(&mut engine, "KeyQ"), vec![ViewerRequest::Exit]);
    assert!(tap(&mut engine, "Escape").is_empty());
}
