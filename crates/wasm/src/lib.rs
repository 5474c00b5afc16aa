//! WASM bridge for starlit.
//!
//! Two surfaces: a headless scene registry for hosts that drive their own
//! drawing (create/advance/resize, commands out as JSON), and — on wasm32
//! only — the [`dom`] module, which mounts the scene onto a real page and
//! owns the frame loop.

use std::sync::Mutex;

use serde::Serialize;
use starlit_core::config::SceneConfig;
use starlit_core::model::Scene;
use starlit_core::views::render_scene;
use starlit_protocol::Viewport;
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
pub mod dom;

static SCENES: Mutex<Vec<Scene>> = Mutex::new(Vec::new());

/// Build a scene from a JSON config document. An empty string means the
/// stock page. Returns a handle (index) for later calls.
#[wasm_bindgen]
pub fn create_scene(
    config_json: &str,
    width: f64,
    height: f64,
    seed: u64,
) -> Result<usize, JsError> {
    let config = if config_json.trim().is_empty() {
        SceneConfig::default()
    } else {
        SceneConfig::from_json(config_json.as_bytes()).map_err(|e| JsError::new(&e.to_string()))?
    };
    let scene = Scene::new(&config, Viewport::new(width, height), seed);
    let mut scenes = SCENES.lock().unwrap();
    let idx = scenes.len();
    scenes.push(scene);
    Ok(idx)
}

/// Advance a scene by `frames` ticks.
#[wasm_bindgen]
pub fn advance_scene(scene_index: usize, frames: u32) -> Result<(), JsError> {
    let mut scenes = SCENES.lock().unwrap();
    let scene = scenes
        .get_mut(scene_index)
        .ok_or_else(|| JsError::new("invalid scene index"))?;
    for _ in 0..frames {
        scene.tick();
    }
    Ok(())
}

/// Track a viewport change. Stars keep their positions.
#[wasm_bindgen]
pub fn resize_scene(scene_index: usize, width: f64, height: f64) -> Result<(), JsError> {
    let mut scenes = SCENES.lock().unwrap();
    let scene = scenes
        .get_mut(scene_index)
        .ok_or_else(|| JsError::new("invalid scene index"))?;
    scene.resize(Viewport::new(width, height));
    Ok(())
}

/// Render the scene's current frame, returning render commands as JSON.
#[wasm_bindgen]
pub fn render_scene_commands(scene_index: usize) -> Result<String, JsError> {
    let scenes = SCENES.lock().unwrap();
    let scene = scenes
        .get(scene_index)
        .ok_or_else(|| JsError::new("invalid scene index"))?;
    let viewport = scene.viewport();
    let commands = render_scene(scene, &viewport);
    serde_json::to_string(&commands).map_err(|e| JsError::new(&e.to_string()))
}

#[derive(Serialize)]
struct SceneInfo {
    year: i32,
    skills: usize,
    stars: usize,
    frames: u64,
    width: f64,
    height: f64,
}

/// Scene metadata as JSON.
#[wasm_bindgen]
pub fn scene_info(scene_index: usize) -> Result<String, JsError> {
    let scenes = SCENES.lock().unwrap();
    let scene = scenes
        .get(scene_index)
        .ok_or_else(|| JsError::new("invalid scene index"))?;
    let viewport = scene.viewport();
    let info = SceneInfo {
        year: scene.year,
        skills: scene.skills.len(),
        stars: scene.starfield.len(),
        frames: scene.frames(),
        width: viewport.width,
        height: viewport.height,
    };
    serde_json::to_string(&info).map_err(|e| JsError::new(&e.to_string()))
}
