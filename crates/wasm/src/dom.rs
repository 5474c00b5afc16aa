//! Browser mount: wires the scene to the real page.
//!
//! [`mount`] looks up the three page elements — the `skills` container,
//! the `year` span, the `stars` canvas — renders the static parts once,
//! and returns an [`Animator`] that owns the canvas frame loop. Missing
//! elements are skipped silently; a missing canvas means the loop never
//! starts.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use starlit_core::config::SceneConfig;
use starlit_core::model::{Scene, clock_seed};
use starlit_core::views::render_starfield;
use starlit_protocol::{RenderCommand, ThemeToken, Viewport};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, Window};

/// Chip class expected by the page stylesheet.
const CHIP_CLASS: &str = "chip";

/// Handle to a mounted scene. Dropping it, or calling [`Animator::stop`],
/// halts the frame loop and detaches the resize listener.
#[wasm_bindgen]
pub struct Animator {
    running: Rc<Cell<bool>>,
    raf_id: Rc<Cell<Option<i32>>>,
    frame: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
    resize: Option<Closure<dyn FnMut()>>,
}

#[wasm_bindgen]
impl Animator {
    /// Whether the frame loop is currently scheduled.
    pub fn is_running(&self) -> bool {
        self.running.get()
    }

    /// Stop the loop and release the frame and resize callbacks.
    ///
    /// Terminal: a stopped animator cannot be restarted. Mount again for
    /// a fresh one.
    pub fn stop(&mut self) {
        self.running.set(false);
        if let Some(window) = web_sys::window() {
            if let Some(id) = self.raf_id.take() {
                let _ = window.cancel_animation_frame(id);
            }
            if let Some(resize) = self.resize.take() {
                let _ = window
                    .remove_event_listener_with_callback("resize", resize.as_ref().unchecked_ref());
            }
        }
        self.frame.borrow_mut().take();
    }
}

impl Animator {
    /// An animator that never started: the page has no usable canvas.
    fn idle() -> Self {
        Self {
            running: Rc::new(Cell::new(false)),
            raf_id: Rc::new(Cell::new(None)),
            frame: Rc::new(RefCell::new(None)),
            resize: None,
        }
    }
}

impl Drop for Animator {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Mount the scene onto the current document.
///
/// Chips and the year are rendered immediately; the starfield loop then
/// starts if — and only if — the canvas and its 2D context exist.
#[wasm_bindgen]
pub fn mount(config_json: Option<String>) -> Result<Animator, JsValue> {
    console_error_panic_hook::set_once();

    let config = match config_json.as_deref() {
        Some(json) => SceneConfig::from_json(json.as_bytes())
            .map_err(|e| JsValue::from_str(&e.to_string()))?,
        None => SceneConfig::default(),
    };

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let scene = Scene::new(&config, window_viewport(&window), clock_seed());

    render_chips_into(&document, &scene)?;
    stamp_year(&document, &scene);
    start_starfield(&window, &document, scene)
}

/// Viewport of the whole window, in CSS pixels.
fn window_viewport(window: &Window) -> Viewport {
    let width = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or_default();
    let height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or_default();
    Viewport::new(width, height)
}

/// Append one `span.chip` per skill label, in order. A page without the
/// container simply gets no chips.
fn render_chips_into(document: &Document, scene: &Scene) -> Result<(), JsValue> {
    let Some(container) = document.get_element_by_id("skills") else {
        return Ok(());
    };
    for label in scene.skills.labels() {
        let el = document.create_element("span")?;
        el.set_class_name(CHIP_CLASS);
        el.set_text_content(Some(label.as_str()));
        container.append_child(&el)?;
    }
    Ok(())
}

/// Write the year's decimal string into the `year` element, if present.
fn stamp_year(document: &Document, scene: &Scene) {
    if let Some(el) = document.get_element_by_id("year") {
        el.set_text_content(Some(&scene.year.to_string()));
    }
}

/// Size the canvas surface to the window and report the new viewport.
fn sync_canvas(canvas: &HtmlCanvasElement, window: &Window) -> Viewport {
    let viewport = window_viewport(window);
    canvas.set_width(viewport.width as u32);
    canvas.set_height(viewport.height as u32);
    viewport
}

fn start_starfield(
    window: &Window,
    document: &Document,
    scene: Scene,
) -> Result<Animator, JsValue> {
    let Some(canvas) = document
        .get_element_by_id("stars")
        .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
    else {
        return Ok(Animator::idle());
    };
    let Some(ctx) = canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|obj| obj.dyn_into::<CanvasRenderingContext2d>().ok())
    else {
        return Ok(Animator::idle());
    };

    sync_canvas(&canvas, window);

    let scene = Rc::new(RefCell::new(scene));
    let running = Rc::new(Cell::new(true));
    let raf_id = Rc::new(Cell::new(None));

    // Resize mirrors the window into the canvas surface. Star positions
    // are deliberately left alone; strays drift back on their own.
    let resize = {
        let scene = Rc::clone(&scene);
        let canvas = canvas.clone();
        let window = window.clone();
        Closure::<dyn FnMut()>::new(move || {
            let viewport = sync_canvas(&canvas, &window);
            scene.borrow_mut().resize(viewport);
        })
    };
    window.add_event_listener_with_callback("resize", resize.as_ref().unchecked_ref())?;

    // The frame closure reschedules itself, so it holds a handle to its
    // own cell. `stop` breaks the cycle by clearing the cell.
    let frame: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    {
        let frame_handle = Rc::clone(&frame);
        let scene = Rc::clone(&scene);
        let running = Rc::clone(&running);
        let raf_id = Rc::clone(&raf_id);
        let window = window.clone();
        *frame.borrow_mut() = Some(Closure::new(move || {
            if !running.get() {
                return;
            }
            {
                let mut scene = scene.borrow_mut();
                let viewport = scene.viewport();
                replay(&ctx, &render_starfield(&scene.starfield, &viewport), &viewport);
                scene.tick();
            }
            if let Some(closure) = frame_handle.borrow().as_ref() {
                match window.request_animation_frame(closure.as_ref().unchecked_ref()) {
                    Ok(id) => raf_id.set(Some(id)),
                    Err(err) => web_sys::console::error_1(&err),
                }
            }
        }));
    }

    if let Some(closure) = frame.borrow().as_ref() {
        let id = window.request_animation_frame(closure.as_ref().unchecked_ref())?;
        raf_id.set(Some(id));
    }

    Ok(Animator {
        running,
        raf_id,
        frame,
        resize: Some(resize),
    })
}

/// Replay starfield commands onto the 2D context.
fn replay(ctx: &CanvasRenderingContext2d, commands: &[RenderCommand], viewport: &Viewport) {
    ctx.clear_rect(0.0, 0.0, viewport.width, viewport.height);
    for cmd in commands {
        match cmd {
            RenderCommand::DrawCircle {
                center,
                radius,
                color,
                opacity,
            } => {
                ctx.set_global_alpha(*opacity);
                ctx.set_fill_style_str(css_color(*color));
                ctx.begin_path();
                if ctx
                    .arc(center.x, center.y, *radius, 0.0, std::f64::consts::TAU)
                    .is_ok()
                {
                    ctx.fill();
                }
            }
            // Chips and the year live in the DOM, not on the canvas.
            _ => {}
        }
    }
    ctx.set_global_alpha(1.0);
}

fn css_color(token: ThemeToken) -> &'static str {
    match token {
        ThemeToken::Background => "#0b1020",
        ThemeToken::StarFill => "#ffffff",
        ThemeToken::ChipBackground => "#151b2e",
        ThemeToken::ChipBorder => "#2a3350",
        ThemeToken::ChipText => "#dbe2f4",
        ThemeToken::FooterText => "#8891ab",
    }
}
