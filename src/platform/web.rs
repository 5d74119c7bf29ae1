//! Browser backend and JS bindings
//!
//! `Confetti` is the handle pages construct once and keep around:
//!
//! ```js
//! const confetti = new Confetti();
//! await confetti.fireCorners();
//! confetti.fire({ particleCount: 80, origin: { y: 0.7 } });
//! confetti.stop();
//! ```

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use serde::de::DeserializeOwned;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use super::{Backend, FrameHandle};
use crate::consts::CORNER_PARTICLE_COUNT;
use crate::engine::ConfettiEngine;
use crate::renderer::OverlayCanvas;
use crate::settings::{QualityPreset, Settings};
use crate::sim::ConfettiOptions;

/// Install the panic hook and console logger when the module loads
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"Confetti logger already initialized".into());
    }
}

/// Host backed by `window`, `document.body` and `requestAnimationFrame`
#[derive(Default)]
pub struct WebBackend {
    on_frame: Option<js_sys::Function>,
}

impl WebBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Function `requestAnimationFrame` should invoke
    pub fn set_frame_callback(&mut self, callback: js_sys::Function) {
        self.on_frame = Some(callback);
    }
}

impl Backend for WebBackend {
    type Surface = OverlayCanvas;

    fn prefers_reduced_motion(&self) -> bool {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-reduced-motion)").ok().flatten())
            .is_some_and(|query| query.matches())
    }

    fn create_surface(&mut self, z_index: i32) -> Option<OverlayCanvas> {
        match OverlayCanvas::attach(z_index) {
            Ok(canvas) => Some(canvas),
            Err(e) => {
                log::warn!("Confetti overlay unavailable: {}", e);
                None
            }
        }
    }

    fn remove_surface(&mut self, surface: OverlayCanvas) {
        surface.detach();
    }

    fn request_frame(&mut self) -> Option<FrameHandle> {
        let callback = self.on_frame.as_ref()?;
        let window = web_sys::window()?;
        window
            .request_animation_frame(callback)
            .ok()
            .map(FrameHandle)
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        if let Some(window) = web_sys::window() {
            let _ = window.cancel_animation_frame(handle.0);
        }
    }
}

/// Read a plain JS value through JSON; `undefined`/`null` give the default
fn from_js<T: DeserializeOwned + Default>(value: &JsValue) -> Result<T, String> {
    if value.is_undefined() || value.is_null() {
        return Ok(T::default());
    }
    let json: String = js_sys::JSON::stringify(value)
        .map_err(|e| format!("{:?}", e))?
        .into();
    serde_json::from_str(&json).map_err(|e| e.to_string())
}

fn resolved() -> js_sys::Promise {
    js_sys::Promise::resolve(&JsValue::UNDEFINED)
}

/// Page-level confetti handle
#[wasm_bindgen]
pub struct Confetti {
    // Dropped first so a pending frame is cancelled before the callback goes
    engine: Rc<RefCell<ConfettiEngine<WebBackend>>>,
    _on_frame: Closure<dyn FnMut(f64)>,
}

impl Default for Confetti {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl Confetti {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Confetti {
        let seed = js_sys::Date::now() as u64;
        let engine = Rc::new(RefCell::new(ConfettiEngine::with_seed(
            WebBackend::new(),
            Settings::load(),
            seed,
        )));

        let weak: Weak<RefCell<ConfettiEngine<WebBackend>>> = Rc::downgrade(&engine);
        let on_frame = Closure::<dyn FnMut(f64)>::new(move |_time: f64| {
            if let Some(engine) = weak.upgrade() {
                engine.borrow_mut().frame();
            }
        });
        engine
            .borrow_mut()
            .backend_mut()
            .set_frame_callback(on_frame.as_ref().unchecked_ref::<js_sys::Function>().clone());

        log::info!("Confetti ready (seed {})", seed);
        Self {
            engine,
            _on_frame: on_frame,
        }
    }

    /// Fire one burst. Resolves once it is scheduled, not when it ends.
    pub fn fire(&self, options: JsValue) -> js_sys::Promise {
        match from_js::<ConfettiOptions>(&options) {
            Ok(options) => {
                if let Err(e) = self.engine.borrow_mut().fire(&options) {
                    log::warn!("Confetti options rejected: {}", e);
                }
            }
            Err(e) => log::warn!("Could not read confetti options: {}", e),
        }
        resolved()
    }

    /// Mirrored bursts from both bottom corners
    #[wasm_bindgen(js_name = fireCorners)]
    pub fn fire_corners(&self, particle_count: Option<u32>, colors: JsValue) -> js_sys::Promise {
        let count = particle_count.map_or(CORNER_PARTICLE_COUNT, |c| c as usize);
        match from_js::<Option<Vec<String>>>(&colors) {
            Ok(colors) => {
                let result = self
                    .engine
                    .borrow_mut()
                    .fire_corners(count, colors.as_deref());
                if let Err(e) = result {
                    log::warn!("Corner confetti rejected: {}", e);
                }
            }
            Err(e) => log::warn!("Could not read confetti colors: {}", e),
        }
        resolved()
    }

    /// Cancel the animation and remove the overlay
    pub fn stop(&self) {
        self.engine.borrow_mut().stop();
    }

    #[wasm_bindgen(getter, js_name = isRunning)]
    pub fn is_running(&self) -> bool {
        self.engine.borrow().is_running()
    }

    #[wasm_bindgen(js_name = setReducedMotion)]
    pub fn set_reduced_motion(&self, reduced: bool) {
        let mut engine = self.engine.borrow_mut();
        engine.settings_mut().reduced_motion = reduced;
        engine.settings().save();
    }

    /// Returns false for an unknown preset name
    #[wasm_bindgen(js_name = setQuality)]
    pub fn set_quality(&self, preset: &str) -> bool {
        let Some(preset) = QualityPreset::from_str(preset) else {
            return false;
        };
        let mut engine = self.engine.borrow_mut();
        engine.settings_mut().quality = preset;
        engine.settings().save();
        true
    }
}
