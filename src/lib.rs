#![cfg_attr(target_arch = "wasm32", allow(dead_code))]

pub mod config;
pub mod error;
pub mod geom;
pub mod gesture;
pub mod mover;
pub mod quadrants;
pub mod scene;

pub use error::DemoError;

// Only compile wasm-specific code when targeting wasm32.

#[cfg(target_arch = "wasm32")]
mod wasm {
    use log::{error, info, warn};
    use wasm_bindgen::prelude::*;

    use crate::config::{DemoKind, CANVAS_ID, DEMO_ATTRIBUTE};
    use crate::DemoError;

    mod gl;
    mod quadrants;
    mod render;
    mod sketch;
    mod status;
    mod triangle;

    #[cfg(test)]
    wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

    /// Startup failures are reported here once; nothing is thrown back to the
    /// page's `init()` promise.
    #[cfg_attr(not(test), wasm_bindgen(start))]
    pub fn main() {
        console_error_panic_hook::set_once();
        // A logger may already be installed when the module is re-initialised.
        let _ = console_log::init_with_level(log::Level::Debug);

        if let Err(err) = run() {
            let message = error_message(&err);
            error!("Failed to initialize program: {message}");
            if let Some(window) = web_sys::window() {
                window.alert_with_message(&message).ok();
            }
        }
    }

    fn error_message(err: &JsValue) -> String {
        err.as_string()
            .or_else(|| err.dyn_ref::<js_sys::Error>().map(|e| String::from(e.message())))
            .unwrap_or_else(|| format!("{err:?}"))
    }

    fn run() -> Result<(), JsValue> {
        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;
        let Some(element) = document.get_element_by_id(CANVAS_ID) else {
            warn!("no `#{CANVAS_ID}` element on this page, nothing to run");
            return Ok(());
        };
        let canvas = element
            .dyn_into::<web_sys::HtmlCanvasElement>()
            .map_err(|_| DemoError::MissingElement(CANVAS_ID.to_string()))?;

        let kind = DemoKind::from_attribute(canvas.get_attribute(DEMO_ATTRIBUTE).as_deref())?;
        info!("starting {kind:?} demo");

        match kind {
            DemoKind::Quadrants => quadrants::start(canvas),
            DemoKind::Triangle => triangle::start(canvas),
            DemoKind::Intersect => sketch::start(canvas),
        }
    }

}
