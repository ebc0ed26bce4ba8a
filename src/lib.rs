//! Linescape - interactive fading line art
//!
//! A stream of rotating, growing, fading line segments spawned at the
//! pointer, one per display refresh. The animation core is platform
//! agnostic; the browser build hosts it in an eframe canvas.

pub mod config;
pub mod core;
pub mod fps;
pub mod time;

#[cfg(all(target_arch = "wasm32", feature = "wasm"))]
mod app;
#[cfg(all(target_arch = "wasm32", feature = "wasm"))]
mod theme;

#[cfg(all(target_arch = "wasm32", feature = "wasm"))]
mod web {
    use tracing::error;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;

    use crate::app::LineArtApp;
    use crate::core::Viewport;

    #[wasm_bindgen(start)]
    pub fn main() {
        console_error_panic_hook::set_once();

        // Initialize tracing for browser console
        tracing_wasm::set_as_global_default();

        let window = web_sys::window().expect("no window");
        let canvas = window
            .document()
            .expect("no document")
            .get_element_by_id("canvas")
            .expect("no canvas element")
            .dyn_into::<web_sys::HtmlCanvasElement>()
            .expect("not a canvas element");

        // Surface size is taken once from the viewport; later resizes are ignored
        let width = window
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);
        let height = window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);
        let viewport = match Viewport::new(width, height) {
            Ok(viewport) => viewport,
            Err(e) => {
                error!(error = %e, "Cannot start line art");
                panic!("{}", e);
            }
        };
        canvas.set_width(width as u32);
        canvas.set_height(height as u32);

        let web_options = eframe::WebOptions::default();

        wasm_bindgen_futures::spawn_local(async move {
            eframe::WebRunner::new()
                .start(
                    canvas,
                    web_options,
                    Box::new(move |cc| Ok(Box::new(LineArtApp::new(cc, viewport)))),
                )
                .await
                .expect("Failed to start eframe");
        });
    }
}
