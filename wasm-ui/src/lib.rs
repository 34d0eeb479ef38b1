//! Web UI for creative-agent
//!
//! A Yew front end for the Creative Agent form: submit a brief as text,
//! an image or a video, and browse the highlighted plan that comes back.

mod app;
mod browser;
mod components;
mod view;

pub use browser::{HttpTransport, NavigatorClipboard, Upload, iso_now, save_download};

use wasm_bindgen::prelude::*;

/// Entry point for the WASM application.
#[wasm_bindgen(start)]
pub fn run_app() {
    // Initialize panic hook for better error messages
    console_error_panic_hook::set_once();

    // Mount the Yew app
    yew::Renderer::<app::App>::new().render();
}
