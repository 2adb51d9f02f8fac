//! Agiliza task board
//!
//! Client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It renders state fetched from the Agiliza HTTP API:
//! authentication, a drag-and-drop kanban board and a statistics dashboard.

mod api;
mod app;
mod components;
mod core;
mod features;
mod models;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    leptos::mount::mount_to_body(app::App);
}
