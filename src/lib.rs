pub mod api;
pub mod app;
pub mod components;
pub mod config;
pub mod db;
pub mod error;
pub mod guards;
pub mod models;
pub mod state;
pub mod storage;
pub mod stores;
pub mod utils;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;

    utils::panic_hook::init();
    leptos::mount_to_body(App);
}
