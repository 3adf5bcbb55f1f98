//! Browser front end for the portfolio page.

mod app;
mod dom;
mod host;
mod utils;
mod views;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

use crate::app::App;

thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();
    mount()
}

/// Renders the page, replacing any previous mount.
#[wasm_bindgen]
pub fn mount() -> Result<(), JsValue> {
    unmount();
    match App::mount() {
        Ok(app) => {
            APP.with(|slot| *slot.borrow_mut() = Some(app));
            Ok(())
        }
        Err(err) => {
            tracing::warn!(?err, "failed to mount portfolio");
            web_sys::console::error_1(&err);
            Err(err)
        }
    }
}

/// Tears the page down and releases every browser resource it holds.
#[wasm_bindgen]
pub fn unmount() {
    let app = APP.with(|slot| slot.borrow_mut().take());
    drop(app);
}

/// Whether a page is currently mounted.
#[wasm_bindgen(js_name = isMounted)]
pub fn is_mounted() -> bool {
    APP.with(|slot| slot.borrow().is_some())
}
