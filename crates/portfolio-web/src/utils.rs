use std::fmt::Display;

use wasm_bindgen::prelude::JsValue;

pub(crate) fn js_error(err: impl Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

pub(crate) fn current_year() -> i32 {
    js_sys::Date::new_0().get_full_year() as i32
}
