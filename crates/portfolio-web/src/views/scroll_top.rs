use wasm_bindgen::prelude::*;
use web_sys::Element;

use portfolio::scroll_to_top;

use super::ViewContext;
use crate::dom::{DomListener, button, set_flag_class};

const CLASS: &str = "scroll-top";

/// Floating control shown near the bottom of the page.
pub(crate) fn build_scroll_top(cx: &mut ViewContext<'_>) -> Result<Element, JsValue> {
    let control = button(cx.document, CLASS, "↑")?;
    control.set_attribute("aria-label", "scroll to top")?;

    let listener = {
        let page = cx.page.clone();
        DomListener::new(&control, "click", move || scroll_to_top(&*page))?
    };
    cx.mounted.listeners.push(listener);

    let near_bottom = cx.scroll.near_bottom();
    set_flag_class(&control, CLASS, "shown", near_bottom.get());
    cx.mounted.subscriptions.push({
        let control = control.clone();
        near_bottom.subscribe(move |&shown| set_flag_class(&control, CLASS, "shown", shown))
    });

    Ok(control)
}
