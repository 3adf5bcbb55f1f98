use wasm_bindgen::prelude::*;
use web_sys::Element;

use portfolio::footer_text;

use super::ViewContext;
use crate::dom::{el, text_el};
use crate::utils::current_year;

pub(crate) fn build_footer(cx: &mut ViewContext<'_>) -> Result<Element, JsValue> {
    let footer = el(cx.document, "footer", "site-footer")?;
    let text = footer_text(&cx.content.profile.name, current_year());
    let line = text_el(cx.document, "p", "footer-text", &text)?;
    let reveal = cx.reveals.footer;
    let wrapper = cx.fade_in("", reveal, &line)?;
    footer.append_child(&wrapper)?;
    Ok(footer)
}
