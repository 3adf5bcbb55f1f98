use wasm_bindgen::prelude::*;
use web_sys::Element;

use portfolio::SectionId;

use super::ViewContext;
use crate::dom::{append_all, el, text_el};

pub(crate) fn build_about(cx: &mut ViewContext<'_>) -> Result<Element, JsValue> {
    let section = el(cx.document, "section", "about")?;
    section.set_id(SectionId::About.as_str());

    let grid = el(cx.document, "div", "about-grid")?;

    let copy = el(cx.document, "div", "about-copy")?;
    let heading = text_el(cx.document, "h2", "section-heading", "> about_me")?;
    let text = text_el(cx.document, "p", "about-text", &cx.content.profile.about)?;
    append_all(&copy, &[&heading, &text])?;
    let reveal = cx.reveals.about_text;
    let text = cx.fade_in("", reveal, &copy)?;

    // Placeholder frame; the portrait itself is a static asset.
    let portrait = el(cx.document, "div", "portrait")?;
    portrait.set_attribute("role", "img")?;
    portrait.set_attribute("aria-label", &cx.content.profile.portrait_alt)?;
    let reveal = cx.reveals.portrait;
    let portrait = cx.fade_in("about-portrait", reveal, &portrait)?;

    append_all(&grid, &[&text, &portrait])?;
    section.append_child(&grid)?;
    Ok(section)
}
