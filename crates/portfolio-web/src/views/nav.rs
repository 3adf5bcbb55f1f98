use wasm_bindgen::prelude::*;
use web_sys::Element;

use portfolio::{SectionId, navigate_to, nav_items};

use super::ViewContext;
use crate::dom::{DomListener, append_all, button, el, set_flag_class};

const NAV_CLASS: &str = "site-nav";
const NAV_ITEM_CLASS: &str = "nav-item";

/// Fixed nav bar: hidden over the hero, highlights the section in view.
pub(crate) fn build_nav(cx: &mut ViewContext<'_>) -> Result<Element, JsValue> {
    let nav = el(cx.document, "nav", NAV_CLASS)?;
    let inner = el(cx.document, "div", "nav-inner")?;

    let brand = button(cx.document, "nav-brand", &cx.content.profile.name)?;
    cx.mounted
        .listeners
        .push(nav_listener(cx, &brand, SectionId::Home)?);

    let links = el(cx.document, "div", "nav-links")?;
    let mut items: Vec<(SectionId, Element)> = Vec::new();
    for item in nav_items() {
        let element = button(cx.document, NAV_ITEM_CLASS, item.label)?;
        cx.mounted
            .listeners
            .push(nav_listener(cx, &element, item.section)?);
        links.append_child(&element)?;
        items.push((item.section, element));
    }

    append_all(&inner, &[&brand, &links])?;
    nav.append_child(&inner)?;

    let past_hero = cx.scroll.past_hero();
    set_flag_class(&nav, NAV_CLASS, "shown", past_hero.get());
    cx.mounted.subscriptions.push({
        let nav = nav.clone();
        past_hero.subscribe(move |&shown| set_flag_class(&nav, NAV_CLASS, "shown", shown))
    });

    let active = cx.scroll.active_section();
    highlight(&items, active.get());
    cx.mounted
        .subscriptions
        .push(active.subscribe(move |&section| highlight(&items, section)));

    Ok(nav)
}

fn nav_listener(
    cx: &ViewContext<'_>,
    element: &Element,
    section: SectionId,
) -> Result<DomListener, JsValue> {
    let page = cx.page.clone();
    let config = cx.config.scroll.clone();
    DomListener::new(element, "click", move || {
        navigate_to(&*page, &*page, section, &config);
    })
}

fn highlight(items: &[(SectionId, Element)], active: SectionId) {
    for (section, element) in items {
        set_flag_class(element, NAV_ITEM_CLASS, "active", *section == active);
    }
}
