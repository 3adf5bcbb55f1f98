use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{Document, Element};

use portfolio::{Content, PageReveals, PortfolioConfig, ScrollTracker};

use crate::host::{BrowserPage, BrowserViewport, IntervalScheduler};
use crate::utils::js_error;
use crate::views::{
    Mounted, ViewContext, build_about, build_experience, build_footer, build_hero, build_nav,
    build_projects, build_scroll_top,
};

pub(crate) const ROOT_ID: &str = "portfolio-root";

/// The mounted page. Dropping it removes every listener, observer and timer,
/// then the rendered markup.
pub(crate) struct App {
    root: Element,
    scroll: ScrollTracker,
    mounted: Mounted,
}

impl App {
    /// Renders the page into `#portfolio-root`, or `<body>` when that element
    /// is absent.
    pub(crate) fn mount() -> Result<Self, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;

        let config = PortfolioConfig::embedded().map_err(js_error)?;
        let content = Rc::new(Content::embedded().map_err(js_error)?);
        let host = mount_point(&document)?;

        let root = document.create_element("div")?;
        root.set_class_name("portfolio");
        host.append_child(&root)?;

        let page = Rc::new(BrowserPage::new(window.clone(), document.clone()));
        let viewport = BrowserViewport;
        let scheduler = IntervalScheduler::new(window);
        let reveals = PageReveals::new(&config.reveal);
        let mut scroll = ScrollTracker::new(config.scroll.clone());
        let mut mounted = Mounted::default();

        let result = (|| {
            let mut cx = ViewContext {
                document: &document,
                content: &content,
                config: &config,
                reveals: &reveals,
                page: &page,
                viewport: &viewport,
                scheduler: &scheduler,
                scroll: &scroll,
                mounted: &mut mounted,
            };
            let main = document.create_element("main")?;
            for section in [
                build_hero(&mut cx)?,
                build_about(&mut cx)?,
                build_experience(&mut cx)?,
                build_projects(&mut cx)?,
            ] {
                main.append_child(&section)?;
            }
            let nav = build_nav(&mut cx)?;
            root.append_child(&nav)?;
            root.append_child(&main)?;
            let footer = build_footer(&mut cx)?;
            root.append_child(&footer)?;
            let scroll_top = build_scroll_top(&mut cx)?;
            root.append_child(&scroll_top)?;
            Ok::<(), JsValue>(())
        })();

        if let Err(err) = result {
            mounted.teardown();
            root.remove();
            return Err(err);
        }

        // Sections exist now, so the first reading sees real geometry.
        scroll.attach(&*page, page.clone());
        tracing::info!(
            experiences = content.experiences.len(),
            projects = content.projects.len(),
            "portfolio mounted"
        );

        Ok(Self {
            root,
            scroll,
            mounted,
        })
    }
}

impl Drop for App {
    fn drop(&mut self) {
        self.scroll.detach();
        self.mounted.teardown();
        self.root.remove();
        tracing::info!("portfolio unmounted");
    }
}

fn mount_point(document: &Document) -> Result<Element, JsValue> {
    if let Some(element) = document.get_element_by_id(ROOT_ID) {
        return Ok(element);
    }
    document
        .body()
        .map(Element::from)
        .ok_or_else(|| JsValue::from_str("document has no body"))
}
