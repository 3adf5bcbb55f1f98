use std::rc::Rc;
use std::time::Duration;

use portfolio::testing::{ManualPage, ManualScheduler, ManualViewport};
use portfolio::{
    Content, ExperienceSelector, PageReveals, PortfolioConfig, ScrollMetrics, ScrollTracker,
    SectionId, Span, TypewriterText, VisibilityTracker, navigate_to,
};
use pretty_assertions::assert_eq;

struct Page {
    scroll: ScrollTracker,
    name: TypewriterText,
    reveals: Vec<VisibilityTracker>,
    selector: ExperienceSelector,
}

fn layout() -> Rc<ManualPage> {
    let page = Rc::new(ManualPage::new(ScrollMetrics::new(0.0, 900.0, 4000.0)));
    page.set_span(SectionId::Home, Span::new(0.0, 900.0));
    page.set_span(SectionId::About, Span::new(900.0, 1700.0));
    page.set_span(SectionId::Experience, Span::new(1700.0, 2700.0));
    page.set_span(SectionId::Projects, Span::new(2700.0, 3800.0));
    page
}

fn mount(
    config: &PortfolioConfig,
    content: &Content,
    host: &Rc<ManualPage>,
    viewport: &ManualViewport,
    scheduler: &ManualScheduler,
) -> Page {
    let mut scroll = ScrollTracker::new(config.scroll.clone());
    scroll.attach(&**host, host.clone());

    let mut name = TypewriterText::new(config.typewriter.clone());
    name.mount(scheduler, &content.profile.name);

    let reveals = ["hero", "about", "portrait", "experience", "projects", "footer"]
        .into_iter()
        .map(|target| {
            let mut tracker = VisibilityTracker::new(config.reveal.threshold);
            tracker.mount(viewport, Some(target));
            tracker
        })
        .collect();

    let selector = ExperienceSelector::new(content.experiences.clone()).unwrap();

    Page {
        scroll,
        name,
        reveals,
        selector,
    }
}

#[test]
fn scrolling_through_the_page() {
    let config = PortfolioConfig::default();
    let content = Content::embedded().unwrap();
    let host = layout();
    let viewport = ManualViewport::new();
    let scheduler = ManualScheduler::new();
    let page = mount(&config, &content, &host, &viewport, &scheduler);

    let mut seen = Vec::new();
    for offset in [0.0, 500.0, 900.0, 1800.0, 2900.0, 3100.0] {
        host.scroll_to_offset(offset);
        seen.push((
            offset,
            page.scroll.past_hero().get(),
            page.scroll.near_bottom().get(),
            page.scroll.active_section().get(),
        ));
    }

    assert_eq!(
        seen,
        vec![
            (0.0, false, false, SectionId::Home),
            (500.0, false, false, SectionId::About),
            (900.0, true, false, SectionId::About),
            (1800.0, true, false, SectionId::Experience),
            (2900.0, true, false, SectionId::Projects),
            (3100.0, true, true, SectionId::Projects),
        ]
    );
}

#[test]
fn scroll_without_metrics_changes_nothing() {
    let config = PortfolioConfig::default();
    let content = Content::embedded().unwrap();
    let host = layout();
    let viewport = ManualViewport::new();
    let scheduler = ManualScheduler::new();
    let page = mount(&config, &content, &host, &viewport, &scheduler);

    host.scroll_to_offset(3100.0);
    let changes = Rc::new(std::cell::Cell::new(0));
    let _watch = {
        let changes = changes.clone();
        page.scroll
            .active_section()
            .subscribe(move |_| changes.set(changes.get() + 1))
    };

    host.clear_metrics();
    host.fire_scroll();
    host.scroll_to_offset(0.0);

    assert_eq!(changes.get(), 0);
    assert_eq!(page.scroll.active_section().get(), SectionId::Projects);
    assert!(page.scroll.past_hero().get());
    assert!(page.scroll.near_bottom().get());
}

#[test]
fn section_removed_while_attached_keeps_last_active() {
    let config = PortfolioConfig::default();
    let content = Content::embedded().unwrap();
    let host = layout();
    let viewport = ManualViewport::new();
    let scheduler = ManualScheduler::new();
    let page = mount(&config, &content, &host, &viewport, &scheduler);

    host.scroll_to_offset(1100.0);
    assert_eq!(page.scroll.active_section().get(), SectionId::About);

    host.remove_span(SectionId::Experience);
    // Midpoint 2250 sat inside Experience.
    host.scroll_to_offset(1800.0);
    assert_eq!(page.scroll.active_section().get(), SectionId::About);
    assert!(page.scroll.past_hero().get());

    host.scroll_to_offset(2900.0);
    assert_eq!(page.scroll.active_section().get(), SectionId::Projects);

    navigate_to(&*host, &*host, SectionId::Experience, &config.scroll);
    assert!(host.scroll_requests().is_empty());
}

#[test]
fn hero_name_types_out_while_cursor_blinks() {
    let config = PortfolioConfig::default();
    let content = Content::embedded().unwrap();
    let host = layout();
    let viewport = ManualViewport::new();
    let scheduler = ManualScheduler::new();
    let page = mount(&config, &content, &host, &viewport, &scheduler);

    let mut typed = Vec::new();
    for _ in 0..10 {
        scheduler.advance(Duration::from_millis(100));
        typed.push(page.name.text().get());
    }

    assert_eq!(
        typed,
        vec![
            "k", "ka", "kat", "kate", "kate ", "kate l", "kate li", "kate liu", "kate liu",
            "kate liu",
        ]
    );
    assert!(!page.name.is_typing());
    // 1000ms: the cursor has toggled once, at 530ms.
    assert!(!page.name.cursor_visible().get());
    scheduler.advance(Duration::from_millis(60));
    assert!(page.name.cursor_visible().get());
}

#[test]
fn reveals_follow_viewport_reports() {
    let config = PortfolioConfig::default();
    let content = Content::embedded().unwrap();
    let host = layout();
    let viewport = ManualViewport::new();
    let scheduler = ManualScheduler::new();
    let page = mount(&config, &content, &host, &viewport, &scheduler);
    let reveals = PageReveals::new(&config.reveal);

    viewport.report("about", 0.05);
    assert!(!page.reveals[1].is_visible());
    assert_eq!(
        reveals.about_text.frame(page.reveals[1].is_visible(), &config.reveal).opacity,
        0.0
    );

    viewport.report("about", 0.1);
    assert!(page.reveals[1].is_visible());
    assert_eq!(
        reveals.about_text.frame(page.reveals[1].is_visible(), &config.reveal).opacity,
        1.0
    );
    assert!(!page.reveals[0].is_visible());
}

#[test]
fn nav_clicks_and_selection() {
    let config = PortfolioConfig::default();
    let content = Content::embedded().unwrap();
    let host = layout();
    let viewport = ManualViewport::new();
    let scheduler = ManualScheduler::new();
    let page = mount(&config, &content, &host, &viewport, &scheduler);

    navigate_to(&*host, &*host, SectionId::Projects, &config.scroll);
    assert_eq!(host.scroll_requests(), vec![2620.0]);

    let (mathworks, _) = page
        .selector
        .options()
        .find(|(_, experience)| experience.company == "MathWorks")
        .unwrap();
    page.selector.select(mathworks);
    assert_eq!(page.selector.selected(), &content.experiences[1]);
}

#[test]
fn unmount_leaves_nothing_registered() {
    let config = PortfolioConfig::default();
    let content = Content::embedded().unwrap();
    let host = layout();
    let viewport = ManualViewport::new();
    let scheduler = ManualScheduler::new();
    let mut page = mount(&config, &content, &host, &viewport, &scheduler);

    assert_eq!(host.listener_count(), 1);
    assert_eq!(viewport.observer_count(), 6);
    assert_eq!(scheduler.active_tasks(), 2);

    page.scroll.detach();
    page.name.unmount();
    for tracker in &mut page.reveals {
        tracker.unmount();
    }

    assert_eq!(host.listener_count(), 0);
    assert_eq!(viewport.observer_count(), 0);
    assert_eq!(scheduler.active_tasks(), 0);

    let text_before = page.name.text().get();
    scheduler.advance(Duration::from_secs(10));
    host.scroll_to_offset(3000.0);
    viewport.report("hero", 1.0);

    assert_eq!(page.name.text().get(), text_before);
    assert!(!page.scroll.past_hero().get());
    assert!(!page.reveals[0].is_visible());
}

#[test]
fn dropping_the_page_releases_everything() {
    let config = PortfolioConfig::default();
    let content = Content::embedded().unwrap();
    let host = layout();
    let viewport = ManualViewport::new();
    let scheduler = ManualScheduler::new();

    let page = mount(&config, &content, &host, &viewport, &scheduler);
    drop(page);

    assert_eq!(host.listener_count(), 0);
    assert_eq!(viewport.observer_count(), 0);
    assert_eq!(scheduler.active_tasks(), 0);
}
