use anyhow::Result;
use hovertip::{
    extract_fragment, FetchCompletion, FetchError, FetchPolicy, FetchRequest, Key, PageModel,
    PointerEvent, Rect, RequestGeneration, TargetRef, TimerQueue, TooltipConfig,
    TooltipController, TooltipState, XmlFetcher,
};
use std::collections::VecDeque;
use std::time::Duration;

/// Fetcher that records requests and completes them only when told to.
#[derive(Default)]
struct ManualFetcher {
    issued: Vec<FetchRequest>,
    ready: VecDeque<FetchCompletion>,
}

impl ManualFetcher {
    /// Completes the request with `generation` using the given XML body.
    fn resolve(&mut self, generation: u64, xml: &str) {
        let request = self
            .issued
            .iter()
            .find(|r| r.generation == RequestGeneration(generation))
            .expect("request was issued");
        self.ready
            .push_back(FetchCompletion::for_request(request, extract_fragment(xml)));
    }

    fn fail(&mut self, generation: u64, err: FetchError) {
        let request = self
            .issued
            .iter()
            .find(|r| r.generation == RequestGeneration(generation))
            .expect("request was issued");
        self.ready.push_back(FetchCompletion::for_request(request, Err(err)));
    }
}

impl XmlFetcher for ManualFetcher {
    fn fetch(&mut self, request: FetchRequest) {
        self.issued.push(request);
    }

    fn poll_completion(&mut self) -> Option<FetchCompletion> {
        self.ready.pop_front()
    }

    fn has_pending(&self) -> bool {
        !self.ready.is_empty()
    }
}

type Controller = TooltipController<PageModel, TimerQueue, ManualFetcher>;

fn page() -> PageModel {
    let mut page = PageModel::new();
    page.place("tooltipdiv", Rect::default());
    page.place("e1", Rect::new(50.0, 10.0, 120.0, 16.0));
    page.place("e2", Rect::new(50.0, 30.0, 120.0, 16.0));
    page
}

fn controller_with(config: TooltipConfig) -> Controller {
    TooltipController::new(config, page(), TimerQueue::new(), ManualFetcher::default())
}

fn controller() -> Controller {
    controller_with(TooltipConfig::default().with_base_url("http://repo.example/repository"))
}

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

fn at() -> PointerEvent {
    PointerEvent::at(60.0, 15.0)
}

fn popup_content(ctl: &Controller) -> String {
    ctl.locator().element("tooltipdiv").unwrap().content.clone()
}

fn popup_visible(ctl: &Controller) -> bool {
    ctl.locator().element("tooltipdiv").unwrap().visible
}

#[test]
fn test_hover_then_leave_before_show_delay_never_renders() {
    let mut ctl = controller();
    let e1: TargetRef = "e1".into();

    ctl.on_mouse_over(at(), &e1);
    ctl.advance(ms(300));
    ctl.on_mouse_out(at(), &e1);

    // Past both the show delay and the hide delay
    for t in (300..=2000).step_by(50) {
        ctl.advance(ms(t));
        assert_eq!(ctl.state(), TooltipState::Idle);
    }
    assert!(!popup_visible(&ctl));
    assert_eq!(popup_content(&ctl), "");
}

#[test]
fn test_hover_click_and_fetch_fills_popup() -> Result<()> {
    let mut ctl = controller();
    let e1: TargetRef = "e1".into();

    ctl.on_mouse_over(at(), &e1);
    ctl.advance(ms(500));
    assert_eq!(ctl.state(), TooltipState::LinkShown);
    assert_eq!(ctl.current_target(), Some("e1"));
    assert!(popup_visible(&ctl));

    ctl.on_click(at(), &e1);
    assert_eq!(ctl.state(), TooltipState::TipShown);

    // Exactly one request, for the right URL
    let issued = &ctl.fetcher().issued;
    assert_eq!(issued.len(), 1);
    assert_eq!(
        issued[0].url(),
        "http://repo.example/repository/entry/show?entryid=e1&output=metadataxml"
    );

    ctl.fetcher_mut().resolve(1, "<root>Hello</root>");
    ctl.pump_fetches();

    assert_eq!(popup_content(&ctl), "Hello");
    assert_eq!(ctl.state(), TooltipState::TipShown);
    Ok(())
}

#[test]
fn test_retarget_hides_synchronously_then_shows_new_target() {
    let mut ctl = controller();

    ctl.on_mouse_over(at(), &"e1".into());
    ctl.advance(ms(500));
    assert_eq!(ctl.state(), TooltipState::LinkShown);
    let n = ctl.counter();

    ctl.on_mouse_over(PointerEvent::at(60.0, 35.0), &"e2".into());
    assert_eq!(ctl.counter().0, n.0 + 1);
    // Hidden immediately, no timer involved
    assert_eq!(ctl.state(), TooltipState::Idle);
    assert_eq!(ctl.current_target(), None);
    assert!(!popup_visible(&ctl));

    ctl.advance(ms(999));
    assert_eq!(ctl.state(), TooltipState::Idle);
    ctl.advance(ms(1000));
    assert_eq!(ctl.state(), TooltipState::LinkShown);
    assert_eq!(ctl.current_target(), Some("e2"));
    assert!(popup_visible(&ctl));
}

#[test]
fn test_pointer_events_ignored_while_tip_shown() {
    let mut ctl = controller();
    ctl.on_mouse_over(at(), &"e1".into());
    ctl.advance(ms(500));
    ctl.on_click(at(), &"e1".into());

    ctl.on_mouse_over(at(), &"e2".into());
    ctl.on_mouse_move(at(), &"e2".into());
    ctl.on_mouse_out(at(), &"e1".into());
    ctl.advance(ms(10_000));

    assert_eq!(ctl.state(), TooltipState::TipShown);
    assert_eq!(ctl.current_target(), Some("e1"));
}

#[test]
fn test_do_hide_twice_from_idle_is_noop() {
    let mut ctl = controller();
    ctl.on_mouse_over(at(), &"e1".into());
    ctl.advance(ms(500));

    ctl.do_hide();
    assert_eq!(ctl.state(), TooltipState::Idle);
    let counter = ctl.counter();
    let content = popup_content(&ctl);

    ctl.do_hide();
    assert_eq!(ctl.state(), TooltipState::Idle);
    assert_eq!(ctl.counter(), counter);
    assert_eq!(popup_content(&ctl), content);
    assert!(!popup_visible(&ctl));
}

#[test]
fn test_tip_only_closes_via_hide_or_enter() {
    let mut ctl = controller();
    ctl.on_mouse_over(at(), &"e1".into());
    ctl.advance(ms(500));

    // A hide check scheduled before the click must not close the tip
    ctl.on_mouse_out(at(), &"e1".into());
    ctl.on_click(at(), &"e1".into());
    ctl.advance(ms(5000));
    ctl.key_pressed(Key::Other);
    assert_eq!(ctl.state(), TooltipState::TipShown);

    ctl.key_pressed(Key::Enter);
    assert_eq!(ctl.state(), TooltipState::Idle);
    assert!(!popup_visible(&ctl));
}

#[test]
fn test_link_shown_only_via_timer() {
    let mut ctl = controller();
    ctl.on_mouse_over(at(), &"e1".into());
    ctl.on_mouse_move(at(), &"e1".into());
    ctl.on_mouse_out(at(), &"e1".into());
    ctl.key_pressed(Key::Enter);
    ctl.do_hide();
    assert_eq!(ctl.state(), TooltipState::Idle);

    ctl.on_mouse_over(at(), &"e1".into());
    ctl.advance(ms(500));
    assert_eq!(ctl.state(), TooltipState::LinkShown);
}

#[test]
fn test_click_from_idle_goes_straight_to_tip() {
    let mut ctl = controller();
    ctl.on_click(at(), &"e2".into());

    assert_eq!(ctl.state(), TooltipState::TipShown);
    assert_eq!(popup_content(&ctl), "Loading...");
    assert_eq!(ctl.fetcher().issued.len(), 1);
    assert_eq!(ctl.fetcher().issued[0].entry_id, "e2");
}

#[test]
fn test_fetch_failure_leaves_loading_state() {
    let mut ctl = controller();
    ctl.on_click(at(), &"e1".into());

    ctl.fetcher_mut().fail(1, FetchError::Status(500));
    ctl.pump_fetches();
    assert_eq!(popup_content(&ctl), "Loading...");
    assert_eq!(ctl.state(), TooltipState::TipShown);

    ctl.fetcher_mut().resolve(1, "<content>broken");
    ctl.pump_fetches();
    assert_eq!(popup_content(&ctl), "Loading...");
}

#[test]
fn test_apply_always_writes_late_result_after_dismiss() {
    let mut ctl = controller();
    ctl.on_click(at(), &"e1".into());
    ctl.do_hide();

    ctl.fetcher_mut().resolve(1, "<content><![CDATA[<b>late</b>]]></content>");
    ctl.pump_fetches();

    assert_eq!(ctl.state(), TooltipState::Idle);
    assert_eq!(popup_content(&ctl), "<b>late</b>");
    assert!(!popup_visible(&ctl));
}

#[test]
fn test_fenced_policy_drops_superseded_results() {
    let config = TooltipConfig::default().with_fetch_policy(FetchPolicy::FenceByGeneration);
    let mut ctl = controller_with(config);

    // Dismissed before the response arrived
    ctl.on_click(at(), &"e1".into());
    ctl.do_hide();
    ctl.fetcher_mut().resolve(1, "<root>stale</root>");
    ctl.pump_fetches();
    assert_eq!(popup_content(&ctl), "Loading...");

    // Two clicks in a row: only the second response counts
    ctl.on_click(at(), &"e1".into());
    ctl.on_click(at(), &"e2".into());
    ctl.fetcher_mut().resolve(2, "<root>first</root>");
    ctl.fetcher_mut().resolve(3, "<root>second</root>");
    ctl.pump_fetches();
    assert_eq!(popup_content(&ctl), "second");
    assert_eq!(ctl.pending_request(), None);
}

#[test]
fn test_popup_removed_from_page_is_silent() {
    let mut ctl = controller();
    ctl.on_click(at(), &"e1".into());
    ctl.locator_mut().remove("tooltipdiv");

    ctl.fetcher_mut().resolve(1, "<root>Hello</root>");
    ctl.pump_fetches();
    ctl.key_pressed(Key::Enter);

    assert_eq!(ctl.state(), TooltipState::Idle);
}

#[test]
fn test_links_content_kind() {
    let mut config = TooltipConfig::default().with_base_url("http://repo");
    config.content_kind = hovertip::ContentKind::Links;
    let mut ctl = controller_with(config);

    ctl.on_click(at(), &"e1".into());
    assert_eq!(
        ctl.fetcher().issued[0].url(),
        "http://repo/entry/show?entryid=e1&output=linksxml"
    );
}

#[test]
fn test_custom_delays() -> Result<()> {
    let config = TooltipConfig::from_json(r#"{"show_delay_ms": 100, "hide_delay_ms": 200}"#)?;
    let mut ctl = controller_with(config);

    ctl.on_mouse_over(at(), &"e1".into());
    ctl.advance(ms(100));
    assert_eq!(ctl.state(), TooltipState::LinkShown);

    ctl.on_mouse_out(at(), &"e1".into());
    ctl.advance(ms(300));
    assert_eq!(ctl.state(), TooltipState::Idle);
    Ok(())
}
