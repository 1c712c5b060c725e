//! The tooltip state machine.
//!
//! ```text
//!            show_link (timer)           on_click
//!   Idle ───────────────────▶ LinkShown ───────────▶ TipShown
//!    ▲                          │  │                    │
//!    │  check_hide / retarget   │  │ retarget           │ do_hide / Enter
//!    └──────────────────────────┘  └─▶ Idle ─▶ ...      │
//!    └──────────────────────────────────────────────────┘
//! ```
//!
//! Pointer events bump an interaction counter and schedule delayed actions
//! tagged with the new counter value. A delayed action whose tag no longer
//! matches the counter was superseded by later interaction and does nothing.
//! Nothing is ever cancelled explicitly.

use std::time::Duration;

use tracing::{debug, trace, warn};

use crate::config::{FetchPolicy, TooltipConfig};
use crate::counter::{InteractionCounter, Tick};
use crate::event::{Key, PointerEvent, TargetRef};
use crate::fetch::{FetchCompletion, FetchRequest, RequestGeneration};
use crate::geometry::{Point, Rect};
use crate::scheduler::{TimerAction, TimerQueue};
use crate::traits::{ElementLocator, Scheduler, XmlFetcher};

/// Which affordance, if any, is currently on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TooltipState {
    /// Nothing shown
    #[default]
    Idle,
    /// The small clickable info link is shown next to the current target
    LinkShown,
    /// The fetched popup is shown until dismissed
    TipShown,
}

/// Single owner of the tooltip state and the shared popup node.
///
/// The controller is driven entirely by its host: pointer and key events,
/// timer actions coming back from the scheduler, and fetch completions.
/// No operation returns an error. Missing elements, stale callbacks and
/// failed fetches all degrade to doing nothing.
pub struct TooltipController<L, S, F> {
    config: TooltipConfig,
    locator: L,
    scheduler: S,
    fetcher: F,
    counter: InteractionCounter,
    state: TooltipState,
    /// Entry associated with the shown link or tip
    current_target: Option<String>,
    /// Last generation handed to the fetcher
    generation: RequestGeneration,
    /// Generation of the request still awaited, if any
    pending_request: Option<RequestGeneration>,
}

impl<L, S, F> TooltipController<L, S, F>
where
    L: ElementLocator,
    S: Scheduler,
    F: XmlFetcher,
{
    pub fn new(config: TooltipConfig, locator: L, scheduler: S, fetcher: F) -> Self {
        Self {
            config,
            locator,
            scheduler,
            fetcher,
            counter: InteractionCounter::new(),
            state: TooltipState::Idle,
            current_target: None,
            generation: RequestGeneration::default(),
            pending_request: None,
        }
    }

    // ===== Queries =====

    pub fn state(&self) -> TooltipState {
        self.state
    }

    pub fn current_target(&self) -> Option<&str> {
        self.current_target.as_deref()
    }

    /// Current value of the interaction counter.
    pub fn counter(&self) -> Tick {
        self.counter.current()
    }

    /// Generation of the fetch still awaited, if any.
    pub fn pending_request(&self) -> Option<RequestGeneration> {
        self.pending_request
    }

    pub fn config(&self) -> &TooltipConfig {
        &self.config
    }

    /// Replaces the configuration. Already scheduled actions keep their delays.
    pub fn set_config(&mut self, config: TooltipConfig) {
        self.config = config;
    }

    pub fn locator(&self) -> &L {
        &self.locator
    }

    pub fn locator_mut(&mut self) -> &mut L {
        &mut self.locator
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    pub fn fetcher_mut(&mut self) -> &mut F {
        &mut self.fetcher
    }

    // ===== Pointer and keyboard events =====

    /// Pointer entered a tooltip-eligible element.
    pub fn on_mouse_over(&mut self, event: PointerEvent, target: &TargetRef) {
        self.on_pointer_inside(event, target);
    }

    /// Pointer moved within a tooltip-eligible element.
    ///
    /// Each move restarts the show delay, so the link only appears once the
    /// pointer rests.
    pub fn on_mouse_move(&mut self, event: PointerEvent, target: &TargetRef) {
        self.on_pointer_inside(event, target);
    }

    fn on_pointer_inside(&mut self, event: PointerEvent, target: &TargetRef) {
        let tick = self.counter.bump();

        match self.state {
            TooltipState::TipShown => return,
            TooltipState::LinkShown => {
                if self.current_target.as_deref() == Some(target.id.as_str()) {
                    // Back on the same target; the bump above already voided any pending hide
                    return;
                }
                debug!(from = ?self.current_target, to = %target.id, "retargeting link");
                self.do_hide();
            }
            TooltipState::Idle => {}
        }

        self.scheduler.schedule(
            self.config.show_delay(),
            TimerAction::ShowLink {
                tick,
                pointer: event.position,
                target: target.clone(),
            },
        );
    }

    /// Pointer left a tooltip-eligible element.
    pub fn on_mouse_out(&mut self, _event: PointerEvent, target: &TargetRef) {
        let tick = self.counter.bump();

        if self.state == TooltipState::LinkShown {
            trace!(target = %target.id, tick = tick.0, "scheduling hide check");
            self.scheduler
                .schedule(self.config.hide_delay(), TimerAction::CheckHide { tick });
        }
    }

    /// The info link for `target` was clicked: open the popup and fetch its content.
    ///
    /// Works from any state. The counter is bumped so that no show or hide
    /// scheduled before the click can touch the open tip.
    pub fn on_click(&mut self, event: PointerEvent, target: &TargetRef) {
        self.counter.bump();

        let Some(popup) = self.locator.locate(&self.config.popup_id) else {
            trace!(popup = %self.config.popup_id, "popup node missing, ignoring click");
            return;
        };

        if self.state == TooltipState::Idle {
            let position = self.placement_for(target, event.position);
            self.locator.move_to(popup, position);
        }
        self.locator.set_content(popup, &self.config.loading_text);
        self.locator.set_visible(popup, true);

        self.state = TooltipState::TipShown;
        self.current_target = Some(target.id.clone());

        self.generation = self.generation.next();
        self.pending_request = Some(self.generation);
        let request = FetchRequest {
            generation: self.generation,
            entry_id: target.id.clone(),
            base_url: self.config.base_url.clone(),
            kind: self.config.content_kind,
        };
        debug!(entry = %target.id, generation = self.generation.0, "tip shown, fetching content");
        self.fetcher.fetch(request);
    }

    /// Dismisses the link or tip. Does nothing when idle.
    pub fn do_hide(&mut self) {
        if self.state == TooltipState::Idle {
            return;
        }

        debug!(state = ?self.state, target = ?self.current_target, "hiding");
        self.current_target = None;
        if let Some(popup) = self.locator.locate(&self.config.popup_id) {
            self.locator.set_visible(popup, false);
        }
        self.state = TooltipState::Idle;
    }

    /// Enter closes an open tip; every other key is ignored.
    pub fn key_pressed(&mut self, key: Key) {
        if self.state == TooltipState::TipShown && key == Key::Enter {
            self.do_hide();
        }
    }

    // ===== Delayed callbacks =====

    /// Delivers an action previously handed to the scheduler.
    pub fn on_timer(&mut self, action: TimerAction) {
        match action {
            TimerAction::ShowLink {
                tick,
                pointer,
                target,
            } => self.show_link(tick, pointer, &target),
            TimerAction::CheckHide { tick } => self.check_hide(tick),
        }
    }

    /// Shows the info link for `target`, unless superseded or not idle.
    pub fn show_link(&mut self, tick: Tick, pointer: Point, target: &TargetRef) {
        if !self.counter.is_current(tick) {
            trace!(tick = tick.0, current = self.counter.current().0, "stale show ignored");
            return;
        }
        if self.state != TooltipState::Idle {
            return;
        }

        let Some(popup) = self.locator.locate(&self.config.popup_id) else {
            trace!(popup = %self.config.popup_id, "popup node missing");
            return;
        };
        if self.locator.locate(&target.id).is_none() {
            trace!(target = %target.id, "target left the page");
            return;
        }

        let position = self.placement_for(target, pointer);
        self.locator.set_content(popup, &self.config.link_label);
        self.locator.move_to(popup, position);
        self.locator.set_visible(popup, true);

        self.current_target = Some(target.id.clone());
        self.state = TooltipState::LinkShown;
        debug!(target = %target.id, x = position.x, y = position.y, "link shown");
    }

    /// Hides the link if nothing happened since the pointer left.
    ///
    /// There is no re-check of where the pointer is now; the counter match
    /// alone decides.
    pub fn check_hide(&mut self, tick: Tick) {
        if !self.counter.is_current(tick) {
            trace!(tick = tick.0, current = self.counter.current().0, "stale hide ignored");
            return;
        }
        self.do_hide();
    }

    // ===== Fetch completion =====

    /// Applies a finished fetch to the popup according to the fetch policy.
    pub fn on_fetch_complete(&mut self, completion: FetchCompletion) {
        let is_latest = self.pending_request == Some(completion.generation);
        if is_latest {
            self.pending_request = None;
        }

        let fragment = match completion.result {
            Ok(fragment) => fragment,
            Err(err) => {
                warn!(entry = %completion.entry_id, "popup content unavailable: {err}");
                return;
            }
        };

        if self.config.fetch_policy == FetchPolicy::FenceByGeneration {
            let still_wanted = is_latest
                && self.state == TooltipState::TipShown
                && self.current_target.as_deref() == Some(completion.entry_id.as_str());
            if !still_wanted {
                debug!(
                    entry = %completion.entry_id,
                    generation = completion.generation.0,
                    "discarding superseded fetch result"
                );
                return;
            }
        }

        if let Some(popup) = self.locator.locate(&self.config.popup_id) {
            self.locator.set_content(popup, &fragment);
        }
    }

    /// Drains every completed fetch from the fetcher. Returns how many were handled.
    pub fn pump_fetches(&mut self) -> usize {
        let mut handled = 0;
        while let Some(completion) = self.fetcher.poll_completion() {
            self.on_fetch_complete(completion);
            handled += 1;
        }
        handled
    }

    // ===== Helpers =====

    /// Where the affordance goes for `target`.
    ///
    /// Left of the anchor (or target) element when it has measurable bounds,
    /// otherwise offset from the pointer.
    fn placement_for(&self, target: &TargetRef, pointer: Point) -> Point {
        let bounds = self.measurable_bounds(target.placement_id()).or_else(|| {
            if target.anchor.is_some() {
                self.measurable_bounds(&target.id)
            } else {
                None
            }
        });

        match bounds {
            Some(rect) => Point::new(rect.left() - self.config.link_gap, rect.top()),
            None => {
                let (dx, dy) = self.config.pointer_offset;
                pointer.offset(dx, dy)
            }
        }
    }

    fn measurable_bounds(&self, id: &str) -> Option<Rect> {
        let handle = self.locator.locate(id)?;
        Some(self.locator.geometry(handle)).filter(Rect::is_measurable)
    }
}

impl<L, F> TooltipController<L, TimerQueue, F>
where
    L: ElementLocator,
    F: XmlFetcher,
{
    /// Fires every timer due at `now` (time since the host started).
    ///
    /// Hosts call this before delivering the events of a frame so that
    /// newly scheduled actions are measured from the right time.
    pub fn advance(&mut self, now: Duration) {
        while let Some(action) = self.scheduler.pop_due(now) {
            self.on_timer(action);
        }
    }

    /// True while timers or fetches are outstanding and the host should keep ticking.
    pub fn has_pending_work(&self) -> bool {
        !self.scheduler.is_empty() || self.fetcher.has_pending()
    }
}
