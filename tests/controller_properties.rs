//! Property tests for counter fencing of delayed actions.

use hovertip::{
    PageModel, PointerEvent, Rect, TargetRef, Tick, TimerAction, TimerQueue, TooltipConfig,
    TooltipController, TooltipState, VirtualFetcher,
};
use proptest::prelude::*;
use std::time::Duration;

const TARGETS: [&str; 3] = ["e1", "e2", "e3"];

#[derive(Debug, Clone)]
enum Step {
    Over(usize),
    Move(usize),
    Out(usize),
    Wait(u64),
}

fn step_strategy() -> impl Strategy<Value = Step> {
    prop_oneof![
        (0..TARGETS.len()).prop_map(Step::Over),
        (0..TARGETS.len()).prop_map(Step::Move),
        (0..TARGETS.len()).prop_map(Step::Out),
        (0u64..1500).prop_map(Step::Wait),
    ]
}

fn controller() -> TooltipController<PageModel, TimerQueue, VirtualFetcher> {
    let mut page = PageModel::new();
    page.place("tooltipdiv", Rect::default());
    for (i, id) in TARGETS.iter().enumerate() {
        page.place(id, Rect::new(40.0, 20.0 * i as f32, 100.0, 14.0));
    }
    TooltipController::new(
        TooltipConfig::default(),
        page,
        TimerQueue::new(),
        VirtualFetcher::new(),
    )
}

proptest! {
    /// The link only ever appears for the last pointed-at target, after the
    /// pointer rested there for the full show delay.
    #[test]
    fn link_appears_only_after_undisturbed_rest(steps in prop::collection::vec(step_strategy(), 1..60)) {
        let mut ctl = controller();
        let show_delay = ctl.config().show_delay();
        let mut now = Duration::ZERO;
        // (time, target) of the last pointer event, if it entered a target
        let mut last_enter: Option<(Duration, usize)> = None;
        let mut last_event_at: Option<Duration> = None;

        for step in steps {
            match step {
                Step::Over(i) => {
                    ctl.on_mouse_over(PointerEvent::default(), &TargetRef::new(TARGETS[i]));
                    last_enter = Some((now, i));
                    last_event_at = Some(now);
                }
                Step::Move(i) => {
                    ctl.on_mouse_move(PointerEvent::default(), &TargetRef::new(TARGETS[i]));
                    last_enter = Some((now, i));
                    last_event_at = Some(now);
                }
                Step::Out(i) => {
                    ctl.on_mouse_out(PointerEvent::default(), &TargetRef::new(TARGETS[i]));
                    last_enter = None;
                    last_event_at = Some(now);
                }
                Step::Wait(delta) => {
                    let before = ctl.state();
                    now += Duration::from_millis(delta);
                    ctl.advance(now);

                    if before == TooltipState::Idle && ctl.state() == TooltipState::LinkShown {
                        let (entered_at, target) = last_enter
                            .expect("link shown without a pointer inside a target");
                        prop_assert_eq!(last_event_at, Some(entered_at));
                        prop_assert!(now - entered_at >= show_delay);
                        prop_assert_eq!(ctl.current_target(), Some(TARGETS[target]));
                    }
                }
            }
        }
    }

    /// A show action carrying any tick other than the current one is inert.
    #[test]
    fn stale_show_never_renders(bumps in 1usize..20, offset in 1u64..20) {
        let mut ctl = controller();
        for _ in 0..bumps {
            ctl.on_mouse_out(PointerEvent::default(), &TargetRef::new("e1"));
        }

        let current = ctl.counter();
        let stale = Tick(current.0.saturating_sub(offset));
        prop_assume!(stale != current);

        ctl.on_timer(TimerAction::ShowLink {
            tick: stale,
            pointer: Default::default(),
            target: TargetRef::new("e1"),
        });

        prop_assert_eq!(ctl.state(), TooltipState::Idle);
        prop_assert!(!ctl.locator().element("tooltipdiv").unwrap().visible);
    }
}
