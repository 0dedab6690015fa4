use gloo_timers::callback::{Interval, Timeout};
use log::{debug, trace};
use yew::prelude::*;

use crate::anim::{Ticking, TimerSlot};
use crate::config::AnimationTimings;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TypingPhase {
    Typing,
    /// Full phrase shown, waiting before deleting.
    Paused,
    Deleting,
}

/// Type/delete cycle over a list of phrases. Offsets count chars, not bytes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypingState {
    phrases: &'static [&'static str],
    phrase_index: usize,
    char_count: usize,
    phase: TypingPhase,
}

impl TypingState {
    pub fn new(phrases: &'static [&'static str]) -> Self {
        Self {
            phrases,
            phrase_index: 0,
            char_count: 0,
            phase: TypingPhase::Typing,
        }
    }

    pub fn phase(&self) -> TypingPhase {
        self.phase
    }

    pub fn phrase_index(&self) -> usize {
        self.phrase_index
    }

    fn current_phrase(&self) -> &'static str {
        self.phrases.get(self.phrase_index).copied().unwrap_or("")
    }

    pub fn visible_text(&self) -> String {
        self.current_phrase().chars().take(self.char_count).collect()
    }
}

impl Ticking for TypingState {
    fn delay_ms(&self, timings: &AnimationTimings) -> u32 {
        match self.phase {
            TypingPhase::Typing => timings.type_ms,
            TypingPhase::Paused => timings.pause_ms,
            TypingPhase::Deleting => timings.delete_ms,
        }
    }

    fn tick(&mut self) {
        if self.phrases.is_empty() {
            return;
        }
        match self.phase {
            TypingPhase::Typing => {
                if self.char_count < self.current_phrase().chars().count() {
                    self.char_count += 1;
                } else {
                    self.phase = TypingPhase::Paused;
                }
            }
            TypingPhase::Paused => self.phase = TypingPhase::Deleting,
            TypingPhase::Deleting => {
                self.char_count = self.char_count.saturating_sub(1);
                if self.char_count == 0 {
                    self.phrase_index = (self.phrase_index + 1) % self.phrases.len();
                    self.phase = TypingPhase::Typing;
                }
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CursorBlink {
    visible: bool,
}

impl CursorBlink {
    pub fn new() -> Self {
        Self { visible: true }
    }

    pub fn visible(&self) -> bool {
        self.visible
    }
}

impl Default for CursorBlink {
    fn default() -> Self {
        Self::new()
    }
}

impl Ticking for CursorBlink {
    fn delay_ms(&self, timings: &AnimationTimings) -> u32 {
        timings.blink_ms
    }

    fn tick(&mut self) {
        self.visible = !self.visible;
    }
}

#[derive(Properties, PartialEq)]
pub struct TypingMarqueeProps {
    pub phrases: &'static [&'static str],
    #[prop_or(AnimationTimings::DEFAULT)]
    pub timings: AnimationTimings,
}

/// Typing and cursor machines plus the timers driving them. Once torn
/// down, neither machine moves again.
pub struct MarqueeCycle<T, B> {
    typing: TypingState,
    cursor: CursorBlink,
    type_timer: TimerSlot<T>,
    blink_timer: TimerSlot<B>,
}

impl<T, B> MarqueeCycle<T, B> {
    /// Starts with the blink timer running and no typing step scheduled.
    pub fn new(typing: TypingState, blink: B) -> Self {
        Self {
            typing,
            cursor: CursorBlink::new(),
            type_timer: TimerSlot::empty(),
            blink_timer: TimerSlot::armed(blink),
        }
    }

    pub fn typing(&self) -> &TypingState {
        &self.typing
    }

    pub fn cursor(&self) -> &CursorBlink {
        &self.cursor
    }

    pub fn arm_typing(&mut self, handle: T) {
        self.type_timer.arm(handle);
    }

    pub fn arm_blink(&mut self, handle: B) {
        self.blink_timer.arm(handle);
    }

    /// Returns whether the typing machine moved.
    pub fn on_type(&mut self) -> bool {
        if !self.type_timer.is_armed() {
            return false;
        }
        self.typing.tick();
        true
    }

    /// Returns whether the cursor toggled.
    pub fn on_blink(&mut self) -> bool {
        if !self.blink_timer.is_armed() {
            return false;
        }
        self.cursor.tick();
        true
    }

    /// Swaps in a fresh typing machine. The caller schedules its first step.
    pub fn restart(&mut self, typing: TypingState) {
        self.typing = typing;
    }

    pub fn teardown(&mut self) -> bool {
        let typing = self.type_timer.cancel();
        let blink = self.blink_timer.cancel();
        typing || blink
    }
}

pub enum TypingMsg {
    Type,
    Blink,
}

pub struct TypingMarquee {
    cycle: MarqueeCycle<Timeout, Interval>,
}

impl TypingMarquee {
    fn schedule_typing(&mut self, ctx: &Context<Self>) {
        let link = ctx.link().clone();
        let delay = self.cycle.typing().delay_ms(&ctx.props().timings);
        self.cycle
            .arm_typing(Timeout::new(delay, move || link.send_message(TypingMsg::Type)));
    }

    fn start_blink(ctx: &Context<Self>) -> Interval {
        let link = ctx.link().clone();
        let delay = CursorBlink::new().delay_ms(&ctx.props().timings);
        Interval::new(delay, move || link.send_message(TypingMsg::Blink))
    }
}

impl Component for TypingMarquee {
    type Message = TypingMsg;
    type Properties = TypingMarqueeProps;

    fn create(ctx: &Context<Self>) -> Self {
        let mut marquee = Self {
            cycle: MarqueeCycle::new(TypingState::new(ctx.props().phrases), Self::start_blink(ctx)),
        };
        marquee.schedule_typing(ctx);
        marquee
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            TypingMsg::Type => {
                let before = self.cycle.typing().phase();
                if !self.cycle.on_type() {
                    return false;
                }
                let typing = self.cycle.typing();
                if typing.phase() != before {
                    trace!("typing marquee entered {:?} on phrase {}", typing.phase(), typing.phrase_index());
                }
                self.schedule_typing(ctx);
                true
            }
            TypingMsg::Blink => self.cycle.on_blink(),
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        let props = ctx.props();
        let timings_changed = props.timings != old_props.timings;
        if props.phrases != old_props.phrases || timings_changed {
            debug!("typing marquee restarted with {} phrases", props.phrases.len());
            self.cycle.restart(TypingState::new(props.phrases));
            self.schedule_typing(ctx);
        }
        if timings_changed {
            self.cycle.arm_blink(Self::start_blink(ctx));
        }
        true
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        if self.cycle.teardown() {
            trace!("typing marquee timers cleared");
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <span class="typing-marquee">
                <span class="typing-marquee__text">{self.cycle.typing().visible_text()}</span>
                <span class={classes!("typing-marquee__cursor", (!self.cycle.cursor().visible()).then(|| "hidden"))}>{"|"}</span>
                <style>
                    {r#"
                        .typing-marquee {
                            color: var(--color-primary);
                            white-space: nowrap;
                        }
                        .typing-marquee__cursor {
                            margin-left: 2px;
                            font-weight: 300;
                            color: var(--color-secondary);
                        }
                        .typing-marquee__cursor.hidden {
                            opacity: 0;
                        }
                    "#}
                </style>
            </span>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anim::sim::SimulatedClock;
    use crate::anim::tests::FakeHandle;
    use std::cell::Cell;
    use std::rc::Rc;

    const HI: &[&str] = &["Hi"];

    #[test]
    fn test_types_hi() {
        let mut clock = SimulatedClock::mount(TypingState::new(HI), AnimationTimings::DEFAULT);
        assert_eq!(clock.machine.visible_text(), "");
        clock.advance(50);
        assert_eq!(clock.machine.visible_text(), "H");
        clock.advance(50);
        assert_eq!(clock.machine.visible_text(), "Hi");
        clock.advance(50);
        assert_eq!(clock.machine.visible_text(), "Hi");
        assert_eq!(clock.machine.phase(), TypingPhase::Paused);
    }

    #[test]
    fn test_pause_then_delete() {
        let mut clock = SimulatedClock::mount(TypingState::new(HI), AnimationTimings::DEFAULT);
        clock.advance(150);
        clock.advance(2999);
        assert_eq!(clock.machine.phase(), TypingPhase::Paused);
        clock.advance(1);
        assert_eq!(clock.machine.phase(), TypingPhase::Deleting);
        assert_eq!(clock.machine.visible_text(), "Hi");
        clock.advance(30);
        assert_eq!(clock.machine.visible_text(), "H");
        clock.advance(30);
        assert_eq!(clock.machine.visible_text(), "");
        assert_eq!(clock.machine.phase(), TypingPhase::Typing);
    }

    #[test]
    fn test_advances_to_next_phrase_and_wraps() {
        let mut state = TypingState::new(&["ab", "c"]);
        // "ab": 2 typing ticks, pause switch, delete switch, 2 deletes
        for _ in 0..6 {
            state.tick();
        }
        assert_eq!(state.phrase_index(), 1);
        assert_eq!(state.visible_text(), "");
        state.tick();
        assert_eq!(state.visible_text(), "c");
        // "c": pause switch, delete switch, 1 delete
        for _ in 0..3 {
            state.tick();
        }
        assert_eq!(state.phrase_index(), 0);
    }

    #[test]
    fn test_counts_chars_not_bytes() {
        let mut state = TypingState::new(&["héllo"]);
        state.tick();
        state.tick();
        assert_eq!(state.visible_text(), "hé");
    }

    #[test]
    fn test_empty_phrase_list_is_inert() {
        let mut state = TypingState::new(&[]);
        for _ in 0..10 {
            state.tick();
        }
        assert_eq!(state.visible_text(), "");
        assert_eq!(state.phase(), TypingPhase::Typing);
    }

    #[test]
    fn test_cursor_blinks_independently() {
        let mut clock = SimulatedClock::mount(CursorBlink::new(), AnimationTimings::DEFAULT);
        assert!(clock.machine.visible());
        clock.advance(500);
        assert!(!clock.machine.visible());
        clock.advance(500);
        assert!(clock.machine.visible());
    }

    #[test]
    fn test_no_typing_after_teardown() {
        let mut clock = SimulatedClock::mount(TypingState::new(HI), AnimationTimings::DEFAULT);
        clock.advance(50);
        let before = clock.machine.clone();
        clock.teardown();
        clock.advance(10_000);
        assert_eq!(clock.machine, before);
    }

    #[test]
    fn test_no_blink_after_teardown() {
        let mut clock = SimulatedClock::mount(CursorBlink::new(), AnimationTimings::DEFAULT);
        clock.advance(500);
        assert!(!clock.machine.visible());
        clock.teardown();
        clock.advance(10_000);
        assert!(!clock.machine.visible());
    }

    #[test]
    fn test_teardown_clears_both_timers() {
        let type_drops = Rc::new(Cell::new(0));
        let blink_drops = Rc::new(Cell::new(0));
        let mut cycle = MarqueeCycle::new(TypingState::new(HI), FakeHandle(blink_drops.clone()));
        cycle.arm_typing(FakeHandle(type_drops.clone()));
        assert!(cycle.on_type());
        assert!(cycle.on_blink());

        assert!(cycle.teardown());
        assert_eq!(type_drops.get(), 1);
        assert_eq!(blink_drops.get(), 1);
        for _ in 0..10 {
            assert!(!cycle.on_type());
            assert!(!cycle.on_blink());
        }
        assert_eq!(cycle.typing().visible_text(), "H");
        assert!(!cycle.cursor().visible());
        assert!(!cycle.teardown());
    }

    #[test]
    fn test_typing_waits_for_first_schedule() {
        let mut cycle: MarqueeCycle<FakeHandle, FakeHandle> =
            MarqueeCycle::new(TypingState::new(HI), FakeHandle(Rc::new(Cell::new(0))));
        assert!(!cycle.on_type());
        assert_eq!(cycle.typing().visible_text(), "");
        assert!(cycle.on_blink());
    }

    #[test]
    fn test_restart_with_new_phrases() {
        let first = Rc::new(Cell::new(0));
        let second = Rc::new(Cell::new(0));
        let mut cycle = MarqueeCycle::new(TypingState::new(HI), FakeHandle(Rc::new(Cell::new(0))));
        cycle.arm_typing(FakeHandle(first.clone()));
        cycle.on_type();
        cycle.on_type();
        assert_eq!(cycle.typing().visible_text(), "Hi");

        cycle.restart(TypingState::new(&["Yo", "Go"]));
        cycle.arm_typing(FakeHandle(second.clone()));
        assert_eq!(first.get(), 1);
        assert_eq!(cycle.typing().visible_text(), "");
        assert_eq!(cycle.typing().phrase_index(), 0);
        assert_eq!(cycle.typing().phase(), TypingPhase::Typing);
        cycle.on_type();
        assert_eq!(cycle.typing().visible_text(), "Y");
        assert_eq!(second.get(), 0);
    }
}
