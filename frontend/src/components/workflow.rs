use gloo_timers::callback::Interval;
use log::{debug, trace};
use yew::prelude::*;

use crate::anim::{Ticking, TimerSlot};
use crate::config::AnimationTimings;
use crate::content::Step;

/// How a step is drawn relative to the cursor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepCategory {
    Upcoming,
    Current,
    Completed,
}

impl StepCategory {
    pub fn css_class(&self) -> &'static str {
        match self {
            StepCategory::Upcoming => "upcoming",
            StepCategory::Current => "current",
            StepCategory::Completed => "completed",
        }
    }
}

/// Cursor over an ordered list of `len` steps. `active_index < len` whenever
/// `len > 0`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WorkflowState {
    active_index: usize,
    len: usize,
}

impl WorkflowState {
    pub fn new(len: usize) -> Self {
        Self { active_index: 0, len }
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_active(&self, i: usize) -> bool {
        i == self.active_index
    }

    // Plain index comparison; nothing is "past" right after wraparound.
    pub fn is_past(&self, i: usize) -> bool {
        i < self.active_index
    }

    pub fn category(&self, i: usize) -> StepCategory {
        if self.is_active(i) {
            StepCategory::Current
        } else if self.is_past(i) {
            StepCategory::Completed
        } else {
            StepCategory::Upcoming
        }
    }

    /// Fraction of the beam that is lit, in `[0, 1]`.
    pub fn progress(&self) -> f64 {
        if self.len <= 1 {
            return 0.0;
        }
        self.active_index as f64 / (self.len - 1) as f64
    }
}

impl Ticking for WorkflowState {
    fn delay_ms(&self, timings: &AnimationTimings) -> u32 {
        timings.step_interval_ms
    }

    fn tick(&mut self) {
        if self.is_empty() {
            return;
        }
        self.active_index = (self.active_index + 1) % self.len;
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum IndicatorVariant {
    #[default]
    Flat,
    /// Row tilted back in 3D, used under the typing headline.
    Tilt,
}

impl IndicatorVariant {
    fn css_class(&self) -> &'static str {
        match self {
            IndicatorVariant::Flat => "workflow--flat",
            IndicatorVariant::Tilt => "workflow--tilt",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct WorkflowIndicatorProps {
    pub steps: &'static [Step],
    #[prop_or_default]
    pub variant: IndicatorVariant,
    #[prop_or(AnimationTimings::DEFAULT)]
    pub timings: AnimationTimings,
}

/// Cursor together with the timer driving it. A tick delivered after
/// `teardown` leaves the cursor untouched.
pub struct StepCycle<H> {
    state: WorkflowState,
    timer: TimerSlot<H>,
}

impl<H> StepCycle<H> {
    pub fn new(state: WorkflowState, handle: H) -> Self {
        Self {
            state,
            timer: TimerSlot::armed(handle),
        }
    }

    pub fn state(&self) -> &WorkflowState {
        &self.state
    }

    /// Returns whether the cursor moved.
    pub fn on_timer(&mut self) -> bool {
        if !self.timer.is_armed() {
            return false;
        }
        self.state.tick();
        true
    }

    pub fn restart(&mut self, state: WorkflowState, handle: H) {
        self.state = state;
        self.timer.arm(handle);
    }

    pub fn teardown(&mut self) -> bool {
        self.timer.cancel()
    }
}

pub enum WorkflowMsg {
    Tick,
}

pub struct WorkflowIndicator {
    cycle: StepCycle<Interval>,
}

impl WorkflowIndicator {
    fn start_interval(ctx: &Context<Self>, state: &WorkflowState) -> Interval {
        let link = ctx.link().clone();
        let delay = state.delay_ms(&ctx.props().timings);
        Interval::new(delay, move || link.send_message(WorkflowMsg::Tick))
    }
}

impl Component for WorkflowIndicator {
    type Message = WorkflowMsg;
    type Properties = WorkflowIndicatorProps;

    fn create(ctx: &Context<Self>) -> Self {
        let state = WorkflowState::new(ctx.props().steps.len());
        let interval = Self::start_interval(ctx, &state);
        Self {
            cycle: StepCycle::new(state, interval),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            WorkflowMsg::Tick => {
                let moved = self.cycle.on_timer();
                if moved {
                    trace!("workflow step advanced to {}", self.cycle.state().active_index());
                }
                moved
            }
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        let props = ctx.props();
        if props.steps.len() != old_props.steps.len() || props.timings != old_props.timings {
            debug!("workflow indicator restarted with {} steps", props.steps.len());
            let state = WorkflowState::new(props.steps.len());
            let interval = Self::start_interval(ctx, &state);
            self.cycle.restart(state, interval);
        }
        true
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        if self.cycle.teardown() {
            trace!("workflow interval cleared");
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let state = self.cycle.state();
        let last = state.len().saturating_sub(1);
        let beam_style = format!("width: {:.2}%;", state.progress() * 100.0);

        html! {
            <div class={classes!("workflow", props.variant.css_class())}>
                <div class="workflow__row">
                    { props.steps.iter().enumerate().map(|(i, step)| {
                        let category = state.category(i);
                        html! {
                            <>
                                <div class={classes!("workflow__step", format!("workflow__step--{}", category.css_class()))}>
                                    <div class="workflow__bubble">
                                        <span class="material-symbols-outlined">{step.icon}</span>
                                    </div>
                                    <span class="workflow__label">{step.label}</span>
                                </div>
                                if i < last {
                                    <div class="workflow__chevron">
                                        <span class="material-symbols-outlined">{"chevron_right"}</span>
                                    </div>
                                }
                            </>
                        }
                    }).collect::<Html>() }
                </div>
                <div class="workflow__track">
                    <div class="workflow__beam" style={beam_style}></div>
                </div>
                <style>
                    {r#"
                        .workflow {
                            display: flex;
                            flex-direction: column;
                            gap: 1.5rem;
                            overflow-x: auto;
                            padding-bottom: 1rem;
                        }
                        .workflow__row {
                            display: flex;
                            align-items: center;
                            justify-content: center;
                            gap: 0.25rem;
                            min-width: max-content;
                        }
                        .workflow__step {
                            display: flex;
                            flex-direction: column;
                            align-items: center;
                            gap: 0.5rem;
                            padding: 0 0.75rem;
                            transition: transform 0.4s ease, opacity 0.4s ease;
                        }
                        .workflow__bubble {
                            width: 3.5rem;
                            height: 3.5rem;
                            border-radius: var(--radius-full);
                            display: flex;
                            align-items: center;
                            justify-content: center;
                            background: rgba(14, 165, 233, 0.12);
                            border: 1px solid rgba(14, 165, 233, 0.3);
                            color: var(--color-primary);
                            transition: background 0.4s ease, box-shadow 0.4s ease;
                        }
                        .workflow__label {
                            font-size: 0.75rem;
                            font-weight: 500;
                            white-space: nowrap;
                            color: var(--color-text-muted);
                        }
                        .workflow__step--upcoming {
                            opacity: 0.55;
                        }
                        .workflow__step--current {
                            transform: translateY(-4px) scale(1.08);
                        }
                        .workflow__step--current .workflow__bubble {
                            background: var(--color-primary);
                            color: var(--color-background);
                            box-shadow: 0 0 24px rgba(14, 165, 233, 0.55);
                        }
                        .workflow__step--current .workflow__label {
                            color: var(--color-text-main);
                        }
                        .workflow__step--completed .workflow__bubble {
                            background: rgba(14, 165, 233, 0.25);
                        }
                        .workflow__chevron {
                            color: rgba(14, 165, 233, 0.5);
                            display: flex;
                            align-items: center;
                        }
                        .workflow__track {
                            position: relative;
                            height: 4px;
                            border-radius: var(--radius-full);
                            background: var(--color-surface-highlight);
                            overflow: hidden;
                            min-width: 100%;
                        }
                        .workflow__beam {
                            position: absolute;
                            top: 0;
                            left: 0;
                            bottom: 0;
                            background: linear-gradient(90deg, var(--color-primary), var(--color-secondary));
                            box-shadow: 0 0 12px var(--color-primary);
                            transition: width 0.6s cubic-bezier(0.4, 0, 0.2, 1);
                        }
                        .workflow--tilt {
                            perspective: 900px;
                        }
                        .workflow--tilt .workflow__row {
                            transform: rotateX(24deg);
                            transform-style: preserve-3d;
                        }
                        .workflow--tilt .workflow__step--current {
                            transform: translateZ(40px) scale(1.12);
                        }
                        @media (max-width: 768px) {
                            .workflow__row {
                                justify-content: flex-start;
                            }
                            .workflow__bubble {
                                width: 2.75rem;
                                height: 2.75rem;
                            }
                            .workflow__label {
                                font-size: 0.625rem;
                            }
                        }
                    "#}
                </style>
            </div>
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
    use crate::content::WORKFLOW_STEPS;

    fn categories(state: &WorkflowState) -> Vec<StepCategory> {
        (0..state.len()).map(|i| state.category(i)).collect()
    }

    #[test]
    fn test_index_after_k_ticks() {
        for n in 2..10 {
            let mut state = WorkflowState::new(n);
            for k in 1..(3 * n) {
                state.tick();
                assert_eq!(state.active_index(), k % n, "n={} k={}", n, k);
            }
        }
    }

    #[test]
    fn test_exactly_one_active() {
        let mut state = WorkflowState::new(WORKFLOW_STEPS.len());
        for _ in 0..20 {
            let active = (0..state.len()).filter(|&i| state.is_active(i)).count();
            assert_eq!(active, 1);
            state.tick();
        }
    }

    #[test]
    fn test_progress_monotonic_then_resets() {
        let mut state = WorkflowState::new(5);
        let mut previous = state.progress();
        assert_eq!(previous, 0.0);
        for _ in 0..4 {
            state.tick();
            assert!(state.progress() >= previous);
            previous = state.progress();
        }
        assert_eq!(previous, 1.0);
        state.tick();
        assert_eq!(state.active_index(), 0);
        assert_eq!(state.progress(), 0.0);
    }

    #[test]
    fn test_single_and_empty_lists() {
        let mut single = WorkflowState::new(1);
        assert_eq!(single.progress(), 0.0);
        single.tick();
        assert_eq!(single.active_index(), 0);
        assert_eq!(single.category(0), StepCategory::Current);

        let mut empty = WorkflowState::new(0);
        empty.tick();
        assert_eq!(empty.active_index(), 0);
        assert_eq!(empty.progress(), 0.0);
    }

    #[test]
    fn test_derivations_are_idempotent() {
        let mut state = WorkflowState::new(7);
        state.tick();
        state.tick();
        assert_eq!(categories(&state), categories(&state));
        assert_eq!(state.progress(), state.progress());
    }

    #[test]
    fn test_pipeline_scenario() {
        let timings = AnimationTimings::DEFAULT;
        let mut clock = SimulatedClock::mount(WorkflowState::new(WORKFLOW_STEPS.len()), timings);

        clock.advance(2000);
        let state = clock.machine;
        assert_eq!(state.active_index(), 1);
        assert_eq!(state.category(0), StepCategory::Completed);
        assert_eq!(state.category(1), StepCategory::Current);
        for i in 2..7 {
            assert_eq!(state.category(i), StepCategory::Upcoming);
        }

        clock.advance(12_000);
        assert_eq!(clock.now_ms(), 14_000);
        assert_eq!(clock.machine.active_index(), 0);
    }

    #[test]
    fn test_wraparound_keeps_literal_past_rule() {
        let mut state = WorkflowState::new(3);
        state.tick();
        state.tick();
        assert_eq!(
            categories(&state),
            vec![StepCategory::Completed, StepCategory::Completed, StepCategory::Current]
        );
        state.tick();
        assert_eq!(
            categories(&state),
            vec![StepCategory::Current, StepCategory::Upcoming, StepCategory::Upcoming]
        );
    }

    #[test]
    fn test_no_ticks_after_teardown() {
        let mut clock = SimulatedClock::mount(WorkflowState::new(7), AnimationTimings::DEFAULT);
        clock.advance(6000);
        let before = clock.machine;
        clock.teardown();
        clock.advance(60_000);
        assert_eq!(clock.machine, before);
        assert_eq!(clock.machine.active_index(), 3);
    }

    #[test]
    fn test_teardown_clears_interval_and_ignores_late_ticks() {
        let dropped = Rc::new(Cell::new(0));
        let mut cycle = StepCycle::new(WorkflowState::new(7), FakeHandle(dropped.clone()));
        assert!(cycle.on_timer());
        assert!(cycle.on_timer());
        let before = *cycle.state();

        assert!(cycle.teardown());
        assert_eq!(dropped.get(), 1);
        for _ in 0..10 {
            assert!(!cycle.on_timer());
        }
        assert_eq!(*cycle.state(), before);
        assert_eq!(cycle.state().active_index(), 2);
        assert!(!cycle.teardown());
    }

    #[test]
    fn test_restart_replaces_interval() {
        let first = Rc::new(Cell::new(0));
        let second = Rc::new(Cell::new(0));
        let mut cycle = StepCycle::new(WorkflowState::new(7), FakeHandle(first.clone()));
        cycle.on_timer();
        cycle.restart(WorkflowState::new(3), FakeHandle(second.clone()));
        assert_eq!(first.get(), 1);
        assert_eq!(second.get(), 0);
        assert_eq!(cycle.state().active_index(), 0);
        assert_eq!(cycle.state().len(), 3);
    }
}
