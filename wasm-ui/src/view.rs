//! Page reducer glue and the [`PlanView`] used by the submit flows.

use std::cell::RefCell;
use std::rc::Rc;

use creative_agent::{PageAction, PageState, PlanError, PlanResult, PlanView, UiConfig};
use gloo::timers::callback::{Interval, Timeout};
use yew::prelude::*;

/// Yew-side wrapper of the page state.
#[derive(Clone, PartialEq)]
pub struct Page(pub PageState);

impl Reducible for Page {
    type Action = PageAction;

    fn reduce(self: Rc<Self>, action: PageAction) -> Rc<Self> {
        let mut next = Rc::unwrap_or_clone(self);
        next.0.apply(action);
        Rc::new(next)
    }
}

/// Timer slot; replacing or clearing it cancels the previous timer.
pub type TimerSlot<T> = Rc<RefCell<Option<T>>>;

/// Dispatch `action` after `millis`, cancelling whatever `slot` held.
pub fn schedule(
    slot: &TimerSlot<Timeout>,
    dispatcher: &UseReducerDispatcher<Page>,
    millis: u32,
    action: PageAction,
) {
    let dispatcher = dispatcher.clone();
    let timeout = Timeout::new(millis, move || dispatcher.dispatch(action));
    *slot.borrow_mut() = Some(timeout);
}

/// Page updates requested by the submit and surprise flows.
#[derive(Clone)]
pub struct PageView {
    dispatcher: UseReducerDispatcher<Page>,
    busy_timer: TimerSlot<Interval>,
    surprise_timer: TimerSlot<Timeout>,
    config: Rc<UiConfig>,
}

impl PageView {
    pub fn new(
        dispatcher: UseReducerDispatcher<Page>,
        busy_timer: TimerSlot<Interval>,
        surprise_timer: TimerSlot<Timeout>,
        config: Rc<UiConfig>,
    ) -> Self {
        Self {
            dispatcher,
            busy_timer,
            surprise_timer,
            config,
        }
    }
}

impl PlanView for PageView {
    fn set_actions_enabled(&self, enabled: bool) {
        self.dispatcher.dispatch(PageAction::SetActionsEnabled(enabled));
    }

    fn start_busy(&self) {
        self.dispatcher.dispatch(PageAction::BusyStarted);
        let dispatcher = self.dispatcher.clone();
        let interval = Interval::new(self.config.dots_interval_ms, move || {
            dispatcher.dispatch(PageAction::BusyTick)
        });
        *self.busy_timer.borrow_mut() = Some(interval);
    }

    fn stop_busy(&self) {
        if let Some(interval) = self.busy_timer.borrow_mut().take() {
            interval.cancel();
        }
        self.dispatcher.dispatch(PageAction::BusyStopped);
    }

    fn clear_output(&self) {
        self.dispatcher.dispatch(PageAction::ClearOutput);
    }

    fn show_plan(&self, plan: &PlanResult) {
        self.dispatcher.dispatch(PageAction::ShowPlan(plan.clone()));
    }

    fn surprise_started(&self) {
        self.dispatcher.dispatch(PageAction::SurpriseStarted);
    }

    fn surprise_arrived(&self, brief: &str) {
        self.dispatcher
            .dispatch(PageAction::SurpriseArrived(brief.to_string()));
        schedule(
            &self.surprise_timer,
            &self.dispatcher,
            self.config.surprise_animation_ms,
            PageAction::SurpriseAnimationEnded,
        );
    }

    fn surprise_finished(&self) {
        self.dispatcher.dispatch(PageAction::SurpriseFinished);
    }

    fn report_error(&self, alert: &str, error: &PlanError) {
        gloo::console::error!(format!("{alert} ({error:?})"));
        gloo::dialogs::alert(alert);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use creative_agent::{Ellipsis, InputMode};

    #[test]
    fn test_reduce_applies_action() {
        let page = Rc::new(Page(PageState::default()));
        let next = page.reduce(PageAction::SelectMode(InputMode::File));
        assert_eq!(next.0.mode, InputMode::File);
    }

    #[test]
    fn test_reduce_busy_cycle() {
        let page = Rc::new(Page(PageState::default()));
        let page = page.reduce(PageAction::BusyStarted);
        assert_eq!(page.0.busy, Some(Ellipsis::new()));
        let page = page.reduce(PageAction::BusyTick);
        assert_eq!(page.0.busy.map(|e| e.dots()), Some(".."));
        let page = page.reduce(PageAction::BusyStopped);
        assert_eq!(page.0.busy, None);
    }
}
