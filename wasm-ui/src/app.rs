//! Main application component.

use std::rc::Rc;

use creative_agent::{
    Flash, FormState, InputMode, OutputAction, PageAction, PageState, PlanResult, PreviewSlot,
    UiConfig, copy_plan, fetch_surprise, submit_plan,
};
use gloo::timers::callback::{Interval, Timeout};
use wasm_bindgen_futures::spawn_local;
use web_sys::File;
use yew::prelude::*;

use crate::browser::{
    HttpTransport, NavigatorClipboard, Upload, iso_now, read_data_url, save_download,
};
use crate::components::{FormButtons, InputPanel, Loading, OutputPanel, RobotIcon};
use crate::view::{Page, PageView, TimerSlot, schedule};

/// Configuration baked in at build time.
fn load_config() -> UiConfig {
    match option_env!("CREATIVE_AGENT_API_BASE") {
        Some(base) => UiConfig::default().with_base_url(base),
        None => UiConfig::default(),
    }
}

/// Show a flash on an output button, reverting after the configured delay.
fn flash(
    dispatcher: &UseReducerDispatcher<Page>,
    slot: &TimerSlot<Timeout>,
    config: &UiConfig,
    action: OutputAction,
    outcome: Flash,
) {
    dispatcher.dispatch(PageAction::Flashed(action, outcome));
    schedule(
        slot,
        dispatcher,
        config.label_flash_ms,
        PageAction::Flashed(action, Flash::Idle),
    );
}

/// Main application component.
#[function_component(App)]
pub fn app() -> Html {
    let config = use_memo((), |_| load_config());
    let page = {
        let config = config.clone();
        use_reducer(move || Page(PageState::new(&config)))
    };
    let selected_file: TimerSlot<File> = use_mut_ref(|| None);
    let busy_timer: TimerSlot<Interval> = use_mut_ref(|| None);
    let surprise_timer: TimerSlot<Timeout> = use_mut_ref(|| None);
    let click_timer: TimerSlot<Timeout> = use_mut_ref(|| None);
    let copy_timer: TimerSlot<Timeout> = use_mut_ref(|| None);
    let download_timer: TimerSlot<Timeout> = use_mut_ref(|| None);

    let view = PageView::new(
        page.dispatcher(),
        busy_timer,
        surprise_timer,
        Rc::clone(&config),
    );

    // Placeholder rotation; the reducer ignores ticks outside text mode
    {
        let dispatcher = page.dispatcher();
        let millis = config.placeholder_interval_ms;
        use_effect_with((), move |_| {
            let interval = Interval::new(millis, move || {
                dispatcher.dispatch(PageAction::RotatePlaceholder)
            });
            move || {
                interval.cancel();
            }
        });
    }

    let on_mode = {
        let dispatcher = page.dispatcher();
        Callback::from(move |mode: InputMode| dispatcher.dispatch(PageAction::SelectMode(mode)))
    };

    let on_text = {
        let dispatcher = page.dispatcher();
        Callback::from(move |text: String| dispatcher.dispatch(PageAction::EditText(text)))
    };

    let on_file = {
        let dispatcher = page.dispatcher();
        let selected_file = selected_file.clone();
        Callback::from(move |file: Option<File>| {
            *selected_file.borrow_mut() = file.clone();
            let Some(file) = file else {
                return;
            };
            dispatcher.dispatch(PageAction::PreviewCleared);
            let dispatcher = dispatcher.clone();
            spawn_local(async move {
                match read_data_url(&file).await {
                    Ok(data_url) => dispatcher.dispatch(PageAction::PreviewLoaded(
                        PreviewSlot::from_data_url(&file.type_(), data_url),
                    )),
                    Err(e) => gloo::console::error!(format!("Preview failed: {e}")),
                }
            });
        })
    };

    let on_submit = {
        let view = view.clone();
        let mode = page.0.mode;
        let text = page.0.text.clone();
        let selected_file = selected_file.clone();
        let endpoints = config.endpoints.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let form = FormState {
                mode,
                text: text.clone(),
                file: selected_file.borrow().clone().map(Upload),
            };
            let view = view.clone();
            let endpoints = endpoints.clone();
            spawn_local(async move {
                // Failures are already reported through the view
                let _ = submit_plan(&form, &HttpTransport, &endpoints, &view).await;
            });
        })
    };

    let on_surprise = {
        let view = view.clone();
        let endpoints = config.endpoints.clone();
        Callback::from(move |_: ()| {
            let view = view.clone();
            let endpoints = endpoints.clone();
            spawn_local(async move {
                let _ = fetch_surprise(&HttpTransport, &endpoints, &view).await;
            });
        })
    };

    let on_clear = {
        let dispatcher = page.dispatcher();
        Callback::from(move |_: ()| dispatcher.dispatch(PageAction::Clear))
    };

    let on_hover = {
        let dispatcher = page.dispatcher();
        Callback::from(move |hovering: bool| dispatcher.dispatch(PageAction::HoverGenerate(hovering)))
    };

    let on_icon_click = {
        let dispatcher = page.dispatcher();
        let millis = config.click_window_ms;
        Callback::from(move |_: ()| {
            dispatcher.dispatch(PageAction::IconClicked);
            schedule(&click_timer, &dispatcher, millis, PageAction::IconClicksExpired);
        })
    };

    let on_copy = {
        let dispatcher = page.dispatcher();
        let plan: Option<PlanResult> = page.0.plan.clone();
        let config = config.clone();
        Callback::from(move |_: ()| {
            let Some(plan) = plan.clone() else {
                return;
            };
            let dispatcher = dispatcher.clone();
            let copy_timer = copy_timer.clone();
            let config = config.clone();
            spawn_local(async move {
                let outcome = match copy_plan(&plan, &NavigatorClipboard).await {
                    Ok(()) => Flash::Done,
                    Err(e) => {
                        gloo::console::error!(e.to_string());
                        Flash::Failed
                    }
                };
                flash(&dispatcher, &copy_timer, &config, OutputAction::Copy, outcome);
            });
        })
    };

    let on_download = {
        let dispatcher = page.dispatcher();
        let plan = page.0.plan.clone();
        let config = config.clone();
        Callback::from(move |_: ()| {
            let Some(plan) = &plan else {
                return;
            };
            let outcome = match save_download(&plan.download(&iso_now())) {
                Ok(()) => Flash::Done,
                Err(e) => {
                    gloo::console::error!(e.to_string());
                    Flash::Failed
                }
            };
            flash(&dispatcher, &download_timer, &config, OutputAction::Download, outcome);
        })
    };

    let state = &page.0;

    html! {
        <div class="app">
            <header class="header">
                <RobotIcon
                    src={state.icon.src()}
                    classes={classes!(state.icon_classes())}
                    on_click={on_icon_click}
                />
                <div class="header-text">
                    <h1>{ "Creative Agent" }</h1>
                    <p class="subtitle">{ "Turn a brief, an image or a video into a creative plan" }</p>
                </div>
            </header>

            <main class="main">
                <form id="creative-form" onsubmit={on_submit}>
                    <InputPanel
                        mode={state.mode}
                        text={state.text.clone()}
                        placeholder={state.placeholder}
                        preview={state.preview.clone()}
                        on_mode={on_mode}
                        on_text={on_text}
                        on_file={on_file}
                    />
                    <FormButtons
                        visibility={state.visibility()}
                        enabled={state.actions_enabled}
                        surprise_label={state.surprise_label()}
                        on_surprise={on_surprise}
                        on_clear={on_clear}
                        on_hover={on_hover}
                    />
                </form>

                <Loading busy={state.busy} />

                if let Some(plan) = &state.output {
                    <OutputPanel
                        plan={plan.clone()}
                        enabled={state.actions_enabled}
                        copy_flash={state.flash(OutputAction::Copy)}
                        download_flash={state.flash(OutputAction::Download)}
                        on_copy={on_copy}
                        on_download={on_download}
                    />
                }
            </main>

            <footer class="footer">
                <span class="footer-build">
                    { format!(
                        "Build: {} @ {} ({})",
                        env!("BUILD_COMMIT"),
                        env!("BUILD_HOST"),
                        env!("BUILD_TIMESTAMP")
                    ) }
                </span>
            </footer>
        </div>
    }
}
