//! UI Components for the creative form.

use creative_agent::{
    Ellipsis, Flash, InputMode, OutputAction, PLAN_HEADING, PlanResult, PreviewSlot, Visibility,
};
use web_sys::{File, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

fn display(shown: bool) -> &'static str {
    if shown { "display: block" } else { "display: none" }
}

/// Mode select plus the text and file inputs.
#[derive(Properties, PartialEq)]
pub struct InputPanelProps {
    pub mode: InputMode,
    pub text: String,
    pub placeholder: AttrValue,
    pub preview: PreviewSlot,
    pub on_mode: Callback<InputMode>,
    pub on_text: Callback<String>,
    pub on_file: Callback<Option<File>>,
}

#[function_component(InputPanel)]
pub fn input_panel(props: &InputPanelProps) -> Html {
    let visibility = props.mode.visibility();

    let on_select = {
        let on_mode = props.on_mode.clone();
        Callback::from(move |e: Event| {
            let target: HtmlSelectElement = e.target_unchecked_into();
            on_mode.emit(InputMode::from_select(&target.value()));
        })
    };

    let on_input = {
        let on_text = props.on_text.clone();
        Callback::from(move |e: InputEvent| {
            let target: HtmlTextAreaElement = e.target_unchecked_into();
            on_text.emit(target.value());
        })
    };

    let on_file_change = {
        let on_file = props.on_file.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_file.emit(input.files().and_then(|files| files.get(0)));
        })
    };

    html! {
        <div class="input-panel">
            <label for="input-type">{ "Input type" }</label>
            <select id="input-type" onchange={on_select}>
                <option value="text" selected={props.mode == InputMode::Text}>{ "Text brief" }</option>
                <option value="file" selected={props.mode == InputMode::File}>{ "Image or video" }</option>
            </select>

            <div id="text-input-block" style={display(visibility.text_block)}>
                <textarea
                    id="input"
                    value={props.text.clone()}
                    placeholder={props.placeholder.clone()}
                    oninput={on_input}
                    rows="4"
                />
            </div>

            <div id="file-input-block" style={display(visibility.file_block)}>
                <input id="file" type="file" accept="image/*,video/*" onchange={on_file_change} />
                if let Some(src) = props.preview.image_src() {
                    <img id="preview-img" class="preview" src={src.to_string()} alt="Preview" />
                }
                if let Some(src) = props.preview.video_src() {
                    <video id="preview-video" class="preview" src={src.to_string()} controls={true} />
                }
            </div>
        </div>
    }
}

/// Generate, Surprise Me and Clear.
#[derive(Properties, PartialEq)]
pub struct FormButtonsProps {
    pub visibility: Visibility,
    pub enabled: bool,
    pub surprise_label: AttrValue,
    pub on_surprise: Callback<()>,
    pub on_clear: Callback<()>,
    pub on_hover: Callback<bool>,
}

#[function_component(FormButtons)]
pub fn form_buttons(props: &FormButtonsProps) -> Html {
    let disabled = !props.enabled;
    let class = classes!(disabled.then_some("disabled"));

    html! {
        <div class="button-row">
            <button
                id="submit-btn"
                type="submit"
                class={class.clone()}
                disabled={disabled}
                onmouseenter={props.on_hover.reform(|_| true)}
                onmouseleave={props.on_hover.reform(|_| false)}
            >
                { "Generate Plan" }
            </button>
            if props.visibility.surprise_button {
                <button
                    id="surprise-btn"
                    type="button"
                    class={class.clone()}
                    disabled={disabled}
                    onclick={props.on_surprise.reform(|_| ())}
                >
                    { props.surprise_label.clone() }
                </button>
            }
            if props.visibility.clear_button {
                <button
                    id="clear-btn"
                    type="button"
                    class={class}
                    disabled={disabled}
                    onclick={props.on_clear.reform(|_| ())}
                >
                    { "Clear" }
                </button>
            }
        </div>
    }
}

/// Busy indicator with the animated ellipsis.
#[derive(Properties, PartialEq)]
pub struct LoadingProps {
    pub busy: Option<Ellipsis>,
}

#[function_component(Loading)]
pub fn loading(props: &LoadingProps) -> Html {
    match props.busy {
        Some(ellipsis) => html! {
            <div id="loading" class="loading">
                { "Generating plan" }<span id="dots">{ ellipsis.dots() }</span>
            </div>
        },
        None => Html::default(),
    }
}

/// Rendered plan with its copy and download buttons.
#[derive(Properties, PartialEq)]
pub struct OutputPanelProps {
    pub plan: PlanResult,
    pub enabled: bool,
    pub copy_flash: Flash,
    pub download_flash: Flash,
    pub on_copy: Callback<()>,
    pub on_download: Callback<()>,
}

#[function_component(OutputPanel)]
pub fn output_panel(props: &OutputPanelProps) -> Html {
    let highlighted = Html::from_html_unchecked(AttrValue::from(props.plan.highlighted().to_string()));
    let summary = props.plan.creative_plan().map(|plan| plan.summary());
    let disabled = !props.enabled;

    let button = |action: OutputAction, flash: Flash, on_click: &Callback<()>| {
        html! {
            <button
                id={action.id()}
                type="button"
                class={classes!(disabled.then_some("disabled"))}
                disabled={disabled}
                onclick={on_click.reform(|_| ())}
            >
                { action.label(flash) }
            </button>
        }
    };

    html! {
        <section class="output">
            <h2>{ PLAN_HEADING }</h2>
            if let Some(summary) = summary {
                <p class="plan-summary">{ summary }</p>
            }
            <pre id="output"><code>{ highlighted }</code></pre>
            <div class="button-row">
                { button(OutputAction::Copy, props.copy_flash, &props.on_copy) }
                { button(OutputAction::Download, props.download_flash, &props.on_download) }
            </div>
        </section>
    }
}

/// Header icon; clicking it is counted for the icon swap.
#[derive(Properties, PartialEq)]
pub struct RobotIconProps {
    pub src: AttrValue,
    pub classes: Classes,
    pub on_click: Callback<()>,
}

#[function_component(RobotIcon)]
pub fn robot_icon(props: &RobotIconProps) -> Html {
    html! {
        <img
            id="robot-icon"
            class={props.classes.clone()}
            src={props.src.clone()}
            alt="Creative Agent"
            onclick={props.on_click.reform(|_| ())}
        />
    }
}
