use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use log::warn;
use wasm_bindgen_futures::spawn_local;
use web_sys::{
    HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement, ScrollBehavior,
    ScrollIntoViewOptions, ScrollLogicalPosition,
};
use yew::prelude::*;

use crate::config;
use crate::contact::controller::{FormController, Phase, SubmitOutcome};
use crate::contact::field::{Field, FieldKind};

pub enum FormAction {
    Input(String, String),
    Toggle(String, bool),
    Focus(String),
    Blur(String),
    Submit,
    Complete,
    Restart,
}

impl Reducible for FormController {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut form = (*self).clone();
        match action {
            FormAction::Input(name, value) => form.on_input(&name, value),
            FormAction::Toggle(name, checked) => form.on_toggle(&name, checked),
            FormAction::Focus(name) => form.on_focus(&name),
            FormAction::Blur(name) => {
                form.on_blur(&name);
            }
            FormAction::Submit => {
                if form.submit() == SubmitOutcome::Ignored {
                    return self;
                }
            }
            FormAction::Complete => {
                if !form.complete_submission() {
                    return self;
                }
            }
            FormAction::Restart => {
                if !form.restart() {
                    return self;
                }
            }
        }
        Rc::new(form)
    }
}

fn scroll_to_field(name: &str) {
    let element = match web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(name))
    {
        Some(element) => element,
        None => {
            warn!("Cannot scroll to field {}: element not found", name);
            return;
        }
    };
    let mut options = ScrollIntoViewOptions::new();
    options
        .behavior(ScrollBehavior::Smooth)
        .block(ScrollLogicalPosition::Center);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

fn input_type(kind: FieldKind) -> &'static str {
    match kind {
        FieldKind::Email => "email",
        FieldKind::Tel => "tel",
        FieldKind::Checkbox => "checkbox",
        _ => "text",
    }
}

fn error_message(field: &Field) -> Html {
    match &field.error {
        Some(error) => html! {
            <div class="error-message" style="color: #dc3545; font-size: 0.8rem; margin-top: 5px;">
                {error.to_string()}
            </div>
        },
        None => html! {},
    }
}

fn render_field(field: &Field, form: &UseReducerHandle<FormController>) -> Html {
    let name = field.name.clone();
    let onfocus = {
        let form = form.clone();
        let name = name.clone();
        Callback::from(move |_: FocusEvent| form.dispatch(FormAction::Focus(name.clone())))
    };
    let onblur = {
        let form = form.clone();
        let name = name.clone();
        Callback::from(move |_: FocusEvent| form.dispatch(FormAction::Blur(name.clone())))
    };
    let class = classes!(field.has_error().then(|| "error"));
    let style = if field.has_error() { "border-color: #dc3545;" } else { "" };

    match field.kind {
        FieldKind::Checkbox => {
            let onchange = {
                let form = form.clone();
                let name = name.clone();
                Callback::from(move |e: Event| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    form.dispatch(FormAction::Toggle(name.clone(), input.checked()));
                })
            };
            html! {
                <div class="form-group checkbox-group">
                    <input
                        type="checkbox"
                        id={name.clone()}
                        name={name.clone()}
                        class={class}
                        style={style}
                        required={field.required}
                        checked={field.value.is_checked()}
                        {onchange}
                        {onfocus}
                        {onblur}
                    />
                    <label for={field.name.clone()}>{&field.label}</label>
                    {error_message(field)}
                </div>
            }
        }
        FieldKind::Select => {
            let onchange = {
                let form = form.clone();
                let name = name.clone();
                Callback::from(move |e: Event| {
                    let select: HtmlSelectElement = e.target_unchecked_into();
                    form.dispatch(FormAction::Input(name.clone(), select.value()));
                })
            };
            let current = field.value.as_text();
            html! {
                <div class="form-group">
                    <label for={name.clone()}>{&field.label}</label>
                    <select
                        id={name.clone()}
                        name={name.clone()}
                        class={class}
                        style={style}
                        required={field.required}
                        {onchange}
                        {onfocus}
                        {onblur}
                    >
                        { for field.options.iter().map(|option| html! {
                            <option value={option.value.clone()} selected={option.value == current}>
                                {&option.label}
                            </option>
                        }) }
                    </select>
                    {error_message(field)}
                </div>
            }
        }
        FieldKind::TextArea => {
            let oninput = {
                let form = form.clone();
                let name = name.clone();
                Callback::from(move |e: InputEvent| {
                    let textarea: HtmlTextAreaElement = e.target_unchecked_into();
                    form.dispatch(FormAction::Input(name.clone(), textarea.value()));
                })
            };
            html! {
                <div class="form-group full-width">
                    <label for={name.clone()}>{&field.label}</label>
                    <textarea
                        id={name.clone()}
                        name={name.clone()}
                        rows="5"
                        class={class}
                        style={style}
                        required={field.required}
                        placeholder={field.placeholder.clone()}
                        value={field.value.as_text().to_string()}
                        {oninput}
                        {onfocus}
                        {onblur}
                    />
                    {error_message(field)}
                </div>
            }
        }
        kind => {
            let oninput = {
                let form = form.clone();
                let name = name.clone();
                Callback::from(move |e: InputEvent| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    form.dispatch(FormAction::Input(name.clone(), input.value()));
                })
            };
            html! {
                <div class="form-group">
                    <label for={name.clone()}>{&field.label}</label>
                    <input
                        type={input_type(kind)}
                        id={name.clone()}
                        name={name.clone()}
                        class={class}
                        style={style}
                        required={field.required}
                        placeholder={field.placeholder.clone()}
                        value={field.value.as_text().to_string()}
                        {oninput}
                        {onfocus}
                        {onblur}
                    />
                    {error_message(field)}
                </div>
            }
        }
    }
}

#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let form = use_reducer(FormController::contact);

    // Simulated request: no network, just the fixed delay
    {
        let dispatcher = form.dispatcher();
        let phase = form.phase();
        use_effect_with_deps(
            move |phase| {
                if *phase == Phase::Submitting {
                    gloo_console::log!("Contact form accepted, simulating request");
                    spawn_local(async move {
                        TimeoutFuture::new(config::SUBMIT_DELAY_MS).await;
                        dispatcher.dispatch(FormAction::Complete);
                    });
                }
                || ()
            },
            phase,
        );
    }

    {
        let target = form.first_invalid().map(|f| f.name.clone());
        use_effect_with_deps(
            move |requests| {
                if *requests > 0 {
                    if let Some(name) = target.as_deref() {
                        scroll_to_field(name);
                    }
                }
                || ()
            },
            form.scroll_requests(),
        );
    }

    let onsubmit = {
        let form = form.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            form.dispatch(FormAction::Submit);
        })
    };

    let onrestart = {
        let form = form.clone();
        Callback::from(move |_: MouseEvent| form.dispatch(FormAction::Restart))
    };

    let submitted = form.phase() == Phase::Submitted;
    let form_style = if submitted { "display: none;" } else { "display: grid;" };

    html! {
        <div class="contact-form-wrapper">
            <form id={form.form_id().to_string()} class="contact-form" style={form_style} novalidate={true} {onsubmit}>
                { for form.fields().iter().map(|field| render_field(field, &form)) }
                <div class="form-group full-width">
                    <button type="submit" class="btn btn-primary" disabled={form.submit_disabled()}>
                        {form.submit_label()}
                    </button>
                </div>
            </form>
            if submitted {
                <div class="success-message">
                    <div class="success-content">
                        <div class="success-icon">
                            <i class="fas fa-check-circle"></i>
                        </div>
                        <h3>{"Thank You!"}</h3>
                        <p>{"Your message has been sent successfully. We'll get back to you as soon as possible."}</p>
                        <button id="resetForm" class="btn btn-primary" onclick={onrestart}>
                            {"Send Another Message"}
                        </button>
                    </div>
                </div>
            }
        </div>
    }
}
