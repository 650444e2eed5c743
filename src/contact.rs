pub mod validation;

use std::collections::HashSet;

use gloo_console::log;
use web_sys::{
    Element, HtmlInputElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
    SubmitEvent,
};
use yew::prelude::*;

use crate::analytics;
use crate::email::{send_consultation_request, FormSubmission};
use self::validation::{field_is_valid, validate, FieldKind, RequiredField};

const SUBMIT_LABEL: &str = "Request Consultation";
const SENDING_LABEL: &str = "Sending...";
const SUCCESS_MESSAGE: &str =
    "Thank you for your request! Our team will contact you within 24 hours.";
const ERROR_HEADER: &str = "Please correct the following:";

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Field {
    Name,
    Company,
    Email,
    Phone,
    Message,
}

const FIELD_ORDER: [Field; 5] = [
    Field::Name,
    Field::Company,
    Field::Email,
    Field::Phone,
    Field::Message,
];

impl Field {
    fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Company => "Company",
            Field::Email => "Email",
            Field::Phone => "Phone",
            Field::Message => "Message",
        }
    }

    fn kind(self) -> FieldKind {
        match self {
            Field::Email => FieldKind::Email,
            _ => FieldKind::Text,
        }
    }

    fn required(self) -> bool {
        matches!(self, Field::Name | Field::Email | Field::Message)
    }
}

#[derive(Clone, Copy, PartialEq)]
enum FeedbackKind {
    Success,
    Error,
}

struct Feedback {
    kind: FeedbackKind,
    text: String,
}

pub enum ContactMsg {
    Edited(Field, String),
    Blurred(Field),
    Submit,
    Sent(Result<(), String>),
}

/// Consultation request form. Fields are controlled state; validation runs
/// in bulk on submit and per field on blur/input; delivery goes through the
/// hosted email client. The submit button is restored on every outcome so a
/// failed send never leaves it stuck disabled.
pub struct ContactForm {
    values: FormSubmission,
    field_errors: HashSet<Field>,
    feedback: Option<Feedback>,
    sending: bool,
    scroll_feedback: bool,
    feedback_ref: NodeRef,
}

impl ContactForm {
    fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.values.name,
            Field::Company => &self.values.company,
            Field::Email => &self.values.email,
            Field::Phone => &self.values.phone,
            Field::Message => &self.values.message,
        }
    }

    fn set_value(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.values.name = value,
            Field::Company => self.values.company = value,
            Field::Email => self.values.email = value,
            Field::Phone => self.values.phone = value,
            Field::Message => self.values.message = value,
        }
    }

    fn mark_invalid_fields(&mut self) {
        self.field_errors = FIELD_ORDER
            .iter()
            .copied()
            .filter(|f| f.required() && !field_is_valid(f.kind(), self.value(*f)))
            .collect();
    }
}

impl Component for ContactForm {
    type Message = ContactMsg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            values: FormSubmission::default(),
            field_errors: HashSet::new(),
            feedback: None,
            sending: false,
            scroll_feedback: false,
            feedback_ref: NodeRef::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            ContactMsg::Edited(field, value) => {
                self.set_value(field, value);
                // Live clear only: an error marker goes away as soon as the
                // field becomes valid, but typing never sets one.
                if self.field_errors.contains(&field)
                    && field_is_valid(field.kind(), self.value(field))
                {
                    self.field_errors.remove(&field);
                }
                true
            }
            ContactMsg::Blurred(field) => {
                if !field.required() {
                    return false;
                }
                if field_is_valid(field.kind(), self.value(field)) {
                    self.field_errors.remove(&field)
                } else {
                    self.field_errors.insert(field)
                };
                true
            }
            ContactMsg::Submit => {
                let required: Vec<RequiredField> = FIELD_ORDER
                    .iter()
                    .filter(|f| f.required())
                    .map(|f| RequiredField {
                        label: f.label(),
                        kind: f.kind(),
                        value: self.value(*f),
                    })
                    .collect();
                let result = validate(&required);
                self.mark_invalid_fields();

                if !result.is_valid {
                    self.feedback = Some(Feedback {
                        kind: FeedbackKind::Error,
                        text: result.errors.join("\n"),
                    });
                    return true;
                }

                self.sending = true;
                self.feedback = None;
                let submission = self.values.clone();
                ctx.link().send_future(async move {
                    ContactMsg::Sent(send_consultation_request(&submission).await)
                });
                true
            }
            ContactMsg::Sent(result) => {
                self.sending = false;
                match result {
                    Ok(()) => {
                        self.feedback = Some(Feedback {
                            kind: FeedbackKind::Success,
                            text: SUCCESS_MESSAGE.to_string(),
                        });
                        self.scroll_feedback = true;
                        self.values = FormSubmission::default();
                        self.field_errors.clear();
                        analytics::track_event("consultation_request", "forms", "consultation_form");
                    }
                    Err(error) => {
                        log!("Email sending failed:", &error);
                        self.feedback = Some(Feedback {
                            kind: FeedbackKind::Error,
                            text: format!("Error: {error}"),
                        });
                    }
                }
                true
            }
        }
    }

    fn rendered(&mut self, _ctx: &Context<Self>, _first_render: bool) {
        if self.scroll_feedback {
            if let Some(element) = self.feedback_ref.cast::<Element>() {
                let mut options = ScrollIntoViewOptions::new();
                options
                    .behavior(ScrollBehavior::Smooth)
                    .block(ScrollLogicalPosition::Nearest);
                element.scroll_into_view_with_scroll_into_view_options(&options);
            }
            self.scroll_feedback = false;
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let onsubmit = ctx.link().callback(|e: SubmitEvent| {
            e.prevent_default();
            ContactMsg::Submit
        });

        html! {
            <>
                <style>
                    {r#"
                        .contact-form {
                            display: flex;
                            flex-direction: column;
                            gap: 1rem;
                            max-width: 540px;
                            margin: 0 auto;
                        }
                        .contact-form input,
                        .contact-form textarea {
                            padding: 0.75rem 1rem;
                            border-radius: 8px;
                            border: 1px solid rgba(255, 255, 255, 0.2);
                            background: rgba(255, 255, 255, 0.05);
                            color: #fff;
                            font-size: 1rem;
                        }
                        .contact-form input.error,
                        .contact-form textarea.error {
                            border-color: #ff6b6b;
                        }
                        .contact-form textarea {
                            min-height: 120px;
                            resize: vertical;
                        }
                        .contact-form button[type="submit"] {
                            padding: 0.9rem 1.5rem;
                            border: none;
                            border-radius: 8px;
                            background: #1E90FF;
                            color: #fff;
                            font-size: 1rem;
                            cursor: pointer;
                        }
                        .contact-form button[type="submit"]:disabled {
                            opacity: 0.6;
                            cursor: wait;
                        }
                        .form-feedback {
                            padding: 0.75rem 1rem;
                            border-radius: 8px;
                            white-space: pre-line;
                            font-size: 0.95rem;
                        }
                        .form-feedback.success {
                            background: rgba(46, 204, 113, 0.15);
                            color: #2ecc71;
                        }
                        .form-feedback.error {
                            background: rgba(255, 107, 107, 0.15);
                            color: #ff6b6b;
                        }
                    "#}
                </style>
                <form id="contactForm" class="contact-form" {onsubmit}>
                    { self.render_input(ctx, Field::Name, "text", "Your Name") }
                    { self.render_input(ctx, Field::Company, "text", "Company") }
                    { self.render_input(ctx, Field::Email, "email", "Email Address") }
                    { self.render_input(ctx, Field::Phone, "tel", "Phone Number") }
                    { self.render_textarea(ctx, Field::Message, "Tell us about your project") }
                    { self.render_feedback() }
                    <button type="submit" disabled={self.sending}>
                        { if self.sending { SENDING_LABEL } else { SUBMIT_LABEL } }
                    </button>
                </form>
            </>
        }
    }
}

impl ContactForm {
    fn field_callbacks(
        &self,
        ctx: &Context<Self>,
        field: Field,
    ) -> (Callback<InputEvent>, Callback<FocusEvent>) {
        let oninput = ctx.link().callback(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            ContactMsg::Edited(field, input.value())
        });
        let onblur = ctx
            .link()
            .callback(move |_: FocusEvent| ContactMsg::Blurred(field));
        (oninput, onblur)
    }

    fn field_class(&self, field: Field) -> Classes {
        classes!(self.field_errors.contains(&field).then(|| "error"))
    }

    fn render_input(
        &self,
        ctx: &Context<Self>,
        field: Field,
        input_type: &'static str,
        placeholder: &'static str,
    ) -> Html {
        let (oninput, onblur) = self.field_callbacks(ctx, field);
        html! {
            <input
                type={input_type}
                name={field.label().to_lowercase()}
                aria-label={field.label()}
                placeholder={placeholder}
                required={field.required()}
                value={self.value(field).to_string()}
                class={self.field_class(field)}
                {oninput}
                {onblur}
            />
        }
    }

    fn render_textarea(&self, ctx: &Context<Self>, field: Field, placeholder: &'static str) -> Html {
        let (oninput, onblur) = self.field_callbacks(ctx, field);
        html! {
            <textarea
                name={field.label().to_lowercase()}
                aria-label={field.label()}
                placeholder={placeholder}
                required={field.required()}
                value={self.value(field).to_string()}
                class={self.field_class(field)}
                {oninput}
                {onblur}
            />
        }
    }

    fn render_feedback(&self) -> Html {
        match &self.feedback {
            Some(feedback) => {
                let (kind_class, text) = match feedback.kind {
                    FeedbackKind::Success => ("success", feedback.text.clone()),
                    FeedbackKind::Error => {
                        ("error", format!("{ERROR_HEADER}\n{}", feedback.text))
                    }
                };
                html! {
                    <div
                        ref={self.feedback_ref.clone()}
                        class={classes!("form-feedback", kind_class)}
                    >
                        { text }
                    </div>
                }
            }
            None => html! {},
        }
    }
}
