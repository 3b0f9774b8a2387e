//! Contact section: details, social links and the relay-backed form.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use portfolio_core::contact::{ContactForm, FormField, Submission, SubmissionStatus};
use portfolio_core::relay::deliver;
use portfolio_core::section::SectionId;
use tracing::{debug, warn};

use super::reveal::{RevealSection, SectionHeading};
use crate::content::{EMAIL, GITHUB, LINKEDIN, LOCATION, PHONE_DISPLAY, PHONE_HREF};
use crate::dom::describe_js_error;
use crate::page::use_page;
use crate::relay::EmailJsRelay;

/// Submit button classes: dimmed while sending, green after success.
pub fn submit_class(status: SubmissionStatus) -> &'static str {
    match status {
        SubmissionStatus::Sending => {
            "w-full py-4 rounded-lg font-semibold text-white bg-gray-500 cursor-not-allowed opacity-70"
        }
        SubmissionStatus::Success => {
            "w-full py-4 rounded-lg font-semibold text-white bg-green-500 transition-all duration-300"
        }
        SubmissionStatus::Idle | SubmissionStatus::Error => {
            "w-full py-4 rounded-lg font-semibold text-white bg-gradient-to-r from-blue-500 to-purple-500 hover:shadow-2xl hover:scale-[1.02] transition-all duration-300"
        }
    }
}

#[component]
pub fn Contact() -> impl IntoView {
    let page = use_page();
    let muted = move || page.pick("text-gray-400", "text-gray-600");
    let card = move || {
        format!(
            "rounded-2xl p-8 shadow-xl {}",
            page.pick("bg-gray-800/50 border border-gray-700", "bg-white border border-gray-200"),
        )
    };

    view! {
        <RevealSection
            id=SectionId::Contact
            class=Signal::derive(move || format!("py-24 px-6 relative {}", page.pick("bg-gray-800/30", "bg-white/50")))
            inner_class="max-w-6xl mx-auto"
        >
            <SectionHeading title="Get In Touch" subtitle="Let's discuss your next project or just say hello" />
            <div class="grid md:grid-cols-2 gap-8">
                <div class=card>
                    <h3 class="text-2xl font-bold mb-6">"Contact Information"</h3>
                    <div class="space-y-4">
                        <ContactLine label="Email" value=EMAIL href=Some(format!("mailto:{EMAIL}")) />
                        <ContactLine label="Phone" value=PHONE_DISPLAY href=Some(PHONE_HREF.to_string()) />
                        <ContactLine label="Location" value=LOCATION href=None />
                    </div>
                    <div class="flex gap-4 mt-8">
                        <a href=GITHUB target="_blank" rel="noopener noreferrer" class=move || format!("font-medium hover:text-blue-500 {}", muted())>
                            "GitHub"
                        </a>
                        <a href=LINKEDIN target="_blank" rel="noopener noreferrer" class=move || format!("font-medium hover:text-blue-500 {}", muted())>
                            "LinkedIn"
                        </a>
                    </div>
                </div>
                <div class=card>
                    <MessageForm />
                </div>
            </div>
        </RevealSection>
    }
}

#[component]
fn ContactLine(label: &'static str, value: &'static str, href: Option<String>) -> impl IntoView {
    let page = use_page();
    view! {
        <div>
            <p class=move || format!("text-sm {}", page.pick("text-gray-400", "text-gray-600"))>{label}</p>
            {match href {
                Some(href) => view! { <a href=href class="font-semibold hover:text-blue-500">{value}</a> }.into_any(),
                None => view! { <p class="font-semibold">{value}</p> }.into_any(),
            }}
        </div>
    }
}

#[component]
fn MessageForm() -> impl IntoView {
    let page = use_page();
    let reset_delay = page.config.with_value(|c| c.reset_delay);
    let form = RwSignal::new(ContactForm::with_reset_delay(reset_delay));
    let pending_reset = StoredValue::new(None::<TimeoutHandle>);

    on_cleanup(move || {
        if let Some(handle) = pending_reset.try_get_value().flatten() {
            handle.clear();
        }
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let Some(submission) = start_submission(form) else {
            return;
        };

        // A newer submission owns the status now; drop the old reset.
        if let Some(handle) = pending_reset.get_value() {
            handle.clear();
            pending_reset.set_value(None);
        }

        let relay = EmailJsRelay::new(page.config.with_value(|c| c.relay.clone()));
        spawn_local(async move {
            let outcome = deliver(&relay, &submission).await;
            let Some(timer) = form.try_update(|f| f.complete(&submission, &outcome)).flatten() else {
                return;
            };
            let fire = move || {
                let _ = form.try_update(|f| f.expire(timer));
            };
            match set_timeout_with_handle(fire, timer.delay()) {
                Ok(handle) => pending_reset.set_value(Some(handle)),
                Err(e) => warn!("status reset not scheduled: {}", describe_js_error(&e)),
            }
        });
    };

    let status = move || form.with(|f| f.status());

    view! {
        <form class="space-y-6" on:submit=on_submit>
            <FormInput form=form field=FormField::Name label="Name" kind="text" placeholder="Your Name" />
            <FormInput form=form field=FormField::Email label="Email" kind="email" placeholder="your.email@example.com" />
            <FormInput form=form field=FormField::Subject label="Subject" kind="text" placeholder="Subject" />
            <div>
                <label class="block text-sm font-medium mb-2">"Message"</label>
                <textarea
                    name=FormField::Message.as_str()
                    rows="5"
                    required
                    placeholder="Tell me about your project..."
                    class=move || input_class(page.theme.get().is_dark())
                    prop:value=move || form.with(|f| f.draft().message.clone())
                    on:input=move |ev| form.update(|f| f.set_field(FormField::Message, event_target_value(&ev)))
                ></textarea>
            </div>
            <button
                type="submit"
                class=move || submit_class(status())
                disabled=move || !form.with(|f| f.can_submit())
            >
                {move || status().button_label()}
            </button>
            {move || status().notice().map(|notice| view! {
                <p class="text-center text-sm text-red-500">{notice}</p>
            })}
        </form>
    }
}

/// Begin a submission, notifying subscribers only when it actually starts.
fn start_submission(form: RwSignal<ContactForm>) -> Option<Submission> {
    let mut started = None;
    form.maybe_update(|f| match f.begin_submit() {
        Ok(submission) => {
            started = Some(submission);
            true
        }
        Err(e) => {
            debug!("submit ignored: {e}");
            false
        }
    });
    started
}

fn input_class(dark: bool) -> &'static str {
    if dark {
        "w-full px-4 py-3 rounded-lg bg-gray-900 border border-gray-700 focus:border-blue-500 focus:outline-none transition-colors"
    } else {
        "w-full px-4 py-3 rounded-lg bg-gray-50 border border-gray-300 focus:border-blue-500 focus:outline-none transition-colors"
    }
}

#[component]
fn FormInput(
    form: RwSignal<ContactForm>,
    field: FormField,
    label: &'static str,
    kind: &'static str,
    placeholder: &'static str,
) -> impl IntoView {
    let page = use_page();
    view! {
        <div>
            <label class="block text-sm font-medium mb-2">{label}</label>
            <input
                type=kind
                name=field.as_str()
                required
                placeholder=placeholder
                class=move || input_class(page.theme.get().is_dark())
                prop:value=move || form.with(|f| f.draft().get(field).to_string())
                on:input=move |ev| form.update(|f| f.set_field(field, event_target_value(&ev)))
            />
        </div>
    }
}
