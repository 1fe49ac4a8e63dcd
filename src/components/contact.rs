use gloo_timers::callback::Timeout;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::icons::IconView;
use crate::components::toast::Toast;
use crate::config;
use crate::content::{Icon, BUSINESS_HOURS, CONTACT_CHANNELS};
use crate::contact_form::{hand_off, ComposerAction, ComposerState, ContactField};
use crate::document::DocumentHandle;
use crate::reveal::use_reveal;

fn on_input(dispatcher: UseReducerDispatcher<ComposerState>, field: ContactField) -> Callback<InputEvent> {
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        dispatcher.dispatch(ComposerAction::Edit(field, input.value()));
    })
}

#[function_component(ContactSection)]
pub fn contact_section() -> Html {
    let form_node = use_node_ref();
    let info_node = use_node_ref();
    let form_revealed = use_reveal(form_node.clone(), 0);
    let info_revealed = use_reveal(info_node.clone(), 0);

    let composer = use_reducer(ComposerState::default);
    let doc = use_context::<DocumentHandle>().unwrap_or_default();
    let settle = use_mut_ref(|| None::<Timeout>);

    // A submission still settling when the section unmounts never completes.
    {
        let settle = settle.clone();
        use_effect_with_deps(
            move |_| {
                move || {
                    settle.borrow_mut().take();
                }
            },
            (),
        );
    }

    let onsubmit = {
        let dispatcher = composer.dispatcher();
        let draft = composer.draft.clone();
        let submitting = composer.submitting;
        let settle = settle.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if submitting {
                return;
            }
            dispatcher.dispatch(ComposerAction::BeginSubmit);
            hand_off(&*doc, config::CONTACT_RECIPIENT, &draft);

            let dispatcher = dispatcher.clone();
            let timeout = Timeout::new(config::SUBMIT_SETTLE_MS, move || {
                dispatcher.dispatch(ComposerAction::Complete);
            });
            *settle.borrow_mut() = Some(timeout);
        })
    };

    let on_message = {
        let dispatcher = composer.dispatcher();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            dispatcher.dispatch(ComposerAction::Edit(ContactField::Message, input.value()));
        })
    };

    let on_dismiss = {
        let dispatcher = composer.dispatcher();
        Callback::from(move |_: ()| dispatcher.dispatch(ComposerAction::DismissNotice))
    };

    let draft = &composer.draft;

    html! {
        <section id="contact" class="section-padding section-gray contact">
            <style>
                {r#"
                    .contact { position: relative; overflow: hidden; }
                    .contact-grid { display: grid; grid-template-columns: 1fr; gap: 3rem; align-items: start; }
                    @media (min-width: 1024px) { .contact-grid { grid-template-columns: 1fr 1fr; } }
                    .contact-card { background: #fff; border-radius: 1rem; box-shadow: 0 10px 15px rgba(15, 23, 42, 0.08); padding: 2rem; }
                    .contact-card + .contact-card { margin-top: 2rem; }
                    .contact-card h3 { font-size: 1.5rem; font-weight: 600; margin-bottom: 1.5rem; }
                    .form-row { display: grid; grid-template-columns: 1fr; gap: 1.5rem; margin-bottom: 1.5rem; }
                    @media (min-width: 768px) { .form-row.split { grid-template-columns: 1fr 1fr; } }
                    .form-row label { display: block; font-size: 0.875rem; font-weight: 500; color: rgba(15, 23, 42, 0.8); margin-bottom: 0.5rem; }
                    .form-row input, .form-row textarea {
                        width: 100%;
                        padding: 0.75rem 1rem;
                        border-radius: 0.5rem;
                        border: 1px solid rgba(15, 23, 42, 0.1);
                        font: inherit;
                        transition: all 0.3s;
                    }
                    .form-row textarea { resize: none; }
                    .form-row input:focus, .form-row textarea:focus {
                        outline: none;
                        border-color: var(--neptech-blue);
                        box-shadow: 0 0 0 2px rgba(14, 165, 233, 0.2);
                    }
                    .submit-button { width: 100%; justify-content: center; }
                    .submit-button:disabled { opacity: 0.8; cursor: not-allowed; }
                    .spinner { animation: spin 1s linear infinite; }
                    .channel { display: flex; align-items: flex-start; gap: 1rem; }
                    .channel + .channel { margin-top: 1.5rem; }
                    .channel-icon {
                        flex-shrink: 0;
                        width: 3rem;
                        height: 3rem;
                        border-radius: 9999px;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        color: var(--neptech-blue);
                        background: rgba(14, 165, 233, 0.1);
                    }
                    .channel h4 { font-size: 1.125rem; font-weight: 500; }
                    .channel a:hover { color: var(--neptech-blue); }
                    .hours-row { display: flex; justify-content: space-between; }
                    .hours-row + .hours-row { margin-top: 0.75rem; }
                    .emergency { margin-top: 1.5rem; padding-top: 1.5rem; border-top: 1px solid rgba(15, 23, 42, 0.1); }
                    .emergency strong { color: var(--neptech-blue); font-weight: 500; }
                "#}
            </style>

            <div class="container">
                <div class="section-title">
                    <span class="badge">{"CONTACT US"}</span>
                    <h2>
                        {"Get in Touch with Our "}
                        <span class="gradient-text">{"Team"}</span>
                    </h2>
                    <p class="muted">
                        {"Have questions about our services? Ready to start your IT transformation? Contact us today."}
                    </p>
                </div>

                <div class="contact-grid">
                    <div ref={form_node} class={classes!("contact-card", "reveal-target", form_revealed.then_some("animate-fade-in-right"))}>
                        <h3>{"Send Us a Message"}</h3>
                        <form {onsubmit}>
                            <div class="form-row split">
                                <div>
                                    <label for="name">{"Your Name"}</label>
                                    <input
                                        type="text"
                                        id="name"
                                        name="name"
                                        required={true}
                                        placeholder="Enter your Name"
                                        value={draft.name.clone()}
                                        oninput={on_input(composer.dispatcher(), ContactField::Name)}
                                    />
                                </div>
                                <div>
                                    <label for="email">{"Your Email"}</label>
                                    <input
                                        type="email"
                                        id="email"
                                        name="email"
                                        required={true}
                                        placeholder="email@example.com"
                                        value={draft.email.clone()}
                                        oninput={on_input(composer.dispatcher(), ContactField::Email)}
                                    />
                                </div>
                            </div>
                            <div class="form-row">
                                <div>
                                    <label for="subject">{"Subject"}</label>
                                    <input
                                        type="text"
                                        id="subject"
                                        name="subject"
                                        required={true}
                                        placeholder="How can we help you?"
                                        value={draft.subject.clone()}
                                        oninput={on_input(composer.dispatcher(), ContactField::Subject)}
                                    />
                                </div>
                            </div>
                            <div class="form-row">
                                <div>
                                    <label for="message">{"Message"}</label>
                                    <textarea
                                        id="message"
                                        name="message"
                                        required={true}
                                        rows="5"
                                        placeholder="Tell us about your project or inquiry..."
                                        value={draft.message.clone()}
                                        oninput={on_message}
                                    />
                                </div>
                            </div>
                            <button type="submit" class="button-primary submit-button" disabled={composer.submitting}>
                                if composer.submitting {
                                    <>
                                    <svg class="spinner" width="16" height="16" viewBox="0 0 24 24" fill="none">
                                        <circle cx="12" cy="12" r="10" stroke="currentColor" stroke-width="4" opacity="0.25"></circle>
                                        <path fill="currentColor" opacity="0.75" d="M4 12a8 8 0 018-8V0C5.373 0 0 5.373 0 12h4z"></path>
                                    </svg>
                                    {"Processing..."}
                                    </>
                                } else {
                                    <>
                                    {"Send Message"}
                                    <IconView icon={Icon::Send} size={18} />
                                    </>
                                }
                            </button>
                        </form>
                    </div>

                    <div ref={info_node} class={classes!("reveal-target", info_revealed.then_some("animate-fade-in-left"))}>
                        <div class="contact-card">
                            <h3>{"Contact Information"}</h3>
                            { for CONTACT_CHANNELS.iter().map(|channel| html! {
                                <div class="channel" key={channel.title}>
                                    <div class="channel-icon">
                                        <IconView icon={channel.icon} size={20} />
                                    </div>
                                    <div>
                                        <h4>{channel.title}</h4>
                                        <p class="muted">
                                            { for channel.lines.iter().map(|line| match line.href {
                                                Some(href) => html! { <><a {href}>{line.text}</a><br /></> },
                                                None => html! { <>{line.text}<br /></> },
                                            }) }
                                        </p>
                                    </div>
                                </div>
                            }) }
                        </div>

                        <div class="contact-card">
                            <h3>{"Business Hours"}</h3>
                            { for BUSINESS_HOURS.iter().map(|row| html! {
                                <div class="hours-row" key={row.days}>
                                    <span>{row.days}</span>
                                    <span class="muted">{row.hours}</span>
                                </div>
                            }) }
                            <div class="emergency">
                                <strong>{"24/7 Emergency Support"}</strong>
                                <p class="muted">
                                    {"Our technical support team is available 24/7 for urgent IT emergencies."}
                                </p>
                            </div>
                        </div>
                    </div>
                </div>
            </div>

            if let Some(message) = composer.notice {
                <Toast {message} serial={composer.notices_shown} {on_dismiss} />
            }
        </section>
    }
}
