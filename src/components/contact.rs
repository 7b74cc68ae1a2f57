//! Contact section.
//!
//! Info panel (channels, copy-email, socials) beside the message form.
//! The form walks Idle -> Loading -> Success/Error; success clears the
//! draft and dismisses itself after a fixed hold, error keeps the draft
//! so the visitor can resubmit.

use dioxus::prelude::*;
use folio_core::content::{CONTACT_CHANNELS, EMAIL, SOCIAL_LINKS};
use folio_core::relay::{ContactDraft, RelayClient, SubmissionStatus, SUCCESS_RESET};

use crate::components::Reveal;
use crate::context::{relay_endpoint, use_pointer};

/// How long the copy-email confirmation shows.
const COPY_FEEDBACK: std::time::Duration = std::time::Duration::from_secs(2);

#[component]
pub fn Contact() -> Element {
    let mut pointer = use_pointer();
    let mut draft = use_signal(ContactDraft::default);
    let mut status = use_signal(SubmissionStatus::default);
    let mut copied = use_signal(|| false);

    let client = use_hook(|| RelayClient::with_endpoint(relay_endpoint()));

    let submit = {
        let client = client.clone();
        move |e: FormEvent| {
            e.prevent_default();

            if status().is_loading() || !draft().is_complete() {
                return;
            }
            status.set(SubmissionStatus::Loading);

            let client = client.clone();
            spawn(async move {
                match client.submit(&draft()).await {
                    Ok(()) => {
                        status.set(SubmissionStatus::Success);
                        draft.set(ContactDraft::default());

                        // Banner dismisses itself unless a new submission
                        // already replaced it.
                        tokio::time::sleep(SUCCESS_RESET).await;
                        if status() == SubmissionStatus::Success {
                            status.set(SubmissionStatus::Idle);
                        }
                    }
                    Err(e) => {
                        tracing::error!(error = %e, "contact submission failed");
                        status.set(SubmissionStatus::Error);
                    }
                }
            });
        }
    };

    let copy_email = move |_: MouseEvent| {
        if let Ok(mut clipboard) = arboard::Clipboard::new() {
            let _ = clipboard.set_text(EMAIL);
        }
        copied.set(true);
        spawn(async move {
            tokio::time::sleep(COPY_FEEDBACK).await;
            copied.set(false);
        });
    };

    rsx! {
        section { id: "contact", class: "section",
            Reveal {
                div { class: "section-heading",
                    h2 { class: "section-title", "Get In Touch" }
                    p { class: "section-lead",
                        "Have a project in mind or just want to say hello? Feel free to \
                         reach out!"
                    }
                }
            }

            div { class: "contact-grid",
                // Info panel
                Reveal { class: "contact-info",
                    div { class: "card contact-card",
                        h3 { class: "contact-card-title gradient-text", "Contact Information" }

                        div { class: "contact-channels",
                            for channel in CONTACT_CHANNELS {
                                div { key: "{channel.label}", class: "contact-channel",
                                    div { class: "contact-channel-icon", {channel_icon(channel.icon)} }
                                    div { class: "contact-channel-text",
                                        h4 { class: "contact-channel-label", "{channel.label}" }
                                        if let Some(href) = channel.href {
                                            button {
                                                r#type: "button",
                                                class: "contact-channel-value contact-channel-link",
                                                onmouseenter: move |_| pointer.write().set_hovering(true),
                                                onmouseleave: move |_| pointer.write().set_hovering(false),
                                                onclick: move |_| {
                                                    if let Err(e) = open::that(href) {
                                                        tracing::warn!(url = href, error = %e, "failed to open channel");
                                                    }
                                                },
                                                "{channel.value}"
                                            }
                                        } else {
                                            p { class: "contact-channel-value", "{channel.value}" }
                                        }
                                    }
                                }
                            }
                        }

                        button {
                            r#type: "button",
                            class: if copied() { "copy-button copied" } else { "copy-button" },
                            onmouseenter: move |_| pointer.write().set_hovering(true),
                            onmouseleave: move |_| pointer.write().set_hovering(false),
                            onclick: copy_email,
                            if copied() { "Copied \u{2713}" } else { "Copy email address" }
                        }

                        div { class: "contact-socials",
                            h4 { class: "contact-socials-title", "Connect on Social Media" }
                            div { class: "contact-social-row",
                                for link in SOCIAL_LINKS {
                                    button {
                                        key: "{link.label}",
                                        r#type: "button",
                                        class: "social-button",
                                        "aria-label": "{link.label}",
                                        onmouseenter: move |_| pointer.write().set_hovering(true),
                                        onmouseleave: move |_| pointer.write().set_hovering(false),
                                        onclick: move |_| {
                                            if let Err(e) = open::that(link.url) {
                                                tracing::warn!(url = link.url, error = %e, "failed to open link");
                                            }
                                        },
                                        "{link.label}"
                                    }
                                }
                            }
                        }
                    }
                }

                // Message form
                Reveal { delay_ms: 100, class: "contact-form-wrap",
                    div { class: "card contact-card",
                        h3 { class: "contact-card-title gradient-text", "Send Me a Message" }

                        if status() == SubmissionStatus::Success {
                            div { class: "form-banner form-banner-success",
                                "Your message has been sent successfully!"
                            }
                        }
                        if status() == SubmissionStatus::Error {
                            div { class: "form-banner form-banner-error",
                                "There was an error sending your message. Please try again."
                            }
                        }

                        form { class: "contact-form", onsubmit: submit,
                            div { class: "form-row",
                                div { class: "form-field",
                                    label { r#for: "name", "Your Name" }
                                    input {
                                        id: "name",
                                        name: "name",
                                        r#type: "text",
                                        required: true,
                                        value: "{draft().name}",
                                        oninput: move |e| draft.write().name = e.value(),
                                    }
                                }
                                div { class: "form-field",
                                    label { r#for: "email", "Your Email" }
                                    input {
                                        id: "email",
                                        name: "email",
                                        r#type: "email",
                                        required: true,
                                        value: "{draft().email}",
                                        oninput: move |e| draft.write().email = e.value(),
                                    }
                                }
                            }

                            div { class: "form-field",
                                label { r#for: "subject", "Subject" }
                                input {
                                    id: "subject",
                                    name: "subject",
                                    r#type: "text",
                                    required: true,
                                    value: "{draft().subject}",
                                    oninput: move |e| draft.write().subject = e.value(),
                                }
                            }

                            div { class: "form-field",
                                label { r#for: "message", "Message" }
                                textarea {
                                    id: "message",
                                    name: "message",
                                    rows: 4,
                                    required: true,
                                    value: "{draft().message}",
                                    oninput: move |e| draft.write().message = e.value(),
                                }
                            }

                            button {
                                r#type: "submit",
                                class: "btn btn-primary",
                                disabled: status().is_loading(),
                                onmouseenter: move |_| pointer.write().set_hovering(true),
                                onmouseleave: move |_| pointer.write().set_hovering(false),
                                if status().is_loading() { "Sending..." } else { "Send Message" }
                                {send_icon()}
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Lucide icon for a contact channel, by name.
fn channel_icon(name: &str) -> Element {
    match name {
        "mail" => rsx! {
            svg {
                xmlns: "http://www.w3.org/2000/svg",
                width: "20",
                height: "20",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                stroke_linecap: "round",
                stroke_linejoin: "round",
                rect { x: "2", y: "4", width: "20", height: "16", rx: "2" }
                path { d: "m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7" }
            }
        },
        _ => rsx! {
            // Lucide map-pin icon
            svg {
                xmlns: "http://www.w3.org/2000/svg",
                width: "20",
                height: "20",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                stroke_linecap: "round",
                stroke_linejoin: "round",
                path { d: "M20 10c0 4.993-5.539 10.193-7.399 11.799a1 1 0 0 1-1.202 0C9.539 20.193 4 14.993 4 10a8 8 0 0 1 16 0" }
                circle { cx: "12", cy: "10", r: "3" }
            }
        },
    }
}

/// Lucide send icon
fn send_icon() -> Element {
    rsx! {
        svg {
            xmlns: "http://www.w3.org/2000/svg",
            width: "16",
            height: "16",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            path { d: "M14.536 21.686a.5.5 0 0 0 .937-.024l6.5-19a.496.496 0 0 0-.635-.635l-19 6.5a.5.5 0 0 0-.024.937l7.93 3.18a2 2 0 0 1 1.112 1.11z" }
            path { d: "m21.854 2.147-10.94 10.939" }
        }
    }
}
