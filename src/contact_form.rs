//! The contact form never talks to a server. Submitting builds a `mailto:`
//! URI and hands it to the visitor's mail client, then reports success after
//! a short delay whether or not a message was actually sent.

use std::rc::Rc;

use log::info;
use yew::prelude::*;

use crate::document::DocumentController;

pub const SUCCESS_NOTICE: &str =
    "Email client opened. Please send your message from your email application.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactDraft {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Subject => self.subject = value,
            ContactField::Message => self.message = value,
        }
    }

    pub fn is_empty(&self) -> bool {
        self == &ContactDraft::default()
    }

    pub fn body(&self) -> String {
        format!(
            "Name: {}\nEmail: {}\n\nMessage:\n{}",
            self.name, self.email, self.message
        )
    }
}

/// `mailto:` URI for `draft`, with subject and body percent-encoded
/// component-wise.
pub fn compose_mailto(recipient: &str, draft: &ContactDraft) -> String {
    format!(
        "mailto:{}?subject={}&body={}",
        recipient,
        urlencoding::encode(&draft.subject),
        urlencoding::encode(&draft.body())
    )
}

/// Opens the visitor's mail client with `draft` addressed to `recipient`.
pub fn hand_off(doc: &dyn DocumentController, recipient: &str, draft: &ContactDraft) {
    let uri = compose_mailto(recipient, draft);
    info!("opening mail client for contact request from {}", draft.email);
    doc.open_url(&uri);
}

pub enum ComposerAction {
    Edit(ContactField, String),
    BeginSubmit,
    Complete,
    DismissNotice,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ComposerState {
    pub draft: ContactDraft,
    pub submitting: bool,
    pub notice: Option<&'static str>,
    /// Number of success notices raised so far.
    pub notices_shown: u32,
}

impl Reducible for ComposerState {
    type Action = ComposerAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ComposerAction::Edit(field, value) => next.draft.set(field, value),
            ComposerAction::BeginSubmit => {
                if self.submitting {
                    return self;
                }
                next.submitting = true;
            }
            // A settle timer that outlived its submission has nothing to finish.
            ComposerAction::Complete if !self.submitting => return self,
            ComposerAction::Complete => {
                info!("contact form handed off, resetting draft");
                next.submitting = false;
                next.draft = ContactDraft::default();
                next.notice = Some(SUCCESS_NOTICE);
                next.notices_shown += 1;
            }
            ComposerAction::DismissNotice => {
                if self.notice.is_none() {
                    return self;
                }
                next.notice = None;
            }
        }
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::testing::RecordingDocument;

    fn sample() -> ContactDraft {
        ContactDraft {
            name: "Ann".to_string(),
            email: "a@x.com".to_string(),
            subject: "Hi".to_string(),
            message: "Hello".to_string(),
        }
    }

    fn apply(state: Rc<ComposerState>, action: ComposerAction) -> Rc<ComposerState> {
        state.reduce(action)
    }

    #[test]
    fn mailto_encodes_subject_and_body() {
        let uri = compose_mailto("info@neptech.com", &sample());
        assert!(uri.starts_with("mailto:info@neptech.com?"));
        assert!(uri.contains("subject=Hi&"));
        assert!(uri.ends_with(
            "body=Name%3A%20Ann%0AEmail%3A%20a%40x.com%0A%0AMessage%3A%0AHello"
        ));
    }

    #[test]
    fn mailto_escapes_query_delimiters() {
        let mut draft = sample();
        draft.subject = "Q&A = fun?".to_string();
        let uri = compose_mailto("info@neptech.com", &draft);
        assert!(uri.contains("subject=Q%26A%20%3D%20fun%3F&body="));
    }

    #[test]
    fn hand_off_navigates_to_mailto() {
        let doc = RecordingDocument::default();
        hand_off(&doc, "info@neptech.com", &sample());
        let opened = doc.opened.borrow();
        assert_eq!(opened.len(), 1);
        assert!(opened[0].starts_with("mailto:info@neptech.com?subject=Hi&body=Name%3A%20Ann"));
    }

    #[test]
    fn edits_touch_only_their_field() {
        let state = Rc::new(ComposerState::default());
        let state = apply(state, ComposerAction::Edit(ContactField::Subject, "Hi".into()));
        assert_eq!(state.draft.get(ContactField::Subject), "Hi");
        assert_eq!(state.draft.get(ContactField::Name), "");
    }

    #[test]
    fn completing_resets_draft_and_notifies_once() {
        let mut state = Rc::new(ComposerState::default());
        for (field, value) in [
            (ContactField::Name, "Ann"),
            (ContactField::Email, "a@x.com"),
            (ContactField::Subject, "Hi"),
            (ContactField::Message, "Hello"),
        ] {
            state = apply(state, ComposerAction::Edit(field, value.to_string()));
        }
        assert_eq!(state.draft, sample());

        let state = apply(state, ComposerAction::BeginSubmit);
        assert!(state.submitting);

        let state = apply(state, ComposerAction::Complete);
        assert!(!state.submitting);
        assert!(state.draft.is_empty());
        assert_eq!(state.notice, Some(SUCCESS_NOTICE));
        assert_eq!(state.notices_shown, 1);

        // A second completion has no submission to finish.
        let state = apply(state, ComposerAction::Complete);
        assert_eq!(state.notices_shown, 1);
    }

    #[test]
    fn complete_without_submission_is_ignored() {
        let state = Rc::new(ComposerState::default());
        let state = apply(state, ComposerAction::Edit(ContactField::Name, "Ann".into()));
        let state = apply(state, ComposerAction::Complete);
        assert_eq!(state.draft.name, "Ann");
        assert_eq!(state.notices_shown, 0);
    }

    #[test]
    fn dismissing_clears_notice() {
        let state = Rc::new(ComposerState::default());
        let state = apply(state, ComposerAction::BeginSubmit);
        let state = apply(state, ComposerAction::Complete);
        let state = apply(state, ComposerAction::DismissNotice);
        assert_eq!(state.notice, None);
        assert_eq!(state.notices_shown, 1);
    }
}
