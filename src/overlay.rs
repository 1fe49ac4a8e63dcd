use std::rc::Rc;

use log::debug;
use yew::prelude::*;

use crate::content::{ServiceEntry, SERVICES};

pub enum OverlayAction {
    Open(usize),
    Close,
}

/// Which service, if any, is shown in the detail overlay.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OverlayState {
    pub selected: Option<usize>,
}

impl OverlayState {
    pub fn entry(&self) -> Option<&'static ServiceEntry> {
        self.selected.and_then(|i| SERVICES.get(i))
    }

    pub fn is_open(&self) -> bool {
        self.entry().is_some()
    }
}

impl Reducible for OverlayState {
    type Action = OverlayAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            OverlayAction::Open(index) if index < SERVICES.len() => {
                debug!("opening service detail for {}", SERVICES[index].title);
                Rc::new(Self {
                    selected: Some(index),
                })
            }
            OverlayAction::Open(_) => self,
            OverlayAction::Close if self.selected.is_none() => self,
            OverlayAction::Close => {
                debug!("closing service detail");
                Rc::new(Self { selected: None })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reduce(state: OverlayState, action: OverlayAction) -> OverlayState {
        (*Rc::new(state).reduce(action)).clone()
    }

    #[test]
    fn starts_closed() {
        let state = OverlayState::default();
        assert!(!state.is_open());
        assert!(state.entry().is_none());
    }

    #[test]
    fn opening_another_entry_replaces_the_first() {
        let state = reduce(OverlayState::default(), OverlayAction::Open(0));
        let state = reduce(state, OverlayAction::Open(3));
        assert_eq!(state.selected, Some(3));
        assert_eq!(state.entry().map(|e| e.title), Some("Data Backup & Recovery"));
    }

    #[test]
    fn close_is_idempotent() {
        let state = reduce(OverlayState::default(), OverlayAction::Open(1));
        let state = reduce(state, OverlayAction::Close);
        assert_eq!(state, OverlayState::default());
        let state = reduce(state, OverlayAction::Close);
        assert_eq!(state, OverlayState::default());
    }

    #[test]
    fn unknown_entry_is_ignored() {
        let state = reduce(OverlayState::default(), OverlayAction::Open(SERVICES.len()));
        assert!(!state.is_open());
    }

    #[test]
    fn close_without_selection_keeps_same_state() {
        let state = Rc::new(OverlayState::default());
        let next = state.clone().reduce(OverlayAction::Close);
        assert!(Rc::ptr_eq(&state, &next));
    }
}
