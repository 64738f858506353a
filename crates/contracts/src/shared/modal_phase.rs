//! Open/close lifecycle of a modal with enter and leave transitions.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalPhase {
    #[default]
    Closed,
    Opening,
    Open,
    Closing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalEvent {
    Open,
    TransitionEnd,
    Close,
}

impl ModalPhase {
    /// Next phase; combinations not listed leave the phase unchanged
    pub fn next(self, event: ModalEvent) -> ModalPhase {
        match (self, event) {
            (ModalPhase::Closed, ModalEvent::Open) => ModalPhase::Opening,
            (ModalPhase::Opening, ModalEvent::TransitionEnd) => ModalPhase::Open,
            (ModalPhase::Closing, ModalEvent::TransitionEnd) => ModalPhase::Closed,
            (ModalPhase::Opening | ModalPhase::Open, ModalEvent::Close) => ModalPhase::Closing,
            (phase, _) => phase,
        }
    }

    /// Whether the modal is in the DOM at all
    pub fn is_mounted(self) -> bool {
        self != ModalPhase::Closed
    }

    /// Whether the modal is fully shown
    pub fn is_visible(self) -> bool {
        self == ModalPhase::Open
    }

    /// A transition is running and a `TransitionEnd` is expected
    pub fn is_transitioning(self) -> bool {
        matches!(self, ModalPhase::Opening | ModalPhase::Closing)
    }

    /// CSS modifier applied to the overlay
    pub fn css_class(self) -> &'static str {
        match self {
            ModalPhase::Closed => "modal--closed",
            ModalPhase::Opening => "modal--opening",
            ModalPhase::Open => "modal--open",
            ModalPhase::Closing => "modal--closing",
        }
    }
}
