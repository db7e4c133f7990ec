/// Offset (in CSS pixels) past which the scroll-to-top control becomes visible.
pub const SCROLL_TOP_THRESHOLD: f64 = 400.0;

/// Whether the window has been scrolled far enough to offer a way back up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollState {
    pub is_past_threshold: bool,
}

impl ScrollState {
    /// Folds one scroll sample into the state. Only the latest sample matters.
    ///
    /// Non-finite samples are ignored and leave the previous state in place.
    pub fn reduce(self, offset: f64) -> Self {
        if !offset.is_finite() {
            return self;
        }
        Self {
            is_past_threshold: offset > SCROLL_TOP_THRESHOLD,
        }
    }

    /// Applies a sample read from the window. A failed read leaves the state unchanged.
    pub fn apply_sample<E>(self, sample: Result<f64, E>) -> Self {
        match sample {
            Ok(offset) => self.reduce(offset),
            Err(_) => self,
        }
    }

    pub fn from_samples(samples: impl IntoIterator<Item = f64>) -> Self {
        samples.into_iter().fold(Self::default(), Self::reduce)
    }
}

/// Tracks `window.scrollY` and reports whether it is past [`SCROLL_TOP_THRESHOLD`].
///
/// The passive listener is removed when the calling owner is disposed.
#[cfg(feature = "hydrate")]
pub fn use_scroll_past() -> leptos::prelude::Signal<bool> {
    use leptos::{ev::scroll, prelude::*};
    use leptos_use::{use_event_listener_with_options, use_window, UseEventListenerOptions};

    let (state, set_state) = signal(ScrollState::default());

    let _ = use_event_listener_with_options(
        use_window(),
        scroll,
        move |_| {
            set_state.set(state.get_untracked().apply_sample(window().scroll_y()));
        },
        UseEventListenerOptions::default().passive(true),
    );

    // memo so identical samples don't re-render the control
    Memo::new(move |_| state.get().is_past_threshold).into()
}

/// There is no window to observe while rendering on the server.
#[cfg(not(feature = "hydrate"))]
pub fn use_scroll_past() -> leptos::prelude::Signal<bool> {
    leptos::prelude::Signal::stored(false)
}
