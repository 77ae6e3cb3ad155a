//! Press handling
//!
//! Segments carry a [`PressAction`]; a rendering surface hands it to a
//! [`PressHandler`] when the user presses the segment. Handlers are
//! fire-and-forget: failures are logged, never returned to the surface.

mod notifier;
mod opener;

pub use notifier::{AlertNotifier, LogNotifier, Notifier, NotifierKind};
pub use opener::{DryRunOpener, LinkOpener, PressError, SystemLinkOpener};

use crate::domain::segment::PressAction;

/// Receives press events from the rendering surface
pub trait PressHandler: Send + Sync {
    /// Handle one press
    fn on_press(&self, action: &PressAction);
}

impl<F> PressHandler for F
where
    F: Fn(&PressAction) + Send + Sync,
{
    fn on_press(&self, action: &PressAction) {
        self(action)
    }
}

/// Human-readable message for a hashtag, mention or prop press
///
/// Links have no message; they are opened instead.
pub fn press_message(action: &PressAction) -> Option<String> {
    match action {
        PressAction::OpenLink { .. } => None,
        PressAction::Hashtag { text } => Some(format!("Hashtag: \"{text}\"")),
        PressAction::Mention { text, .. } => Some(format!("Mention: \"{text}\"")),
        PressAction::Prop { text, .. } => Some(format!("Prop: \"{text}\"")),
    }
}

/// Default behaviour: notify for hashtags, mentions and props; open links
/// after checking that they can be opened
pub struct DefaultPressHandler {
    notifier: Box<dyn Notifier>,
    opener: Box<dyn LinkOpener>,
}

impl DefaultPressHandler {
    /// Handler with an explicit notifier and opener
    pub fn new(notifier: Box<dyn Notifier>, opener: Box<dyn LinkOpener>) -> Self {
        Self { notifier, opener }
    }

    /// Handler using the notifier selected by `kind` and the system opener
    pub fn with_notifier_kind(kind: NotifierKind) -> Self {
        Self::new(kind.build(), Box::new(SystemLinkOpener))
    }
}

impl Default for DefaultPressHandler {
    fn default() -> Self {
        Self::with_notifier_kind(NotifierKind::default())
    }
}

impl std::fmt::Debug for DefaultPressHandler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DefaultPressHandler").finish_non_exhaustive()
    }
}

impl PressHandler for DefaultPressHandler {
    fn on_press(&self, action: &PressAction) {
        if let PressAction::OpenLink { url } = action {
            if !self.opener.can_open(url) {
                log::debug!("cannot open {url:?}");
                return;
            }
            if let Err(e) = self.opener.open(url) {
                log::warn!("failed to open {url:?}: {e}");
            }
            return;
        }

        if let Some(message) = press_message(action) {
            self.notifier.notify(&message);
        }
    }
}
