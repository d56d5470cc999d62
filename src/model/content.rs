//! Content items: the atomic pieces of media/text a question shows.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Kind of a content item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    Text,
    Image,
    Audio,
    Video,
    Html,
}

impl ContentKind {
    /// Whether this kind has a playback duration of its own (audio/video).
    #[must_use]
    pub const fn is_media(self) -> bool {
        matches!(self, ContentKind::Audio | ContentKind::Video)
    }
}

/// Where a content item is presented.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Placement {
    /// Main screen.
    Screen,
    /// Background layer (typically audio behind screen content).
    Background,
    /// Spoken line read by the showman.
    Replic,
}

/// One piece of content within a "show content" step.
///
/// Items are emitted in document order. An item with `wait_for_finish` set is
/// emitted on its own and the player pauses until the host asks for the next
/// unit; items without the flag may be grouped into a single emission
/// (e.g. background audio together with screen text).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentItem {
    /// Item kind (text, image, audio, video, html).
    pub kind: ContentKind,

    /// Payload: inline text for `Text`/`Replic`, a resource reference
    /// otherwise. The engine does not interpret it.
    pub value: String,

    /// Presentation placement.
    pub placement: Placement,

    /// Pause playback until the host reports this item finished.
    pub wait_for_finish: bool,

    /// Optional explicit display duration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<Duration>,
}

impl ContentItem {
    /// Create a screen item of the given kind.
    pub fn new(kind: ContentKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
            placement: Placement::Screen,
            wait_for_finish: false,
            duration: None,
        }
    }

    /// Screen text item.
    pub fn text(value: impl Into<String>) -> Self {
        Self::new(ContentKind::Text, value)
    }

    /// Spoken-line item.
    pub fn replic(value: impl Into<String>) -> Self {
        let mut item = Self::new(ContentKind::Text, value);
        item.placement = Placement::Replic;
        item
    }

    /// Set the placement.
    #[must_use]
    pub fn with_placement(mut self, placement: Placement) -> Self {
        self.placement = placement;
        self
    }

    /// Set the wait-for-finish flag.
    #[must_use]
    pub fn with_wait(mut self, wait: bool) -> Self {
        self.wait_for_finish = wait;
        self
    }

    /// Set an explicit duration.
    #[must_use]
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }
}
