use thiserror::Error;

use crate::group::GroupId;
use crate::primitive::ItemId;

/// Errors raised by the drawing core.
///
/// Stale references are expected during normal editing (an item deleted by
/// undo and then hit-tested again) and are swallowed by the callers that
/// know "nothing to do" is the right answer.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PaintError {
    /// The primitive no longer exists on the surface
    #[error("item {0} no longer exists")]
    StaleItem(ItemId),

    /// The group has already been removed from the registry
    #[error("group {0} no longer exists")]
    StaleGroup(GroupId),

    /// A color channel text field did not hold an integer
    #[error("invalid {channel} value {text:?}: not a number")]
    InvalidChannelText { channel: char, text: String },

    /// A color channel was outside 0..=255
    #[error("{channel} value {value} is outside 0..=255")]
    ChannelOutOfRange { channel: char, value: i64 },

    #[error("invalid hex color {0:?}")]
    InvalidHexColor(String),

    /// A resize would collapse the shape to a non-positive extent
    #[error("resize to {width}x{height} rejected")]
    DegenerateResize { width: f32, height: f32 },

    #[error("primitive has no coordinates")]
    EmptyGeometry,

    #[error("invalid editor config: {0}")]
    InvalidConfig(String),
}

impl PaintError {
    /// True for errors that only mean "the thing you pointed at is gone".
    pub fn is_stale(&self) -> bool {
        matches!(self, Self::StaleItem(_) | Self::StaleGroup(_))
    }
}

pub type PaintResult<T> = Result<T, PaintError>;
