//! Shared building blocks used by the feature slices and overlays.

pub mod icons;
pub mod link;
pub mod text;

pub use icons::Icon;
pub use link::{LinkComponent, PlainLink, TargetHintLink};
pub use text::truncate_with_ellipsis;
