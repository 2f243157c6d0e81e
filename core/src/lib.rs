pub mod clip;
pub mod geometry;
pub mod media;
pub mod reveal;
pub mod site;
pub mod sizing;

pub use clip::ClipPolygon;
pub use geometry::{clamp_axis, clamp_center, Point, Size};
pub use media::{Media, MediaKind};
pub use reveal::{DragState, RevealAction, RevealState};
pub use site::{SiteConfig, SiteConfigError};
pub use sizing::SizePolicy;
