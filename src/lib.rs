//! Duotile composes two product photographs onto a single square catalog
//! tile: pick a layout (side-by-side, equal overlay, hero overlay), a
//! background fill, and an output size, and get back one finished canvas
//! ready to encode as PNG.
#![forbid(unsafe_code)]

pub mod canvas;
pub mod compose;
pub mod composite;
pub mod encode;
pub mod error;
pub mod layout;
pub mod matting;
pub mod pipeline;
pub mod source;

pub use canvas::{Background, Canvas};
pub use compose::compose;
pub use composite::paste_with_alpha;
pub use error::{DuotileError, DuotileResult};
pub use layout::{HeroAnchor, HeroSlot, LayoutKind, LayoutPlan, LayoutSpec, Placement, plan_layout};
pub use matting::BackgroundRemover;
pub use pipeline::{CombineRequest, Pipeline, Slot};
pub use source::ImageSource;
