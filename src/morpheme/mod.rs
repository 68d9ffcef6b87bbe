pub mod resolver;
pub mod tag;

pub use resolver::{display_label, resolve};
pub use tag::{MorphemeTag, TagVariant};
