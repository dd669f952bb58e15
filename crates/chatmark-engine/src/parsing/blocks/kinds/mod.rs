//! # Block Kinds
//!
//! Block-level glyph sets, kept as named constants so they can be extended
//! without touching the rules in `rules.rs`.
//!
//! - **`Bullet`**: `GLYPHS = ['-', '•']`
//! - **`Marker`**: pictographs that introduce an emoji header

pub mod bullet;
pub mod marker;

pub use bullet::Bullet;
pub use marker::Marker;
