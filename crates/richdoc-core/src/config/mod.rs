//! Conversion configuration (`richdoc.toml`)

pub mod consts;
pub mod model;

pub use model::{Config, ImageMode, RenderConfig, SegmentConfig, TableMode};
