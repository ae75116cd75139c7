pub(crate) mod catalog;
pub(crate) mod context;
pub(crate) mod registry;
pub(crate) mod tuning;
pub(crate) mod values;

mod depth;
mod distort;
mod light;
mod motion;
mod reveal;
