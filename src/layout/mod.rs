pub(crate) mod clamp;
pub(crate) mod position;
