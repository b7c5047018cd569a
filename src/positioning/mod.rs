pub(crate) mod anchors;
pub(crate) mod dash;
pub(crate) mod engine;
pub(crate) mod location;
pub(crate) mod mirror;
pub(crate) mod prop;
pub(crate) mod rotation;
