pub(crate) mod letter;
pub(crate) mod location;
pub(crate) mod motion;
pub(crate) mod orientation;
pub(crate) mod pictograph;
