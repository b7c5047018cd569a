pub(crate) mod adjustment;
pub(crate) mod config;
pub(crate) mod key;
pub(crate) mod quadrant;
