pub(crate) mod camera;
pub(crate) mod config;
pub(crate) mod sets;
pub(crate) mod state;
