pub(crate) mod blur;
pub(crate) mod canvas;
pub(crate) mod composite;
pub(crate) mod encode;
pub(crate) mod paint;
pub mod path;
