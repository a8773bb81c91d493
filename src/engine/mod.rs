pub(crate) mod compositor;
pub(crate) mod config;
pub(crate) mod lighting;
pub(crate) mod mockup;
pub(crate) mod request;

pub use request::{DesignPlacement, MockupStyle};
