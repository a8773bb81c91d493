pub(crate) mod primitives;
pub(crate) mod products;
pub(crate) mod registry;
pub(crate) mod resolve;
