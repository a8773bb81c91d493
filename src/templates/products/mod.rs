//! Per-product silhouettes, grouped by product family.

pub(crate) mod accessories;
pub(crate) mod apparel;
pub(crate) mod home;
pub(crate) mod paper;
