//! Parent portal account entity.

pub mod model;

pub use model::ParentAccount;
