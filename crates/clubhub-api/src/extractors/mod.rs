//! Typed auth extractors.
//!
//! Handlers never re-derive authentication: they declare the principal
//! class they serve as an extractor argument and receive either a
//! validated principal or a typed failure before their body runs.

pub mod portal;
pub mod staff;

pub use portal::{MemberAuth, ParentAuth};
pub use staff::{StaffAuth, StaffSubject};
