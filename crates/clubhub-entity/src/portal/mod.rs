//! Portal projection types.

pub mod model;

pub use model::{
    AttendanceEntry, MemberDetail, MemberPrincipal, ParentPrincipal, SubscriptionSnapshot,
};
