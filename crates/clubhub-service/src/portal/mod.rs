//! Portal services: session lookups, authentication, and profiles.

pub mod auth;
pub mod lookup;
pub mod profile;

pub use auth::{IssuedSession, PortalAuthService};
pub use lookup::{MemberLookup, ParentLookup};
pub use profile::{PortalProfileService, ProfileUpdate};
