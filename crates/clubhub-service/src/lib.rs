//! # clubhub-service
//!
//! Business logic services for ClubHub. Services receive an
//! already-authenticated identity (a verified staff subject id or a
//! validated portal principal) and enforce tenant scoping before
//! touching the store.

pub mod class;
pub mod club;
pub mod dashboard;
pub mod portal;
pub mod tenant;
