//! # clubhub-entity
//!
//! Domain entity models for ClubHub. Every struct in this crate
//! represents a database table row or a domain value object. All entities
//! derive `Debug`, `Clone`, `Serialize`, `Deserialize`, and database
//! entities additionally derive `sqlx::FromRow`.

pub mod account;
pub mod attendance;
pub mod class;
pub mod club;
pub mod member;
pub mod parent;
pub mod portal;
pub mod subscription;
