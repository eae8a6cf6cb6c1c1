//! # clubhub-api
//!
//! The Axum HTTP layer of ClubHub: application state, the router, the
//! staff authorization gate, typed auth extractors, DTOs, and handlers.
//!
//! Authorization is two-layered. The gate middleware classifies every
//! inbound path and enforces staff authentication on staff surfaces
//! before any handler body runs. Portal surfaces pass the gate
//! unchecked; their handlers demand a validated portal principal via the
//! [`extractors`] instead, so no handler ever re-derives auth ad hoc.

pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;
