//! Club settings service.

pub mod service;

pub use service::ClubService;
