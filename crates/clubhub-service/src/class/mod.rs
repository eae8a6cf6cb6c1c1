//! Class management service.

pub mod service;

pub use service::ClassService;
