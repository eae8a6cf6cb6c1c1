//! HTTP middleware: the staff gate, request logging, and CORS.

pub mod cors;
pub mod gate;
pub mod logging;
