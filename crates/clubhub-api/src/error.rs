//! HTTP error mapping.
//!
//! The `IntoResponse` impl for [`AppError`] lives in `clubhub-core`
//! next to the error type itself (coherence requires it there); this
//! module re-exports the response body shape handlers and the fallback
//! reuse.

pub use clubhub_core::error::ApiErrorResponse;
