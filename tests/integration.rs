//! Integration tests driving the full router.
//!
//! These exercise the gate, the extractors, and the error mapping
//! end-to-end. The database pool is lazy, so every scenario here stays
//! on code paths that reject or classify requests before touching the
//! store.

mod integration {
    mod gate_test;
    mod helpers;
    mod portal_test;
}
