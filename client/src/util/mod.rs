//! Shared client utilities.
//!
//! SYSTEM CONTEXT
//! ==============
//! Browser-facing glue (localStorage, theme, pointer mapping) is gated on the
//! `csr` feature and degrades to no-ops elsewhere so the pure logic stays
//! testable on the host.

pub mod canvas_input;
pub mod dark_mode;
pub mod feedback;
pub mod score_storage;
pub mod storage;
