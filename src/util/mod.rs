//! Browser-facing helpers behind small traits.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate storage, DOM, and navigation concerns from the
//! session flow so it can run against in-memory fakes in tests.

pub mod dom;
pub mod nav;
pub mod render;
pub mod storage;
