//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by slice (`board`, `columns`) so the export hint can
//! subscribe to exactly the two inputs it derives from. Derived views live
//! in `export_hint` and are never stored.

pub mod board;
pub mod columns;
pub mod export_hint;
