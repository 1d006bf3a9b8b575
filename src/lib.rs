//! SummaX (workspace facade crate).
//!
//! Exposes `summax::{core,input,term,types}` while the implementation lives in
//! dedicated crates under `crates/`.

pub use summax_core as core;
pub use summax_input as input;
pub use summax_term as term;
pub use summax_types as types;
