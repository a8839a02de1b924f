//! Top-level facade crate for pixapi.
//!
//! Re-exports core types and the gateway library so users can depend on a single crate.

pub mod core {
    pub use pixapi_core::*;
}

pub mod gateway {
    pub use pixapi_gateway::*;
}
