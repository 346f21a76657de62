//! Runtime module - the host that drives the panel
//!
//! - `host` - owns the model and the last render; dispatches messages,
//!   re-renders synchronously, and fires mount/unmount hooks

pub mod host;

pub use host::Host;
