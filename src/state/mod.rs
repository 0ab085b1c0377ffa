//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`category`, `session`) so components can depend
//! on small focused stores. Neither store knows about the other.

pub mod category;
pub mod session;
