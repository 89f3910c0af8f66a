//! Prelude module - common imports for switchyard
//!
//! Import this module to get all common types, combinators and traits:
//! ```rust
//! use switchyard::prelude::*;
//! ```

// Re-export functional utilities
pub use tap::{Pipe, Tap};

// Re-export the outcome type and its error values
pub use switchyard_core::{BridgeError, Fault, Outcome, TaggedOutcome, Unit};

// Re-export combinators
pub use switchyard_core::{
    attempt, bind, bind_action, bind_producer, either, either_unit, fail, succeed, switch,
    switch_action, switch_producer, try_catch, try_catch_action, try_catch_producer,
};
