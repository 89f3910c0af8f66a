#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

//! # switchyard
//!
//! Railway-oriented programming for Rust.
//!
//! Every fallible step returns an [`Outcome`]: a value on the success track or
//! a single error on the error track. The combinators chain steps so the first
//! failure runs straight to the end of the line.
//!
//! This library re-exports the switchyard workspace crates for convenience.
//!
//! ```
//! use switchyard::prelude::*;
//!
//! fn parse(raw: &str) -> Outcome<u32, String> {
//!     attempt(|| raw.parse::<u32>(), |e| e.to_string())
//! }
//!
//! let doubled = parse("21").pipe(bind(|n: u32| succeed(n * 2)));
//! assert_eq!(doubled, succeed(42));
//! ```

// Re-export all crates
pub use switchyard_core;

pub use switchyard_core::{
    BridgeError, Fault, Outcome, TaggedOutcome, Unit, attempt, bind, bind_action, bind_producer,
    either, either_unit, fail, succeed, switch, switch_action, switch_producer, try_catch,
    try_catch_action, try_catch_producer,
};

pub mod prelude;
