#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

//! # switchyard-core
//!
//! Railway-oriented programming primitives.
//!
//! This crate provides:
//! - [`Outcome`], a value that is either on the success track or the error track
//! - [`Fault`], the error value produced when a panic is caught
//! - Combinators to build, eliminate and chain outcomes: [`succeed`], [`fail`],
//!   [`either`], [`bind`], [`switch`], [`try_catch`] and their variants
//! - Lossless conversions to and from `Result` and [`TaggedOutcome`]
//!
//! ```
//! use switchyard_core::{bind, fail, succeed, try_catch_producer, Fault};
//!
//! let mut increment = bind(|x: i32| succeed::<_, String>(x + 1));
//! assert_eq!(increment(succeed(41)), succeed(42));
//! assert_eq!(increment(fail("broken".to_string())), fail("broken".to_string()));
//!
//! let mut explode = try_catch_producer(
//!     || -> i32 { std::panic::panic_any("boom") },
//!     |fault: Fault| format!("wrapped: {fault}"),
//! );
//! assert_eq!(explode(), fail("wrapped: boom".to_string()));
//! ```

pub mod bind;
pub mod bridge;
pub mod either;
pub mod error;
pub mod fault;
pub mod outcome;
pub mod switch;
pub mod tagged;
pub mod try_catch;
pub mod unit;

// Re-export commonly used items
pub use bind::{bind, bind_action, bind_producer};
pub use either::{either, either_unit};
pub use error::BridgeError;
pub use fault::Fault;
pub use outcome::{Outcome, fail, succeed};
pub use switch::{switch, switch_action, switch_producer};
pub use tagged::TaggedOutcome;
pub use try_catch::{attempt, try_catch, try_catch_action, try_catch_producer};
pub use unit::Unit;
