//! The opaque error value produced when a panic is caught.
//!
//! A [`Fault`] keeps the panic payload exactly as it was raised. Nothing is
//! stringified or re-wrapped, so the original value can be recovered with
//! [`Fault::downcast`] or re-raised with [`Fault::resume`].

use std::any::Any;
use std::error::Error;
use std::fmt;
use std::panic;

/// A caught abrupt failure.
///
/// Built by the `try_catch` family from the payload handed back by
/// [`std::panic::catch_unwind`]. A payload that is itself a `Fault` is
/// flattened, so faults never nest.
pub struct Fault {
    payload: Box<dyn Any + Send + 'static>,
}

fn describe(payload: &(dyn Any + Send)) -> &str {
    message_of(payload).unwrap_or("panic with a non-string payload")
}

fn message_of(payload: &(dyn Any + Send)) -> Option<&str> {
    if let Some(message) = payload.downcast_ref::<&'static str>() {
        return Some(*message);
    }
    payload.downcast_ref::<String>().map(String::as_str)
}

impl Fault {
    /// Wrap an arbitrary value as a fault.
    pub fn new<P: Any + Send>(payload: P) -> Self {
        Self::from_panic(Box::new(payload))
    }

    /// Wrap a payload returned by [`std::panic::catch_unwind`].
    #[must_use]
    pub fn from_panic(payload: Box<dyn Any + Send + 'static>) -> Self {
        match payload.downcast::<Self>() {
            Ok(fault) => *fault,
            Err(payload) => Self { payload },
        }
    }

    /// The panic message, when the payload is a `&str` or `String`.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        message_of(self.payload.as_ref())
    }

    /// Whether the payload is of type `X`.
    #[must_use]
    pub fn is<X: Any>(&self) -> bool {
        self.payload.is::<X>()
    }

    /// Borrow the payload as `X`.
    #[must_use]
    pub fn downcast_ref<X: Any>(&self) -> Option<&X> {
        self.payload.downcast_ref::<X>()
    }

    /// Recover the payload as `X`.
    ///
    /// # Errors
    ///
    /// Returns the fault unchanged when the payload is not an `X`.
    pub fn downcast<X: Any>(self) -> Result<X, Self> {
        self.payload
            .downcast::<X>()
            .map(|boxed| *boxed)
            .map_err(|payload| Self { payload })
    }

    /// Give up the payload.
    #[must_use]
    pub fn into_payload(self) -> Box<dyn Any + Send + 'static> {
        self.payload
    }

    /// Re-raise the original panic payload on the current thread.
    ///
    /// Does not invoke the panic hook.
    pub fn resume(self) -> ! {
        panic::resume_unwind(self.payload)
    }
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(describe(self.payload.as_ref()))
    }
}

impl Error for Fault {}

impl fmt::Debug for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Fault")
            .field("message", &self.message())
            .finish_non_exhaustive()
    }
}

impl From<String> for Fault {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

impl From<&'static str> for Fault {
    fn from(message: &'static str) -> Self {
        Self::new(message)
    }
}
