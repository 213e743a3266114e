//! Runtime type test for values handed to a validator.
//!
//! Validators accept anything that implements [`Candidate`]. The only
//! question a candidate answers is whether it is a string at runtime; every
//! other shape (numbers, booleans, null, objects, closures) is a non-string
//! and fails validation before any length or content check runs.

use std::any::Any;
use std::borrow::Cow;
use std::rc::Rc;
use std::sync::Arc;

use serde_json::{Map, Value};

use crate::{ApiKey, BaseId, TableId, TableName, ViewId};

/// A value of arbitrary runtime type that may be validated.
pub trait Candidate {
    /// Returns the string contents if this value is a string, `None` otherwise.
    fn as_text(&self) -> Option<&str>;
}

impl Candidate for str {
    fn as_text(&self) -> Option<&str> {
        Some(self)
    }
}

impl Candidate for String {
    fn as_text(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

impl Candidate for Cow<'_, str> {
    fn as_text(&self) -> Option<&str> {
        Some(&**self)
    }
}

impl Candidate for Value {
    fn as_text(&self) -> Option<&str> {
        self.as_str()
    }
}

impl Candidate for Map<String, Value> {
    fn as_text(&self) -> Option<&str> {
        None
    }
}

/// `None` plays the part of null/undefined.
impl<T: Candidate> Candidate for Option<T> {
    fn as_text(&self) -> Option<&str> {
        self.as_ref().and_then(Candidate::as_text)
    }
}

impl<T: Candidate + ?Sized> Candidate for &T {
    fn as_text(&self) -> Option<&str> {
        (**self).as_text()
    }
}

impl<T: Candidate + ?Sized> Candidate for &mut T {
    fn as_text(&self) -> Option<&str> {
        (**self).as_text()
    }
}

impl<T: Candidate + ?Sized> Candidate for Box<T> {
    fn as_text(&self) -> Option<&str> {
        (**self).as_text()
    }
}

impl<T: Candidate + ?Sized> Candidate for Rc<T> {
    fn as_text(&self) -> Option<&str> {
        (**self).as_text()
    }
}

impl<T: Candidate + ?Sized> Candidate for Arc<T> {
    fn as_text(&self) -> Option<&str> {
        (**self).as_text()
    }
}

impl<T> Candidate for Vec<T> {
    fn as_text(&self) -> Option<&str> {
        None
    }
}

macro_rules! non_text_candidate {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Candidate for $ty {
                fn as_text(&self) -> Option<&str> {
                    None
                }
            }
        )*
    };
}

non_text_candidate!(
    (),
    bool,
    char,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    f32,
    f64,
);

/// Tries each listed type in turn and forwards to its own [`Candidate`] impl.
macro_rules! downcast_text {
    ($value:expr, $($ty:ty),* $(,)?) => {
        $(
            if let Some(inner) = $value.downcast_ref::<$ty>() {
                return inner.as_text();
            }
        )*
    };
}

/// Downcasts a type-erased value to one of the known string representations.
fn any_as_text(value: &dyn Any) -> Option<&str> {
    downcast_text!(
        value,
        String,
        &'static str,
        Cow<'static, str>,
        Box<str>,
        Rc<str>,
        Arc<str>,
        Value,
        Option<String>,
        Option<&'static str>,
        Option<Value>,
        ApiKey,
        BaseId,
        TableId,
        ViewId,
        TableName,
    );
    None
}

impl Candidate for dyn Any {
    fn as_text(&self) -> Option<&str> {
        any_as_text(self)
    }
}

impl Candidate for dyn Any + Send {
    fn as_text(&self) -> Option<&str> {
        any_as_text(self)
    }
}

impl Candidate for dyn Any + Send + Sync {
    fn as_text(&self) -> Option<&str> {
        any_as_text(self)
    }
}
