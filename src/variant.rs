//! A container for a single value of any type.
//!
//! ```
//! use rangekit::variant::Variant;
//!
//! let mut v = Variant::new(42);
//! assert_eq!(v.to_string(), "variant(42)");
//! assert!(v.cast::<String>().is_err());
//!
//! v = Variant::new(String::from("hello"));
//! v.cast_mut::<String>()?.push_str(", world");
//! assert_eq!(v.into_inner::<String>()?, "hello, world");
//! # Ok::<(), rangekit::Error>(())
//! ```

use std::any::{self, Any};
use std::fmt;

use tracing::debug;

use crate::{Error, Result};

/// The type-erased payload of a non-empty [`Variant`].
trait Holder {
    fn type_name(&self) -> &'static str;
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
    fn into_any(self: Box<Self>) -> Box<dyn Any>;
    fn clone_box(&self) -> Box<dyn Holder>;
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

struct Held<T>(T);

impl<T> Holder for Held<T>
where
    T: Any + Clone + fmt::Display,
{
    fn type_name(&self) -> &'static str {
        any::type_name::<T>()
    }

    fn as_any(&self) -> &dyn Any {
        &self.0
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        &mut self.0
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        Box::new(self.0)
    }

    fn clone_box(&self) -> Box<dyn Holder> {
        Box::new(Held(self.0.clone()))
    }

    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Zero or one value of any `'static` type that can be cloned and
/// displayed.
///
/// The held type is checked on every typed access. Cloning a variant clones
/// the held value.
#[derive(Default)]
pub struct Variant {
    content: Option<Box<dyn Holder>>,
}

impl Variant {
    pub fn new<T>(value: T) -> Self
    where
        T: Any + Clone + fmt::Display,
    {
        Variant {
            content: Some(Box::new(Held(value))),
        }
    }

    pub fn empty() -> Self {
        Variant { content: None }
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_none()
    }

    /// The name of the held type, or `None` when empty.
    pub fn type_name(&self) -> Option<&'static str> {
        self.content.as_ref().map(|holder| holder.type_name())
    }

    pub fn is<T: Any>(&self) -> bool {
        match &self.content {
            Some(holder) => holder.as_any().is::<T>(),
            None => false,
        }
    }

    pub fn cast<T: Any>(&self) -> Result<&T> {
        let holder = self.holder::<T>()?;
        let found = holder.type_name();
        holder
            .as_any()
            .downcast_ref::<T>()
            .ok_or_else(|| mismatch::<T>(found))
    }

    pub fn cast_mut<T: Any>(&mut self) -> Result<&mut T> {
        let holder = match self.content.as_mut() {
            Some(holder) => holder,
            None => return Err(empty::<T>()),
        };
        let found = holder.type_name();
        holder
            .as_any_mut()
            .downcast_mut::<T>()
            .ok_or_else(|| mismatch::<T>(found))
    }

    /// The held value as a `T`, without checking.
    ///
    /// # Safety
    ///
    /// The variant must be non-empty and hold a value of type `T`.
    pub unsafe fn cast_unchecked<T: Any>(&self) -> &T {
        match &self.content {
            Some(holder) => &*(holder.as_any() as *const dyn Any as *const T),
            None => std::hint::unreachable_unchecked(),
        }
    }

    /// Consumes the variant and returns the held value.
    pub fn into_inner<T: Any>(self) -> Result<T> {
        let holder = match self.content {
            Some(holder) => holder,
            None => return Err(empty::<T>()),
        };
        let found = holder.type_name();
        holder
            .into_any()
            .downcast::<T>()
            .map(|value| *value)
            .map_err(|_| mismatch::<T>(found))
    }

    /// Moves the content out, leaving this variant empty.
    pub fn take(&mut self) -> Variant {
        Variant {
            content: self.content.take(),
        }
    }

    fn holder<T>(&self) -> Result<&dyn Holder> {
        self.content.as_deref().ok_or_else(empty::<T>)
    }
}

fn empty<T>() -> Error {
    let expected = any::type_name::<T>();
    debug!(expected, "access to an empty variant");
    Error::EmptyVariant { expected }
}

fn mismatch<T>(found: &'static str) -> Error {
    let expected = any::type_name::<T>();
    debug!(expected, found, "variant holds another type");
    Error::TypeMismatch { expected, found }
}

impl Clone for Variant {
    fn clone(&self) -> Self {
        Variant {
            content: self.content.as_ref().map(|holder| holder.clone_box()),
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("variant(")?;
        if let Some(holder) = &self.content {
            holder.fmt(f)?;
        }
        f.write_str(")")
    }
}

impl fmt::Debug for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.content {
            Some(holder) => f
                .debug_struct("Variant")
                .field("type", &holder.type_name())
                .field("value", &format_args!("{}", Shown(&**holder)))
                .finish(),
            None => f.write_str("Variant(empty)"),
        }
    }
}

struct Shown<'a>(&'a dyn Holder);

impl fmt::Display for Shown<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
