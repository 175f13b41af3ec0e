//! Computed fields backed by a getter and an optional setter.
//!
//! ```
//! use std::cell::Cell;
//! use rangekit::property::Property;
//!
//! let celsius = Cell::new(20.0);
//! let fahrenheit = Property::new(
//!     || celsius.get() * 9.0 / 5.0 + 32.0,
//!     |f: f64| celsius.set((f - 32.0) * 5.0 / 9.0),
//! );
//! assert_eq!(fahrenheit.get(), 68.0);
//! fahrenheit.set(212.0)?;
//! assert_eq!(celsius.get(), 100.0);
//! # Ok::<(), rangekit::Error>(())
//! ```

use std::fmt;

use tracing::debug;

use crate::{Error, Result};

pub struct Property<'a, T> {
    getter: Box<dyn Fn() -> T + 'a>,
    setter: Option<Box<dyn Fn(T) + 'a>>,
}

impl<'a, T> Property<'a, T> {
    pub fn new(getter: impl Fn() -> T + 'a, setter: impl Fn(T) + 'a) -> Self {
        Property {
            getter: Box::new(getter),
            setter: Some(Box::new(setter)),
        }
    }

    /// A property whose [`set`](Property::set) always fails.
    pub fn read_only(getter: impl Fn() -> T + 'a) -> Self {
        Property {
            getter: Box::new(getter),
            setter: None,
        }
    }

    pub fn is_read_only(&self) -> bool {
        self.setter.is_none()
    }

    pub fn get(&self) -> T {
        (self.getter)()
    }

    pub fn set(&self, value: T) -> Result<()> {
        match &self.setter {
            Some(setter) => {
                setter(value);
                Ok(())
            }
            None => {
                debug!("write to a read-only property");
                Err(Error::ReadOnly)
            }
        }
    }
}

impl<T: fmt::Display> fmt::Display for Property<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.get().fmt(f)
    }
}

impl<T> fmt::Debug for Property<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Property")
            .field("read_only", &self.is_read_only())
            .finish_non_exhaustive()
    }
}
