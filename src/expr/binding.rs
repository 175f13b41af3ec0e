use tracing::debug;

use crate::expr::Value;
use crate::{Error, Result};

/// A caller-owned variable an expression can read and write through.
pub trait Slot {
    fn load(&self) -> Value;

    /// Replaces the variable's content, failing if `value` cannot be
    /// represented in it.
    fn store(&mut self, value: Value) -> Result<()>;
}

fn mismatch(expected: &'static str, found: &Value) -> Error {
    let found = found.kind();
    debug!(expected, found, "cannot store into slot");
    Error::TypeMismatch { expected, found }
}

impl Slot for i64 {
    fn load(&self) -> Value {
        Value::Int(*self)
    }

    fn store(&mut self, value: Value) -> Result<()> {
        match value {
            Value::Int(i) => {
                *self = i;
                Ok(())
            }
            other => Err(mismatch("int", &other)),
        }
    }
}

impl Slot for f64 {
    fn load(&self) -> Value {
        Value::Float(*self)
    }

    fn store(&mut self, value: Value) -> Result<()> {
        match value.as_float() {
            Some(x) => {
                *self = x;
                Ok(())
            }
            None => Err(mismatch("float", &value)),
        }
    }
}

impl Slot for bool {
    fn load(&self) -> Value {
        Value::Bool(*self)
    }

    fn store(&mut self, value: Value) -> Result<()> {
        match value {
            Value::Bool(b) => {
                *self = b;
                Ok(())
            }
            other => Err(mismatch("bool", &other)),
        }
    }
}

impl Slot for String {
    fn load(&self) -> Value {
        Value::Str(self.clone())
    }

    fn store(&mut self, value: Value) -> Result<()> {
        match value {
            Value::Str(s) => {
                *self = s;
                Ok(())
            }
            other => Err(mismatch("string", &other)),
        }
    }
}

impl Slot for Value {
    fn load(&self) -> Value {
        self.clone()
    }

    fn store(&mut self, value: Value) -> Result<()> {
        *self = value;
        Ok(())
    }
}

/// One argument of a call.
///
/// An owned argument belongs to the call; writes to it are discarded when
/// the call returns. A borrowed argument is read from and written back to
/// the caller's variable.
pub enum Binding<'a> {
    Owned(Value),
    Borrowed(&'a mut dyn Slot),
}

impl Binding<'_> {
    pub fn load(&self) -> Value {
        match self {
            Binding::Owned(value) => value.clone(),
            Binding::Borrowed(slot) => slot.load(),
        }
    }

    pub fn store(&mut self, value: Value) -> Result<()> {
        match self {
            Binding::Owned(owned) => {
                *owned = value;
                Ok(())
            }
            Binding::Borrowed(slot) => slot.store(value),
        }
    }

    /// The argument's value for its last use. An owned value is moved out.
    pub(crate) fn consume(&mut self) -> Value {
        match self {
            Binding::Owned(value) => std::mem::take(value),
            Binding::Borrowed(slot) => slot.load(),
        }
    }
}

impl std::fmt::Debug for Binding<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Binding::Owned(value) => f.debug_tuple("Owned").field(value).finish(),
            Binding::Borrowed(slot) => f.debug_tuple("Borrowed").field(&slot.load()).finish(),
        }
    }
}

macro_rules! impl_owned_binding {
    ($($t:ty)*) => {
        $(
            impl From<$t> for Binding<'_> {
                fn from(value: $t) -> Self {
                    Binding::Owned(Value::from(value))
                }
            }
        )*
    };
}

impl_owned_binding! { () bool i32 i64 f64 String Value }

impl From<&str> for Binding<'_> {
    fn from(value: &str) -> Self {
        Binding::Owned(Value::from(value))
    }
}

macro_rules! impl_borrowed_binding {
    ($($t:ty)*) => {
        $(
            impl<'a> From<&'a mut $t> for Binding<'a> {
                fn from(slot: &'a mut $t) -> Self {
                    Binding::Borrowed(slot)
                }
            }

            impl From<&$t> for Binding<'_> {
                fn from(value: &$t) -> Self {
                    Binding::Owned(value.load())
                }
            }
        )*
    };
}

impl_borrowed_binding! { i64 f64 bool String Value }

/// Conversion of a tuple of arguments into call bindings.
///
/// Implemented for tuples of up to 12 elements whose elements convert into
/// [`Binding`]: plain values, shared references (copied) and exclusive
/// references to [`Slot`]s (written through).
pub trait IntoBindings<'a> {
    fn into_bindings(self) -> Vec<Binding<'a>>;
}

impl<'a> IntoBindings<'a> for Vec<Binding<'a>> {
    fn into_bindings(self) -> Vec<Binding<'a>> {
        self
    }
}
