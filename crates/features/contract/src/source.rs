//! Enumeration of `(symbolic name, value)` pairs declared by a constants class.

use crate::error::ContractError;
use confdrift_domain::binding::{ConstValue, ConstantBinding};
use std::borrow::Cow;
use std::fmt;

/// A constants class whose bindings can be enumerated.
///
/// Usually generated by [`constants_class!`](crate::constants_class); [`BindingTable`] covers
/// ad-hoc tables built at runtime.
pub trait BindingSource: fmt::Debug + Send + Sync {
    /// Name used in diagnostics.
    fn class_name(&self) -> &str;

    /// Every binding the class declares, in declaration order. Deprecated bindings included.
    ///
    /// # Errors
    /// Returns [`ContractError::BindingSource`] when the bindings cannot be produced.
    fn bindings(&self) -> Result<Vec<ConstantBinding>, ContractError>;
}

/// Declares a constants class: a unit struct with associated `pub const` items plus a
/// [`BindingSource`] implementation listing all of them.
///
/// ```rust
/// use confdrift_contract::{BindingSource, constants_class};
///
/// constants_class! {
///     /// Client settings.
///     pub struct ClientConfiguration {
///         pub const CLIENT_PREFIX: &'static str = "client.";
///         pub const CLIENT_RETRIES: &'static str = "client.retries";
///         pub const DEFAULT_CLIENT_RETRIES: i32 = 3;
///         #[deprecated]
///         pub const CLIENT_LEGACY_TIMEOUT: &'static str = "client.legacy.timeout";
///     }
/// }
///
/// assert_eq!(ClientConfiguration::CLIENT_RETRIES, "client.retries");
///
/// let bindings = ClientConfiguration.bindings().unwrap();
/// let keys: Vec<_> = bindings.iter().filter_map(|b| b.key()).collect();
/// assert_eq!(keys, ["client.retries", "client.legacy.timeout"]);
/// ```
#[macro_export]
macro_rules! constants_class {
    (
        $(#[$class_meta:meta])*
        $class_vis:vis struct $class:ident {
            $(
                $(#[$meta:meta])*
                $vis:vis const $name:ident : $ty:ty = $value:expr ;
            )*
        }
    ) => {
        $(#[$class_meta])*
        #[derive(Debug, Clone, Copy, Default)]
        $class_vis struct $class;

        impl $class {
            $(
                $(#[$meta])*
                $vis const $name: $ty = $value;
            )*
        }

        impl $crate::BindingSource for $class {
            fn class_name(&self) -> &str {
                stringify!($class)
            }

            #[allow(deprecated)]
            fn bindings(
                &self,
            ) -> ::std::result::Result<
                ::std::vec::Vec<$crate::domain::binding::ConstantBinding>,
                $crate::ContractError,
            > {
                Ok(::std::vec![
                    $($crate::domain::binding::ConstantBinding::new(
                        stringify!($name),
                        Self::$name,
                    ),)*
                ])
            }
        }
    };
}

/// An in-memory binding source.
///
/// Redeclaring a symbol replaces its value in place.
///
/// ```rust
/// use confdrift_contract::{BindingSource, BindingTable};
///
/// let table = BindingTable::new("Demo")
///     .with("A", "a.enabled")
///     .with("SERVICE_FOO_PORT", 8000);
/// assert_eq!(table.bindings().unwrap().len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BindingTable {
    name: Cow<'static, str>,
    bindings: Vec<ConstantBinding>,
}

impl BindingTable {
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self { name: name.into(), bindings: Vec::new() }
    }

    #[must_use]
    pub fn with(
        mut self,
        symbol: impl Into<Cow<'static, str>>,
        value: impl Into<ConstValue>,
    ) -> Self {
        self.insert(symbol, value);
        self
    }

    pub fn insert(&mut self, symbol: impl Into<Cow<'static, str>>, value: impl Into<ConstValue>) {
        let binding = ConstantBinding::new(symbol, value);
        match self.bindings.iter_mut().find(|existing| existing.name() == binding.name()) {
            Some(existing) => *existing = binding,
            None => self.bindings.push(binding),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl BindingSource for BindingTable {
    fn class_name(&self) -> &str {
        &self.name
    }

    fn bindings(&self) -> Result<Vec<ConstantBinding>, ContractError> {
        Ok(self.bindings.clone())
    }
}
