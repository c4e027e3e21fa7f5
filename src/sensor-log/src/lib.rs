//! Provides logging facilities.
//!
//! The macros forward to [`defmt`](https://docs.rs/defmt) when the `defmt` feature is enabled,
//! to the [`log`](https://docs.rs/log) facade when the `log` feature is enabled, and do nothing
//! otherwise.
//! Arguments are evaluated in every configuration.

#![cfg_attr(not(test), no_std)]
#![deny(missing_docs)]
#![deny(clippy::pedantic)]

#[cfg(all(feature = "defmt", feature = "log"))]
compile_error!("feature \"defmt\" and feature \"log\" cannot be enabled at the same time");

#[doc(hidden)]
pub mod hidden {
    // Required so the macros can access the backends.
    #[cfg(feature = "defmt")]
    pub use defmt;
    #[cfg(feature = "log")]
    pub use log;
}

#[cfg(feature = "defmt")]
pub mod defmt {
    //! Selected [`defmt`] items.

    pub use defmt::{Debug2Format, Display2Format, Format};
}

// The declarative macros are required because the defmt macros expect defmt to be in scope.
macro_rules! define_log_macro {
    ($dollar:tt, $name:ident, $level:literal) => {
        #[doc = concat!("Logs a message at the ", $level, " level.")]
        #[cfg(feature = "defmt")]
        #[macro_export]
        macro_rules! $name {
            ($dollar($dollar arg:tt)*) => {{
                use $crate::hidden::defmt;
                defmt::$name!($dollar($dollar arg)*);
            }};
        }

        #[doc = concat!("Logs a message at the ", $level, " level.")]
        #[cfg(feature = "log")]
        #[macro_export]
        macro_rules! $name {
            ($dollar($dollar arg:tt)*) => {{
                $crate::hidden::log::$name!($dollar($dollar arg)*);
            }};
        }

        /// No-op log macro.
        #[cfg(not(any(feature = "defmt", feature = "log")))]
        #[macro_export]
        macro_rules! $name {
            ($dollar($dollar arg:tt)*) => {{
                let _ = ($dollar($dollar arg)*);
            }};
        }
    };
}

define_log_macro!($, trace, "trace");
define_log_macro!($, debug, "debug");
define_log_macro!($, info, "info");
define_log_macro!($, warn, "warn");
define_log_macro!($, error, "error");
