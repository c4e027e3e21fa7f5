//! Reads configuration values from environment variables at compile time.
//!
//! Values that cannot be parsed, or that are below the given minimum, abort the build with a
//! message naming the variable.

pub use {const_panic, konst};

/// Returns the value of the named environment variable parsed as a `usize` at compile time, or
/// the given default when the variable is not set.
///
/// An optional third argument sets the smallest accepted value.
#[macro_export]
macro_rules! usize_from_env_or {
    ($env_var:literal, $default:expr) => {
        if let Some(str_value) = option_env!($env_var) {
            if let Ok(value) = $crate::env::konst::primitive::parse_usize(str_value) {
                value
            } else {
                $crate::env::const_panic::concat_panic!(
                    "Could not parse environment variable `",
                    $env_var,
                    "=",
                    str_value,
                    "` as a usize",
                );
            }
        } else {
            $default
        }
    };
    ($env_var:literal, $default:expr, $min:expr) => {{
        const MIN: usize = $min;
        const VALUE: usize = $crate::usize_from_env_or!($env_var, $default);
        if VALUE < MIN {
            $crate::env::const_panic::concat_panic!(
                "Environment variable `",
                $env_var,
                "` must be at least ",
                MIN,
                ", got ",
                VALUE,
            );
        }
        VALUE
    }};
}

#[cfg(test)]
mod tests {
    const UNSET: usize = usize_from_env_or!("SENSOR_UTILS_SURELY_UNSET", 42);
    const UNSET_BOUNDED: usize = usize_from_env_or!("SENSOR_UTILS_SURELY_UNSET", 3, 3);

    #[test]
    fn defaults_apply_when_unset() {
        assert_eq!(UNSET, 42);
        assert_eq!(UNSET_BOUNDED, 3);
    }
}
