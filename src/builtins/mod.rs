pub mod core;

#[cfg(feature = "compiled_data")]
mod compiled;

pub use self::core::*;

#[cfg(feature = "compiled_data")]
pub(crate) use compiled::TZ_PROVIDER;
