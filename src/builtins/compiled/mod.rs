//! This module implements native Rust wrappers backed by compiled time zone
//! data.

mod date;

use std::sync::{LazyLock, Mutex};

use calendar_date_provider::compiled::CompiledTzdbProvider;

pub static TZ_PROVIDER: LazyLock<Mutex<CompiledTzdbProvider>> =
    LazyLock::new(|| Mutex::new(CompiledTzdbProvider::default()));
