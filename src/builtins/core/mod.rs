//! The core implementations of `Date` and `Instant`.

mod date;
mod instant;

#[doc(inline)]
pub use date::{count_days, max, min, Date, DateSeries};
#[doc(inline)]
pub use instant::Instant;
