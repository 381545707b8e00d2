//! fxquote FX Core
//!
//! Fixed-table currency conversion: rate lookup, amount parsing and
//! thousands-separator formatting.
//!
//! # Example
//!
//! ```rust
//! use fxquote_common::Currency;
//! use fxquote_fx::{convert, parse_amount, RateTable};
//!
//! let table = RateTable::reference();
//! let amount = parse_amount("$1,525").unwrap();
//! let conversion = convert(&table, Currency::usd(), Currency::twd(), amount).unwrap();
//!
//! assert_eq!(conversion.display_amount(), "$46,427.10");
//! ```

pub mod amount;
pub mod conversion;
pub mod error;
pub mod format;
pub mod rates;

pub use amount::{parse_amount, Amount};
pub use conversion::{convert, Conversion};
pub use error::{FxError, FxResult};
pub use format::{add_commas, format_amount};
pub use rates::{RateTable, RateTableBuilder};
