//! Numspeak — spoken number conversion.
//!
//! Renders a non-negative integer below one quadrillion as English words
//! using the short scale (thousand, million, billion, trillion), without an
//! "and" connector:
//!
//! ```
//! assert_eq!(numspeak_spoken::convert(105).unwrap(), "one hundred five");
//! ```

pub mod converter;
pub mod error;
pub mod tables;

pub use converter::{convert, convert_value};
pub use error::{ConversionError, ErrorKind};
pub use tables::{MAGNITUDES, Magnitude, word_for};
