//! Natural order comparison of strings, so that `item2` sorts before `item10`.
//!
//! Digit runs compare by numeric value, of any length, and the text between them compares
//! ASCII case-insensitively, either byte by byte or by decoded UTF-8 codepoints.
//!
//! ```
//! use natcmp::{natcmp, natcmp_utf8_lt};
//! use std::cmp::Ordering;
//!
//! assert_eq!(natcmp("item2", "Item10"), Ordering::Less);
//! assert!(natcmp_utf8_lt("été9", "été10"));
//! ```

mod natural;

pub use natural::*;
