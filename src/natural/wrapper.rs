use super::{natcmp, natcmp_utf8};
use std::cmp::Ordering;
use std::fmt;

/// A string that compares and sorts in the ASCII natural order.
///
/// Equality follows the comparison too, so `Natural("File1") == Natural("file01")` is false but
/// `Natural("File1") == Natural("file1")` is true. Useful with `sort_by_key`, `max`, and ordered
/// collections such as `BTreeMap`.
#[derive(Debug, Copy, Clone, Default)]
pub struct Natural<T>(pub T);

/// A string that compares and sorts in the UTF-8 natural order.
#[derive(Debug, Copy, Clone, Default)]
pub struct NaturalUtf8<T>(pub T);

macro_rules! impl_natural_ord {
    ($t:ident, $cmp:ident) => {
        impl<T: AsRef<[u8]>> $t<T> {
            /// Unwrap the inner string.
            pub fn into_inner(self) -> T {
                self.0
            }
        }

        impl<T> From<T> for $t<T> {
            fn from(value: T) -> Self {
                Self(value)
            }
        }

        impl<T: AsRef<[u8]>> Ord for $t<T> {
            fn cmp(&self, other: &Self) -> Ordering {
                $cmp(&self.0, &other.0)
            }
        }

        impl<T: AsRef<[u8]>> PartialOrd for $t<T> {
            fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
                Some(self.cmp(other))
            }
        }

        impl<T: AsRef<[u8]>> PartialEq for $t<T> {
            fn eq(&self, other: &Self) -> bool {
                self.cmp(other).is_eq()
            }
        }

        impl<T: AsRef<[u8]>> Eq for $t<T> {}

        impl<T: fmt::Display> fmt::Display for $t<T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(&self.0, f)
            }
        }
    };
}

impl_natural_ord!(Natural, natcmp);
impl_natural_ord!(NaturalUtf8, natcmp_utf8);
