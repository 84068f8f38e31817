//! Total orders over dictionary keys.

use std::cmp::Ordering;

/// A three-way comparison over keys of type `K`.
///
/// The order must be total and consistent for the lifetime of a dictionary. Closures of the form
/// `Fn(&K, &K) -> Ordering` are comparators, so a derived order can be injected inline.
///
/// # Examples
///
/// ```
/// use std::cmp::Ordering;
/// use treap_dictionary::comparator::Comparator;
///
/// let by_len = |a: &&str, b: &&str| a.len().cmp(&b.len());
/// assert_eq!(by_len.compare(&"ab", &"c"), Ordering::Greater);
/// ```
pub trait Comparator<K> {
    /// Returns the relative order of `a` and `b`.
    fn compare(&self, a: &K, b: &K) -> Ordering;
}

impl<K, F> Comparator<K> for F
where
    F: Fn(&K, &K) -> Ordering,
{
    fn compare(&self, a: &K, b: &K) -> Ordering {
        self(a, b)
    }
}

/// Built-in numeric key types that `NumericOrder` can compare without an injected comparator.
pub trait Numeric: Copy {
    /// Returns the relative order of two numbers.
    fn numeric_cmp(&self, other: &Self) -> Ordering;
}

macro_rules! impl_numeric_for_integers {
    ($($type:ty),*) => {
        $(
            impl Numeric for $type {
                fn numeric_cmp(&self, other: &Self) -> Ordering {
                    self.cmp(other)
                }
            }
        )*
    };
}

macro_rules! impl_numeric_for_floats {
    ($($type:ty),*) => {
        $(
            impl Numeric for $type {
                // Signed zeros compare equal. NaN sorts after positive infinity and equals itself.
                fn numeric_cmp(&self, other: &Self) -> Ordering {
                    match self.partial_cmp(other) {
                        Some(ordering) => ordering,
                        None => match (self.is_nan(), other.is_nan()) {
                            (true, true) => Ordering::Equal,
                            (true, false) => Ordering::Greater,
                            _ => Ordering::Less,
                        },
                    }
                }
            }
        )*
    };
}

impl_numeric_for_integers!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
impl_numeric_for_floats!(f32, f64);

/// The default comparator of a dictionary. It only orders `Numeric` keys.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct NumericOrder;

impl<K> Comparator<K> for NumericOrder
where
    K: Numeric,
{
    fn compare(&self, a: &K, b: &K) -> Ordering {
        a.numeric_cmp(b)
    }
}

/// A comparator that defers to the key's `Ord` implementation. It is never chosen implicitly and
/// has to be injected like any other comparator.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct NaturalOrder;

impl<K> Comparator<K> for NaturalOrder
where
    K: Ord,
{
    fn compare(&self, a: &K, b: &K) -> Ordering {
        a.cmp(b)
    }
}
