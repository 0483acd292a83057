//! Comparison primitives over ordered literal types.
//!
//! Incomparable pairs (`partial_cmp` returning `None`) satisfy none of the
//! predicates.

use std::cmp::Ordering;

/// `value > than`.
#[inline]
pub fn is_greater_than<T: PartialOrd>(value: &T, than: &T) -> bool {
    matches!(value.partial_cmp(than), Some(Ordering::Greater))
}

/// `value >= than`.
#[inline]
pub fn is_greater_than_or_equal<T: PartialOrd>(value: &T, than: &T) -> bool {
    matches!(
        value.partial_cmp(than),
        Some(Ordering::Greater | Ordering::Equal)
    )
}

/// `value < than`.
#[inline]
pub fn is_less_than<T: PartialOrd>(value: &T, than: &T) -> bool {
    matches!(value.partial_cmp(than), Some(Ordering::Less))
}

/// `value <= than`.
#[inline]
pub fn is_less_than_or_equal<T: PartialOrd>(value: &T, than: &T) -> bool {
    matches!(value.partial_cmp(than), Some(Ordering::Less | Ordering::Equal))
}

/// `value == other` under the type's order.
#[inline]
pub fn is_equal<T: PartialOrd>(value: &T, other: &T) -> bool {
    matches!(value.partial_cmp(other), Some(Ordering::Equal))
}

/// `value > than`, or `value >= than` when `inclusive`.
#[inline]
pub fn is_greater<T: PartialOrd>(value: &T, than: &T, inclusive: bool) -> bool {
    if inclusive {
        is_greater_than_or_equal(value, than)
    } else {
        is_greater_than(value, than)
    }
}

/// `value < than`, or `value <= than` when `inclusive`.
#[inline]
pub fn is_less<T: PartialOrd>(value: &T, than: &T, inclusive: bool) -> bool {
    if inclusive {
        is_less_than_or_equal(value, than)
    } else {
        is_less_than(value, than)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strict_and_inclusive() {
        assert!(is_greater_than(&2, &1));
        assert!(!is_greater_than(&1, &1));
        assert!(is_greater_than_or_equal(&1, &1));
        assert!(is_less_than(&1, &2));
        assert!(!is_less_than(&2, &2));
        assert!(is_less_than_or_equal(&2, &2));
        assert!(is_equal(&"a", &"a"));
    }

    #[test]
    fn test_inclusive_flag() {
        assert!(is_greater(&1, &1, true));
        assert!(!is_greater(&1, &1, false));
        assert!(is_less(&1, &1, true));
        assert!(!is_less(&1, &1, false));
    }

    #[test]
    fn test_incomparable_values_satisfy_nothing() {
        let nan = f64::NAN;
        assert!(!is_greater_than(&nan, &1.0));
        assert!(!is_greater_than_or_equal(&nan, &1.0));
        assert!(!is_less_than(&nan, &1.0));
        assert!(!is_less_than_or_equal(&nan, &1.0));
        assert!(!is_equal(&nan, &nan));
    }
}
