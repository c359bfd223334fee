use std::fmt;

/// Returned by the checked operations when applying the delta would wrap
/// the field past `i64::MAX` or `i64::MIN`.
///
/// The field is left holding `value`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub struct Overflow {
    /// Name of the field the updater was created for.
    pub field: &'static str,

    /// Value observed in the field when the update was refused.
    pub value: i64,

    /// Delta that could not be applied.
    pub delta: i64,
}

impl Overflow {
    pub(crate) fn new(field: &'static str, value: i64, delta: i64) -> Self {
        Self {
            field,
            value,
            delta,
        }
    }
}

impl fmt::Display for Overflow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "adding {} to `{}` (currently {}) overflows i64",
            self.delta, self.field, self.value
        )
    }
}

impl std::error::Error for Overflow {}
