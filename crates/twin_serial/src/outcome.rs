use core::ops::{BitAnd, BitAndAssign};

/// Result of one composer operation.
///
/// Records whether the operation succeeded and how many diagnostics it
/// appended to the serializer's log. Outcomes combine with `&` and `&=`:
/// success is the conjunction, diagnostic counts add up. Both sides are
/// always evaluated, so no later field is skipped because an earlier one
/// failed.
///
/// Field operations on a write pass always produce [`Outcome::SUCCESS`].
///
/// # Examples
///
/// ```
/// use twin_serial::Outcome;
///
/// let mut total = Outcome::SUCCESS;
/// total &= Outcome::new(false, 1);
/// total &= Outcome::new(true, 0);
///
/// assert!(!total.is_ok());
/// assert_eq!(total.diagnostics(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Outcome {
    ok: bool,
    diagnostics: usize,
}

impl Outcome {
    /// A successful operation that logged nothing.
    pub const SUCCESS: Self = Self::new(true, 0);

    #[inline]
    pub const fn new(ok: bool, diagnostics: usize) -> Self {
        Self { ok, diagnostics }
    }

    #[inline]
    pub const fn is_ok(self) -> bool {
        self.ok
    }

    /// Number of diagnostics appended by the operation.
    #[inline]
    pub const fn diagnostics(self) -> usize {
        self.diagnostics
    }

    /// Logical conjunction of two outcomes.
    #[inline]
    pub const fn and(self, other: Self) -> Self {
        Self {
            ok: self.ok & other.ok,
            diagnostics: self.diagnostics + other.diagnostics,
        }
    }
}

impl Default for Outcome {
    #[inline]
    fn default() -> Self {
        Self::SUCCESS
    }
}

impl BitAnd for Outcome {
    type Output = Self;

    #[inline]
    fn bitand(self, rhs: Self) -> Self {
        self.and(rhs)
    }
}

impl BitAndAssign for Outcome {
    #[inline]
    fn bitand_assign(&mut self, rhs: Self) {
        *self = self.and(rhs);
    }
}
