//! Calendar month endpoints for the morph cross-fade.

use std::fmt;

/// A calendar month, 1 (January) through 12 (December).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Month(u8);

impl Month {
    /// January, the calendar origin.
    pub const JANUARY: Self = Self(1);

    /// Construct from a 1-based month number. Returns `None` outside
    /// 1..=12.
    #[must_use]
    pub fn new(number: u8) -> Option<Self> {
        (1..=12).contains(&number).then_some(Self(number))
    }

    /// 1-based month number.
    #[must_use]
    pub fn number(self) -> u8 {
        self.0
    }

    /// Cyclic successor: December wraps to January.
    #[must_use]
    pub fn next(self) -> Self {
        Self(self.0 % 12 + 1)
    }

    /// Cyclic predecessor: January wraps to December.
    #[must_use]
    pub fn prev(self) -> Self {
        Self(if self.0 == 1 { 12 } else { self.0 - 1 })
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The two adjacent months currently being cross-faded.
///
/// Invariant: `b` is always `a`'s cyclic successor. The pair only
/// changes at cycle-completion boundaries or through explicit selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthCycle {
    a: Month,
    b: Month,
}

impl MonthCycle {
    /// Cycle starting at `a`, fading toward its successor.
    #[must_use]
    pub fn new(a: Month) -> Self {
        Self { a, b: a.next() }
    }

    /// The month fading out.
    #[must_use]
    pub fn a(self) -> Month {
        self.a
    }

    /// The month fading in.
    #[must_use]
    pub fn b(self) -> Month {
        self.b
    }

    /// Advance one step: the fade target becomes the new origin.
    pub fn rotate(&mut self) {
        self.a = self.b;
        self.b = self.a.next();
    }

    /// Jump to a specific origin month.
    pub fn set(&mut self, a: Month) {
        self.a = a;
        self.b = a.next();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_bounds() {
        assert!(Month::new(0).is_none());
        assert!(Month::new(13).is_none());
        assert_eq!(Month::new(7).map(Month::number), Some(7));
    }

    #[test]
    fn test_month_wrapping() {
        let dec = Month::new(12).unwrap();
        let jan = Month::new(1).unwrap();
        assert_eq!(dec.next(), jan);
        assert_eq!(jan.prev(), dec);
        assert_eq!(Month::new(5).unwrap().next().number(), 6);
    }

    #[test]
    fn test_cycle_rotation() {
        let mut cycle = MonthCycle::new(Month::new(1).unwrap());
        assert_eq!(cycle.a().number(), 1);
        assert_eq!(cycle.b().number(), 2);

        cycle.rotate();
        assert_eq!(cycle.a().number(), 2);
        assert_eq!(cycle.b().number(), 3);
    }

    #[test]
    fn test_cycle_wraps_year_end() {
        let mut cycle = MonthCycle::new(Month::new(12).unwrap());
        assert_eq!(cycle.b().number(), 1);

        cycle.rotate();
        assert_eq!(cycle.a().number(), 1);
        assert_eq!(cycle.b().number(), 2);
    }

    #[test]
    fn test_cycle_set_reestablishes_successor() {
        let mut cycle = MonthCycle::new(Month::new(3).unwrap());
        cycle.set(Month::new(8).unwrap());
        assert_eq!(cycle.a().number(), 8);
        assert_eq!(cycle.b().number(), 9);
    }
}
