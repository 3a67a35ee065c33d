//! [`DateRange`] definitions.

use common::{unit, Date, DateOf};

/// Range of a stay selected on a calendar.
///
/// Either endpoint may be missing while the selection is in progress.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct DateRange {
    /// Arrival [`Date`], if selected.
    pub check_in: Option<CheckInDate>,

    /// Departure [`Date`], if selected.
    pub check_out: Option<CheckOutDate>,
}

impl DateRange {
    /// Empty [`DateRange`] with no endpoint selected.
    pub const EMPTY: Self = Self {
        check_in: None,
        check_out: None,
    };

    /// Applies a click on the `clicked` [`Date`] to this [`DateRange`].
    ///
    /// Rules, in order:
    /// 1. A complete range, or a click before the arrival, restarts the
    ///    selection at the `clicked` [`Date`].
    /// 2. An empty range gets its arrival.
    /// 3. Otherwise the `clicked` [`Date`] becomes the departure.
    ///
    /// Callers must only pass [selectable] dates.
    ///
    /// [selectable]: DateRange::is_selectable
    #[must_use]
    pub fn select(self, clicked: Date) -> Self {
        match (self.check_in, self.check_out) {
            (Some(_), Some(_)) => Self::starting_at(clicked),
            (Some(check_in), None) if clicked < check_in.coerce() => {
                Self::starting_at(clicked)
            }
            (None, _) => Self::starting_at(clicked),
            (Some(check_in), None) => Self {
                check_in: Some(check_in),
                check_out: Some(clicked.coerce()),
            },
        }
    }

    /// Indicates whether the provided [`Date`] may be clicked at all.
    ///
    /// Days before `today` are never selectable.
    #[must_use]
    pub fn is_selectable(date: Date, today: Date) -> bool {
        date >= today
    }

    /// Returns the number of nights between the arrival and the departure.
    ///
    /// `0` is returned if either endpoint is missing or the departure is not
    /// strictly after the arrival.
    #[must_use]
    pub fn nights(&self) -> u32 {
        Self::nights_between(self.check_in, self.check_out)
    }

    /// Returns the number of nights between the provided endpoints.
    ///
    /// Calendar dates carry no time of day, so the whole-day difference is
    /// already rounded up.
    #[must_use]
    pub fn nights_between<I: ?Sized, O: ?Sized>(
        check_in: Option<DateOf<I>>,
        check_out: Option<DateOf<O>>,
    ) -> u32 {
        let (Some(check_in), Some(check_out)) = (check_in, check_out) else {
            return 0;
        };
        u32::try_from(check_in.days_until(&check_out)).unwrap_or(0)
    }

    /// Indicates whether both endpoints are selected and span at least one
    /// night.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.nights() > 0
    }

    /// Creates a new [`DateRange`] with only the arrival selected.
    fn starting_at(date: Date) -> Self {
        Self {
            check_in: Some(date.coerce()),
            check_out: None,
        }
    }
}

/// [`Date`] of an arrival.
pub type CheckInDate = DateOf<(DateRange, unit::CheckIn)>;

/// [`Date`] of a departure.
pub type CheckOutDate = DateOf<(DateRange, unit::CheckOut)>;
