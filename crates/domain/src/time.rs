use chrono::{DateTime, Datelike, Duration, Local, NaiveDate, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    pub first: NaiveDate,
    pub last: NaiveDate,
}

impl Interval {
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.first <= date && date <= self.last
    }

    /// Length in days, or `None` if the interval has no lower bound.
    #[must_use]
    pub fn days(&self) -> Option<i64> {
        if self.first == NaiveDate::MIN {
            None
        } else {
            Some((self.last - self.first).num_days())
        }
    }
}

impl From<std::ops::RangeInclusive<NaiveDate>> for Interval {
    fn from(value: std::ops::RangeInclusive<NaiveDate>) -> Self {
        Interval {
            first: *value.start(),
            last: *value.end(),
        }
    }
}

/// How far back in history an analysis looks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookback {
    All,
    Days(u32),
}

impl Lookback {
    #[must_use]
    pub fn interval(self, today: NaiveDate) -> Interval {
        match self {
            Lookback::All => Interval {
                first: NaiveDate::MIN,
                last: today,
            },
            Lookback::Days(days) => Interval {
                first: today - Duration::days(i64::from(days)),
                last: today,
            },
        }
    }
}

impl From<Option<u32>> for Lookback {
    fn from(value: Option<u32>) -> Self {
        value.map_or(Lookback::All, Lookback::Days)
    }
}

/// The current date and time as seen by all computations of one request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Clock {
    pub today: NaiveDate,
    pub now: DateTime<Utc>,
}

impl Clock {
    #[must_use]
    pub fn system() -> Self {
        Self {
            today: Local::now().date_naive(),
            now: Utc::now(),
        }
    }

    #[must_use]
    pub fn fixed(today: NaiveDate, now: DateTime<Utc>) -> Self {
        Self { today, now }
    }

    /// Monday of the current week.
    #[must_use]
    pub fn week_start(&self) -> NaiveDate {
        week_start(self.today)
    }

    /// Days remaining in the current week including today.
    #[must_use]
    pub fn days_left_in_week(&self) -> u32 {
        7 - self.today.weekday().num_days_from_monday()
    }
}

#[must_use]
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_monday()))
}
