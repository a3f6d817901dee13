//! Sunday, holiday and union aggregation.
//!
//! Each category is an independent fold over the worked records into
//! per-employee date sets. The union is the set union of the two folds,
//! so a date that is both a Sunday and a holiday is counted once.

use std::collections::{BTreeSet, HashMap};

use chrono::{Datelike, NaiveDate, Weekday};

use crate::models::{EmployeeKey, LongRecord, LongRelation, SummaryRow, UnionRow};

use super::HolidaySet;

/// Per-employee worked dates of one category.
pub type DatesByEmployee<'a> = HashMap<&'a EmployeeKey, BTreeSet<NaiveDate>>;

/// The three per-employee summaries, in roster order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySummaries {
    /// Sundays worked.
    pub sunday: Vec<SummaryRow>,
    /// Holidays worked.
    pub holiday: Vec<SummaryRow>,
    /// Union of Sundays and holidays worked.
    pub union: Vec<UnionRow>,
}

/// Returns `true` for Sundays (ISO weekday 7).
pub fn is_sunday(date: NaiveDate) -> bool {
    date.weekday() == Weekday::Sun
}

/// Collects, per employee, the distinct worked dates matching `include`.
pub fn collect_worked_dates<'a, F>(relation: &'a LongRelation, include: F) -> DatesByEmployee<'a>
where
    F: Fn(&LongRecord) -> bool,
{
    let mut dates: DatesByEmployee<'a> = HashMap::new();
    for record in relation.worked() {
        if include(record) {
            dates.entry(&record.employee).or_default().insert(record.date);
        }
    }
    dates
}

/// Builds the Sunday, holiday and union summaries for the full roster.
///
/// Employees without matches appear with a zero count and an empty list.
/// An empty holiday set yields an all-zero holiday summary.
///
/// # Example
///
/// ```
/// use attendance_report::aggregation::{summarize, HolidaySet};
/// use attendance_report::models::{EmployeeKey, LongRecord, LongRelation};
/// use chrono::NaiveDate;
///
/// let ana = EmployeeKey::new(["Ana"]);
/// let sunday = NaiveDate::from_ymd_opt(2026, 1, 4).unwrap();
/// let relation = LongRelation::new(
///     vec![ana.clone()],
///     vec![LongRecord { employee: ana, date: sunday, worked: true }],
/// );
///
/// let summaries = summarize(&relation, &HolidaySet::new());
/// assert_eq!(summaries.sunday[0].count, 1);
/// assert_eq!(summaries.holiday[0].count, 0);
/// assert_eq!(summaries.union[0].total_dates, "04-01-2026");
/// ```
pub fn summarize(relation: &LongRelation, holidays: &HolidaySet) -> CategorySummaries {
    let sundays = collect_worked_dates(relation, |record| is_sunday(record.date));
    let holiday_dates = collect_worked_dates(relation, |record| holidays.contains(&record.date));

    let none = BTreeSet::new();
    let mut summaries = CategorySummaries {
        sunday: Vec::with_capacity(relation.roster().len()),
        holiday: Vec::with_capacity(relation.roster().len()),
        union: Vec::with_capacity(relation.roster().len()),
    };

    for employee in relation.roster() {
        let worked_sundays = sundays.get(employee).unwrap_or(&none);
        let worked_holidays = holiday_dates.get(employee).unwrap_or(&none);

        summaries
            .sunday
            .push(SummaryRow::from_dates(employee.clone(), worked_sundays));
        summaries
            .holiday
            .push(SummaryRow::from_dates(employee.clone(), worked_holidays));
        summaries.union.push(UnionRow::from_dates(
            employee.clone(),
            worked_sundays,
            worked_holidays,
        ));
    }

    summaries
}
