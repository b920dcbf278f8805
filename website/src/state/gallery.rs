/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 *
 * Unless you explicitly state otherwise, any contribution intentionally
 * submitted for inclusion in the work by you, as defined in the Apache-2.0
 * license, shall be dual licensed as above, without any additional terms or
 * conditions.
 */

//! Portfolio gallery filtering.
//!
//! Search text, category and date range are independent predicates; an
//! item is shown when it passes all three.

use std::collections::HashSet;

use chrono::NaiveDate;
use dbl_cms_types::portfolio::parse_day;
use dbl_cms_types::PortfolioItem;

/// Inclusive range of calendar days. Without `to` it selects the single day
/// `from`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub from: NaiveDate,
    pub to: Option<NaiveDate>,
}

impl DateRange {
    /// Build a range from two `<input type="date">` values. An empty or
    /// invalid start means no range.
    pub fn from_inputs(from: &str, to: &str) -> Option<Self> {
        let from = parse_day(from.trim())?;
        Some(Self {
            from,
            to: parse_day(to.trim()),
        })
    }

    /// Trigger text of the date picker, e.g. `Mar 10, 2024 - Mar 12, 2024`.
    pub fn label(&self) -> String {
        match self.to {
            Some(to) if to != self.from => format!("{} - {}", format_day(self.from), format_day(to)),
            _ => format_day(self.from),
        }
    }

    pub fn contains(&self, day: NaiveDate) -> bool {
        let to = self.to.unwrap_or(self.from);
        let (start, end) = if to < self.from {
            (to, self.from)
        } else {
            (self.from, to)
        };
        start <= day && day <= end
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GalleryFilter {
    pub search: String,
    /// `None` selects every category.
    pub category: Option<String>,
    pub dates: Option<DateRange>,
}

impl GalleryFilter {
    /// Case-insensitive substring of heading or sub-heading.
    pub fn matches_search(&self, item: &PortfolioItem) -> bool {
        let needle = self.search.trim().to_lowercase();
        needle.is_empty()
            || item.heading.to_lowercase().contains(&needle)
            || item.sub_heading.to_lowercase().contains(&needle)
    }

    pub fn matches_category(&self, item: &PortfolioItem) -> bool {
        self.category
            .as_deref()
            .map_or(true, |category| item.category == category)
    }

    /// Items whose date cannot be read only fail while a range is active.
    pub fn matches_dates(&self, item: &PortfolioItem) -> bool {
        match &self.dates {
            None => true,
            Some(range) => item.day().is_some_and(|day| range.contains(day)),
        }
    }

    pub fn matches(&self, item: &PortfolioItem) -> bool {
        self.matches_search(item) && self.matches_category(item) && self.matches_dates(item)
    }

    pub fn apply(&self, items: &[PortfolioItem]) -> Vec<PortfolioItem> {
        items
            .iter()
            .filter(|item| self.matches(item))
            .cloned()
            .collect()
    }
}

pub fn format_day(day: NaiveDate) -> String {
    day.format("%b %d, %Y").to_string()
}

/// Card date; unreadable dates are shown as stored.
pub fn display_date(item: &PortfolioItem) -> String {
    item.day()
        .map(format_day)
        .unwrap_or_else(|| item.date.clone())
}

/// Unique, non-empty categories in first-seen order.
pub fn categories(items: &[PortfolioItem]) -> Vec<String> {
    let mut seen = HashSet::new();
    items
        .iter()
        .map(|item| item.category.as_str())
        .filter(|category| !category.is_empty() && seen.insert(*category))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: i64, heading: &str, sub: &str, category: &str, date: &str) -> PortfolioItem {
        PortfolioItem {
            id,
            heading: heading.to_string(),
            sub_heading: sub.to_string(),
            category: category.to_string(),
            date: date.to_string(),
            image: Vec::new(),
        }
    }

    fn day(raw: &str) -> NaiveDate {
        NaiveDate::parse_from_str(raw, "%Y-%m-%d").unwrap()
    }

    fn items() -> Vec<PortfolioItem> {
        vec![
            item(1, "CCTV rollout", "Valenzuela warehouse", "Security", "2024-03-10"),
            item(2, "Server room", "Rack and cabling", "Infrastructure", "2024-03-12T16:45:00.000Z"),
            item(3, "Access control", "Biometric doors", "Security", "2024-04-01"),
            item(4, "Undated", "no date yet", "Security", "soon"),
        ]
    }

    fn ids(items: &[PortfolioItem]) -> Vec<i64> {
        items.iter().map(|item| item.id).collect()
    }

    #[test]
    fn empty_filter_matches_everything() {
        assert_eq!(ids(&GalleryFilter::default().apply(&items())), vec![1, 2, 3, 4]);
    }

    #[test]
    fn search_is_case_insensitive_over_both_headings() {
        let filter = GalleryFilter {
            search: "RACK".into(),
            ..Default::default()
        };
        assert_eq!(ids(&filter.apply(&items())), vec![2]);

        let filter = GalleryFilter {
            search: "cctv".into(),
            ..Default::default()
        };
        assert_eq!(ids(&filter.apply(&items())), vec![1]);
    }

    #[test]
    fn date_range_is_inclusive_and_ignores_time_of_day() {
        let filter = GalleryFilter {
            dates: Some(DateRange {
                from: day("2024-03-10"),
                to: Some(day("2024-03-12")),
            }),
            ..Default::default()
        };
        assert_eq!(ids(&filter.apply(&items())), vec![1, 2]);
    }

    #[test]
    fn open_ended_range_is_a_single_day() {
        let filter = GalleryFilter {
            dates: DateRange::from_inputs("2024-03-12", ""),
            ..Default::default()
        };
        assert_eq!(ids(&filter.apply(&items())), vec![2]);
    }

    #[test]
    fn reversed_inputs_still_select_the_span() {
        let range = DateRange::from_inputs("2024-04-01", "2024-03-10").unwrap();
        assert!(range.contains(day("2024-03-20")));
    }

    #[test]
    fn missing_start_means_no_range() {
        assert_eq!(DateRange::from_inputs("", "2024-03-10"), None);
    }

    #[test]
    fn filters_compose_in_any_order() {
        let filter = GalleryFilter {
            search: "o".into(),
            category: Some("Security".into()),
            dates: DateRange::from_inputs("2024-03-01", "2024-03-31"),
        };
        let all = items();
        let expected = filter.apply(&all);
        assert_eq!(ids(&expected), vec![1]);

        let by_category: Vec<_> = all.iter().filter(|i| filter.matches_category(i)).cloned().collect();
        let by_dates: Vec<_> = by_category.iter().filter(|i| filter.matches_dates(i)).cloned().collect();
        let by_search: Vec<_> = by_dates.iter().filter(|i| filter.matches_search(i)).cloned().collect();
        assert_eq!(by_search, expected);
    }

    #[test]
    fn categories_are_unique_in_first_seen_order() {
        assert_eq!(categories(&items()), vec!["Security", "Infrastructure"]);
    }

    #[test]
    fn range_label_collapses_single_days() {
        let range = DateRange::from_inputs("2024-03-10", "2024-03-12").unwrap();
        assert_eq!(range.label(), "Mar 10, 2024 - Mar 12, 2024");
        let single = DateRange::from_inputs("2024-03-10", "2024-03-10").unwrap();
        assert_eq!(single.label(), "Mar 10, 2024");
    }

    #[test]
    fn display_date_falls_back_to_raw_value() {
        let all = items();
        assert_eq!(display_date(&all[1]), "Mar 12, 2024");
        assert_eq!(display_date(&all[3]), "soon");
    }
}
