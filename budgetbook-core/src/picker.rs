//! Month/year picker grid.

use std::collections::HashSet;

use crate::models::MonthMarker;
use crate::period::Period;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthCell {
    pub period: Period,
    pub label: &'static str,
    pub has_data: bool,
    pub is_selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    pub year: i32,
    pub cells: Vec<MonthCell>,
    pub can_go_back: bool,
    pub can_go_forward: bool,
}

impl MonthGrid {
    /// Lay out the selectable months of `year`.
    ///
    /// Months before `min_year` or after `today` never appear.
    pub fn build(
        year: i32,
        today: Period,
        selected: Period,
        markers: &HashSet<Period>,
        min_year: i32,
    ) -> Self {
        let cells = if year < min_year {
            Vec::new()
        } else {
            (1..=12)
                .filter_map(|month| Period::new(year, month))
                .filter(|period| *period <= today)
                .map(|period| MonthCell {
                    period,
                    label: period.short_month_name(),
                    has_data: markers.contains(&period),
                    is_selected: period == selected,
                })
                .collect()
        };

        Self {
            year,
            cells,
            can_go_back: year > min_year,
            can_go_forward: year < today.year,
        }
    }
}

/// Collapse the summary endpoint's markers into a lookup set, dropping
/// entries with an impossible month.
pub fn marker_set(markers: &[MonthMarker]) -> HashSet<Period> {
    markers.iter().filter_map(MonthMarker::period).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(year: i32, month: u32) -> Period {
        Period::new(year, month).unwrap()
    }

    #[test]
    fn test_current_year_stops_at_current_month() {
        let grid = MonthGrid::build(2026, p(2026, 4), p(2026, 2), &HashSet::new(), 2025);
        let months: Vec<u32> = grid.cells.iter().map(|c| c.period.month).collect();
        assert_eq!(months, vec![1, 2, 3, 4]);
        assert!(grid.can_go_back);
        assert!(!grid.can_go_forward);
    }

    #[test]
    fn test_past_year_shows_all_months() {
        let grid = MonthGrid::build(2025, p(2026, 4), p(2026, 2), &HashSet::new(), 2025);
        assert_eq!(grid.cells.len(), 12);
        assert_eq!(grid.cells[0].label, "Jan");
        assert!(!grid.can_go_back);
        assert!(grid.can_go_forward);
    }

    #[test]
    fn test_years_before_minimum_are_empty() {
        let grid = MonthGrid::build(2024, p(2026, 4), p(2026, 2), &HashSet::new(), 2025);
        assert!(grid.cells.is_empty());
        assert!(!grid.can_go_back);
    }

    #[test]
    fn test_future_year_is_empty() {
        let grid = MonthGrid::build(2027, p(2026, 4), p(2026, 2), &HashSet::new(), 2025);
        assert!(grid.cells.is_empty());
        assert!(!grid.can_go_forward);
    }

    #[test]
    fn test_marks_data_and_selection() {
        let markers = marker_set(&[
            MonthMarker { year: 2025, month: 3 },
            MonthMarker { year: 2025, month: 14 },
        ]);
        assert_eq!(markers.len(), 1);

        let grid = MonthGrid::build(2025, p(2025, 6), p(2025, 5), &markers, 2025);
        let march = &grid.cells[2];
        assert!(march.has_data);
        assert!(!march.is_selected);
        let may = &grid.cells[4];
        assert!(may.is_selected);
        assert!(!may.has_data);
    }
}
