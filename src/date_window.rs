//! The horizontal date strip of the agenda: a fixed window of days, a selected day,
//! and the snapping arithmetic that keeps the selected day centred.

use chrono::{Days, NaiveDate};

use crate::config::{DAYS_AFTER, DAYS_BEFORE, DAYS_PER_SNAP, ITEM_WIDTH};
use crate::utils::{date_key, date_range};


/// An ordered sequence of consecutive calendar days, with no gaps nor duplicates.
///
/// This is built once and never changes afterwards
#[derive(Clone, Debug, PartialEq)]
pub struct DateWindow {
    days: Vec<NaiveDate>,
}

impl DateWindow {
    /// The default window: 30 days before `today`, `today`, and 30 days after (61 days)
    pub fn new(today: NaiveDate) -> Self {
        Self::around(today, DAYS_BEFORE, DAYS_AFTER)
    }

    /// A window spanning from `before` days before `center` to `after` days after it, both included.
    ///
    /// The window is empty when one of its bounds is not a representable date
    pub fn around(center: NaiveDate, before: i64, after: i64) -> Self {
        let start = before.checked_neg().and_then(|days| shift(center, days));
        match (start, shift(center, after)) {
            (Some(start), Some(end)) => Self::from_range(start, end),
            _ => {
                log::warn!("Cannot build a window from {} days before to {} days after {}", before, after, center);
                Self { days: Vec::new() }
            },
        }
    }

    /// A window spanning from `start` to `end`, both included
    pub fn from_range(start: NaiveDate, end: NaiveDate) -> Self {
        Self { days: date_range(start, end) }
    }

    pub fn days(&self) -> &[NaiveDate] {
        &self.days
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn first(&self) -> Option<NaiveDate> {
        self.days.first().copied()
    }

    pub fn last(&self) -> Option<NaiveDate> {
        self.days.last().copied()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.index_of(date).is_some()
    }

    /// The position of `date` in this window, or `None` if it is out of the window
    pub fn index_of(&self, date: NaiveDate) -> Option<usize> {
        let first = self.first()?;
        let offset = (date - first).num_days();
        if offset < 0 || offset as usize >= self.days.len() {
            return None;
        }
        Some(offset as usize)
    }
}

/// `date` moved by `days` days, backwards when `days` is negative
fn shift(date: NaiveDate, days: i64) -> Option<NaiveDate> {
    let offset = Days::new(days.unsigned_abs());
    if days < 0 {
        date.checked_sub_days(offset)
    } else {
        date.checked_add_days(offset)
    }
}


/// The first index of a group of `group_size` cells, so that `selected_index` is in the middle of the group.
///
/// The result is clamped to `[0, window_len - group_size]`. When the window is shorter than a group, this is `0`.
pub fn snap_group_start(selected_index: usize, group_size: usize, window_len: usize) -> usize {
    let max_start = window_len.saturating_sub(group_size);
    selected_index
        .saturating_sub(group_size / 2)
        .min(max_start)
}

/// The index the strip is scrolled to when it is first laid out.
///
/// Unlike [`snap_group_start`], this one is not clamped to the end of the window
pub fn initial_scroll_index(selected_index: usize, group_size: usize) -> usize {
    selected_index.saturating_sub(group_size / 2)
}


/// A request to scroll the date strip so that a snap group starts at its left edge.
///
/// Consumers fire it and forget about it: nothing waits for the scroll to complete
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollRequest {
    pub index: usize,
    pub animated: bool,
    /// Where the target cell lands in the viewport (`0.0` is the left edge)
    pub view_position: f32,
}

/// A single cell of the date strip
#[derive(Clone, Debug, PartialEq)]
pub struct DateCell {
    pub date: NaiveDate,
    /// `yyyy-MM-dd`
    pub key: String,
    /// Day of month, `dd`
    pub day_label: String,
    /// Short weekday, `EEE`
    pub weekday_label: String,
    pub is_active: bool,
}

impl DateCell {
    fn new(date: NaiveDate, selected: NaiveDate) -> Self {
        Self {
            date,
            key: date_key(date),
            day_label: date.format("%d").to_string(),
            weekday_label: date.format("%a").to_string(),
            is_active: date == selected,
        }
    }
}


/// A date window, and the day that is currently selected in it
#[derive(Clone, Debug)]
pub struct DateStrip {
    window: DateWindow,
    selected: NaiveDate,
    group_size: usize,
}

impl DateStrip {
    /// The default strip around `today`, with `today` selected
    pub fn new(today: NaiveDate) -> Self {
        Self::with_window(DateWindow::new(today), today, DAYS_PER_SNAP)
    }

    pub fn with_window(window: DateWindow, selected: NaiveDate, group_size: usize) -> Self {
        Self { window, selected, group_size }
    }

    pub fn window(&self) -> &DateWindow { &self.window }
    pub fn selected(&self) -> NaiveDate  { self.selected }
    pub fn group_size(&self) -> usize    { self.group_size }

    /// The distance between two snap points
    pub fn snap_interval(&self) -> u32 {
        ITEM_WIDTH * self.group_size as u32
    }

    /// The position of the selected day in the window
    pub fn selected_index(&self) -> Option<usize> {
        self.window.index_of(self.selected)
    }

    /// Select a day.
    ///
    /// This is not validated: selecting a day out of the window is allowed, but it leaves the strip
    /// without a selected index and no scroll is requested.
    pub fn select_date(&mut self, date: NaiveDate) -> Option<ScrollRequest> {
        self.selected = date;
        let request = self.scroll_request();
        if request.is_none() {
            log::debug!("Selected date {} is out of the date window, not scrolling", date);
        }
        request
    }

    /// The scroll that would centre the current selection, if it is in the window
    pub fn scroll_request(&self) -> Option<ScrollRequest> {
        let selected_index = self.selected_index()?;
        Some(ScrollRequest {
            index: snap_group_start(selected_index, self.group_size, self.window.len()),
            animated: true,
            view_position: 0.0,
        })
    }

    /// Where the strip should be scrolled to when it is first displayed
    pub fn initial_scroll_index(&self) -> usize {
        // An unknown index behaves like index 0
        initial_scroll_index(self.selected_index().unwrap_or(0), self.group_size)
    }

    /// Every cell of the strip
    pub fn cells(&self) -> Vec<DateCell> {
        self.window.days().iter()
            .map(|date| DateCell::new(*date, self.selected))
            .collect()
    }
}
