//! Some utility functions

use std::error::Error;

use chrono::{Local, NaiveDate};

use crate::Task;
use crate::navigation::TodoRoute;
use crate::views::{AgendaScreen, TodayScreen};


/// The current calendar day, in local time
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Every date from `start` to `end`, both included.
///
/// Returns an empty list when `end` is before `start`
pub fn date_range(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    let mut days = Vec::new();
    let mut current = start;
    while current <= end {
        days.push(current);
        match current.succ_opt() {
            Some(next) => current = next,
            // `end` is the last representable date
            None => break,
        }
    }
    days
}

/// Formats a date with a Unicode date pattern, such as `yyyy-MM-dd` or `EEE`.
///
/// Supported fields are years (`yyyy`, `yy`), months (`MM`, `M`, `LLLL`, `LLL`), days of month (`dd`, `d`)
/// and weekdays (`EEEE`, `EEE`). Other ASCII letters are rejected, anything else is copied as is.
pub fn format_date(date: NaiveDate, pattern: &str) -> Result<String, Box<dyn Error>> {
    let mut strftime = String::new();
    let mut chars = pattern.chars().peekable();

    while let Some(c) = chars.next() {
        if c.is_ascii_alphabetic() == false {
            if c == '%' {
                strftime.push_str("%%");
            } else {
                strftime.push(c);
            }
            continue;
        }

        let mut run = 1;
        while chars.peek() == Some(&c) {
            chars.next();
            run += 1;
        }

        let spec = match (c, run) {
            ('y', 4) => "%Y",
            ('y', 2) => "%y",
            ('M', 2) => "%m",
            ('M', 1) => "%-m",
            ('L', 4) | ('M', 4) => "%B",
            ('L', 3) | ('M', 3) => "%b",
            ('d', 2) => "%d",
            ('d', 1) => "%-d",
            ('E', 4) => "%A",
            ('E', 1..=3) => "%a",
            _ => return Err(format!("Unsupported field {:?} in date pattern {:?}", c.to_string().repeat(run), pattern).into()),
        };
        strftime.push_str(spec);
    }

    Ok(date.format(&strftime).to_string())
}

/// The key of a date, as used to identify date cells and selections (`yyyy-MM-dd`)
pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}


/// A debug utility that pretty-prints a task
pub fn print_task(task: &Task) {
    let completion = if task.is_checked() { "✓" } else { " " };
    let kind = match (task.enabled_due_date(), task.repeat()) {
        (Some(due), _) => format!("due {}", due.date.format("%Y-%m-%d %H:%M")),
        (None, Some(repeat)) if task.is_scheduled() => format!("every {}", repeat),
        _ => String::from("simple"),
    };
    println!("    {} {}\t({})\t{}", completion, task.name(), kind, task.id());
}

fn print_route(route: &TodoRoute) {
    match route.bg() {
        Some(bg) => println!("        -> todo {} (bg {})", route.todo_id(), bg),
        None => println!("        -> todo {} (unknown todo)", route.todo_id()),
    }
}

/// A debug utility that pretty-prints the agenda screen
pub fn print_agenda(screen: &AgendaScreen) {
    println!("{} - {} Tasks", screen.header.title, screen.header.pending_count);

    let strip: Vec<String> = screen.visible_cells().iter()
        .map(|cell| {
            if cell.is_active {
                format!("[{} {}]", cell.weekday_label, cell.day_label)
            } else {
                format!(" {} {} ", cell.weekday_label, cell.day_label)
            }
        })
        .collect();
    println!("{}", strip.join(""));

    match &screen.content {
        crate::views::ListContent::Empty(placeholder) => println!("    ({})", placeholder.text),
        crate::views::ListContent::Items(rows) => {
            for row in rows {
                print_task(row.task);
                print_route(&row.route);
            }
        }
    }
}

/// A debug utility that pretty-prints the today screen
pub fn print_today(screen: &TodayScreen) {
    match &screen.content {
        crate::views::ListContent::Empty(placeholder) => println!("    ({})", placeholder.text),
        crate::views::ListContent::Items(sections) => {
            for section in sections {
                println!("{} ({})", section.title, section.rows.len());
                for row in &section.rows {
                    print_task(row.task);
                }
            }
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn range_is_inclusive_and_ordered() {
        let days = date_range(ymd(2026, 2, 27), ymd(2026, 3, 2));
        assert_eq!(days, vec![ymd(2026, 2, 27), ymd(2026, 2, 28), ymd(2026, 3, 1), ymd(2026, 3, 2)]);

        assert_eq!(date_range(ymd(2026, 3, 2), ymd(2026, 3, 2)).len(), 1);
        assert!(date_range(ymd(2026, 3, 2), ymd(2026, 3, 1)).is_empty());

        assert_eq!(date_range(NaiveDate::MAX, NaiveDate::MAX), vec![NaiveDate::MAX]);
        let last_days = date_range(NaiveDate::MAX.pred_opt().unwrap(), NaiveDate::MAX);
        assert_eq!(last_days.len(), 2);
    }

    #[test]
    fn patterns() {
        let day = ymd(2026, 10, 9);
        assert_eq!(format_date(day, "yyyy-MM-dd").unwrap(), "2026-10-09");
        assert_eq!(format_date(day, "MM/dd/yyyy").unwrap(), "10/09/2026");
        assert_eq!(format_date(day, "dd").unwrap(), "09");
        assert_eq!(format_date(day, "EEE").unwrap(), "Fri");
        assert_eq!(format_date(day, "EEEE").unwrap(), "Friday");
        assert_eq!(format_date(day, "LLLL d").unwrap(), "October 9");
        assert_eq!(format_date(day, "d%").unwrap(), "9%");
        assert!(format_date(day, "HH:mm").is_err());
        assert_eq!(date_key(day), "2026-10-09");
    }
}
