//! Weekday tokens, used by recurring tasks

use std::convert::TryFrom;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use bitflags::bitflags;
use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde::de::Error as _;

bitflags! {
    /// The days of the week a recurring task comes back on
    pub struct WeekdaySet: u8 {
        const MONDAY = 1;
        const TUESDAY = 1 << 1;
        const WEDNESDAY = 1 << 2;
        const THURSDAY = 1 << 3;
        const FRIDAY = 1 << 4;
        const SATURDAY = 1 << 5;
        const SUNDAY = 1 << 6;
    }
}

const ALL_DAYS: [Weekday; 7] = [
    Weekday::Mon, Weekday::Tue, Weekday::Wed, Weekday::Thu,
    Weekday::Fri, Weekday::Sat, Weekday::Sun,
];

impl WeekdaySet {
    /// Whether `date` falls on one of the days of this set
    pub fn matches(&self, date: NaiveDate) -> bool {
        self.contains(Self::from(date.weekday()))
    }

    /// The days of this set, Monday first
    pub fn weekdays(&self) -> Vec<Weekday> {
        ALL_DAYS.iter()
            .copied()
            .filter(|day| self.contains(Self::from(*day)))
            .collect()
    }

    /// Builds a set out of tokens such as `"Mon"`, `"tuesday"` or `"SUN"`
    pub fn from_tokens<I, S>(tokens: I) -> Result<Self, Box<dyn Error>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::empty();
        for token in tokens {
            set.insert(Self::from(parse_weekday(token.as_ref())?));
        }
        Ok(set)
    }

    /// The short tokens of this set (`"Mon"`, `"Tue"`...), Monday first
    pub fn tokens(&self) -> Vec<String> {
        self.weekdays().into_iter()
            .map(|day| token(day).to_string())
            .collect()
    }
}

impl From<Weekday> for WeekdaySet {
    fn from(day: Weekday) -> Self {
        match day {
            Weekday::Mon => Self::MONDAY,
            Weekday::Tue => Self::TUESDAY,
            Weekday::Wed => Self::WEDNESDAY,
            Weekday::Thu => Self::THURSDAY,
            Weekday::Fri => Self::FRIDAY,
            Weekday::Sat => Self::SATURDAY,
            Weekday::Sun => Self::SUNDAY,
        }
    }
}

impl TryFrom<&str> for WeekdaySet {
    type Error = Box<dyn Error>;

    /// Parse a single weekday token
    fn try_from(token: &str) -> Result<Self, Self::Error> {
        Ok(Self::from(parse_weekday(token)?))
    }
}

impl FromStr for WeekdaySet {
    type Err = Box<dyn Error>;

    /// Parse a comma-separated list of weekday tokens, e.g. `"Mon,Wed, friday"`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tokens(s.split(',').map(str::trim).filter(|t| t.is_empty() == false))
    }
}

impl Display for WeekdaySet {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "{}", self.tokens().join(","))
    }
}

/// Used to support serde
impl Serialize for WeekdaySet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.tokens().serialize(serializer)
    }
}
/// Used to support serde
impl<'de> Deserialize<'de> for WeekdaySet {
    fn deserialize<D>(deserializer: D) -> Result<WeekdaySet, D::Error>
    where
        D: Deserializer<'de>,
    {
        let tokens = Vec::<String>::deserialize(deserializer)?;
        WeekdaySet::from_tokens(&tokens).map_err(|err| D::Error::custom(err.to_string()))
    }
}


/// The weekday `date` falls on
pub fn weekday_of(date: NaiveDate) -> Weekday {
    date.weekday()
}

/// The short token used to store a weekday (`"Mon"`, `"Tue"`...)
pub fn token(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Mon",
        Weekday::Tue => "Tue",
        Weekday::Wed => "Wed",
        Weekday::Thu => "Thu",
        Weekday::Fri => "Fri",
        Weekday::Sat => "Sat",
        Weekday::Sun => "Sun",
    }
}

/// The full English name of a weekday (`"Monday"`...)
pub fn full_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Case-insensitive parsing of a full weekday name or of its three-letter abbreviation
pub fn parse_weekday(token: &str) -> Result<Weekday, Box<dyn Error>> {
    let lower = token.trim().to_lowercase();
    for day in ALL_DAYS.iter() {
        let full = full_name(*day).to_lowercase();
        if lower == full || lower == full[..3] {
            return Ok(*day);
        }
    }
    Err(format!("Invalid weekday token {:?}", token).into())
}
