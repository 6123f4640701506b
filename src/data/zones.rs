use chrono::NaiveDate;

/// Average frost dates of a USDA hardiness zone, as (month, day) pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrostDates {
    pub last_spring_frost: (u32, u32),
    pub first_autumn_frost: (u32, u32),
}

impl FrostDates {
    const fn new(last: (u32, u32), first: (u32, u32)) -> Self {
        Self {
            last_spring_frost: last,
            first_autumn_frost: first,
        }
    }

    pub fn last_frost_in(&self, year: i32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.last_spring_frost.0, self.last_spring_frost.1)
    }

    pub fn first_frost_in(&self, year: i32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.first_autumn_frost.0, self.first_autumn_frost.1)
    }
}

/// Approximate averages per zone, coldest first.
pub const ZONE_FROST_DATES: &[(&str, FrostDates)] = &[
    ("3a", FrostDates::new((5, 15), (9, 15))),
    ("3b", FrostDates::new((5, 10), (9, 20))),
    ("4a", FrostDates::new((5, 10), (9, 25))),
    ("4b", FrostDates::new((5, 5), (10, 1))),
    ("5a", FrostDates::new((5, 1), (10, 5))),
    ("5b", FrostDates::new((4, 25), (10, 10))),
    ("6a", FrostDates::new((4, 20), (10, 15))),
    ("6b", FrostDates::new((4, 15), (10, 20))),
    ("7a", FrostDates::new((4, 10), (10, 25))),
    ("7b", FrostDates::new((4, 5), (10, 30))),
    ("8a", FrostDates::new((3, 25), (11, 5))),
    ("8b", FrostDates::new((3, 15), (11, 10))),
    ("9a", FrostDates::new((3, 1), (11, 20))),
    ("9b", FrostDates::new((2, 15), (12, 1))),
    ("10a", FrostDates::new((2, 1), (12, 15))),
    ("10b", FrostDates::new((1, 15), (12, 31))),
];

pub fn zone_names() -> Vec<&'static str> {
    ZONE_FROST_DATES.iter().map(|(zone, _)| *zone).collect()
}

/// Case-insensitive zone lookup.
pub fn frost_dates(zone: &str) -> Option<FrostDates> {
    let zone = zone.to_lowercase();
    ZONE_FROST_DATES
        .iter()
        .find(|(name, _)| *name == zone)
        .map(|(_, dates)| *dates)
}
