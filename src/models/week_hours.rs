use chrono::Weekday;
use serde::Serialize;

/// One numeric hour field per weekday of a Monday-start week.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct WeekHours {
    pub monday: f64,
    pub tuesday: f64,
    pub wednesday: f64,
    pub thursday: f64,
    pub friday: f64,
    pub saturday: f64,
    pub sunday: f64,
}

impl WeekHours {
    /// A week where only `day` carries hours.
    pub fn single(day: Weekday, hours: f64) -> Self {
        let mut week = Self::default();
        *week.slot_mut(day) = hours;
        week
    }

    pub fn get(&self, day: Weekday) -> f64 {
        match day {
            Weekday::Mon => self.monday,
            Weekday::Tue => self.tuesday,
            Weekday::Wed => self.wednesday,
            Weekday::Thu => self.thursday,
            Weekday::Fri => self.friday,
            Weekday::Sat => self.saturday,
            Weekday::Sun => self.sunday,
        }
    }

    fn slot_mut(&mut self, day: Weekday) -> &mut f64 {
        match day {
            Weekday::Mon => &mut self.monday,
            Weekday::Tue => &mut self.tuesday,
            Weekday::Wed => &mut self.wednesday,
            Weekday::Thu => &mut self.thursday,
            Weekday::Fri => &mut self.friday,
            Weekday::Sat => &mut self.saturday,
            Weekday::Sun => &mut self.sunday,
        }
    }

    /// Add every bucket of `other` into `self`, keeping one decimal place.
    pub fn merge(&mut self, other: &WeekHours) {
        for (day, hours) in other.days() {
            let slot = self.slot_mut(day);
            *slot = round_tenth(*slot + hours);
        }
    }

    /// Buckets in Monday..Sunday order.
    pub fn days(&self) -> [(Weekday, f64); 7] {
        [
            (Weekday::Mon, self.monday),
            (Weekday::Tue, self.tuesday),
            (Weekday::Wed, self.wednesday),
            (Weekday::Thu, self.thursday),
            (Weekday::Fri, self.friday),
            (Weekday::Sat, self.saturday),
            (Weekday::Sun, self.sunday),
        ]
    }

    pub fn total(&self) -> f64 {
        round_tenth(self.days().iter().map(|(_, h)| h).sum())
    }

    /// The busiest day, if any hours were logged at all.
    pub fn max_day(&self) -> Option<(Weekday, f64)> {
        self.days()
            .into_iter()
            .filter(|(_, h)| *h > 0.0)
            .max_by(|a, b| a.1.total_cmp(&b.1))
    }
}

pub fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
