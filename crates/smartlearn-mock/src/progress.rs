//! Static learning-progress data.
//!
//! The progress dashboard is entirely canned: a week of activity, five
//! subject summaries, and four achievements. Switching the reporting
//! period only rescales the headline totals.

/// One day of mock study activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayActivity {
    pub day: &'static str,
    pub sessions: u32,
    pub minutes: u32,
}

/// The canned week of activity.
pub const WEEKLY_ACTIVITY: [DayActivity; 7] = [
    DayActivity { day: "Mon", sessions: 3, minutes: 45 },
    DayActivity { day: "Tue", sessions: 2, minutes: 30 },
    DayActivity { day: "Wed", sessions: 4, minutes: 60 },
    DayActivity { day: "Thu", sessions: 1, minutes: 15 },
    DayActivity { day: "Fri", sessions: 3, minutes: 40 },
    DayActivity { day: "Sat", sessions: 5, minutes: 75 },
    DayActivity { day: "Sun", sessions: 2, minutes: 25 },
];

/// Per-subject mock progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubjectProgress {
    pub name: &'static str,
    /// Completion percentage, 0-100.
    pub percent: u8,
    pub sessions: u32,
    pub minutes: u32,
}

/// The canned subject summaries.
pub const SUBJECTS: [SubjectProgress; 5] = [
    SubjectProgress { name: "Mathematics", percent: 85, sessions: 24, minutes: 480 },
    SubjectProgress { name: "Physics", percent: 72, sessions: 18, minutes: 360 },
    SubjectProgress { name: "Chemistry", percent: 68, sessions: 15, minutes: 300 },
    SubjectProgress { name: "Biology", percent: 91, sessions: 22, minutes: 420 },
    SubjectProgress { name: "English", percent: 77, sessions: 20, minutes: 380 },
];

/// A mock achievement badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Achievement {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub earned: bool,
}

/// The canned achievements.
pub const ACHIEVEMENTS: [Achievement; 4] = [
    Achievement {
        title: "Fast Learner",
        description: "Completed 5 topics in one day",
        icon: "\u{26A1}",
        earned: true,
    },
    Achievement {
        title: "Consistent Student",
        description: "7 days streak",
        icon: "\u{1F525}",
        earned: true,
    },
    Achievement {
        title: "Math Master",
        description: "90% accuracy in math problems",
        icon: "\u{1F9EE}",
        earned: false,
    },
    Achievement {
        title: "Explorer",
        description: "Used all learning tools",
        icon: "\u{1F5FA}\u{FE0F}",
        earned: true,
    },
];

/// Reporting period for the headline totals.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    #[default]
    Week,
    Month,
    Year,
}

impl Period {
    pub const ALL: [Period; 3] = [Self::Week, Self::Month, Self::Year];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Week => "Week",
            Self::Month => "Month",
            Self::Year => "Year",
        }
    }

    /// How many of the canned weeks the period spans.
    fn weeks(&self) -> u32 {
        match self {
            Self::Week => 1,
            Self::Month => 4,
            Self::Year => 52,
        }
    }
}

/// Headline totals for a reporting period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Totals {
    pub sessions: u32,
    pub minutes: u32,
    /// Mock day streak, period independent.
    pub streak_days: u32,
}

/// Compute the headline totals by scaling the canned week.
pub fn totals(period: Period) -> Totals {
    let sessions: u32 = WEEKLY_ACTIVITY.iter().map(|d| d.sessions).sum();
    let minutes: u32 = WEEKLY_ACTIVITY.iter().map(|d| d.minutes).sum();
    Totals {
        sessions: sessions * period.weeks(),
        minutes: minutes * period.weeks(),
        streak_days: 7,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn week_totals_match_the_daily_data() {
        let t = totals(Period::Week);
        assert_eq!(t.sessions, 20);
        assert_eq!(t.minutes, 290);
    }

    #[test]
    fn longer_periods_scale_the_week() {
        assert_eq!(totals(Period::Month).sessions, totals(Period::Week).sessions * 4);
        assert_eq!(totals(Period::Year).minutes, totals(Period::Week).minutes * 52);
    }
}
