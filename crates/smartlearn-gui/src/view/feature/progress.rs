//! Progress-dashboard screen.
//!
//! Entirely canned data: headline totals for the selected period, the week
//! of activity, subject completion, and achievements.

use iced::widget::{Space, button, column, container, progress_bar, row, text};
use iced::{Alignment, Element, Length};
use iced_fonts::lucide;

use smartlearn_mock::progress::{
    ACHIEVEMENTS, Achievement, DayActivity, Period, SUBJECTS, SubjectProgress, WEEKLY_ACTIVITY,
    totals,
};

use crate::component::{SectionCard, StatTile};
use crate::message::{FeatureMessage, Message, ProgressMessage};
use crate::state::ProgressUi;
use crate::theme::{
    SPACING_MD, SPACING_SM, SPACING_XS, button_primary, button_secondary, muted_text,
    secondary_text,
};

/// Render the progress screen body.
pub fn view<'a>(ui: &'a ProgressUi) -> Element<'a, Message> {
    let summary = totals(ui.period);

    let tiles = row![
        StatTile::new(summary.sessions.to_string(), "Study Sessions")
            .icon(lucide::play().size(18))
            .view(),
        StatTile::new(format!("{} min", summary.minutes), "Time Studied")
            .icon(lucide::calendar().size(18))
            .view(),
        StatTile::new(format!("{} days", summary.streak_days), "Current Streak")
            .icon(lucide::circle_check().size(18))
            .view(),
    ]
    .spacing(SPACING_MD);

    column![
        view_period_selector(ui.period),
        Space::new().height(SPACING_MD),
        tiles,
        Space::new().height(SPACING_MD),
        row![
            SectionCard::new("This Week", view_weekly_activity())
                .icon(lucide::calendar().size(14))
                .view(),
            SectionCard::new("Subjects", view_subjects()).view(),
        ]
        .spacing(SPACING_MD),
        Space::new().height(SPACING_MD),
        SectionCard::new("Achievements", view_achievements()).view(),
    ]
    .into()
}

/// Week / Month / Year selector.
fn view_period_selector<'a>(current: Period) -> Element<'a, Message> {
    let mut buttons = row![].spacing(SPACING_SM);
    for period in Period::ALL {
        let style = if period == current {
            button_primary
        } else {
            button_secondary
        };
        buttons = buttons.push(
            button(text(period.label()).size(13))
                .on_press(Message::Feature(FeatureMessage::Progress(
                    ProgressMessage::PeriodSelected(period),
                )))
                .padding([6.0, 16.0])
                .style(style),
        );
    }
    buttons.into()
}

/// Day-by-day activity rows.
fn view_weekly_activity<'a>() -> Element<'a, Message> {
    column(WEEKLY_ACTIVITY.iter().map(view_day))
        .spacing(SPACING_XS)
        .into()
}

fn view_day<'a>(day: &DayActivity) -> Element<'a, Message> {
    row![
        container(text(day.day).size(12).style(secondary_text)).width(Length::Fixed(36.0)),
        progress_bar(0.0..=90.0, day.minutes as f32).girth(8.0),
        Space::new().width(SPACING_SM),
        container(
            text(format!("{} min", day.minutes))
                .size(11)
                .style(muted_text)
        )
        .width(Length::Fixed(52.0)),
    ]
    .spacing(SPACING_SM)
    .align_y(Alignment::Center)
    .into()
}

/// Subject completion rows.
fn view_subjects<'a>() -> Element<'a, Message> {
    column(SUBJECTS.iter().map(view_subject))
        .spacing(SPACING_SM)
        .into()
}

fn view_subject<'a>(subject: &SubjectProgress) -> Element<'a, Message> {
    column![
        row![
            text(subject.name).size(13),
            Space::new().width(Length::Fill),
            text(format!("{}%", subject.percent)).size(12).style(secondary_text),
        ]
        .align_y(Alignment::Center),
        Space::new().height(SPACING_XS),
        progress_bar(0.0..=100.0, f32::from(subject.percent)).girth(8.0),
    ]
    .into()
}

/// Achievement badges, two per row. Unearned badges are dimmed.
fn view_achievements<'a>() -> Element<'a, Message> {
    let mut rows = column![].spacing(SPACING_SM);
    for pair in ACHIEVEMENTS.chunks(2) {
        let mut cards = row![].spacing(SPACING_SM);
        for achievement in pair {
            cards = cards.push(view_achievement(achievement));
        }
        rows = rows.push(cards);
    }
    rows.into()
}

fn view_achievement<'a>(achievement: &Achievement) -> Element<'a, Message> {
    let title: Element<'a, Message> = if achievement.earned {
        text(achievement.title).size(13).into()
    } else {
        text(achievement.title).size(13).style(muted_text).into()
    };

    container(
        row![
            text(achievement.icon).size(20),
            Space::new().width(SPACING_SM),
            column![
                title,
                text(achievement.description).size(11).style(muted_text),
            ],
        ]
        .align_y(Alignment::Center),
    )
    .padding(SPACING_SM)
    .width(Length::Fill)
    .into()
}
