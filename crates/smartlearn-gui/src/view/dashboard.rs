//! Dashboard overview - the feature grid.

use iced::widget::{Space, button, column, container, row, scrollable, text};
use iced::{Alignment, Element, Length};
use iced_fonts::lucide;

use smartlearn_core::FeatureId;

use crate::component::FeatureCard;
use crate::message::{DashboardMessage, Message};
use crate::state::AppState;
use crate::theme::{
    SPACING_LG, SPACING_MD, SPACING_SM, SPACING_XL, button_secondary, secondary_text,
};
use crate::view::feature_icon;

/// Render the dashboard overview.
pub fn view_overview<'a>(state: &'a AppState) -> Element<'a, Message> {
    let content = column![
        view_header(state),
        Space::new().height(SPACING_XL),
        view_feature_grid(),
    ]
    .padding(SPACING_XL)
    .max_width(1000.0);

    scrollable(
        container(content)
            .width(Length::Fill)
            .center_x(Length::Shrink),
    )
    .height(Length::Fill)
    .into()
}

/// Greeting plus the theme and logout controls.
fn view_header<'a>(state: &'a AppState) -> Element<'a, Message> {
    let greeting = column![
        text("Welcome back!").size(26),
        Space::new().height(SPACING_SM),
        text("What would you like to learn today?")
            .size(14)
            .style(secondary_text),
    ];

    let theme_label = state.settings.display.theme_mode.label();
    let theme_button = button(
        row![
            lucide::monitor().size(14),
            text(format!("Theme: {theme_label}")).size(13),
        ]
        .spacing(SPACING_SM)
        .align_y(Alignment::Center),
    )
    .on_press(Message::Dashboard(DashboardMessage::ThemeCycled))
    .padding([8.0, 14.0])
    .style(button_secondary);

    let logout_button = button(
        row![lucide::log_out().size(14), text("Logout").size(13)]
            .spacing(SPACING_SM)
            .align_y(Alignment::Center),
    )
    .on_press(Message::Dashboard(DashboardMessage::LogoutClicked))
    .padding([8.0, 14.0])
    .style(button_secondary);

    row![
        greeting,
        Space::new().width(Length::Fill),
        theme_button,
        Space::new().width(SPACING_SM),
        logout_button,
    ]
    .align_y(Alignment::Center)
    .into()
}

/// The six feature cards, two per row.
fn view_feature_grid<'a>() -> Element<'a, Message> {
    let mut rows = column![].spacing(SPACING_MD);
    for pair in FeatureId::ALL.chunks(2) {
        let mut cards = row![].spacing(SPACING_MD);
        for &id in pair {
            cards = cards.push(
                FeatureCard::new(
                    id.title(),
                    Message::Dashboard(DashboardMessage::FeatureClicked(id)),
                )
                .icon(feature_icon(id, 24.0))
                .description(id.description())
                .view(),
            );
        }
        rows = rows.push(cards);
    }

    column![
        text("Your Learning Tools").size(18),
        Space::new().height(SPACING_LG),
        rows,
    ]
    .into()
}
