//! Public landing page.
//!
//! Header with sign-in button, hero section, feature showcase grid, call
//! to action, and footer. Every entry point leads to the login flow.

use iced::widget::{Space, button, column, container, row, scrollable, text};
use iced::{Alignment, Element, Length};
use iced_fonts::lucide;

use smartlearn_core::FeatureId;

use crate::component::FeatureCard;
use crate::message::Message;
use crate::theme::{
    SPACING_LG, SPACING_MD, SPACING_SM, SPACING_XL, SPACING_XXL, button_primary, hero_container,
    muted_text, secondary_text,
};
use crate::view::feature_icon;

/// Render the landing page.
pub fn view_landing<'a>() -> Element<'a, Message> {
    let content = column![
        view_header(),
        Space::new().height(SPACING_XL),
        view_hero(),
        Space::new().height(SPACING_XXL),
        view_feature_showcase(),
        Space::new().height(SPACING_XXL),
        view_cta(),
        Space::new().height(SPACING_XL),
        view_footer(),
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

/// Top bar: logo on the left, sign-in on the right.
fn view_header<'a>() -> Element<'a, Message> {
    let logo = row![
        lucide::book_open().size(20),
        text("SmartLearn").size(20),
    ]
    .spacing(SPACING_SM)
    .align_y(Alignment::Center);

    let sign_in = button(text("Sign In").size(14))
        .on_press(Message::LoginRequested)
        .padding([8.0, 20.0])
        .style(button_primary);

    row![logo, Space::new().width(Length::Fill), sign_in]
        .align_y(Alignment::Center)
        .into()
}

/// Hero banner with tagline and the primary call to action.
fn view_hero<'a>() -> Element<'a, Message> {
    let get_started = button(
        row![
            text("Get Started").size(15),
            lucide::arrow_right().size(15),
        ]
        .spacing(SPACING_SM)
        .align_y(Alignment::Center),
    )
    .on_press(Message::LoginRequested)
    .padding([12.0, 28.0])
    .style(button_primary);

    container(
        column![
            text("Learning Made Simple, Fun, and Personal").size(32),
            Space::new().height(SPACING_MD),
            text(
                "SmartLearn helps students understand difficult concepts, learn in \
                 their own language, and track their progress - all in one place.",
            )
            .size(15),
            Space::new().height(SPACING_LG),
            get_started,
        ]
        .align_x(Alignment::Center),
    )
    .padding(SPACING_XXL)
    .width(Length::Fill)
    .style(hero_container)
    .into()
}

/// Grid of the six features. Cards lead into the login flow.
fn view_feature_showcase<'a>() -> Element<'a, Message> {
    let header = container(
        column![
            text("Everything You Need to Excel").size(24),
            Space::new().height(SPACING_SM),
            text("Six powerful tools designed around how students actually learn")
                .size(14)
                .style(secondary_text),
        ]
        .align_x(Alignment::Center),
    )
    .width(Length::Fill)
    .center_x(Length::Shrink);

    let mut rows = column![].spacing(SPACING_MD);
    for pair in FeatureId::ALL.chunks(2) {
        let mut cards = row![].spacing(SPACING_MD);
        for &id in pair {
            cards = cards.push(
                FeatureCard::new(id.title(), Message::LoginRequested)
                    .icon(feature_icon(id, 24.0))
                    .description(id.description())
                    .view(),
            );
        }
        rows = rows.push(cards);
    }

    column![header, Space::new().height(SPACING_LG), rows].into()
}

/// Closing call to action.
fn view_cta<'a>() -> Element<'a, Message> {
    container(
        column![
            text("Ready to start learning smarter?").size(20),
            Space::new().height(SPACING_MD),
            button(text("Join SmartLearn Today").size(15))
                .on_press(Message::LoginRequested)
                .padding([12.0, 28.0])
                .style(button_primary),
        ]
        .align_x(Alignment::Center),
    )
    .width(Length::Fill)
    .center_x(Length::Shrink)
    .into()
}

/// Footer line.
fn view_footer<'a>() -> Element<'a, Message> {
    container(
        text("SmartLearn - Learning made simple for every student")
            .size(12)
            .style(muted_text),
    )
    .width(Length::Fill)
    .center_x(Length::Shrink)
    .into()
}
