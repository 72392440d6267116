//! Local-language screen.
//!
//! A pick list over the language catalog; selecting one immediately shows
//! the canned availability lists.

use iced::widget::{Space, column, pick_list, row, text};
use iced::{Element, Length};
use iced_fonts::lucide;

use smartlearn_mock::language::{AVAILABLE_CONTENT, LANGUAGES, LEARNING_FEATURES};

use crate::component::{EmptyState, SectionCard};
use crate::message::{FeatureMessage, LanguageMessage, Message};
use crate::state::LanguageUi;
use crate::theme::{SPACING_MD, SPACING_SM, SPACING_XS};

/// Render the local-language screen body.
pub fn view<'a>(ui: &'a LanguageUi) -> Element<'a, Message> {
    let selector = pick_list(LANGUAGES, ui.selected, |language| {
        Message::Feature(FeatureMessage::Language(LanguageMessage::Selected(
            language,
        )))
    })
    .placeholder("Choose your language")
    .padding(SPACING_SM)
    .width(Length::Fixed(320.0));

    let mut body = column![
        text("Select your preferred language").size(14),
        Space::new().height(SPACING_SM),
        selector,
        Space::new().height(SPACING_MD),
    ];

    if let Some(language) = ui.selected {
        let content_list = column(
            AVAILABLE_CONTENT
                .iter()
                .map(|item| text(*item).size(13).into()),
        )
        .spacing(SPACING_XS);

        let features_list = column(
            LEARNING_FEATURES
                .iter()
                .map(|item| text(*item).size(13).into()),
        )
        .spacing(SPACING_XS);

        body = body
            .push(text(format!("Learning in {language}")).size(16))
            .push(Space::new().height(SPACING_MD))
            .push(
                row![
                    SectionCard::new("Available Content", content_list).view(),
                    SectionCard::new("Learning Features", features_list).view(),
                ]
                .spacing(SPACING_MD),
            );
    } else {
        body = body.push(
            EmptyState::new(
                lucide::book_open().size(48),
                "Pick a language to see what's available",
            )
            .description("Lessons, explanations, and exercises in your own language")
            .view(),
        );
    }

    body.into()
}
