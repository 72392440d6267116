//! "Explain Like I'm Five" screen.

use iced::widget::{Space, button, column, container, row, text, text_input};
use iced::{Alignment, Element, Length};
use iced_fonts::lucide;

use smartlearn_mock::explain::SUGGESTED_TOPICS;

use crate::component::{LoadingState, SectionCard};
use crate::message::{ExplainMessage, FeatureMessage, Message};
use crate::state::ExplainUi;
use crate::theme::{
    SPACING_MD, SPACING_SM, SPACING_XS, button_primary, button_secondary, muted_text,
    text_input_default,
};

fn msg(inner: ExplainMessage) -> Message {
    Message::Feature(FeatureMessage::Explain(inner))
}

/// Render the explain screen body.
pub fn view<'a>(ui: &'a ExplainUi) -> Element<'a, Message> {
    let input = text_input("What would you like explained? e.g. Photosynthesis", &ui.topic)
        .on_input(|value| msg(ExplainMessage::TopicChanged(value)))
        .on_submit(msg(ExplainMessage::ExplainClicked))
        .padding(SPACING_SM)
        .style(text_input_default);

    let can_submit = ui.task.is_none() && !ui.topic.trim().is_empty();
    let mut explain_button = button(
        row![lucide::wand_sparkles().size(14), text("Explain It!").size(14)]
            .spacing(SPACING_SM)
            .align_y(Alignment::Center),
    )
    .padding([10.0, 20.0])
    .style(button_primary);
    if can_submit {
        explain_button = explain_button.on_press(msg(ExplainMessage::ExplainClicked));
    }

    let prompt_row = row![
        container(input).width(Length::Fill),
        Space::new().width(SPACING_SM),
        explain_button,
    ]
    .align_y(Alignment::Center);

    let mut body = column![prompt_row, Space::new().height(SPACING_MD)];

    if ui.task.is_some() {
        body = body.push(LoadingState::new("Thinking of a simple way to explain this...").view());
    } else if let Some(explanation) = &ui.explanation {
        body = body.push(SectionCard::new("Here's the simple version", text(explanation).size(14)).view());
    } else {
        body = body.push(view_suggested_topics());
    }

    body.into()
}

/// Starter-topic cards shown before the first explanation.
fn view_suggested_topics<'a>() -> Element<'a, Message> {
    let mut rows = column![].spacing(SPACING_SM);
    for pair in SUGGESTED_TOPICS.chunks(2) {
        let mut cards = row![].spacing(SPACING_SM);
        for suggested in pair {
            let card = button(
                column![
                    text(suggested.heading).size(14),
                    Space::new().height(SPACING_XS),
                    text(suggested.blurb).size(12).style(muted_text),
                ]
                .width(Length::Fill),
            )
            .on_press(msg(ExplainMessage::SuggestedTopicClicked(suggested.topic)))
            .padding(SPACING_MD)
            .width(Length::Fill)
            .style(button_secondary);
            cards = cards.push(card);
        }
        rows = rows.push(cards);
    }

    column![
        text("Or pick a topic to get started").size(14).style(muted_text),
        Space::new().height(SPACING_SM),
        rows,
    ]
    .into()
}
