//! Handwriting-recognition screen.

use iced::widget::{Space, button, column, row, text};
use iced::{Alignment, Element, Length};
use iced_fonts::lucide;

use crate::component::{EmptyState, LoadingState, SectionCard, panel};
use crate::message::{FeatureMessage, HandwritingMessage, Message};
use crate::state::{HandwritingUi, UploadedFile};
use crate::theme::{SPACING_MD, SPACING_SM, button_secondary, muted_text, secondary_text};

fn msg(inner: HandwritingMessage) -> Message {
    Message::Feature(FeatureMessage::Handwriting(inner))
}

/// Render the handwriting screen body.
pub fn view<'a>(ui: &'a HandwritingUi) -> Element<'a, Message> {
    let Some(file) = &ui.file else {
        return EmptyState::new(lucide::upload().size(48), "Upload your handwritten notes")
            .description("PNG or JPG images of your notes work best")
            .action("Choose File", msg(HandwritingMessage::UploadClicked))
            .view();
    };

    let mut body = column![view_file_info(file), Space::new().height(SPACING_MD)];

    if ui.task.is_some() {
        body = body.push(
            LoadingState::new("Analyzing your handwriting...")
                .description("This usually takes a few seconds")
                .view(),
        );
    } else if let Some(transcript) = &ui.transcript {
        let actions = row![
            button(
                row![lucide::copy().size(13), text("Copy Text").size(13)]
                    .spacing(SPACING_SM)
                    .align_y(Alignment::Center),
            )
            .on_press(msg(HandwritingMessage::CopyClicked))
            .padding([8.0, 14.0])
            .style(button_secondary),
            button(
                row![lucide::download().size(13), text("Download").size(13)]
                    .spacing(SPACING_SM)
                    .align_y(Alignment::Center),
            )
            .on_press(msg(HandwritingMessage::DownloadClicked))
            .padding([8.0, 14.0])
            .style(button_secondary),
        ]
        .spacing(SPACING_SM);

        body = body
            .push(SectionCard::new("Converted Text", text(transcript).size(14)).view())
            .push(Space::new().height(SPACING_MD))
            .push(actions);

        if let Some(status) = &ui.save_status {
            body = body
                .push(Space::new().height(SPACING_SM))
                .push(text(status).size(12).style(muted_text));
        }
    }

    body.into()
}

/// The uploaded file summary with a re-upload button.
fn view_file_info<'a>(file: &'a UploadedFile) -> Element<'a, Message> {
    panel(
        row![
            lucide::file_text().size(16),
            Space::new().width(SPACING_SM),
            column![
                text(&file.name).size(14),
                text(file.size_label()).size(12).style(secondary_text),
            ],
            Space::new().width(Length::Fill),
            button(text("Upload Another").size(12))
                .on_press(msg(HandwritingMessage::UploadClicked))
                .padding([6.0, 12.0])
                .style(button_secondary),
        ]
        .align_y(Alignment::Center),
    )
    .into()
}
