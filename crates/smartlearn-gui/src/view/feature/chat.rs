//! Chat-with-PDF screen.

use iced::widget::{Space, button, column, container, row, scrollable, text, text_input};
use iced::{Alignment, Border, Element, Length};
use iced_fonts::lucide;

use smartlearn_mock::chat::KEY_CONCEPTS_PROMPT;

use crate::component::{EmptyState, panel};
use crate::message::{ChatMessage, FeatureMessage, Message};
use crate::state::{ChatAuthor, ChatEntry, ChatUi, UploadedFile};
use crate::theme::{
    BORDER_RADIUS_MD, SPACING_MD, SPACING_SM, SPACING_XS, button_ghost, button_primary,
    button_secondary, muted_text, secondary_text, text_input_default,
};

fn msg(inner: ChatMessage) -> Message {
    Message::Feature(FeatureMessage::Chat(inner))
}

/// Render the chat screen body.
pub fn view<'a>(ui: &'a ChatUi) -> Element<'a, Message> {
    let Some(file) = &ui.file else {
        return column![
            EmptyState::new(lucide::message_square().size(48), "Chat with your study material")
                .description("Upload a PDF or video and ask questions about its contents")
                .action("Upload File", msg(ChatMessage::UploadClicked))
                .view(),
            container(view_external_tool_link())
                .width(Length::Fill)
                .center_x(Length::Shrink),
        ]
        .into();
    };

    let transcript = scrollable(
        column(ui.entries.iter().map(view_entry))
            .spacing(SPACING_SM)
            .width(Length::Fill),
    )
    .height(Length::Fixed(320.0))
    .anchor_bottom();

    let mut body = column![
        view_file_info(file),
        Space::new().height(SPACING_MD),
        transcript,
    ];

    if ui.task.is_some() {
        body = body
            .push(Space::new().height(SPACING_SM))
            .push(
                row![
                    lucide::loader().size(13),
                    text("Assistant is thinking...").size(12).style(muted_text),
                ]
                .spacing(SPACING_XS)
                .align_y(Alignment::Center),
            );
    }

    body.push(Space::new().height(SPACING_MD))
        .push(view_input_row(ui))
        .push(Space::new().height(SPACING_SM))
        .push(
            row![
                button(text(KEY_CONCEPTS_PROMPT).size(12))
                    .on_press(msg(ChatMessage::QuickPromptClicked))
                    .padding([6.0, 12.0])
                    .style(button_secondary),
                Space::new().width(Length::Fill),
                view_external_tool_link(),
            ]
            .align_y(Alignment::Center),
        )
        .into()
}

/// The uploaded document summary.
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
                .on_press(msg(ChatMessage::UploadClicked))
                .padding([6.0, 12.0])
                .style(button_secondary),
        ]
        .align_y(Alignment::Center),
    )
}

/// One chat bubble, aligned by author.
fn view_entry<'a>(entry: &'a ChatEntry) -> Element<'a, Message> {
    let is_student = entry.author == ChatAuthor::Student;

    let bubble = container(text(&entry.content).size(13))
        .padding([SPACING_SM, SPACING_MD])
        .max_width(520.0)
        .style(move |theme: &iced::Theme| {
            let palette = theme.extended_palette();
            let pair = if is_student {
                palette.primary.weak
            } else {
                palette.background.weak
            };
            container::Style {
                background: Some(pair.color.into()),
                text_color: Some(pair.text),
                border: Border {
                    radius: BORDER_RADIUS_MD.into(),
                    ..Default::default()
                },
                ..Default::default()
            }
        });

    if is_student {
        row![Space::new().width(Length::Fill), bubble].into()
    } else {
        row![bubble, Space::new().width(Length::Fill)].into()
    }
}

/// Prompt input plus the send button.
fn view_input_row<'a>(ui: &'a ChatUi) -> Element<'a, Message> {
    let input = text_input("Ask a question about the document...", &ui.input)
        .on_input(|value| msg(ChatMessage::InputChanged(value)))
        .on_submit(msg(ChatMessage::SendClicked))
        .padding(SPACING_SM)
        .style(text_input_default);

    let can_send = ui.task.is_none() && !ui.input.trim().is_empty();
    let mut send = button(
        row![text("Send").size(13), lucide::arrow_right().size(13)]
            .spacing(SPACING_XS)
            .align_y(Alignment::Center),
    )
    .padding([9.0, 18.0])
    .style(button_primary);
    if can_send {
        send = send.on_press(msg(ChatMessage::SendClicked));
    }

    row![
        container(input).width(Length::Fill),
        Space::new().width(SPACING_SM),
        send,
    ]
    .align_y(Alignment::Center)
    .into()
}

/// Link out to the external chat tool.
fn view_external_tool_link<'a>() -> Element<'a, Message> {
    button(
        row![
            text("Open full chat tool").size(12),
            lucide::external_link().size(12),
        ]
        .spacing(SPACING_XS)
        .align_y(Alignment::Center),
    )
    .on_press(msg(ChatMessage::OpenChatToolClicked))
    .padding([6.0, 12.0])
    .style(button_ghost)
    .into()
}
