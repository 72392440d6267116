//! Exam-scanner screen.

use iced::widget::{Space, button, column, container, row, text};
use iced::{Alignment, Border, Element, Length};
use iced_fonts::lucide;

use smartlearn_mock::exam::{Difficulty, ResourceKind, ScanOutcome, StudyResource};

use crate::component::{EmptyState, LoadingState, SectionCard, StatTile, panel};
use crate::message::{ExamMessage, FeatureMessage, Message};
use crate::state::{ExamUi, UploadedFile};
use crate::theme::{
    BORDER_RADIUS_SM, SPACING_MD, SPACING_SM, SPACING_XS, button_secondary, muted_text,
    secondary_text,
};

fn msg(inner: ExamMessage) -> Message {
    Message::Feature(FeatureMessage::Exam(inner))
}

/// Render the exam-scanner screen body.
pub fn view<'a>(ui: &'a ExamUi) -> Element<'a, Message> {
    let mut body = column![];

    if let Some(file) = &ui.file {
        body = body
            .push(view_file_info(file))
            .push(Space::new().height(SPACING_MD));

        if ui.task.is_some() {
            body = body.push(
                LoadingState::new("Scanning your question...")
                    .description("Finding the best study resources")
                    .view(),
            );
        } else if let Some(outcome) = &ui.outcome {
            body = body.push(view_outcome(outcome));
        }
    } else {
        body = body.push(
            EmptyState::new(lucide::search().size(48), "Scan an exam question")
                .description("Upload a photo of the question you're stuck on")
                .action("Choose File", msg(ExamMessage::UploadClicked))
                .view(),
        );
    }

    body.push(Space::new().height(SPACING_MD))
        .push(view_analysis_stats())
        .into()
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
            button(text("Scan Another").size(12))
                .on_press(msg(ExamMessage::UploadClicked))
                .padding([6.0, 12.0])
                .style(button_secondary),
        ]
        .align_y(Alignment::Center),
    )
}

/// Detected question plus the recommended resources.
fn view_outcome<'a>(outcome: &'a ScanOutcome) -> Element<'a, Message> {
    let resources = column(
        outcome
            .resources
            .iter()
            .map(|resource| view_resource(resource)),
    )
    .spacing(SPACING_SM);

    column![
        SectionCard::new("Detected Question", text(&outcome.question).size(14)).view(),
        Space::new().height(SPACING_MD),
        SectionCard::new("Recommended Resources", resources).view(),
    ]
    .into()
}

/// A single study resource row.
fn view_resource<'a>(resource: &'a StudyResource) -> Element<'a, Message> {
    let icon: Element<'a, Message> = match resource.kind {
        ResourceKind::VideoLesson => lucide::play().size(14).into(),
        ResourceKind::PracticeSet => lucide::pencil().size(14).into(),
        ResourceKind::TheoryNotes => lucide::file_text().size(14).into(),
        ResourceKind::SimilarQuestions => lucide::book_open().size(14).into(),
    };

    container(
        row![
            icon,
            Space::new().width(SPACING_SM),
            column![
                row![
                    text(resource.title).size(14),
                    Space::new().width(SPACING_SM),
                    kind_badge(resource.kind),
                    Space::new().width(SPACING_XS),
                    difficulty_badge(resource.difficulty),
                ]
                .align_y(Alignment::Center),
                Space::new().height(SPACING_XS),
                text(resource.description).size(12).style(secondary_text),
                text(resource.meta).size(11).style(muted_text),
            ],
        ]
        .align_y(Alignment::Center),
    )
    .padding(SPACING_SM)
    .width(Length::Fill)
    .into()
}

/// Colored resource-kind chip.
fn kind_badge<'a>(kind: ResourceKind) -> Element<'a, Message> {
    container(text(kind.label()).size(11))
        .padding([2.0, 8.0])
        .style(move |theme: &iced::Theme| {
            let palette = theme.extended_palette();
            let pair = match kind {
                ResourceKind::VideoLesson => palette.danger.weak,
                ResourceKind::PracticeSet => palette.primary.weak,
                ResourceKind::TheoryNotes => palette.success.weak,
                ResourceKind::SimilarQuestions => palette.background.strong,
            };
            container::Style {
                background: Some(pair.color.into()),
                text_color: Some(pair.text),
                border: Border {
                    radius: BORDER_RADIUS_SM.into(),
                    ..Default::default()
                },
                ..Default::default()
            }
        })
        .into()
}

/// Closing "Smart Question Analysis" stats strip.
fn view_analysis_stats<'a>() -> Element<'a, Message> {
    SectionCard::new(
        "Smart Question Analysis",
        row![
            StatTile::new("AI", "Powered Recognition").view(),
            StatTile::new("1000+", "Question Types").view(),
            StatTile::new("500+", "Video Lessons").view(),
            StatTile::new("95%", "Accuracy Rate").view(),
        ]
        .spacing(SPACING_SM),
    )
    .view()
}

/// Colored difficulty chip.
fn difficulty_badge<'a>(difficulty: Difficulty) -> Element<'a, Message> {
    container(text(difficulty.label()).size(11))
        .padding([2.0, 8.0])
        .style(move |theme: &iced::Theme| {
            let palette = theme.extended_palette();
            let pair = match difficulty {
                Difficulty::Beginner => palette.success.weak,
                Difficulty::Intermediate => palette.warning.weak,
                Difficulty::Advanced => palette.danger.weak,
            };
            container::Style {
                background: Some(pair.color.into()),
                text_color: Some(pair.text),
                border: Border {
                    radius: BORDER_RADIUS_SM.into(),
                    ..Default::default()
                },
                ..Default::default()
            }
        })
        .into()
}
