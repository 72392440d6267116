//! Feature screen views.
//!
//! Each feature renders inside the same scaffold: a page header with the
//! shared "Back to Dashboard" action, then the feature body.

mod chat;
mod exam;
mod explain;
mod handwriting;
mod language;
mod progress;

use iced::widget::{container, scrollable};
use iced::{Element, Length};

use crate::component::PageHeader;
use crate::message::{FeatureMessage, Message};
use crate::state::FeatureView;
use crate::theme::SPACING_XL;

/// Render the active feature screen.
pub fn view_feature<'a>(feature: &'a FeatureView) -> Element<'a, Message> {
    let id = feature.id();

    let body: Element<'a, Message> = match feature {
        FeatureView::Explain(ui) => explain::view(ui),
        FeatureView::Language(ui) => language::view(ui),
        FeatureView::Handwriting(ui) => handwriting::view(ui),
        FeatureView::Exam(ui) => exam::view(ui),
        FeatureView::Chat(ui) => chat::view(ui),
        FeatureView::Progress(ui) => progress::view(ui),
    };

    let header = PageHeader::new(id.title())
        .subtitle(id.description())
        .back(Message::Feature(FeatureMessage::BackClicked))
        .view();

    let content = iced::widget::column![header, body]
        .spacing(SPACING_XL)
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
