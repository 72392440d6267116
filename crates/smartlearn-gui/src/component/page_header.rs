//! Page header component.
//!
//! Consistent header for feature screens with back button, title, and an
//! optional subtitle.
//!
//! # Usage
//!
//! ```rust,ignore
//! use smartlearn_gui::component::PageHeader;
//!
//! PageHeader::new("Handwriting Recognition")
//!     .subtitle("Convert handwritten notes to digital text")
//!     .back(Message::Feature(FeatureMessage::BackClicked))
//!     .view()
//! ```

use iced::widget::{Space, button, column, container, row, text};
use iced::{Alignment, Element, Length};
use iced_fonts::lucide;

use crate::theme::{SPACING_MD, SPACING_SM, SPACING_XS, button_ghost, secondary_text};

/// Page header with back button, title, and subtitle.
pub struct PageHeader<M> {
    title: String,
    subtitle: Option<String>,
    on_back: Option<M>,
}

impl<M> PageHeader<M> {
    /// Create a new page header with title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            subtitle: None,
            on_back: None,
        }
    }

    /// Add a subtitle below the title.
    pub fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    /// Add a "Back to Dashboard" button.
    pub fn back(mut self, message: M) -> Self {
        self.on_back = Some(message);
        self
    }

    /// Build the element.
    pub fn view<'a>(self) -> Element<'a, M>
    where
        M: Clone + 'a,
    {
        let mut header_row = row![].spacing(SPACING_SM).align_y(Alignment::Center);

        if let Some(on_back) = self.on_back {
            let back_btn = button(
                row![
                    lucide::arrow_left().size(14),
                    text("Back to Dashboard").size(14),
                ]
                .spacing(SPACING_SM)
                .align_y(Alignment::Center),
            )
            .on_press(on_back)
            .padding([8.0, 16.0])
            .style(button_ghost);

            header_row = header_row.push(back_btn);
            header_row = header_row.push(Space::new().width(SPACING_MD));
        }

        let title_block: Element<'a, M> = if let Some(subtitle) = self.subtitle {
            column![
                text(self.title).size(22),
                Space::new().height(SPACING_XS),
                text(subtitle).size(13).style(secondary_text),
            ]
            .into()
        } else {
            text(self.title).size(22).into()
        };

        header_row = header_row.push(title_block);

        container(header_row).width(Length::Fill).into()
    }
}
