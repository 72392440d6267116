//! Stat tile component for the progress dashboard.
//!
//! Compact card showing a single headline number with a label.
//!
//! # Usage
//!
//! ```rust,ignore
//! use smartlearn_gui::component::StatTile;
//!
//! StatTile::new("20", "Sessions")
//!     .icon(lucide::play().size(18))
//!     .view()
//! ```

use iced::widget::{Space, column, container, row, text};
use iced::{Alignment, Element, Length};

use crate::theme::{SPACING_MD, SPACING_SM, SPACING_XS, card_container, muted_text};

/// Headline-number tile with a label and optional icon.
pub struct StatTile<'a, M> {
    value: String,
    label: String,
    icon: Option<Element<'a, M>>,
}

impl<'a, M: 'a> StatTile<'a, M> {
    /// Create a new stat tile with value and label.
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            icon: None,
        }
    }

    /// Add an icon next to the value.
    pub fn icon(mut self, icon: impl Into<Element<'a, M>>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Build the element.
    pub fn view(self) -> Element<'a, M> {
        let value_row: Element<'a, M> = if let Some(icon) = self.icon {
            row![icon, Space::new().width(SPACING_SM), text(self.value).size(26)]
                .align_y(Alignment::Center)
                .into()
        } else {
            text(self.value).size(26).into()
        };

        container(column![
            value_row,
            Space::new().height(SPACING_XS),
            text(self.label).size(12).style(muted_text),
        ])
        .padding(SPACING_MD)
        .width(Length::Fill)
        .style(card_container)
        .into()
    }
}
