//! Section card and panel components.
//!
//! Containers for grouping related content with consistent styling.
//!
//! # Usage
//!
//! ```rust,ignore
//! use smartlearn_gui::component::{SectionCard, panel};
//! use iced_fonts::lucide;
//!
//! SectionCard::new("This Week", content)
//!     .icon(lucide::calendar().size(14))
//!     .view()
//!
//! panel(my_content)
//! ```

use iced::widget::{Space, column, container, row, text};
use iced::{Alignment, Element, Length};

use crate::theme::{SPACING_MD, SPACING_SM, card_container, secondary_text};

// =============================================================================
// SECTION CARD
// =============================================================================

/// A titled section card with optional icon.
///
/// Use for grouping related content with a header.
pub struct SectionCard<'a, M> {
    title: String,
    icon: Option<Element<'a, M>>,
    content: Element<'a, M>,
}

impl<'a, M: 'a> SectionCard<'a, M> {
    /// Create a new section card with title and content.
    pub fn new(title: impl Into<String>, content: impl Into<Element<'a, M>>) -> Self {
        Self {
            title: title.into(),
            icon: None,
            content: content.into(),
        }
    }

    /// Add an icon to the header.
    pub fn icon(mut self, icon: impl Into<Element<'a, M>>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Build the element.
    pub fn view(self) -> Element<'a, M> {
        let header: Element<'a, M> = if let Some(icon) = self.icon {
            row![
                icon,
                Space::new().width(SPACING_SM),
                text(self.title).size(14).style(secondary_text),
            ]
            .align_y(Alignment::Center)
            .into()
        } else {
            text(self.title).size(14).style(secondary_text).into()
        };

        container(
            column![header, Space::new().height(SPACING_SM), self.content].width(Length::Fill),
        )
        .padding(SPACING_MD)
        .width(Length::Fill)
        .style(card_container)
        .into()
    }
}

// =============================================================================
// PANEL
// =============================================================================

/// Simple panel wrapper with card styling.
pub fn panel<'a, M: 'a>(content: impl Into<Element<'a, M>>) -> Element<'a, M> {
    container(content)
        .padding(SPACING_MD)
        .width(Length::Fill)
        .style(card_container)
        .into()
}
