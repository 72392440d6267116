//! Empty and loading state components.
//!
//! Standardized feedback for when there's no content yet or a mock
//! computation is in flight.
//!
//! # Usage
//!
//! ```rust,ignore
//! use smartlearn_gui::component::{EmptyState, LoadingState};
//! use iced_fonts::lucide;
//!
//! EmptyState::new(lucide::upload().size(48), "No file uploaded")
//!     .description("Upload an image of your handwritten notes")
//!     .action("Choose File", Message::Upload)
//!     .view()
//!
//! LoadingState::new("Analyzing your handwriting...").view()
//! ```

use iced::widget::{Space, button, column, container, text};
use iced::{Alignment, Element, Length};
use iced_fonts::lucide;

use crate::theme::{
    SPACING_LG, SPACING_MD, SPACING_SM, button_primary, muted_text, secondary_text,
};

// =============================================================================
// EMPTY STATE
// =============================================================================

/// Empty state with icon, title, description, and optional action.
pub struct EmptyState<'a, M> {
    icon: Element<'a, M>,
    title: String,
    description: Option<String>,
    action: Option<(String, M)>,
}

impl<'a, M: Clone + 'a> EmptyState<'a, M> {
    /// Create a new empty state with icon and title.
    pub fn new(icon: impl Into<Element<'a, M>>, title: impl Into<String>) -> Self {
        Self {
            icon: icon.into(),
            title: title.into(),
            description: None,
            action: None,
        }
    }

    /// Add a description below the title.
    pub fn description(mut self, desc: impl Into<String>) -> Self {
        self.description = Some(desc.into());
        self
    }

    /// Add an action button.
    pub fn action(mut self, label: impl Into<String>, message: M) -> Self {
        self.action = Some((label.into(), message));
        self
    }

    /// Build the element.
    pub fn view(self) -> Element<'a, M> {
        let mut content = column![self.icon, Space::new().height(SPACING_MD)]
            .push(text(self.title).size(16).style(secondary_text));

        if let Some(desc) = self.description {
            content = content
                .push(Space::new().height(SPACING_SM))
                .push(text(desc).size(13).style(muted_text));
        }

        if let Some((label, message)) = self.action {
            content = content.push(Space::new().height(SPACING_LG)).push(
                button(text(label).size(14))
                    .on_press(message)
                    .padding([10.0, 24.0])
                    .style(button_primary),
            );
        }

        container(content.align_x(Alignment::Center))
            .width(Length::Fill)
            .padding(SPACING_LG)
            .center_x(Length::Shrink)
            .into()
    }
}

// =============================================================================
// LOADING STATE
// =============================================================================

/// Loading state shown while a mock computation runs.
pub struct LoadingState {
    title: String,
    description: Option<String>,
}

impl LoadingState {
    /// Create a new loading state with title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
        }
    }

    /// Add a description below the title.
    pub fn description(mut self, desc: impl Into<String>) -> Self {
        self.description = Some(desc.into());
        self
    }

    /// Build the element.
    pub fn view<'a, M: 'a>(self) -> Element<'a, M> {
        let mut content = column![
            lucide::loader().size(32),
            Space::new().height(SPACING_MD),
            text(self.title).size(15).style(secondary_text),
        ]
        .align_x(Alignment::Center);

        if let Some(desc) = self.description {
            content = content
                .push(Space::new().height(SPACING_SM))
                .push(text(desc).size(13).style(muted_text));
        }

        container(content)
            .width(Length::Fill)
            .padding(SPACING_LG)
            .center_x(Length::Shrink)
            .into()
    }
}
