//! Feature card component for the dashboard grid.
//!
//! Clickable card showing a feature's icon, title, and description.
//!
//! # Usage
//!
//! ```rust,ignore
//! use smartlearn_gui::component::FeatureCard;
//!
//! FeatureCard::new("Handwriting Recognition", Message::Click)
//!     .icon(lucide::pen_line().size(24))
//!     .description("Convert handwritten notes to digital text")
//!     .view()
//! ```

use iced::widget::{Space, button, column, text};
use iced::{Border, Element, Length};

use crate::theme::{
    BORDER_RADIUS_LG, BORDER_WIDTH_THIN, SPACING_MD, SPACING_SM, SPACING_XS, secondary_text,
};

/// Clickable feature card with icon, title, and description.
pub struct FeatureCard<'a, M> {
    title: String,
    description: Option<String>,
    icon: Option<Element<'a, M>>,
    on_click: M,
}

impl<'a, M: Clone + 'a> FeatureCard<'a, M> {
    /// Create a new feature card.
    pub fn new(title: impl Into<String>, on_click: M) -> Self {
        Self {
            title: title.into(),
            description: None,
            icon: None,
            on_click,
        }
    }

    /// Set the feature icon.
    pub fn icon(mut self, icon: impl Into<Element<'a, M>>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Set the description shown below the title.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Build the feature card element.
    pub fn view(self) -> Element<'a, M> {
        let mut content = column![].width(Length::Fill);

        if let Some(icon) = self.icon {
            content = content.push(icon).push(Space::new().height(SPACING_SM));
        }

        content = content.push(text(self.title).size(16));

        if let Some(description) = self.description {
            content = content
                .push(Space::new().height(SPACING_XS))
                .push(text(description).size(13).style(secondary_text));
        }

        button(content.padding(SPACING_MD))
            .on_press(self.on_click)
            .padding(0.0)
            .width(Length::Fill)
            .style(|theme, status| {
                let palette = theme.extended_palette();
                let (background, border_color) = match status {
                    button::Status::Hovered | button::Status::Pressed => {
                        (palette.background.weak.color, palette.primary.base.color)
                    }
                    _ => (
                        palette.background.base.color,
                        palette.background.strong.color,
                    ),
                };
                button::Style {
                    background: Some(background.into()),
                    text_color: palette.background.base.text,
                    border: Border {
                        radius: BORDER_RADIUS_LG.into(),
                        width: BORDER_WIDTH_THIN,
                        color: border_color,
                    },
                    ..Default::default()
                }
            })
            .into()
    }
}
