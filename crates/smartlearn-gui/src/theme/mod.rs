//! Scholar theme for SmartLearn.
//!
//! A light/dark indigo theme built on Iced's palette system:
//! - Color palettes and theme creation (`palette`)
//! - Spacing constants (`spacing`)
//! - Widget style functions (`style`)

pub mod palette;
pub mod spacing;
pub mod style;

pub use palette::{ThemeMode, scholar_theme};
pub use spacing::{
    BORDER_RADIUS_LG, BORDER_RADIUS_MD, BORDER_RADIUS_SM, BORDER_WIDTH_THIN, SPACING_LG,
    SPACING_MD, SPACING_SM, SPACING_XL, SPACING_XS, SPACING_XXL,
};
pub use style::{
    button_ghost, button_primary, button_secondary, card_container, hero_container, muted_text,
    secondary_text, text_input_default,
};
