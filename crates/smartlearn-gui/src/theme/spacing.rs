//! Spacing constants for consistent layout throughout the application.
//!
//! All values are in pixels (f32) and follow a consistent scale.

/// Extra small spacing - tight gaps between related elements
pub const SPACING_XS: f32 = 4.0;

/// Small spacing - small gaps, icon margins
pub const SPACING_SM: f32 = 8.0;

/// Medium spacing - default padding, standard gaps
pub const SPACING_MD: f32 = 16.0;

/// Large spacing - section padding, major gaps
pub const SPACING_LG: f32 = 24.0;

/// Extra large spacing - page margins, large separations
pub const SPACING_XL: f32 = 32.0;

/// Double extra large spacing - hero sections, major divisions
pub const SPACING_XXL: f32 = 48.0;

/// Small radius - buttons, inputs, chips
pub const BORDER_RADIUS_SM: f32 = 6.0;

/// Medium radius - cards, panels
pub const BORDER_RADIUS_MD: f32 = 10.0;

/// Large radius - hero cards, feature tiles
pub const BORDER_RADIUS_LG: f32 = 14.0;

/// Thin border width - default for cards and inputs
pub const BORDER_WIDTH_THIN: f32 = 1.0;
