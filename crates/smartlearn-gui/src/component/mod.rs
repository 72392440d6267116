//! Reusable UI components.
//!
//! Builder-pattern components that return `Element`s, styled through the
//! Scholar theme so they adapt to light and dark mode.

pub mod empty_state;
pub mod feature_card;
pub mod page_header;
pub mod section_card;
pub mod stat_tile;

pub use empty_state::{EmptyState, LoadingState};
pub use feature_card::FeatureCard;
pub use page_header::PageHeader;
pub use section_card::{SectionCard, panel};
pub use stat_tile::StatTile;
