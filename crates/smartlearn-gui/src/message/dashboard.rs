//! Dashboard overview messages.

use smartlearn_core::FeatureId;

/// Messages for the dashboard overview (feature grid).
#[derive(Debug, Clone)]
pub enum DashboardMessage {
    /// User clicked a feature card.
    FeatureClicked(FeatureId),
    /// User clicked the logout button.
    LogoutClicked,
    /// Cycle the theme mode (light -> dark -> system).
    ThemeCycled,
}
