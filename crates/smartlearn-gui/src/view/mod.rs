//! View functions - pure renderers over the application state.
//!
//! One module per screen:
//! - `landing` - Public landing page
//! - `login` - Login / sign-up card
//! - `dashboard` - Dashboard overview (feature grid)
//! - `feature/` - The six feature screens

pub mod dashboard;
pub mod feature;
pub mod landing;
pub mod login;

pub use dashboard::view_overview;
pub use feature::view_feature;
pub use landing::view_landing;
pub use login::view_login;

use iced::Element;
use iced_fonts::lucide;

use smartlearn_core::FeatureId;

use crate::message::Message;

/// The lucide icon for a feature, at the given size.
pub(crate) fn feature_icon(id: FeatureId, size: f32) -> Element<'static, Message> {
    match id {
        FeatureId::ExplainLikeChild => lucide::wand_sparkles().size(size).into(),
        FeatureId::LocalLanguage => lucide::book_open().size(size).into(),
        FeatureId::Handwriting => lucide::pencil().size(size).into(),
        FeatureId::ExamScanner => lucide::search().size(size).into(),
        FeatureId::ChatPdf => lucide::message_square().size(size).into(),
        FeatureId::Progress => lucide::monitor().size(size).into(),
    }
}
