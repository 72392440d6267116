//! The closed set of dashboard features.

use std::fmt;
use std::str::FromStr;

/// One of the six learning tools reachable from the dashboard overview.
///
/// This is a closed enumeration: feature selection is dispatched over these
/// variants with compile-time exhaustiveness, never over free-form strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeatureId {
    /// "Explain Like I'm Five" - topic simplification.
    ExplainLikeChild,
    /// Regional language availability.
    LocalLanguage,
    /// Handwritten notes to digital text.
    Handwriting,
    /// Exam question scanning and study resources.
    ExamScanner,
    /// Chat with an uploaded PDF or video.
    ChatPdf,
    /// Learning progress dashboard.
    Progress,
}

impl FeatureId {
    /// All features in dashboard display order.
    pub const ALL: [FeatureId; 6] = [
        Self::ExplainLikeChild,
        Self::LocalLanguage,
        Self::Handwriting,
        Self::ExamScanner,
        Self::ChatPdf,
        Self::Progress,
    ];

    /// Stable string id, used in logs and window titles.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ExplainLikeChild => "explain-child",
            Self::LocalLanguage => "local-language",
            Self::Handwriting => "handwriting",
            Self::ExamScanner => "exam-scanner",
            Self::ChatPdf => "chat-pdf",
            Self::Progress => "progress",
        }
    }

    /// Display title shown on the dashboard card and feature header.
    pub fn title(&self) -> &'static str {
        match self {
            Self::ExplainLikeChild => "Explain Like I'm Five",
            Self::LocalLanguage => "Local Language Support",
            Self::Handwriting => "Handwriting Recognition",
            Self::ExamScanner => "Exam Prep Scanner",
            Self::ChatPdf => "Chat with PDF/Video",
            Self::Progress => "Progress Dashboard",
        }
    }

    /// One-line description for the dashboard card.
    pub fn description(&self) -> &'static str {
        match self {
            Self::ExplainLikeChild => "Simplify complex concepts with visuals and easy language",
            Self::LocalLanguage => "Learn in your preferred regional language",
            Self::Handwriting => "Convert handwritten notes to digital format",
            Self::ExamScanner => "Scan questions and get learning resources",
            Self::ChatPdf => "Interactive learning with AI assistance",
            Self::Progress => "Track your learning journey and achievements",
        }
    }
}

impl fmt::Display for FeatureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown feature id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownFeature(pub String);

impl fmt::Display for UnknownFeature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown feature id: {}", self.0)
    }
}

impl std::error::Error for UnknownFeature {}

impl FromStr for FeatureId {
    type Err = UnknownFeature;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| UnknownFeature(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_ids_round_trip() {
        for feature in FeatureId::ALL {
            assert_eq!(feature.as_str().parse::<FeatureId>(), Ok(feature));
        }
    }

    #[test]
    fn unknown_id_is_rejected() {
        assert!("explain".parse::<FeatureId>().is_err());
        assert!("".parse::<FeatureId>().is_err());
    }
}
