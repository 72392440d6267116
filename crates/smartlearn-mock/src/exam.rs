//! Mock exam question scanning and study-resource lookup.

use std::time::Duration;

/// Mock extraction + lookup time.
pub const SCAN_DELAY: Duration = Duration::from_millis(2500);

/// Difficulty label attached to a study resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
        }
    }
}

/// Kind of study resource recommended for a scanned question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    VideoLesson,
    PracticeSet,
    TheoryNotes,
    SimilarQuestions,
}

impl ResourceKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::VideoLesson => "Video Lesson",
            Self::PracticeSet => "Practice Set",
            Self::TheoryNotes => "Theory Notes",
            Self::SimilarQuestions => "Similar Questions",
        }
    }
}

/// One recommended study resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudyResource {
    pub kind: ResourceKind,
    /// Resource title.
    pub title: &'static str,
    /// Size metric shown next to the title ("12:34", "25 questions", ...).
    pub meta: &'static str,
    pub difficulty: Difficulty,
    pub description: &'static str,
}

/// Result of "scanning" an exam question image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOutcome {
    /// The extracted question text.
    pub question: String,
    /// Recommended resources for the question's topic.
    pub resources: Vec<StudyResource>,
}

/// "Scan" an uploaded question image after a fixed delay.
///
/// Always yields the same derivative question and resource set.
pub async fn scan_question(file_name: &str) -> ScanOutcome {
    tracing::debug!(file_name, "running mock exam scan");
    tokio::time::sleep(SCAN_DELAY).await;
    ScanOutcome {
        question: "What is the derivative of f(x) = 3x\u{B2} + 2x - 5?".to_owned(),
        resources: vec![
            StudyResource {
                kind: ResourceKind::VideoLesson,
                title: "Derivatives of Polynomial Functions",
                meta: "12:34",
                difficulty: Difficulty::Intermediate,
                description:
                    "Complete guide to finding derivatives of polynomial functions with examples",
            },
            StudyResource {
                kind: ResourceKind::PracticeSet,
                title: "Derivative Rules Practice",
                meta: "25 questions",
                difficulty: Difficulty::Beginner,
                description: "Solve 25 problems on basic derivative rules",
            },
            StudyResource {
                kind: ResourceKind::TheoryNotes,
                title: "Calculus Fundamentals",
                meta: "8 pages",
                difficulty: Difficulty::Intermediate,
                description: "Comprehensive notes covering derivative rules and applications",
            },
            StudyResource {
                kind: ResourceKind::SimilarQuestions,
                title: "Previous Year Papers",
                meta: "15 questions",
                difficulty: Difficulty::Advanced,
                description: "Similar derivative problems from past examinations",
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn scan_yields_question_and_four_resources() {
        let outcome = scan_question("paper.jpg").await;
        assert!(outcome.question.contains("derivative"));
        assert_eq!(outcome.resources.len(), 4);
        assert_eq!(outcome.resources[0].kind, ResourceKind::VideoLesson);
    }

    #[tokio::test]
    async fn scan_recommends_one_resource_of_each_kind() {
        let outcome = scan_question("paper.jpg").await;
        let kinds: Vec<ResourceKind> = outcome.resources.iter().map(|r| r.kind).collect();
        assert_eq!(
            kinds,
            [
                ResourceKind::VideoLesson,
                ResourceKind::PracticeSet,
                ResourceKind::TheoryNotes,
                ResourceKind::SimilarQuestions,
            ]
        );
    }
}
