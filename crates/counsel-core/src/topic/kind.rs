//! The fixed catalog of guided topics.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::mode::TopicMode;
use crate::error::CounselError;

/// One guided conversation thread.
///
/// The declaration order of the variants is the order used everywhere a
/// stable topic order matters (aggregation, navigation listings).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TopicKind {
    StrengthsWeaknesses,
    ResumeReview,
    AcademicBackground,
    CareerAdvice,
}

impl TopicKind {
    /// All topics in declared order.
    pub const ALL: [TopicKind; 4] = [
        TopicKind::StrengthsWeaknesses,
        TopicKind::ResumeReview,
        TopicKind::AcademicBackground,
        TopicKind::CareerAdvice,
    ];

    /// Stable identifier; also the label used in the composite profile.
    pub fn title(&self) -> &'static str {
        match self {
            Self::StrengthsWeaknesses => "Strengths & Weaknesses",
            Self::ResumeReview => "Resume Review",
            Self::AcademicBackground => "Academic Background",
            Self::CareerAdvice => "Career Advice",
        }
    }

    /// Short name used for navigation commands.
    pub fn slug(&self) -> &'static str {
        match self {
            Self::StrengthsWeaknesses => "strengths",
            Self::ResumeReview => "resume",
            Self::AcademicBackground => "academic",
            Self::CareerAdvice => "advice",
        }
    }

    pub fn heading(&self) -> &'static str {
        match self {
            Self::StrengthsWeaknesses => "Discover Your Strengths & Weaknesses",
            Self::ResumeReview => "Resume Review & Work Experience Analysis",
            Self::AcademicBackground => "Academic Profile Assessment",
            Self::CareerAdvice => "Personalized Career Recommendations",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::StrengthsWeaknesses => {
                "Let's explore your unique abilities and areas for growth."
            }
            Self::ResumeReview => {
                "Upload your resume and we'll analyze your past experiences to highlight your key skills."
            }
            Self::AcademicBackground => {
                "Let's discuss your educational journey and academic interests."
            }
            Self::CareerAdvice => "Based on your profile, we'll suggest suitable career paths.",
        }
    }

    /// How requests for this topic are augmented.
    pub fn mode(&self) -> TopicMode {
        match self {
            Self::StrengthsWeaknesses | Self::AcademicBackground => TopicMode::Plain,
            Self::ResumeReview => TopicMode::ResumeAugmented,
            Self::CareerAdvice => TopicMode::ProfileAugmented,
        }
    }

    /// True for the topic that consumes the composite profile.
    pub fn is_advice(&self) -> bool {
        matches!(self.mode(), TopicMode::ProfileAugmented)
    }
}

impl fmt::Display for TopicKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

impl FromStr for TopicKind {
    type Err = CounselError;

    /// Accepts either the slug or the title, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .into_iter()
            .find(|kind| {
                kind.slug().eq_ignore_ascii_case(needle)
                    || kind.title().eq_ignore_ascii_case(needle)
            })
            .ok_or_else(|| CounselError::not_found("topic", needle))
    }
}
