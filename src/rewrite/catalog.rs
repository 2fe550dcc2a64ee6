//! Context and tone catalogue for style rewriting.
//!
//! The catalogue is a fixed, immutable registry built once at startup: each
//! context carries an ordered set of tone variants, and the first variant is
//! that context's default. Lookups never allocate and require no locking.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::error::RewriteError;

/// Communicative situation a rewrite targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Context {
    /// Workplace correspondence.
    BusinessEmail,
    /// Papers, theses, and other scholarly writing.
    Academic,
    /// Everyday conversation.
    Casual,
}

impl Context {
    /// All contexts in catalogue order.
    pub const ALL: [Self; 3] = [Self::BusinessEmail, Self::Academic, Self::Casual];

    /// Wire label used on the request/response boundary.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::BusinessEmail => "business-email",
            Self::Academic => "academic",
            Self::Casual => "casual",
        }
    }
}

impl fmt::Display for Context {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.label())
    }
}

/// Parse error for [`Context`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "unsupported context '{value}': valid options are 'business-email', 'academic', or 'casual'"
)]
pub struct ContextParseError {
    value: String,
}

impl FromStr for Context {
    type Err = ContextParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "business-email" => Ok(Self::BusinessEmail),
            "academic" => Ok(Self::Academic),
            "casual" => Ok(Self::Casual),
            _ => Err(ContextParseError {
                value: value.to_owned(),
            }),
        }
    }
}

impl From<ContextParseError> for RewriteError {
    fn from(error: ContextParseError) -> Self {
        Self::UnknownContext { value: error.value }
    }
}

/// A named style option within a [`Context`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToneVariant {
    name: String,
    icon: String,
    description: String,
}

impl ToneVariant {
    fn new(name: impl Into<String>, icon: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            icon: icon.into(),
            description: description.into(),
        }
    }

    /// Tone name, unique within its context.
    #[must_use]
    pub const fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Display glyph shown next to the tone name.
    #[must_use]
    pub const fn icon(&self) -> &str {
        self.icon.as_str()
    }

    /// Human description of when the tone fits.
    #[must_use]
    pub const fn description(&self) -> &str {
        self.description.as_str()
    }
}

/// Immutable registry of contexts and their ordered tone variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToneCatalog {
    business_email: [ToneVariant; 3],
    academic: [ToneVariant; 3],
    casual: [ToneVariant; 3],
}

impl ToneCatalog {
    /// Builds the standard catalogue: three tones per context, first is the
    /// context's default.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            business_email: [
                ToneVariant::new(
                    "정중한",
                    "🤝",
                    "일반적인 업무 상황에 적합한 정중하고 전문적인 톤",
                ),
                ToneVariant::new(
                    "격식있는",
                    "👔",
                    "중요한 비즈니스 미팅이나 공식 문서에 적합한 격식 있는 톤",
                ),
                ToneVariant::new("간결한", "⚡", "빠른 업무 처리를 위한 간결하고 효율적인 톤"),
            ],
            academic: [
                ToneVariant::new("학술적", "🎓", "논문이나 연구서에 적합한 객관적이고 전문적인 톤"),
                ToneVariant::new("분석적", "🔍", "데이터와 근거를 중시하는 분석적이고 논리적인 톤"),
                ToneVariant::new("설명적", "📚", "복잡한 개념을 명확하게 설명하는 교육적인 톤"),
            ],
            casual: [
                ToneVariant::new("친근한", "😊", "일상 대화에 적합한 편안하고 친근한 톤"),
                ToneVariant::new("캐주얼한", "😎", "편안하고 자연스러운 일상적인 대화 톤"),
                ToneVariant::new("재미있는", "😄", "유머와 재미를 더한 활기찬 톤"),
            ],
        }
    }

    const fn entries(&self, context: Context) -> &[ToneVariant; 3] {
        match context {
            Context::BusinessEmail => &self.business_email,
            Context::Academic => &self.academic,
            Context::Casual => &self.casual,
        }
    }

    /// Ordered tone variants available for a context. Never empty.
    #[must_use]
    pub const fn tones_for(&self, context: Context) -> &[ToneVariant] {
        self.entries(context)
    }

    /// The context's designated default tone: the first catalogue entry.
    #[must_use]
    pub const fn default_tone(&self, context: Context) -> &ToneVariant {
        let [first, _, _] = self.entries(context);
        first
    }

    /// Resolves a requested tone name, or the context default when `tone` is
    /// `None`.
    ///
    /// # Errors
    ///
    /// Returns [`RewriteError::UnknownTone`] when the name is not in the
    /// context's tone set.
    pub fn resolve(
        &self,
        context: Context,
        tone: Option<&str>,
    ) -> Result<&ToneVariant, RewriteError> {
        tone.map_or_else(
            || Ok(self.default_tone(context)),
            |name| {
                self.entries(context)
                    .iter()
                    .find(|variant| variant.name() == name)
                    .ok_or_else(|| RewriteError::UnknownTone {
                        tone: name.to_owned(),
                        context,
                    })
            },
        )
    }
}
