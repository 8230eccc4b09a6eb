//! Keyword mentor - canned replies picked by topic keywords.

use async_trait::async_trait;

use crate::error::MentorError;
use crate::trait_def::{Mentor, MentorResponse};

/// Topic detected in a student's message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReplyCategory {
    /// Errors, bugs, issues
    Debugging,
    /// React and components
    React,
    /// CSS, styling, Tailwind
    Styling,
    /// APIs, fetching, data
    Data,
    /// Asking for help or being stuck
    Help,
    /// Anything else
    General,
}

impl ReplyCategory {
    /// Checked in order; the first category with a matching keyword wins.
    const KEYWORDS: [(ReplyCategory, &'static [&'static str]); 5] = [
        (ReplyCategory::Debugging, &["error", "bug", "issue"]),
        (ReplyCategory::React, &["react", "component"]),
        (ReplyCategory::Styling, &["css", "style", "tailwind"]),
        (ReplyCategory::Data, &["api", "fetch", "data"]),
        (ReplyCategory::Help, &["help", "stuck"]),
    ];

    /// Classify `text` by case-insensitive substring match.
    pub fn classify(text: &str) -> Self {
        let text = text.to_lowercase();
        Self::KEYWORDS
            .iter()
            .find(|(_, keywords)| keywords.iter().any(|k| text.contains(k)))
            .map_or(ReplyCategory::General, |(category, _)| *category)
    }

    /// The canned reply for this category.
    pub fn reply(self) -> &'static str {
        match self {
            ReplyCategory::Debugging => {
                "I can help you debug that! Can you share the specific error message and your code? Common issues include missing imports, syntax errors, or incorrect prop types."
            }
            ReplyCategory::React => {
                "Great question about React! Remember to use functional components with hooks, keep components small and focused, and don't forget to add proper TypeScript types for your props."
            }
            ReplyCategory::Styling => {
                "For styling, I recommend using Tailwind's utility classes for consistency. Use semantic color tokens from your design system rather than hardcoded colors. Need help with a specific layout?"
            }
            ReplyCategory::Data => {
                "For API calls, use React Query for caching and error handling. Always handle loading and error states in your UI. Consider using TypeScript interfaces for your API responses."
            }
            ReplyCategory::Help => {
                "I'm here to help! Break down the problem into smaller steps. Check the console for errors, review the acceptance criteria, and don't hesitate to ask specific questions."
            }
            ReplyCategory::General => {
                "That's a great question! I'm here to help you learn and grow. Can you provide more context about what you're working on? The more specific you are, the better I can assist you."
            }
        }
    }
}

const REACT_TIPS: [&str; 3] = [
    "Use TypeScript for better type safety",
    "Keep components small and focused",
    "Use React.memo() for performance optimization",
];

const STYLING_TIPS: [&str; 3] = [
    "Use Tailwind's design tokens for consistency",
    "Mobile-first responsive design",
    "Test your UI in both light and dark modes",
];

const GENERAL_TIPS: [&str; 3] = [
    "Break complex problems into smaller steps",
    "Read error messages carefully for clues",
    "Use console.log() to debug data flow",
];

const NEXT_STEPS: [&str; 4] = [
    "Test your implementation thoroughly",
    "Check your code meets the acceptance criteria",
    "Consider edge cases and error handling",
    "Submit when you're confident it works",
];

// Tips use their own, narrower keyword lists.
fn tips_for(text: &str) -> &'static [&'static str] {
    if text.contains("react") {
        &REACT_TIPS
    } else if text.contains("css") || text.contains("style") {
        &STYLING_TIPS
    } else {
        &GENERAL_TIPS
    }
}

fn owned(lines: &[&str]) -> Vec<String> {
    lines.iter().map(|line| line.to_string()).collect()
}

/// A mentor that answers from a fixed set of replies.
#[derive(Debug, Clone, Default)]
pub struct KeywordMentor;

impl KeywordMentor {
    pub fn new() -> Self {
        Self
    }

    /// Build the full response for `prompt` without going through the trait.
    pub fn compose(&self, prompt: &str) -> MentorResponse {
        let lowered = prompt.to_lowercase();
        MentorResponse {
            message: ReplyCategory::classify(&lowered).reply().to_string(),
            tips: owned(tips_for(&lowered)),
            next_steps: owned(&NEXT_STEPS),
        }
    }
}

#[async_trait]
impl Mentor for KeywordMentor {
    async fn respond(&self, prompt: &str) -> Result<MentorResponse, MentorError> {
        Ok(self.compose(prompt))
    }

    fn name(&self) -> &str {
        "KeywordMentor"
    }
}
