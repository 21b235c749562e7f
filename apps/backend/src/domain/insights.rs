//! Short educational blurbs for each bingo phrase.
//!
//! A handful of curated rules cover the most common squares; a friendly
//! default keeps the lookup total. Display metadata only: game logic never
//! consults this module.

use serde::Serialize;

/// Narration detail for one phrase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PhraseInsight {
    pub phrase: String,
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
}

struct InsightRule {
    title: &'static str,
    description: &'static str,
    source_url: Option<&'static str>,
    /// Lowercase stems that must all appear in the normalized phrase.
    stems: &'static [&'static str],
}

impl InsightRule {
    fn matches(&self, normalized: &str) -> bool {
        self.stems.iter().all(|stem| normalized.contains(stem))
    }

    fn to_insight(&self, phrase: &str) -> PhraseInsight {
        PhraseInsight {
            phrase: phrase.to_string(),
            title: self.title.to_string(),
            description: self.description.to_string(),
            source_url: self.source_url.map(str::to_string),
        }
    }
}

const RULES: &[InsightRule] = &[
    InsightRule {
        title: "Why hallucinations happen",
        description: "Generative models predict the most probable next token. Without grounding \
                      they can invent facts that sound convincing, so double-check anything critical.",
        source_url: Some("https://en.wikipedia.org/wiki/Hallucination_(artificial_intelligence)"),
        stems: &["hallucinat"],
    },
    InsightRule {
        title: "Prompt engineering reality check",
        description: "Prompts act like instructions, but models still follow probability. Long or \
                      forceful prompts rarely beat clear context and iterative refinement.",
        source_url: Some("https://learn.microsoft.com/azure/ai-services/openai/how-to/system-message"),
        stems: &["prompt"],
    },
    InsightRule {
        title: "Legal answers require humans",
        description: "Language models are not lawyers and cannot give advice tailored to \
                      jurisdictions or current statutes. Treat AI output as a draft, not counsel.",
        source_url: Some("https://www.americanbar.org/groups/law_practice/publications/law_practice_magazine/2019/nd2019/nd2019-ethics"),
        stems: &["legal"],
    },
    InsightRule {
        title: "Protect customer data",
        description: "Production data should only be touched through governed systems. Pasting it \
                      into public AI tools risks security incidents and compliance violations.",
        source_url: Some("https://owasp.org/www-project-top-10-for-large-language-model-applications/"),
        stems: &["production", "data"],
    },
    InsightRule {
        title: "TTS quirks are normal",
        description: "Text-to-speech still struggles with names, abbreviations, and accents. \
                      Provide phonetic hints or SSML tags when clarity matters.",
        source_url: Some("https://cloud.google.com/text-to-speech/docs/ssml"),
        stems: &["tts"],
    },
    InsightRule {
        title: "Image models still miss details",
        description: "Diffusion models learn visual patterns but fumble anatomy and fine \
                      structure. Iterating on prompts or editing manually is often required.",
        source_url: Some("https://research.nvidia.com/publication/2023-06_diffusion-models"),
        stems: &["image"],
    },
    InsightRule {
        title: "Automate with context",
        description: "Automation amplifies both clarity and confusion. Before delegating to AI, \
                      decide who owns the outcome and how humans will review it.",
        source_url: None,
        stems: &["automat"],
    },
    InsightRule {
        title: "AI coding assistants",
        description: "Code copilots accelerate routine work but also produce bugs and outdated \
                      APIs. Keep tests handy and review suggestions like a junior dev's.",
        source_url: Some("https://arxiv.org/abs/2306.10053"),
        stems: &["copilot"],
    },
    InsightRule {
        title: "Summaries need nuance",
        description: "Automatic summaries condense text but can miss tone, nuance, and action \
                      items. Use them as starting drafts and fill the gaps together.",
        source_url: None,
        stems: &["summar"],
    },
    InsightRule {
        title: "Ethics over hype",
        description: "Ethics conversations earn their keep when they focus on governance, bias \
                      testing, and user impact rather than futuristic debates.",
        source_url: Some("https://www.nist.gov/itl/ai-risk-management-framework"),
        stems: &["sentient"],
    },
    InsightRule {
        title: "Naming with AI",
        description: "AI-generated names can spark ideas, but check trademarks, cultural context, \
                      and pronounceability before adopting one.",
        source_url: None,
        stems: &["trademark"],
    },
    InsightRule {
        title: "Prompt stacks and iteration",
        description: "If you are rewriting AI output with another AI, consider adjusting the \
                      source prompt or giving explicit critiques instead of nesting tools.",
        source_url: None,
        stems: &["regenerate"],
    },
];

/// Insight for a phrase: first matching curated rule, or the default.
pub fn describe(phrase: &str) -> PhraseInsight {
    let normalized = phrase.to_lowercase();
    RULES
        .iter()
        .find(|rule| rule.matches(&normalized))
        .map(|rule| rule.to_insight(phrase))
        .unwrap_or_else(|| default_insight(phrase))
}

fn default_insight(phrase: &str) -> PhraseInsight {
    PhraseInsight {
        phrase: phrase.to_string(),
        title: "What this square highlights".to_string(),
        description: format!(
            "\u{201c}{phrase}\u{201d} is a real pattern teams report when experimenting with AI. \
             Use it as a reminder to pause, discuss the behavior, and decide how people and \
             tools can improve it together."
        ),
        source_url: None,
    }
}
