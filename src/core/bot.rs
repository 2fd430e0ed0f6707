// rule-based health assistant
// answers canned wellness faqs by keyword matching, nothing smarter

use crate::Error;

// triggers that short-circuit straight to the emergency message.
// matched as plain substrings, so "severely" trips "severe".
const EMERGENCY_KEYWORDS: &[&str] = &[
    "emergency",
    "chest pain",
    "heart attack",
    "stroke",
    "bleeding",
    "unconscious",
    "breathing",
    "suicide",
    "severe",
    "critical",
];

// (trigger, answer) pairs, scanned in order - the first trigger found
// in the query wins, so keep the more specific entries first.
const HEALTH_FAQ: &[(&str, &str)] = &[
    (
        "fever",
        "For fever management:\n- Rest well\n- Stay hydrated\n- Use a light blanket\n- Take lukewarm baths\n\nSeek medical attention if fever is high (>103\u{b0}F/39.4\u{b0}C) or persists for more than 3 days.",
    ),
    (
        "blood pressure",
        "For blood pressure management:\n- Reduce salt intake\n- Exercise regularly\n- Maintain healthy weight\n- Limit alcohol\n- Practice stress management\n\nRegular monitoring and medication compliance (if prescribed) is important.",
    ),
    (
        "sleep",
        "Tips for better sleep:\n- Maintain regular sleep schedule\n- Create a dark, quiet environment\n- Avoid screens before bedtime\n- Limit caffeine\n- Exercise regularly (but not close to bedtime)",
    ),
    (
        "cold",
        "For managing cold symptoms:\n- Rest adequately\n- Stay hydrated\n- Use steam inhalation\n- Gargle with warm salt water\n- Keep warm\n\nMost colds resolve in 7-10 days. Seek medical attention if symptoms worsen.",
    ),
    (
        "pregnancy diet",
        "Important dietary considerations during pregnancy:\n- Eat plenty of fruits and vegetables\n- Get adequate protein\n- Take prescribed prenatal vitamins\n- Avoid raw/undercooked foods\n- Limit caffeine\n\nConsult your healthcare provider for personalized dietary advice.",
    ),
];

const EMERGENCY_RESPONSE: &str = "I'm here to provide general information only. For urgent medical concerns, please seek immediate medical attention or contact emergency services.";

const FALLBACK_RESPONSE: &str = "I understand you have a health-related question. While I can provide general wellness information, it's best to consult with a healthcare provider for specific medical advice.";

const DISCLAIMER: &str = "\n\nDisclaimer: This information is for general guidance only. Please consult a healthcare professional for personalized medical advice.";

pub struct HealthBot;

impl HealthBot {
    pub fn new() -> Self {
        Self
    }

    /// Map a free-text query to exactly one guidance string.
    ///
    /// Emergency keywords are checked before the faq table, first match
    /// wins, and every path appends the disclaimer. Async only so the
    /// call site stays put if a model-backed responder replaces this one;
    /// the built-in tables never actually fail or suspend.
    pub async fn respond(&self, query: &str) -> Result<String, Error> {
        let q = query.to_lowercase();

        if EMERGENCY_KEYWORDS.iter().any(|k| q.contains(k)) {
            return Ok(format!("{EMERGENCY_RESPONSE}{DISCLAIMER}"));
        }

        for (trigger, answer) in HEALTH_FAQ {
            if q.contains(trigger) {
                return Ok(format!("{answer}{DISCLAIMER}"));
            }
        }

        Ok(format!("{FALLBACK_RESPONSE}{DISCLAIMER}"))
    }

    pub fn disclaimer() -> &'static str {
        DISCLAIMER
    }
}

impl Default for HealthBot {
    fn default() -> Self {
        Self::new()
    }
}
