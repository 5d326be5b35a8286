//! Question → answer lookup table.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::domain::roi::Assumptions;

/// Returned for any question not in the table.
pub const FALLBACK_ANSWER: &str =
    "Ask about net savings, staffing crisis, SB 542, Olympics, or comorbidity.";

/// How an answer is produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum Answer {
    /// A fixed string.
    Fixed(String),
    /// Mentions the current comorbidity overlap.
    ComorbidityOverlap,
}

impl Answer {
    /// Renders the answer against the current assumptions.
    pub fn render(&self, assumptions: &Assumptions) -> String {
        match self {
            Answer::Fixed(text) => text.clone(),
            Answer::ComorbidityOverlap => format!(
                "The model accounts for overlap between conditions. At {} overlap, we prevent double-counting officers with multiple diagnoses.",
                assumptions.comorbidity_overlap
            ),
        }
    }
}

/// Exact-match table of suggested questions and their answers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CannedResponses {
    entries: Vec<(String, Answer)>,
    fallback: String,
}

static STANDARD: Lazy<CannedResponses> = Lazy::new(|| {
    let fixed = |q: &str, a: &str| (q.to_string(), Answer::Fixed(a.to_string()));
    CannedResponses {
        entries: vec![
            fixed(
                "How is the net savings calculated?",
                "Net savings = Total savings minus BetterUp investment. We prevent separations ($150K each), Workers' Comp claims under California SB 542, and discipline cases.",
            ),
            fixed(
                "Why is LAPD facing a staffing crisis?",
                "LAPD lost 1,200+ officers since 2019 and is 762 officers short of the 9,500 target. Academy classes graduate only 31 officers vs. 60 needed monthly.",
            ),
            fixed(
                "Explain California SB 542",
                "SB 542 creates PTSD presumption for peace officers—if diagnosed, it's presumed work-related, shifting burden to employer. This significantly increases WC claims and costs.",
            ),
            fixed(
                "What about the 2028 Olympics?",
                "LAPD needs 410 additional officers for World Cup/Olympics security. Without addressing retention, the department will face critical shortfalls during these events.",
            ),
            (
                "How does comorbidity work?".to_string(),
                Answer::ComorbidityOverlap,
            ),
        ],
        fallback: FALLBACK_ANSWER.to_string(),
    }
});

impl CannedResponses {
    /// The built-in question set.
    pub fn standard() -> &'static CannedResponses {
        &STANDARD
    }

    /// Builds a custom table.
    pub fn new(entries: Vec<(String, Answer)>, fallback: impl Into<String>) -> Self {
        Self {
            entries,
            fallback: fallback.into(),
        }
    }

    /// Suggested questions in display order.
    pub fn questions(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(q, _)| q.as_str())
    }

    /// Looks up a question by exact match.
    pub fn lookup(&self, question: &str) -> Option<&Answer> {
        self.entries
            .iter()
            .find(|(q, _)| q == question)
            .map(|(_, a)| a)
    }

    /// Answers a question, falling back when it is not in the table.
    pub fn respond(&self, question: &str, assumptions: &Assumptions) -> String {
        self.lookup(question)
            .map(|answer| answer.render(assumptions))
            .unwrap_or_else(|| self.fallback.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::Percentage;

    #[test]
    fn standard_table_has_five_questions() {
        assert_eq!(CannedResponses::standard().questions().count(), 5);
    }

    #[test]
    fn known_question_returns_fixed_answer() {
        let answer = CannedResponses::standard()
            .respond("Explain California SB 542", &Assumptions::default());
        assert!(answer.starts_with("SB 542 creates PTSD presumption"));
    }

    #[test]
    fn comorbidity_answer_reflects_current_overlap() {
        let assumptions = Assumptions::default().with_comorbidity_overlap(Percentage::new(20));
        let answer = CannedResponses::standard().respond("How does comorbidity work?", &assumptions);
        assert!(answer.contains("At 20% overlap"));
    }

    #[test]
    fn match_is_exact() {
        let answer = CannedResponses::standard()
            .respond("how does comorbidity work?", &Assumptions::default());
        assert_eq!(answer, FALLBACK_ANSWER);
    }

    #[test]
    fn custom_table_uses_its_own_fallback() {
        let responses = CannedResponses::new(
            vec![("ping".to_string(), Answer::Fixed("pong".to_string()))],
            "unknown",
        );
        assert_eq!(responses.respond("ping", &Assumptions::default()), "pong");
        assert_eq!(responses.respond("pong", &Assumptions::default()), "unknown");
    }
}
