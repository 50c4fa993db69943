// src/sentiment/mod.rs
//! Lexicon-based polarity scoring and the three-way mood label derived from it.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

mod lexicon;

use lexicon::{INTENSIFIERS, LEXICON, NEGATIONS};

/// Scores above this are positive.
pub const POSITIVE_THRESHOLD: f64 = 0.2;
/// Scores below this are negative.
pub const NEGATIVE_THRESHOLD: f64 = -0.2;

const NEGATION_FACTOR: f64 = -0.5;
/// How many tokens a negation or intensifier stays armed for.
const MODIFIER_WINDOW: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "positive",
            SentimentLabel::Negative => "negative",
            SentimentLabel::Neutral => "neutral",
        }
    }

    pub fn from_polarity(score: f64) -> Self {
        if score > POSITIVE_THRESHOLD {
            SentimentLabel::Positive
        } else if score < NEGATIVE_THRESHOLD {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Anything that can turn text into a polarity in `[-1.0, 1.0]`.
pub trait PolarityScorer: Send + Sync {
    fn polarity(&self, text: &str) -> f64;
}

lazy_static! {
    static ref WORD_RE: Regex = Regex::new(r"[a-z]+(?:'[a-z]+)?").unwrap();
    static ref LEXICON_MAP: HashMap<&'static str, f64> = LEXICON.iter().copied().collect();
    static ref INTENSIFIER_MAP: HashMap<&'static str, f64> = INTENSIFIERS.iter().copied().collect();
}

/// Word-polarity lexicon with negation and intensifier handling. The score is the
/// mean over sentiment-bearing words, each adjusted by the modifiers just before it.
#[derive(Debug, Default, Clone, Copy)]
pub struct LexiconScorer;

impl LexiconScorer {
    pub fn new() -> Self {
        Self
    }

    fn is_negation(token: &str) -> bool {
        NEGATIONS.iter().any(|n| *n == token) || token.ends_with("n't")
    }
}

impl PolarityScorer for LexiconScorer {
    fn polarity(&self, text: &str) -> f64 {
        // Typographic apostrophes tokenize like ASCII ones.
        let lowered = text
            .to_lowercase()
            .replace(&['\u{2019}', '\u{2018}'][..], "'");

        let mut scores: Vec<f64> = Vec::new();
        let mut negated_for = 0usize;
        let mut multiplier = 1.0f64;
        let mut multiplier_for = 0usize;

        for token in WORD_RE.find_iter(&lowered).map(|m| m.as_str()) {
            if Self::is_negation(token) {
                negated_for = MODIFIER_WINDOW;
                continue;
            }
            if let Some(factor) = INTENSIFIER_MAP.get(token) {
                multiplier *= factor;
                multiplier_for = MODIFIER_WINDOW;
                continue;
            }

            if let Some(&base) = LEXICON_MAP.get(token) {
                let mut score = base;
                if multiplier_for > 0 {
                    score *= multiplier;
                }
                if negated_for > 0 {
                    score *= NEGATION_FACTOR;
                }
                scores.push(score.clamp(-1.0, 1.0));
                negated_for = 0;
                multiplier = 1.0;
                multiplier_for = 0;
                continue;
            }

            negated_for = negated_for.saturating_sub(1);
            multiplier_for = multiplier_for.saturating_sub(1);
            if multiplier_for == 0 {
                multiplier = 1.0;
            }
        }

        if scores.is_empty() {
            return 0.0;
        }
        let mean = scores.iter().sum::<f64>() / scores.len() as f64;
        mean.clamp(-1.0, 1.0)
    }
}

/// Maps free text to a [`SentimentLabel`].
pub struct SentimentClassifier {
    scorer: Box<dyn PolarityScorer>,
}

impl SentimentClassifier {
    pub fn new(scorer: Box<dyn PolarityScorer>) -> Self {
        Self { scorer }
    }

    pub fn classify(&self, text: &str) -> SentimentLabel {
        let normalized = normalize(text);
        let score = self.scorer.polarity(&normalized);
        let label = SentimentLabel::from_polarity(score);
        tracing::info!(polarity = score, sentiment = %label, "classified mood");
        label
    }
}

impl Default for SentimentClassifier {
    fn default() -> Self {
        Self::new(Box::new(LexiconScorer::new()))
    }
}

/// Trim and lowercase; the label must not depend on either.
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedScorer(f64);

    impl PolarityScorer for FixedScorer {
        fn polarity(&self, _text: &str) -> f64 {
            self.0
        }
    }

    fn classify(text: &str) -> SentimentLabel {
        SentimentClassifier::default().classify(text)
    }

    #[test]
    fn test_empty_text_is_neutral() {
        assert_eq!(LexiconScorer.polarity(""), 0.0);
        assert_eq!(classify(""), SentimentLabel::Neutral);
        assert_eq!(classify("   \n\t"), SentimentLabel::Neutral);
    }

    #[test]
    fn test_case_and_whitespace_do_not_matter() {
        assert_eq!(classify(" GREAT "), classify("great"));
        assert_eq!(classify("great"), SentimentLabel::Positive);
        assert_eq!(classify("  I Feel TERRIBLE  "), classify("i feel terrible"));
    }

    #[test]
    fn test_basic_labels() {
        assert_eq!(classify("I aced my test and I'm so happy"), SentimentLabel::Positive);
        assert_eq!(classify("I failed my exam and feel terrible"), SentimentLabel::Negative);
        assert_eq!(classify("I went to the library today"), SentimentLabel::Neutral);
    }

    #[test]
    fn test_negation_flips_and_softens() {
        let plain = LexiconScorer.polarity("good");
        let negated = LexiconScorer.polarity("not good");
        assert!(plain > 0.0);
        assert!(negated < 0.0);
        assert!(negated.abs() < plain.abs());
        assert!(LexiconScorer.polarity("i don't feel happy") < 0.0);
    }

    #[test]
    fn test_curly_apostrophe_negates_like_ascii() {
        assert_eq!(
            LexiconScorer.polarity("i don\u{2019}t feel happy"),
            LexiconScorer.polarity("i don't feel happy")
        );
        assert_eq!(classify("I don\u{2019}t feel happy"), SentimentLabel::Negative);
        assert_eq!(classify("I can\u{2018}t stand how good this is"), classify("I can't stand how good this is"));
    }

    #[test]
    fn test_cannot_is_a_negation() {
        assert_eq!(classify("I cannot be happy"), SentimentLabel::Negative);
        assert!(LexiconScorer.polarity("cannot be calm") < 0.0);
    }

    #[test]
    fn test_common_mood_words_are_labelled() {
        for text in [
            "I feel devastated and heartbroken",
            "I'm so furious right now",
            "feeling down today",
            "everything sucks",
            "so stressed and anxious about finals",
            "I feel lonely and homesick",
        ] {
            assert_eq!(classify(text), SentimentLabel::Negative, "{text}");
        }
        for text in [
            "I'm ecstatic!!",
            "feeling grateful and relaxed",
            "I got promoted and I'm thrilled",
            "so proud of myself",
        ] {
            assert_eq!(classify(text), SentimentLabel::Positive, "{text}");
        }
    }

    #[test]
    fn test_intensifier_strengthens() {
        assert!(LexiconScorer.polarity("very sad") < LexiconScorer.polarity("sad"));
        assert!(LexiconScorer.polarity("slightly happy") < LexiconScorer.polarity("happy"));
        assert!(LexiconScorer.polarity("extremely awesome") <= 1.0);
    }

    #[test]
    fn test_scores_stay_in_range() {
        for text in [
            "worst worst worst terrible awful",
            "absolutely extremely perfect wonderful",
            "not not not bad",
            "meh",
            "!!!???",
        ] {
            let score = LexiconScorer.polarity(text);
            assert!((-1.0..=1.0).contains(&score), "{text}: {score}");
        }
    }

    #[test]
    fn test_threshold_boundaries_are_exclusive() {
        let at_upper = SentimentClassifier::new(Box::new(FixedScorer(0.2)));
        let at_lower = SentimentClassifier::new(Box::new(FixedScorer(-0.2)));
        let above = SentimentClassifier::new(Box::new(FixedScorer(0.2001)));
        let below = SentimentClassifier::new(Box::new(FixedScorer(-0.2001)));

        assert_eq!(at_upper.classify("x"), SentimentLabel::Neutral);
        assert_eq!(at_lower.classify("x"), SentimentLabel::Neutral);
        assert_eq!(above.classify("x"), SentimentLabel::Positive);
        assert_eq!(below.classify("x"), SentimentLabel::Negative);
    }

    #[test]
    fn test_lexicon_word_scoring_exactly_on_threshold() {
        assert_eq!(LexiconScorer.polarity("alright"), 0.2);
        assert_eq!(classify("Alright"), SentimentLabel::Neutral);
    }

    #[test]
    fn test_label_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&SentimentLabel::Negative).unwrap(),
            "\"negative\""
        );
        assert_eq!(SentimentLabel::Positive.to_string(), "positive");
    }
}
