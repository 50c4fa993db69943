// src/prompts.rs
//! Prompt templates for the supportive reply, one per sentiment label.

use crate::sentiment::SentimentLabel;

const NEGATIVE_INSTRUCTIONS: &str = "Please write a warm, uplifting, and empathetic message to support them. \
Then suggest 2-3 realistic, low-cost activities they can do to feel better. \
Make the message sound like a caring friend. Keep emoji use friendly and tasteful, at most one emoji per suggestion.";

const POSITIVE_INSTRUCTIONS: &str = "Celebrate this positive energy with a fun, cheerful message. \
Then suggest 2-3 uplifting activities they can do to keep the good mood going or share it with others. \
Feel free to use emojis, at most one per suggestion.";

const NEUTRAL_INSTRUCTIONS: &str = "The mood seems a little neutral or unclear. \
Write a thoughtful and gently encouraging message in a calm, warm tone. \
Also recommend exactly 2 small but meaningful things they can do today to reflect or reset. \
Limit emojis to one per suggestion.";

/// Builds the instruction sent to the model. Pure and deterministic; the mood text
/// is quoted verbatim.
pub fn compose(sentiment: SentimentLabel, mood: &str, age: i64, gender: &str) -> String {
    let subject = format!(
        "The user is a {}-year-old {} college student and they said: \"{}\".",
        age, gender, mood
    );

    match sentiment {
        SentimentLabel::Negative => format!("Hey Gemini! {} {}", subject, NEGATIVE_INSTRUCTIONS),
        SentimentLabel::Positive => format!("Hey Gemini! {} {}", subject, POSITIVE_INSTRUCTIONS),
        SentimentLabel::Neutral => format!("{} {}", subject, NEUTRAL_INSTRUCTIONS),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose_is_deterministic() {
        for label in [
            SentimentLabel::Positive,
            SentimentLabel::Negative,
            SentimentLabel::Neutral,
        ] {
            assert_eq!(
                compose(label, "meh day", 21, "male"),
                compose(label, "meh day", 21, "male")
            );
        }
    }

    #[test]
    fn test_compose_keeps_mood_age_and_gender_verbatim() {
        let mood = "I'm \"fine\" — honestly? <not really> 100%";
        for label in [
            SentimentLabel::Positive,
            SentimentLabel::Negative,
            SentimentLabel::Neutral,
        ] {
            let prompt = compose(label, mood, 19, "non-binary");
            assert!(prompt.contains(mood));
            assert!(prompt.contains("19-year-old non-binary college student"));
        }
    }

    #[test]
    fn test_each_label_gets_its_own_template() {
        let negative = compose(SentimentLabel::Negative, "x", 20, "female");
        let positive = compose(SentimentLabel::Positive, "x", 20, "female");
        let neutral = compose(SentimentLabel::Neutral, "x", 20, "female");

        assert!(negative.contains("empathetic"));
        assert!(negative.contains("caring friend"));
        assert!(negative.contains("2-3"));

        assert!(positive.contains("Celebrate"));
        assert!(positive.contains("2-3"));

        assert!(neutral.contains("exactly 2"));
        assert!(neutral.contains("calm"));

        assert_ne!(negative, positive);
        assert_ne!(positive, neutral);
        assert_ne!(negative, neutral);
    }

    #[test]
    fn test_negative_age_is_not_rejected() {
        let prompt = compose(SentimentLabel::Neutral, "hmm", -3, "");
        assert!(prompt.contains("-3-year-old  college student"));
    }
}
