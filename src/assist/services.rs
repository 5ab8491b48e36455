pub const EMPTY_PROMPT_REPLY: &str = "Please type a question!";
pub const DEFAULT_REPLY: &str = "🤖 Ask me about crops, disease, fertilizers or water.";

/// Keyword table, checked in order. The first entry whose keywords occur in
/// the lowercased message wins.
const RULES: &[(&[&str], &str)] = &[
    (&["fertilizer", "खाद"], "🌿 Use balanced NPK according to crop type."),
    (&["crops"], "🌿Click on the crop type to know more about the crops"),
    (&["disease", "रोग"], "🦠 Use Disease Detection tool and upload a leaf image."),
    (&["weather", "मौसम"], "🌦 Check Weather Forecast in dashboard."),
];

/// True when the text contains any Devanagari character.
pub fn is_hindi(text: &str) -> bool {
    text.chars().any(|c| ('\u{0900}'..='\u{097F}').contains(&c))
}

pub fn reply_for(message: &str) -> &'static str {
    let msg = message.trim();
    if msg.is_empty() {
        return EMPTY_PROMPT_REPLY;
    }
    let lower = msg.to_lowercase();
    RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| lower.contains(k)))
        .map(|(_, reply)| *reply)
        .unwrap_or(DEFAULT_REPLY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_message_asks_for_question() {
        assert_eq!(reply_for(""), EMPTY_PROMPT_REPLY);
        assert_eq!(reply_for("   \n"), EMPTY_PROMPT_REPLY);
    }

    #[test]
    fn keywords_are_case_insensitive() {
        assert_eq!(reply_for("Which FERTILIZER for wheat?"), RULES[0].1);
        assert_eq!(reply_for("what's the Weather tomorrow"), RULES[3].1);
    }

    #[test]
    fn hindi_keywords_match() {
        assert_eq!(reply_for("गेहूं में रोग है"), RULES[2].1);
        assert_eq!(reply_for("आज मौसम कैसा है"), RULES[3].1);
        assert!(is_hindi("आज मौसम"));
        assert!(!is_hindi("today weather"));
    }

    #[test]
    fn earlier_rules_take_precedence() {
        assert_eq!(reply_for("fertilizer against disease"), RULES[0].1);
    }

    #[test]
    fn unknown_topic_gets_default() {
        assert_eq!(reply_for("hello"), DEFAULT_REPLY);
    }
}
