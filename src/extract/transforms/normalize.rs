//! Turn normalization: drop degenerate turns, reduce the rest to messages.

use crate::extract::config::ExtractionConfig;
use crate::extract::types::{Message, Role, Turn};

/// Filters empty and too-short turns and trims what remains.
///
/// A turn survives when its trimmed content is longer than the threshold
/// for its role. Assistant turns default to a threshold of 10 characters,
/// which drops loading placeholders; user turns default to 0 so that short
/// confirmations like "y" are kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnNormalizer {
    min_user_chars: usize,
    min_assistant_chars: usize,
}

impl TurnNormalizer {
    pub fn new(min_user_chars: usize, min_assistant_chars: usize) -> Self {
        Self {
            min_user_chars,
            min_assistant_chars,
        }
    }

    pub fn from_config(config: &ExtractionConfig) -> Self {
        Self::new(config.min_user_chars, config.min_assistant_chars)
    }

    fn threshold(&self, role: Role) -> usize {
        match role {
            Role::User => self.min_user_chars,
            Role::Assistant => self.min_assistant_chars,
        }
    }

    /// Normalize an ordered turn sequence, preserving order.
    pub fn normalize(&self, turns: Vec<Turn>) -> Vec<Message> {
        let total = turns.len();
        let messages: Vec<Message> = turns
            .into_iter()
            .filter_map(|turn| {
                let content = turn.content.trim();
                if content.is_empty() || text_len(content) <= self.threshold(turn.role) {
                    return None;
                }
                Some(Message {
                    role: turn.role,
                    content: content.to_string(),
                })
            })
            .collect();

        if messages.len() < total {
            tracing::debug!(
                dropped = total - messages.len(),
                kept = messages.len(),
                "Dropped empty or placeholder turns"
            );
        }
        messages
    }
}

/// Length of `text` in UTF-16 code units, the unit rendered pages measure
/// text in. Characters outside the Basic Multilingual Plane count twice.
pub(crate) fn text_len(text: &str) -> usize {
    text.encode_utf16().count()
}

impl Default for TurnNormalizer {
    fn default() -> Self {
        Self::from_config(&ExtractionConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_empty_and_whitespace_turns() {
        let turns = vec![
            Turn::new(Role::User, "hello"),
            Turn::new(Role::User, "   \n\t "),
            Turn::new(Role::Assistant, ""),
        ];
        let messages = TurnNormalizer::default().normalize(turns);
        assert_eq!(messages, vec![Message::user("hello")]);
    }

    #[test]
    fn assistant_turn_of_ten_chars_is_dropped() {
        let turns = vec![
            Turn::new(Role::Assistant, "  0123456789  "),
            Turn::new(Role::Assistant, "01234567890"),
        ];
        let messages = TurnNormalizer::default().normalize(turns);
        assert_eq!(messages, vec![Message::assistant("01234567890")]);
    }

    #[test]
    fn one_character_user_turn_is_kept() {
        let messages = TurnNormalizer::default().normalize(vec![Turn::new(Role::User, " y ")]);
        assert_eq!(messages, vec![Message::user("y")]);
    }

    #[test]
    fn counts_code_units_not_bytes() {
        // 10 units, 30 bytes
        let messages =
            TurnNormalizer::default().normalize(vec![Turn::new(Role::Assistant, "ああああああああああ")]);
        assert!(messages.is_empty());
    }

    #[test]
    fn astral_characters_count_as_two_units() {
        // 5 emoji: 10 units, dropped; 6 emoji: 12 units, kept
        let turns = vec![
            Turn::new(Role::Assistant, "🦀🦀🦀🦀🦀"),
            Turn::new(Role::Assistant, "🦀🦀🦀🦀🦀🦀"),
        ];
        let messages = TurnNormalizer::default().normalize(turns);
        assert_eq!(messages, vec![Message::assistant("🦀🦀🦀🦀🦀🦀")]);
        assert_eq!(text_len("a🦀"), 3);
    }

    #[test]
    fn preserves_order_and_trims() {
        let turns = vec![
            Turn::new(Role::User, "\n Q1 \n"),
            Turn::new(Role::Assistant, "An answer that is long enough"),
            Turn::new(Role::User, "Q2"),
        ];
        let messages = TurnNormalizer::default().normalize(turns);
        assert_eq!(
            messages,
            vec![
                Message::user("Q1"),
                Message::assistant("An answer that is long enough"),
                Message::user("Q2"),
            ]
        );
    }

    #[test]
    fn thresholds_follow_config() {
        let config = ExtractionConfig {
            min_user_chars: 2,
            min_assistant_chars: 0,
            ..Default::default()
        };
        let turns = vec![Turn::new(Role::User, "ok"), Turn::new(Role::Assistant, "A")];
        let messages = TurnNormalizer::from_config(&config).normalize(turns);
        assert_eq!(messages, vec![Message::assistant("A")]);
    }
}
