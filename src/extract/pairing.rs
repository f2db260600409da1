//! Folding an ordered message sequence into question/answer pairs.

use super::types::{Message, QAPair, Role};

/// Separator between consecutive assistant messages merged into one answer.
pub const ANSWER_SEPARATOR: &str = "\n\n";

/// State machine that pairs each user message with the assistant messages
/// following it.
///
/// **Algorithm**:
/// 1. A user message closes the pending pair (if it has an answer) and
///    becomes the new pending question
/// 2. An assistant message is appended to the pending answer parts
/// 3. At the end, the pending pair is emitted if it has an answer
///
/// Questions with no answer before the next question (or the end) are
/// dropped, as are assistant messages before the first question.
#[derive(Debug, Default)]
pub struct Pairer {
    question: Option<String>,
    answer_parts: Vec<String>,
    pairs: Vec<QAPair>,
    unanswered: usize,
    orphaned: usize,
}

impl Pairer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the next message.
    pub fn push(&mut self, message: &Message) {
        match message.role {
            Role::User => {
                self.flush();
                self.question = Some(message.content.clone());
            }
            Role::Assistant => {
                if self.question.is_some() {
                    self.answer_parts.push(message.content.clone());
                } else {
                    self.orphaned += 1;
                }
            }
        }
    }

    /// Emit the pending pair, if complete, and return all pairs.
    pub fn finish(mut self) -> Vec<QAPair> {
        self.flush();
        if self.unanswered_count() > 0 || self.orphaned_count() > 0 {
            tracing::debug!(
                unanswered_questions = self.unanswered_count(),
                orphaned_answers = self.orphaned_count(),
                "Dropped incomplete exchanges"
            );
        }
        self.pairs
    }

    /// Number of questions dropped so far for lack of an answer.
    pub(crate) fn unanswered_count(&self) -> usize {
        self.unanswered
    }

    /// Number of assistant messages dropped for lack of a question.
    pub(crate) fn orphaned_count(&self) -> usize {
        self.orphaned
    }

    fn flush(&mut self) {
        let Some(question) = self.question.take() else {
            return;
        };
        if self.answer_parts.is_empty() {
            self.unanswered += 1;
            return;
        }
        let answer = std::mem::take(&mut self.answer_parts).join(ANSWER_SEPARATOR);
        self.pairs.push(QAPair { question, answer });
    }
}

/// Pair an ordered message sequence.
pub fn pair_messages(messages: &[Message]) -> Vec<QAPair> {
    let mut pairer = Pairer::new();
    for message in messages {
        pairer.push(message);
    }
    pairer.finish()
}
