//! Quiz engine: the ordered questions and the cursor into them.

use crate::error::QuizError;
use crate::question::Question;

/// Result of moving the cursor forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance<'a> {
    /// The cursor moved; this is the new current question.
    Next(&'a Question),
    /// There was no next question. The cursor did not move.
    Complete,
}

/// Walks a fixed list of questions in order and checks answers against the
/// question under the cursor.
#[derive(Debug, Clone)]
pub struct QuizEngine {
    questions: Vec<Question>,
    cursor: usize,
    complete: bool,
}

impl QuizEngine {
    pub fn new(questions: Vec<Question>) -> Result<Self, QuizError> {
        if questions.is_empty() {
            return Err(QuizError::EmptyQuiz);
        }
        Ok(Self {
            questions,
            cursor: 0,
            complete: false,
        })
    }

    /// Rewind to the first question and return it.
    pub fn start(&mut self) -> &Question {
        self.cursor = 0;
        self.complete = false;
        &self.questions[0]
    }

    /// The question under the cursor, or `OutOfQuestions` once `advance`
    /// has reported completion.
    pub fn current(&self) -> Result<&Question, QuizError> {
        if self.complete {
            return Err(QuizError::OutOfQuestions);
        }
        Ok(&self.questions[self.cursor])
    }

    pub fn has_next(&self) -> bool {
        self.cursor + 1 < self.questions.len()
    }

    pub fn advance(&mut self) -> Advance<'_> {
        if self.has_next() {
            self.cursor += 1;
            Advance::Next(&self.questions[self.cursor])
        } else {
            self.complete = true;
            Advance::Complete
        }
    }

    /// Returns `true` iff `choice` is the answer to the current question.
    /// Out-of-range choices and a completed quiz both count as wrong.
    pub fn check_answer(&self, choice: usize) -> bool {
        self.current().is_ok_and(|q| q.is_correct(choice))
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }
}
