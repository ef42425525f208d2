//! Quiz play: pick one unseen question, uniformly at random, from the quiz pool.

use std::collections::HashSet;

use rand::{seq::SliceRandom, Rng};

use crate::{db::QuestionModel, names};

/// Which categories a quiz draws its questions from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryFilter {
    Any,
    Only(i64),
}

impl CategoryFilter {
    pub fn from_id(category_id: i64) -> Self {
        if category_id == names::ANY_CATEGORY {
            CategoryFilter::Any
        } else {
            CategoryFilter::Only(category_id)
        }
    }

    pub fn admits(&self, category_id: i64) -> bool {
        match self {
            CategoryFilter::Any => true,
            CategoryFilter::Only(id) => *id == category_id,
        }
    }
}

/// Questions still eligible for this quiz: inside the category filter and not
/// asked before.
pub fn quiz_pool<'a>(
    questions: &'a [QuestionModel],
    previous: &HashSet<i64>,
    filter: CategoryFilter,
) -> Vec<&'a QuestionModel> {
    questions
        .iter()
        .filter(|q| filter.admits(q.category) && !previous.contains(&q.id))
        .collect()
}

/// Draws the next question, or `None` once the pool is exhausted.
pub fn select_question<R: Rng + ?Sized>(
    questions: Vec<QuestionModel>,
    previous: &HashSet<i64>,
    filter: CategoryFilter,
    rng: &mut R,
) -> Option<QuestionModel> {
    let pool = quiz_pool(&questions, previous, filter);
    let chosen = pool.choose(rng)?.id;

    tracing::debug!(pool = pool.len(), question_id = chosen, "quiz question selected");
    questions.into_iter().find(|q| q.id == chosen)
}
