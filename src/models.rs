use serde::Deserialize;

use crate::extractors::deserialize_string_or_i64;

/// Contents of a seed file: the category list and the questions that
/// reference it by id.
#[derive(Deserialize)]
pub struct Seed {
    pub categories: Vec<SeedCategory>,
    #[serde(default)]
    pub questions: Vec<SeedQuestion>,
}

#[derive(Deserialize)]
pub struct SeedCategory {
    pub id: i64,
    #[serde(rename = "type")]
    pub label: String,
}

#[derive(Deserialize)]
pub struct SeedQuestion {
    pub question: String,
    pub answer: String,
    pub difficulty: i64,
    pub category: i64,
}

/// Body of `POST /questions`. Numeric fields also accept numeric strings.
#[derive(Deserialize)]
pub struct CreateQuestionBody {
    pub question: String,
    pub answer: String,
    #[serde(deserialize_with = "deserialize_string_or_i64")]
    pub difficulty: i64,
    #[serde(deserialize_with = "deserialize_string_or_i64")]
    pub category: i64,
}

/// Body of `POST /questions/search`.
#[derive(Deserialize)]
pub struct SearchBody {
    #[serde(rename = "searchTerm")]
    pub search_term: String,
}

/// Body of `POST /quizzes`.
#[derive(Deserialize)]
pub struct QuizBody {
    pub previous_questions: Vec<i64>,
    pub quiz_category: QuizCategory,
}

#[derive(Deserialize)]
pub struct QuizCategory {
    #[serde(deserialize_with = "deserialize_string_or_i64")]
    pub id: i64,
    #[serde(rename = "type", default)]
    pub label: Option<String>,
}
