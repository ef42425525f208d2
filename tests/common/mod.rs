#![allow(dead_code)]

use trivia::db::{Db, QuestionModel};
use trivia::models::{Seed, SeedCategory, SeedQuestion};

pub async fn create_test_db() -> Db {
    use std::sync::atomic::{AtomicU32, Ordering};
    static COUNTER: AtomicU32 = AtomicU32::new(0);
    let id = COUNTER.fetch_add(1, Ordering::SeqCst);
    let path = std::env::temp_dir().join(format!("trivia_test_{}_{}.db", std::process::id(), id));
    // Clean up leftover file from previous runs
    let _ = std::fs::remove_file(&path);
    let url = format!("sqlite:{}", path.display());
    Db::new(&url).await.expect("failed to create test database")
}

/// The bundled seed: 6 categories and 19 questions with ids 1..=19.
pub fn trivia_seed() -> Seed {
    serde_json::from_str(include_str!("../../seed/trivia.json")).expect("seed file should parse")
}

pub async fn seeded_test_db() -> Db {
    let db = create_test_db().await;
    db.load_seed(trivia_seed()).await.expect("failed to load seed");
    db
}

/// One category holding `n` numbered questions.
pub fn numbered_seed(n: usize) -> Seed {
    Seed {
        categories: vec![SeedCategory {
            id: 1,
            label: "Numbers".to_string(),
        }],
        questions: (1..=n)
            .map(|i| SeedQuestion {
                question: format!("Question {i}"),
                answer: format!("Answer {i}"),
                difficulty: 1,
                category: 1,
            })
            .collect(),
    }
}

pub async fn questions_count(db: &Db) -> usize {
    db.questions().await.expect("failed to list questions").len()
}

pub async fn find_question(db: &Db, question_id: i64) -> Option<QuestionModel> {
    db.questions()
        .await
        .expect("failed to list questions")
        .into_iter()
        .find(|q| q.id == question_id)
}
