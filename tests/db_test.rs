mod common;

use common::{
    create_test_db, find_question, numbered_seed, questions_count, seeded_test_db, trivia_seed,
};
use trivia::db::{InsertOutcome, NewQuestion};
use trivia::quiz::CategoryFilter;

fn new_question(category: i64) -> NewQuestion {
    NewQuestion {
        question: "Does this work?".to_string(),
        answer: "Yes".to_string(),
        difficulty: 1,
        category,
    }
}

#[tokio::test]
async fn test_empty_db() {
    let db = create_test_db().await;
    assert!(db.categories().await.unwrap().is_empty());
    assert_eq!(questions_count(&db).await, 0);
}

#[tokio::test]
async fn test_seed_loads_once() {
    let db = create_test_db().await;

    assert!(db.load_seed(trivia_seed()).await.unwrap());
    assert!(!db.load_seed(trivia_seed()).await.unwrap());

    assert_eq!(db.categories().await.unwrap().len(), 6);
    assert_eq!(questions_count(&db).await, 19);
}

#[tokio::test]
async fn test_categories_ordered_by_id() {
    let db = seeded_test_db().await;

    let categories = db.categories().await.unwrap();
    let labels: Vec<&str> = categories.iter().map(|c| c.label.as_str()).collect();
    assert_eq!(
        labels,
        ["Science", "Art", "Geography", "History", "Entertainment", "Sports"]
    );

    let geography = db.get_category(3).await.unwrap().unwrap();
    assert_eq!(geography.label, "Geography");
    assert!(db.get_category(50).await.unwrap().is_none());
    assert!(db.category_exists(6).await.unwrap());
    assert!(!db.category_exists(7).await.unwrap());
}

#[tokio::test]
async fn test_questions_ordered_by_id() {
    let db = seeded_test_db().await;

    let ids: Vec<i64> = db.questions().await.unwrap().iter().map(|q| q.id).collect();
    assert_eq!(ids, (1..=19).collect::<Vec<_>>());

    let science = db.questions_in_category(1).await.unwrap();
    let ids: Vec<i64> = science.iter().map(|q| q.id).collect();
    assert_eq!(ids, vec![16, 17, 18]);
    assert!(science.iter().all(|q| q.category == 1));
}

#[tokio::test]
async fn test_insert_question() {
    let db = seeded_test_db().await;

    let id = match db.insert_question(&new_question(4)).await.unwrap() {
        InsertOutcome::Created(id) => id,
        InsertOutcome::UnknownCategory => panic!("category 4 exists"),
    };

    let stored = find_question(&db, id).await.unwrap();
    assert_eq!(stored.question, "Does this work?");
    assert_eq!(stored.category, 4);
    assert_eq!(questions_count(&db).await, 20);
}

#[tokio::test]
async fn test_insert_question_unknown_category() {
    let db = seeded_test_db().await;

    let outcome = db.insert_question(&new_question(12)).await.unwrap();
    assert!(matches!(outcome, InsertOutcome::UnknownCategory));
    assert_eq!(questions_count(&db).await, 19);
}

#[tokio::test]
async fn test_delete_question() {
    let db = seeded_test_db().await;

    assert!(db.delete_question(16).await.unwrap());
    assert!(!db.delete_question(16).await.unwrap());
    assert!(!db.delete_question(50).await.unwrap());
    assert!(find_question(&db, 16).await.is_none());
    assert_eq!(questions_count(&db).await, 18);
}

#[tokio::test]
async fn test_search_is_case_insensitive() {
    let db = seeded_test_db().await;

    let upper = db.search_questions("What").await.unwrap();
    let lower = db.search_questions("what").await.unwrap();
    assert_eq!(upper.len(), 8);
    assert_eq!(upper, lower);

    let ids: Vec<i64> = upper.iter().map(|q| q.id).collect();
    let mut sorted = ids.clone();
    sorted.sort();
    assert_eq!(ids, sorted);
}

#[tokio::test]
async fn test_search_matches_literally() {
    let db = create_test_db().await;
    db.load_seed(numbered_seed(3)).await.unwrap();

    assert!(db.search_questions("%").await.unwrap().is_empty());
    assert!(db.search_questions("_").await.unwrap().is_empty());
    assert_eq!(db.search_questions("question 2").await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_search_folds_non_ascii_case() {
    let db = seeded_test_db().await;

    let id = match db
        .insert_question(&NewQuestion {
            question: "Who wrote ÉMILE?".to_string(),
            answer: "Rousseau".to_string(),
            difficulty: 2,
            category: 4,
        })
        .await
        .unwrap()
    {
        InsertOutcome::Created(id) => id,
        InsertOutcome::UnknownCategory => panic!("category 4 exists"),
    };

    let lower = db.search_questions("émile").await.unwrap();
    let upper = db.search_questions("ÉMILE").await.unwrap();
    assert_eq!(lower.len(), 1);
    assert_eq!(lower[0].id, id);
    assert_eq!(lower, upper);
}

#[tokio::test]
async fn test_search_keeps_surrounding_whitespace() {
    let db = seeded_test_db().await;

    assert_eq!(db.search_questions("what").await.unwrap().len(), 8);

    let ids: Vec<i64> = db
        .search_questions(" what")
        .await
        .unwrap()
        .iter()
        .map(|q| q.id)
        .collect();
    assert_eq!(ids, vec![13, 18]);
}

#[tokio::test]
async fn test_quiz_candidates() {
    let db = seeded_test_db().await;

    assert_eq!(db.quiz_candidates(CategoryFilter::Any).await.unwrap().len(), 19);

    let sports = db.quiz_candidates(CategoryFilter::Only(6)).await.unwrap();
    assert_eq!(sports.len(), 2);
    assert!(sports.iter().all(|q| q.category == 6));

    assert!(db
        .quiz_candidates(CategoryFilter::Only(99))
        .await
        .unwrap()
        .is_empty());
}
