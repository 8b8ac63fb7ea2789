use super::SUGGESTED_QUESTIONS;

#[test]
fn exactly_four_suggested_questions() {
    assert_eq!(SUGGESTED_QUESTIONS.len(), 4);
}

#[test]
fn suggested_questions_are_nonblank_and_distinct() {
    for question in SUGGESTED_QUESTIONS {
        assert!(!question.trim().is_empty());
    }
    for (i, a) in SUGGESTED_QUESTIONS.iter().enumerate() {
        for b in &SUGGESTED_QUESTIONS[i + 1..] {
            assert_ne!(a, b);
        }
    }
}
