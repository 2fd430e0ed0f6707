// tests for the health assistant's response selection

use medibud::HealthBot;

async fn respond(query: &str) -> String {
    HealthBot::new().respond(query).await.unwrap()
}

#[tokio::test]
async fn test_every_response_ends_with_disclaimer() {
    for query in [
        "I have a fever",
        "chest pain",
        "xyzzy",
        "",
        "!!!???...",
        "\u{4f60}\u{597d}\u{4e16}\u{754c}",
    ] {
        let reply = respond(query).await;
        assert!(!reply.is_empty());
        assert!(
            reply.ends_with(HealthBot::disclaimer()),
            "missing disclaimer for query {query:?}"
        );
    }
}

#[tokio::test]
async fn test_fever_topic() {
    let reply = respond("I have a fever").await;
    assert!(reply.starts_with("For fever management:"));
}

#[tokio::test]
async fn test_emergency_beats_topic() {
    // "chest pain" and "fever" both present, emergency wins
    let reply = respond("I have chest pain and a fever").await;
    assert!(reply.contains("contact emergency services"));
    assert!(!reply.contains("For fever management"));
}

#[tokio::test]
async fn test_case_insensitive() {
    let upper = respond("FEVER").await;
    let mixed = respond("Fever").await;
    let lower = respond("fever").await;
    assert_eq!(upper, mixed);
    assert_eq!(mixed, lower);
    assert!(lower.starts_with("For fever management:"));
}

#[tokio::test]
async fn test_substring_match_survives_punctuation() {
    let reply = respond("What about my BLOOD PRESSURE?").await;
    assert!(reply.starts_with("For blood pressure management:"));
}

#[tokio::test]
async fn test_severe_matches_inside_word() {
    // substring matching, not whole-word: "severely" contains "severe"
    let reply = respond("severely tired").await;
    assert!(reply.contains("contact emergency services"));
}

#[tokio::test]
async fn test_first_topic_in_table_order_wins() {
    // both "fever" and "cold" triggers present; fever comes first in the table
    let reply = respond("is it a cold or a fever").await;
    assert!(reply.starts_with("For fever management:"));
}

#[tokio::test]
async fn test_unmatched_falls_back() {
    let reply = respond("xyzzy").await;
    assert!(reply.contains("general wellness information"));
}

#[tokio::test]
async fn test_empty_query_falls_back() {
    let reply = respond("").await;
    assert!(reply.contains("general wellness information"));
}

#[tokio::test]
async fn test_deterministic() {
    let first = respond("how do I sleep better").await;
    let second = respond("how do I sleep better").await;
    assert_eq!(first, second);
    assert!(first.contains("Tips for better sleep"));
}

#[tokio::test]
async fn test_long_input() {
    let query = "tell me about my health ".repeat(10_000);
    let reply = respond(&query).await;
    assert!(reply.ends_with(HealthBot::disclaimer()));
}
