use super::*;

#[tokio::test]
async fn bank_returns_all_phrases() {
    let Json(list) = bank().await;
    assert_eq!(list.len(), EXIT_PHRASES.len());
}

#[tokio::test]
async fn seeded_random_is_deterministic() {
    let Json(a) = random(Query(RandomQuery { seed: Some(42) })).await;
    let Json(b) = random(Query(RandomQuery { seed: Some(42) })).await;
    assert_eq!(a.phrase, b.phrase);
}

#[tokio::test]
async fn unseeded_random_picks_from_bank() {
    let Json(response) = random(Query(RandomQuery { seed: None })).await;
    assert!(EXIT_PHRASES.contains(&response.phrase));
}
