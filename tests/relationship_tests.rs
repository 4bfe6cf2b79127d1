//! Relationship guarantees exercised through the service layer.

use std::sync::Arc;

use cinedex::config::Config;
use cinedex::domain::{CatalogError, CharacterId, EntityKind, FranchiseId, MovieId};
use cinedex::models::{CharacterInput, FranchiseInput, MovieInput};
use cinedex::state::SharedState;

async fn shared_state() -> SharedState {
    let db_path = std::env::temp_dir().join(format!(
        "cinedex-relationship-test-{}.db",
        uuid::Uuid::new_v4()
    ));

    let mut config = Config::default();
    config.general.database_path = format!("sqlite:{}", db_path.display());

    SharedState::new(config)
        .await
        .expect("Failed to create shared state")
}

async fn franchise(state: &SharedState, name: &str) -> FranchiseId {
    let franchise = state
        .franchise_service
        .create(FranchiseInput {
            name: name.to_string(),
            description: None,
        })
        .await
        .unwrap();
    FranchiseId::new(franchise.id)
}

async fn movie(state: &SharedState, title: &str, franchise_id: Option<FranchiseId>) -> MovieId {
    let movie = state
        .movie_service
        .create(MovieInput {
            title: title.to_string(),
            genre: "Drama".to_string(),
            release_year: 2010,
            director: "Someone".to_string(),
            franchise_id: franchise_id.map(|f| f.value()),
            ..MovieInput::default()
        })
        .await
        .unwrap();
    MovieId::new(movie.id)
}

async fn character(state: &SharedState, name: &str) -> CharacterId {
    let character = state
        .character_service
        .create(CharacterInput {
            full_name: name.to_string(),
            gender: "Unknown".to_string(),
            ..CharacterInput::default()
        })
        .await
        .unwrap();
    CharacterId::new(character.id)
}

async fn movie_ids_in(state: &SharedState, id: FranchiseId) -> Vec<i32> {
    state
        .franchise_service
        .movies(id)
        .await
        .unwrap()
        .into_iter()
        .map(|m| m.id)
        .collect()
}

async fn cast_of(state: &SharedState, id: MovieId) -> Vec<i32> {
    state
        .movie_service
        .characters(id)
        .await
        .unwrap()
        .into_iter()
        .map(|c| c.id)
        .collect()
}

#[tokio::test]
async fn test_mcu_iron_man_attach_then_clear() {
    let state = shared_state().await;

    let mcu = franchise(&state, "MCU").await;
    let iron_man = movie(&state, "Iron Man", None).await;

    state
        .franchise_service
        .replace_movies(mcu, &[iron_man])
        .await
        .unwrap();

    assert_eq!(movie_ids_in(&state, mcu).await, vec![iron_man.value()]);
    let fetched = state.movie_service.get(iron_man).await.unwrap();
    assert_eq!(fetched.franchise_id, Some(mcu.value()));

    let outcome = state
        .franchise_service
        .replace_movies(mcu, &[])
        .await
        .unwrap();
    assert_eq!(outcome.detached, vec![iron_man.value()]);
    assert!(outcome.linked.is_empty());

    assert!(movie_ids_in(&state, mcu).await.is_empty());
    let fetched = state.movie_service.get(iron_man).await.unwrap();
    assert_eq!(fetched.franchise_id, None);
}

#[tokio::test]
async fn test_replace_franchise_movies_is_full_replace() {
    let state = shared_state().await;

    let f = franchise(&state, "F").await;
    let other = franchise(&state, "Other").await;
    let a = movie(&state, "A", Some(f)).await;
    let b = movie(&state, "B", Some(f)).await;
    let c = movie(&state, "C", Some(other)).await;

    let outcome = state
        .franchise_service
        .replace_movies(f, &[b, c, MovieId::new(10_000)])
        .await
        .unwrap();

    assert_eq!(outcome.linked, vec![b.value(), c.value()]);
    assert_eq!(outcome.attached, vec![c.value()]);
    assert_eq!(outcome.detached, vec![a.value()]);
    assert_eq!(outcome.ignored, vec![10_000]);

    assert_eq!(movie_ids_in(&state, f).await, vec![b.value(), c.value()]);
    // c moved out of its previous franchise
    assert!(movie_ids_in(&state, other).await.is_empty());
    assert_eq!(state.movie_service.get(a).await.unwrap().franchise_id, None);
}

#[tokio::test]
async fn test_replace_franchise_movies_is_idempotent() {
    let state = shared_state().await;

    let f = franchise(&state, "F").await;
    let a = movie(&state, "A", None).await;
    let b = movie(&state, "B", None).await;

    let request = [a, b, a];
    state.franchise_service.replace_movies(f, &request).await.unwrap();
    let once = movie_ids_in(&state, f).await;

    let second = state
        .franchise_service
        .replace_movies(f, &request)
        .await
        .unwrap();
    assert!(second.attached.is_empty());
    assert!(second.detached.is_empty());
    assert_eq!(movie_ids_in(&state, f).await, once);
}

#[tokio::test]
async fn test_replace_movie_characters_keeps_only_existing() {
    let state = shared_state().await;

    let m = movie(&state, "M", None).await;
    let x = character(&state, "X").await;
    let y = character(&state, "Y").await;
    let z = character(&state, "Z").await;

    state
        .movie_service
        .replace_characters(m, &[x, y])
        .await
        .unwrap();
    assert_eq!(cast_of(&state, m).await, vec![x.value(), y.value()]);

    let outcome = state
        .movie_service
        .replace_characters(m, &[z, CharacterId::new(31_337), z])
        .await
        .unwrap();
    assert_eq!(outcome.linked, vec![z.value()]);
    assert_eq!(outcome.ignored, vec![31_337]);
    assert_eq!(cast_of(&state, m).await, vec![z.value()]);

    // The other side of the link is kept in step
    let x_now = state.character_service.get(x).await.unwrap();
    assert!(x_now.movie_ids.is_empty());
    let z_now = state.character_service.get(z).await.unwrap();
    assert_eq!(z_now.movie_ids, vec![m.value()]);
}

#[tokio::test]
async fn test_replace_on_missing_owner_is_not_found() {
    let state = shared_state().await;
    let m = movie(&state, "M", None).await;
    let x = character(&state, "X").await;

    let err = state
        .franchise_service
        .replace_movies(FranchiseId::new(404), &[m])
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        CatalogError::NotFound {
            entity: EntityKind::Franchise,
            id: 404
        }
    ));

    let err = state
        .movie_service
        .replace_characters(MovieId::new(404), &[x])
        .await
        .unwrap_err();
    assert!(err.is_not_found());

    // No side effects on the referenced entities
    assert_eq!(state.movie_service.get(m).await.unwrap().franchise_id, None);
    assert!(state.character_service.get(x).await.unwrap().movie_ids.is_empty());
}

#[tokio::test]
async fn test_delete_franchise_keeps_movies() {
    let state = shared_state().await;

    let f = franchise(&state, "F").await;
    let a = movie(&state, "A", Some(f)).await;
    let b = movie(&state, "B", Some(f)).await;

    state.franchise_service.delete(f).await.unwrap();

    for id in [a, b] {
        let m = state.movie_service.get(id).await.unwrap();
        assert_eq!(m.franchise_id, None);
    }
    assert!(state.franchise_service.get(f).await.unwrap_err().is_not_found());
    assert!(state.franchise_service.delete(f).await.unwrap_err().is_not_found());
}

#[tokio::test]
async fn test_delete_movie_and_character_leave_no_dangling_links() {
    let state = shared_state().await;

    let m1 = movie(&state, "M1", None).await;
    let m2 = movie(&state, "M2", None).await;
    let x = character(&state, "X").await;
    let y = character(&state, "Y").await;

    state.movie_service.replace_characters(m1, &[x, y]).await.unwrap();
    state.movie_service.replace_characters(m2, &[x, y]).await.unwrap();

    state.movie_service.delete(m1).await.unwrap();
    let x_now = state.character_service.get(x).await.unwrap();
    assert_eq!(x_now.movie_ids, vec![m2.value()]);

    state.character_service.delete(y).await.unwrap();
    assert_eq!(cast_of(&state, m2).await, vec![x.value()]);
    assert_eq!(
        state.movie_service.get(m2).await.unwrap().character_ids,
        vec![x.value()]
    );

    assert!(state.movie_service.delete(m1).await.unwrap_err().is_not_found());
}

#[tokio::test]
async fn test_characters_in_franchise_deduplicates() {
    let state = shared_state().await;

    let f = franchise(&state, "F").await;
    let empty = franchise(&state, "Empty").await;
    let m1 = movie(&state, "M1", Some(f)).await;
    let m2 = movie(&state, "M2", Some(f)).await;
    let outside = movie(&state, "Outside", None).await;

    let shared = character(&state, "Shared").await;
    let only_first = character(&state, "OnlyFirst").await;
    let only_outside = character(&state, "OnlyOutside").await;

    state.movie_service.replace_characters(m1, &[shared, only_first]).await.unwrap();
    state.movie_service.replace_characters(m2, &[shared]).await.unwrap();
    state.movie_service.replace_characters(outside, &[only_outside]).await.unwrap();

    let characters = state.franchise_service.characters(f).await.unwrap();
    let ids: Vec<i32> = characters.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![shared.value(), only_first.value()]);
    assert_eq!(characters[0].movie_ids, vec![m1.value(), m2.value()]);

    assert!(state.franchise_service.characters(empty).await.unwrap().is_empty());

    let err = state
        .franchise_service
        .characters(FranchiseId::new(9_999))
        .await
        .unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_concurrent_replaces_end_in_one_intended_state() {
    let state = Arc::new(shared_state().await);

    let f = franchise(&state, "Contested").await;
    let mut first = Vec::new();
    let mut second = Vec::new();
    for i in 0..8 {
        first.push(movie(&state, &format!("first-{i}"), None).await);
        second.push(movie(&state, &format!("second-{i}"), None).await);
    }

    let expected_first: Vec<i32> = first.iter().map(|m| m.value()).collect();
    let expected_second: Vec<i32> = second.iter().map(|m| m.value()).collect();

    for _ in 0..5 {
        let a = {
            let state = Arc::clone(&state);
            let ids = first.clone();
            tokio::spawn(async move { state.franchise_service.replace_movies(f, &ids).await })
        };
        let b = {
            let state = Arc::clone(&state);
            let ids = second.clone();
            tokio::spawn(async move { state.franchise_service.replace_movies(f, &ids).await })
        };

        a.await.unwrap().unwrap();
        b.await.unwrap().unwrap();

        let end_state = movie_ids_in(&state, f).await;
        assert!(
            end_state == expected_first || end_state == expected_second,
            "mixed end state: {end_state:?}"
        );
    }
}

#[tokio::test]
async fn test_seeded_catalog_relationships() {
    let state = shared_state().await;

    assert!(cinedex::db::seed::seed_sample_data(&state.store).await.unwrap());
    assert!(!cinedex::db::seed::seed_sample_data(&state.store).await.unwrap());

    let franchises = state.franchise_service.list().await.unwrap();
    let lotr = franchises
        .iter()
        .find(|f| f.name == "The Lord of the Rings")
        .unwrap();
    assert_eq!(lotr.movie_ids.len(), 3);

    let lotr_cast = state
        .franchise_service
        .characters(FranchiseId::new(lotr.id))
        .await
        .unwrap();
    assert_eq!(lotr_cast.len(), 5);
    assert!(lotr_cast.iter().all(|c| c.movie_ids.len() == 3));
}

#[tokio::test]
async fn test_exists_tracks_create_and_delete() {
    let state = shared_state().await;

    let f = franchise(&state, "F").await;
    let m = movie(&state, "M", Some(f)).await;
    let c = character(&state, "C").await;

    assert!(state.franchise_service.exists(f).await.unwrap());
    assert!(state.movie_service.exists(m).await.unwrap());
    assert!(state.character_service.exists(c).await.unwrap());
    assert!(!state.movie_service.exists(MovieId::new(0)).await.unwrap());

    state.franchise_service.delete(f).await.unwrap();
    state.movie_service.delete(m).await.unwrap();
    state.character_service.delete(c).await.unwrap();

    assert!(!state.franchise_service.exists(f).await.unwrap());
    assert!(!state.movie_service.exists(m).await.unwrap());
    assert!(!state.character_service.exists(c).await.unwrap());
}

#[tokio::test]
async fn test_seeding_skips_a_partially_filled_catalog() {
    let state = shared_state().await;

    // Characters but no movies yet
    character(&state, "Stray").await;

    assert!(!cinedex::db::seed::seed_sample_data(&state.store).await.unwrap());

    let counts = state.store.counts().await.unwrap();
    assert_eq!(counts.characters, 1);
    assert_eq!(counts.movies, 0);
    assert_eq!(counts.franchises, 0);
}

#[tokio::test]
async fn test_bulk_replace_skips_ids_that_cannot_exist() {
    let state = shared_state().await;

    let f = franchise(&state, "F").await;
    let m = movie(&state, "M", None).await;
    let x = character(&state, "X").await;

    let outcome = state
        .franchise_service
        .replace_movies(f, &[MovieId::new(0), m, MovieId::new(-7)])
        .await
        .unwrap();
    assert_eq!(outcome.linked, vec![m.value()]);
    assert_eq!(outcome.ignored, vec![-7, 0]);

    let outcome = state
        .movie_service
        .replace_characters(m, &[CharacterId::new(-1), x])
        .await
        .unwrap();
    assert_eq!(outcome.linked, vec![x.value()]);
    assert_eq!(cast_of(&state, m).await, vec![x.value()]);
}
