//! Integration Tests for the Catalog Service
//!
//! End-to-end CRUD validation over the simulated store:
//! - Name normalization on every write path
//! - Uniqueness conflicts surfaced as client errors
//! - Three-strategy lookup resolution (number, id, name)
//! - Paging defaults and ordering
//! - Count-checked deletes

use pokedex::catalog::{CatalogError, CatalogService, Pagination};
use pokedex::constants::CATALOG_PAGE_LIMIT_DEFAULT;
use pokedex::storage::{NewPokemon, PokemonPatch, RecordId};

// =============================================================================
// Create Tests
// =============================================================================

#[tokio::test]
async fn test_create_lowercases_name() {
    let catalog = CatalogService::sim(42);

    let stored = catalog
        .create(NewPokemon::new("PiKaChU", Some(25)))
        .await
        .unwrap();

    assert_eq!(stored.name, "pikachu");
    assert_eq!(stored.no, Some(25));
    assert!(RecordId::is_valid(stored.id.as_str()));
}

#[tokio::test]
async fn test_create_duplicate_name_conflicts() {
    let catalog = CatalogService::sim(42);

    catalog
        .create(NewPokemon::new("pikachu", Some(25)))
        .await
        .unwrap();

    // Same name after normalization, different number
    let err = catalog
        .create(NewPokemon::new("Pikachu", Some(26)))
        .await
        .unwrap_err();

    assert!(
        matches!(err, CatalogError::AlreadyExists { ref field, ref value }
            if field == "name" && value == "pikachu"),
        "expected name conflict, got {err}"
    );
}

#[tokio::test]
async fn test_create_duplicate_no_conflicts() {
    let catalog = CatalogService::sim(42);

    catalog
        .create(NewPokemon::new("pikachu", Some(25)))
        .await
        .unwrap();

    let err = catalog
        .create(NewPokemon::new("raichu", Some(25)))
        .await
        .unwrap_err();

    assert!(
        matches!(err, CatalogError::AlreadyExists { ref field, ref value }
            if field == "no" && value == "25"),
        "expected no conflict, got {err}"
    );
}

#[tokio::test]
async fn test_create_rejects_empty_name() {
    let catalog = CatalogService::sim(42);

    let err = catalog.create(NewPokemon::new("   ", Some(1))).await.unwrap_err();
    assert!(matches!(err, CatalogError::EmptyName));
}

#[tokio::test]
async fn test_create_without_number() {
    let catalog = CatalogService::sim(42);

    let stored = catalog.create(NewPokemon::new("ditto", None)).await.unwrap();
    assert_eq!(stored.no, None);
}

// =============================================================================
// Lookup Tests
// =============================================================================

#[tokio::test]
async fn test_find_one_numeric_term_prefers_catalog_number() {
    let catalog = CatalogService::sim(42);

    // A record literally NAMED "25" with a different number
    catalog.create(NewPokemon::new("25", Some(7))).await.unwrap();
    let pikachu = catalog
        .create(NewPokemon::new("pikachu", Some(25)))
        .await
        .unwrap();

    // Numeric-term lookup takes priority over id and name lookups
    let found = catalog.find_one("25").await.unwrap();
    assert_eq!(found.id, pikachu.id);
    assert_eq!(found.name, "pikachu");
}

#[tokio::test]
async fn test_find_one_falls_through_to_id_lookup() {
    let catalog = CatalogService::sim(42);

    let stored = catalog
        .create(NewPokemon::new("pikachu", Some(25)))
        .await
        .unwrap();

    // A 24-hex id never parses as a number, so the id strategy resolves it
    let found = catalog.find_one(stored.id.as_str()).await.unwrap();
    assert_eq!(found.id, stored.id);
}

#[tokio::test]
async fn test_find_one_by_name_trims_and_lowercases() {
    let catalog = CatalogService::sim(42);

    catalog
        .create(NewPokemon::new("pikachu", Some(25)))
        .await
        .unwrap();

    let found = catalog.find_one("  PIKACHU  ").await.unwrap();
    assert_eq!(found.name, "pikachu");
}

#[tokio::test]
async fn test_find_one_unmatched_term_not_found() {
    let catalog = CatalogService::sim(42);

    catalog
        .create(NewPokemon::new("pikachu", Some(25)))
        .await
        .unwrap();

    let err = catalog.find_one("mewtwo").await.unwrap_err();
    assert!(
        matches!(err, CatalogError::NotFound { ref term } if term == "mewtwo"),
        "expected not found, got {err}"
    );

    // Valid id shape, nothing stored under it
    let err = catalog
        .find_one("507f1f77bcf86cd799439011")
        .await
        .unwrap_err();
    assert!(matches!(err, CatalogError::NotFound { .. }));
}

// =============================================================================
// Listing Tests
// =============================================================================

#[tokio::test]
async fn test_find_all_defaults_to_configured_page_size() {
    let catalog = CatalogService::sim(42);

    for no in 1..=10_u32 {
        catalog
            .create(NewPokemon::new(format!("species-{no}"), Some(no)))
            .await
            .unwrap();
    }

    let page = catalog.find_all(Pagination::default()).await.unwrap();
    assert_eq!(page.len(), CATALOG_PAGE_LIMIT_DEFAULT);

    // Ascending by catalog number
    let nos: Vec<Option<u32>> = page.iter().map(|r| r.no).collect();
    let expected: Vec<Option<u32>> = (1..=CATALOG_PAGE_LIMIT_DEFAULT as u32).map(Some).collect();
    assert_eq!(nos, expected);
}

#[tokio::test]
async fn test_find_all_respects_limit_and_offset() {
    let catalog = CatalogService::sim(42);

    for no in 1..=10_u32 {
        catalog
            .create(NewPokemon::new(format!("species-{no}"), Some(no)))
            .await
            .unwrap();
    }

    let page = catalog
        .find_all(Pagination::new().with_limit(3).with_offset(5))
        .await
        .unwrap();

    let nos: Vec<Option<u32>> = page.iter().map(|r| r.no).collect();
    assert_eq!(nos, vec![Some(6), Some(7), Some(8)]);
}

#[tokio::test]
async fn test_find_all_strips_storage_metadata() {
    let catalog = CatalogService::sim(42);

    catalog
        .create(NewPokemon::new("pikachu", Some(25)))
        .await
        .unwrap();

    let page = catalog.find_all(Pagination::default()).await.unwrap();
    assert!(page.iter().all(|r| r.version.is_none()));

    // Single-record lookup keeps the metadata
    let found = catalog.find_one("pikachu").await.unwrap();
    assert_eq!(found.version, Some(0));
}

// =============================================================================
// Update Tests
// =============================================================================

#[tokio::test]
async fn test_update_lowercases_patched_name() {
    let catalog = CatalogService::sim(42);

    catalog
        .create(NewPokemon::new("pikachu", Some(25)))
        .await
        .unwrap();

    let updated = catalog
        .update("25", PokemonPatch::new().with_name("RaIcHu"))
        .await
        .unwrap();
    assert_eq!(updated.name, "raichu");

    // The persisted record changed too
    let found = catalog.find_one("raichu").await.unwrap();
    assert_eq!(found.no, Some(25));
}

#[tokio::test]
async fn test_update_returns_merged_preimage() {
    let catalog = CatalogService::sim(42);

    let stored = catalog
        .create(NewPokemon::new("pikachu", Some(25)))
        .await
        .unwrap();

    let updated = catalog
        .update("pikachu", PokemonPatch::new().with_no(100))
        .await
        .unwrap();

    // Pre-update record merged with the applied patch fields
    assert_eq!(updated.id, stored.id);
    assert_eq!(updated.name, "pikachu");
    assert_eq!(updated.no, Some(100));
}

#[tokio::test]
async fn test_update_propagates_not_found() {
    let catalog = CatalogService::sim(42);

    let err = catalog
        .update("mewtwo", PokemonPatch::new().with_no(150))
        .await
        .unwrap_err();

    assert!(matches!(err, CatalogError::NotFound { ref term } if term == "mewtwo"));
}

#[tokio::test]
async fn test_update_duplicate_key_conflicts() {
    let catalog = CatalogService::sim(42);

    catalog
        .create(NewPokemon::new("pikachu", Some(25)))
        .await
        .unwrap();
    catalog
        .create(NewPokemon::new("raichu", Some(26)))
        .await
        .unwrap();

    let err = catalog
        .update("raichu", PokemonPatch::new().with_name("Pikachu"))
        .await
        .unwrap_err();

    assert!(
        matches!(err, CatalogError::AlreadyExists { ref field, .. } if field == "name"),
        "expected conflict, got {err}"
    );
}

// =============================================================================
// Remove Tests
// =============================================================================

#[tokio::test]
async fn test_remove_nonexistent_id_fails() {
    let catalog = CatalogService::sim(42);

    let id = RecordId::parse("507f1f77bcf86cd799439011").unwrap();
    let err = catalog.remove(&id).await.unwrap_err();

    assert!(matches!(err, CatalogError::NotFound { .. }));
}

#[tokio::test]
async fn test_remove_existing_then_gone() {
    let catalog = CatalogService::sim(42);

    let stored = catalog
        .create(NewPokemon::new("pikachu", Some(25)))
        .await
        .unwrap();

    catalog.remove(&stored.id).await.unwrap();

    let err = catalog.find_one(stored.id.as_str()).await.unwrap_err();
    assert!(matches!(err, CatalogError::NotFound { .. }));

    // A second remove reports zero deleted documents
    let err = catalog.remove(&stored.id).await.unwrap_err();
    assert!(matches!(err, CatalogError::NotFound { .. }));
}
