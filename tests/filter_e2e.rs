//! End-to-end filtering scenarios against the in-memory override store.

use std::sync::Arc;

use handlefilter::{
    FilterPolicy, FixedContext, Handle, HandleFilterEngine, HandleSet, InMemoryOverrideStore,
    StoreId, ThemeId,
};

fn request_handles() -> HandleSet {
    HandleSet::from_names([
        "default",
        "catalog_product_view",
        "catalog_product_view_type_simple",
        "catalog_product_view_id_712",
        "catalog_product_view_sku_WS08-M-Blue",
        "catalog_category_view_id_38",
    ])
    .unwrap()
}

#[test]
fn full_pass_prunes_all_entity_handles_without_overrides() {
    let engine = HandleFilterEngine::new(
        FilterPolicy::remove_all(),
        Arc::new(InMemoryOverrideStore::new()),
    );

    let filtered = engine
        .filter(request_handles(), StoreId::new(1), ThemeId::new(4))
        .unwrap();

    let names: Vec<&str> = filtered.iter().map(Handle::as_str).collect();
    assert_eq!(
        names,
        vec![
            "default",
            "catalog_product_view",
            "catalog_product_view_type_simple",
        ]
    );
}

#[test]
fn overridden_handles_survive_a_full_pass() {
    let store = StoreId::new(1);
    let theme = ThemeId::new(4);

    let overrides = InMemoryOverrideStore::new();
    overrides
        .insert(store, theme, Handle::new("catalog_product_view_id_712").unwrap())
        .unwrap();
    overrides
        .insert(store, theme, Handle::new("catalog_category_view_id_38").unwrap())
        .unwrap();

    let engine = HandleFilterEngine::new(FilterPolicy::remove_all(), Arc::new(overrides));

    let filtered = engine.filter(request_handles(), store, theme).unwrap();

    let names: Vec<&str> = filtered.iter().map(Handle::as_str).collect();
    assert_eq!(
        names,
        vec![
            "default",
            "catalog_product_view",
            "catalog_product_view_type_simple",
            "catalog_product_view_id_712",
            "catalog_category_view_id_38",
        ]
    );
}

#[test]
fn policy_loaded_from_json_gates_categories() {
    let policy: FilterPolicy = serde_json::from_str(
        r#"{
            "enabled": true,
            "remove_category_ids": false,
            "remove_product_ids": true,
            "remove_product_skus": true
        }"#,
    )
    .unwrap();

    let engine = HandleFilterEngine::new(policy, Arc::new(InMemoryOverrideStore::new()));

    let filtered = engine
        .filter(request_handles(), StoreId::new(1), ThemeId::new(4))
        .unwrap();

    assert!(filtered.contains_name("catalog_category_view_id_38"));
    assert!(!filtered.contains_name("catalog_product_view_id_712"));
    assert!(!filtered.contains_name("catalog_product_view_sku_WS08-M-Blue"));
}

#[test]
fn resolver_driven_pass_matches_explicit_scope() {
    let store = StoreId::new(2);
    let theme = ThemeId::new(7);

    let overrides = InMemoryOverrideStore::new();
    overrides
        .insert(store, theme, Handle::new("catalog_product_view_id_712").unwrap())
        .unwrap();
    let overrides = Arc::new(overrides);

    let explicit = HandleFilterEngine::new(FilterPolicy::remove_all(), overrides.clone());
    let resolved = HandleFilterEngine::new(FilterPolicy::remove_all(), overrides);

    let via_explicit = explicit.filter(request_handles(), store, theme).unwrap();
    let via_resolver = resolved
        .filter_with_context(request_handles(), &FixedContext::new(store, theme))
        .unwrap();

    assert_eq!(via_explicit, via_resolver);
}
