//! End-to-end tests for the collection binder (v0.1)
//!
//! Exercises the full `bind_model` entry point over realistic value spaces:
//! - explicit-index binding via `<name>.index`
//! - implicit sequential indexes with gap termination
//! - flat multi-valued fields
//! - in-place binding into a pre-supplied destination

use formbind::{
    parse_query, BindingContext, BoundCollection, CollectionBinder, FormProvider, Locale,
    ParseBinder,
};

// ============================================================================
// TEST HELPERS
// ============================================================================

fn int_binder() -> ParseBinder<i64> {
    ParseBinder::new()
}

async fn bind_ints(provider: &FormProvider, name: &str) -> BoundCollection<i64> {
    let binder = int_binder();
    let mut cx = BindingContext::new(name, provider, &binder);
    CollectionBinder::new().bind_model(&mut cx).await
}

// ============================================================================
// Explicit-index convention
// ============================================================================

#[tokio::test]
async fn explicit_index_list_binds_in_token_order() {
    let mut provider = FormProvider::new();
    provider.insert_array("someName.index", ["foo", "bar", "baz"]);
    provider.insert("someName[foo]", "42");
    provider.insert("someName[bar]", "100");
    provider.insert("someName[baz]", "200");

    let bound = bind_ints(&provider, "someName").await;
    assert_eq!(bound.into_vec(), Some(vec![42, 100, 200]));
}

#[tokio::test]
async fn explicit_index_list_defaults_missing_tokens() {
    let mut provider = FormProvider::new();
    provider.insert_array("someName.index", ["foo", "bar", "baz"]);
    provider.insert("someName[foo]", "42");
    provider.insert("someName[baz]", "200");

    let bound = bind_ints(&provider, "someName").await;
    assert_eq!(bound.into_vec(), Some(vec![42, 0, 200]));
}

#[tokio::test]
async fn explicit_index_takes_priority_over_flat_value() {
    let mut provider = FormProvider::new();
    provider.insert_array("someName.index", ["a"]);
    provider.insert("someName[a]", "7");
    provider.insert("someName", "999");

    let bound = bind_ints(&provider, "someName").await;
    assert_eq!(bound.into_vec(), Some(vec![7]));
}

#[tokio::test]
async fn scalar_index_value_is_a_single_token() {
    let mut provider = FormProvider::new();
    provider.insert("someName.index", "only");
    provider.insert("someName[only]", "5");

    let bound = bind_ints(&provider, "someName").await;
    assert_eq!(bound.into_vec(), Some(vec![5]));
}

// ============================================================================
// Implicit-index convention
// ============================================================================

#[tokio::test]
async fn implicit_indexes_bind_contiguous_prefix() {
    let provider = parse_query("someName[0]=42&someName[1]=100&someName[3]=400").unwrap();

    let bound = bind_ints(&provider, "someName").await;
    assert_eq!(bound.into_vec(), Some(vec![42, 100]));
}

#[tokio::test]
async fn nothing_under_any_convention_is_not_bound() {
    let provider = parse_query("otherName=1").unwrap();

    let bound = bind_ints(&provider, "someName").await;
    assert_eq!(bound, BoundCollection::NotBound);
    assert!(!bound.is_bound());
}

// ============================================================================
// Flat-field convention
// ============================================================================

#[tokio::test]
async fn repeated_flat_field_binds_in_array_order() {
    let provider = parse_query("someName=42&someName=100&someName=200").unwrap();

    let bound = bind_ints(&provider, "someName").await;
    assert_eq!(bound.into_vec(), Some(vec![42, 100, 200]));
}

#[tokio::test]
async fn flat_field_drops_unconvertible_tokens() {
    let provider = parse_query("someName=42&someName=abc&someName=200").unwrap();

    let binder = int_binder();
    let mut cx = BindingContext::new("someName", &provider, &binder);
    let bound = CollectionBinder::new().bind_model(&mut cx).await;

    assert_eq!(bound.into_vec(), Some(vec![42, 200]));
    assert!(!cx.state.is_valid());
    assert_eq!(cx.state.invalid_values()[0].raw, "abc");
}

#[tokio::test]
async fn present_but_empty_field_binds_empty_collection() {
    let mut provider = FormProvider::new();
    provider.insert_empty("someName");

    let bound = bind_ints(&provider, "someName").await;
    assert!(bound.is_bound());
    assert_eq!(bound.into_vec(), Some(vec![]));
}

// ============================================================================
// Destination selection
// ============================================================================

#[tokio::test]
async fn pre_supplied_destination_is_appended_in_place() {
    let provider = parse_query("someName=42&someName=100&someName=200").unwrap();

    let binder = int_binder();
    let mut dest: Vec<i64> = Vec::new();
    let mut cx = BindingContext::new("someName", &provider, &binder)
        .with_existing(&mut dest)
        .read_only();
    let bound = CollectionBinder::new().bind_model(&mut cx).await;

    assert_eq!(bound, BoundCollection::InPlace);
    assert_eq!(dest, vec![42, 100, 200]);
}

#[tokio::test]
async fn in_place_binding_appends_after_existing_elements() {
    let mut provider = FormProvider::new();
    provider.insert_array("someName.index", ["a", "b"]);
    provider.insert("someName[a]", "1");
    provider.insert("someName[b]", "2");

    let binder = int_binder();
    let mut dest = vec![-1];
    let mut cx = BindingContext::new("someName", &provider, &binder).with_existing(&mut dest);
    let bound = CollectionBinder::new().bind_model(&mut cx).await;

    assert_eq!(bound, BoundCollection::InPlace);
    assert_eq!(dest, vec![-1, 1, 2]);
}

#[tokio::test]
async fn not_bound_leaves_destination_untouched() {
    let provider = FormProvider::new();

    let binder = int_binder();
    let mut dest = vec![7];
    let mut cx = BindingContext::new("someName", &provider, &binder).with_existing(&mut dest);
    let bound = CollectionBinder::new().bind_model(&mut cx).await;

    assert_eq!(bound, BoundCollection::NotBound);
    assert_eq!(dest, vec![7]);
}

// ============================================================================
// Determinism and locale
// ============================================================================

#[tokio::test]
async fn binding_twice_yields_equal_sequences() {
    let provider = parse_query("someName[0]=1&someName[1]=2").unwrap();

    let first = bind_ints(&provider, "someName").await.into_vec();
    let second = bind_ints(&provider, "someName").await.into_vec();
    assert_eq!(first, second);
    assert_eq!(first, Some(vec![1, 2]));
}

#[tokio::test]
async fn locale_hint_reaches_element_conversion() {
    let provider = parse_query("price[0]=3%2C5&price[1]=1%2C25").unwrap();

    let binder = ParseBinder::<f64>::new();
    let mut cx = BindingContext::new("price", &provider, &binder).with_locale(Locale::new("fr-FR"));
    let bound = CollectionBinder::<f64>::new().bind_model(&mut cx).await;

    assert_eq!(bound.into_vec(), Some(vec![3.5, 1.25]));
    assert!(cx.state.is_valid());
}

#[tokio::test]
async fn string_elements_bind_without_conversion_loss() {
    let provider = parse_query("tag=red&tag=green+blue").unwrap();

    let binder = ParseBinder::<String>::new();
    let mut cx = BindingContext::new("tag", &provider, &binder);
    let bound = CollectionBinder::<String>::new().bind_model(&mut cx).await;

    assert_eq!(
        bound.into_vec(),
        Some(vec!["red".to_string(), "green blue".to_string()])
    );
}
