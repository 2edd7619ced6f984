use super::*;

fn product(id: &str, name: &str, price: f64) -> Product {
    Product { id: id.to_owned(), name: name.to_owned(), price }
}

fn form(name: &str, price: &str) -> ProductForm {
    ProductForm { name: name.to_owned(), price: price.to_owned() }
}

// =============================================================
// ProductForm::validate
// =============================================================

#[test]
fn validate_trims_name_and_parses_price() {
    assert_eq!(
        form("  Widget  ", " 9.99 ").validate(),
        Ok(NewProduct { name: "Widget".to_owned(), price: 9.99 })
    );
}

#[test]
fn validate_rejects_blank_name() {
    assert_eq!(form("", "1").validate(), Err(CatalogError::Validation(VALIDATION_MESSAGE)));
    assert_eq!(form("   ", "1").validate(), Err(CatalogError::Validation(VALIDATION_MESSAGE)));
}

#[test]
fn validate_rejects_zero_and_negative_price() {
    assert!(form("Widget", "0").validate().is_err());
    assert!(form("Widget", "-3.5").validate().is_err());
}

#[test]
fn validate_rejects_non_numeric_price() {
    for raw in ["", "abc", "12abc", "NaN", "inf"] {
        assert!(form("Widget", raw).validate().is_err(), "expected rejection for {raw:?}");
    }
}

#[test]
fn form_reset_clears_both_fields() {
    let mut f = form("Widget", "9.99");
    f.reset();
    assert_eq!(f, ProductForm::default());
}

// =============================================================
// Loading
// =============================================================

#[test]
fn begin_load_clears_items_and_sets_loading() {
    let mut state = CatalogState { items: vec![product("1", "A", 1.0)], ..CatalogState::default() };
    state.begin_load();
    assert!(state.items.is_empty());
    assert!(state.loading);
}

#[test]
fn finish_load_with_items_stores_them_without_message() {
    let mut state = CatalogState::default();
    state.begin_load();
    let ticket = state.finish_load(Ok(vec![product("1", "A", 1.0), product("2", "B", 2.0)]));
    assert!(ticket.is_none());
    assert!(!state.loading);
    assert_eq!(state.items.len(), 2);
    assert!(state.list_flash.current().is_none());
}

#[test]
fn finish_load_with_empty_list_shows_info_message() {
    let mut state = CatalogState::default();
    state.begin_load();
    let ticket = state.finish_load(Ok(Vec::new())).unwrap();
    assert_eq!(ticket.region, FlashRegion::List);
    let flash = state.list_flash.current().unwrap();
    assert_eq!(flash.text, EMPTY_MESSAGE);
    assert_eq!(flash.kind, FlashKind::Info);
    assert!(state.items.is_empty());
}

#[test]
fn finish_load_failure_shows_detail_and_drops_items() {
    let mut state = CatalogState { items: vec![product("1", "A", 1.0)], ..CatalogState::default() };
    let ticket = state.finish_load(Err(CatalogError::Network("Network error: Bad Gateway".to_owned())));
    assert!(ticket.is_some());
    assert!(state.items.is_empty());
    let flash = state.list_flash.current().unwrap();
    assert_eq!(flash.kind, FlashKind::Error);
    assert!(flash.text.contains("Network error: Bad Gateway"));
}

// =============================================================
// Submitting
// =============================================================

#[test]
fn begin_submit_invalid_shows_validation_error() {
    let mut state = CatalogState { form: form("", "5"), ..CatalogState::default() };
    let ticket = state.begin_submit().unwrap_err();
    assert_eq!(ticket.region, FlashRegion::Form);
    assert!(!state.submitting);
    let flash = state.form_flash.current().unwrap();
    assert_eq!(flash.text, VALIDATION_MESSAGE);
    assert_eq!(flash.kind, FlashKind::Error);
}

#[test]
fn begin_submit_valid_marks_submitting() {
    let mut state = CatalogState { form: form("Widget", "9.99"), ..CatalogState::default() };
    let body = state.begin_submit().unwrap();
    assert_eq!(body, NewProduct { name: "Widget".to_owned(), price: 9.99 });
    assert!(state.submitting);
    assert!(state.form_flash.current().is_none());
}

#[test]
fn finish_submit_success_resets_form_and_requests_reload() {
    let mut state = CatalogState { form: form("Widget", "9.99"), submitting: true, ..CatalogState::default() };
    let (ticket, reload) = state.finish_submit(Ok(()));
    assert!(reload);
    assert_eq!(ticket.region, FlashRegion::Form);
    assert!(!state.submitting);
    assert_eq!(state.form, ProductForm::default());
    assert_eq!(state.form_flash.current().unwrap().kind, FlashKind::Success);
    assert_eq!(state.form_flash.current().unwrap().text, CREATED_MESSAGE);
}

#[test]
fn finish_submit_failure_keeps_form_contents() {
    let mut state = CatalogState { form: form("Widget", "9.99"), submitting: true, ..CatalogState::default() };
    let (_, reload) = state.finish_submit(Err(CatalogError::Network("Server error: Bad Request".to_owned())));
    assert!(!reload);
    assert_eq!(state.form, form("Widget", "9.99"));
    let flash = state.form_flash.current().unwrap();
    assert_eq!(flash.text, "Server error: Bad Request");
    assert_eq!(flash.kind, FlashKind::Error);
}

#[test]
fn clear_flash_routes_ticket_to_its_region() {
    let mut state = CatalogState::default();
    let list_ticket = state.finish_load(Ok(Vec::new())).unwrap();
    let form_ticket = state.begin_submit().unwrap_err();

    assert!(state.clear_flash(list_ticket));
    assert!(state.list_flash.current().is_none());
    assert!(state.form_flash.current().is_some());

    assert!(state.clear_flash(form_ticket));
    assert!(state.form_flash.current().is_none());
}

#[test]
fn begin_load_hides_previous_list_message() {
    let mut state = CatalogState::default();
    let ticket = state.finish_load(Ok(Vec::new())).unwrap();
    state.begin_load();
    assert!(state.list_flash.current().is_none());
    assert!(!state.clear_flash(ticket));
}

#[test]
fn claim_submit_allows_only_one_submission_in_flight() {
    let mut state = CatalogState::default();
    assert!(state.claim_submit());
    assert!(!state.claim_submit());
    state.finish_submit(Ok(()));
    assert!(state.claim_submit());
}

#[test]
fn begin_submit_invalid_releases_claim() {
    let mut state = CatalogState { form: form("", "1"), ..CatalogState::default() };
    assert!(state.claim_submit());
    assert!(state.begin_submit().is_err());
    assert!(!state.submitting);
    assert!(state.claim_submit());
}
