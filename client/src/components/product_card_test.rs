use super::*;

fn product(id: &str, name: &str, price: f64) -> Product {
    Product { id: id.to_owned(), name: name.to_owned(), price }
}

#[test]
fn format_price_always_has_two_decimals() {
    assert_eq!(format_price(9.99), "R$ 9.99");
    assert_eq!(format_price(10.0), "R$ 10.00");
    assert_eq!(format_price(0.5), "R$ 0.50");
    assert_eq!(format_price(1234.5678), "R$ 1234.57");
}

#[test]
fn card_view_shows_name_price_and_id() {
    let view = ProductCardView::from(&product("42", "Widget", 9.99));
    assert_eq!(
        view,
        ProductCardView {
            id: "42".to_owned(),
            name: "Widget".to_owned(),
            price_label: "Price: R$ 9.99".to_owned(),
            id_label: "ID: 42".to_owned(),
        }
    );
}

#[test]
fn card_views_map_one_to_one_with_products() {
    let products = vec![product("1", "A", 1.0), product("2", "B", 2.25), product("x-3", "C", 3.333)];
    let views: Vec<ProductCardView> = products.iter().map(ProductCardView::from).collect();

    assert_eq!(views.len(), products.len());
    for (view, product) in views.iter().zip(&products) {
        assert_eq!(view.name, product.name);
        assert_eq!(view.id, product.id);
        assert_eq!(view.id_label, format!("ID: {}", product.id));
    }
    assert_eq!(views[2].price_label, "Price: R$ 3.33");
}

#[test]
fn card_view_keeps_opaque_id_verbatim() {
    let view = ProductCardView::from(&product("  weird id/1 ", "A", 1.0));
    assert_eq!(view.id, "  weird id/1 ");
}
