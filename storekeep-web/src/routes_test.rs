//! Tests for route recognition and path rendering.

use crate::routes::AdminRoute;
use yew_router::Routable;

#[test]
fn recognizes_static_routes() {
    assert_eq!(AdminRoute::recognize("/"), Some(AdminRoute::Dashboard));
    assert_eq!(AdminRoute::recognize("/login"), Some(AdminRoute::Login));
    assert_eq!(
        AdminRoute::recognize("/register"),
        Some(AdminRoute::Register)
    );
    assert_eq!(
        AdminRoute::recognize("/products"),
        Some(AdminRoute::Products)
    );
    assert_eq!(
        AdminRoute::recognize("/products/new"),
        Some(AdminRoute::ProductNew)
    );
    assert_eq!(
        AdminRoute::recognize("/categories/new"),
        Some(AdminRoute::CategoryNew)
    );
}

#[test]
fn recognizes_parameterized_routes() {
    assert_eq!(
        AdminRoute::recognize("/products/7/edit"),
        Some(AdminRoute::ProductEdit { id: 7 })
    );
    assert_eq!(
        AdminRoute::recognize("/orders/42"),
        Some(AdminRoute::OrderDetail { id: 42 })
    );
}

#[test]
fn unknown_paths_fall_through_to_not_found() {
    assert_eq!(
        AdminRoute::recognize("/no/such/page"),
        Some(AdminRoute::NotFound)
    );
}

#[test]
fn renders_paths_back_out() {
    assert_eq!(AdminRoute::Dashboard.to_path(), "/");
    assert_eq!(
        AdminRoute::ProductEdit { id: 7 }.to_path(),
        "/products/7/edit"
    );
    assert_eq!(AdminRoute::OrderDetail { id: 42 }.to_path(), "/orders/42");
    assert_eq!(AdminRoute::NotFound.to_path(), "/404");
}

#[test]
fn routes_compare_by_variant_and_parameters() {
    assert_eq!(
        AdminRoute::ProductEdit { id: 1 },
        AdminRoute::ProductEdit { id: 1 }.clone()
    );
    assert_ne!(
        AdminRoute::ProductEdit { id: 1 },
        AdminRoute::ProductEdit { id: 2 }
    );
    assert_ne!(AdminRoute::Products, AdminRoute::Categories);
}
