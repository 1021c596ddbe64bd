//! Products, categories and subcategories

use axum::extract::{Path, State};
use axum::routing::{get, post, put};
use axum::{Json, Router};
use serde_json::{Value, json};
use shared::models::{
    Category, CategoryDraft, Product, ProductDraft, Subcategory, SubcategoryDraft,
};
use shared::response::ApiStatus;
use shared::validation::MAX_CATEGORIES;

use super::ack;
use crate::error::{MockError, MockResult};
use crate::state::MockState;

pub(super) fn routes() -> Router<MockState> {
    Router::new()
        .route("/products", get(list_products).post(create_product))
        .route(
            "/products/{id}",
            get(get_product).put(update_product).delete(delete_product),
        )
        .route("/categories", post(create_category))
        .route("/categories/admin", get(list_categories))
        .route("/categories/{id}", put(update_category).delete(delete_category))
        .route(
            "/categories/subcategory",
            get(list_subcategories).post(create_subcategory),
        )
        .route(
            "/categories/subcategory/{id}",
            put(update_subcategory).delete(delete_subcategory),
        )
}

// ── Products ────────────────────────────────────────────────────────

fn check_product(draft: &ProductDraft) -> MockResult<()> {
    if draft.name.trim().is_empty() {
        return Err(MockError::Validation("Product name is required".into()));
    }
    if draft.price < 0.0 {
        return Err(MockError::Validation("Price must not be negative".into()));
    }
    if draft.images.is_empty() {
        return Err(MockError::Validation("At least one image is required".into()));
    }
    Ok(())
}

/// `{ success, data: [...] }`
async fn list_products(State(state): State<MockState>) -> Json<Value> {
    Json(json!({ "success": true, "data": state.read().products }))
}

async fn get_product(
    State(state): State<MockState>,
    Path(id): Path<String>,
) -> MockResult<Json<Value>> {
    let store = state.read();
    let product = store
        .products
        .iter()
        .find(|p| p.id == id)
        .ok_or_else(|| MockError::not_found("Product", &id))?;
    Ok(Json(json!({ "success": true, "product": product })))
}

async fn create_product(
    State(state): State<MockState>,
    Json(draft): Json<ProductDraft>,
) -> MockResult<Json<Value>> {
    check_product(&draft)?;
    let mut store = state.write();
    let id = store.next_id("p");
    let product: Product = draft.into_product(id);
    store.products.push(product.clone());
    tracing::info!(product = %product.id, "product created");
    Ok(Json(json!({ "success": true, "product": product })))
}

async fn update_product(
    State(state): State<MockState>,
    Path(id): Path<String>,
    Json(draft): Json<ProductDraft>,
) -> MockResult<Json<Value>> {
    check_product(&draft)?;
    let mut store = state.write();
    let slot = store
        .products
        .iter_mut()
        .find(|p| p.id == id)
        .ok_or_else(|| MockError::not_found("Product", &id))?;
    *slot = draft.into_product(id);
    Ok(Json(json!({ "success": true, "product": slot })))
}

async fn delete_product(
    State(state): State<MockState>,
    Path(id): Path<String>,
) -> MockResult<Json<ApiStatus>> {
    let mut store = state.write();
    let before = store.products.len();
    store.products.retain(|p| p.id != id);
    if store.products.len() == before {
        return Err(MockError::not_found("Product", &id));
    }
    Ok(ack("Product deleted"))
}

// ── Categories ──────────────────────────────────────────────────────

/// `{ success, categories: [...] }`
async fn list_categories(State(state): State<MockState>) -> Json<Value> {
    Json(json!({ "success": true, "categories": state.read().categories }))
}

fn title_taken(categories: &[Category], title: &str, except: Option<&str>) -> bool {
    categories
        .iter()
        .any(|c| Some(c.id.as_str()) != except && c.title.eq_ignore_ascii_case(title.trim()))
}

async fn create_category(
    State(state): State<MockState>,
    Json(draft): Json<CategoryDraft>,
) -> MockResult<Json<Value>> {
    if draft.title.trim().is_empty() {
        return Err(MockError::Validation("Category title is required".into()));
    }
    let mut store = state.write();
    if store.categories.len() >= MAX_CATEGORIES {
        return Err(MockError::Validation(format!(
            "A maximum of {} categories is allowed",
            MAX_CATEGORIES
        )));
    }
    if title_taken(&store.categories, &draft.title, None) {
        return Err(MockError::Validation("Category already exists".into()));
    }
    let category = Category {
        id: store.next_id("cat"),
        title: draft.title,
        items: draft.items,
        image: None,
    };
    store.categories.push(category.clone());
    Ok(Json(json!({ "success": true, "category": category })))
}

async fn update_category(
    State(state): State<MockState>,
    Path(id): Path<String>,
    Json(draft): Json<CategoryDraft>,
) -> MockResult<Json<Value>> {
    let mut store = state.write();
    if title_taken(&store.categories, &draft.title, Some(&id)) {
        return Err(MockError::Validation("Category already exists".into()));
    }
    let category = store
        .categories
        .iter_mut()
        .find(|c| c.id == id)
        .ok_or_else(|| MockError::not_found("Category", &id))?;
    category.title = draft.title;
    category.items = draft.items;
    Ok(Json(json!({ "success": true, "category": category })))
}

async fn delete_category(
    State(state): State<MockState>,
    Path(id): Path<String>,
) -> MockResult<Json<ApiStatus>> {
    let mut store = state.write();
    let before = store.categories.len();
    store.categories.retain(|c| c.id != id);
    if store.categories.len() == before {
        return Err(MockError::NotFound("Category not found".into()));
    }
    store.subcategories.retain(|s| s.category_id != id);
    Ok(ack("Category deleted"))
}

// ── Subcategories ───────────────────────────────────────────────────

/// Bare array
async fn list_subcategories(State(state): State<MockState>) -> Json<Vec<Subcategory>> {
    Json(state.read().subcategories.clone())
}

fn check_subcategory(state: &MockState, draft: &SubcategoryDraft) -> MockResult<()> {
    if draft.name.trim().is_empty() {
        return Err(MockError::Validation("Subcategory name is required".into()));
    }
    if !state.read().categories.iter().any(|c| c.id == draft.category_id) {
        return Err(MockError::not_found("Category", &draft.category_id));
    }
    Ok(())
}

async fn create_subcategory(
    State(state): State<MockState>,
    Json(draft): Json<SubcategoryDraft>,
) -> MockResult<Json<ApiStatus>> {
    check_subcategory(&state, &draft)?;
    let mut store = state.write();
    let id = store.next_id("sub");
    store.subcategories.push(Subcategory {
        id,
        category_id: draft.category_id,
        name: draft.name,
    });
    Ok(ack("Subcategory created"))
}

async fn update_subcategory(
    State(state): State<MockState>,
    Path(id): Path<String>,
    Json(draft): Json<SubcategoryDraft>,
) -> MockResult<Json<ApiStatus>> {
    check_subcategory(&state, &draft)?;
    let mut store = state.write();
    let sub = store
        .subcategories
        .iter_mut()
        .find(|s| s.id == id)
        .ok_or_else(|| MockError::not_found("Subcategory", &id))?;
    sub.category_id = draft.category_id;
    sub.name = draft.name;
    Ok(ack("Subcategory updated"))
}

async fn delete_subcategory(
    State(state): State<MockState>,
    Path(id): Path<String>,
) -> MockResult<Json<ApiStatus>> {
    let mut store = state.write();
    let before = store.subcategories.len();
    store.subcategories.retain(|s| s.id != id);
    if store.subcategories.len() == before {
        return Err(MockError::not_found("Subcategory", &id));
    }
    Ok(ack("Subcategory deleted"))
}
