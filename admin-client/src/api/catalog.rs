use serde_json::Value;
use shared::envelope;
use shared::models::{
    Category, CategoryDraft, Product, ProductDraft, Subcategory, SubcategoryDraft,
};

use super::{expect_ack, segment};
use crate::ClientResult;
use crate::http::HttpClient;

pub struct ProductsApi<'a, C> {
    http: &'a C,
}

impl<'a, C: HttpClient> ProductsApi<'a, C> {
    pub(crate) fn new(http: &'a C) -> Self {
        Self { http }
    }

    /// GET /products
    pub async fn list(&self) -> ClientResult<Vec<Product>> {
        let value: Value = self.http.get("/products").await?;
        Ok(envelope::list_from_value(value, "products")?)
    }

    /// GET /products/{id}
    pub async fn get(&self, id: &str) -> ClientResult<Product> {
        let value: Value = self.http.get(&format!("/products/{}", segment(id))).await?;
        Ok(envelope::entity_from_value(value, "product")?)
    }

    /// POST /products
    pub async fn create(&self, draft: &ProductDraft) -> ClientResult<Product> {
        let value: Value = self.http.post("/products", draft).await?;
        Ok(envelope::entity_from_value(value, "product")?)
    }

    /// PUT /products/{id}
    pub async fn update(&self, id: &str, draft: &ProductDraft) -> ClientResult<()> {
        let value: Value = self.http.put(&format!("/products/{}", segment(id)), draft).await?;
        expect_ack(value)
    }

    /// DELETE /products/{id}
    pub async fn delete(&self, id: &str) -> ClientResult<()> {
        let value: Value = self.http.delete(&format!("/products/{}", segment(id))).await?;
        expect_ack(value)
    }
}

pub struct CategoriesApi<'a, C> {
    http: &'a C,
}

impl<'a, C: HttpClient> CategoriesApi<'a, C> {
    pub(crate) fn new(http: &'a C) -> Self {
        Self { http }
    }

    /// GET /categories/admin
    pub async fn list(&self) -> ClientResult<Vec<Category>> {
        let value: Value = self.http.get("/categories/admin").await?;
        Ok(envelope::list_from_value(value, "categories")?)
    }

    /// POST /categories, returns the stored category
    pub async fn create(&self, draft: &CategoryDraft) -> ClientResult<Category> {
        let value: Value = self.http.post("/categories", draft).await?;
        Ok(envelope::entity_from_value(value, "category")?)
    }

    /// PUT /categories/{id}, returns the stored category
    pub async fn update(&self, id: &str, draft: &CategoryDraft) -> ClientResult<Category> {
        let value: Value = self.http.put(&format!("/categories/{}", segment(id)), draft).await?;
        Ok(envelope::entity_from_value(value, "category")?)
    }

    /// DELETE /categories/{id}
    pub async fn delete(&self, id: &str) -> ClientResult<()> {
        let value: Value = self.http.delete(&format!("/categories/{}", segment(id))).await?;
        expect_ack(value)
    }
}

pub struct SubcategoriesApi<'a, C> {
    http: &'a C,
}

impl<'a, C: HttpClient> SubcategoriesApi<'a, C> {
    pub(crate) fn new(http: &'a C) -> Self {
        Self { http }
    }

    /// GET /categories/subcategory (bare array or `{ categories }`)
    pub async fn list(&self) -> ClientResult<Vec<Subcategory>> {
        let value: Value = self.http.get("/categories/subcategory").await?;
        Ok(envelope::list_from_value(value, "categories")?)
    }

    /// POST /categories/subcategory
    pub async fn create(&self, draft: &SubcategoryDraft) -> ClientResult<()> {
        let value: Value = self.http.post("/categories/subcategory", draft).await?;
        expect_ack(value)
    }

    /// PUT /categories/subcategory/{id}
    pub async fn update(&self, id: &str, draft: &SubcategoryDraft) -> ClientResult<()> {
        let value: Value = self
            .http
            .put(&format!("/categories/subcategory/{}", segment(id)), draft)
            .await?;
        expect_ack(value)
    }

    /// DELETE /categories/subcategory/{id}
    pub async fn delete(&self, id: &str) -> ClientResult<()> {
        let value: Value = self
            .http
            .delete(&format!("/categories/subcategory/{}", segment(id)))
            .await?;
        expect_ack(value)
    }
}
