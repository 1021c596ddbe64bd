use crate::models::{Category, CategoryDraft, Product, ProductDraft, Subcategory, SubcategoryDraft};
use crate::validation::{self, FormError, MAX_NAME_LEN, MAX_NOTE_LEN, MAX_URL_LEN};

/// Category form; `items` is the comma-separated subcategory list as typed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryForm {
    pub title: String,
    pub items: String,
}

impl CategoryForm {
    pub fn new(title: impl Into<String>, items: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            items: items.into(),
        }
    }

    pub fn from_category(category: &Category) -> Self {
        Self {
            title: category.title.clone(),
            items: category.items.join(", "),
        }
    }

    pub fn validate(&self) -> Result<CategoryDraft, FormError> {
        Ok(CategoryDraft {
            title: validation::required_text(&self.title, "title", MAX_NAME_LEN)?,
            items: validation::split_items(&self.items),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubcategoryForm {
    pub category_id: String,
    pub name: String,
}

impl SubcategoryForm {
    pub fn new(category_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            category_id: category_id.into(),
            name: name.into(),
        }
    }

    pub fn from_subcategory(subcategory: &Subcategory) -> Self {
        Self::new(subcategory.category_id.clone(), subcategory.name.clone())
    }

    /// Both the parent category and the name are required.
    pub fn validate(&self) -> Result<SubcategoryDraft, FormError> {
        Ok(SubcategoryDraft {
            category_id: validation::required_text(&self.category_id, "category", MAX_NAME_LEN)?,
            name: validation::required_text(&self.name, "name", MAX_NAME_LEN)?,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductForm {
    pub name: String,
    pub price: String,
    pub category: String,
    pub description: String,
    /// Image references; uploading is handled elsewhere
    pub images: Vec<String>,
    /// Blank means "not tracked"
    pub stock: String,
    pub is_trending: bool,
    pub is_top_product: bool,
}

impl ProductForm {
    pub fn from_product(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            price: product.price.to_string(),
            category: product.category.clone(),
            description: product.description.clone(),
            images: product.images.clone(),
            stock: product.stock.map(|s| s.to_string()).unwrap_or_default(),
            is_trending: product.is_trending,
            is_top_product: product.is_top_product,
        }
    }

    pub fn validate(&self) -> Result<ProductDraft, FormError> {
        let name = validation::required_text(&self.name, "name", MAX_NAME_LEN)?;
        let price = validation::non_negative(&self.price, "price")?;
        let category = validation::required_text(&self.category, "category", MAX_NAME_LEN)?;
        let stock = validation::optional_count(&self.stock, "stock")?;

        let mut images = Vec::with_capacity(self.images.len());
        for image in self.images.iter().filter(|i| !i.trim().is_empty()) {
            images.push(validation::required_text(image, "image", MAX_URL_LEN)?);
        }
        if images.is_empty() {
            return Err(FormError::Missing { what: "image" });
        }

        let description = validation::optional_text(Some(&self.description), "description", MAX_NOTE_LEN)?
            .unwrap_or_default();

        Ok(ProductDraft {
            name,
            price,
            category,
            images,
            description,
            stock,
            is_trending: self.is_trending,
            is_top_product: self.is_top_product,
        })
    }
}
