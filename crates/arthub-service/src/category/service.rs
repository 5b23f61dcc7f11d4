//! Category service.

use std::sync::Arc;

use tracing::info;

use arthub_core::error::AppError;
use arthub_core::result::AppResult;
use arthub_database::repositories::CategoryRepository;
use arthub_entity::category::{Category, CategoryWithCount};

/// Category listing and maintenance.
///
/// Category names are unique case-insensitively; a category holding
/// artworks cannot be deleted.
#[derive(Debug, Clone)]
pub struct CategoryService {
    categories: Arc<CategoryRepository>,
}

impl CategoryService {
    /// Create a new category service.
    pub fn new(categories: Arc<CategoryRepository>) -> Self {
        Self { categories }
    }

    /// List all categories with artwork counts.
    pub async fn list(&self) -> AppResult<Vec<CategoryWithCount>> {
        self.categories.list_with_counts().await
    }

    /// Create a category.
    pub async fn create(&self, name: &str, description: Option<&str>) -> AppResult<Category> {
        if self.categories.name_taken(name, None).await? {
            return Err(AppError::conflict("Bu kategori zaten mevcut"));
        }

        let category = self.categories.create(name, description).await?;
        info!(category_id = category.id, name = %category.name, "category created");
        Ok(category)
    }

    /// Rename or re-describe a category.
    pub async fn update(
        &self,
        id: i64,
        name: &str,
        description: Option<&str>,
    ) -> AppResult<Category> {
        if self.categories.find_by_id(id).await?.is_none() {
            return Err(AppError::not_found("Kategori bulunamadı"));
        }

        if self.categories.name_taken(name, Some(id)).await? {
            return Err(AppError::conflict("Bu kategori adı zaten kullanımda"));
        }

        self.categories
            .update(id, name, description)
            .await?
            .ok_or_else(|| AppError::not_found("Kategori bulunamadı"))
    }

    /// Delete a category, refusing while it still has artworks.
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        if self.categories.find_by_id(id).await?.is_none() {
            return Err(AppError::not_found("Kategori bulunamadı"));
        }

        if self.categories.artwork_count(id).await? > 0 {
            return Err(AppError::validation(
                "Bu kategoride eserler bulunduğu için silinemez",
            ));
        }

        self.categories.delete(id).await?;
        info!(category_id = id, "category deleted");
        Ok(())
    }
}
