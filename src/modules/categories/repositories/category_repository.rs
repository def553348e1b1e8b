// Category persistence
//
// MySQL-backed repository used in production plus an in-memory repository
// used by tests and by the `memory` store backend.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::MySqlPool;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::core::traits::Repository;
use crate::core::{AppError, Result};
use crate::modules::categories::models::Category;

/// Repository for category persistence
pub trait CategoryRepository: Repository<Category> {}

fn duplicate_name(name: &str) -> String {
    format!("Category with name '{}' already exists", name)
}

const SELECT_CATEGORY: &str = r#"
    SELECT id, name, image, description, tax_applicable, tax, tax_type,
           created_at, updated_at
    FROM categories
"#;

/// Raw database row for a category
#[derive(Debug, sqlx::FromRow)]
struct CategoryRow {
    id: String,
    name: String,
    image: String,
    description: String,
    tax_applicable: bool,
    tax: Decimal,
    tax_type: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<CategoryRow> for Category {
    type Error = AppError;

    fn try_from(row: CategoryRow) -> Result<Self> {
        Ok(Category {
            id: Uuid::parse_str(&row.id)
                .map_err(|e| AppError::internal(format!("Invalid category id '{}': {}", row.id, e)))?,
            name: row.name,
            image: row.image,
            description: row.description,
            tax_applicable: row.tax_applicable,
            tax: row.tax,
            tax_type: row.tax_type.parse().map_err(AppError::Internal)?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

/// MySQL implementation of the category repository
pub struct MySqlCategoryRepository {
    pool: MySqlPool,
}

impl MySqlCategoryRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Repository<Category> for MySqlCategoryRepository {
    async fn create(&self, category: &Category) -> Result<Category> {
        sqlx::query(
            r#"
            INSERT INTO categories (
                id, name, image, description, tax_applicable, tax, tax_type,
                created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(category.id.to_string())
        .bind(&category.name)
        .bind(&category.image)
        .bind(&category.description)
        .bind(category.tax_applicable)
        .bind(category.tax)
        .bind(category.tax_type.to_string())
        .bind(category.created_at)
        .bind(category.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::from_store(e, || duplicate_name(&category.name)))?;

        // Columns are DECIMAL(19, 4), so return what the database stored.
        self.find_by_id(category.id).await?.ok_or_else(|| {
            AppError::internal(format!("Category {} missing after insert", category.id))
        })
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Category>> {
        let row = sqlx::query_as::<_, CategoryRow>(&format!("{} WHERE id = ?", SELECT_CATEGORY))
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await?;

        row.map(Category::try_from).transpose()
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Category>> {
        let row = sqlx::query_as::<_, CategoryRow>(&format!(
            "{} WHERE name = ? ORDER BY created_at, id LIMIT 1",
            SELECT_CATEGORY
        ))
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;

        row.map(Category::try_from).transpose()
    }

    async fn update(&self, category: &Category) -> Result<Option<Category>> {
        sqlx::query(
            r#"
            UPDATE categories
            SET name = ?, image = ?, description = ?, tax_applicable = ?, tax = ?,
                tax_type = ?, updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(&category.name)
        .bind(&category.image)
        .bind(&category.description)
        .bind(category.tax_applicable)
        .bind(category.tax)
        .bind(category.tax_type.to_string())
        .bind(category.updated_at)
        .bind(category.id.to_string())
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::from_store(e, || duplicate_name(&category.name)))?;

        self.find_by_id(category.id).await
    }

    async fn list(&self) -> Result<Vec<Category>> {
        let rows = sqlx::query_as::<_, CategoryRow>(&format!(
            "{} ORDER BY created_at, id",
            SELECT_CATEGORY
        ))
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Category::try_from).collect()
    }

    async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

impl CategoryRepository for MySqlCategoryRepository {}

/// In-memory implementation of the category repository
#[derive(Default)]
pub struct InMemoryCategoryRepository {
    categories: RwLock<Vec<Category>>,
}

impl InMemoryCategoryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Repository<Category> for InMemoryCategoryRepository {
    async fn create(&self, category: &Category) -> Result<Category> {
        let mut categories = self.categories.write().await;

        if categories.iter().any(|c| c.name == category.name) {
            return Err(AppError::validation(duplicate_name(&category.name)));
        }

        categories.push(category.clone());
        Ok(category.clone())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Category>> {
        let categories = self.categories.read().await;
        Ok(categories.iter().find(|c| c.id == id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Category>> {
        let categories = self.categories.read().await;
        Ok(categories.iter().find(|c| c.name == name).cloned())
    }

    async fn update(&self, category: &Category) -> Result<Option<Category>> {
        let mut categories = self.categories.write().await;

        if categories
            .iter()
            .any(|c| c.id != category.id && c.name == category.name)
        {
            return Err(AppError::validation(duplicate_name(&category.name)));
        }

        let Some(slot) = categories.iter_mut().find(|c| c.id == category.id) else {
            return Ok(None);
        };
        *slot = category.clone();

        Ok(Some(category.clone()))
    }

    async fn list(&self) -> Result<Vec<Category>> {
        Ok(self.categories.read().await.clone())
    }

    async fn ping(&self) -> Result<()> {
        Ok(())
    }
}

impl CategoryRepository for InMemoryCategoryRepository {}
