use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::MySqlPool;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::core::traits::Repository;
use crate::core::{AppError, Result};
use crate::modules::subcategories::models::SubCategory;

/// Repository for subcategory persistence
#[async_trait]
pub trait SubCategoryRepository: Repository<SubCategory> {
    /// List subcategories owned by a category
    async fn list_by_category(&self, category_id: Uuid) -> Result<Vec<SubCategory>>;
}

fn duplicate_name(name: &str) -> String {
    format!("SubCategory '{}' already exists in this category", name)
}

const SELECT_SUBCATEGORY: &str = r#"
    SELECT id, name, category_id, image, description, tax_applicable, tax,
           created_at, updated_at
    FROM sub_categories
"#;

#[derive(Debug, sqlx::FromRow)]
struct SubCategoryRow {
    id: String,
    name: String,
    category_id: String,
    image: String,
    description: String,
    tax_applicable: Option<bool>,
    tax: Option<Decimal>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<SubCategoryRow> for SubCategory {
    type Error = AppError;

    fn try_from(row: SubCategoryRow) -> Result<Self> {
        let parse = |raw: &str| {
            Uuid::parse_str(raw)
                .map_err(|e| AppError::internal(format!("Invalid subcategory reference '{}': {}", raw, e)))
        };

        Ok(SubCategory {
            id: parse(&row.id)?,
            name: row.name,
            category: parse(&row.category_id)?,
            image: row.image,
            description: row.description,
            tax_applicable: row.tax_applicable,
            tax: row.tax,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

/// MySQL implementation of the subcategory repository
pub struct MySqlSubCategoryRepository {
    pool: MySqlPool,
}

impl MySqlSubCategoryRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    async fn fetch_all(&self, sql: &str, bind: Option<String>) -> Result<Vec<SubCategory>> {
        let mut query = sqlx::query_as::<_, SubCategoryRow>(sql);
        if let Some(value) = bind {
            query = query.bind(value);
        }
        let rows = query.fetch_all(&self.pool).await?;

        rows.into_iter().map(SubCategory::try_from).collect()
    }
}

#[async_trait]
impl Repository<SubCategory> for MySqlSubCategoryRepository {
    async fn create(&self, sub: &SubCategory) -> Result<SubCategory> {
        sqlx::query(
            r#"
            INSERT INTO sub_categories (
                id, name, category_id, image, description, tax_applicable, tax,
                created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(sub.id.to_string())
        .bind(&sub.name)
        .bind(sub.category.to_string())
        .bind(&sub.image)
        .bind(&sub.description)
        .bind(sub.tax_applicable)
        .bind(sub.tax)
        .bind(sub.created_at)
        .bind(sub.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::from_store(e, || duplicate_name(&sub.name)))?;

        // Columns are DECIMAL(19, 4), so return what the database stored.
        self.find_by_id(sub.id).await?.ok_or_else(|| {
            AppError::internal(format!("SubCategory {} missing after insert", sub.id))
        })
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<SubCategory>> {
        let row =
            sqlx::query_as::<_, SubCategoryRow>(&format!("{} WHERE id = ?", SELECT_SUBCATEGORY))
                .bind(id.to_string())
                .fetch_optional(&self.pool)
                .await?;

        row.map(SubCategory::try_from).transpose()
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<SubCategory>> {
        let row = sqlx::query_as::<_, SubCategoryRow>(&format!(
            "{} WHERE name = ? ORDER BY created_at, id LIMIT 1",
            SELECT_SUBCATEGORY
        ))
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;

        row.map(SubCategory::try_from).transpose()
    }

    async fn update(&self, sub: &SubCategory) -> Result<Option<SubCategory>> {
        sqlx::query(
            r#"
            UPDATE sub_categories
            SET name = ?, image = ?, description = ?, tax_applicable = ?, tax = ?,
                updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(&sub.name)
        .bind(&sub.image)
        .bind(&sub.description)
        .bind(sub.tax_applicable)
        .bind(sub.tax)
        .bind(sub.updated_at)
        .bind(sub.id.to_string())
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::from_store(e, || duplicate_name(&sub.name)))?;

        self.find_by_id(sub.id).await
    }

    async fn list(&self) -> Result<Vec<SubCategory>> {
        self.fetch_all(&format!("{} ORDER BY created_at, id", SELECT_SUBCATEGORY), None)
            .await
    }

    async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

#[async_trait]
impl SubCategoryRepository for MySqlSubCategoryRepository {
    async fn list_by_category(&self, category_id: Uuid) -> Result<Vec<SubCategory>> {
        self.fetch_all(
            &format!("{} WHERE category_id = ? ORDER BY created_at, id", SELECT_SUBCATEGORY),
            Some(category_id.to_string()),
        )
        .await
    }
}

/// In-memory implementation of the subcategory repository
#[derive(Default)]
pub struct InMemorySubCategoryRepository {
    subcategories: RwLock<Vec<SubCategory>>,
}

impl InMemorySubCategoryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Repository<SubCategory> for InMemorySubCategoryRepository {
    async fn create(&self, sub: &SubCategory) -> Result<SubCategory> {
        let mut subcategories = self.subcategories.write().await;

        if subcategories
            .iter()
            .any(|s| s.category == sub.category && s.name == sub.name)
        {
            return Err(AppError::validation(duplicate_name(&sub.name)));
        }

        subcategories.push(sub.clone());
        Ok(sub.clone())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<SubCategory>> {
        let subcategories = self.subcategories.read().await;
        Ok(subcategories.iter().find(|s| s.id == id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<SubCategory>> {
        let subcategories = self.subcategories.read().await;
        Ok(subcategories.iter().find(|s| s.name == name).cloned())
    }

    async fn update(&self, sub: &SubCategory) -> Result<Option<SubCategory>> {
        let mut subcategories = self.subcategories.write().await;

        if subcategories
            .iter()
            .any(|s| s.id != sub.id && s.category == sub.category && s.name == sub.name)
        {
            return Err(AppError::validation(duplicate_name(&sub.name)));
        }

        let Some(slot) = subcategories.iter_mut().find(|s| s.id == sub.id) else {
            return Ok(None);
        };
        *slot = sub.clone();

        Ok(Some(sub.clone()))
    }

    async fn list(&self) -> Result<Vec<SubCategory>> {
        Ok(self.subcategories.read().await.clone())
    }

    async fn ping(&self) -> Result<()> {
        Ok(())
    }
}

#[async_trait]
impl SubCategoryRepository for InMemorySubCategoryRepository {
    async fn list_by_category(&self, category_id: Uuid) -> Result<Vec<SubCategory>> {
        let subcategories = self.subcategories.read().await;
        Ok(subcategories
            .iter()
            .filter(|s| s.category == category_id)
            .cloned()
            .collect())
    }
}
