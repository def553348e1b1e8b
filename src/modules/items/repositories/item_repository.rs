use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::MySqlPool;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::core::traits::Repository;
use crate::core::{AppError, Result};
use crate::modules::items::models::Item;

/// Repository for item persistence
#[async_trait]
pub trait ItemRepository: Repository<Item> {
    /// All items of a category, including those under its subcategories
    async fn list_by_category(&self, category_id: Uuid) -> Result<Vec<Item>>;

    /// Items placed under a subcategory
    async fn list_by_subcategory(&self, sub_category_id: Uuid) -> Result<Vec<Item>>;

    /// Items whose name contains `query`, ignoring case
    async fn search_by_name(&self, query: &str) -> Result<Vec<Item>>;
}

const SELECT_ITEM: &str = r#"
    SELECT id, name, category_id, sub_category_id, image, description,
           tax_applicable, tax, base_amount, discount, total_amount,
           created_at, updated_at
    FROM items
"#;

#[derive(Debug, sqlx::FromRow)]
struct ItemRow {
    id: String,
    name: String,
    category_id: String,
    sub_category_id: Option<String>,
    image: String,
    description: String,
    tax_applicable: bool,
    tax: Decimal,
    base_amount: Decimal,
    discount: Decimal,
    total_amount: Decimal,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ItemRow> for Item {
    type Error = AppError;

    fn try_from(row: ItemRow) -> Result<Self> {
        let parse = |raw: &str| {
            Uuid::parse_str(raw)
                .map_err(|e| AppError::internal(format!("Invalid item reference '{}': {}", raw, e)))
        };

        Ok(Item {
            id: parse(&row.id)?,
            name: row.name,
            category: parse(&row.category_id)?,
            sub_category: row.sub_category_id.as_deref().map(parse).transpose()?,
            image: row.image,
            description: row.description,
            tax_applicable: row.tax_applicable,
            tax: row.tax,
            base_amount: row.base_amount,
            discount: row.discount,
            total_amount: row.total_amount,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

/// Escape LIKE wildcards so the query matches as a literal substring
fn like_pattern(query: &str) -> String {
    let mut escaped = String::with_capacity(query.len() + 2);
    escaped.push('%');
    for ch in query.to_lowercase().chars() {
        if matches!(ch, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped.push('%');
    escaped
}

/// MySQL implementation of the item repository
pub struct MySqlItemRepository {
    pool: MySqlPool,
}

impl MySqlItemRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    async fn fetch_all(&self, sql: &str, bind: Option<String>) -> Result<Vec<Item>> {
        let mut query = sqlx::query_as::<_, ItemRow>(sql);
        if let Some(value) = bind {
            query = query.bind(value);
        }
        let rows = query.fetch_all(&self.pool).await?;

        rows.into_iter().map(Item::try_from).collect()
    }
}

#[async_trait]
impl Repository<Item> for MySqlItemRepository {
    async fn create(&self, item: &Item) -> Result<Item> {
        sqlx::query(
            r#"
            INSERT INTO items (
                id, name, category_id, sub_category_id, image, description,
                tax_applicable, tax, base_amount, discount, total_amount,
                created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(item.id.to_string())
        .bind(&item.name)
        .bind(item.category.to_string())
        .bind(item.sub_category.map(|id| id.to_string()))
        .bind(&item.image)
        .bind(&item.description)
        .bind(item.tax_applicable)
        .bind(item.tax)
        .bind(item.base_amount)
        .bind(item.discount)
        .bind(item.total_amount)
        .bind(item.created_at)
        .bind(item.updated_at)
        .execute(&self.pool)
        .await?;

        // Columns are DECIMAL(19, 4), so return what the database stored.
        self.find_by_id(item.id).await?.ok_or_else(|| {
            AppError::internal(format!("Item {} missing after insert", item.id))
        })
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Item>> {
        let row = sqlx::query_as::<_, ItemRow>(&format!("{} WHERE id = ?", SELECT_ITEM))
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await?;

        row.map(Item::try_from).transpose()
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Item>> {
        let row = sqlx::query_as::<_, ItemRow>(&format!(
            "{} WHERE name = ? ORDER BY created_at, id LIMIT 1",
            SELECT_ITEM
        ))
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;

        row.map(Item::try_from).transpose()
    }

    async fn update(&self, item: &Item) -> Result<Option<Item>> {
        sqlx::query(
            r#"
            UPDATE items
            SET name = ?, image = ?, description = ?, tax_applicable = ?, tax = ?,
                base_amount = ?, discount = ?, total_amount = ?, updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(&item.name)
        .bind(&item.image)
        .bind(&item.description)
        .bind(item.tax_applicable)
        .bind(item.tax)
        .bind(item.base_amount)
        .bind(item.discount)
        .bind(item.total_amount)
        .bind(item.updated_at)
        .bind(item.id.to_string())
        .execute(&self.pool)
        .await?;

        self.find_by_id(item.id).await
    }

    async fn list(&self) -> Result<Vec<Item>> {
        self.fetch_all(&format!("{} ORDER BY created_at, id", SELECT_ITEM), None)
            .await
    }

    async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

#[async_trait]
impl ItemRepository for MySqlItemRepository {
    async fn list_by_category(&self, category_id: Uuid) -> Result<Vec<Item>> {
        self.fetch_all(
            &format!("{} WHERE category_id = ? ORDER BY created_at, id", SELECT_ITEM),
            Some(category_id.to_string()),
        )
        .await
    }

    async fn list_by_subcategory(&self, sub_category_id: Uuid) -> Result<Vec<Item>> {
        self.fetch_all(
            &format!("{} WHERE sub_category_id = ? ORDER BY created_at, id", SELECT_ITEM),
            Some(sub_category_id.to_string()),
        )
        .await
    }

    async fn search_by_name(&self, query: &str) -> Result<Vec<Item>> {
        self.fetch_all(
            &format!(
                "{} WHERE LOWER(name) LIKE ? ORDER BY created_at, id",
                SELECT_ITEM
            ),
            Some(like_pattern(query)),
        )
        .await
    }
}

/// In-memory implementation of the item repository
#[derive(Default)]
pub struct InMemoryItemRepository {
    items: RwLock<Vec<Item>>,
}

impl InMemoryItemRepository {
    pub fn new() -> Self {
        Self::default()
    }

    async fn filtered(&self, keep: impl Fn(&Item) -> bool) -> Vec<Item> {
        self.items
            .read()
            .await
            .iter()
            .filter(|item| keep(item))
            .cloned()
            .collect()
    }
}

#[async_trait]
impl Repository<Item> for InMemoryItemRepository {
    async fn create(&self, item: &Item) -> Result<Item> {
        self.items.write().await.push(item.clone());
        Ok(item.clone())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Item>> {
        let items = self.items.read().await;
        Ok(items.iter().find(|i| i.id == id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Item>> {
        let items = self.items.read().await;
        Ok(items.iter().find(|i| i.name == name).cloned())
    }

    async fn update(&self, item: &Item) -> Result<Option<Item>> {
        let mut items = self.items.write().await;
        let Some(slot) = items.iter_mut().find(|i| i.id == item.id) else {
            return Ok(None);
        };
        *slot = item.clone();

        Ok(Some(item.clone()))
    }

    async fn list(&self) -> Result<Vec<Item>> {
        Ok(self.items.read().await.clone())
    }

    async fn ping(&self) -> Result<()> {
        Ok(())
    }
}

#[async_trait]
impl ItemRepository for InMemoryItemRepository {
    async fn list_by_category(&self, category_id: Uuid) -> Result<Vec<Item>> {
        Ok(self.filtered(|i| i.category == category_id).await)
    }

    async fn list_by_subcategory(&self, sub_category_id: Uuid) -> Result<Vec<Item>> {
        Ok(self
            .filtered(|i| i.sub_category == Some(sub_category_id))
            .await)
    }

    async fn search_by_name(&self, query: &str) -> Result<Vec<Item>> {
        let needle = query.to_lowercase();
        Ok(self
            .filtered(|i| i.name.to_lowercase().contains(&needle))
            .await)
    }
}
