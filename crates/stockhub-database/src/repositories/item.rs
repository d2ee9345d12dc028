//! Inventory item (catalog) repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use stockhub_core::error::{AppError, ErrorKind};
use stockhub_core::result::AppResult;
use stockhub_core::types::pagination::{PageRequest, PageResponse};
use stockhub_entity::item::{CreateInventoryItem, InventoryItem, ItemStatus, UpdateInventoryItem};

/// Repository for catalog item CRUD operations.
#[derive(Debug, Clone)]
pub struct ItemRepository {
    pool: PgPool,
}

impl ItemRepository {
    /// Create a new item repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find an item by ID.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<InventoryItem>> {
        sqlx::query_as::<_, InventoryItem>("SELECT * FROM inventory_items WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find item", e))
    }

    /// Search the catalog with an optional term and status filter.
    ///
    /// The term matches name, SKU, or category, case-insensitively.
    pub async fn search(
        &self,
        term: Option<&str>,
        status: Option<ItemStatus>,
        page: &PageRequest,
    ) -> AppResult<PageResponse<InventoryItem>> {
        let mut conditions = Vec::new();
        let mut param_idx = 1u32;

        if term.is_some() {
            conditions.push(format!(
                "(name ILIKE ${param_idx} OR sku ILIKE ${param_idx} OR category ILIKE ${param_idx})"
            ));
            param_idx += 1;
        }
        if status.is_some() {
            conditions.push(format!("status = ${param_idx}"));
            param_idx += 1;
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let count_sql = format!("SELECT COUNT(*) FROM inventory_items {where_clause}");
        let select_sql = format!(
            "SELECT * FROM inventory_items {where_clause} ORDER BY created_at DESC LIMIT ${param_idx} OFFSET ${}",
            param_idx + 1
        );

        let mut count_query = sqlx::query_scalar::<_, i64>(&count_sql);
        let mut select_query = sqlx::query_as::<_, InventoryItem>(&select_sql);

        if let Some(t) = term {
            let pattern = format!("%{t}%");
            count_query = count_query.bind(pattern.clone());
            select_query = select_query.bind(pattern);
        }
        if let Some(s) = status {
            count_query = count_query.bind(s);
            select_query = select_query.bind(s);
        }

        let total = count_query
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count items", e))?;

        let items = select_query
            .bind(page.limit() as i64)
            .bind(page.offset() as i64)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to search items", e))?;

        Ok(PageResponse::new(
            items,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// List items that can currently be requested (available, in stock).
    pub async fn list_requestable(&self) -> AppResult<Vec<InventoryItem>> {
        sqlx::query_as::<_, InventoryItem>(
            "SELECT * FROM inventory_items WHERE status = 'available' AND quantity > 0 ORDER BY name",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list requestable items", e)
        })
    }

    /// Add a new item to the catalog.
    pub async fn create(&self, data: &CreateInventoryItem) -> AppResult<InventoryItem> {
        sqlx::query_as::<_, InventoryItem>(
            "INSERT INTO inventory_items (name, sku, category, quantity, unit_price, location, status, description) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) RETURNING *",
        )
        .bind(&data.name)
        .bind(&data.sku)
        .bind(&data.category)
        .bind(data.quantity)
        .bind(data.unit_price)
        .bind(&data.location)
        .bind(data.status)
        .bind(&data.description)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                AppError::conflict(format!("An item with SKU '{}' already exists", data.sku))
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create item", e),
        })
    }

    /// Update an existing item; `None` fields are left unchanged.
    pub async fn update(
        &self,
        id: Uuid,
        data: &UpdateInventoryItem,
    ) -> AppResult<Option<InventoryItem>> {
        sqlx::query_as::<_, InventoryItem>(
            "UPDATE inventory_items SET \
                name = COALESCE($2, name), \
                category = COALESCE($3, category), \
                quantity = COALESCE($4, quantity), \
                unit_price = COALESCE($5, unit_price), \
                location = COALESCE($6, location), \
                status = COALESCE($7, status), \
                description = COALESCE($8, description), \
                updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&data.name)
        .bind(&data.category)
        .bind(data.quantity)
        .bind(data.unit_price)
        .bind(&data.location)
        .bind(data.status)
        .bind(&data.description)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update item", e))
    }

    /// Count catalog items grouped by status.
    pub async fn count_by_status(&self) -> AppResult<Vec<(ItemStatus, i64)>> {
        sqlx::query_as::<_, (ItemStatus, i64)>(
            "SELECT status, COUNT(*) FROM inventory_items GROUP BY status",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count items", e))
    }
}
