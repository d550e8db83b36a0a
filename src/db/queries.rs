use crate::db::models::{Cart, Product, ProductType, Transaction};
use sqlx::{PgPool, Result};

// --- ProductType Queries ---

pub async fn insert_product_type(pool: &PgPool, name: &str) -> Result<ProductType> {
    sqlx::query_as::<_, ProductType>(
        "INSERT INTO product_type (name) VALUES ($1) RETURNING *",
    )
    .bind(name)
    .fetch_one(pool)
    .await
}

pub async fn get_product_type_by_id(pool: &PgPool, id: i32) -> Result<Option<ProductType>> {
    sqlx::query_as::<_, ProductType>("SELECT * FROM product_type WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn get_product_type_by_name(pool: &PgPool, name: &str) -> Result<Option<ProductType>> {
    sqlx::query_as::<_, ProductType>("SELECT * FROM product_type WHERE name = $1")
        .bind(name)
        .fetch_optional(pool)
        .await
}

pub async fn list_product_types(pool: &PgPool, skip: i64, limit: i64) -> Result<Vec<ProductType>> {
    sqlx::query_as::<_, ProductType>(
        "SELECT * FROM product_type ORDER BY id OFFSET $1 LIMIT $2",
    )
    .bind(skip)
    .bind(limit)
    .fetch_all(pool)
    .await
}

// --- Product Queries ---

pub async fn insert_product(pool: &PgPool, name: &str, product_type_id: i32) -> Result<Product> {
    sqlx::query_as::<_, Product>(
        "INSERT INTO product (name, product_type_id) VALUES ($1, $2) RETURNING *",
    )
    .bind(name)
    .bind(product_type_id)
    .fetch_one(pool)
    .await
}

pub async fn get_product_by_id(pool: &PgPool, id: i32) -> Result<Option<Product>> {
    sqlx::query_as::<_, Product>("SELECT * FROM product WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn get_product_by_name(pool: &PgPool, name: &str) -> Result<Option<Product>> {
    sqlx::query_as::<_, Product>("SELECT * FROM product WHERE name = $1")
        .bind(name)
        .fetch_optional(pool)
        .await
}

pub async fn list_products(pool: &PgPool, skip: i64, limit: i64) -> Result<Vec<Product>> {
    sqlx::query_as::<_, Product>("SELECT * FROM product ORDER BY id OFFSET $1 LIMIT $2")
        .bind(skip)
        .bind(limit)
        .fetch_all(pool)
        .await
}

// --- Transaction Queries ---

pub async fn insert_transaction(pool: &PgPool, recipient: &str) -> Result<Transaction> {
    sqlx::query_as::<_, Transaction>(
        "INSERT INTO transactions (recipient) VALUES ($1) RETURNING *",
    )
    .bind(recipient)
    .fetch_one(pool)
    .await
}

pub async fn get_transaction_by_id(pool: &PgPool, id: i32) -> Result<Option<Transaction>> {
    sqlx::query_as::<_, Transaction>("SELECT * FROM transactions WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn list_transactions(pool: &PgPool, skip: i64, limit: i64) -> Result<Vec<Transaction>> {
    sqlx::query_as::<_, Transaction>(
        "SELECT * FROM transactions ORDER BY id OFFSET $1 LIMIT $2",
    )
    .bind(skip)
    .bind(limit)
    .fetch_all(pool)
    .await
}

pub async fn list_transactions_by_recipient(
    pool: &PgPool,
    recipient: &str,
    skip: i64,
    limit: i64,
) -> Result<Vec<Transaction>> {
    sqlx::query_as::<_, Transaction>(
        "SELECT * FROM transactions WHERE recipient = $1 ORDER BY id OFFSET $2 LIMIT $3",
    )
    .bind(recipient)
    .bind(skip)
    .bind(limit)
    .fetch_all(pool)
    .await
}

// --- Cart Queries ---

pub async fn insert_cart(
    pool: &PgPool,
    transaction_id: i32,
    product_id: i32,
    quantity: i32,
) -> Result<Cart> {
    sqlx::query_as::<_, Cart>(
        r#"
        INSERT INTO cart (transaction_id, product_id, quantity)
        VALUES ($1, $2, $3)
        RETURNING *
        "#,
    )
    .bind(transaction_id)
    .bind(product_id)
    .bind(quantity)
    .fetch_one(pool)
    .await
}

pub async fn get_cart_by_id(pool: &PgPool, id: i32) -> Result<Option<Cart>> {
    sqlx::query_as::<_, Cart>("SELECT * FROM cart WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn get_cart_by_transaction(pool: &PgPool, transaction_id: i32) -> Result<Option<Cart>> {
    sqlx::query_as::<_, Cart>(
        "SELECT * FROM cart WHERE transaction_id = $1 ORDER BY id LIMIT 1",
    )
    .bind(transaction_id)
    .fetch_optional(pool)
    .await
}

pub async fn get_cart_by_product(pool: &PgPool, product_id: i32) -> Result<Option<Cart>> {
    sqlx::query_as::<_, Cart>("SELECT * FROM cart WHERE product_id = $1 ORDER BY id LIMIT 1")
        .bind(product_id)
        .fetch_optional(pool)
        .await
}
