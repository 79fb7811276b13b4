use sqlx::{Connection, PgPool, postgres::PgPoolOptions};

/// Opens the process-wide pool and pings one connection.
pub async fn init_db(database_url: &str) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new().connect(database_url).await?;

    let mut conn = pool.acquire().await?;
    conn.ping().await?;

    Ok(pool)
}
