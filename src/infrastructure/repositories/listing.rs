use sqlx::{PgPool, Postgres, Transaction};

/// Opens a read-only `REPEATABLE READ` transaction so a page and its total are
/// computed against the same snapshot.
pub(crate) async fn begin_read_snapshot(
    pool: &PgPool,
) -> Result<Transaction<'static, Postgres>, sqlx::Error> {
    let mut tx = pool.begin().await?;
    sqlx::query("SET TRANSACTION ISOLATION LEVEL REPEATABLE READ, READ ONLY")
        .execute(&mut *tx)
        .await?;
    Ok(tx)
}

/// Turns user text into a `LIKE` pattern that matches values starting with it.
/// `\`, `%` and `_` in the input match literally.
pub(crate) fn like_prefix(prefix: &str) -> String {
    let mut pattern = String::with_capacity(prefix.len() + 1);
    for ch in prefix.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}
