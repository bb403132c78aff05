use commute_core::RepositoryError;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, TypeInfo, ValueRef};

/// Reads a money column stored as INTEGER or REAL. NULL reads as zero.
pub fn get_decimal(
    row: &SqliteRow,
    column: &str,
) -> Result<Decimal, RepositoryError> {
    let value_ref = row
        .try_get_raw(column)
        .map_err(|e| RepositoryError::Database(format!("Column '{}' not found: {}", column, e)))?;

    let type_info = value_ref.type_info();
    let type_name = type_info.name();

    match type_name {
        "INTEGER" => {
            let val: i64 = row.try_get(column).map_err(|e| {
                RepositoryError::Database(format!("Failed to get INTEGER from '{}': {}", column, e))
            })?;
            Ok(Decimal::from(val))
        }
        "REAL" => {
            let val: f64 = row.try_get(column).map_err(|e| {
                RepositoryError::Database(format!("Failed to get REAL from '{}': {}", column, e))
            })?;
            Decimal::try_from(val).map_err(|e| {
                RepositoryError::Database(format!("Failed to convert {} to Decimal: {}", val, e))
            })
        }
        "NULL" => Ok(Decimal::ZERO),
        _ => Err(RepositoryError::Database(format!(
            "Unexpected type '{}' for column '{}'",
            type_name, column
        ))),
    }
}

/// Convert a Decimal to f64 for SQLite storage.
pub fn decimal_to_f64(d: Decimal) -> f64 {
    d.to_f64().unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;
    use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};

    use super::*;

    async fn setup_test_db() -> SqlitePool {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .expect("Failed to create in-memory database");

        sqlx::query(
            "CREATE TABLE amounts (
                id INTEGER PRIMARY KEY,
                int_value INTEGER,
                real_value REAL,
                null_value REAL,
                text_value TEXT
            )",
        )
        .execute(&pool)
        .await
        .expect("Failed to create test table");

        pool
    }

    async fn fetch_row(
        pool: &SqlitePool,
        insert: &str,
        column: &str,
    ) -> SqliteRow {
        sqlx::query(insert)
            .execute(pool)
            .await
            .expect("Failed to insert test data");

        sqlx::query(&format!("SELECT {column} FROM amounts WHERE id = 1"))
            .fetch_one(pool)
            .await
            .expect("Failed to fetch row")
    }

    // get_decimal tests

    #[tokio::test]
    async fn get_decimal_from_integer_rent() {
        let pool = setup_test_db().await;
        let row = fetch_row(
            &pool,
            "INSERT INTO amounts (id, int_value) VALUES (1, 35000)",
            "int_value",
        )
        .await;

        assert_eq!(get_decimal(&row, "int_value"), Ok(dec!(35000)));
    }

    #[tokio::test]
    async fn get_decimal_from_real_total() {
        let pool = setup_test_db().await;
        let row = fetch_row(
            &pool,
            "INSERT INTO amounts (id, real_value) VALUES (1, 48010.83)",
            "real_value",
        )
        .await;

        assert_eq!(get_decimal(&row, "real_value"), Ok(dec!(48010.83)));
    }

    #[tokio::test]
    async fn get_decimal_from_negative_real() {
        let pool = setup_test_db().await;
        let row = fetch_row(
            &pool,
            "INSERT INTO amounts (id, real_value) VALUES (1, -2500.5)",
            "real_value",
        )
        .await;

        assert_eq!(get_decimal(&row, "real_value"), Ok(dec!(-2500.5)));
    }

    #[tokio::test]
    async fn get_decimal_from_null_returns_zero() {
        let pool = setup_test_db().await;
        let row = fetch_row(
            &pool,
            "INSERT INTO amounts (id, null_value) VALUES (1, NULL)",
            "null_value",
        )
        .await;

        assert_eq!(get_decimal(&row, "null_value"), Ok(Decimal::ZERO));
    }

    #[tokio::test]
    async fn get_decimal_column_not_found() {
        let pool = setup_test_db().await;
        let row = fetch_row(&pool, "INSERT INTO amounts (id) VALUES (1)", "id").await;

        let result = get_decimal(&row, "suburb_rent");

        assert!(matches!(result, Err(RepositoryError::Database(msg)) if msg.starts_with("Column 'suburb_rent' not found:")));
    }

    #[tokio::test]
    async fn get_decimal_unexpected_type() {
        let pool = setup_test_db().await;
        let row = fetch_row(
            &pool,
            "INSERT INTO amounts (id, text_value) VALUES (1, 'lots')",
            "text_value",
        )
        .await;

        assert_eq!(
            get_decimal(&row, "text_value"),
            Err(RepositoryError::Database(
                "Unexpected type 'TEXT' for column 'text_value'".to_string()
            ))
        );
    }

    // decimal_to_f64 tests

    #[test]
    fn decimal_to_f64_keeps_paise() {
        assert_eq!(decimal_to_f64(dec!(13989.17)), 13989.17);
    }

    #[test]
    fn decimal_to_f64_negative() {
        assert_eq!(decimal_to_f64(dec!(-789.01)), -789.01);
    }

    #[test]
    fn decimal_to_f64_zero() {
        assert_eq!(decimal_to_f64(Decimal::ZERO), 0.0);
    }
}
