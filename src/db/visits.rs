use crate::db::schema::SCHEMA;
use crate::error::VisitsError;
use crate::types::VisitReport;
use sqlx::any::{AnyTypeInfo, AnyValueRef};
use sqlx::error::BoxDynError;
use sqlx::{Any, AnyConnection, Decode, Type, ValueRef};

/// Text column that also accepts MySQL `TEXT`, which the `Any` driver reports
/// as a blob.
struct MessageText(String);

impl Type<Any> for MessageText {
    fn type_info() -> AnyTypeInfo {
        <String as Type<Any>>::type_info()
    }

    fn compatible(ty: &AnyTypeInfo) -> bool {
        <String as Type<Any>>::compatible(ty) || <Vec<u8> as Type<Any>>::compatible(ty)
    }
}

impl<'r> Decode<'r, Any> for MessageText {
    fn decode(value: AnyValueRef<'r>) -> Result<Self, BoxDynError> {
        if <String as Type<Any>>::compatible(&value.type_info()) {
            return Ok(Self(<String as Decode<'r, Any>>::decode(value)?));
        }
        let bytes = <Vec<u8> as Decode<'r, Any>>::decode(value)?;
        Ok(Self(String::from_utf8(bytes)?))
    }
}

pub async fn fetch_message(conn: &mut AnyConnection) -> Result<String, VisitsError> {
    let MessageText(text) = sqlx::query_scalar("SELECT text FROM messages LIMIT 1")
        .fetch_one(&mut *conn)
        .await?;
    Ok(text)
}

pub async fn increment_visits(conn: &mut AnyConnection) -> Result<(), VisitsError> {
    sqlx::query("UPDATE visits SET count = count + 1 WHERE id = 1")
        .execute(&mut *conn)
        .await?;
    Ok(())
}

pub async fn fetch_visits(conn: &mut AnyConnection) -> Result<i64, VisitsError> {
    let count: i64 = sqlx::query_scalar("SELECT count FROM visits WHERE id = 1")
        .fetch_one(&mut *conn)
        .await?;
    Ok(count)
}

/// Read the message, bump the counter, then read the counter back.
///
/// The three statements run outside a transaction, so a concurrent request can
/// land between the update and the read.
pub async fn record_visit(conn: &mut AnyConnection) -> Result<VisitReport, VisitsError> {
    let message = fetch_message(conn).await?;
    increment_visits(conn).await?;
    let visits = fetch_visits(conn).await?;
    Ok(VisitReport { message, visits })
}

/// Create both tables if they are missing.
pub async fn init_schema(conn: &mut AnyConnection) -> Result<(), VisitsError> {
    // sqlx::query runs one statement at a time
    for stmt in SCHEMA.split(';') {
        let s = stmt.trim();
        if s.is_empty() {
            continue;
        }
        sqlx::query(s).execute(&mut *conn).await?;
    }
    Ok(())
}

/// Insert one message row and the `id = 1` counter row.
pub async fn seed(
    conn: &mut AnyConnection,
    message: &str,
    count: i64,
) -> Result<(), VisitsError> {
    sqlx::query("INSERT INTO messages (text) VALUES (?)")
        .bind(message.to_string())
        .execute(&mut *conn)
        .await?;
    sqlx::query("INSERT INTO visits (id, count) VALUES (1, ?)")
        .bind(count)
        .execute(&mut *conn)
        .await?;
    Ok(())
}
