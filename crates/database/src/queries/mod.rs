use catalog::database::DatabaseError;

pub mod accommodation;
pub mod fishery;
pub mod lake;
pub mod message;
pub mod session;
pub mod tackle_shop;

pub(crate) fn convert_error(why: sqlx::Error) -> DatabaseError {
    match why {
        sqlx::Error::RowNotFound => DatabaseError::NotFound,
        _ => DatabaseError::Other(Box::new(why)),
    }
}

/// Maps an execute result to `NotFound` when no row was touched, so
/// delete-by-id and update-by-id surface missing ids the same way a fetch
/// does.
pub(crate) fn expect_row_touched(
    result: sqlx::postgres::PgQueryResult,
) -> Result<(), DatabaseError> {
    if result.rows_affected() == 0 {
        Err(DatabaseError::NotFound)
    } else {
        Ok(())
    }
}
