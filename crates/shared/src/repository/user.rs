use async_trait::async_trait;
use chrono::NaiveDate;
use sea_query::{
    Cond, Condition, Expr, Func, MysqlQueryBuilder, Query, SelectStatement, UpdateStatement,
};
use sea_query_binder::SqlxBinder;
use sqlx::{Connection, mysql::MySqlConnection};
use tokio::sync::Mutex;
use tracing::{error, info};

use crate::abstract_trait::UserRepositoryTrait;
use crate::domain::{request::RepairRequest, response::RepairResponse};
use crate::model::user::User;
use crate::schema::user::Users;
use crate::utils::AppError;

/// `address IS NULL OR address = ''`
fn missing_address_condition() -> Condition {
    Cond::any()
        .add(Expr::col(Users::Address).is_null())
        .add(Expr::col(Users::Address).eq(""))
}

/// `dob IS NULL OR address IS NULL OR address = ''`
fn missing_fields_condition() -> Condition {
    Cond::any()
        .add(Expr::col(Users::Dob).is_null())
        .add(missing_address_condition())
}

fn select_missing_fields() -> SelectStatement {
    Query::select()
        .columns([
            Users::UserId,
            Users::Email,
            Users::FirstName,
            Users::LastName,
            Users::Dob,
            Users::Address,
        ])
        .from(Users::Table)
        .cond_where(missing_fields_condition())
        .to_owned()
}

fn count_missing_fields_statement() -> SelectStatement {
    Query::select()
        .expr(Func::count(Expr::col(Users::UserId)))
        .from(Users::Table)
        .cond_where(missing_fields_condition())
        .to_owned()
}

fn update_missing_date_of_birth(date_of_birth: NaiveDate) -> UpdateStatement {
    Query::update()
        .table(Users::Table)
        .value(Users::Dob, date_of_birth)
        .and_where(Expr::col(Users::Dob).is_null())
        .to_owned()
}

fn update_missing_address(address: &str) -> UpdateStatement {
    Query::update()
        .table(Users::Table)
        .value(Users::Address, address)
        .cond_where(missing_address_condition())
        .to_owned()
}

/// Repository over a single connection. The connection is taken out on
/// `close`, after which every query fails with `AppError::ConnectionClosed`.
pub struct UserRepository {
    conn: Mutex<Option<MySqlConnection>>,
}

impl UserRepository {
    pub fn new(conn: MySqlConnection) -> Self {
        Self {
            conn: Mutex::new(Some(conn)),
        }
    }
}

#[async_trait]
impl UserRepositoryTrait for UserRepository {
    async fn find_missing_fields(&self) -> Result<Vec<User>, AppError> {
        info!("Scanning users with missing date of birth or address");

        let mut guard = self.conn.lock().await;
        let conn = guard.as_mut().ok_or(AppError::ConnectionClosed)?;

        let (sql, values) = select_missing_fields().build_sqlx(MysqlQueryBuilder);

        let users_result = sqlx::query_as_with::<_, User, _>(&sql, values)
            .fetch_all(&mut *conn)
            .await;

        let users = match users_result {
            Ok(u) => u,
            Err(e) => {
                error!("Error scanning users: {e}");
                return Err(AppError::SqlxError(e));
            }
        };

        info!("Found {} users with missing fields", users.len());

        Ok(users)
    }

    async fn repair_missing_fields(
        &self,
        request: &RepairRequest,
    ) -> Result<RepairResponse, AppError> {
        info!(
            "Repairing users - dob: {}, address: {}",
            request.date_of_birth, request.address
        );

        let mut guard = self.conn.lock().await;
        let conn = guard.as_mut().ok_or(AppError::ConnectionClosed)?;

        let mut tx = conn.begin().await?;

        let (sql, values) =
            update_missing_date_of_birth(request.date_of_birth).build_sqlx(MysqlQueryBuilder);

        let dob_updated = match sqlx::query_with(&sql, values).execute(&mut *tx).await {
            Ok(result) => result.rows_affected(),
            Err(e) => {
                error!("Error updating missing date of birth: {e}");
                return Err(AppError::SqlxError(e));
            }
        };

        let (sql, values) = update_missing_address(&request.address).build_sqlx(MysqlQueryBuilder);

        let address_updated = match sqlx::query_with(&sql, values).execute(&mut *tx).await {
            Ok(result) => result.rows_affected(),
            Err(e) => {
                error!("Error updating missing address: {e}");
                return Err(AppError::SqlxError(e));
            }
        };

        tx.commit().await?;

        info!("Repair committed - dob: {dob_updated} rows, address: {address_updated} rows");

        Ok(RepairResponse {
            dob_updated,
            address_updated,
        })
    }

    async fn count_missing_fields(&self) -> Result<i64, AppError> {
        let mut guard = self.conn.lock().await;
        let conn = guard.as_mut().ok_or(AppError::ConnectionClosed)?;

        let (sql, values) = count_missing_fields_statement().build_sqlx(MysqlQueryBuilder);

        let remaining: i64 = sqlx::query_scalar_with(&sql, values)
            .fetch_one(&mut *conn)
            .await?;

        info!("Verification found {remaining} users with missing fields");

        Ok(remaining)
    }

    async fn close(&self) -> Result<(), AppError> {
        let conn = self.conn.lock().await.take();

        match conn {
            Some(conn) => {
                conn.close().await?;
                info!("Database connection closed");
                Ok(())
            }
            None => Ok(()),
        }
    }
}
