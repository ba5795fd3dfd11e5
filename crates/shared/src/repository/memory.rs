use async_trait::async_trait;
use std::sync::{
    Mutex,
    atomic::{AtomicBool, AtomicUsize, Ordering},
};
use tracing::info;

use crate::abstract_trait::UserRepositoryTrait;
use crate::domain::{request::RepairRequest, response::RepairResponse};
use crate::model::user::User;
use crate::utils::AppError;

/// Holds the `users` table in memory and applies the same predicates as the
/// SQL repository. Tracks how often `close` was called.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: Mutex<Vec<User>>,
    closed: AtomicBool,
    close_calls: AtomicUsize,
}

impl InMemoryUserRepository {
    pub fn new(users: Vec<User>) -> Self {
        Self {
            users: Mutex::new(users),
            ..Self::default()
        }
    }

    pub fn users(&self) -> Vec<User> {
        self.users.lock().map(|u| u.clone()).unwrap_or_default()
    }

    pub fn close_calls(&self) -> usize {
        self.close_calls.load(Ordering::SeqCst)
    }

    fn with_users<T>(&self, f: impl FnOnce(&mut Vec<User>) -> T) -> Result<T, AppError> {
        if self.closed.load(Ordering::SeqCst) {
            return Err(AppError::ConnectionClosed);
        }

        let mut users = self
            .users
            .lock()
            .map_err(|_| AppError::InternalError("user table lock poisoned".into()))?;

        Ok(f(&mut *users))
    }
}

#[async_trait]
impl UserRepositoryTrait for InMemoryUserRepository {
    async fn find_missing_fields(&self) -> Result<Vec<User>, AppError> {
        self.with_users(|users| {
            users
                .iter()
                .filter(|u| u.has_missing_fields())
                .cloned()
                .collect()
        })
    }

    async fn repair_missing_fields(
        &self,
        request: &RepairRequest,
    ) -> Result<RepairResponse, AppError> {
        self.with_users(|users| {
            let mut response = RepairResponse::default();

            for user in users.iter_mut().filter(|u| u.is_missing_date_of_birth()) {
                user.date_of_birth = Some(request.date_of_birth);
                response.dob_updated += 1;
            }

            for user in users.iter_mut().filter(|u| u.is_missing_address()) {
                user.address = Some(request.address.clone());
                response.address_updated += 1;
            }

            info!(
                "In-memory repair - dob: {}, address: {}",
                response.dob_updated, response.address_updated
            );

            response
        })
    }

    async fn count_missing_fields(&self) -> Result<i64, AppError> {
        self.with_users(|users| users.iter().filter(|u| u.has_missing_fields()).count() as i64)
    }

    async fn close(&self) -> Result<(), AppError> {
        self.close_calls.fetch_add(1, Ordering::SeqCst);
        self.closed.store(true, Ordering::SeqCst);
        Ok(())
    }
}
