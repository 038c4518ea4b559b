use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use diesel::prelude::*;
use rand_core::OsRng;
use uuid::Uuid;

use crate::db::DbPool;
use crate::domain::auth::{AuthErrorKind, AuthenticatedUser, Credentials, SignInError};
use crate::domain::errors::DomainError;
use crate::domain::ports::CredentialsProvider;
use crate::schema::users;

use super::models::{NewUserRow, UserRow};

const MIN_PASSWORD_LEN: usize = 6;

/// E-mail/password provider backed by the `users` table.
pub struct DieselCredentialsProvider {
    pool: DbPool,
}

impl DieselCredentialsProvider {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Store a user with an argon2-hashed password. Returns `None` when the
    /// e-mail is already registered.
    pub fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<Option<Uuid>, DomainError> {
        let hash = hash_password(password)?;
        let mut conn = self.pool.get()?;

        let id = Uuid::new_v4();
        let inserted = diesel::insert_into(users::table)
            .values(&NewUserRow {
                id,
                name,
                email,
                password: &hash,
            })
            .on_conflict(users::email)
            .do_nothing()
            .execute(&mut conn)?;

        Ok((inserted == 1).then_some(id))
    }
}

impl CredentialsProvider for DieselCredentialsProvider {
    fn authorize(&self, credentials: &Credentials) -> Result<AuthenticatedUser, SignInError> {
        if !is_well_formed(credentials) {
            return Err(SignInError::Rejected(AuthErrorKind::CredentialsSignin));
        }

        let mut conn = self
            .pool
            .get()
            .map_err(|e| SignInError::Fatal(e.to_string()))?;

        let user = users::table
            .filter(users::email.eq(&credentials.email))
            .select(UserRow::as_select())
            .first(&mut conn)
            .optional()
            .map_err(|e| {
                log::error!("Failed to fetch user: {}", e);
                SignInError::Rejected(AuthErrorKind::CallbackRouteError)
            })?;

        let Some(user) = user else {
            return Err(SignInError::Rejected(AuthErrorKind::CredentialsSignin));
        };

        verify_password(&credentials.password, &user.password)?;

        Ok(AuthenticatedUser {
            id: user.id,
            name: user.name,
            email: user.email,
        })
    }
}

fn is_well_formed(credentials: &Credentials) -> bool {
    credentials.email.contains('@') && credentials.password.chars().count() >= MIN_PASSWORD_LEN
}

pub fn hash_password(password: &str) -> Result<String, DomainError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| DomainError::Internal(e.to_string()))
}

fn verify_password(password: &str, stored: &str) -> Result<(), SignInError> {
    let hash = PasswordHash::new(stored).map_err(|e| {
        log::error!("Stored password hash is unreadable: {}", e);
        SignInError::Rejected(AuthErrorKind::Configuration)
    })?;

    Argon2::default()
        .verify_password(password.as_bytes(), &hash)
        .map_err(|_| SignInError::Rejected(AuthErrorKind::CredentialsSignin))
}
