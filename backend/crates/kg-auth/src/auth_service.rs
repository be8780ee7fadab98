//! Registration and credential checks against the `users` table.
//!
//! No session is created on login; callers resend the username with every
//! request that needs it.

use crate::{AuthError, Result as AuthErrorResult, hash_password, verify_password};

use kg_core::{NewUser, User, UserProfile};
use kg_db::{DbError, UserRepository};

use std::panic::Location;

use error_location::ErrorLocation;
use log::{debug, info};
use sqlx::SqlitePool;

pub struct AuthService {
    users: UserRepository,
}

impl AuthService {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            users: UserRepository::new(pool),
        }
    }

    /// Register a new user.
    ///
    /// Uniqueness is enforced by the `users.uname` constraint, so two
    /// concurrent registrations of one name cannot both succeed.
    pub async fn register(&self, new_user: NewUser) -> AuthErrorResult<()> {
        new_user
            .validate()
            .map_err(|source| AuthError::Validation {
                source,
                location: ErrorLocation::from(Location::caller()),
            })?;

        let NewUser {
            username,
            email,
            age,
            gender,
            password,
        } = new_user;

        let password_hash = tokio::task::spawn_blocking(move || hash_password(&password))
            .await
            .map_err(|e| AuthError::Hashing {
                message: format!("hashing task failed: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })??;

        let user = User {
            username,
            email,
            age,
            gender,
            password_hash,
        };

        match self.users.create(&user).await {
            Ok(()) => {
                info!("Registered user {}", user.username);
                Ok(())
            }
            Err(DbError::UniqueViolation { .. }) => {
                debug!("Registration rejected, username taken: {}", user.username);
                Err(AuthError::DuplicateUser {
                    username: user.username,
                    location: ErrorLocation::from(Location::caller()),
                })
            }
            Err(source) => Err(AuthError::Database {
                source,
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }

    /// Verify credentials and return the user's public profile
    pub async fn login(&self, username: &str, password: &str) -> AuthErrorResult<UserProfile> {
        let user = self
            .users
            .find_by_username(username)
            .await
            .map_err(|source| AuthError::Database {
                source,
                location: ErrorLocation::from(Location::caller()),
            })?;

        let Some(user) = user else {
            debug!("Login failed for {}: unknown user", username);
            return Err(AuthError::InvalidCredentials {
                location: ErrorLocation::from(Location::caller()),
            });
        };

        let password = password.to_string();
        let stored_hash = user.password_hash.clone();
        let verified =
            tokio::task::spawn_blocking(move || verify_password(&password, &stored_hash))
                .await
                .map_err(|e| AuthError::Hashing {
                    message: format!("verification task failed: {}", e),
                    location: ErrorLocation::from(Location::caller()),
                })?;

        if !verified {
            debug!("Login failed for {}: password mismatch", username);
            return Err(AuthError::InvalidCredentials {
                location: ErrorLocation::from(Location::caller()),
            });
        }

        info!("User {} logged in", username);
        Ok(user.into())
    }
}
