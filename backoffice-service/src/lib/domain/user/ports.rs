use async_trait::async_trait;

use crate::domain::user::errors::UserError;
use crate::domain::user::models::CreateUserCommand;
use crate::domain::user::models::UpdateUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;

/// Port for user domain service operations.
#[async_trait]
pub trait UserServicePort: Send + Sync + 'static {
    /// Create new user with validated fields.
    ///
    /// The plaintext password is hashed before anything touches storage.
    ///
    /// # Arguments
    /// * `command` - Validated command containing names, email, password, and role
    ///
    /// # Returns
    /// Created user entity
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - Email is already registered
    /// * `Password` - Password hashing failed
    /// * `Database` - Database operation failed
    async fn create_user(&self, command: CreateUserCommand) -> Result<User, UserError>;

    /// Retrieve all users, newest first.
    ///
    /// # Errors
    /// * `Database` - Database operation failed
    async fn list_users(&self) -> Result<Vec<User>, UserError>;

    /// Update existing user with optional fields.
    ///
    /// # Arguments
    /// * `id` - User ID to update
    /// * `command` - Command with optional fields; present values override
    ///
    /// # Returns
    /// Updated user entity
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `EmailAlreadyExists` - New email belongs to a different user
    /// * `Database` - Database operation failed
    async fn update_user(&self, id: &UserId, command: UpdateUserCommand)
        -> Result<User, UserError>;

    /// Delete existing user.
    ///
    /// Pass-through: no existence pre-check, a miss surfaces as the
    /// persistence failure.
    ///
    /// # Errors
    /// * `Database` - Database operation failed or no row matched
    async fn delete_user(&self, id: &UserId) -> Result<(), UserError>;

    /// Authenticate an admin by email and password.
    ///
    /// On success the login statistics are updated atomically before the
    /// user is returned; a failed statistics write fails the whole login.
    ///
    /// # Arguments
    /// * `email` - Raw email as submitted
    /// * `password` - Plaintext password
    ///
    /// # Returns
    /// The authenticated user with refreshed login statistics
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown email or wrong password (indistinguishable)
    /// * `AdminOnly` - Credentials are valid but the role is not ADMIN
    /// * `Database` - Database operation failed
    async fn login(&self, email: &str, password: &str) -> Result<User, UserError>;
}

/// Persistence operations for the user aggregate.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Persist new user to storage.
    ///
    /// # Errors
    /// * `Database` - Database operation failed (including a uniqueness
    ///   race the service pre-check did not catch)
    async fn create(&self, user: User) -> Result<User, UserError>;

    /// Retrieve user by identifier.
    ///
    /// # Returns
    /// Optional user entity (None if not found)
    ///
    /// # Errors
    /// * `Database` - Database operation failed
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError>;

    /// Retrieve user by email address.
    ///
    /// # Returns
    /// Optional user entity (None if not found)
    ///
    /// # Errors
    /// * `Database` - Database operation failed
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError>;

    /// Retrieve all users, newest first.
    ///
    /// # Errors
    /// * `Database` - Database operation failed
    async fn list_all(&self) -> Result<Vec<User>, UserError>;

    /// Update existing user in storage.
    ///
    /// # Errors
    /// * `Database` - Database operation failed or no row matched
    async fn update(&self, user: User) -> Result<User, UserError>;

    /// Remove user from storage.
    ///
    /// # Errors
    /// * `Database` - Database operation failed or no row matched
    async fn delete(&self, id: &UserId) -> Result<(), UserError>;

    /// Record a successful login in one atomic statement.
    ///
    /// Increments the login counter and refreshes the last-login timestamp
    /// in storage, never read-then-write in process, so concurrent logins
    /// by the same principal cannot lose updates.
    ///
    /// # Returns
    /// The user with refreshed statistics
    ///
    /// # Errors
    /// * `Database` - Database operation failed or no row matched
    async fn record_login(&self, id: &UserId) -> Result<User, UserError>;
}
