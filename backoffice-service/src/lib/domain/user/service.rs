use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::user::errors::UserError;
use crate::domain::user::models::CreateUserCommand;
use crate::domain::user::models::Role;
use crate::domain::user::models::UpdateUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::UserRepository;
use crate::domain::user::ports::UserServicePort;

/// Domain service implementation for user operations.
///
/// Concrete implementation of UserServicePort with dependency injection.
pub struct UserService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    password_hasher: auth::PasswordHasher,
}

impl<UR> UserService<UR>
where
    UR: UserRepository,
{
    /// Create a new user service with an injected repository.
    pub fn new(repository: Arc<UR>) -> Self {
        Self {
            repository,
            password_hasher: auth::PasswordHasher::new(),
        }
    }
}

#[async_trait]
impl<UR> UserServicePort for UserService<UR>
where
    UR: UserRepository,
{
    async fn create_user(&self, command: CreateUserCommand) -> Result<User, UserError> {
        // Uniqueness pre-check; a concurrent insert still trips the
        // database constraint and surfaces as a Database error.
        if self
            .repository
            .find_by_email(command.email.as_str())
            .await?
            .is_some()
        {
            return Err(UserError::EmailAlreadyExists(
                command.email.as_str().to_string(),
            ));
        }

        let password_hash = self.password_hasher.hash(&command.password)?;

        let now = Utc::now();
        let user = User {
            id: UserId::new(),
            first_name: command.first_name,
            last_name: command.last_name,
            email: command.email,
            password_hash,
            role: command.role,
            is_active: true,
            login_count: 0,
            last_login_at: None,
            created_at: now,
            updated_at: now,
        };

        self.repository.create(user).await
    }

    async fn list_users(&self) -> Result<Vec<User>, UserError> {
        self.repository.list_all().await
    }

    async fn update_user(
        &self,
        id: &UserId,
        command: UpdateUserCommand,
    ) -> Result<User, UserError> {
        let mut user = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| UserError::NotFound(id.to_string()))?;

        // Uniqueness check excludes the record's own id so an update that
        // resubmits the unchanged email succeeds.
        if let Some(email) = &command.email {
            if let Some(existing) = self.repository.find_by_email(email.as_str()).await? {
                if existing.id != user.id {
                    return Err(UserError::EmailAlreadyExists(email.as_str().to_string()));
                }
            }
        }

        if let Some(first_name) = command.first_name {
            user.first_name = first_name;
        }
        if let Some(last_name) = command.last_name {
            user.last_name = last_name;
        }
        if let Some(email) = command.email {
            user.email = email;
        }
        if let Some(role) = command.role {
            user.role = role;
        }
        if let Some(is_active) = command.is_active {
            user.is_active = is_active;
        }
        if let Some(password) = command.password {
            user.password_hash = self.password_hasher.hash(&password)?;
        }

        self.repository.update(user).await
    }

    async fn delete_user(&self, id: &UserId) -> Result<(), UserError> {
        self.repository.delete(id).await
    }

    async fn login(&self, email: &str, password: &str) -> Result<User, UserError> {
        let user = self
            .repository
            .find_by_email(email)
            .await?
            .ok_or(UserError::InvalidCredentials)?;

        if !self.password_hasher.verify(password, &user.password_hash) {
            return Err(UserError::InvalidCredentials);
        }

        // Role gate runs only after the password is confirmed; valid
        // non-admin credentials are told apart from bad credentials.
        if user.role != Role::Admin {
            return Err(UserError::AdminOnly);
        }

        // Statistics write precedes token issuance; if it fails, the caller
        // never issues a token.
        self.repository.record_login(&user.id).await
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;

    use super::*;
    use crate::domain::user::models::EmailAddress;

    mock! {
        pub TestUserRepository {}

        #[async_trait]
        impl UserRepository for TestUserRepository {
            async fn create(&self, user: User) -> Result<User, UserError>;
            async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError>;
            async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError>;
            async fn list_all(&self) -> Result<Vec<User>, UserError>;
            async fn update(&self, user: User) -> Result<User, UserError>;
            async fn delete(&self, id: &UserId) -> Result<(), UserError>;
            async fn record_login(&self, id: &UserId) -> Result<User, UserError>;
        }
    }

    fn sample_user(role: Role, password_hash: String) -> User {
        let now = Utc::now();
        User {
            id: UserId::new(),
            first_name: "Super".to_string(),
            last_name: "Admin".to_string(),
            email: EmailAddress::new("admin@example.com".to_string()).unwrap(),
            password_hash,
            role,
            is_active: true,
            login_count: 3,
            last_login_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn test_create_user_success() {
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_find_by_email()
            .withf(|email| email == "jane@example.com")
            .times(1)
            .returning(|_| Ok(None));

        repository
            .expect_create()
            .withf(|user| {
                user.first_name == "Jane"
                    && user.email.as_str() == "jane@example.com"
                    && user.role == Role::Admin
                    && user.is_active
                    && user.login_count == 0
                    && user.password_hash.starts_with("$argon2")
            })
            .times(1)
            .returning(|user| Ok(user));

        let service = UserService::new(Arc::new(repository));

        let command = CreateUserCommand {
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            email: EmailAddress::new("jane@example.com".to_string()).unwrap(),
            password: "password123".to_string(),
            role: Role::Admin,
        };

        let user = service.create_user(command).await.unwrap();
        assert!(user.password_hash.starts_with("$argon2"));
        assert_ne!(user.password_hash, "password123");
    }

    #[tokio::test]
    async fn test_create_user_duplicate_email() {
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_find_by_email()
            .times(1)
            .returning(|_| Ok(Some(sample_user(Role::Admin, "$argon2id$x".to_string()))));

        repository.expect_create().times(0);

        let service = UserService::new(Arc::new(repository));

        let command = CreateUserCommand {
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            email: EmailAddress::new("admin@example.com".to_string()).unwrap(),
            password: "password123".to_string(),
            role: Role::Admin,
        };

        let result = service.create_user(command).await;
        assert!(matches!(
            result.unwrap_err(),
            UserError::EmailAlreadyExists(_)
        ));
    }

    #[tokio::test]
    async fn test_update_user_merges_present_fields() {
        let mut repository = MockTestUserRepository::new();

        let existing = sample_user(Role::Admin, "$argon2id$old".to_string());
        let user_id = existing.id;
        let untouched_last_name = existing.last_name.clone();

        let returned = existing.clone();
        repository
            .expect_find_by_id()
            .withf(move |id| *id == user_id)
            .times(1)
            .returning(move |_| Ok(Some(returned.clone())));

        repository
            .expect_update()
            .withf(move |user| {
                user.first_name == "Updated"
                    && user.last_name == untouched_last_name
                    && !user.is_active
                    && user.password_hash.starts_with("$argon2")
                    && user.password_hash != "$argon2id$old"
            })
            .times(1)
            .returning(|user| Ok(user));

        let service = UserService::new(Arc::new(repository));

        let command = UpdateUserCommand {
            first_name: Some("Updated".to_string()),
            is_active: Some(false),
            password: Some("new_password".to_string()),
            ..Default::default()
        };

        let updated = service.update_user(&user_id, command).await.unwrap();
        assert_eq!(updated.first_name, "Updated");
        assert!(!updated.is_active);
    }

    #[tokio::test]
    async fn test_update_user_keeps_own_email() {
        let mut repository = MockTestUserRepository::new();

        let existing = sample_user(Role::Admin, "$argon2id$x".to_string());
        let user_id = existing.id;

        let found = existing.clone();
        repository
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(found.clone())));

        // The email lookup finds the record itself; that is not a conflict.
        let conflict_probe = existing.clone();
        repository
            .expect_find_by_email()
            .withf(|email| email == "admin@example.com")
            .times(1)
            .returning(move |_| Ok(Some(conflict_probe.clone())));

        repository
            .expect_update()
            .times(1)
            .returning(|user| Ok(user));

        let service = UserService::new(Arc::new(repository));

        let command = UpdateUserCommand {
            email: Some(EmailAddress::new("admin@example.com".to_string()).unwrap()),
            ..Default::default()
        };

        assert!(service.update_user(&user_id, command).await.is_ok());
    }

    #[tokio::test]
    async fn test_update_user_email_conflict() {
        let mut repository = MockTestUserRepository::new();

        let existing = sample_user(Role::Admin, "$argon2id$x".to_string());
        let user_id = existing.id;

        let found = existing.clone();
        repository
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(found.clone())));

        // A different user already owns the requested email.
        repository
            .expect_find_by_email()
            .times(1)
            .returning(|_| Ok(Some(sample_user(Role::Staff, "$argon2id$y".to_string()))));

        repository.expect_update().times(0);

        let service = UserService::new(Arc::new(repository));

        let command = UpdateUserCommand {
            email: Some(EmailAddress::new("taken@example.com".to_string()).unwrap()),
            ..Default::default()
        };

        let result = service.update_user(&user_id, command).await;
        assert!(matches!(
            result.unwrap_err(),
            UserError::EmailAlreadyExists(_)
        ));
    }

    #[tokio::test]
    async fn test_update_user_not_found() {
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let service = UserService::new(Arc::new(repository));

        let result = service
            .update_user(&UserId::new(), UpdateUserCommand::default())
            .await;
        assert!(matches!(result.unwrap_err(), UserError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_login_success_records_stats_once() {
        let mut repository = MockTestUserRepository::new();

        let hasher = auth::PasswordHasher::new();
        let digest = hasher.hash("correct_password").unwrap();

        let user = sample_user(Role::Admin, digest);
        let user_id = user.id;

        let found = user.clone();
        repository
            .expect_find_by_email()
            .withf(|email| email == "admin@example.com")
            .times(1)
            .returning(move |_| Ok(Some(found.clone())));

        let mut refreshed = user.clone();
        refreshed.login_count += 1;
        refreshed.last_login_at = Some(Utc::now());
        repository
            .expect_record_login()
            .withf(move |id| *id == user_id)
            .times(1)
            .returning(move |_| Ok(refreshed.clone()));

        let service = UserService::new(Arc::new(repository));

        let logged_in = service
            .login("admin@example.com", "correct_password")
            .await
            .unwrap();
        assert_eq!(logged_in.login_count, user.login_count + 1);
        assert!(logged_in.last_login_at.is_some());
    }

    #[tokio::test]
    async fn test_login_unknown_email_and_wrong_password_are_identical() {
        // Unknown email
        let mut repository = MockTestUserRepository::new();
        repository
            .expect_find_by_email()
            .times(1)
            .returning(|_| Ok(None));
        repository.expect_record_login().times(0);

        let service = UserService::new(Arc::new(repository));
        let missing_err = service
            .login("nobody@example.com", "whatever")
            .await
            .unwrap_err();

        // Wrong password against a real digest
        let mut repository = MockTestUserRepository::new();
        let hasher = auth::PasswordHasher::new();
        let digest = hasher.hash("correct_password").unwrap();
        let user = sample_user(Role::Admin, digest);
        repository
            .expect_find_by_email()
            .times(1)
            .returning(move |_| Ok(Some(user.clone())));
        repository.expect_record_login().times(0);

        let service = UserService::new(Arc::new(repository));
        let wrong_err = service
            .login("admin@example.com", "wrong_password")
            .await
            .unwrap_err();

        assert!(matches!(missing_err, UserError::InvalidCredentials));
        assert!(matches!(wrong_err, UserError::InvalidCredentials));
        // Enumeration resistance: the caller-visible message is identical.
        assert_eq!(missing_err.to_string(), wrong_err.to_string());
    }

    #[tokio::test]
    async fn test_login_non_admin_rejected_without_stat_write() {
        let mut repository = MockTestUserRepository::new();

        let hasher = auth::PasswordHasher::new();
        let digest = hasher.hash("correct_password").unwrap();
        let user = sample_user(Role::Staff, digest);

        repository
            .expect_find_by_email()
            .times(1)
            .returning(move |_| Ok(Some(user.clone())));
        repository.expect_record_login().times(0);

        let service = UserService::new(Arc::new(repository));

        let result = service.login("admin@example.com", "correct_password").await;
        assert!(matches!(result.unwrap_err(), UserError::AdminOnly));
    }

    #[tokio::test]
    async fn test_login_stat_write_failure_fails_login() {
        let mut repository = MockTestUserRepository::new();

        let hasher = auth::PasswordHasher::new();
        let digest = hasher.hash("correct_password").unwrap();
        let user = sample_user(Role::Admin, digest);

        repository
            .expect_find_by_email()
            .times(1)
            .returning(move |_| Ok(Some(user.clone())));
        repository
            .expect_record_login()
            .times(1)
            .returning(|_| Err(UserError::Database("connection reset".to_string())));

        let service = UserService::new(Arc::new(repository));

        let result = service.login("admin@example.com", "correct_password").await;
        assert!(matches!(result.unwrap_err(), UserError::Database(_)));
    }

    #[tokio::test]
    async fn test_delete_user_passes_through() {
        let mut repository = MockTestUserRepository::new();

        let user_id = UserId::new();
        repository
            .expect_delete()
            .withf(move |id| *id == user_id)
            .times(1)
            .returning(|_| Err(UserError::Database("delete affected no rows".to_string())));

        let service = UserService::new(Arc::new(repository));

        // No existence pre-check: the persistence failure is the outcome.
        let result = service.delete_user(&user_id).await;
        assert!(matches!(result.unwrap_err(), UserError::Database(_)));
    }
}
