use crate::auth::{PasswordHasher, TokenIssuer};
use crate::constants::{USER_DELETED, USER_FOUND, USER_LOGGED_IN, USER_REGISTERED, USER_UPDATED};
use crate::core::errors::{AccountError, FieldError};
use crate::core::models::{AccountResponse, LoginDto, User, UserDto, UserView};
use crate::infrastructure::storage::UserStore;
use log::{debug, error, info};

/// Orchestrates account operations over an injected store, hasher and token issuer.
pub struct AccountService<S: UserStore, H: PasswordHasher, T: TokenIssuer> {
    storage: S,
    hasher: H,
    tokens: T,
}

impl<S: UserStore, H: PasswordHasher, T: TokenIssuer> AccountService<S, H, T> {
    pub fn new(storage: S, hasher: H, tokens: T) -> Self {
        info!("Initializing AccountService");
        AccountService { storage, hasher, tokens }
    }

    pub fn token_issuer(&self) -> &T {
        &self.tokens
    }

    pub async fn register_user(&self, input: UserDto) -> Result<AccountResponse, AccountError> {
        self.try_register(input)
            .await
            .map_err(|e| Self::escalate("Error registering user", e))
    }

    pub async fn login(&self, input: LoginDto) -> Result<AccountResponse, AccountError> {
        self.try_login(input)
            .await
            .map_err(|e| Self::escalate("Error logging in", e))
    }

    pub async fn update_user(&self, id: &str, input: UserDto) -> Result<AccountResponse, AccountError> {
        self.try_update(id, input)
            .await
            .map_err(|e| Self::escalate("Error updating user", e))
    }

    pub async fn get_user(&self, id: &str) -> Result<AccountResponse, AccountError> {
        self.try_get(id)
            .await
            .map_err(|e| Self::escalate("Error getting user", e))
    }

    pub async fn delete_user(&self, id: &str) -> Result<AccountResponse, AccountError> {
        self.try_delete(id)
            .await
            .map_err(|e| Self::escalate("Error deleting user", e))
    }

    pub async fn exists_by_id(&self, id: &str) -> Result<bool, AccountError> {
        self.storage
            .exists_by_id(id)
            .await
            .map_err(|e| Self::escalate("Error checking user existence", e))
    }

    async fn try_register(&self, input: UserDto) -> Result<AccountResponse, AccountError> {
        input.validate_age()?;
        if self.storage.find_by_email(&input.email).await?.is_some() {
            return Err(AccountError::AlreadyExists(input.email));
        }

        let plaintext = input
            .new_password()
            .map(str::to_owned)
            .ok_or_else(|| {
                AccountError::ValidationError(FieldError::new(
                    "password",
                    "Invalid password",
                    "Password cannot be empty",
                ))
            })?;

        let mut user = User::try_from(UserDto { id: None, ..input })?;
        user.password = self.hasher.hash(&plaintext)?;
        let user = self.storage.save(user).await?;
        info!("Registered user {}", user.email);

        self.create_response(USER_REGISTERED, &user)
    }

    async fn try_login(&self, input: LoginDto) -> Result<AccountResponse, AccountError> {
        let user = self
            .storage
            .find_by_email(&input.email)
            .await?
            .ok_or_else(|| AccountError::NotFound(format!("User with email {}", input.email)))?;

        if !self.hasher.verify(&input.password, &user.password)? {
            return Err(AccountError::InvalidCredentials);
        }
        info!("User {} logged in", user.email);

        self.create_response(USER_LOGGED_IN, &user)
    }

    async fn try_update(&self, id: &str, input: UserDto) -> Result<AccountResponse, AccountError> {
        // Runs before the lookup: a bad age is rejected even for unknown ids.
        let age = input.validate_age()?;
        let mut user = self.find_by_id(id).await?;

        // Email uniqueness is left to the store's constraint here.
        user.name = input.name.clone();
        user.second_name = input.second_name.clone();
        user.email = input.email.clone();
        user.age = age;
        if let Some(password) = input.new_password() {
            user.password = self.hasher.hash(password)?;
        }

        let user = self.storage.save(user).await?;
        info!("Updated user {}", id);

        self.create_response(USER_UPDATED, &user)
    }

    async fn try_get(&self, id: &str) -> Result<AccountResponse, AccountError> {
        let user = self.find_by_id(id).await?;
        debug!("Fetched user {}", id);
        self.create_response(USER_FOUND, &user)
    }

    async fn try_delete(&self, id: &str) -> Result<AccountResponse, AccountError> {
        let user = self.find_by_id(id).await?;
        self.storage.delete(&user).await?;
        info!("Deleted user {}", id);

        self.create_response(USER_DELETED, &user)
    }

    async fn find_by_id(&self, id: &str) -> Result<User, AccountError> {
        self.storage
            .find_by_id(id)
            .await?
            .ok_or_else(|| AccountError::NotFound(format!("User with id {}", id)))
    }

    /// Every successful operation answers with a freshly minted token.
    fn create_response(&self, message: &str, user: &User) -> Result<AccountResponse, AccountError> {
        let token = self.tokens.generate_token(&user.email, user.role.as_str())?;
        Ok(AccountResponse {
            message: message.to_string(),
            token,
            user: UserView::from(user),
        })
    }

    fn escalate(context: &str, err: AccountError) -> AccountError {
        error!("{}: {}", context, err);
        if err.is_domain() {
            err
        } else {
            AccountError::Internal(format!("{}: {}", context, err))
        }
    }
}
