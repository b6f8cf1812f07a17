//! # form3-accounts
//!
//! Client for the accounts resource of the Form3 API, plus the CLI built on it.
//!
//! ```rust,ignore
//! use form3_accounts::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), ApiError> {
//!     let client = Form3::new(Form3Config::with_url("http://localhost:8080/v1"));
//!
//!     let attributes = AccountAttributes {
//!         country: "GB".to_string(),
//!         ..Default::default()
//!     };
//!     let account = client
//!         .accounts
//!         .create("eb0bd6f5-c3f5-44b2-b677-acd23cdde73c", &attributes)
//!         .await?;
//!
//!     client.accounts.delete(&account.id, account.version).await
//! }
//! ```

pub use error::{ApiError, AppError};

/// Commonly used types behind a single import.
pub mod prelude {
    pub use crate::api::accounts::{Accounts, IdGenerator, UuidGenerator};
    pub use crate::api::models::{
        Account, AccountAttributes, AccountListPagination, AccountListParams, AccountPage, Links,
    };
    pub use crate::core::form3::{DEFAULT_BASE_URL, Form3, Form3Config};
    pub use crate::error::ApiError;
}

/// Main architecture layers (dependency flow: CLI → Core → API)
pub mod cli; // Command-line interface
pub mod core; // Client facade
pub mod storage; // Configuration persistence

/// Support modules (used across layers)
pub mod api; // Accounts API client
pub mod display; // Output formatting
pub mod error; // Error handling
pub mod utils; // Shared utilities and helpers

pub type Result<T> = std::result::Result<T, AppError>;
