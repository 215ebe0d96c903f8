//! Handlers for the `/auth` resource (login, first-admin bootstrap).

use std::sync::LazyLock;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use portal_core::error::CoreError;
use portal_core::validation::require_non_blank;
use portal_db::models::admin::{Admin, AdminInfo, CreateAdmin};
use portal_db::repositories::AdminRepo;
use serde::{Deserialize, Serialize};

use crate::auth::jwt::generate_token;
use crate::auth::password::{
    hash_password, validate_password_strength, verify_password, MIN_PASSWORD_LENGTH,
};
use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Shared by every login failure so callers cannot tell which part was wrong.
const INVALID_CREDENTIALS: &str = "Invalid username or password";

/// Verified against when the username is unknown, so both failure paths pay
/// for one Argon2id verification.
static DUMMY_HASH: LazyLock<String> =
    LazyLock::new(|| hash_password("no-such-admin-placeholder").unwrap_or_default());

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Request body for `POST /auth/init`.
#[derive(Debug, Deserialize)]
pub struct InitRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Successful login response.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    /// Token lifetime in seconds.
    pub expires_in: i64,
    pub admin: AdminInfo,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/auth/login
///
/// Authenticate with username + password and receive a bearer token.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    if input.username.trim().is_empty() || input.password.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "username and password are required".into(),
        )));
    }

    let found = AdminRepo::find_by_username(&state.pool, input.username.trim()).await?;
    let admin = verify_credentials(found, &input.password).inspect_err(|_| {
        tracing::warn!(username = %input.username.trim(), "Failed login attempt");
    })?;

    AdminRepo::record_login(&state.pool, admin.id).await?;

    let token = generate_token(admin.id, &admin.username, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation failed: {e}")))?;

    tracing::info!(admin_id = admin.id, "Admin logged in");
    Ok(Json(LoginResponse {
        token,
        expires_in: state.config.jwt.expires_in_secs(),
        admin: AdminInfo::from(&admin),
    }))
}

/// POST /api/v1/auth/init
///
/// Create the first administrator. Refused with 409 once any admin exists.
pub async fn init(
    State(state): State<AppState>,
    Json(input): Json<InitRequest>,
) -> AppResult<impl IntoResponse> {
    let username = require_non_blank("username", &input.username)?;
    validate_password_strength(&input.password, MIN_PASSWORD_LENGTH)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing failed: {e}")))?;

    let admin = AdminRepo::create_first(
        &state.pool,
        &CreateAdmin {
            username,
            password_hash,
        },
    )
    .await?
    .ok_or_else(|| {
        AppError::Core(CoreError::Conflict(
            "An administrator already exists".into(),
        ))
    })?;

    tracing::info!(admin_id = admin.id, username = %admin.username, "Initial admin created");
    Ok((StatusCode::CREATED, Json(AdminInfo::from(&admin))))
}

/// Check a password against an optional account lookup.
///
/// Unknown usernames and wrong passwords produce the same error and cost
/// the same Argon2id work.
pub fn verify_credentials(admin: Option<Admin>, password: &str) -> AppResult<Admin> {
    let unauthorized = || AppError::Core(CoreError::Unauthorized(INVALID_CREDENTIALS.into()));

    let Some(admin) = admin else {
        let _ = verify_password(password, &DUMMY_HASH);
        return Err(unauthorized());
    };

    let valid = verify_password(password, &admin.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;

    if valid {
        Ok(admin)
    } else {
        Err(unauthorized())
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use argon2::password_hash::PasswordHash;
    use assert_matches::assert_matches;
    use chrono::Utc;

    use super::*;

    fn admin_with_password(password: &str) -> Admin {
        Admin {
            id: 1,
            username: "admin".into(),
            password_hash: hash_password(password).unwrap(),
            last_login_at: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn message(err: AppError) -> String {
        match err {
            AppError::Core(CoreError::Unauthorized(msg)) => msg,
            other => panic!("expected Unauthorized, got {other:?}"),
        }
    }

    #[test]
    fn correct_password_is_accepted() {
        let admin = verify_credentials(Some(admin_with_password("hunter22")), "hunter22").unwrap();
        assert_eq!(admin.username, "admin");
    }

    #[test]
    fn unknown_user_and_wrong_password_look_identical() {
        let unknown = message(verify_credentials(None, "whatever").unwrap_err());
        let wrong = message(
            verify_credentials(Some(admin_with_password("hunter22")), "hunter23").unwrap_err(),
        );
        assert_eq!(unknown, wrong);
        assert_eq!(unknown, INVALID_CREDENTIALS);
    }

    #[test]
    fn dummy_hash_is_a_verifiable_argon2id_hash() {
        let parsed = PasswordHash::new(&DUMMY_HASH).expect("dummy hash must parse");
        assert_eq!(parsed.algorithm.as_str(), "argon2id");
        assert_eq!(verify_password("guess-guess", &DUMMY_HASH), Ok(false));
    }

    fn fastest_of_three(f: impl Fn()) -> Duration {
        (0..3)
            .map(|_| {
                let start = Instant::now();
                f();
                start.elapsed()
            })
            .min()
            .unwrap()
    }

    #[test]
    fn unknown_user_costs_as_much_as_wrong_password() {
        let admin = admin_with_password("hunter22");
        // Build the dummy hash outside the timed section.
        LazyLock::force(&DUMMY_HASH);

        let unknown = fastest_of_three(|| {
            let _ = verify_credentials(None, "guess-guess");
        });
        let wrong = fastest_of_three(|| {
            let _ = verify_credentials(Some(admin.clone()), "guess-guess");
        });

        assert!(
            unknown * 4 >= wrong,
            "unknown user took {unknown:?}, wrong password took {wrong:?}"
        );
    }

    #[test]
    fn corrupt_hash_is_an_internal_error() {
        let mut admin = admin_with_password("hunter22");
        admin.password_hash = "not-a-phc-string".into();
        assert_matches!(
            verify_credentials(Some(admin), "hunter22"),
            Err(AppError::InternalError(_))
        );
    }
}
