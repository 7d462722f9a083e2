use sqlx::SqlitePool;
use tracing::instrument;
use yoga_auth::{TOKEN_TYPE, create_access_token};
use yoga_config::JwtConfig;
use yoga_core::{AppError, hash_password, verify_password};
use yoga_observability::{
    track_jwt_issued, track_user_login_failure, track_user_login_success, track_user_registered,
};

use crate::modules::users::model::NewUser;
use crate::modules::users::service::{EMAIL_TAKEN, UserService};

use super::model::{JwtResponse, LoginRequest, RegisterRequest};

const BAD_CREDENTIALS: &str = "Bad credentials";

pub struct AuthService;

impl AuthService {
    /// Checks the credentials and issues an access token.
    ///
    /// Unknown email and wrong password fail the same way so the response
    /// does not reveal which accounts exist.
    #[instrument(skip(db, jwt_config))]
    pub async fn login(
        db: &SqlitePool,
        dto: LoginRequest,
        jwt_config: &JwtConfig,
    ) -> Result<JwtResponse, AppError> {
        let Some(user) = UserService::find_by_email(db, &dto.email).await? else {
            track_user_login_failure("unknown_email");
            return Err(AppError::unauthorized(BAD_CREDENTIALS));
        };

        if !verify_password(&dto.password, &user.password)? {
            track_user_login_failure("wrong_password");
            return Err(AppError::unauthorized(BAD_CREDENTIALS));
        }

        let token = create_access_token(
            user.id,
            &user.email,
            &user.first_name,
            &user.last_name,
            user.admin,
            jwt_config,
        )?;

        track_user_login_success(user.admin);
        track_jwt_issued();

        Ok(JwtResponse {
            token,
            token_type: TOKEN_TYPE.to_string(),
            id: user.id,
            username: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
            admin: user.admin,
        })
    }

    #[instrument(skip(db))]
    pub async fn register(db: &SqlitePool, dto: RegisterRequest) -> Result<(), AppError> {
        if UserService::exists_by_email(db, &dto.email).await? {
            return Err(AppError::bad_request(EMAIL_TAKEN));
        }

        let password_hash = hash_password(&dto.password)?;

        UserService::create(
            db,
            NewUser {
                email: dto.email,
                first_name: dto.first_name,
                last_name: dto.last_name,
                password_hash,
                admin: false,
            },
        )
        .await?;

        track_user_registered();
        Ok(())
    }
}
