use actix_web::web;
use log::{error, info};

use crate::{
    db,
    dto::{Credentials, LoginResponse},
    errors::ApiError,
    models::User,
    PGPool, ADMIN_TOKEN_EXP, USER_TOKEN_EXP,
};

use super::crypto;

async fn verify_off_thread(password: String, pwd_hash: String) -> Result<bool, ApiError> {
    let res = web::block(move || crypto::verify_password(&password, &pwd_hash)).await;
    match res {
        Ok(Ok(is_match)) => Ok(is_match),
        Ok(Err(err)) => {
            error!("password verification failed: {:?}", err);
            Err(ApiError::Internal("Internal Server Error".to_string()))
        }
        Err(err) => {
            error!("blocking pool error while verifying password: {:?}", err);
            Err(ApiError::Internal("Internal Server Error".to_string()))
        }
    }
}

/// Checks `password` against the stored bcrypt hash off the worker thread.
async fn check_password(password: String, user: &User) -> Result<bool, ApiError> {
    verify_off_thread(password, user.password.clone()).await
}

/// Runs a full verify for an unknown email so it costs as much as a known one.
async fn reject_unknown(password: String) -> ApiError {
    let _ = verify_off_thread(password, crypto::DUMMY_HASH.to_string()).await;
    ApiError::invalid_credentials()
}

pub async fn login(creds: Credentials, secret: &str, pool: &PGPool) -> Result<LoginResponse, ApiError> {
    let user = match db::user::get_by_email(&creds.email, pool).await {
        Ok(Some(user)) => user,
        Ok(None) => return Err(reject_unknown(creds.password).await),
        Err(err) => {
            error!("DB error (login lookup): {:?}", err);
            return Err(ApiError::store("DB error"));
        }
    };

    if !check_password(creds.password, &user).await? {
        return Err(ApiError::invalid_credentials());
    }

    let token = jwt::create(&user, None, USER_TOKEN_EXP, secret)?;
    info!("user #{} logged in", user.id);
    Ok(LoginResponse {
        success: true,
        message: "Login successful".to_string(),
        token,
        role: None,
    })
}

/// Same flow as [`login`] restricted to admin rows; unknown admin and
/// wrong password answer with the same message.
pub async fn admin_login(creds: Credentials, secret: &str, pool: &PGPool) -> Result<LoginResponse, ApiError> {
    let admin = match db::user::get_admin_by_email(&creds.email, pool).await {
        Ok(Some(admin)) => admin,
        Ok(None) => return Err(reject_unknown(creds.password).await),
        Err(err) => {
            error!("DB error (admin lookup): {:?}", err);
            return Err(ApiError::store("DB error"));
        }
    };

    if !check_password(creds.password, &admin).await? {
        return Err(ApiError::invalid_credentials());
    }

    let token = jwt::create(&admin, Some(admin.role.as_str()), ADMIN_TOKEN_EXP, secret)?;
    info!("admin #{} logged in", admin.id);
    Ok(LoginResponse {
        success: true,
        message: "Admin login successful".to_string(),
        token,
        role: Some(admin.role),
    })
}

pub mod jwt {
    use chrono::Utc;
    use jsonwebtoken::{decode, encode, errors::Error, Algorithm, DecodingKey, EncodingKey, Header, TokenData, Validation};
    use log::error;

    use crate::{dto::Claims, errors::ApiError, models::User};

    pub fn now() -> usize {
        Utc::now().timestamp() as usize
    }

    /// signs a token for **`user`** valid for **`ttl`** seconds from now
    pub fn create(user: &User, role: Option<&str>, ttl: usize, secret: &str) -> Result<String, ApiError> {
        let claims = Claims::new(user.id, &user.email, role, now(), ttl);
        encode_claims(&claims, secret).map_err(|err| {
            error!("failed to sign token for user #{}: {:?}", user.id, err);
            ApiError::Internal("Internal Server Error".to_string())
        })
    }

    pub fn encode_claims(claims: &Claims, secret: &str) -> Result<String, Error> {
        let header = Header::new(Algorithm::HS256);
        let key = EncodingKey::from_secret(secret.as_ref());
        encode(&header, claims, &key)
    }

    /// checks signature and expiry, with no leeway past **`exp`**
    pub fn decode_claims(token: &str, secret: &str) -> Result<TokenData<Claims>, Error> {
        let key = DecodingKey::from_secret(secret.as_ref());
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        decode::<Claims>(token, &key, &validation)
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use crate::{ADMIN_TOKEN_EXP, USER_TOKEN_EXP};
        use jsonwebtoken::errors::ErrorKind;

        fn user(role: &str) -> User {
            User {
                id: 42,
                name: "Ann".to_string(),
                email: "ann@example.com".to_string(),
                mobile: "555".to_string(),
                password: "$2b$10$irrelevant".to_string(),
                role: role.to_string(),
            }
        }

        #[test]
        fn user_token_lives_one_hour() {
            let token = create(&user("user"), None, USER_TOKEN_EXP, "secret").unwrap();
            let data = decode_claims(&token, "secret").unwrap();
            assert_eq!(data.claims.id, 42);
            assert_eq!(data.claims.email, "ann@example.com");
            assert_eq!(data.claims.role, None);
            assert_eq!(data.claims.exp - data.claims.iat, 60 * 60);
        }

        #[test]
        fn admin_token_lives_two_hours_and_carries_role() {
            let token = create(&user("admin"), Some("admin"), ADMIN_TOKEN_EXP, "secret").unwrap();
            let data = decode_claims(&token, "secret").unwrap();
            assert_eq!(data.claims.role.as_deref(), Some("admin"));
            assert_eq!(data.claims.exp - data.claims.iat, 2 * 60 * 60);
        }

        #[test]
        fn expired_token_is_rejected() {
            let issued = now() - 2 * 60 * 60;
            let claims = Claims::new(1, "a@b.c", None, issued, USER_TOKEN_EXP);
            let token = encode_claims(&claims, "secret").unwrap();
            let err = decode_claims(&token, "secret").unwrap_err();
            assert!(matches!(err.kind(), ErrorKind::ExpiredSignature));
        }

        #[test]
        fn token_from_other_secret_is_rejected() {
            let token = create(&user("user"), None, USER_TOKEN_EXP, "secret").unwrap();
            let err = decode_claims(&token, "another-secret").unwrap_err();
            assert!(matches!(err.kind(), ErrorKind::InvalidSignature));
        }

        #[test]
        fn tampered_payload_is_rejected() {
            let token = create(&user("user"), None, USER_TOKEN_EXP, "secret").unwrap();
            let forged_claims = Claims::new(42, "ann@example.com", Some("admin"), now(), ADMIN_TOKEN_EXP);
            let forged = encode_claims(&forged_claims, "attacker").unwrap();

            let parts: Vec<&str> = token.split('.').collect();
            let forged_parts: Vec<&str> = forged.split('.').collect();
            let spliced = format!("{}.{}.{}", parts[0], forged_parts[1], parts[2]);
            assert!(decode_claims(&spliced, "secret").is_err());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[actix_rt::test]
    async fn unknown_email_gets_the_generic_credential_error() {
        let err = reject_unknown("hunter2".to_string()).await;
        assert_eq!(err, ApiError::invalid_credentials());
    }
}
