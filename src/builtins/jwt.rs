use chrono::{ Duration, Utc };
use serde::{ Serialize, Deserialize };
use crate::model::Account::AccountRole;
use super::config::Config;

pub const ACCESS_TOKEN_MINUTES: i64 = 30;
pub const REFRESH_TOKEN_DAYS: i64 = 30;

#[derive(Debug, Clone)]
pub struct Keys {
    pub access_secret: String,
    pub refresh_secret: String,
}

impl Keys {
    pub fn from_config(config: &Config) -> Keys {
        Keys {
            access_secret: config.jwt_access_secret.clone(),
            refresh_secret: config.jwt_refresh_secret.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub role: AccountRole,
    pub exp: usize,
}

fn sign(
    secret: &str,
    user_id: &str,
    role: AccountRole,
    lifetime: Duration,
) -> Result<String, jsonwebtoken::errors::Error> {
    let claims = Claims {
        sub: user_id.to_string(),
        role,
        exp: (Utc::now() + lifetime).timestamp() as usize,
    };

    jsonwebtoken::encode(
        &jsonwebtoken::Header::default(),
        &claims,
        &jsonwebtoken::EncodingKey::from_secret(secret.as_bytes()),
    )
}

fn check(
    secret: &str,
    token: &str,
) -> Result<Claims, jsonwebtoken::errors::Error> {
    let data = jsonwebtoken::decode::<Claims>(
        token,
        &jsonwebtoken::DecodingKey::from_secret(secret.as_bytes()),
        &jsonwebtoken::Validation::default(),
    )?;

    Ok(data.claims)
}

pub mod access_token {
    use super::*;

    //returns the token and its lifetime in minutes
    pub fn generate(
        keys: &Keys,
        user_id: &str,
        role: AccountRole,
    ) -> Result<(String, i64), jsonwebtoken::errors::Error> {
        let token = sign(
            &keys.access_secret,
            user_id,
            role,
            Duration::minutes(ACCESS_TOKEN_MINUTES),
        )?;

        Ok((token, ACCESS_TOKEN_MINUTES))
    }

    pub fn verify(
        keys: &Keys,
        token: &str,
    ) -> Result<Claims, jsonwebtoken::errors::Error> {
        check(&keys.access_secret, token)
    }
}

pub mod refresh_token {
    use super::*;

    pub fn generate(
        keys: &Keys,
        user_id: &str,
        role: AccountRole,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        sign(
            &keys.refresh_secret,
            user_id,
            role,
            Duration::days(REFRESH_TOKEN_DAYS),
        )
    }

    pub fn verify(
        keys: &Keys,
        token: &str,
    ) -> Result<Claims, jsonwebtoken::errors::Error> {
        check(&keys.refresh_secret, token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys() -> Keys {
        Keys {
            access_secret: "access-test-secret".to_string(),
            refresh_secret: "refresh-test-secret".to_string(),
        }
    }

    #[test]
    fn access_token_round_trip() {
        let keys = keys();
        let (token, minutes) = access_token::generate(
            &keys,
            "user-1",
            AccountRole::User,
        ).unwrap();

        assert_eq!(minutes, ACCESS_TOKEN_MINUTES);

        let claims = access_token::verify(&keys, &token).unwrap();
        assert_eq!(claims.sub, "user-1");
        assert_eq!(claims.role, AccountRole::User);
    }

    #[test]
    fn refresh_token_round_trip_keeps_role() {
        let keys = keys();
        let token = refresh_token::generate(
            &keys,
            "admin-1",
            AccountRole::Administrator,
        ).unwrap();

        let claims = refresh_token::verify(&keys, &token).unwrap();
        assert_eq!(claims.sub, "admin-1");
        assert_eq!(claims.role, AccountRole::Administrator);
    }

    #[test]
    fn access_token_rejected_with_wrong_secret() {
        let keys = keys();
        let other = Keys {
            access_secret: "some-other-secret".to_string(),
            refresh_secret: keys.refresh_secret.clone(),
        };

        let (token, _) = access_token::generate(
            &keys,
            "user-1",
            AccountRole::User,
        ).unwrap();

        assert!(access_token::verify(&other, &token).is_err());
    }

    #[test]
    fn refresh_token_is_not_a_valid_access_token() {
        let keys = keys();
        let token = refresh_token::generate(
            &keys,
            "user-1",
            AccountRole::User,
        ).unwrap();

        assert!(access_token::verify(&keys, &token).is_err());
    }
}
