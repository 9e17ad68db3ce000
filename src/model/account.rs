use serde::{Deserialize, Serialize};

//role for account; Administrator is platform wide, Moderator scope is
//per fandom through the fandom_moderator join collection
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum AccountRole { Administrator, Moderator, User }
impl std::fmt::Display for AccountRole {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(fmt,"{:?}", self)
    }
}

//account_core
#[derive(Debug, Deserialize, Serialize)]
pub struct AccountCore {
    pub uuid: String,
    pub email_address: String,
    pub username: String,
    pub password: String,
    pub role: AccountRole,

    pub created_at: i64,
    pub suspended_at: Option<i64>,
    pub suspended_by: Option<String>,
}

//account_profile
#[derive(Debug, Deserialize, Serialize)]
pub struct AccountProfile {
    pub uuid: String,

    pub display_name: String,
    pub biography: Option<String>,
    pub profile_verified: bool,

    pub modified_at: i64,
}

//account_social
#[derive(Debug, Deserialize, Serialize)]
pub struct AccountSocial {
    pub uuid: String,

    pub follower_count: i64,
    pub following_count: i64,

    pub modified_at: i64,
}

//account_follow
#[derive(Debug, Deserialize, Serialize)]
pub struct AccountFollow {
    pub user_id: String,
    pub followed_by: String,
    pub followed_at: i64,
}

//password_reset_request
#[derive(Debug, Deserialize, Serialize)]
pub struct PasswordResetRequest {
    pub uuid: String,
    pub user_id: String,
    pub secret_key: String,
    pub validation_code: String,
    pub code_validated: bool,
    pub expires_at: i64,
}
