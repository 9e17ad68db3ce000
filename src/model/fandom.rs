use serde::{Deserialize, Serialize};

//fandom_core
#[derive(Debug, Deserialize, Serialize)]
pub struct FandomCore {
    pub uuid: String,
    pub name: String,
    pub tag_name: String,
    pub description: Option<String>,
    pub created_by: String,

    pub created_at: i64,
    pub modified_at: i64,
}

//fandom_stat
#[derive(Debug, Deserialize, Serialize)]
pub struct FandomStat {
    pub uuid: String,

    pub member_count: i64,
    pub post_count: i64,

    pub modified_at: i64,
}

//fandom_member
#[derive(Debug, Deserialize, Serialize)]
pub struct FandomMember {
    pub fandom_id: String,
    pub user_id: String,
    pub joined_at: i64,
}

//fandom_moderator
#[derive(Debug, Deserialize, Serialize)]
pub struct FandomModerator {
    pub fandom_id: String,
    pub user_id: String,
    pub assigned_by: String,
    pub assigned_at: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum FandomRequestStatus { Pending, Approved, Rejected }
impl std::fmt::Display for FandomRequestStatus {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(fmt,"{:?}", self)
    }
}

//fandom_request
#[derive(Debug, Deserialize, Serialize)]
pub struct FandomRequest {
    pub uuid: String,
    pub name: String,
    pub tag_name: String,
    pub description: Option<String>,
    pub requested_by: String,
    pub status: FandomRequestStatus,

    pub created_at: i64,
    pub reviewed_at: Option<i64>,
    pub reviewed_by: Option<String>,
}
