use serde::{Deserialize, Serialize};
use super::VoteDirection;

//Removed is a moderation outcome, Deleted is the owner's own action;
//only Active posts are ever served
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum PostStatus { Active, Deleted, Removed }
impl std::fmt::Display for PostStatus {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(fmt,"{:?}", self)
    }
}

//post_core
#[derive(Debug, Deserialize, Serialize)]
pub struct PostCore {
    pub uuid: String,
    pub owner: String,
    pub fandom_id: String,

    pub title: String,
    pub body: Option<String>,

    pub status: PostStatus,

    pub created_at: i64,
    pub modified_at: i64,
    pub deleted_at: Option<i64>,
    pub removed_by: Option<String>,
}

//post_stat
#[derive(Debug, Deserialize, Serialize)]
pub struct PostStat {
    pub uuid: String,

    pub upvote_count: i64,
    pub downvote_count: i64,
    pub comment_count: i64,

    pub modified_at: i64,
}

//post_vote
#[derive(Debug, Deserialize, Serialize)]
pub struct PostVote {
    pub post_id: String,
    pub voted_by: String,
    pub direction: VoteDirection,
    pub voted_at: i64,
}
