use serde::{Deserialize, Serialize};
use super::VoteDirection;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum CommentStatus { Active, Deleted, Removed }
impl std::fmt::Display for CommentStatus {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(fmt,"{:?}", self)
    }
}

//comment_core
#[derive(Debug, Deserialize, Serialize)]
pub struct CommentCore {
    pub uuid: String,
    pub owner: String,
    pub post_id: String,
    //null means top level, set means this comment is a reply
    pub parent_comment_id: Option<String>,

    pub text: String,

    pub status: CommentStatus,

    pub created_at: i64,
    pub modified_at: i64,
    pub deleted_at: Option<i64>,
    pub removed_by: Option<String>,
}

//comment_stat
#[derive(Debug, Deserialize, Serialize)]
pub struct CommentStat {
    pub uuid: String,

    pub upvote_count: i64,
    pub downvote_count: i64,
    pub reply_count: i64,

    pub modified_at: i64,
}

//comment_vote
#[derive(Debug, Deserialize, Serialize)]
pub struct CommentVote {
    pub comment_id: String,
    pub voted_by: String,
    pub direction: VoteDirection,
    pub voted_at: i64,
}
