use serde::{Deserialize, Serialize};

pub mod account;
pub use account as Account;

pub mod fandom;
pub use fandom as Fandom;

pub mod post;
pub use post as Post;

pub mod comment;
pub use comment as Comment;

pub mod thread;
pub use thread as Thread;

pub mod report;
pub use report as Report;

pub mod conversation;
pub use conversation as Conversation;

//shared between post and comment votes
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum VoteDirection { Up, Down }
impl std::fmt::Display for VoteDirection {
  fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
    write!(fmt,"{:?}", self)
  }
}
