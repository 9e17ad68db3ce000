pub mod get;
pub use get as Get;

pub mod follow;
pub use follow as Follow;

pub mod unfollow;
pub use unfollow as Unfollow;

pub mod follower_count;
pub use follower_count as FollowerCount;
