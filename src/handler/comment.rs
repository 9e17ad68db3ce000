pub mod create;
pub use create as Create;

pub mod reply;
pub use reply as Reply;

pub mod thread;
pub use thread as Thread;

pub mod delete;
pub use delete as Delete;

pub mod vote;
pub use vote as Vote;
