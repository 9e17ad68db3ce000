pub mod request;
pub use request as Request;

pub mod review_request;
pub use review_request as ReviewRequest;

pub mod get;
pub use get as Get;

pub mod top;
pub use top as Top;

pub mod join;
pub use join as Join;

pub mod leave;
pub use leave as Leave;
