pub mod sign_up;
pub use sign_up as SignUp;

pub mod sign_in;
pub use sign_in as SignIn;

pub mod refresh;
pub use refresh as Refresh;

pub mod myself;
pub use myself as Myself;

pub mod is_admin;
pub use is_admin as IsAdmin;

pub mod reset_request;
pub use reset_request as ResetRequest;

pub mod reset_confirm;
pub use reset_confirm as ResetConfirm;
