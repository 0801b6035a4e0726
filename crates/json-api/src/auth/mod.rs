//! Auth

pub(crate) mod errors;
pub(crate) mod login;
pub(crate) mod logout;
pub(crate) mod session_check;
