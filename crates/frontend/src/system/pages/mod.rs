pub mod activate;
pub mod login;
