pub mod contact;
pub mod email;
pub mod newsletter;
pub mod serve;
