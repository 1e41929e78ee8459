pub mod health;
pub mod login;
pub mod orders;
pub mod whoami;
