pub mod identity;
pub mod orders;
