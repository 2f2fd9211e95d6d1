pub mod identity;
pub mod shift;
