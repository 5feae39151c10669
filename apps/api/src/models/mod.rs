pub mod assessment;
pub mod insight;
pub mod user;
