pub mod card;
pub mod gauge;
