pub mod albums;
pub mod contacts;
pub mod decks;
pub mod health;
pub mod profiles;
pub mod resource;
