pub mod albums;
pub mod contacts;
pub mod decks;
pub mod profiles;
