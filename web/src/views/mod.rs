pub mod artists;
pub mod auth;
pub mod booking;
pub mod gallery;
pub mod not_found;
