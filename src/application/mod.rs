//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide the API used by command
//! handlers.
//!
//! # Available Services
//!
//! - [`services::favorites_service::FavoritesService`] - Favorites and group membership

pub mod services;
