pub mod auth;
pub mod countries;
pub mod error;
pub mod friends;
pub mod middleware;
pub mod posts;
pub mod profiles;
pub mod reactions;
pub mod routes;
