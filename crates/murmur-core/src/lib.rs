//! Murmur core rules.
//!
//! Everything in here is a pure function of its inputs: session expiry,
//! who may see whose data, the like/dislike state machine, feed paging and
//! input validation. Storage and transport live in `murmur-db` and
//! `murmur-api`.

pub mod feed;
pub mod reaction;
pub mod session;
pub mod validate;
pub mod visibility;
