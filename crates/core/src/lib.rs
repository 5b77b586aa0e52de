//! Domain types shared by the gallery frontend crates.
//!
//! Nothing in here performs I/O: the HTTP client lives in
//! `galleria-backend` and the server in `galleria-web`.

pub mod error;
pub mod gallery;
pub mod links;
pub mod roles;
