//! HTML pages.
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating.
//! Every interpolated value is escaped, which matters here because image
//! pages echo caller-supplied links.

pub mod error;
pub mod image;
pub mod index;
pub mod layout;
