//! HTTP-level helpers shared by routes.

pub mod etag;
