//! Route-level page components.

pub mod landing;
