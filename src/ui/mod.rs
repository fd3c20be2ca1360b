// src/ui/mod.rs
pub mod dashboard;
pub mod landing;
pub mod splash;
pub mod toast;
pub mod upload;
