pub mod landing;
pub mod login;
