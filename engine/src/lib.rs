pub mod image_model;
pub use image_model::ImageModel;

pub mod infographic;
