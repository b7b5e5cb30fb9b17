pub mod catalog;
pub mod constants;
pub mod containment;
pub mod detector;
pub mod direction;
pub mod footprint;
pub mod mission;
pub mod mosaic;
pub mod rotation;
pub mod skycover_errors;
pub mod targets;
