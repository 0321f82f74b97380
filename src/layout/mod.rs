pub mod rects;
pub mod rows;

pub use rects::{compute_rects, ItemRect};
pub use rows::pack;
