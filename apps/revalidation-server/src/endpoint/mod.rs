pub mod misc;
pub mod revalidate;
