pub mod error;
pub mod revalidation;
