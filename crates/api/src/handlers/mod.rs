pub mod lendings;
pub mod public;
pub mod records;
pub mod validation;
