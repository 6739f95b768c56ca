pub mod location;
pub mod logic;
pub mod pricing;
pub mod property;
pub mod zip;
