pub mod android;
pub mod tooling;
