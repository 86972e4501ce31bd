pub mod logging;
pub mod repo;
pub mod tools_env;
