pub mod advance;
pub mod attendance;
pub mod site;
pub mod user;
pub mod worker;
