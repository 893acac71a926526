pub mod advance;
pub mod attendance;
pub mod salary;
pub mod site;
pub mod worker;
