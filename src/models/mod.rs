pub mod achievement;
pub mod donation;
pub mod site;
pub mod volunteer;
