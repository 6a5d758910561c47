pub mod achievements;
pub mod email;
pub mod forms;
pub mod submission;
