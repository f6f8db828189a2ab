pub mod email;
pub mod name;
pub mod phone;
pub mod submission;
