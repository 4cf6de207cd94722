pub mod about;
pub mod concepts;
pub mod home;
pub mod learn;
pub mod lesson;
pub mod not_found;
