pub mod albums;
pub mod home;
pub mod post_detail;
pub mod posts;
pub mod todo_detail;
pub mod todos;
