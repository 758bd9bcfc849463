pub mod category;
pub mod experience;
pub mod post;
pub mod project;
