pub mod about;
pub mod book;
pub mod home;
pub mod menu;
pub mod not_found;

pub use about::AboutPage;
pub use book::BookPage;
pub use home::HomePage;
pub use menu::MenuPage;
pub use not_found::NotFoundPage;
