pub mod booking_form;
pub mod enhanced_menu;
pub mod error;
pub mod events_calendar;
pub mod floating_book_button;
pub mod image_gallery;
pub mod instagram_feed;
pub mod layout;
pub mod loading;
pub mod modal;
pub mod newsletter_signup;
pub mod team_section;
pub mod time_slot_select;

// Re-export commonly used types
pub use booking_form::BookingFormView;
pub use enhanced_menu::EnhancedMenu;
pub use events_calendar::EventsCalendar;
pub use floating_book_button::FloatingBookButton;
pub use image_gallery::ImageGallery;
pub use instagram_feed::InstagramFeed;
pub use layout::Layout;
pub use newsletter_signup::NewsletterSignup;
pub use team_section::TeamSection;
