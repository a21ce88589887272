pub mod availability;
pub mod booking;
pub mod contact;
pub mod content;
pub mod events;
pub mod gallery;
pub mod menu;
pub mod newsletter;
pub mod settings;
pub mod store;

pub use availability::{compute_time_slots, SlotTime, TimeSlot};
pub use booking::{BookingField, BookingFieldError, BookingForm, PartySize, ReservationIntent};
pub use content::{InstagramPost, TeamMember, Testimonial};
pub use events::{events_on_day, upcoming_events, Event, MonthGrid};
pub use gallery::{GalleryImage, Lightbox};
pub use menu::{filter_sections, DietaryFilter, MenuItem, MenuSection, SectionExpansion};
pub use newsletter::{NewsletterError, NewsletterPhase, NewsletterPopup, PopupPosition};
pub use settings::{popup_delay_ms, SiteSettings};
pub use store::{KeyValueStore, MemoryStore, StoreError};
