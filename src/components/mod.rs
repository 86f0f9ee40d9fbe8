pub mod error_banner;
pub mod lookup_display;
pub mod lookup_form;
pub mod record_card;

// Re-export core Component trait
pub use tui_dispatch::Component;

pub use error_banner::{ErrorBanner, ErrorBannerProps, ERROR_ICON};
pub use lookup_display::{LookupDisplay, LookupDisplayProps};
pub use lookup_form::{LookupForm, LookupFormProps};
pub use record_card::{RecordCard, RecordCardProps};
