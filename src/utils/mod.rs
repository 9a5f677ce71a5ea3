pub mod currency;
pub mod platform;
pub mod url_builder;

pub use currency::format_inr;
pub use platform::store_url_for_user_agent;
pub use url_builder::canonical_url;
