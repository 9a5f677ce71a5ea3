// Base trait shared by every page
pub mod base_template;
pub use base_template::BasePage;

// Individual page templates
pub mod about_template;
pub mod blog_template;
pub mod index_template;
pub mod login_template;
pub mod not_found_template;
pub mod pricing_template;
pub mod register_template;
pub mod services_template;
pub mod trial_template;

pub use about_template::AboutTemplate;
pub use blog_template::{BlogPostTemplate, BlogTemplate};
pub use index_template::IndexTemplate;
pub use login_template::LoginTemplate;
pub use not_found_template::NotFoundTemplate;
pub use pricing_template::PricingTemplate;
pub use register_template::RegisterTemplate;
pub use services_template::ServicesTemplate;
pub use trial_template::TrialTemplate;
