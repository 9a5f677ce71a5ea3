pub mod app_state;
pub mod blog_post;
pub mod login_form;
pub mod marketing;
pub mod nav_item;
pub mod notification;
pub mod pricing_plan;
pub mod register_form;
pub mod service_request_form;
pub mod trial_request_form;
pub mod user_record;

pub use app_state::AppState;
pub use blog_post::BlogPost;
pub use login_form::LoginForm;
pub use marketing::{Faq, Feature, ServiceOffering, Stat, TeamMember, Testimonial};
pub use nav_item::{navigation_for, NavItem};
pub use notification::{Notification, NotificationVariant};
pub use pricing_plan::{BillingCycle, PlanView, PricingPlan};
pub use register_form::RegisterForm;
pub use service_request_form::{ContactForm, ServiceRequestForm};
pub use trial_request_form::TrialRequestForm;
pub use user_record::{ApprovalStatus, Project, ProjectStatus, Role, UserData, UserRecord};
