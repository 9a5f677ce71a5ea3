use askama::Template;

use crate::handlers::helpers::PageContext;
use crate::models::{Faq, PlanView};

#[derive(Template)]
#[template(path = "pricing.html")]
pub struct PricingTemplate {
    pub ctx: PageContext,
    pub plans: Vec<PlanView>,
    pub yearly: bool,
    pub faqs: Vec<Faq>,
}

crate::impl_base_page!(PricingTemplate);
