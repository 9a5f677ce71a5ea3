use askama::Template;

use crate::handlers::helpers::PageContext;
use crate::models::{Feature, Stat, Testimonial};

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub ctx: PageContext,
    pub features: Vec<Feature>,
    pub stats: Vec<Stat>,
    pub testimonials: Vec<Testimonial>,
    pub demo_video_url: &'static str,
}

crate::impl_base_page!(IndexTemplate);
