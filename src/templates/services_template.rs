use askama::Template;

use crate::handlers::helpers::PageContext;
use crate::models::ServiceOffering;

#[derive(Template)]
#[template(path = "services.html")]
pub struct ServicesTemplate {
    pub ctx: PageContext,
    pub services: Vec<ServiceOffering>,
    pub room_options: Vec<(u8, &'static str)>,
    pub overview_video_url: &'static str,
}

crate::impl_base_page!(ServicesTemplate);
