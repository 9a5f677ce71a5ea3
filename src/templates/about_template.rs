use askama::Template;

use crate::handlers::helpers::PageContext;
use crate::models::{Stat, TeamMember};

#[derive(Template)]
#[template(path = "about.html")]
pub struct AboutTemplate {
    pub ctx: PageContext,
    pub achievements: Vec<Stat>,
    pub team: Vec<TeamMember>,
}

crate::impl_base_page!(AboutTemplate);
