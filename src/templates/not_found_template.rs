use askama::Template;

use crate::handlers::helpers::PageContext;

#[derive(Template)]
#[template(path = "not_found.html")]
pub struct NotFoundTemplate {
    pub ctx: PageContext,
}

crate::impl_base_page!(NotFoundTemplate);
