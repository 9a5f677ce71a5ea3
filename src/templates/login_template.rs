use askama::Template;

use crate::handlers::helpers::PageContext;

#[derive(Template)]
#[template(path = "login.html")]
pub struct LoginTemplate {
    pub ctx: PageContext,
    /// Echoed back after a failed attempt; the password never is.
    pub email: String,
}

crate::impl_base_page!(LoginTemplate);
