use askama::Template;

use crate::handlers::helpers::PageContext;
use crate::models::RegisterForm;

#[derive(Template)]
#[template(path = "register.html")]
pub struct RegisterTemplate {
    pub ctx: PageContext,
    pub form: RegisterForm,
    pub submitted: bool,
}

crate::impl_base_page!(RegisterTemplate);
