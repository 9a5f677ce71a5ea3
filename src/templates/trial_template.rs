use askama::Template;

use crate::handlers::helpers::PageContext;
use crate::models::TrialRequestForm;

#[derive(Template)]
#[template(path = "trial.html")]
pub struct TrialTemplate {
    pub ctx: PageContext,
    pub form: TrialRequestForm,
    pub submitted: bool,
}

crate::impl_base_page!(TrialTemplate);
