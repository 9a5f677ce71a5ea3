use askama::Template;

use crate::handlers::helpers::PageContext;
use crate::models::BlogPost;

#[derive(Template)]
#[template(path = "blog.html")]
pub struct BlogTemplate {
    pub ctx: PageContext,
    pub posts: Vec<BlogPost>,
}

crate::impl_base_page!(BlogTemplate);

#[derive(Template)]
#[template(path = "blog_post.html")]
pub struct BlogPostTemplate {
    pub ctx: PageContext,
    pub post: BlogPost,
}

crate::impl_base_page!(BlogPostTemplate);
