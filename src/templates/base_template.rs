use crate::handlers::helpers::PageContext;

/// Common surface of every page template: the shared layout context.
pub trait BasePage {
    fn ctx(&self) -> &PageContext;
}

/// Implement `BasePage` for a template struct carrying a `ctx` field.
#[macro_export]
macro_rules! impl_base_page {
    ($struct_name:ty) => {
        impl $crate::templates::BasePage for $struct_name {
            fn ctx(&self) -> &$crate::handlers::helpers::PageContext {
                &self.ctx
            }
        }
    };
}
