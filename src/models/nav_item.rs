#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub name: &'static str,
    pub href: &'static str,
    pub active: bool,
}

pub const NAVIGATION: [(&str, &str); 5] = [
    ("Home", "/"),
    ("Services", "/services"),
    ("About", "/about"),
    ("Pricing", "/pricing"),
    ("Blog", "/blog"),
];

pub fn navigation_for(current_path: &str) -> Vec<NavItem> {
    NAVIGATION
        .iter()
        .map(|(name, href)| NavItem {
            name,
            href,
            active: *href == current_path,
        })
        .collect()
}
