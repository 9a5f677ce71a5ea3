// Static marketing copy shared by the landing, about and services pages.

#[derive(Clone, Debug)]
pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Debug)]
pub struct Stat {
    pub icon: &'static str,
    pub number: &'static str,
    pub label: &'static str,
}

#[derive(Clone, Debug)]
pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub company: &'static str,
    pub content: &'static str,
    pub avatar: &'static str,
}

#[derive(Clone, Debug)]
pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
    pub image: &'static str,
    pub bio: &'static str,
}

#[derive(Clone, Debug)]
pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

#[derive(Clone, Debug)]
pub struct ServiceOffering {
    pub id: u32,
    pub name: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
    pub image: &'static str,
}
