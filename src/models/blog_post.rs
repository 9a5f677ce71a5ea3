use chrono::NaiveDate;

#[derive(Clone, Debug)]
pub struct BlogPost {
    pub id: u32,
    pub slug: &'static str,
    pub title: &'static str,
    pub date: NaiveDate,
    pub author: &'static str,
    pub excerpt: &'static str,
    pub image: &'static str,
}

impl BlogPost {
    pub fn link(&self) -> String {
        format!("/blog/{}", self.slug)
    }

    /// e.g. "October 26, 2023"
    pub fn display_date(&self) -> String {
        self.date.format("%B %-d, %Y").to_string()
    }
}
