pub const FEATURED_LIMIT: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    NewArrivals,
    StaffPicks,
    SpecialNeeds,
}

impl Category {
    pub const ALL: [Category; 3] = [
        Category::NewArrivals,
        Category::StaffPicks,
        Category::SpecialNeeds,
    ];

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|category| category.slug() == slug)
    }

    pub fn slug(self) -> &'static str {
        match self {
            Category::NewArrivals => "new-arrivals",
            Category::StaffPicks => "staff-picks",
            Category::SpecialNeeds => "special-needs",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Category::NewArrivals => "New Arrivals",
            Category::StaffPicks => "Staff Picks",
            Category::SpecialNeeds => "Special Needs",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Category::NewArrivals => "Meet our newest furry friends looking for homes",
            Category::StaffPicks => "Dogs our staff think deserve extra attention",
            Category::SpecialNeeds => "These loving dogs need special care",
        }
    }

    pub fn accent(self) -> &'static str {
        match self {
            Category::NewArrivals => "#2563eb",
            Category::StaffPicks => "#7c3aed",
            Category::SpecialNeeds => "#db2777",
        }
    }
}
