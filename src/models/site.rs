use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct Page {
    pub slug: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ContactDetails {
    pub general_email: &'static str,
    pub volunteer_email: &'static str,
    pub partnerships_email: &'static str,
    pub phone: &'static str,
    pub phone_hours: &'static str,
    pub address: [&'static str; 3],
    pub opening_hours: [&'static str; 3],
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ImpactFigure {
    pub value: &'static str,
    pub label: &'static str,
}

pub const ORGANIZATION: &str = "Hope Foundation";

pub const PAGES: [Page; 6] = [
    Page {
        slug: "home",
        title: "Hope Foundation",
        description: "Empowering physically challenged children through education, therapy and community.",
    },
    Page {
        slug: "about",
        title: "About Us - Hope Foundation",
        description: "Learn about Hope Foundation's mission, vision, and the team dedicated to empowering physically challenged children.",
    },
    Page {
        slug: "achievements",
        title: "Achievements - Hope Foundation",
        description: "Celebrating the accomplishments and milestones of our children and organization.",
    },
    Page {
        slug: "contact",
        title: "Contact Us - Hope Foundation",
        description: "Get in touch with Hope Foundation. We're here to answer your questions and provide information about our programs and services.",
    },
    Page {
        slug: "donate",
        title: "Donate - Hope Foundation",
        description: "Support our mission to empower physically challenged children through your generous donations.",
    },
    Page {
        slug: "volunteer",
        title: "Volunteer - Hope Foundation",
        description: "Apply to become a volunteer teacher at Hope Foundation and make a difference in the lives of physically challenged children.",
    },
];

pub const CONTACT: ContactDetails = ContactDetails {
    general_email: "info@hopefoundation.org",
    volunteer_email: "volunteer@hopefoundation.org",
    partnerships_email: "partnerships@hopefoundation.org",
    phone: "+1 (234) 567-890",
    phone_hours: "Monday to Friday, 9am - 5pm",
    address: ["123 Hope Street", "City, State 12345", "Country"],
    opening_hours: [
        "Monday - Friday: 8am - 6pm",
        "Saturday: 9am - 1pm",
        "Sunday: Closed",
    ],
};

pub const IMPACT: [ImpactFigure; 4] = [
    ImpactFigure { value: "500+", label: "Children Supported" },
    ImpactFigure { value: "50+", label: "Dedicated Teachers" },
    ImpactFigure { value: "200+", label: "Active Volunteers" },
    ImpactFigure { value: "15", label: "Years of Service" },
];

pub fn find_page(slug: &str) -> Option<&'static Page> {
    PAGES.iter().find(|page| page.slug == slug)
}
