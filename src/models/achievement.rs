use chrono::{DateTime, Datelike, NaiveDate, TimeZone, Utc};
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg?height=300&width=500";

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct Achievement {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewAchievement {
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
    pub image_url: Option<String>,
}

/// A fixed entry on the "major milestones" timeline.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct Milestone {
    pub year: i32,
    pub summary: &'static str,
}

impl Achievement {
    pub fn from_new(id: Uuid, created_at: DateTime<Utc>, achievement: NewAchievement) -> Self {
        Self {
            id,
            created_at,
            title: achievement.title,
            description: achievement.description,
            date: achievement.date,
            image_url: achievement.image_url,
        }
    }

    pub fn year(&self) -> i32 {
        self.date.year()
    }

    pub fn image(&self) -> &str {
        self.image_url.as_deref().unwrap_or(PLACEHOLDER_IMAGE)
    }

    /// Date as shown on the achievement card, e.g. "June 10, 2023".
    pub fn display_date(&self) -> String {
        self.date.format("%B %-d, %Y").to_string()
    }
}

pub const MILESTONES: [Milestone; 4] = [
    Milestone {
        year: 2008,
        summary: "Hope Foundation was established with a mission to support physically challenged children",
    },
    Milestone {
        year: 2012,
        summary: "Opened our first dedicated education and therapy center",
    },
    Milestone {
        year: 2018,
        summary: "Celebrated 10 years of service and reached the milestone of supporting 1,000 children",
    },
    Milestone {
        year: 2023,
        summary: "Expanded to three locations and launched our digital learning platform",
    },
];

fn sample(
    n: u128,
    created: (i32, u32, u32),
    title: &str,
    description: &str,
    date: (i32, u32, u32),
) -> Achievement {
    Achievement {
        id: Uuid::from_u128(n),
        created_at: Utc
            .with_ymd_and_hms(created.0, created.1, created.2, 0, 0, 0)
            .unwrap(),
        title: title.to_string(),
        description: description.to_string(),
        date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
        image_url: Some("/placeholder.svg?height=400&width=600".to_string()),
    }
}

lazy_static! {
    /// Shown whenever the record store has no achievements to offer.
    pub static ref SAMPLE_ACHIEVEMENTS: Vec<Achievement> = vec![
        sample(
            1,
            (2023, 6, 15),
            "National Art Competition Winners",
            "Our students won first place in the National Inclusive Art Competition, showcasing their creativity and talent. The competition featured over 500 entries from across the country, and our students' collaborative art piece titled 'A World Without Barriers' captured the judges' hearts with its powerful message and vibrant execution.",
            (2023, 6, 10),
        ),
        sample(
            2,
            (2023, 9, 20),
            "New Therapy Center Opening",
            "We opened our state-of-the-art therapy center, expanding our capacity to serve more children in need. The new center features specialized equipment for physical, occupational, and speech therapy, as well as sensory rooms and adaptive technology. This expansion will allow us to provide services to an additional 100 children annually.",
            (2023, 9, 15),
        ),
        sample(
            3,
            (2023, 12, 10),
            "Community Partnership Award",
            "Recognized for our outstanding community engagement and partnerships with local businesses and organizations. This award acknowledges our collaborative efforts to create inclusive opportunities for physically challenged children and raise awareness about accessibility issues in our community.",
            (2023, 12, 5),
        ),
        sample(
            4,
            (2022, 5, 25),
            "Inclusive Sports Day Success",
            "Our annual Inclusive Sports Day brought together over 200 participants from across the region for a day of adaptive sports and activities. The event featured wheelchair basketball, sitting volleyball, and other inclusive games that allowed children of all abilities to participate and compete together.",
            (2022, 5, 20),
        ),
        sample(
            5,
            (2022, 11, 15),
            "Educational Innovation Grant",
            "Received a major grant to implement innovative educational technologies in our classrooms. This funding will support the purchase of adaptive learning devices, specialized software, and training for our teachers to better serve students with diverse physical needs and learning styles.",
            (2022, 11, 10),
        ),
        sample(
            6,
            (2021, 8, 12),
            "Student Graduation Milestone",
            "Celebrated the graduation of our largest class yet, with 15 students moving on to mainstream schools or vocational training programs. This achievement highlights the effectiveness of our educational approach and the dedication of our students, teachers, and support staff.",
            (2021, 8, 5),
        ),
    ];
}
