//! Course catalog.
//!
//! The catalog is a fixed set of mock tracks; there is no course service.

use serde::Serialize;

use crate::error::{LearnError, LearnResult};

/// A course track offered on the platform.
#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: &'static str,
    pub title: &'static str,
    /// Card blurb
    pub description: &'static str,
    /// Detail page copy
    pub full_description: &'static str,
    pub image: &'static str,
    pub rating: f32,
    /// Whole dollars
    pub price: u32,
    pub category: &'static str,
    pub instructor: &'static str,
    pub enrolled_students: u32,
    pub duration: &'static str,
    /// Number of modules in the track
    pub courses_count: u32,
    /// Next intake, `MM/YYYY`
    pub date: &'static str,
    pub learning_outcomes: &'static [&'static str],
    pub technologies: &'static [&'static str],
}

static COURSES: [Course; 3] = [
    Course {
        id: "software-development",
        title: "Software Development",
        description: "Unlock your potential with comprehensive training in modern software development",
        full_description: "Unlock your potential with comprehensive training in modern software development. Become a Full-Stack Web Developer with a single comprehensive course covering HTML, CSS, JavaScript, Node, React, PostgreSQL, Web3, and DApps.",
        image: "/courses/software-development.png",
        rating: 4.0,
        price: 350,
        category: "Software Engineering",
        instructor: "John Doe",
        enrolled_students: 50,
        duration: "12 weeks",
        courses_count: 4,
        date: "03/2025",
        learning_outcomes: &[
            "Build 16 web development projects for your portfolio, ready to apply for junior developer jobs.",
            "After the course you will be able to build ANY website you want.",
            "Build fully-fledged websites and web apps for your startup or business.",
            "Master frontend development with React, NextJs, HTML, CSS, Vue and Angular",
            "Master backend development with Node, PHP, Python etc.",
        ],
        technologies: &["HTML", "CSS", "JavaScript", "Node.js", "React", "PostgreSQL", "Web3", "DApps"],
    },
    Course {
        id: "data-science-mastery",
        title: "Data Science Mastery",
        description: "Equip yourself with the skills to analyze, interpret, and leverage data.",
        full_description: "Equip yourself with the skills to analyze, interpret, and leverage data, becoming an expert in data science methodologies and tools.",
        image: "/courses/data-science-mastery.png",
        rating: 4.0,
        price: 350,
        category: "Data Science",
        instructor: "Jane Smith",
        enrolled_students: 75,
        duration: "14 weeks",
        courses_count: 5,
        date: "03/2025",
        learning_outcomes: &[
            "Master Python for data analysis and machine learning",
            "Build predictive models using advanced algorithms",
            "Create compelling data visualizations and dashboards",
            "Work with big data technologies and cloud platforms",
            "Apply statistical analysis to real-world datasets",
        ],
        technologies: &["Python", "R", "SQL", "TensorFlow", "Pandas", "NumPy", "Matplotlib", "Scikit-learn"],
    },
    Course {
        id: "cloud-computing-expertise",
        title: "Cloud Computing Expertise",
        description: "Gain hands-on experience in cloud preparing you to manage scalable..",
        full_description: "Gain hands-on experience in cloud architecture, preparing you to manage scalable, secure, and efficient cloud solutions.",
        image: "/courses/cloud-computing-expertise.png",
        rating: 4.0,
        price: 350,
        category: "Cloud Computing",
        instructor: "Mike Johnson",
        enrolled_students: 60,
        duration: "10 weeks",
        courses_count: 3,
        date: "03/2025",
        learning_outcomes: &[
            "Design and implement cloud architectures on AWS, Azure, and GCP",
            "Master containerization with Docker and Kubernetes",
            "Implement DevOps practices and CI/CD pipelines",
            "Manage cloud security and compliance requirements",
            "Optimize cloud costs and performance",
        ],
        technologies: &["AWS", "Azure", "Google Cloud", "Docker", "Kubernetes", "Terraform", "CI/CD"],
    },
];

/// Price shown on the checkout page when no course was picked.
pub const FALLBACK_PRICE: u32 = 350;

pub fn courses() -> &'static [Course] {
    &COURSES
}

pub fn course_by_id(id: &str) -> Option<&'static Course> {
    COURSES.iter().find(|c| c.id == id)
}

/// Like [`course_by_id`], for callers that treat a missing course as an error.
pub fn require_course(id: &str) -> LearnResult<&'static Course> {
    course_by_id(id).ok_or_else(|| LearnError::CourseNotFound(id.to_string()))
}

/// Up to two other courses to show below a course's details.
pub fn related_courses(current_id: &str) -> Vec<&'static Course> {
    COURSES.iter().filter(|c| c.id != current_id).take(2).collect()
}

/// Case-insensitive substring search over title, description and category.
/// An empty term matches everything.
pub fn search_courses(term: &str) -> Vec<&'static Course> {
    let needle = term.to_lowercase();
    COURSES
        .iter()
        .filter(|c| {
            c.title.to_lowercase().contains(&needle)
                || c.description.to_lowercase().contains(&needle)
                || c.category.to_lowercase().contains(&needle)
        })
        .collect()
}

/// `$350`
pub fn format_price(dollars: u32) -> String {
    format!("${dollars}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_by_id() {
        assert_eq!(course_by_id("data-science-mastery").map(|c| c.instructor), Some("Jane Smith"));
        assert!(course_by_id("rust-101").is_none());
        assert!(matches!(require_course("rust-101"), Err(LearnError::CourseNotFound(_))));
    }

    #[test]
    fn related_excludes_current() {
        let related = related_courses("software-development");
        assert_eq!(related.len(), 2);
        assert!(related.iter().all(|c| c.id != "software-development"));
        assert_eq!(related_courses("unknown").len(), 2);
    }

    #[test]
    fn search_is_case_insensitive_across_fields() {
        assert_eq!(search_courses("CLOUD").len(), 1);
        // Category only
        assert_eq!(search_courses("software engineering")[0].id, "software-development");
        // Description only
        assert_eq!(search_courses("interpret")[0].id, "data-science-mastery");
        assert_eq!(search_courses("").len(), 3);
        assert!(search_courses("cobol").is_empty());
    }

    #[test]
    fn price_format() {
        assert_eq!(format_price(350), "$350");
    }
}
