//! Mock learner account: profile, enrollments and invoices.

use chrono::NaiveDate;
use serde::Serialize;

use crate::variants::BadgeVariant;

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct MockUser {
    pub first_name: &'static str,
    pub last_name: &'static str,
    pub email: &'static str,
    pub role: &'static str,
    pub phone: &'static str,
    pub location: &'static str,
}

impl MockUser {
    pub fn name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// The signed-in learner shown on the dashboard, settings and invoices pages.
pub fn current_user() -> MockUser {
    MockUser {
        first_name: "John",
        last_name: "Doe",
        email: "john.doe@example.com",
        role: "Learner",
        phone: "+1234567890",
        location: "New York, USA",
    }
}

/// Up to two initials from a display name; `"??"` when there are none.
pub fn initials(name: &str) -> String {
    let letters: String = name
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect();
    if letters.is_empty() {
        "??".to_string()
    } else {
        letters
    }
}

#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum EnrollmentStatus {
    NotStarted,
    InProgress,
    Completed,
}

impl EnrollmentStatus {
    pub fn label(&self) -> &'static str {
        match self {
            EnrollmentStatus::NotStarted => "Not Started",
            EnrollmentStatus::InProgress => "In Progress",
            EnrollmentStatus::Completed => "Completed",
        }
    }
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct EnrolledCourse {
    pub id: &'static str,
    pub title: &'static str,
    /// Percent, 0..=100
    pub progress: u8,
    pub status: EnrollmentStatus,
}

pub fn enrolled_courses() -> Vec<EnrolledCourse> {
    vec![EnrolledCourse {
        id: "software-development",
        title: "Software Development Track",
        progress: 65,
        status: EnrollmentStatus::InProgress,
    }]
}

/// Short introductory courses the learner registered for.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct TechnologyIntro {
    pub id: &'static str,
    pub name: &'static str,
    pub registered: bool,
}

pub fn technology_intros() -> Vec<TechnologyIntro> {
    [
        ("reactjs", "Quick Introduction to ReactJS"),
        ("nodejs", "Quick Introduction to NodeJs"),
        ("nextjs", "Quick Introduction to NextJS"),
        ("django", "Quick Introduction to Django"),
    ]
    .into_iter()
    .map(|(id, name)| TechnologyIntro {
        id,
        name,
        registered: true,
    })
    .collect()
}

#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    Paid,
    Pending,
    Overdue,
}

impl InvoiceStatus {
    pub fn label(&self) -> &'static str {
        match self {
            InvoiceStatus::Paid => "Paid",
            InvoiceStatus::Pending => "Pending",
            InvoiceStatus::Overdue => "Overdue",
        }
    }

    pub fn badge(&self) -> BadgeVariant {
        match self {
            InvoiceStatus::Paid => BadgeVariant::Success,
            InvoiceStatus::Pending => BadgeVariant::Warning,
            InvoiceStatus::Overdue => BadgeVariant::Error,
        }
    }
}

#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub id: u32,
    pub date: NaiveDate,
    /// Dollars
    pub amount: f64,
    pub status: InvoiceStatus,
    pub course_title: Option<&'static str>,
}

impl Invoice {
    /// `$350.00`
    pub fn amount_label(&self) -> String {
        format!("${:.2}", self.amount)
    }

    /// `Mar 15, 2025`
    pub fn date_label(&self) -> String {
        self.date.format("%b %-d, %Y").to_string()
    }
}

pub fn invoices() -> Vec<Invoice> {
    let issued = NaiveDate::from_ymd_opt(2025, 3, 15).unwrap_or(NaiveDate::MIN);
    [
        "Software Development Track",
        "Data Science Mastery",
        "Cloud Computing Expertise",
    ]
    .into_iter()
    .zip(1..)
    .map(|(title, id)| Invoice {
        id,
        date: issued,
        amount: 350.0,
        status: InvoiceStatus::Paid,
        course_title: Some(title),
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initials_from_names() {
        assert_eq!(initials("John Doe"), "JD");
        assert_eq!(initials("ama kwarteng mensah"), "AK");
        assert_eq!(initials("Cher"), "C");
        assert_eq!(initials("   "), "??");
    }

    #[test]
    fn invoice_labels() {
        let all = invoices();
        assert_eq!(all.len(), 3);
        assert_eq!(all[0].id, 1);
        assert_eq!(all[0].amount_label(), "$350.00");
        assert_eq!(all[0].date_label(), "Mar 15, 2025");
        assert_eq!(all[2].course_title, Some("Cloud Computing Expertise"));
    }

    #[test]
    fn invoice_status_badges() {
        assert_eq!(InvoiceStatus::Paid.badge(), BadgeVariant::Success);
        assert_eq!(InvoiceStatus::Overdue.badge(), BadgeVariant::Error);
        assert_eq!(InvoiceStatus::Pending.label(), "Pending");
    }

    #[test]
    fn current_user_name() {
        assert_eq!(current_user().name(), "John Doe");
        assert_eq!(initials(&current_user().name()), "JD");
    }
}
