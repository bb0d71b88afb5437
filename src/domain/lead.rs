use std::fmt;

use serde::Serialize;

use crate::domain::EmailInput;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Category {
    Admissions,
    Fees,
    Transport,
    Curriculum,
    Complaint,
    Sports,
    General,
    Other,
}

impl Category {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Admissions" => Some(Self::Admissions),
            "Fees" => Some(Self::Fees),
            "Transport" => Some(Self::Transport),
            "Curriculum" => Some(Self::Curriculum),
            "Complaint" => Some(Self::Complaint),
            "Sports" => Some(Self::Sports),
            "General" => Some(Self::General),
            "Other" => Some(Self::Other),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admissions => "Admissions",
            Self::Fees => "Fees",
            Self::Transport => "Transport",
            Self::Curriculum => "Curriculum",
            Self::Complaint => "Complaint",
            Self::Sports => "Sports",
            Self::General => "General",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "High" => Some(Self::High),
            "Medium" => Some(Self::Medium),
            "Low" => Some(Self::Low),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Campus {
    Dubai,
    #[serde(rename = "Abu Dhabi")]
    AbuDhabi,
    Sharjah,
}

impl Campus {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Dubai" => Some(Self::Dubai),
            "Abu Dhabi" => Some(Self::AbuDhabi),
            "Sharjah" => Some(Self::Sharjah),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dubai => "Dubai",
            Self::AbuDhabi => "Abu Dhabi",
            Self::Sharjah => "Sharjah",
        }
    }
}

impl fmt::Display for Campus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Model-predicted fields only. The caller attaches `id` and `subject`
/// to build a [`Lead`]. Optional fields carry explicit-null semantics:
/// `None` means the model stated the value is absent, not that parsing
/// lost it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub category: Category,
    pub priority: Priority,
    pub student_name: Option<String>,
    pub grade_applying_for: Option<String>,
    pub campus: Option<Campus>,
    pub contact_details: Option<String>,
    pub summary: String,
}

/// A fully classified email, one CSV row of the exported lead table.
/// Field order is the export column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Lead {
    pub id: String,
    pub subject: String,
    pub category: Category,
    pub priority: Priority,
    pub student_name: Option<String>,
    pub grade_applying_for: Option<String>,
    pub campus: Option<Campus>,
    pub contact_details: Option<String>,
    pub summary: String,
}

impl Lead {
    pub fn from_classification(email: &EmailInput, classification: Classification) -> Self {
        Self {
            id: email.id.clone(),
            subject: email.subject.clone(),
            category: classification.category,
            priority: classification.priority,
            student_name: classification.student_name,
            grade_applying_for: classification.grade_applying_for,
            campus: classification.campus,
            contact_details: classification.contact_details,
            summary: classification.summary,
        }
    }
}
