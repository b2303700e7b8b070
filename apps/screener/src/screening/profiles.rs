//! Fixed job-profile and threshold tables.

/// A named role and the description résumés are compared against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JobProfile {
    pub name: &'static str,
    pub description: &'static str,
}

/// Every role offered on the upload form, in display order.
pub const JOB_PROFILES: [JobProfile; 6] = [
    JobProfile {
        name: "Data Scientist",
        description: "Experience with machine learning, Git and GitHub, Leadership, Python, Python basics, data analysis, statistics, and data visualization. Knowledge of data wrangling, model evaluation, and deployment.",
    },
    JobProfile {
        name: "Web Developer",
        description: "Proficient in HTML, CSS, JavaScript, React or Angular, backend APIs, RESTful services, and SQL/NoSQL databases. Understanding of responsive design and version control.",
    },
    JobProfile {
        name: "Android Developer",
        description: "Strong knowledge of Java/Kotlin, Android SDK, UI/UX principles, and experience publishing apps on Google Play Store. Familiarity with Jetpack, MVVM, and Firebase.",
    },
    JobProfile {
        name: "DevOps Engineer",
        description: "Experience with CI/CD pipelines, Docker, Kubernetes, cloud platforms (AWS/Azure/GCP), monitoring, and scripting (Bash, Python).",
    },
    JobProfile {
        name: "Cybersecurity Analyst",
        description: "Knowledge of network security, firewalls, intrusion detection systems, ethical hacking, vulnerability assessments, and incident response.",
    },
    JobProfile {
        name: "AI/ML Engineer",
        description: "Expertise in machine learning frameworks like TensorFlow, PyTorch. Strong Python skills, model deployment, deep learning, and NLP experience.",
    },
];

/// Looks up a role by its exact name.
pub fn find_profile(name: &str) -> Option<&'static JobProfile> {
    JOB_PROFILES.iter().find(|p| p.name == name)
}

pub fn role_names() -> impl Iterator<Item = &'static str> {
    JOB_PROFILES.iter().map(|p| p.name)
}

/// Strictness tier selected on the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterLevel {
    Hard,
    Medium,
    Easy,
}

impl FilterLevel {
    pub const ALL: [FilterLevel; 3] = [FilterLevel::Hard, FilterLevel::Medium, FilterLevel::Easy];

    /// Minimum similarity ratio a résumé needs to be shortlisted.
    pub fn threshold(self) -> f64 {
        match self {
            FilterLevel::Hard => 0.05,
            FilterLevel::Medium => 0.035,
            FilterLevel::Easy => 0.02,
        }
    }

    /// Form value for this tier.
    pub fn key(self) -> &'static str {
        match self {
            FilterLevel::Hard => "hard",
            FilterLevel::Medium => "medium",
            FilterLevel::Easy => "easy",
        }
    }

    /// Option text shown on the upload form.
    pub fn label(self) -> &'static str {
        match self {
            FilterLevel::Hard => "High (Hard)",
            FilterLevel::Medium => "Medium",
            FilterLevel::Easy => "Low",
        }
    }

    /// Exact, case-sensitive match on the form value.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|level| level.key() == key)
    }
}

/// A filter selection as submitted: the raw label is kept for display,
/// unrecognized labels score against the medium cutoff.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterSelection {
    pub label: String,
    pub threshold: f64,
}

impl FilterSelection {
    pub fn resolve(label: &str) -> Self {
        let level = FilterLevel::from_key(label).unwrap_or(FilterLevel::Medium);
        FilterSelection {
            label: label.to_string(),
            threshold: level.threshold(),
        }
    }

    /// First character uppercased, the rest lowercased.
    pub fn display_label(&self) -> String {
        let mut chars = self.label.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
            None => String::new(),
        }
    }
}
