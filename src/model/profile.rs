use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeveloperProfile {
    pub name: String,
    pub title: String,
    pub tagline: String,
    pub hero_introduction: String,
    pub biography: String,
    pub contact: ContactChannels,
    pub resume_url: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub education: Vec<EducationEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactChannels {
    pub email: String,
    pub phone: String,
    pub location: String,
    pub linkedin: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub degree: String,
    pub institution: String,
    pub duration: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grade: Option<String>,
}

impl DeveloperProfile {
    /// Biography split into display paragraphs on blank lines.
    pub fn biography_paragraphs(&self) -> Vec<&str> {
        self.biography
            .split("\n\n")
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .collect()
    }

    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.contact.email)
    }

    pub fn tel(&self) -> String {
        format!("tel:{}", self.contact.phone)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile_with_bio(bio: &str) -> DeveloperProfile {
        DeveloperProfile {
            name: "Ada".to_string(),
            title: "Engineer".to_string(),
            tagline: String::new(),
            hero_introduction: String::new(),
            biography: bio.to_string(),
            contact: ContactChannels {
                email: "ada@example.com".to_string(),
                phone: "123".to_string(),
                location: "London".to_string(),
                linkedin: "https://linkedin.com/in/ada".to_string(),
                github: None,
            },
            resume_url: "/resume.pdf".to_string(),
            education: Vec::new(),
        }
    }

    #[test]
    fn test_biography_paragraphs_skips_blank_runs() {
        let profile = profile_with_bio("First.\n\n\n\nSecond.\n\n");
        assert_eq!(profile.biography_paragraphs(), vec!["First.", "Second."]);
    }

    #[test]
    fn test_contact_links() {
        let profile = profile_with_bio("");
        assert_eq!(profile.mailto(), "mailto:ada@example.com");
        assert_eq!(profile.tel(), "tel:123");
    }
}
