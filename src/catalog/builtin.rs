//! Authored site content.

use crate::model::{
    Certificate, ContactChannels, DeveloperProfile, EducationEntry, Project, ProjectCategory,
    Skill,
};

use super::Catalog;

const BIOGRAPHY: &str = "I am a Computer Science Engineering graduate with a strong interest in \
Artificial Intelligence, Python development, and DevOps technologies. I enjoy solving real-world \
problems using technology and continuously improving my skills through hands-on projects and \
learning.

I have experience working with Python, C, C++, SQL, and foundational DevOps tools, and I am \
currently focused on building practical, impactful projects, especially in AI-based applications. \
I am motivated, detail-oriented, and eager to contribute to innovative teams while growing as a \
software professional.";

pub fn builtin() -> Catalog {
    Catalog {
        profile: profile(),
        projects: projects(),
        skills: skills(),
        certificates: certificates(),
    }
}

fn profile() -> DeveloperProfile {
    DeveloperProfile {
        name: "Durai Raj S".to_string(),
        title: "Full-Stack Developer | AI & ML Learning | DevOps Engineer".to_string(),
        tagline: "Building scalable solutions with modern technologies".to_string(),
        hero_introduction: "Passionate about building innovative web applications and AI \
            solutions that solve real-world problems. Specializing in full-stack development, \
            DevOps, and integrating AI/ML for smarter user experiences."
            .to_string(),
        biography: BIOGRAPHY.to_string(),
        contact: ContactChannels {
            email: "durai227raj@gmail.com".to_string(),
            phone: "9965066638".to_string(),
            location: "Thirukovilur, Kallakurichi, Tamil Nadu".to_string(),
            linkedin: "https://linkedin.com/in/durairaj06".to_string(),
            github: Some("https://github.com/DURAI227".to_string()),
        },
        resume_url: "/assets/durai_resume.pdf".to_string(),
        education: vec![
            EducationEntry {
                degree: "Bachelor of Engineering in Computer Science".to_string(),
                institution: "I.F.E.T COLLEGE OF ENGINEERING VILLUPURAM, TAMIL NADU".to_string(),
                duration: "2022 - 2026".to_string(),
                grade: None,
            },
            EducationEntry {
                degree: "HSC".to_string(),
                institution: "KABILAR GOVERNMENT BOYS HIGHER SECONDARY SCHOOL IN THIRUKOILURE"
                    .to_string(),
                duration: "2021 - 2022".to_string(),
                grade: None,
            },
            EducationEntry {
                degree: "SSC".to_string(),
                institution: "SRI VIDYA MANDIR SENIOR SECONDARY SCHOOL, THIRUKOILURE".to_string(),
                duration: "2019 - 2020".to_string(),
                grade: None,
            },
        ],
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn projects() -> Vec<Project> {
    vec![
        Project {
            id: "1".to_string(),
            title: "Quantum96".to_string(),
            slug: "quantum96".to_string(),
            description: "Smart Investment Tracker with AI-driven forecasting".to_string(),
            long_description: "Quantum96 is an innovative investment tracking platform that \
                leverages AI and machine learning to provide users with smart investment \
                insights. The platform includes SIP calculators, goal-setting features, and \
                real-time analytics powered by XGBoost prediction models."
                .to_string(),
            tech_stack: strings(&[
                "HTML",
                "CSS",
                "JavaScript",
                "Python",
                "XGBoost",
                "Machine Learning",
            ]),
            features: strings(&[
                "AI-powered investment predictions using XGBoost",
                "Interactive SIP calculator for planning investments",
                "Goal-setting dashboard with progress tracking",
                "Real-time portfolio analytics and insights",
                "Personalized investment recommendations",
            ]),
            impact: None,
            category: ProjectCategory::Web,
            cover_image: "https://images.unsplash.com/photo-1611974789855-9c2a0a7236a3?w=800&auto=format&fit=crop&q=60".to_string(),
            year: "2024".to_string(),
            source_code: Some("https://github.com/DURAI227".to_string()),
        },
        Project {
            id: "2".to_string(),
            title: "Accident Detection System".to_string(),
            slug: "accident-detection".to_string(),
            description: "Real-time AI-based accident detection for emergency response"
                .to_string(),
            long_description: "An AI-powered system designed to detect accidents in real-time \
                using computer vision and machine learning. The system can identify accident \
                scenarios and immediately alert emergency services, potentially saving lives by \
                reducing response times by up to 30%."
                .to_string(),
            tech_stack: strings(&["Python", "TensorFlow", "Machine Learning", "OpenCV"]),
            features: strings(&[
                "Real-time video analysis for accident detection",
                "Automatic emergency service notification",
                "GPS-based location tracking",
                "Multi-camera support for wider coverage",
                "Low latency detection under 2 seconds",
            ]),
            impact: Some("Go Project".to_string()),
            category: ProjectCategory::Ai,
            cover_image: "https://images.unsplash.com/photo-1558618666-fcd25c85cd64?w=800&auto=format&fit=crop&q=60".to_string(),
            year: "2024".to_string(),
            source_code: Some("https://github.com/DURAI227".to_string()),
        },
        Project {
            id: "3".to_string(),
            title: "Scientific Calculator".to_string(),
            slug: "scientific-calculator".to_string(),
            description:
                "Advanced calculator with scientific functions and mathematical operations"
                    .to_string(),
            long_description: "A comprehensive scientific calculator application that performs \
                advanced mathematical calculations. Features a user-friendly interface with \
                support for trigonometric functions, logarithmic operations, and complex \
                mathematical expressions."
                .to_string(),
            tech_stack: strings(&["JavaScript", "HTML", "CSS"]),
            features: strings(&[
                "Basic arithmetic operations",
                "Trigonometric functions (sin, cos, tan)",
                "Logarithmic and exponential calculations",
                "Memory functions for result storage",
                "Clear history and reset functionality",
                "Responsive and intuitive user interface",
            ]),
            impact: None,
            category: ProjectCategory::Web,
            cover_image: "https://images.unsplash.com/photo-1517694712202-14dd9538aa97?w=800&auto=format&fit=crop&q=60".to_string(),
            year: "2024".to_string(),
            source_code: Some("https://github.com/DURAI227/scientific-calculator.git".to_string()),
        },
        Project {
            id: "4".to_string(),
            title: "Chess Tic-Tac-Toe".to_string(),
            slug: "chess-tic-tac-toe".to_string(),
            description: "A hybrid game combining chess strategy with tic-tac-toe gameplay"
                .to_string(),
            long_description: "An innovative game that blends the strategic elements of chess \
                with the simplicity of tic-tac-toe. Players engage in tactical gameplay \
                combining both classic game mechanics for a unique and entertaining experience."
                .to_string(),
            tech_stack: strings(&["JavaScript", "HTML", "CSS"]),
            features: strings(&[
                "Hybrid gameplay combining chess and tic-tac-toe mechanics",
                "Interactive game board interface",
                "Real-time move validation",
                "Game state management",
                "Win detection and game outcome handling",
                "Responsive design for multiple devices",
            ]),
            impact: None,
            category: ProjectCategory::Web,
            cover_image: "/assets/chess.jpg".to_string(),
            year: "2024".to_string(),
            source_code: Some("https://github.com/DURAI227/chess-tic-tac-toe.git".to_string()),
        },
    ]
}

fn skills() -> Vec<Skill> {
    vec![
        Skill::technical("C", 75, "skill-python"),
        Skill::technical("Python", 85, "skill-python"),
        Skill::technical("Java", 70, "skill-java"),
        Skill::technical("Html/Css/Js", 80, "skill-web"),
        Skill::technical("Artificial Intelligence", 75, "skill-web"),
        Skill::technical("Machine Learning", 70, "skill-ml"),
        Skill::soft("Management"),
        Skill::soft("Creativity"),
        Skill::soft("Time Management"),
        Skill::soft("Leadership"),
        Skill::soft("Problem Solving"),
        Skill::soft("Team Collaboration"),
        Skill::language("Tamil"),
        Skill::language("English"),
    ]
}

fn certificate(id: &str, title: &str, date: &str, image: &str) -> Certificate {
    Certificate {
        id: id.to_string(),
        title: title.to_string(),
        issuer: "Professional Certification".to_string(),
        date: date.to_string(),
        credential_url: None,
        image: Some(image.to_string()),
    }
}

fn certificates() -> Vec<Certificate> {
    vec![
        certificate("1", "Python Programming", "2022", "/assets/certificates/python-cert.png"),
        certificate("2", "C Programming", "2022", "/assets/certificates/python-cert.png"),
        certificate("3", "C++ Programming", "2022", "/assets/certificates/python-cert.png"),
        certificate(
            "4",
            "SQL Database Management",
            "2022",
            "/assets/certificates/python-cert.png",
        ),
        certificate(
            "5",
            "Java Full Stack Development",
            "2025",
            "/assets/certificates/java-full-stack-cert.jpeg",
        ),
    ]
}
