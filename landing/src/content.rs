//! Static page content.

/// Name shown in the summary headline.
pub const OWNER: &str = "Atharv Pitrubhakta";

/// Brand in the nav bar and footer.
pub const BRAND: &str = "Atharv.dev";

pub const EMAIL: &str = "atharvpitrubhakta@gmail.com";
pub const PHONE_DISPLAY: &str = "+91 70833 51169";
pub const PHONE_HREF: &str = "tel:+917083351169";
pub const LOCATION: &str = "Pune, Maharashtra, India";
pub const GITHUB: &str = "https://github.com/AtharvPitrubhakta";
pub const LINKEDIN: &str = "https://www.linkedin.com/in/atharv777/";
pub const RESUME: &str = "/Atharv_7083351169.pdf";

/// Roles cycled under the name.
pub const ROLES: &[&str] = &[
    "MERN Stack Developer",
    "Full Stack Developer",
    "Frontend Developer",
    "Backend Developer",
];

pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
    pub accent: &'static str,
}

pub const STATS: &[Stat] = &[
    Stat { value: "15+", label: "Projects", accent: "text-blue-500" },
    Stat { value: "1+", label: "Years Exp", accent: "text-purple-500" },
    Stat { value: "50+", label: "Happy Clients", accent: "text-pink-500" },
];

pub struct SkillCategory {
    pub name: &'static str,
    /// Tailwind gradient stops for the card header
    pub gradient: &'static str,
    pub skills: &'static [&'static str],
}

pub const SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory {
        name: "Frontend",
        gradient: "from-blue-500 to-cyan-500",
        skills: &[
            "React.js",
            "Next.js",
            "JavaScript",
            "TypeScript",
            "HTML5 & CSS3",
            "Tailwind CSS",
            "Redux",
            "Material UI",
        ],
    },
    SkillCategory {
        name: "Backend",
        gradient: "from-green-500 to-emerald-500",
        skills: &[
            "Node.js",
            "Express.js",
            "MongoDB",
            "PostgreSQL",
            "REST APIs",
            "JWT Auth",
        ],
    },
    SkillCategory {
        name: "Tools & Others",
        gradient: "from-purple-500 to-pink-500",
        skills: &["Git & GitHub", "Postman", "AWS", "Firebase", "Vercel", "Figma"],
    },
];

pub struct Job {
    pub role: &'static str,
    pub company: &'static str,
    pub location: &'static str,
    pub period: &'static str,
    pub description: &'static str,
    pub achievements: &'static [&'static str],
}

pub const EXPERIENCE: &[Job] = &[
    Job {
        role: "Software Development Engineer I",
        company: "Nativbyte – Pune, IN",
        location: "Pune, India",
        period: "Oct 2024 – Mar 2025",
        description: "Developed an AI-powered chatbot platform with React, Node.js, and secure LLM integrations. \
                      Built REST APIs and UI features supporting document, URL, and video-based question answering.",
        achievements: &[
            "Created reusable React UI components",
            "Integrated chatbot with AI/ML services",
            "Enhanced app responsiveness and accessibility",
        ],
    },
    Job {
        role: "Software Developer Intern",
        company: "SunRayz Technology – Pune, IN",
        location: "Pune, India",
        period: "Nov 2023 – Apr 2024",
        description: "Built a school management system enabling teachers, students, and admins to manage \
                      assignments, track progress, and communicate seamlessly.",
        achievements: &[
            "Developed multiple role-based dashboards",
            "Improved UI/UX for key academic modules",
        ],
    },
];

pub struct Degree {
    pub title: &'static str,
    pub field: &'static str,
    pub institution: &'static str,
    pub duration: &'static str,
    pub grade: &'static str,
    pub focus: &'static str,
}

pub const DEGREE: Degree = Degree {
    title: "Bachelor of Technology",
    field: "Computer Science & Engineering",
    institution: "Savitribai Phule Pune University",
    duration: "2021 - 2024",
    grade: "8.32 / 10",
    focus: "Specialized in Web Development, Data Structures, Algorithms, and Software Engineering.",
};

pub const CERTIFICATIONS: &[&str] = &[
    "Web Development Bootcamp (MERN Stack) - CODEHELP",
    "MERN Stack Development - Giri's Tech Hub",
    "Basic to Advanced Structured Query - Skill Nation",
    "Training on Core JAVA - Aspiring Careers",
];

pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub tech: &'static [&'static str],
    /// Repository URL, `#` when private
    pub github: &'static str,
    /// Live demo URL, `#` when not deployed
    pub live: &'static str,
    pub featured: bool,
}

impl Project {
    pub fn has_repo(&self) -> bool {
        self.github != "#"
    }

    pub fn has_demo(&self) -> bool {
        self.live != "#"
    }
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Study Notion (Ed-Tech Platform)",
        description: "A full-stack MERN Ed-Tech app with role-based authentication, course management, \
                      and secure payments via Razorpay.",
        image: "assets/StudyNotion.png",
        tech: &["React", "Node.js", "MongoDB", "JWT", "Redux", "Razorpay"],
        github: "https://github.com/AtharvPitrubhakta/StudyNotion",
        live: "#",
        featured: true,
    },
    Project {
        title: "Expense Tracker App",
        description: "A MERN-based app for managing personal finances with CRUD operations, filtering, \
                      and data visualization.",
        image: "assets/ExpenseTracker.png",
        tech: &["React", "Node.js", "MongoDB", "JWT", "Redux"],
        github: "https://github.com/AtharvPitrubhakta/Expense-Tracker",
        live: "#",
        featured: false,
    },
    Project {
        title: "Transaction Dashboard",
        description: "Transaction Dashboard is a website that allows users to efficiently manage and \
                      analyze their financial transactions through a user-friendly interface.",
        image: "https://images.unsplash.com/photo-1460925895917-afdab827c52f?w=800&h=500&fit=crop",
        tech: &["React", "Node.js", "Chart.js", "Tailwind"],
        github: "https://github.com/AtharvPitrubhakta/Transaction_Dashboard",
        live: "#",
        featured: false,
    },
    Project {
        title: "AI Content Generator",
        description: "AI-powered content creation tool with OpenAI integration, template library, \
                      and export functionality.",
        image: "https://images.unsplash.com/photo-1677442136019-21780ecad995?w=800&h=500&fit=crop",
        tech: &["Next.js", "OpenAI", "MongoDB", "TypeScript"],
        github: "#",
        live: "#",
        featured: true,
    },
    Project {
        title: "Real Estate Platform",
        description: "Property listing platform with advanced search filters, virtual tours, and agent dashboard.",
        image: "https://images.unsplash.com/photo-1560518883-ce09059eeffa?w=800&h=500&fit=crop",
        tech: &["React", "Firebase", "Google Maps", "Material-UI"],
        github: "#",
        live: "#",
        featured: false,
    },
    Project {
        title: "Fitness Tracker App",
        description: "Health and fitness tracking application with workout plans, progress charts, \
                      and nutrition logging.",
        image: "https://images.unsplash.com/photo-1571019614242-c5c5dee9f50b?w=800&h=500&fit=crop",
        tech: &["React Native", "Node.js", "MongoDB", "Redux"],
        github: "#",
        live: "#",
        featured: false,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_project_lists_tech() {
        for project in PROJECTS {
            assert!(!project.tech.is_empty(), "{} has no tech tags", project.title);
        }
    }

    #[test]
    fn test_placeholder_links_are_detected() {
        let linked: Vec<_> = PROJECTS.iter().filter(|p| p.has_repo()).map(|p| p.title).collect();
        assert_eq!(linked.len(), 3);
        assert!(PROJECTS.iter().all(|p| !p.has_demo()));
    }

    #[test]
    fn test_roles_rotate() {
        assert!(ROLES.len() > 1);
    }
}
