pub const SITE_OWNER: &str = "Priyanshu Tiwari";
pub const CONTACT_EMAIL: &str = "mailto:priyanshu108tiwari@gmail.com";
pub const ARTICLES_HUB: &str = "https://medium.com/@priyanshu108tiwari";

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Glyph {
    GitHub,
    LinkedIn,
    Mail,
    Code,
    Database,
    Palette,
    Globe,
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub year: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub tags: &'static [&'static str],
    pub demo: &'static str,
    pub repo: &'static str,
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Article {
    pub title: &'static str,
    pub excerpt: &'static str,
    pub date: &'static str,
    pub read_time: &'static str,
    pub tags: &'static [&'static str],
    pub link: &'static str,
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub struct ExperienceEntry {
    pub company: &'static str,
    pub role: &'static str,
    pub period: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub icon: Glyph,
    pub label: &'static str,
    pub href: &'static str,
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub struct TechArea {
    pub icon: Glyph,
    pub name: &'static str,
}

pub const PROJECTS: [Project; 4] = [
    Project {
        title: "Expense tracker",
        year: "2025",
        description: "A scalable and modern expense tracker application with complete authentication, data caching, email job processing, and analytics using cutting-edge technologies like Redis, RabbitMQ, MongoDB, and React.",
        image: "/previews/expense.svg",
        tags: &["React.js", "Redis", "Node.js", "Chart.js"],
        demo: "https://expanse-tracker-redis.netlify.app/",
        repo: "https://github.com/priyanshtiwari001/full-stack-expanse-tracker",
    },
    Project {
        title: "AuthEase - NPM Package",
        year: "2025",
        description: "AuthEase is a full-featured, plug-and-play authentication solution for Node.js and React applications. Built from scratch with over 80+ NPM dependencies, it handles the complete auth lifecycle using JWT and secure route protection middleware",
        image: "/previews/npm.svg",
        tags: &["React", "Node.js", "JWT", "MongoDB"],
        demo: "https://www.npmjs.com/package/authease",
        repo: "https://www.npmjs.com/package/authease",
    },
    Project {
        title: "Podcast Transcript",
        year: "2025",
        description: "A podcast management platform that allows users to organize their shows as projects, add and manage individual episodes, and write or edit episode transcripts. It provides a intuitive interface for handling podcast content.",
        image: "/previews/podcast.svg",
        tags: &["Next.js", "MongoDB", "Node.js", "Express"],
        demo: "https://skai-lama-ques.netlify.app",
        repo: "https://github.com/priyanshtiwari001/lama-podcast",
    },
    Project {
        title: "Fast Fact Pizza",
        year: "2024",
        description: "Built with React and React Router v6 for seamless SPA navigation, using Redux Toolkit for efficient state management and Tailwind CSS for responsive styling. Node.js handles backend API integration and data flow.",
        image: "/previews/pizza.svg",
        tags: &["React.js", "Tailwind CSS", "React-Router", "API Integration"],
        demo: "https://fast-react-pizza-v3.netlify.app/",
        repo: "https://github.com/priyanshtiwari001/fact-react-pizza",
    },
];

pub const ARTICLES: [Article; 2] = [
    Article {
        title: "The Ultimate React + TypeScript Cheatsheet: A Practical Guide for Every Developer",
        excerpt: "Whether you're just starting with TypeScript in React or need a quick refresher, this cheatsheet is your go-to guide to master the essentials.",
        date: "Jun 26, 2024",
        read_time: "3 min read",
        tags: &["Typescript", "React", "Tutorial"],
        link: "https://medium.com/@priyanshu108tiwari/the-ultimate-react-typescript-cheatsheet-a-practical-guide-for-every-developer-a2e3935c8f20",
    },
    Article {
        title: "React Interview Questions You Must Know as a Web Developer (2025 Edition) Part-1",
        excerpt: "Walk you through the top React interview questions and answers, starting from the basics and progressing to advanced topics. By the end, you'll have a solid understanding of what interviewers are looking for.",
        date: "Nov 28, 2024",
        read_time: "6 min read",
        tags: &["React", "Interviews", "Questions"],
        link: "https://medium.com/@priyanshu108tiwari/react-interview-questions-you-must-know-as-a-web-developer-2025-edition-part-1-73edcc1d227d",
    },
];

pub const EXPERIENCE: [ExperienceEntry; 2] = [
    ExperienceEntry {
        company: "HCL Technologies",
        role: "Frontend Software Engineer",
        period: "2022 - Present",
        description: "Worked on large-scale enterprise applications using React.js, Next.js, and TypeScript. Built microfrontend modules, optimized UI performance, integrated REST APIs, and contributed to production-ready dashboards.",
    },
    ExperienceEntry {
        company: "Independent Learning & Practice",
        role: "Self-Directed Learner",
        period: "Always",
        description: "Built real-world projects to deepen skills in full-stack development using React, Node.js, MongoDB, Redux Toolkit, and Tailwind CSS. Focused on writing clean, maintainable code and improving user experience.",
    },
];

pub const SOCIALS: [SocialLink; 3] = [
    SocialLink {
        icon: Glyph::GitHub,
        label: "GitHub",
        href: "https://github.com/priyanshtiwari001",
    },
    SocialLink {
        icon: Glyph::LinkedIn,
        label: "LinkedIn",
        href: "https://linkedin.com/in/priyanshtiwari001",
    },
    SocialLink {
        icon: Glyph::Mail,
        label: "Email",
        href: CONTACT_EMAIL,
    },
];

pub const TECH_AREAS: [TechArea; 4] = [
    TechArea {
        icon: Glyph::Code,
        name: "Frontend",
    },
    TechArea {
        icon: Glyph::Database,
        name: "Backend",
    },
    TechArea {
        icon: Glyph::Palette,
        name: "Design",
    },
    TechArea {
        icon: Glyph::Globe,
        name: "Full-Stack",
    },
];

pub fn index_label(index: usize) -> String {
    format!("{:02}", index + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_project_is_the_expense_tracker() {
        let project = &PROJECTS[0];
        assert_eq!(project.title, "Expense tracker");
        assert_eq!(project.year, "2025");
        assert_eq!(
            project.tags,
            &["React.js", "Redis", "Node.js", "Chart.js"][..]
        );
        assert_eq!(index_label(0), "01");
    }

    #[test]
    fn index_labels_are_two_digit_and_one_based() {
        assert_eq!(index_label(0), "01");
        assert_eq!(index_label(3), "04");
        assert_eq!(index_label(9), "10");
        assert_eq!(index_label(PROJECTS.len() - 1), "04");
    }

    #[test]
    fn every_project_card_has_tags_and_links() {
        for project in PROJECTS.iter() {
            assert!(!project.tags.is_empty());
            assert!(project.demo.starts_with("https://"));
            assert!(project.repo.starts_with("https://"));
            assert!(project.image.starts_with("/previews/"));
        }
    }

    #[test]
    fn outbound_targets_use_explicit_schemes() {
        for article in ARTICLES.iter() {
            assert!(article.link.starts_with("https://"));
            assert!(!article.tags.is_empty());
        }
        for social in SOCIALS.iter() {
            assert!(social.href.starts_with("https://") || social.href.starts_with("mailto:"));
        }
        assert!(ARTICLES_HUB.starts_with("https://"));
        assert!(CONTACT_EMAIL.starts_with("mailto:"));
    }

    #[test]
    fn records_are_render_ready() {
        assert_eq!(SITE_OWNER, "Priyanshu Tiwari");

        for project in PROJECTS.iter() {
            assert!(!project.title.is_empty());
            assert!(!project.year.is_empty());
            assert!(!project.description.is_empty());
        }

        for article in ARTICLES.iter() {
            assert!(!article.title.is_empty());
            assert!(!article.excerpt.is_empty());
            assert!(!article.date.is_empty());
            assert!(!article.read_time.is_empty());
        }

        for entry in EXPERIENCE.iter() {
            assert!(!entry.company.is_empty());
            assert!(!entry.role.is_empty());
            assert!(!entry.period.is_empty());
            assert!(!entry.description.is_empty());
        }

        for social in SOCIALS.iter() {
            assert!(!social.label.is_empty());
        }
        for area in TECH_AREAS.iter() {
            assert!(!area.name.is_empty());
        }

        assert!(matches!(SOCIALS[0].icon, Glyph::GitHub));
        assert!(matches!(TECH_AREAS[0].icon, Glyph::Code));
    }
}
