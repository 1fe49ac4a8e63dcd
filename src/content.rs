//! Static copy for every section of the page.
//!
//! Records are defined once and never mutated. Card lists are rendered in
//! declaration order and each card's entrance is delayed by
//! [`stagger_delay`] so the grid cascades in.

use crate::config;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    Headset,
    Cloud,
    Server,
    Cpu,
    Database,
    BarChart,
    Globe,
    Shield,
    Zap,
    Code,
    LineChart,
    Award,
    MapPin,
    Mail,
    Phone,
    Linkedin,
    Twitter,
    Facebook,
    Instagram,
    ArrowRight,
    CheckCircle,
    Menu,
    Close,
    Send,
}

/// Colour family of a service, used for its gradients.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Red,
    Indigo,
    Teal,
    Amber,
    Rose,
}

impl Theme {
    pub fn gradient_class(self) -> &'static str {
        match self {
            Theme::Red => "gradient-red",
            Theme::Indigo => "gradient-indigo",
            Theme::Teal => "gradient-teal",
            Theme::Amber => "gradient-amber",
            Theme::Rose => "gradient-rose",
        }
    }
}

#[derive(Debug, PartialEq)]
pub struct ServiceEntry {
    pub title: &'static str,
    pub description: &'static str,
    pub detail: &'static str,
    pub features: &'static [&'static str],
    pub icon: Icon,
    pub theme: Theme,
}

#[derive(Debug, PartialEq)]
pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
    pub image: &'static str,
}

#[derive(Debug, PartialEq)]
pub struct NavLink {
    pub name: &'static str,
    pub anchor: &'static str,
}

#[derive(Debug, PartialEq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
    pub gradient: &'static str,
}

#[derive(Debug, PartialEq)]
pub struct Highlight {
    pub title: &'static str,
    pub text: &'static str,
}

#[derive(Debug, PartialEq)]
pub struct ContactLine {
    pub text: &'static str,
    pub href: Option<&'static str>,
}

#[derive(Debug, PartialEq)]
pub struct ContactChannel {
    pub title: &'static str,
    pub icon: Icon,
    pub lines: &'static [ContactLine],
}

#[derive(Debug, PartialEq)]
pub struct BusinessHours {
    pub days: &'static str,
    pub hours: &'static str,
}

#[derive(Debug, PartialEq)]
pub struct SocialLink {
    pub icon: Icon,
    pub label: &'static str,
    pub href: &'static str,
    pub gradient: &'static str,
}

/// Decorative icon drifting behind the hero copy.
#[derive(Debug, PartialEq)]
pub struct FloatingIcon {
    pub icon: Icon,
    pub class: &'static str,
    pub delay: &'static str,
}

pub const COMPANY: &str = "NepTech";
pub const LOGO: &str = "/assets/neptech-logo.png";
pub const FOUNDER_IMAGE: &str = "/assets/shashank-ray.png";

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { name: "Home", anchor: "#home" },
    NavLink { name: "Services", anchor: "#services" },
    NavLink { name: "About", anchor: "#about" },
    NavLink { name: "Team", anchor: "#team" },
    NavLink { name: "Contact", anchor: "#contact" },
];

/// Footer quick links. Same targets as the header, different order and labels.
pub const QUICK_LINKS: &[NavLink] = &[
    NavLink { name: "Home", anchor: "#home" },
    NavLink { name: "About Us", anchor: "#about" },
    NavLink { name: "Services", anchor: "#services" },
    NavLink { name: "Our Team", anchor: "#team" },
    NavLink { name: "Contact", anchor: "#contact" },
];

pub const SERVICES: &[ServiceEntry] = &[
    ServiceEntry {
        title: "Remote IT Support",
        description: "Get immediate assistance for all your IT issues with our 24/7 remote support team.",
        detail: "Our Remote IT Support service provides round-the-clock expert assistance for all your technology needs. Whether you're facing critical system failures or need help with everyday tech issues, our team of certified IT professionals is just a call away.",
        features: &[
            "24/7 helpdesk accessibility",
            "Rapid response times (average 15 minutes)",
            "Secure remote troubleshooting",
            "Multiple support channels (phone, email, chat)",
            "Regular system health checks",
            "Detailed resolution reports",
        ],
        icon: Icon::Headset,
        theme: Theme::Red,
    },
    ServiceEntry {
        title: "Cloud Services",
        description: "Securely store, access, and manage your data and applications in our optimized cloud environment.",
        detail: "NepTech Cloud Services offers enterprise-grade cloud solutions that are scalable, secure, and cost-effective. We help businesses migrate to the cloud, optimize their cloud infrastructure, and manage their cloud resources efficiently.",
        features: &[
            "Public, private, and hybrid cloud options",
            "Seamless migration from legacy systems",
            "Auto-scaling to match demand",
            "Built-in redundancy and disaster recovery",
            "Pay-as-you-go pricing model",
            "Comprehensive security protocols",
        ],
        icon: Icon::Cloud,
        theme: Theme::Indigo,
    },
    ServiceEntry {
        title: "IT Infrastructure",
        description: "Build a robust IT foundation with our custom infrastructure solutions designed for your business.",
        detail: "Our IT Infrastructure services help businesses establish a robust technical foundation that supports growth and innovation. We design, implement, and maintain the hardware, software, networks, and services required for your business operations.",
        features: &[
            "Custom network design and implementation",
            "Server configuration and management",
            "Storage solutions and optimization",
            "Enterprise hardware procurement",
            "Infrastructure security hardening",
            "Regular maintenance and updates",
        ],
        icon: Icon::Server,
        theme: Theme::Teal,
    },
    ServiceEntry {
        title: "Data Backup & Recovery",
        description: "Protect your business with automated backup systems and rapid recovery solutions.",
        detail: "Our Data Backup & Recovery solutions ensure your critical business information is protected against data loss. We implement automated, secure backup systems with multiple redundancies and provide rapid recovery options to minimize downtime.",
        features: &[
            "Automated multi-site backups",
            "Real-time data replication",
            "Point-in-time recovery options",
            "End-to-end encryption",
            "Regular backup verification",
            "Rapid recovery procedures",
        ],
        icon: Icon::Database,
        theme: Theme::Amber,
    },
    ServiceEntry {
        title: "IT Consultancy",
        description: "Strategic guidance to align your IT investments with your business objectives for maximum ROI.",
        detail: "NepTech's IT Consultancy services provide expert strategic guidance to help businesses make informed technology decisions. We analyze your current IT infrastructure, identify areas for improvement, and create roadmaps for technology implementation that aligns with your business goals.",
        features: &[
            "Comprehensive IT assessments",
            "Strategic technology roadmapping",
            "Project planning and management",
            "Vendor selection assistance",
            "Cost optimization strategies",
            "Technology trend analysis",
        ],
        icon: Icon::BarChart,
        theme: Theme::Rose,
    },
];

pub const TEAM: &[TeamMember] = &[
    TeamMember {
        name: "Shashank Ray",
        role: "Founder & CEO",
        image: FOUNDER_IMAGE,
    },
    TeamMember {
        name: "Jane Cooper",
        role: "CTO",
        image: "https://images.unsplash.com/photo-1494790108377-be9c29b29330?w=400&h=400&auto=format&fit=crop&q=80",
    },
    TeamMember {
        name: "Robert Fox",
        role: "Cloud Architect",
        image: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=400&h=400&auto=format&fit=crop&q=80",
    },
    TeamMember {
        name: "Esther Howard",
        role: "IT Security Specialist",
        image: "https://images.unsplash.com/photo-1573496359142-b8d87734a5a2?w=400&h=400&auto=format&fit=crop&q=80",
    },
];

pub const HERO_STATS: &[Stat] = &[
    Stat { value: "5+", label: "Years Experience", gradient: "gradient-blue" },
    Stat { value: "100+", label: "Clients Served", gradient: "gradient-purple" },
    Stat { value: "99.9%", label: "Uptime Guarantee", gradient: "gradient-green" },
];

pub const ABOUT_STATS: &[Stat] = &[
    Stat { value: "100%", label: "Client Satisfaction", gradient: "gradient-blue" },
    Stat { value: "24/7", label: "Technical Support", gradient: "gradient-purple" },
    Stat { value: "500+", label: "Projects Completed", gradient: "gradient-green" },
];

pub const HIGHLIGHTS: &[Highlight] = &[
    Highlight {
        title: "Cutting-Edge Technology",
        text: "We leverage the latest innovations to keep your business ahead of the curve.",
    },
    Highlight {
        title: "Personalized Approach",
        text: "Every business is unique, and our solutions are tailored to your specific needs.",
    },
    Highlight {
        title: "Dedicated Support",
        text: "Our team is always available to ensure your systems run smoothly.",
    },
];

pub const FLOATING_ICONS: &[FloatingIcon] = &[
    FloatingIcon { icon: Icon::Cloud, class: "float-a", delay: "0s" },
    FloatingIcon { icon: Icon::Server, class: "float-b", delay: "1.5s" },
    FloatingIcon { icon: Icon::Cpu, class: "float-c", delay: "0.5s" },
    FloatingIcon { icon: Icon::Database, class: "float-d", delay: "2s" },
    FloatingIcon { icon: Icon::Globe, class: "float-e", delay: "1s" },
    FloatingIcon { icon: Icon::Shield, class: "float-f", delay: "2.5s" },
    FloatingIcon { icon: Icon::Zap, class: "float-g", delay: "1.2s" },
];

/// Icons orbiting the founder portrait, with their depth in pixels.
pub const ORBIT_ICONS: &[(Icon, &str, u32)] = &[
    (Icon::Code, "orbit-a", 40),
    (Icon::LineChart, "orbit-b", 60),
    (Icon::Award, "orbit-c", 50),
    (Icon::BarChart, "orbit-d", 70),
];

pub const CONTACT_CHANNELS: &[ContactChannel] = &[
    ContactChannel {
        title: "Our Location",
        icon: Icon::MapPin,
        lines: &[
            ContactLine { text: "Jadibuti, Kathmandu", href: None },
            ContactLine { text: "Nepal, 44600", href: None },
        ],
    },
    ContactChannel {
        title: "Email Us",
        icon: Icon::Mail,
        lines: &[
            ContactLine { text: "info@neptech.com", href: Some("mailto:info@neptech.com") },
            ContactLine { text: "support@neptech.com", href: Some("mailto:support@neptech.com") },
        ],
    },
    ContactChannel {
        title: "Call Us",
        icon: Icon::Phone,
        lines: &[
            ContactLine { text: "+977-9844418804", href: Some("tel:+9779844418804") },
            ContactLine { text: "+1 (555) 987-6543", href: Some("tel:+15559876543") },
        ],
    },
];

pub const BUSINESS_HOURS: &[BusinessHours] = &[
    BusinessHours { days: "Monday - Friday:", hours: "9:00 AM - 6:00 PM" },
    BusinessHours { days: "Saturday:", hours: "10:00 AM - 4:00 PM" },
    BusinessHours { days: "Sunday:", hours: "Closed" },
];

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink { icon: Icon::Linkedin, label: "LinkedIn", href: "#", gradient: "glow-blue" },
    SocialLink { icon: Icon::Twitter, label: "Twitter", href: "#", gradient: "glow-sky" },
    SocialLink { icon: Icon::Facebook, label: "Facebook", href: "#", gradient: "glow-indigo" },
    SocialLink { icon: Icon::Instagram, label: "Instagram", href: "#", gradient: "glow-pink" },
];

/// Entrance delay for the card at `index` in a cascading grid.
pub fn stagger_delay(index: usize) -> u32 {
    index as u32 * config::STAGGER_STEP_MS
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn stagger_delay_grows_with_index() {
        let delays: Vec<u32> = (0..SERVICES.len()).map(stagger_delay).collect();
        assert_eq!(delays, vec![0, 150, 300, 450, 600]);
    }

    #[test]
    fn services_keep_declaration_order() {
        let titles: Vec<&str> = SERVICES.iter().map(|s| s.title).collect();
        assert_eq!(
            titles,
            vec![
                "Remote IT Support",
                "Cloud Services",
                "IT Infrastructure",
                "Data Backup & Recovery",
                "IT Consultancy",
            ]
        );
    }

    #[test]
    fn service_titles_are_unique_keys() {
        let titles: HashSet<&str> = SERVICES.iter().map(|s| s.title).collect();
        assert_eq!(titles.len(), SERVICES.len());
    }

    #[test]
    fn every_service_lists_features() {
        for service in SERVICES {
            assert_eq!(service.features.len(), 6, "{}", service.title);
        }
    }

    #[test]
    fn team_names_are_unique_keys() {
        let names: HashSet<&str> = TEAM.iter().map(|m| m.name).collect();
        assert_eq!(names.len(), TEAM.len());
        assert_eq!(TEAM[0].role, "Founder & CEO");
    }

    #[test]
    fn nav_links_target_page_sections() {
        let anchors: Vec<&str> = NAV_LINKS.iter().map(|l| l.anchor).collect();
        assert_eq!(anchors, vec!["#home", "#services", "#about", "#team", "#contact"]);

        let quick: HashSet<&str> = QUICK_LINKS.iter().map(|l| l.anchor).collect();
        let header: HashSet<&str> = anchors.into_iter().collect();
        assert_eq!(quick, header);
    }
}
