//! The fixed, ordered list of page sections.
//!
//! Order matters: the scroll tracker scans it front to back and the first match wins.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Section {
    /// DOM anchor id; must match exactly one rendered element.
    pub id: &'static str,
    pub label: &'static str,
    /// Icon name understood by the stylesheet (`icon-<name>`).
    pub icon: &'static str,
}

pub const HOME: &str = "home";

pub const SECTIONS: &[Section] = &[
    Section { id: HOME, label: "Home", icon: "home" },
    Section { id: "about", label: "About", icon: "user" },
    Section { id: "experience", label: "Experience", icon: "briefcase" },
    Section { id: "projects", label: "Projects", icon: "code" },
    Section { id: "education", label: "Education", icon: "graduation-cap" },
    Section { id: "achievements", label: "Achievements", icon: "trophy" },
    Section { id: "contact", label: "Contact", icon: "message-square" },
];
