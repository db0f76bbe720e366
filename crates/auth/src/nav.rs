//! Role-gated navigation model.
//!
//! Computes which navigation entries a session may *see*. This is purely a
//! presentational gate: it controls what is rendered, never what is
//! permitted. Enforcement stays with the backend, and a hostile client can
//! always request a page it was not shown a link to.

use serde::Serialize;

use crate::Role;

/// A single navigation link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavEntry {
    pub label: &'static str,
    pub href: &'static str,
}

/// An ordered group of links, optionally titled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavSection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<&'static str>,
    pub entries: Vec<NavEntry>,
}

struct GatedEntry {
    label: &'static str,
    href: &'static str,
    min_role: Role,
}

const fn entry(label: &'static str, href: &'static str, min_role: Role) -> GatedEntry {
    GatedEntry { label, href, min_role }
}

const SECTIONS: [(Option<&'static str>, &'static [GatedEntry]); 4] = [
    (None, &[entry("Dashboard", "/dashboard", Role::Staff)]),
    (
        Some("Inventory"),
        &[
            entry("Stocks", "/stocks", Role::Staff),
            entry("Suppliers", "/suppliers", Role::Staff),
            entry("Purchases", "/purchases", Role::Staff),
        ],
    ),
    (
        Some("Operations"),
        &[
            entry("Usage", "/usage", Role::Staff),
            entry("Expenses", "/expenses", Role::Manager),
            entry("Reports", "/reports/monthly", Role::Manager),
        ],
    ),
    (Some("Management"), &[entry("Users", "/users", Role::Admin)]),
];

/// Compute the navigation sections visible to `role`, in render order.
///
/// A missing or unknown role gates as the lowest tier: the base sections
/// still render (display-only fail-open), elevated ones never do. Sections
/// whose entries are all gated away are dropped entirely.
pub fn navigation(role: Option<Role>) -> Vec<NavSection> {
    let tier = role.unwrap_or(Role::Staff);

    SECTIONS
        .into_iter()
        .filter_map(|(title, entries)| {
            let visible: Vec<NavEntry> = entries
                .iter()
                .filter(|e| tier.at_least(e.min_role))
                .map(|e| NavEntry { label: e.label, href: e.href })
                .collect();
            (!visible.is_empty()).then_some(NavSection { title, entries: visible })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(sections: &[NavSection]) -> Vec<&'static str> {
        sections.iter().flat_map(|s| s.entries.iter().map(|e| e.label)).collect()
    }

    #[test]
    fn staff_sees_base_entries_only() {
        let visible = labels(&navigation(Some(Role::Staff)));
        assert_eq!(visible, vec!["Dashboard", "Stocks", "Suppliers", "Purchases", "Usage"]);
    }

    #[test]
    fn manager_gains_expenses_and_reports_but_not_users() {
        let visible = labels(&navigation(Some(Role::Manager)));
        assert!(visible.contains(&"Expenses"));
        assert!(visible.contains(&"Reports"));
        assert!(!visible.contains(&"Users"));
    }

    #[test]
    fn admin_sees_everything() {
        let visible = labels(&navigation(Some(Role::Admin)));
        assert_eq!(
            visible,
            vec![
                "Dashboard",
                "Stocks",
                "Suppliers",
                "Purchases",
                "Usage",
                "Expenses",
                "Reports",
                "Users"
            ]
        );
    }

    #[test]
    fn no_role_gates_as_lowest_tier() {
        assert_eq!(navigation(None), navigation(Some(Role::Staff)));
    }

    #[test]
    fn empty_sections_are_dropped() {
        let sections = navigation(Some(Role::Staff));
        assert!(sections.iter().all(|s| !s.entries.is_empty()));
        assert!(!sections.iter().any(|s| s.title == Some("Management")));
    }

    #[test]
    fn sections_keep_render_order() {
        let sections = navigation(Some(Role::Admin));
        let titles: Vec<_> = sections.iter().map(|s| s.title).collect();
        assert_eq!(
            titles,
            vec![None, Some("Inventory"), Some("Operations"), Some("Management")]
        );
    }
}
