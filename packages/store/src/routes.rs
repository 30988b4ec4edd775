//! Navigation metadata for the sidebar and breadcrumb.
//!
//! [`home_routes`] builds the full sidebar tree for the current path, marks
//! the active entries, and drops everything the given role may not see.
//! [`breadcrumb`] resolves the current path against the same tree.

/// Icon shown next to a top-level route. The UI maps these to glyphs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavIcon {
    Dashboard,
    Users,
    Approvals,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SubItem {
    pub label: &'static str,
    pub href: &'static str,
    pub active: bool,
    pub allowed_roles: &'static [u8],
}

#[derive(Clone, Debug, PartialEq)]
pub struct RouteItem {
    pub label: &'static str,
    pub icon: Option<NavIcon>,
    pub href: &'static str,
    pub active: bool,
    pub allowed_roles: &'static [u8],
    pub sub_items: Vec<SubItem>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RouteGroup {
    pub label: &'static str,
    pub routes: Vec<RouteItem>,
}

const ALL_ROLES: &[u8] = &[1, 3, 4, 5];

/// Sidebar tree for `pathname`, filtered to what `role` may see.
///
/// Groups left without routes are dropped.
pub fn home_routes(pathname: &str, role: u8) -> Vec<RouteGroup> {
    let path = clean_path(pathname);
    let all_groups = vec![
        RouteGroup {
            label: "Main",
            routes: vec![
                RouteItem {
                    label: "Dashboard",
                    icon: Some(NavIcon::Dashboard),
                    href: "/dashboard",
                    active: path == "/dashboard",
                    allowed_roles: ALL_ROLES,
                    sub_items: Vec::new(),
                },
                RouteItem {
                    label: "Users List",
                    icon: Some(NavIcon::Users),
                    href: "/users",
                    active: path == "/users" || path.starts_with("/users/"),
                    allowed_roles: ALL_ROLES,
                    sub_items: vec![
                        SubItem {
                            label: "All Users",
                            href: "/users",
                            active: path == "/users",
                            allowed_roles: ALL_ROLES,
                        },
                        SubItem {
                            label: "Managers",
                            href: "/users/managers",
                            active: path == "/users/managers",
                            allowed_roles: ALL_ROLES,
                        },
                        SubItem {
                            label: "Executives",
                            href: "/users/executives",
                            active: path == "/users/executives",
                            allowed_roles: ALL_ROLES,
                        },
                    ],
                },
            ],
        },
        RouteGroup {
            label: "For Approvals",
            routes: vec![RouteItem {
                label: "Users Registrations",
                icon: Some(NavIcon::Approvals),
                href: "/users-registrations",
                active: path.starts_with("/users-registrations"),
                allowed_roles: ALL_ROLES,
                sub_items: Vec::new(),
            }],
        },
    ];

    filter_for_role(all_groups, role)
}

fn filter_for_role(groups: Vec<RouteGroup>, role: u8) -> Vec<RouteGroup> {
    groups
        .into_iter()
        .map(|group| RouteGroup {
            label: group.label,
            routes: group
                .routes
                .into_iter()
                .filter(|route| route.allowed_roles.contains(&role))
                .map(|mut route| {
                    route.sub_items.retain(|sub| sub.allowed_roles.contains(&role));
                    route
                })
                .collect(),
        })
        .filter(|group| !group.routes.is_empty())
        .collect()
}

/// What the header shows for the current page.
#[derive(Clone, Debug, PartialEq)]
pub enum Breadcrumb {
    /// A top-level route: just its label.
    Page(&'static str),
    /// A sub-route: parent label, then the sub label.
    Nested {
        parent: &'static str,
        child: &'static str,
    },
    /// No route matched.
    Home,
}

/// Resolve `pathname` to a breadcrumb. Query strings are ignored.
///
/// A top-level match wins over a sub-item with the same href, so `/users`
/// reads "Users List" rather than "Users List › All Users".
pub fn breadcrumb(pathname: &str, role: u8) -> Breadcrumb {
    let path = clean_path(pathname);
    for group in home_routes(pathname, role) {
        for item in &group.routes {
            if item.href == path {
                return Breadcrumb::Page(item.label);
            }
            if let Some(sub) = item.sub_items.iter().find(|s| s.href == path) {
                return Breadcrumb::Nested {
                    parent: item.label,
                    child: sub.label,
                };
            }
        }
    }
    Breadcrumb::Home
}

fn clean_path(pathname: &str) -> &str {
    let path = pathname.split(['?', '#']).next().unwrap_or_default();
    if path.len() > 1 {
        path.trim_end_matches('/')
    } else {
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_flags() {
        let groups = home_routes("/users/managers", 1);
        let users = &groups[0].routes[1];
        assert!(users.active);
        assert!(!groups[0].routes[0].active);
        let active_subs: Vec<_> = users.sub_items.iter().filter(|s| s.active).map(|s| s.label).collect();
        assert_eq!(active_subs, vec!["Managers"]);
    }

    #[test]
    fn test_registrations_prefix_is_active() {
        let groups = home_routes("/users-registrations/pending", 3);
        assert!(groups[1].routes[0].active);
        assert!(!groups[0].routes[1].active);
    }

    #[test]
    fn test_unknown_role_sees_nothing() {
        assert!(home_routes("/users", 2).is_empty());
        assert!(home_routes("/users", 0).is_empty());
    }

    #[test]
    fn test_empty_groups_are_dropped() {
        let groups = vec![
            RouteGroup {
                label: "Restricted",
                routes: vec![RouteItem {
                    label: "Payroll",
                    icon: None,
                    href: "/payroll",
                    active: false,
                    allowed_roles: &[3],
                    sub_items: Vec::new(),
                }],
            },
            RouteGroup {
                label: "Open",
                routes: vec![RouteItem {
                    label: "Dashboard",
                    icon: None,
                    href: "/dashboard",
                    active: false,
                    allowed_roles: &[1, 3],
                    sub_items: vec![SubItem {
                        label: "Admin only",
                        href: "/dashboard/admin",
                        active: false,
                        allowed_roles: &[1],
                    }],
                }],
            },
        ];
        let filtered = filter_for_role(groups, 3);
        assert_eq!(filtered.len(), 2);

        let groups = filter_for_role(home_routes("/", 1), 1);
        assert_eq!(groups.len(), 2);

        let filtered = filter_for_role(
            vec![RouteGroup {
                label: "Restricted",
                routes: vec![RouteItem {
                    label: "Payroll",
                    icon: None,
                    href: "/payroll",
                    active: false,
                    allowed_roles: &[3],
                    sub_items: vec![SubItem {
                        label: "Runs",
                        href: "/payroll/runs",
                        active: false,
                        allowed_roles: &[1],
                    }],
                }],
            }],
            3,
        );
        assert_eq!(filtered.len(), 1);
        assert!(filtered[0].routes[0].sub_items.is_empty());
        assert!(filter_for_role(filtered, 1).is_empty());
    }

    #[test]
    fn test_breadcrumb_resolution() {
        assert_eq!(breadcrumb("/users", 1), Breadcrumb::Page("Users List"));
        assert_eq!(breadcrumb("/dashboard?tab=2", 1), Breadcrumb::Page("Dashboard"));
        assert_eq!(
            breadcrumb("/users/executives", 1),
            Breadcrumb::Nested {
                parent: "Users List",
                child: "Executives"
            }
        );
        assert_eq!(breadcrumb("/users/executives/", 1), breadcrumb("/users/executives", 1));
        assert_eq!(breadcrumb("/nowhere", 1), Breadcrumb::Home);
        assert_eq!(breadcrumb("/users", 2), Breadcrumb::Home);
    }
}
