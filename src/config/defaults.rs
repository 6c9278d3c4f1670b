//! Built-in route table for the finance dashboard.
//!
//! Used whenever a config file does not declare `routes`.

use crate::config::schema::RouteConfig;

/// The dashboard's route declarations, in sidebar order.
pub fn dashboard_routes() -> Vec<RouteConfig> {
    vec![
        RouteConfig::new("/", "Dashboard", "home", "dashboard_page::index"),
        RouteConfig::new("/analytics", "Analytics", "bar-chart-2", "analytics_page::index"),
        RouteConfig::new("/organization", "Organization", "building", "organization_page::index"),
        RouteConfig::new("/projects", "Projects", "folder", "projects_page::index"),
        RouteConfig::new("/transactions", "Transactions", "wallet", "transactions_page::index"),
        RouteConfig::new("/invoices", "Invoices", "receipt", "invoices_page::index"),
        RouteConfig::new("/payments", "Payments", "credit-card", "payments_page::index"),
        RouteConfig::new("/members", "Members", "users", "members_page::index"),
        RouteConfig::new("/permissions", "Permissions", "shield", "permissions_page::index"),
        RouteConfig::new("/chat", "Chat", "message-square", "chat_page::index"),
        RouteConfig::new("/meetings", "Meetings", "video", "meetings_page::index"),
        RouteConfig::new("/settings", "Settings", "settings", "settings_page::index").with_children(vec![
            settings_tab("/account", "Account", "user", "settings_page::account_settings"),
            settings_tab("/security", "Security", "lock", "settings_page::security_settings"),
            settings_tab("/preferences", "Preferences", "sliders", "settings_page::preferences_settings"),
            settings_tab("/notifications", "Notifications", "bell", "settings_page::notifications_settings"),
            settings_tab("/privacy", "Privacy", "eye", "settings_page::privacy_settings"),
        ]),
        RouteConfig::new("/help", "Help", "help-circle", "help_page::index"),
        // Authentication pages
        RouteConfig::new("/login", "Login", "log-in", "login_page::index").public().hidden(),
        RouteConfig::new("/register", "Register", "user-plus", "register_page::index").public().hidden(),
        RouteConfig::new("/forgot-password", "Forgot Password", "key", "forgot_password_page::index")
            .public()
            .hidden(),
    ]
}

fn settings_tab(path: &str, title: &str, icon: &str, component: &str) -> RouteConfig {
    RouteConfig::new(path, title, icon, component)
        .with_parent("/settings")
        .hidden()
}
