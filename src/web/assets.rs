//! Static asset constants (HTML, CSS, and JavaScript).
//!
//! The whole front end is compiled into the binary so a deployment is a
//! single executable plus its data directory.

/// Public single-page shell.
pub const INDEX_HTML: &str = include_str!("assets/index.html");

/// Stylesheet for the public page.
pub const SITE_CSS: &str = include_str!("assets/site.css");

/// Renderer for the public page.
pub const SITE_JS: &str = include_str!("assets/site.js");

/// Admin dashboard.
pub const ADMIN_HTML: &str = include_str!("assets/admin.html");

/// Shared helpers for the admin pages.
pub const ADMIN_JS: &str = include_str!("assets/admin.js");

/// Content editor.
pub const ADMIN_CONTENT_HTML: &str = include_str!("assets/admin_content.html");

/// Project list.
pub const ADMIN_PROJECTS_HTML: &str = include_str!("assets/admin_projects.html");

/// Project create/edit form.
pub const ADMIN_PROJECT_FORM_HTML: &str = include_str!("assets/admin_project_form.html");

/// Theme editor.
pub const ADMIN_THEME_HTML: &str = include_str!("assets/admin_theme.html");

/// Navbar editor (saves to browser storage only).
pub const ADMIN_NAVBAR_HTML: &str = include_str!("assets/admin_navbar.html");
