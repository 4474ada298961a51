//! Screen addressing.
//!
//! Routes use web-style paths so the log panel and `--route` read the same
//! way the portfolio's URLs do.

use std::fmt;

use crate::data::project_by_id;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Home,
    /// The home screen scrolled to its about section
    About,
    Projects,
    ProjectDetail(String),
    Contact,
    NotFound(String),
}

impl Route {
    /// Resolve a path.
    ///
    /// Project ids that don't exist redirect to the archive instead of
    /// producing a 404.
    pub fn parse(path: &str) -> Self {
        let path = path.trim();
        match path {
            "" | "/" => return Route::Home,
            "/#about" | "#about" | "/about" => return Route::About,
            "/projects" | "/projects/" => return Route::Projects,
            "/contact" | "/contact/" => return Route::Contact,
            _ => {}
        }

        if let Some(id) = path.strip_prefix("/projects/") {
            let id = id.trim_end_matches('/');
            if !id.contains('/') {
                return match project_by_id(id) {
                    Some(project) => Route::ProjectDetail(project.id.to_string()),
                    None => Route::Projects,
                };
            }
        }

        Route::NotFound(path.to_string())
    }

    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::About => "/#about".to_string(),
            Route::Projects => "/projects".to_string(),
            Route::ProjectDetail(id) => format!("/projects/{id}"),
            Route::Contact => "/contact".to_string(),
            Route::NotFound(path) => path.clone(),
        }
    }

    /// [`Route::path`] without any `#fragment`
    pub fn pathname(&self) -> String {
        let path = self.path();
        match path.split_once('#') {
            Some((pathname, _)) if !pathname.is_empty() => pathname.to_string(),
            Some(_) => "/".to_string(),
            None => path,
        }
    }

    /// Index of the nav bar entry this route lives under
    pub fn nav_index(&self) -> Option<usize> {
        match self {
            Route::Home => Some(0),
            Route::Projects | Route::ProjectDetail(_) => Some(1),
            Route::About => Some(2),
            Route::Contact => Some(3),
            Route::NotFound(_) => None,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}
