//! Askama templates for the HTML landing page.

use askama::Template;

/// A route shown on the landing page.
pub struct RouteView {
    pub path: &'static str,
    pub description: &'static str,
}

/// Routes advertised on the landing page, in display order.
pub const ROUTES: &[RouteView] = &[
    RouteView {
        path: "/api/v1.0/precipitation",
        description: "average daily precipitation over the last twelve months",
    },
    RouteView {
        path: "/api/v1.0/stations",
        description: "stations with measurements",
    },
    RouteView {
        path: "/api/v1.0/tobs",
        description: "last twelve months of temperatures at the busiest station",
    },
    RouteView {
        path: "/api/v1.0/start_date",
        description: "min, avg and max temperature from a date",
    },
    RouteView {
        path: "/api/v1.0/start_date/end_date",
        description: "min, avg and max temperature between two dates",
    },
];

/// Home page listing the available routes.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub routes: &'static [RouteView],
}

impl Default for IndexTemplate {
    fn default() -> Self {
        Self { routes: ROUTES }
    }
}
