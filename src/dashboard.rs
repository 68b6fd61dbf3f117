pub mod layout;
pub mod nav;

pub use layout::{BreadcrumbEntry, CardLayout, Columns, Grid, GridCell};
pub use nav::{breadcrumb_path, DiagnosticSink, Navigator};
