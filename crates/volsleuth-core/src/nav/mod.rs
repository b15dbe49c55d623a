/// Navigation helpers — path joining and the breadcrumb stack.
pub mod breadcrumb;
pub mod path;

pub use breadcrumb::{BreadcrumbStack, DEFAULT_ROOT};
pub use path::{build_path, MAX_PATH_LEN};
