/// Breadcrumb stack — the trail from a volume root to the current directory.
///
/// The stack is bounded: pushing past `max_depth` fails and leaves the trail
/// untouched. The root element is never popped.
use crate::config::DEFAULT_NAV_DEPTH;
use crate::error::{EngineError, Result};

/// Returned by [`BreadcrumbStack::current`] before `init` has been called.
pub const DEFAULT_ROOT: &str = "ux0:/";

#[derive(Debug, Clone)]
pub struct BreadcrumbStack {
    paths: Vec<String>,
    max_depth: usize,
}

impl Default for BreadcrumbStack {
    fn default() -> Self {
        Self::new(DEFAULT_NAV_DEPTH)
    }
}

impl BreadcrumbStack {
    /// Create an empty stack holding at most `max_depth` paths (minimum 1).
    pub fn new(max_depth: usize) -> Self {
        let max_depth = max_depth.max(1);
        Self {
            paths: Vec::with_capacity(max_depth),
            max_depth,
        }
    }

    /// Reset to a single element: the volume root.
    pub fn init(&mut self, root_path: impl Into<String>) {
        self.paths.clear();
        self.paths.push(root_path.into());
    }

    /// Enter `path`, making it the current directory.
    pub fn push(&mut self, path: impl Into<String>) -> Result<()> {
        if self.paths.len() >= self.max_depth {
            return Err(EngineError::NavigationFull {
                max_depth: self.max_depth,
            });
        }
        self.paths.push(path.into());
        Ok(())
    }

    /// Leave the current directory and return it.
    pub fn pop(&mut self) -> Result<String> {
        if self.paths.len() <= 1 {
            return Err(EngineError::AtRoot);
        }
        self.paths.pop().ok_or(EngineError::AtRoot)
    }

    /// The current directory.
    pub fn current(&self) -> &str {
        self.paths.last().map(String::as_str).unwrap_or(DEFAULT_ROOT)
    }

    /// The volume root, if initialised.
    pub fn root(&self) -> Option<&str> {
        self.paths.first().map(String::as_str)
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.paths.len()
    }

    #[inline]
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Trail from root to current.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.paths.iter().map(String::as_str)
    }
}
