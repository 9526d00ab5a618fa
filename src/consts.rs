/// Article drafts are created here, relative to the working directory
pub(crate) const POSTS_DIR: &str = "content/posts";

/// Per-article prompt templates are copied here
pub(crate) const PROMPT_HISTORY_DIR: &str = ".prompt_history";

/// Standard date format used in front matter: "2025-01-15"
pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";
