//! Directory creation and file writes for a new article.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::consts::{POSTS_DIR, PROMPT_HISTORY_DIR};
use crate::error::AppError;
use crate::templates;

/// Paths written by a successful scaffolding run
pub(crate) struct CreatedArticle {
    pub(crate) post_path: PathBuf,
    pub(crate) prompt_path: PathBuf,
}

/// Create the article draft and its prompt-history file under `root`.
///
/// Missing parent directories are created; existing files at the target
/// paths are overwritten. The draft is written first, so a failed
/// prompt-history write leaves the draft in place.
pub(crate) fn create_article(
    root: &Path,
    stem: &str,
    date: NaiveDate,
) -> Result<CreatedArticle, AppError> {
    let posts_dir = root.join(POSTS_DIR);
    fs::create_dir_all(&posts_dir).map_err(|source| AppError::CreateDir {
        path: posts_dir.clone(),
        source,
    })?;
    let post_path = posts_dir.join(format!("{stem}.md"));

    let prompt_dir = root.join(PROMPT_HISTORY_DIR);
    fs::create_dir_all(&prompt_dir).map_err(|source| AppError::CreateDir {
        path: prompt_dir.clone(),
        source,
    })?;
    let prompt_path = prompt_dir.join(format!("{stem}.md"));

    fs::write(&post_path, templates::article_draft(stem, date)).map_err(|source| {
        AppError::WriteFile {
            path: post_path.clone(),
            source,
        }
    })?;
    fs::write(&prompt_path, templates::PROMPT_HISTORY).map_err(|source| {
        AppError::WriteFile {
            path: prompt_path.clone(),
            source,
        }
    })?;

    Ok(CreatedArticle {
        post_path,
        prompt_path,
    })
}
