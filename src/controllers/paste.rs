use tracing::{debug, warn};

use crate::error::ApiError;
use crate::types::api::{non_empty, NewPaste};
use crate::types::Paste;
use crate::App;

/// Parse a paste id as it appears in a request path.
pub fn parse_id(text: &str) -> crate::ApiResult<i64> {
    Ok(text.parse()?)
}

pub async fn create(app: &App, paste: NewPaste) -> crate::ApiResult<i64> {
    let title = non_empty(paste.title);
    let content = non_empty(paste.content);
    let limits = &app.config.limits;

    if let (Some(max), Some(title)) = (limits.max_title_length, &title) {
        if title.chars().count() > max {
            warn!("rejecting paste: title longer than {max} characters");
            return Err(ApiError::TitleTooLong { max });
        }
    }
    if let (Some(max), Some(content)) = (limits.max_content_length, &content) {
        if content.chars().count() > max {
            warn!("rejecting paste: content longer than {max} characters");
            return Err(ApiError::ContentTooLong { max });
        }
    }

    Ok(app.store.create(title, content).await)
}

pub async fn get(app: &App, id: &str) -> crate::ApiResult<Paste> {
    let id = parse_id(id)?;
    let paste = app.store.get_by_index(id).await;
    if paste.is_not_found() {
        debug!("no paste with id {id}");
    }
    Ok(paste)
}

pub async fn get_property(app: &App, id: &str, property: &str) -> crate::ApiResult<String> {
    let id = parse_id(id)?;
    app.store.get_property(id, property).await
}

pub async fn search(app: &App, query: &str) -> Vec<Paste> {
    app.store.search(query).await
}

pub async fn list_all(app: &App) -> Vec<Paste> {
    app.store.list_all().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn app_with_limits(title: Option<usize>, content: Option<usize>) -> App {
        let mut config = Config::default();
        config.limits.max_title_length = title;
        config.limits.max_content_length = content;
        App::new(config)
    }

    fn new_paste(title: &str, content: &str) -> NewPaste {
        NewPaste {
            title: Some(title.to_owned()),
            content: Some(content.to_owned()),
        }
    }

    #[test]
    fn ids_must_be_integers() {
        assert_eq!(parse_id("42").unwrap(), 42);
        assert_eq!(parse_id("-1").unwrap(), -1);
        for bad in ["", "abc", "1.5", "99999999999999999999"] {
            assert!(matches!(parse_id(bad), Err(ApiError::InvalidId { .. })));
        }
    }

    #[tokio::test]
    async fn no_limits_by_default() {
        let app = App::new(Config::default());
        let long = "x".repeat(100_000);
        assert_eq!(create(&app, new_paste(&long, &long)).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn limits_count_characters() {
        let app = app_with_limits(Some(3), Some(5));

        assert_eq!(create(&app, new_paste("äöü", "ééééé")).await.unwrap(), 0);
        assert!(matches!(
            create(&app, new_paste("abcd", "")).await,
            Err(ApiError::TitleTooLong { max: 3 })
        ));
        assert!(matches!(
            create(&app, new_paste("", "abcdef")).await,
            Err(ApiError::ContentTooLong { max: 5 })
        ));

        // rejected pastes do not take an id
        assert_eq!(create(&app, NewPaste::default()).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn lookups_parse_ids() {
        let app = App::new(Config::default());
        create(&app, new_paste("A", "xyz")).await.unwrap();

        assert_eq!(get(&app, "0").await.unwrap().title, "A");
        assert!(get(&app, "7").await.unwrap().is_not_found());
        assert!(matches!(
            get(&app, "zero").await,
            Err(ApiError::InvalidId { .. })
        ));

        assert_eq!(get_property(&app, "0", "content").await.unwrap(), "xyz");
        assert!(matches!(
            get_property(&app, "7", "content").await,
            Err(ApiError::NotFound)
        ));
        assert!(matches!(
            get_property(&app, "x", "content").await,
            Err(ApiError::InvalidId { .. })
        ));
    }
}
