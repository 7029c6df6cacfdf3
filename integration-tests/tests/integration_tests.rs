use common::{
    error::AppError,
    storage::{
        kv::{KeyValueStore, UiStateStore, UI_STATE_FILE},
        types::panel_toggle::{PanelToggle, LEFT_SIDEBAR_KEY},
    },
    utils::config::AppConfig,
};
use futures::stream;
use listing::{
    paginate,
    pagination::total_pages,
    post::Post,
    search,
    transcript::{Conversation, MessageRole},
    Listing, PageLink, Pagination, Paginator,
};

use test_utils::*;

/// End-to-end scenarios across paging, filtering and persisted UI state.

#[test]
fn test_twenty_three_items_in_pages_of_five() {
    let items: Vec<u32> = (1..=23).collect();

    let (first, meta) = paginate(&items, 5, 1).expect("valid page size");
    assert_eq!(meta.total_pages, 5);
    assert_eq!(first, &[1, 2, 3, 4, 5]);
    assert_eq!(meta.start_item, 1);
    assert_eq!(meta.end_item, 5);

    let (last, meta) = paginate(&items, 5, 5).expect("valid page size");
    assert_eq!(last, &[21, 22, 23]);
    assert_eq!(meta.start_item, 21);
    assert_eq!(meta.end_item, 23);
    assert!(!meta.has_next);
}

#[test]
fn test_empty_collection() {
    let items: Vec<u32> = Vec::new();
    let mut paginator = Paginator::new(10).expect("valid page size");

    let (page, meta) = paginator.page(&items);
    assert_eq!(meta.total_pages, 0);
    assert!(page.is_empty());
    assert!(meta.is_empty);

    paginator.go_to_page(5, items.len());
    assert_eq!(paginator.current_page(), 1);
}

#[test]
fn test_accent_insensitive_name_search() {
    let people = vec![person("Ana López"), person("Carlos")];

    let found = search(&people, "lopez", &[person_name]);
    assert_eq!(found, vec![&people[0]]);

    let cafe = vec![person("Café"), person("Bar")];
    assert_eq!(
        search(&cafe, "café", &[person_name]),
        search(&cafe, "cafe", &[person_name])
    );
}

#[test]
fn test_far_page_request_is_clamped() {
    let items: Vec<u32> = (1..=9).collect();
    let mut paginator = Paginator::new(3).expect("valid page size");

    paginator.go_to_page(999, items.len());
    assert_eq!(paginator.current_page(), 3);
}

#[test]
fn test_resize_from_page_four() {
    let items: Vec<u32> = (1..=15).collect();
    let mut paginator = Paginator::new(3).expect("valid page size");
    paginator.go_to_page(4, items.len());
    assert_eq!(paginator.pagination(items.len()).total_pages, 5);

    paginator.set_page_size(10).expect("valid page size");
    let meta = paginator.pagination(items.len());
    assert_eq!(meta.current_page, 1);
    assert_eq!(meta.page_size, 10);
    assert_eq!(meta.total_pages, 2);
}

#[test]
fn test_zero_page_size_fails_fast() {
    let items = [1, 2, 3];
    assert!(matches!(
        paginate(&items, 0, 1),
        Err(AppError::InvalidArgument(_))
    ));
    assert!(matches!(
        total_pages(items.len(), 0),
        Err(AppError::InvalidArgument(_))
    ));
    assert!(matches!(
        Pagination::new(1, 0, items.len()),
        Err(AppError::InvalidArgument(_))
    ));
    assert!(matches!(
        Listing::new(numbered_posts(3), Post::search_fields(), 0),
        Err(AppError::InvalidArgument(_))
    ));
}

#[test]
fn test_pages_reassemble_filtered_feed() {
    let posts = numbered_posts(17);
    let fields = Post::search_fields();
    let filtered = search(&posts, "matematicas", &fields);
    assert_eq!(filtered.len(), 8);

    let pages = total_pages(filtered.len(), 3).expect("valid page size");
    let rebuilt: Vec<&Post> = (1..=pages)
        .flat_map(|page| {
            paginate(&filtered, 3, page)
                .expect("valid page size")
                .0
                .to_vec()
        })
        .collect();
    assert_eq!(post_ids(&rebuilt), post_ids(&filtered));
}

#[test]
fn test_feed_filter_then_paginate() {
    let mut feed =
        Listing::new(numbered_posts(20), Post::search_fields(), 3).expect("valid page size");
    feed.go_to_last();
    assert_eq!(feed.current_page(), 7);

    feed.search("TECNOLOGÍA");
    assert_eq!(feed.current_page(), 1);
    assert_eq!(feed.filtered_len(), 10);

    let (page, meta) = feed.page();
    assert_eq!(post_ids(&page), ["1", "3", "5"]);
    assert_eq!(meta.total_pages, 4);
    assert_eq!(meta.to_string(), "Showing 1 to 3 of 10 results (Page 1 of 4)");
    assert_eq!(
        feed.page_links(5),
        vec![
            PageLink::Page(1),
            PageLink::Page(2),
            PageLink::Page(3),
            PageLink::Page(4)
        ]
    );

    feed.go_to_last();
    let (page, meta) = feed.page();
    assert_eq!(post_ids(&page), ["19"]);
    assert!(meta.is_last_page);
    assert!(!meta.has_next);
}

#[tokio::test]
async fn test_sidebar_state_survives_restart() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = AppConfig {
        data_dir: dir.path().to_string_lossy().into_owned(),
        ..AppConfig::default()
    };

    {
        let store = UiStateStore::new(&config).await.expect("open store");
        let mut left = PanelToggle::load(&store, LEFT_SIDEBAR_KEY)
            .await
            .expect("load");
        assert!(!left.is_collapsed());
        left.toggle(&store).await.expect("toggle");
    }

    let store = UiStateStore::new(&config).await.expect("open store");
    assert_eq!(
        store.load(LEFT_SIDEBAR_KEY).await.expect("load").as_deref(),
        Some("true")
    );
    let left = PanelToggle::load(&store, LEFT_SIDEBAR_KEY)
        .await
        .expect("load");
    assert!(left.is_collapsed());
}

#[tokio::test]
async fn test_torn_sidebar_state_does_not_block_startup() {
    let dir = tempfile::tempdir().expect("tempdir");
    std::fs::write(
        dir.path().join(UI_STATE_FILE),
        r#"{"leftSidebarState": "tr"#,
    )
    .expect("write document");
    let config = AppConfig {
        data_dir: dir.path().to_string_lossy().into_owned(),
        ..AppConfig::default()
    };

    let store = UiStateStore::new(&config).await.expect("open store");
    let mut left = PanelToggle::load(&store, LEFT_SIDEBAR_KEY)
        .await
        .expect("torn document reads as expanded");
    assert!(!left.is_collapsed());

    left.toggle(&store).await.expect("toggle");
    let reopened = UiStateStore::new(&config).await.expect("open store");
    let left = PanelToggle::load(&reopened, LEFT_SIDEBAR_KEY)
        .await
        .expect("load");
    assert!(left.is_collapsed());
}

#[tokio::test]
async fn test_streamed_reply_lands_in_history() {
    let mut conversation = Conversation::new();
    conversation.push_user("¿Qué es una red neuronal?");

    let chunks = vec![
        Ok::<_, String>("Una red ".to_string()),
        Ok("de neuronas ".to_string()),
        Ok("artificiales.".to_string()),
    ];
    let reply = conversation
        .stream_reply(stream::iter(chunks))
        .await
        .expect("reply");

    assert_eq!(reply.role, MessageRole::Assistant);
    assert_eq!(reply.content, "Una red de neuronas artificiales.");
    assert_eq!(conversation.messages().len(), 2);

    let serialized = serde_json::to_value(&conversation).expect("serialize");
    assert_eq!(serialized["messages"][1]["role"], "Assistant");
}
