use common::{
    storage::{
        kv::UiStateStore,
        types::panel_toggle::{PanelToggle, LEFT_SIDEBAR_KEY, RIGHT_SIDEBAR_KEY},
    },
    utils::config::get_config,
};
use listing::{post::Post, Listing};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod sample_feed;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Set up tracing
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .try_init()
        .ok();

    // Get config
    let config = get_config()?;

    // Restore remembered sidebar state
    let store = UiStateStore::new(&config).await?;
    let left = PanelToggle::load(&store, LEFT_SIDEBAR_KEY).await?;
    let right = PanelToggle::load(&store, RIGHT_SIDEBAR_KEY).await?;
    info!(
        left_collapsed = left.is_collapsed(),
        right_collapsed = right.is_collapsed(),
        backend = ?store.backend_kind(),
        "Sidebar state restored"
    );

    let mut feed = Listing::new(
        sample_feed::sample_posts(),
        Post::search_fields(),
        config.page_size,
    )?;

    if let Some(query) = config.search_query.as_deref() {
        feed.search(query);
    }

    let (posts, pagination) = feed.page();
    info!(
        query = feed.query(),
        page = pagination.current_page,
        total_pages = pagination.total_pages,
        "{}",
        pagination
    );

    let rendered = serde_json::json!({
        "query": feed.query(),
        "pagination": pagination,
        "links": feed.page_links(config.max_visible_pages),
        "posts": posts,
    });
    println!("{}", serde_json::to_string_pretty(&rendered)?);

    Ok(())
}
