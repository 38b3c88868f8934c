use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use showcase_client::config::{API_URL_ENV, DEFAULT_API_URL, TIMEOUT_ENV};
use showcase_client::models::{Todo, User};
use showcase_client::view::{PostDetail, TodoDetail};
use showcase_client::{
    AlbumBrowser, ClientConfig, HttpClient, LoadState, PostList, ShowcaseClient, TodoFilter,
    TodoList,
};
use std::time::Duration;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Base URL of the placeholder API
    #[arg(long, env = API_URL_ENV, default_value = DEFAULT_API_URL)]
    api_url: String,

    /// Request timeout in seconds
    #[arg(long, env = TIMEOUT_ENV, default_value_t = 10)]
    timeout: u64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List posts, six per page
    Posts {
        #[arg(short, long, default_value_t = 1)]
        page: usize,
    },

    /// Show one post with its author and comments
    Post {
        #[arg(short, long)]
        id: i64,
    },

    /// List albums, optionally with the photos of one of them
    Albums {
        #[arg(short, long)]
        album: Option<i64>,
    },

    /// List todos, ten per page
    Todos {
        #[arg(short, long, default_value_t = TodoFilter::All)]
        filter: TodoFilter,

        #[arg(short, long, default_value_t = 1)]
        page: usize,
    },

    /// Show one todo with its owner and their other todos
    Todo {
        #[arg(short, long)]
        id: i64,
    },
}

fn init_logging() {
    let fmt_layer = fmt::layer()
        .with_target(true)
        .with_writer(std::io::stderr);

    let filter_layer = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,showcase=info,showcase_client=info"));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_logging();

    let cli = Cli::parse();

    let config = ClientConfig::new(cli.api_url).with_timeout(Duration::from_secs(cli.timeout));
    let client = ShowcaseClient::http(&config).context("Failed to create API client")?;
    tracing::debug!("Using API at {}", config.base_url);

    match cli.command {
        Commands::Posts { page } => show_posts(&client, page).await,
        Commands::Post { id } => show_post(&client, id).await,
        Commands::Albums { album } => show_albums(&client, album).await,
        Commands::Todos { filter, page } => show_todos(&client, filter, page).await,
        Commands::Todo { id } => show_todo(&client, id).await,
    }

    Ok(())
}

fn exit_on_failure<T>(what: &str, state: &LoadState<T>) {
    if let Some(reason) = state.error() {
        println!("❌ Failed to load {}: {}", what, reason);
        std::process::exit(1);
    }
}

fn exit_if_missing<T>(what: &str, id: i64, state: &LoadState<T>) {
    if state.is_not_found() {
        println!("❌ {} #{} not found", what, id);
        std::process::exit(1);
    }
    exit_on_failure(what, state);
}

async fn show_posts(client: &ShowcaseClient<HttpClient>, page: usize) {
    let mut list = PostList::new();
    list.start_loading();
    list.finish_loading(client.posts().await);
    exit_on_failure("posts", &list.posts);

    if list.is_empty() {
        println!("   No posts found");
        return;
    }

    list.go_to_page(page);
    println!(
        "📋 Posts, page {} of {} ({} total)",
        list.current_page(),
        list.total_pages(),
        list.len()
    );
    println!();

    for post in list.visible() {
        println!("   [{}] {}", post.id, post.title.bold());
        println!("      {}", truncate(&single_line(&post.body), 70));
        println!();
    }

    print_pager(list.current_page(), list.total_pages());
}

async fn show_post(client: &ShowcaseClient<HttpClient>, id: i64) {
    println!("🔍 Getting post #{}", id);

    let detail: PostDetail = client.post_detail(id).await;
    exit_if_missing("Post", id, &detail.post);

    if let Some(post) = detail.post.value() {
        println!("✅ Post #{}", post.id);
        println!("   Title: {}", post.title.bold());
        println!("   {}", single_line(&post.body));
        println!();
    }

    match &detail.author {
        LoadState::Loaded(_) => {
            if let Some(author) = detail.author() {
                print_user("Author", author);
            }
        }
        LoadState::NotFound => println!("   Author: unknown"),
        LoadState::Failed(reason) => println!("   Author: unavailable ({})", reason),
        LoadState::Idle | LoadState::Loading => {}
    }
    println!();

    let comments = detail.comments.items();
    println!("💬 Comments ({})", comments.len());
    for comment in comments {
        println!("   {} <{}>", comment.name.bold(), comment.email);
        println!("      {}", truncate(&single_line(&comment.body), 70));
    }
}

async fn show_albums(client: &ShowcaseClient<HttpClient>, album: Option<i64>) {
    let mut browser = AlbumBrowser::new();
    browser.start_loading();
    browser.finish_loading(client.albums().await);
    exit_on_failure("albums", &browser.albums);

    if browser.albums.items().is_empty() {
        println!("   No albums found");
        return;
    }

    println!("🖼  Albums");
    for item in browser.albums.items() {
        let marker = if Some(item.id) == album { "▶" } else { " " };
        println!("  {} [{}] {}", marker, item.id, item.title);
    }

    let Some(album_id) = album else {
        return;
    };

    browser.select(album_id);
    let photos = client.album_photos(album_id).await;
    browser.finish_photos(album_id, photos);
    exit_on_failure("photos", &browser.photos);

    println!();
    let title = browser
        .selected_album()
        .map(|a| a.title.clone())
        .unwrap_or_else(|| format!("album #{}", album_id));
    println!("📷 Photos in {}", title.bold());

    let photos = browser.photos.items();
    if photos.is_empty() {
        println!("   No photos in this album");
    }
    for photo in photos {
        println!("   [{}] {}", photo.id, photo.title);
        println!("      {}", photo.thumbnail_url.dimmed());
    }
}

async fn show_todos(client: &ShowcaseClient<HttpClient>, filter: TodoFilter, page: usize) {
    let mut list = TodoList::new();
    list.start_loading();
    list.finish_loading(client.todos().await);
    exit_on_failure("todos", &list.todos);

    list.set_filter(filter);
    list.go_to_page(page);

    if filter != TodoFilter::All {
        println!("   Showing {} todos: {}", filter, list.filtered_count());
    }

    let visible = list.visible();
    if visible.is_empty() {
        println!("   No todos found matching your filter.");
        return;
    }

    println!(
        "📋 Todos, page {} of {}",
        list.current_page(),
        list.total_pages()
    );
    for todo in visible {
        print_todo(todo);
    }
    println!();

    print_pager(list.current_page(), list.total_pages());
}

async fn show_todo(client: &ShowcaseClient<HttpClient>, id: i64) {
    println!("🔍 Getting todo #{}", id);

    let detail: TodoDetail = client.todo_detail(id).await;
    exit_if_missing("Todo", id, &detail.todo);

    if let Some(todo) = detail.todo.value() {
        println!("✅ Todo #{}", todo.id);
        println!("   {}", todo.title.bold());
        println!("   Status: {}", status(todo.completed));
        println!();
    }

    match &detail.owner {
        LoadState::Loaded(owner) => print_user("Assigned to", owner),
        LoadState::NotFound => println!("   Assigned to: unknown"),
        LoadState::Failed(reason) => println!("   Assigned to: unavailable ({})", reason),
        LoadState::Idle | LoadState::Loading => {}
    }

    let related = detail.related.items();
    if !related.is_empty() {
        println!();
        println!("📎 Other todos by this user");
        for todo in related {
            print_todo(todo);
        }
    }
}

fn print_user(role: &str, user: &User) {
    println!("👤 {}: {} (@{})", role, user.name.bold(), user.username);
    println!("   Email: {}", user.email);
    println!("   Phone: {}", user.phone);
    println!("   Website: {}", user.website);
    println!("   City: {}", user.address.city);
    println!("   Company: {}", user.company.name);
    println!("      \"{}\"", user.company.catch_phrase);
    println!("      {}", user.company.bs);
}

fn print_todo(todo: &Todo) {
    let check = if todo.completed {
        "✔".green()
    } else {
        "○".yellow()
    };
    println!("   {} [{}] {} (user {})", check, todo.id, todo.title, todo.user_id);
}

fn print_pager(current: usize, total: usize) {
    let pages: Vec<String> = (1..=total)
        .map(|n| {
            if n == current {
                format!("[{}]", n)
            } else {
                n.to_string()
            }
        })
        .collect();
    println!("   Pages: {}", pages.join(" "));
}

fn status(completed: bool) -> String {
    if completed {
        "Completed".green().to_string()
    } else {
        "Pending".yellow().to_string()
    }
}

fn single_line(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        format!("{}...", s.chars().take(max_len).collect::<String>())
    }
}
