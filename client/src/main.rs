use clap::{Parser, Subcommand};
use media_gallery::infra::terminal;
use media_gallery::{load_page, ApiService, ClientConfig, MediaApi, Route};

#[derive(Parser, Debug)]
#[command(author, version, about = "Browse a photo/video media server from the terminal", long_about = None)]
struct Args {
    /// Media server origin (overrides MEDIA_API_BASE_URL)
    #[arg(long = "base-url", value_name = "URL", global = true)]
    base_url: Option<String>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    verbosity: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show the page for a client route, e.g. `/images/landscape`
    Open {
        #[arg(value_name = "PATH", default_value = "/")]
        path: String,
    },
    /// List photo categories
    Categories,
    /// List all photos, or the photos of one category
    Photos {
        #[arg(value_name = "CATEGORY")]
        category: Option<String>,
    },
    /// List all videos
    Videos,
    /// List every media file
    Media,
    /// Check that the server is up
    Health,
    /// Print the absolute URL for a server-relative media path
    Url {
        #[arg(value_name = "RELATIVE")]
        relative: String,
    },
    /// Print the route table
    Routes,
}

#[tokio::main]
async fn main() {
    // A missing .env is fine; real env vars win
    let _ = dotenvy::dotenv();

    let args = Args::parse();

    let default_level = match args.verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp_millis()
        .init();

    log::debug!("Command-line args: {:?}", args);

    if let Err(e) = run(args).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let config = match &args.base_url {
        Some(url) => ClientConfig::with_base_url(url)?,
        None => ClientConfig::from_env()?,
    };
    log::info!("Using media server at {}", config.base_url);

    let api = ApiService::from_config(&config);

    let output = match args.command {
        Command::Open { path } => {
            let route = Route::parse(&path).ok_or_else(|| format!("No page at '{path}'"))?;
            let page = load_page(&api, &route).await?;
            terminal::render_page(&api, &page)
        }
        Command::Categories => terminal::render_categories(&api, &api.get_photo_categories().await?),
        Command::Photos { category: Some(c) } => {
            terminal::render_files(&api, &api.get_photos_by_category(&c).await?)
        }
        Command::Photos { category: None } => terminal::render_files(&api, &api.get_photos().await?),
        Command::Videos => terminal::render_files(&api, &api.get_videos().await?),
        Command::Media => terminal::render_files(&api, &api.get_all_media().await?),
        Command::Health => terminal::render_health(&api.health_check().await?),
        Command::Url { relative } => format!("{}\n", api.get_media_url(&relative)),
        Command::Routes => Route::all_patterns()
            .iter()
            .map(|(pattern, name)| format!("  {pattern:<20} {name}\n"))
            .collect(),
    };

    print!("{output}");
    Ok(())
}
