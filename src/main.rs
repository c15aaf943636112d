use chrono::{Local, Utc};
use ootd::database::{self, ootd_repo, SqliteUserDirectory};
use ootd::filesystem;
use ootd::models::FilterSelection;
use ootd::services::{apply_filters, feed_service, onboarding_service};
use ootd::{AppConfig, AppError, Session};
use user_directory::{RestUserDirectory, User, UserDirectory};

/// Environment variable with a username to register on start
const USERNAME_ENV: &str = "OOTD_USERNAME";
/// Environment variable with a JSON filter selection for the recommendations
const FILTER_ENV: &str = "OOTD_FILTER";

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let config = match AppConfig::load(&filesystem::get_config_path()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            AppConfig::default()
        }
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.log_level))
        .init();

    if let Err(e) = run(config).await {
        log::error!("{}", e);
        eprintln!("{}", e.user_message());
        std::process::exit(1);
    }
}

async fn run(config: AppConfig) -> Result<(), AppError> {
    let conn = database::init_database(&config.database_path)?;

    let mut session = Session::with_seed_data(config.clone());
    if let Some(store) = ootd_repo::load_store(&conn, &session.current_user.id)? {
        log::info!("Restored {} OOTDs", store.user_ootds().len());
        session.ootds = store;
    }

    if let Some(username) = std::env::var(USERNAME_ENV).ok().filter(|u| !u.is_empty()) {
        let name = Some(session.current_user.name.clone());
        let user = match config.rest_config() {
            Some(rest) => {
                let directory = RestUserDirectory::new(rest)?;
                onboard(&directory, &username, name.as_deref()).await?
            }
            None => {
                let directory = SqliteUserDirectory::new(&conn);
                onboard(&directory, &username, name.as_deref()).await?
            }
        };
        session.adopt_account(&user);
    }

    print_home(&session);
    if let Some(raw) = std::env::var(FILTER_ENV).ok().filter(|f| !f.is_empty()) {
        let selection: FilterSelection = serde_json::from_str(&raw)?;
        print_recommendations(&session, &selection);
    }
    ootd_repo::save_store(&conn, &session.ootds)?;
    Ok(())
}

async fn onboard<D: UserDirectory>(
    directory: &D,
    username: &str,
    name: Option<&str>,
) -> Result<User, AppError> {
    let user = onboarding_service::register_username(directory, username, name).await?;
    println!("Welcome, @{} ({})", user.username, user.id);
    Ok(user)
}

fn print_home(session: &Session) {
    let summary = session.dashboard(Local::now().date_naive());

    println!("{} day OOTD streak", summary.streak);
    let strip: Vec<String> = summary
        .outfit_days
        .iter()
        .map(|day| {
            let mark = if day.has_outfit() { "x" } else { "-" };
            let label = if day.is_today {
                "Today".to_string()
            } else {
                day.date.format("%a").to_string()
            };
            format!("{} [{}]", label, mark)
        })
        .collect();
    println!("{}", strip.join("  "));
    if summary.top_styles.is_empty() {
        println!("My Top Styles: No styles yet");
    } else {
        println!("My Top Styles:");
        for (i, style) in summary.top_styles.iter().enumerate() {
            println!("  {}. {}", i + 1, style);
        }
    }
    println!(
        "Worn this month: {} ({}% of closet)",
        summary.items_worn_this_month, summary.closet_worn_percent
    );

    let now = Utc::now();
    println!("Friends' OOTDs ({} users online)", session.online_count());
    for feed in session.social_feed() {
        if let Some(latest) = feed.latest() {
            println!(
                "  @{}: {} ({} likes)",
                feed.user.username,
                feed_service::format_time_ago(latest.created_at, now),
                latest.likes
            );
        }
    }
}

fn print_recommendations(session: &Session, selection: &FilterSelection) {
    let labels = selection.active_labels();
    if labels.is_empty() {
        println!("Recommendations:");
    } else {
        println!("Recommendations ({}):", labels.join(", "));
    }

    let results = apply_filters(session.recommendations.catalog(), selection);
    if results.is_empty() {
        println!("  No outfits match these filters");
    }
    for rec in results {
        println!("  {} ({})", rec.title, rec.style);
    }
}
