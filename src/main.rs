//! InfluenceHub command-line client
//!
//! Main application entry point

use clap::{Args, Parser, Subcommand};
use tracing::{error, info};

use InfluenceHub::{
    config::Settings,
    models::{Activity, Campaign, CampaignStatus, Influencer},
    services::{search::InfluencerSearch, ServiceFactory},
    session::{SessionManager, SessionStorage},
    utils::{helpers, logging},
    InfluenceHubError,
};

#[derive(Debug, Parser)]
#[command(name = "influencehub", version)]
#[command(about = "InfluenceHub marketplace client")]
#[command(
    after_help = "Environment:\n  INFLUENCEHUB__API__BASE_URL        Backend address\n  INFLUENCEHUB__SESSION__BACKEND     memory | file | redis"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Log in; without arguments the configured account is used
    Login {
        email: Option<String>,
        password: Option<String>,
    },
    /// Create an account and log in
    Signup {
        name: String,
        email: String,
        password: String,
    },
    Logout,
    /// Show the stored session
    Whoami,
    /// List influencers
    Influencers {
        /// Only the most recently added
        #[arg(long)]
        recent: bool,
    },
    /// Show one influencer
    Influencer { id: String },
    /// Search influencers
    Search(SearchArgs),
    /// List your campaigns
    Campaigns {
        /// Every campaign instead of only yours
        #[arg(long)]
        all: bool,
    },
    /// Book an influencer onto one of your accepted campaigns.
    /// Without a campaign id the bookable campaigns are listed.
    Book {
        influencer_id: String,
        campaign_id: Option<String>,
    },
    /// Admin statistics and recent activity
    Dashboard,
    /// Admin user list
    Users,
    /// Approve a pending campaign
    Approve { campaign_id: String },
    /// Reject a pending campaign
    Reject { campaign_id: String },
}

#[derive(Debug, Args)]
struct SearchArgs {
    #[arg(long)]
    query: Option<String>,
    /// Defaults to "All"
    #[arg(long)]
    category: Option<String>,
    /// Exact age
    #[arg(long, allow_hyphen_values = true, conflicts_with_all = ["min_age", "max_age"])]
    age: Option<String>,
    #[arg(long, allow_hyphen_values = true)]
    min_age: Option<String>,
    #[arg(long, allow_hyphen_values = true)]
    max_age: Option<String>,
    /// Minimum follower count
    #[arg(long, allow_hyphen_values = true)]
    followers: Option<String>,
}

impl Command {
    /// Subcommand name for logs; arguments may hold credentials
    fn name(&self) -> &'static str {
        match self {
            Command::Login { .. } => "login",
            Command::Signup { .. } => "signup",
            Command::Logout => "logout",
            Command::Whoami => "whoami",
            Command::Influencers { .. } => "influencers",
            Command::Influencer { .. } => "influencer",
            Command::Search(_) => "search",
            Command::Campaigns { .. } => "campaigns",
            Command::Book { .. } => "book",
            Command::Dashboard => "dashboard",
            Command::Users => "users",
            Command::Approve { .. } => "approve",
            Command::Reject { .. } => "reject",
        }
    }
}

impl SearchArgs {
    fn to_search(&self) -> InfluencerSearch {
        let mut search = InfluencerSearch::new();
        if let Some(ref query) = self.query {
            search = search.query(query.as_str());
        }
        if let Some(ref category) = self.category {
            search = search.category(category.as_str());
        }
        if let Some(ref age) = self.age {
            search = search.age(age.as_str());
        } else if self.min_age.is_some() || self.max_age.is_some() {
            search = search.age_range(
                self.min_age.clone().unwrap_or_default(),
                self.max_age.clone().unwrap_or_default(),
            );
        }
        if let Some(ref followers) = self.followers {
            search = search.min_followers(followers.as_str());
        }
        search
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::new()?;
    settings.validate()?;

    // Initialize logging
    let _log_guard = logging::init_logging(&settings.logging)?;

    info!(command = cli.command.name(), base_url = %settings.api.base_url, "Starting InfluenceHub client");

    let services = ServiceFactory::new(&settings)?;
    let storage = SessionStorage::from_config(&settings.session).await?;
    let sessions = SessionManager::new(storage, services.auth_service.clone());

    if let Err(e) = run(cli.command, &settings, &services, &sessions).await {
        error!(error = %e, severity = %e.severity(), "Command failed");
        eprintln!("Error: {}", e.user_message());
        if e.requires_login() {
            eprintln!("Run `influencehub login` to sign in again.");
        }
        std::process::exit(1);
    }

    Ok(())
}

async fn run(
    command: Command,
    settings: &Settings,
    services: &ServiceFactory,
    sessions: &SessionManager,
) -> Result<(), InfluenceHubError> {
    match command {
        Command::Login { email, password } => {
            let (email, password) = match (email, password, settings.account.as_ref()) {
                (Some(email), Some(password), _) => (email, password),
                (None, None, Some(account)) => (account.email.clone(), account.password.clone()),
                _ => {
                    return Err(InfluenceHubError::Validation(
                        "Email and password are required".to_string(),
                    ))
                }
            };
            let session = sessions.login(&email, &password).await?;
            println!(
                "Logged in as {} ({})",
                session.user.name,
                if session.is_admin() { "admin" } else { "brand" }
            );
        }
        Command::Signup { name, email, password } => {
            let session = sessions.signup(&name, &email, &password).await?;
            println!("Welcome, {}", session.user.name);
        }
        Command::Logout => {
            sessions.logout().await?;
            println!("Logged out");
        }
        Command::Whoami => match sessions.current().await? {
            Some(session) => println!(
                "{} <{}> role={:?}",
                session.user.name, session.user.email, session.user.role
            ),
            None => println!("Not logged in"),
        },
        Command::Influencers { recent } => {
            let token = sessions.token().await?;
            let list = if recent {
                services.influencer_service.recent(&token).await?
            } else {
                services.influencer_service.list(&token).await?
            };
            print_influencers(services, &list);
        }
        Command::Influencer { id } => {
            let token = sessions.token().await?;
            let influencer = services.influencer_service.get(&token, &id).await?;
            print_influencers(services, std::slice::from_ref(&influencer));
            if let Some(ref description) = influencer.description {
                println!("  {}", helpers::truncate_text(description, 120));
            }
            for (platform, url) in influencer.social_links.iter() {
                println!("  {}: {}", platform, url);
            }
        }
        Command::Search(args) => {
            let token = sessions.token().await?;
            let results = services
                .influencer_service
                .search(&token, &args.to_search())
                .await?;
            print_influencers(services, &results);
        }
        Command::Campaigns { all } => {
            let token = sessions.token().await?;
            let campaigns = if all {
                services.campaign_service.list(&token).await?
            } else {
                services.campaign_service.mine(&token).await?
            };
            for campaign in &campaigns {
                print_campaign(campaign);
            }
        }
        Command::Book { influencer_id, campaign_id: None } => {
            let token = sessions.token().await?;
            let influencer = services.influencer_service.get(&token, &influencer_id).await?;
            let eligible = services.booking_service.eligible_campaigns(&token).await?;
            if eligible.is_empty() {
                println!("No accepted campaigns to book {} onto", influencer.name);
            }
            for campaign in &eligible {
                print_campaign(campaign);
            }
        }
        Command::Book { influencer_id, campaign_id: Some(campaign_id) } => {
            let token = sessions.token().await?;
            let influencer = services.influencer_service.get(&token, &influencer_id).await?;
            let mine = services.campaign_service.mine(&token).await?;
            let campaign = find_own_campaign(&mine, &campaign_id)?;
            let confirmation = services.booking_service.confirm(&influencer, Some(campaign))?;
            println!("{}", confirmation.message);
        }
        Command::Dashboard => {
            let token = sessions.token().await?;
            let dashboard = services.admin_service.dashboard(&token).await?;
            let stats = &dashboard.stats;
            println!("Users:             {}", stats.total_users);
            println!("Campaigns:         {}", stats.total_campaigns);
            println!("Pending campaigns: {}", stats.pending_campaigns);
            println!("Influencers:       {}", stats.total_influencers);
            println!("Success rate:      {}%", stats.success_rate);
            println!();
            println!("Recent activity:");
            for activity in &dashboard.activities {
                print_activity(activity);
            }
        }
        Command::Users => {
            let token = sessions.token().await?;
            for user in services.admin_service.users(&token).await? {
                println!("{:<26} {:<24} {:<32} {:?}", user.id, user.name, user.email, user.role);
            }
        }
        Command::Approve { campaign_id } => {
            review_campaign(services, sessions, &campaign_id, CampaignStatus::Approved).await?;
        }
        Command::Reject { campaign_id } => {
            review_campaign(services, sessions, &campaign_id, CampaignStatus::Rejected).await?;
        }
    }

    Ok(())
}

async fn review_campaign(
    services: &ServiceFactory,
    sessions: &SessionManager,
    id: &str,
    status: CampaignStatus,
) -> Result<(), InfluenceHubError> {
    let token = sessions.token().await?;
    services.admin_service.update_campaign_status(&token, id, status).await?;
    println!("Campaign {} {}", id, status);
    Ok(())
}

/// The caller's campaign with `id`, whatever its status; `confirm` judges bookability
fn find_own_campaign<'a>(campaigns: &'a [Campaign], id: &str) -> Result<&'a Campaign, InfluenceHubError> {
    campaigns.iter().find(|c| c.id == id).ok_or_else(|| {
        InfluenceHubError::Validation(format!("Campaign {} is not one of your campaigns", id))
    })
}

fn print_campaign(campaign: &Campaign) {
    println!(
        "{:<26} {:<10} {:>10} {}",
        campaign.id,
        campaign.status.as_str().to_uppercase(),
        campaign.budget.map(|b| format!("{:.2}", b)).unwrap_or_default(),
        campaign.title
    );
}

fn print_influencers(services: &ServiceFactory, influencers: &[Influencer]) {
    for influencer in influencers {
        println!(
            "{:<26} {:<24} {:<12} age {:<4} followers {:>12}  {}",
            influencer.id,
            influencer.name,
            influencer.primary_category(),
            influencer.age.map(|a| a.to_string()).unwrap_or_else(|| "-".to_string()),
            helpers::format_count(influencer.followers.unwrap_or(0)),
            influencer
                .primary_image()
                .map(|p| services.api.media_url(p))
                .unwrap_or_default(),
        );
    }
}

fn print_activity(activity: &Activity) {
    let when = activity
        .timestamp
        .map(|t| helpers::format_relative_time(t, chrono::Utc::now()))
        .unwrap_or_else(|| "unknown time".to_string());
    println!(
        "  [{}] {} ({})",
        when,
        activity.title,
        activity.user.as_deref().unwrap_or("unknown")
    );
}
