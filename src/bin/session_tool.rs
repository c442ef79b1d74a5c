use ao_gym::adapters::console::TracingNotifier;
use ao_gym::adapters::mock_backend::MockAuthService;
use ao_gym::core::auth::DashboardAction;
use ao_gym::core::{LoginForm, SignupForm};
use ao_gym::utils::logger;
use ao_gym::utils::validation::{validate_path, Validate};
use ao_gym::{AuthFlow, FileStorage, SessionStore, SiteConfig};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "session_tool")]
#[command(about = "Inspect or manage the persisted AO Gym member session")]
struct Args {
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long)]
    storage_dir: Option<String>,

    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the stored member profile
    Show,
    /// Mock login and persist the demo profile
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Mock signup and persist a fresh Basic profile
    Signup {
        #[arg(long)]
        first_name: String,
        #[arg(long)]
        last_name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        phone: String,
        #[arg(long)]
        password: String,
    },
    /// Run a dashboard action (edit-profile, book-session, manage-plan, view-history)
    Action { name: String },
    /// Log out and delete the stored profile
    Clear,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logger::init_cli_logger(args.verbose);

    let site = match &args.config {
        Some(path) => SiteConfig::from_file(path)?,
        None => SiteConfig::builtin()?,
    };
    let storage_dir = args
        .storage_dir
        .clone()
        .or_else(|| site.storage_dir().map(str::to_string))
        .unwrap_or_else(|| "./.ao-gym".to_string());

    // 驗證配置
    if let Err(e) = site
        .validate()
        .and_then(|_| validate_path("storage_dir", &storage_dir))
    {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let session = SessionStore::with_key(FileStorage::new(storage_dir), site.storage_key());
    let service = MockAuthService::new(site.login_latency(), site.signup_latency());
    let mut auth = AuthFlow::new(service, session, TracingNotifier);

    match args.command {
        Command::Show => match auth.current_user() {
            Some(user) => {
                println!("{}", user.welcome_message());
                println!("{}", serde_json::to_string_pretty(user)?);
            }
            None => println!("No active session under '{}'", auth.session().storage_key()),
        },
        Command::Login { email, password } => {
            let user = auth.login(&LoginForm { email, password }).await?;
            println!("✅ Logged in as {} ({})", user.full_name(), user.membership_type);
        }
        Command::Signup {
            first_name,
            last_name,
            email,
            phone,
            password,
        } => {
            let form = SignupForm {
                first_name,
                last_name,
                email,
                phone,
                confirm_password: password.clone(),
                password,
            };
            let user = auth.signup(&form).await?;
            println!("✅ Welcome {}! Member until {}", user.first_name, user.expiry_date);
        }
        Command::Action { name } => {
            let action: DashboardAction = name.parse()?;
            auth.dashboard_action(&action);
        }
        Command::Clear => {
            auth.logout();
            println!("Session cleared");
        }
    }

    Ok(())
}
