use std::net::SocketAddr;
use std::process;

use clap::{Parser, Subcommand};
use comfy_table::{modifiers, presets, ContentArrangement, Table};
use terminal_size::{terminal_size, Width};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};
use yansi::Paint;

use construo::config::{self, Settings, DEFAULT_HOST, DEFAULT_PORT};
use construo::models::AppState;
use construo::services::UserDirectory;

fn load_settings(env_file: Option<&str>) -> Settings {
    config::load_env_file(env_file);
    match Settings::from_env() {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!(%e, "Invalid configuration");
            eprintln!("{}: {}", "Invalid configuration".red(), e);
            process::exit(1);
        }
    }
}

async fn build_state_or_exit(settings: &Settings) -> AppState {
    match construo::build_state(settings).await {
        Ok(state) => state,
        Err(e) => {
            tracing::error!(%e, "Failed to load user directory");
            eprintln!("{}: {}", "Failed to load user directory".red(), e);
            process::exit(1);
        }
    }
}

async fn start_server(mut state: AppState, host: &str, port: u16, stylesheet: Option<String>) {
    if let Some(path) = stylesheet {
        match tokio::fs::read_to_string(&path).await {
            Ok(css) => {
                state.custom_css = Some(css);
                tracing::info!("Loaded custom stylesheet from {}", path);
            }
            Err(e) => {
                tracing::error!(%e, "Failed to read custom stylesheet");
                eprintln!("{} {}: {}", "Failed to read custom stylesheet at".red(), path, e);
                process::exit(1);
            }
        }
    }

    let addr: SocketAddr = match format!("{}:{}", host, port).parse() {
        Ok(a) => a,
        Err(e) => {
            tracing::error!(%e, "Invalid host/port format");
            eprintln!("{}: {}", "Invalid host/port format".red(), e);
            process::exit(1);
        }
    };
    let app = construo::routes::build_router(state);
    tracing::info!(%addr, "Starting Construo web server");
    println!("{} {}", "Web server running on".green(), format!("http://{}", addr).cyan());
    match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => {
            if let Err(e) = axum::serve(listener, app).await {
                tracing::error!(%e, "Server encountered an error while running");
                eprintln!("{}: {}", "Server error".red(), e);
                process::exit(1);
            }
        }
        Err(e) => {
            tracing::error!(%e, "Failed to bind to address; is the port already in use?");
            eprintln!(
                "{}: {}\n{}",
                format!("Failed to bind to {}", addr).red(),
                e,
                "Please stop any process using this port, or start the server with a different --port value.".yellow()
            );
            process::exit(1);
        }
    }
}

fn print_users(directory: &UserDirectory) {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL);
    table.apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    if let Some((Width(w), _)) = terminal_size() {
        table.set_width(w.saturating_sub(4));
    }
    table.set_header(vec!["ID", "Name", "Email", "Role", "Services", "Approvals (p/a/r)", "Projects"]);
    for user in directory.users() {
        let approvals = &user.approval_status;
        table.add_row(vec![
            user.id.clone(),
            user.name.clone(),
            user.email.clone(),
            user.role.as_str().to_string(),
            user.services.join(", "),
            format!("{}/{}/{}", approvals.pending, approvals.approved, approvals.rejected),
            user.projects
                .iter()
                .map(|p| format!("{} ({}, {}%)", p.name, p.status.as_str(), p.progress))
                .collect::<Vec<_>>()
                .join("\n"),
        ]);
    }
    println!("\n{table}\n");
}

#[derive(Parser)]
#[command(
    name = "construo",
    author,
    version,
    about = "Construo marketing site server",
    long_about = r#"Construo: the marketing site for the Construo construction management platform.

Serves the landing, about, pricing, services and blog pages together with the demo login and the trial request forms.

Examples:
  1) Run the site locally:
      cargo run -- serve --host 127.0.0.1 --port 8080
  2) Show the demo accounts:
      construo users list
"#,
    after_help = "Use `construo <subcommand> --help` to get subcommand specific options."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
    /// Disable colorized output
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the web server
    Serve {
        /// Host to bind to
        #[arg(long, default_value_t = String::from(DEFAULT_HOST))]
        host: String,
        /// Port to bind to
        #[arg(long, default_value_t = DEFAULT_PORT)]
        port: u16,
        /// Path to .env file
        #[arg(long)]
        env_file: Option<String>,
        /// Path to a custom stylesheet to serve instead of the default
        #[arg(long)]
        stylesheet: Option<String>,
    },
    /// Validate configuration (env vars and the optional users file)
    CheckConfig {
        /// Path to .env file
        #[arg(long)]
        env_file: Option<String>,
    },
    /// Inspect the demo user directory
    Users {
        #[command(subcommand)]
        sub: UserCommands,
    },
}

#[derive(Subcommand)]
enum UserCommands {
    #[command(about = "List demo users", long_about = "Print the accounts the login page accepts (passwords are not shown).")]
    List {
        /// Path to .env file
        #[arg(long)]
        env_file: Option<String>,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.no_color {
        yansi::whenever(yansi::Condition::NEVER);
    }

    // No subcommand: serve with defaults.
    let Some(command) = cli.command else {
        let settings = load_settings(None);
        let state = build_state_or_exit(&settings).await;
        start_server(state, DEFAULT_HOST, DEFAULT_PORT, None).await;
        return;
    };

    match command {
        Commands::Serve { host, port, env_file, stylesheet } => {
            let settings = load_settings(env_file.as_deref());
            let state = build_state_or_exit(&settings).await;
            start_server(state, &host, port, stylesheet).await;
        }
        Commands::CheckConfig { env_file } => {
            let settings = load_settings(env_file.as_deref());
            let state = build_state_or_exit(&settings).await;
            println!("{} {}", "Public base URL:".bold(), settings.public_base_url);
            println!("{} {} ms", "Submit delay:".bold(), settings.submit_delay.as_millis());
            println!("{} {}", "Hero seed:".bold(), settings.hero_seed);
            match &settings.users_file {
                Some(path) => println!("{} {}", "Users file:".bold(), path.display()),
                None => println!("{} built-in seed", "Users file:".bold()),
            }
            println!(
                "{}",
                format!("Configuration looks valid ({} users)", state.users.users().len()).green()
            );
        }
        Commands::Users { sub } => match sub {
            UserCommands::List { env_file } => {
                let settings = load_settings(env_file.as_deref());
                match UserDirectory::load(settings.users_file.as_deref()).await {
                    Ok(directory) => print_users(&directory),
                    Err(e) => {
                        eprintln!("{}: {}", "Failed to load user directory".red(), e);
                        process::exit(1);
                    }
                }
            }
        },
    }
}
