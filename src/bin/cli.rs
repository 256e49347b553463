//! MPS Site CLI
//!
//! Command-line access to a local content store:
//! - Seed and browse content
//! - Submit leads
//! - Admin session, lead inbox and site configuration

use anyhow::{bail, Context};
use clap::{Parser, Subcommand, ValueEnum};
use mps_site::auth::{Authenticator, SessionGate};
use mps_site::config::Config;
use mps_site::editor::{AboutField, ConfigEditor, ContactField};
use mps_site::leads::LeadCapture;
use mps_site::logging;
use mps_site::storage::{Category, ContentStore, Language, Lead, NewLead, SiteConfig};
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "mps-cli")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Manage the MPS property-services site content")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Data directory (overrides the config file)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Config file (default: standard locations)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// Show info-level logs
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Seed any missing collections
    Init,

    /// List services
    Services {
        /// Only this category (maintenance, security, assets, lifestyle)
        #[arg(short, long)]
        category: Option<String>,
        /// Display language (default: saved preference)
        #[arg(short, long)]
        lang: Option<String>,
    },

    /// List blog posts
    Posts {
        #[arg(short, long)]
        lang: Option<String>,
    },

    /// Submit a contact-form inquiry
    Submit {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long, default_value = "")]
        phone: String,
        #[arg(long, default_value = "")]
        message: String,
        #[arg(long, default_value = "")]
        location: String,
        /// Property type (repeatable)
        #[arg(long = "property-type")]
        property_types: Vec<String>,
        /// Requested service (repeatable)
        #[arg(long = "service")]
        services: Vec<String>,
    },

    /// Show or set the saved language
    Lang {
        /// Language code, e.g. de or zh-HK
        code: Option<String>,
    },

    /// Start an admin session
    Login { username: String, password: String },

    /// End the admin session
    Logout,

    /// Show whether an admin session is active
    Whoami,

    /// List leads, newest first (admin)
    Leads,

    /// Show one lead (admin)
    Lead { id: String },

    /// Collection counters (admin)
    Stats,

    /// Site configuration
    #[command(subcommand)]
    Config(ConfigCommand),

    /// Generate default config file
    GenerateConfig {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Print the current configuration
    Show,

    /// Set one language of an about field (admin)
    SetAbout {
        /// title, subtitle or content
        field: String,
        lang: String,
        value: String,
    },

    /// Set a contact field (admin)
    SetContact {
        /// phone, email or address
        field: String,
        value: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    if !cli.verbose && std::env::var_os("RUST_LOG").is_none() {
        config.logging.level = "warn".to_string();
    }
    logging::init(&config.logging);

    if let Commands::GenerateConfig { output } = &cli.command {
        return generate_config(output.as_ref());
    }

    let mut store_config = config.storage.to_store_config();
    if let Some(dir) = &cli.data_dir {
        store_config.data_dir = dir.clone();
    }
    let store = Arc::new(
        ContentStore::open(&store_config)
            .with_context(|| format!("opening data directory {:?}", store_config.data_dir))?,
    );
    store.initialize()?;

    let gate = SessionGate::new(Arc::clone(&store));
    let format = cli.format;

    match cli.command {
        Commands::Init => {
            println!("Data directory: {:?}", store_config.data_dir);
            println!("{}", store.stats());
        }

        Commands::Services { category, lang } => {
            let lang = display_language(&store, lang.as_deref())?;
            let services = match category {
                Some(raw) => {
                    let category: Category = raw.parse().map_err(anyhow::Error::msg)?;
                    store.services_by_category(category)
                }
                None => store.get_services(),
            };

            if format == OutputFormat::Json {
                return print_json(&services);
            }

            println!("{:<16} {:<12} {}", "ID", "Category", "Title");
            println!("{}", "-".repeat(60));
            for service in &services {
                println!(
                    "{:<16} {:<12} {}",
                    service.id,
                    service.category,
                    service.title.resolve(lang)
                );
            }
        }

        Commands::Posts { lang } => {
            let lang = display_language(&store, lang.as_deref())?;
            let posts = store.get_posts();

            if format == OutputFormat::Json {
                return print_json(&posts);
            }

            if posts.is_empty() {
                println!("No posts yet.");
            }
            for post in &posts {
                println!("{}  {}", post.date, post.title.resolve(lang));
            }
        }

        Commands::Submit {
            name,
            email,
            phone,
            message,
            location,
            property_types,
            services,
        } => {
            let capture = LeadCapture::new(Arc::clone(&store), config.notify.build_sink());
            let submission = capture.submit(NewLead {
                full_name: name,
                email,
                phone,
                message,
                property_location: location,
                property_types,
                service_types: services,
            });

            match submission.finished().await {
                Some(lead) => println!("Stored lead {}", lead.id),
                None => bail!("failed to store lead"),
            }
        }

        Commands::Lang { code } => match code {
            Some(code) => {
                let lang: Language = code.parse().map_err(anyhow::Error::msg)?;
                store.set_language(lang)?;
                println!("Language set to {} ({})", lang.name(), lang.code());
            }
            None => {
                let lang = store.get_language().unwrap_or_default();
                println!("{} ({})", lang.name(), lang.code());
            }
        },

        Commands::Login { username, password } => {
            if !gate.login(&username, &password) {
                bail!("invalid credentials");
            }
            println!("Logged in");
        }

        Commands::Logout => {
            gate.logout();
            println!("Logged out");
        }

        Commands::Whoami => {
            if gate.is_authenticated() {
                println!("admin");
            } else {
                println!("not logged in");
            }
        }

        Commands::Leads => {
            require_admin(&gate)?;
            let leads = store.get_leads();

            if format == OutputFormat::Json {
                return print_json(&leads);
            }

            if leads.is_empty() {
                println!("No leads yet.");
                return Ok(());
            }

            println!("{:<15} {:<26} {:<24} {}", "ID", "Date", "Name", "Email");
            println!("{}", "-".repeat(90));
            for lead in &leads {
                println!(
                    "{:<15} {:<26} {:<24} {}",
                    lead.id, lead.date, lead.full_name, lead.email
                );
            }
        }

        Commands::Lead { id } => {
            require_admin(&gate)?;
            let Some(lead) = store.get_lead(&id) else {
                bail!("lead {} not found", id);
            };

            if format == OutputFormat::Json {
                return print_json(&lead);
            }
            print_lead(&lead);
        }

        Commands::Stats => {
            require_admin(&gate)?;
            let stats = store.stats();
            println!("Leads:    {}", stats.leads);
            println!("Services: {}", stats.services);
            println!("Posts:    {}", stats.posts);
        }

        Commands::Config(command) => {
            let editor = ConfigEditor::new(Arc::clone(&store));
            match command {
                ConfigCommand::Show => {
                    let current = editor.load();
                    if format == OutputFormat::Json {
                        return print_json(&current);
                    }
                    print_config(&current);
                }
                ConfigCommand::SetAbout { field, lang, value } => {
                    require_admin(&gate)?;
                    let field: AboutField = field.parse().map_err(anyhow::Error::msg)?;
                    let lang: Language = lang.parse().map_err(anyhow::Error::msg)?;

                    let mut draft = editor.draft();
                    draft.set_about(field, lang, &value);
                    draft.commit(&editor)?;
                    println!("Saved");
                }
                ConfigCommand::SetContact { field, value } => {
                    require_admin(&gate)?;
                    let field: ContactField = field.parse().map_err(anyhow::Error::msg)?;

                    let mut draft = editor.draft();
                    draft.set_contact(field, &value);
                    draft.commit(&editor)?;
                    println!("Saved");
                }
            }
        }

        Commands::GenerateConfig { output } => generate_config(output.as_ref())?,
    }

    Ok(())
}

fn require_admin(gate: &SessionGate) -> anyhow::Result<()> {
    if !gate.is_authenticated() {
        bail!("not logged in; run `mps-cli login admin <password>` first");
    }
    Ok(())
}

fn display_language(store: &ContentStore, requested: Option<&str>) -> anyhow::Result<Language> {
    match requested {
        Some(code) => code.parse().map_err(anyhow::Error::msg),
        None => Ok(store.get_language().unwrap_or_default()),
    }
}

fn generate_config(output: Option<&PathBuf>) -> anyhow::Result<()> {
    let config = mps_site::config::generate_default_config();

    match output {
        Some(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(path, &config)?;
            println!("Config written to {:?}", path);
        }
        None => print!("{}", config),
    }
    Ok(())
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_lead(lead: &Lead) {
    println!("ID:        {}", lead.id);
    println!("Date:      {}", lead.date);
    println!("Status:    {:?}", lead.status);
    println!("Name:      {}", lead.full_name);
    println!("Email:     {}", lead.email);
    println!("Phone:     {}", lead.phone);
    println!("Location:  {}", lead.property_location);
    println!("Property:  {}", lead.property_types.join(", "));
    println!("Services:  {}", lead.service_types.join(", "));
    if !lead.message.is_empty() {
        println!();
        println!("{}", lead.message);
    }
}

fn print_config(config: &SiteConfig) {
    println!("Email:    {}", config.contact_email);
    println!("Phone:    {}", config.phone_number);
    println!("Address:  {}", config.address);
    println!("Colors:   {} / {}", config.primary_color, config.accent_color);
    println!();
    for lang in config.about_title.languages() {
        println!(
            "[{}] {}: {}",
            lang.code(),
            config.about_title.resolve(lang),
            config.about_subtitle.resolve(lang)
        );
    }
}
