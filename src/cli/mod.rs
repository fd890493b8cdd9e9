//! Command-line interface for parlor.
//!
//! Provides commands for browsing the portfolio registries, sending a
//! contact message, and inspecting drafts and configuration.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};

use crate::form::{persist, Field, FormController, HttpSubmitter};
use crate::registry::{ContentKind, ContentRecord, Registry};
use crate::store::JsonFileStore;

pub mod console;

pub use console::ConsoleSurface;

/// parlor - portfolio site core
#[derive(Parser, Debug)]
#[command(name = "parlor")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List portfolio projects
    Projects {
        /// Filter by content kind
        #[arg(short, long, value_enum)]
        kind: Option<KindArg>,

        /// Filter by exact category
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Show details of a single project
    Show {
        /// Project id
        id: String,
    },

    /// List projects related to the given one
    Related {
        /// Project id to exclude
        id: String,

        /// Maximum number of related projects to show
        #[arg(short, long, default_value = "3")]
        limit: usize,
    },

    /// Validate and send a contact message
    Send {
        /// Sender name
        #[arg(long)]
        name: Option<String>,

        /// Sender email address
        #[arg(long)]
        email: Option<String>,

        /// Message subject
        #[arg(long)]
        subject: Option<String>,

        /// Message body
        #[arg(long)]
        message: Option<String>,

        /// Form endpoint (overrides configuration)
        #[arg(long)]
        endpoint: Option<String>,
    },

    /// Show or clear the saved contact form draft
    Draft {
        /// Delete the saved draft
        #[arg(long)]
        clear: bool,
    },

    /// Show resolved configuration (debug)
    Config,
}

/// Content kind for CLI (maps to ContentKind)
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum KindArg {
    /// Graphics design projects
    Graphics,

    /// Video projects
    Video,
}

impl From<KindArg> for ContentKind {
    fn from(k: KindArg) -> Self {
        match k {
            KindArg::Graphics => ContentKind::Graphics,
            KindArg::Video => ContentKind::Video,
        }
    }
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(self) -> Result<()> {
        match self.command {
            Commands::Projects { kind, category } => list_projects(kind, category),
            Commands::Show { id } => show_project(&id),
            Commands::Related { id, limit } => list_related(&id, limit),
            Commands::Send {
                name,
                email,
                subject,
                message,
                endpoint,
            } => send_message(name, email, subject, message, endpoint).await,
            Commands::Draft { clear } => show_draft(clear),
            Commands::Config => show_config(),
        }
    }
}

/// Registries selected by the kind filter, in display order
fn selected_registries(kind: Option<KindArg>) -> Vec<Registry> {
    match kind.map(ContentKind::from) {
        Some(ContentKind::Graphics) => vec![Registry::graphics()],
        Some(ContentKind::Video) => vec![Registry::videos()],
        None => vec![Registry::graphics(), Registry::videos()],
    }
}

/// List projects, optionally filtered by kind and category
fn list_projects(kind: Option<KindArg>, category: Option<String>) -> Result<()> {
    let registries = selected_registries(kind);

    let mut rows: Vec<&ContentRecord> = Vec::new();
    for registry in &registries {
        match category {
            Some(ref category) => rows.extend(registry.by_category(category)),
            None => rows.extend(registry.all()),
        }
    }

    if rows.is_empty() {
        println!("No projects found");
        return Ok(());
    }

    println!("{:<22} {:<10} {:<16} TITLE", "ID", "KIND", "CATEGORY");
    println!("{}", "-".repeat(75));
    for record in rows {
        println!(
            "{:<22} {:<10} {:<16} {}",
            record.id,
            record.kind.to_string(),
            record.category,
            record.title
        );
    }

    Ok(())
}

/// Show one project in full
fn show_project(id: &str) -> Result<()> {
    let graphics = Registry::graphics();
    let videos = Registry::videos();

    let record = graphics
        .by_id(id)
        .or_else(|| videos.by_id(id))
        .with_context(|| format!("No project with id '{}'", id))?;

    println!("Id: {}", record.id);
    println!("Title: {}", record.title);
    println!("Kind: {}", record.kind);
    println!("Category: {}", record.category);
    println!("Description: {}", record.description);
    if !record.tags.is_empty() {
        println!("Tags: {}", record.tags.join(", "));
    }
    println!("Media: {}", record.media_url);
    println!("Download: {}", record.download_url);
    if let Some(ref video) = record.video {
        println!("Thumbnail: {}", video.thumbnail_url);
        println!("Duration: {}", video.duration);
        println!("Size: {}", video.size);
    }

    Ok(())
}

/// List projects related to the given one, from the registry that holds it
fn list_related(id: &str, limit: usize) -> Result<()> {
    let graphics = Registry::graphics();
    let videos = Registry::videos();

    let registry = if graphics.by_id(id).is_some() {
        &graphics
    } else if videos.by_id(id).is_some() {
        &videos
    } else {
        anyhow::bail!("No project with id '{}'", id);
    };

    let related = registry.related(id, limit);
    if related.is_empty() {
        println!("No related projects");
        return Ok(());
    }

    for record in related {
        println!("{:<22} {:<16} {}", record.id, record.category, record.title);
    }

    Ok(())
}

/// Send a contact message through the same controller the site uses.
///
/// Values given as flags override the saved draft; anything left out falls
/// back to the draft restored at attach time.
async fn send_message(
    name: Option<String>,
    email: Option<String>,
    subject: Option<String>,
    message: Option<String>,
    endpoint: Option<String>,
) -> Result<()> {
    let config = crate::config::config()?;
    let endpoint = endpoint.or_else(|| config.endpoint.clone()).context(
        "No form endpoint configured. Set form.endpoint in .parlor/config.yaml or pass --endpoint",
    )?;

    let store = JsonFileStore::open_default()?;
    let submitter = HttpSubmitter::new(endpoint);
    let mut controller =
        FormController::attach(ConsoleSurface, store, submitter, config.form_settings());

    let overrides = [
        (Field::Name, name),
        (Field::Email, email),
        (Field::Subject, subject),
        (Field::Message, message),
    ];
    for (field, value) in overrides {
        if let Some(value) = value {
            controller.on_input(field, &value);
        }
    }

    for (field, value) in controller.state().values().entries() {
        if !value.is_empty() {
            eprintln!("  {}: {}", field, value);
        }
    }

    controller.on_submit().await;

    Ok(())
}

/// Show the saved draft, or delete it
fn show_draft(clear: bool) -> Result<()> {
    let store = JsonFileStore::open_default()?;

    if clear {
        persist::clear_draft(&store);
        println!("Draft cleared");
        return Ok(());
    }

    let draft = persist::load_draft(&store);
    let entries: Vec<_> = draft
        .entries()
        .filter(|(_, value)| !value.is_empty())
        .map(|(field, value)| (field, value.to_string()))
        .collect();

    if entries.is_empty() {
        println!("No saved draft");
        return Ok(());
    }

    for (field, value) in entries {
        println!("{:<8} {}", field.as_str(), value);
    }

    Ok(())
}

/// Show the resolved configuration
fn show_config() -> Result<()> {
    let config = crate::config::config()?;

    println!(
        "Endpoint: {}",
        config.endpoint.as_deref().unwrap_or("(not set)")
    );
    println!("Confirmation target: {}", config.confirm_target);
    println!("Redirect delay: {:?}", config.redirect_delay);
    println!("Storage: {}", config.storage.display());
    match &config.config_file {
        Some(path) => println!("Config file: {}", path.display()),
        None => println!("Config file: (none found)"),
    }

    Ok(())
}
