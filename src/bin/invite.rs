//! Command-line companion for the wedding invitation builder.
//!
//! Builds share links, inspects links guests received, and renders finished
//! invitations to HTML files without starting the web server.
//!
//! # Usage
//!
//! ```bash
//! # List the available designs
//! cargo run --bin invite -- templates
//!
//! # Build a share link
//! cargo run --bin invite -- link --bride "Sarah" --groom "Michael" \
//!     --date 2024-09-21T16:00 --venue "Grand Plaza Hotel" \
//!     --address "https://maps.app.goo.gl/example123" --template elegant-floral
//!
//! # Show what a share link contains
//! cargo run --bin invite -- decode "https://invites.example.com/invite?data=..."
//!
//! # Render an invitation (from flags or from a share link) to a file
//! cargo run --bin invite -- render --from-link "https://..." --out invitation.html
//!
//! # Interactive editor
//! cargo run --bin invite -- edit
//! ```
//!
//! # Environment Variables
//!
//! - `PUBLIC_ORIGIN`: Origin share links point at (default: `http://localhost:3000`)
//! - `TEMPLATES_DIR`: Directory with `template<N>.html` files (default: `static/templates`)

use wedding_invite::application::services::{ComposeRequest, ComposedInvitation, InvitationService};
use wedding_invite::application::session::{InvitationSession, SubmitOutcome};
use wedding_invite::config::Config;
use wedding_invite::domain::entities::{QrMode, WeddingData};
use wedding_invite::domain::share_codec;
use wedding_invite::error::{AppError, field_messages};
use wedding_invite::server::build_state;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input, Select};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::task::JoinHandle;

/// CLI tool for wedding invitations.
#[derive(Parser)]
#[command(name = "invite")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the template catalog
    Templates,

    /// Build a share link
    Link {
        #[command(flatten)]
        invitation: InvitationArgs,
    },

    /// Show the contents of a share link or token
    Decode {
        /// Full share link or bare token
        link: String,
    },

    /// Render a finished invitation to an HTML file
    Render {
        #[command(flatten)]
        invitation: InvitationArgs,

        /// Render the invitation held by this share link instead of the flags
        #[arg(long, conflicts_with_all = ["bride", "groom", "date", "venue", "address"])]
        from_link: Option<String>,

        /// Output file (default: `<bride>-<groom>-wedding-invitation.html`)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Fill in the details interactively and try templates
    Edit,
}

/// Wedding details and presentation choices given as flags.
#[derive(Args)]
struct InvitationArgs {
    #[arg(long)]
    bride: Option<String>,

    #[arg(long)]
    groom: Option<String>,

    /// Date and time, e.g. 2024-09-21T16:00
    #[arg(long)]
    date: Option<String>,

    #[arg(long)]
    venue: Option<String>,

    /// Venue address or maps link
    #[arg(long)]
    address: Option<String>,

    /// Template id (see `templates`)
    #[arg(short, long, default_value = "elegant-floral")]
    template: String,

    /// What the QR code points at: venue or invitation
    #[arg(long, default_value = "venue")]
    qr: QrMode,
}

impl InvitationArgs {
    fn into_request(self) -> Result<ComposeRequest> {
        let data = WeddingData {
            bride_name: self.bride.unwrap_or_default(),
            groom_name: self.groom.unwrap_or_default(),
            wedding_date_time: self.date.unwrap_or_default(),
            venue_name: self.venue.unwrap_or_default(),
            venue_address: self.address.unwrap_or_default(),
        };

        if let Some(field) = data.first_missing_field() {
            anyhow::bail!("Missing wedding detail: {}", field);
        }

        Ok(ComposeRequest::new(data, self.template, self.qr))
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = Config::from_env()?;
    let service = build_state(&config).invitation_service.as_ref().clone();

    match cli.command {
        Commands::Templates => list_templates(&service),
        Commands::Link { invitation } => print_link(&service, invitation.into_request()?),
        Commands::Decode { link } => decode_link(&link),
        Commands::Render {
            invitation,
            from_link,
            out,
        } => {
            let request = match from_link {
                Some(link) => request_from_link(&link)?,
                None => invitation.into_request()?,
            };
            render_to_file(&service, request, out).await
        }
        Commands::Edit => edit(service).await,
    }
}

/// Prints the catalog in navigation order.
fn list_templates(service: &InvitationService) -> Result<()> {
    println!("{}", "Templates".bright_blue().bold());
    println!();

    for (index, template) in service.catalog().all().iter().enumerate() {
        println!(
            "  {:<3} {:<22} {}",
            (index + 1).to_string().bright_black(),
            template.id.cyan(),
            template.name.bright_white()
        );
        println!("      {}", template.description.bright_black());
    }

    println!();
    println!(
        "  Total: {}",
        service.catalog().len().to_string().bright_white().bold()
    );
    Ok(())
}

fn print_link(service: &InvitationService, request: ComposeRequest) -> Result<()> {
    let outcome = service
        .share(&request)
        .map_err(|e| anyhow::anyhow!("Cannot build link: {}", e))?;

    println!("{}", "Share link".bright_blue().bold());
    println!();
    println!("  {}", outcome.share_link.bright_yellow());
    println!();
    println!("  QR ({}): {}", request.mode, outcome.qr_payload.cyan());
    Ok(())
}

fn request_from_link(link: &str) -> Result<ComposeRequest> {
    let token = share_codec::token_from_link(link)?;
    let record = share_codec::decode(&token).context("Invalid or incomplete invitation link")?;
    Ok(record.into())
}

/// Prints every field carried by a share link.
fn decode_link(link: &str) -> Result<()> {
    let request = request_from_link(link)?;
    let data = &request.data;

    println!("{}", "Invitation".bright_blue().bold());
    println!();
    println!("  Bride:    {}", data.bride_name.cyan());
    println!("  Groom:    {}", data.groom_name.cyan());
    println!("  Date:     {}", data.wedding_date_time);
    println!("  Venue:    {}", data.venue_name);
    println!("  Address:  {}", data.venue_address);
    println!("  Template: {}", request.template_id.bright_white());
    println!("  QR:       {}", request.mode);
    Ok(())
}

async fn render_to_file(
    service: &InvitationService,
    request: ComposeRequest,
    out: Option<PathBuf>,
) -> Result<()> {
    let composed = service
        .compose(request)
        .await
        .map_err(|e| anyhow::anyhow!("Cannot render invitation: {}", e))?;

    let path = write_invitation(&composed, out).await?;
    println!(
        "{} {}",
        "Saved".green().bold(),
        path.display().to_string().bright_white()
    );
    println!("  Share link: {}", composed.share.share_link.bright_yellow());
    Ok(())
}

fn report_outcome(outcome: Result<SubmitOutcome, AppError>) {
    match outcome {
        Ok(SubmitOutcome::Applied(composed)) => {
            println!();
            println!(
                "  {} (Template {} of {})",
                composed.descriptor.name.bright_white().bold(),
                composed.position,
                composed.total
            );
            println!("  Share link: {}", composed.share.share_link.bright_yellow());
            println!();
        }
        Ok(SubmitOutcome::Stale { request_id }) => {
            println!("  {}", format!("Render #{} superseded by a newer pick", request_id).dimmed());
        }
        Err(e) => println!("{} {}", "Failed:".red().bold(), e),
    }
}

async fn write_invitation(composed: &ComposedInvitation, out: Option<PathBuf>) -> Result<PathBuf> {
    let path = out.unwrap_or_else(|| PathBuf::from(composed.download_file_name()));

    tokio::fs::write(&path, &composed.html)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))?;

    Ok(path)
}

/// Prompts for one field, keeping `initial` on an empty answer.
fn prompt(label: &str, initial: &str) -> Result<String> {
    Ok(Input::<String>::new()
        .with_prompt(label)
        .with_initial_text(initial)
        .interact_text()?)
}

/// Interactive editing loop.
///
/// # Flow
///
/// 1. Prompt for the wedding details (prefilled with sample data)
/// 2. Pick a template and a QR mode; rendering starts in the background
/// 3. Pick again or stop; finished renders are reported as they complete
/// 4. Wait for the rest, then offer to save the current invitation
async fn edit(service: InvitationService) -> Result<()> {
    println!("{}", "Create Your Wedding Invitation".bright_blue().bold());
    println!();

    let sample = WeddingData::sample();
    let data = WeddingData {
        bride_name: prompt("Bride's Name", &sample.bride_name)?,
        groom_name: prompt("Groom's Name", &sample.groom_name)?,
        wedding_date_time: prompt("Wedding Date & Time", &sample.wedding_date_time)?,
        venue_name: prompt("Venue Name", &sample.venue_name)?,
        venue_address: prompt("Venue Address or Google Maps Link", &sample.venue_address)?,
    };

    if let Err(errors) = validator::Validate::validate(&data) {
        for (field, message) in field_messages(&errors) {
            println!("  {} {}", field.red(), message);
        }
        anyhow::bail!("Wedding details are incomplete");
    }

    let names: Vec<String> = service
        .catalog()
        .all()
        .iter()
        .map(|t| t.name.clone())
        .collect();
    let ids: Vec<String> = service.catalog().all().iter().map(|t| t.id.clone()).collect();
    let session = Arc::new(InvitationSession::new(service));
    let mut pending: Vec<JoinHandle<Result<SubmitOutcome, AppError>>> = Vec::new();

    // Picks render in the background. Only the latest one becomes current.
    let mut selected = 0;
    loop {
        selected = Select::new()
            .with_prompt("Template")
            .items(&names)
            .default(selected)
            .interact()?;

        let mode = match Select::new()
            .with_prompt("QR code")
            .items(&["Venue Location", "Digital Invitation"])
            .default(0)
            .interact()?
        {
            0 => QrMode::Venue,
            _ => QrMode::Invitation,
        };

        let request = ComposeRequest::new(data.clone(), ids[selected].clone(), mode);
        let worker = Arc::clone(&session);
        pending.push(tokio::spawn(async move { worker.submit(request).await }));

        let again = Confirm::new()
            .with_prompt("Try another template?")
            .default(false)
            .interact()?;

        let (finished, running): (Vec<_>, Vec<_>) =
            pending.into_iter().partition(|handle| handle.is_finished());
        pending = running;
        for handle in finished {
            report_outcome(handle.await?);
        }

        if !again {
            break;
        }
    }

    for handle in pending {
        report_outcome(handle.await?);
    }

    let Some(composed) = session.current() else {
        return Ok(());
    };

    if Confirm::new()
        .with_prompt(format!("Save {}?", composed.descriptor.name))
        .default(true)
        .interact()?
    {
        let path = write_invitation(&composed, None).await?;
        println!("{} {}", "Saved".green().bold(), path.display());
    }

    Ok(())
}
