use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod console;
mod logging;

use commands::Client;

#[derive(Parser)]
#[command(name = "hotelbook")]
#[command(about = "hotelbook - search, book and administer hotels from the terminal", long_about = None)]
struct Cli {
    /// Directory holding config.toml, session.toml and logs
    #[arg(long, global = true)]
    home: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search hotels in a city
    Search {
        city: String,
        #[arg(long)]
        checkin: String,
        #[arg(long)]
        checkout: String,
        #[arg(long, default_value_t = 2)]
        guests: u32,
    },
    /// Show a hotel and its availability
    Hotel {
        id: String,
        #[arg(long, default_value = "")]
        checkin: String,
        #[arg(long, default_value = "")]
        checkout: String,
        #[arg(long, default_value_t = 2)]
        guests: u32,
        /// Book the stay right away
        #[arg(long)]
        book: bool,
    },
    /// Book a stay for the logged-in user
    Book {
        hotel_id: String,
        #[arg(long)]
        checkin: String,
        #[arg(long)]
        checkout: String,
        #[arg(long, default_value_t = 2)]
        guests: u32,
    },
    /// Log in and keep the session
    Login {
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Create an account
    Register {
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        first_name: String,
        #[arg(long)]
        last_name: String,
        #[arg(long, default_value = "")]
        phone: String,
    },
    /// Forget the stored session
    Logout,
    /// Show the stored session
    Whoami,
    /// List my bookings
    Bookings,
    /// Hotel catalog administration (admin only)
    Admin {
        #[command(subcommand)]
        action: commands::admin::AdminAction,
    },
    /// Resolve a client path against the current session
    Route { path: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let client = Client::open(cli.home)?;
    let _log_guard = logging::init(&client.paths, &client.config)?;

    match cli.command {
        Commands::Search {
            city,
            checkin,
            checkout,
            guests,
        } => commands::search::run(&client, city, checkin, checkout, guests).await,
        Commands::Hotel {
            id,
            checkin,
            checkout,
            guests,
            book,
        } => commands::hotel::show(&client, id, checkin, checkout, guests, book).await,
        Commands::Book {
            hotel_id,
            checkin,
            checkout,
            guests,
        } => commands::hotel::book(&client, hotel_id, checkin, checkout, guests).await,
        Commands::Login { email, password } => {
            commands::auth::login(&client, email, password).await
        }
        Commands::Register {
            email,
            password,
            first_name,
            last_name,
            phone,
        } => commands::auth::register(&client, email, password, first_name, last_name, phone).await,
        Commands::Logout => commands::auth::logout(&client),
        Commands::Whoami => commands::auth::whoami(&client).await,
        Commands::Bookings => commands::bookings::list(&client).await,
        Commands::Admin { action } => commands::admin::run(&client, action).await,
        Commands::Route { path } => commands::route::resolve(&client, &path),
    }
}
