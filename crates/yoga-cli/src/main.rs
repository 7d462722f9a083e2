use clap::{Parser, Subcommand};
use dialoguer::{Input, Password};
use dotenvy::dotenv;
use sqlx::SqlitePool;
use yoga_cli::admin::{create_admin, create_teacher};
use yoga_cli::seeder::{self, SeedConfig};
use yoga_config::DatabaseConfig;
use yoga_db::init_db_pool;

#[derive(Parser)]
#[command(name = "yoga-cli")]
#[command(about = "Yoga CLI - Administrative tools for the Yoga API", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create an administrator account
    CreateAdmin {
        /// First name of the admin
        #[arg(short = 'f', long)]
        first_name: Option<String>,

        /// Last name of the admin
        #[arg(short = 'l', long)]
        last_name: Option<String>,

        /// Email address
        #[arg(short = 'e', long)]
        email: Option<String>,

        /// Password (will be prompted securely if not provided)
        #[arg(short = 'p', long)]
        password: Option<String>,
    },
    /// Create a teacher
    CreateTeacher {
        #[arg(short = 'f', long)]
        first_name: String,

        #[arg(short = 'l', long)]
        last_name: String,
    },
    /// Seed the database with fake teachers, users and sessions
    Seed {
        #[arg(long, default_value = "5")]
        teachers: usize,

        #[arg(long, default_value = "40")]
        users: usize,

        #[arg(long, default_value = "12")]
        sessions: usize,

        /// Maximum participants per session
        #[arg(long, default_value = "8")]
        max_participants: usize,
    },
    /// Clear all seeded data (keeps admins)
    ClearSeed,
}

#[tokio::main]
async fn main() {
    dotenv().ok();

    let cli = Cli::parse();

    let pool = match init_db_pool(&DatabaseConfig::from_env()).await {
        Ok(pool) => pool,
        Err(e) => {
            eprintln!("❌ Failed to connect to database: {}", e);
            std::process::exit(1);
        }
    };

    match cli.command {
        Commands::CreateAdmin {
            first_name,
            last_name,
            email,
            password,
        } => handle_create_admin(&pool, first_name, last_name, email, password).await,
        Commands::CreateTeacher {
            first_name,
            last_name,
        } => handle_create_teacher(&pool, &first_name, &last_name).await,
        Commands::Seed {
            teachers,
            users,
            sessions,
            max_participants,
        } => {
            let config =
                SeedConfig::new(teachers, users, sessions).with_max_participants(max_participants);
            handle_seed(&pool, config).await
        }
        Commands::ClearSeed => handle_clear_seed(&pool).await,
    }
}

fn prompt_text(value: Option<String>, prompt: &str) -> String {
    if let Some(value) = value {
        return value;
    }

    match Input::new().with_prompt(prompt).interact_text() {
        Ok(value) => value,
        Err(e) => {
            eprintln!("❌ Failed to read {}: {}", prompt.to_lowercase(), e);
            std::process::exit(1);
        }
    }
}

async fn handle_create_admin(
    pool: &SqlitePool,
    first_name: Option<String>,
    last_name: Option<String>,
    email: Option<String>,
    password: Option<String>,
) {
    let first_name = prompt_text(first_name, "First name");
    let last_name = prompt_text(last_name, "Last name");
    let email = prompt_text(email, "Email address");

    let password = match password {
        Some(password) => password,
        None => match Password::new()
            .with_prompt("Password")
            .with_confirmation("Confirm password", "Passwords don't match")
            .interact()
        {
            Ok(password) => password,
            Err(e) => {
                eprintln!("❌ Failed to read password: {}", e);
                std::process::exit(1);
            }
        },
    };

    match create_admin(pool, &first_name, &last_name, &email, &password).await {
        Ok(_) => {
            println!("\n✅ Admin created successfully!");
            println!("   Email: {}", email);
            println!("   Name: {} {}", first_name, last_name);
        }
        Err(e) => {
            eprintln!("\n❌ Error creating admin: {}", e);
            std::process::exit(1);
        }
    }
}

async fn handle_create_teacher(pool: &SqlitePool, first_name: &str, last_name: &str) {
    match create_teacher(pool, first_name, last_name).await {
        Ok(id) => println!("✅ Created teacher {} {} (id {})", first_name, last_name, id),
        Err(e) => {
            eprintln!("\n❌ Error creating teacher: {}", e);
            std::process::exit(1);
        }
    }
}

async fn handle_seed(pool: &SqlitePool, config: SeedConfig) {
    if let Err(e) = seeder::seed_all(pool, config).await {
        eprintln!("\n❌ Error seeding database: {}", e);
        std::process::exit(1);
    }
}

async fn handle_clear_seed(pool: &SqlitePool) {
    if let Err(e) = seeder::clear_all(pool).await {
        eprintln!("\n❌ Error clearing seeded data: {}", e);
        std::process::exit(1);
    }
}
