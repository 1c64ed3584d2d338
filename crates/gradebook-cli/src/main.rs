use clap::{Parser, Subcommand};
use dialoguer::{Input, Password};
use dotenvy::dotenv;
use gradebook_cli::deputy::create_deputy;
use gradebook_cli::seeder::{self, SeedConfig};
use gradebook_db::run_migrations;
use sqlx::PgPool;

#[derive(Parser)]
#[command(name = "gradebook-cli")]
#[command(about = "Gradebook CLI - Administrative tools for Gradebook", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a deputy account
    CreateDeputy {
        /// Login name
        #[arg(short = 'u', long)]
        username: Option<String>,

        /// Password (will be prompted securely if not provided)
        #[arg(short = 'p', long)]
        password: Option<String>,
    },
    /// Seed the database with fake classes, teachers, subjects and grades
    Seed {
        /// Number of classes
        #[arg(short = 'c', long, default_value = "6")]
        classes: usize,

        /// Number of students per class
        #[arg(short = 's', long, default_value = "20")]
        students: usize,

        /// Number of teachers
        #[arg(short = 't', long, default_value = "5")]
        teachers: usize,

        /// Number of subjects
        #[arg(long, default_value = "8")]
        subjects: usize,

        /// Grades per student, subject and quarter
        #[arg(short = 'g', long, default_value = "3")]
        grades: usize,
    },
    /// Clear seeded data (keeps deputy accounts)
    ClearSeed,
}

#[tokio::main]
async fn main() {
    dotenv().ok();

    let cli = Cli::parse();

    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await
        .expect("Failed to connect to database");

    if let Err(e) = run_migrations(&pool).await {
        eprintln!("❌ Failed to run migrations: {}", e);
        std::process::exit(1);
    }

    match cli.command {
        Commands::CreateDeputy { username, password } => {
            handle_create_deputy(&pool, username, password).await
        }
        Commands::Seed {
            classes,
            students,
            teachers,
            subjects,
            grades,
        } => {
            let config = SeedConfig::new(classes)
                .with_students_per_class(students)
                .with_teachers(teachers)
                .with_subjects(subjects)
                .with_grades_per_quarter(grades);
            handle_seed(&pool, config).await
        }
        Commands::ClearSeed => handle_clear_seed(&pool).await,
    }
}

async fn handle_create_deputy(pool: &PgPool, username: Option<String>, password: Option<String>) {
    let username = username.unwrap_or_else(|| {
        Input::new()
            .with_prompt("Username")
            .interact_text()
            .expect("Failed to read username")
    });

    let password = password.unwrap_or_else(|| {
        Password::new()
            .with_prompt("Password")
            .with_confirmation("Confirm password", "Passwords don't match")
            .interact()
            .expect("Failed to read password")
    });

    match create_deputy(pool, &username, &password).await {
        Ok(id) => {
            println!("\n✅ Deputy created successfully!");
            println!("   Username: {}", username.trim());
            println!("   User id: {}", id);
        }
        Err(e) => {
            eprintln!("\n❌ Error creating deputy: {}", e);
            std::process::exit(1);
        }
    }
}

async fn handle_seed(pool: &PgPool, config: SeedConfig) {
    if let Err(e) = seeder::seed_all(pool, config).await {
        eprintln!("\n❌ Error seeding database: {}", e);
        std::process::exit(1);
    }
}

async fn handle_clear_seed(pool: &PgPool) {
    if let Err(e) = seeder::clear_all(pool).await {
        eprintln!("\n❌ Error clearing seeded data: {}", e);
        std::process::exit(1);
    }
}
