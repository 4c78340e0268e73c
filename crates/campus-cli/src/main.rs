use campus_cli::seeder::{self, PopulateConfig};
use campus_cli::superuser::{self, SuperuserFlags};
use clap::{Parser, Subcommand};
use dialoguer::{Input, Password};
use dotenvy::dotenv;

#[derive(Parser)]
#[command(name = "campus-cli")]
#[command(about = "Campus CLI - Operator tools for the Campus API", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Seed the database with fake departments, teachers, students,
    /// courses, classrooms, and enrollments
    Populate {
        /// Number of departments to create
        #[arg(long, default_value = "5")]
        departments: usize,

        /// Number of teachers to create
        #[arg(long, default_value = "5")]
        teachers: usize,

        /// Number of students to create
        #[arg(long, default_value = "5")]
        students: usize,

        /// Number of courses to create
        #[arg(long, default_value = "5")]
        courses: usize,

        /// Number of classrooms to create
        #[arg(long, default_value = "5")]
        classrooms: usize,
    },
    /// Delete all rows from every domain entity table (user accounts are
    /// kept)
    ClearData,
    /// Create a superuser account (superusers cannot be created through
    /// the API)
    CreateSuperuser {
        /// Phone number in the +92-XXXXXXXXX-D format
        #[arg(short = 'n', long)]
        phone_number: Option<String>,

        /// Password (will be prompted securely if not provided)
        #[arg(short = 'p', long)]
        password: Option<String>,

        /// First name of the superuser
        #[arg(short = 'f', long, default_value = "")]
        first_name: String,

        /// Last name of the superuser
        #[arg(short = 'l', long, default_value = "")]
        last_name: String,

        /// Staff flag; passing false is an error
        #[arg(long)]
        staff: Option<bool>,

        /// Superuser flag; passing false is an error
        #[arg(long)]
        superuser: Option<bool>,
    },
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

    match cli.command {
        Commands::Populate {
            departments,
            teachers,
            students,
            courses,
            classrooms,
        } => {
            let config = PopulateConfig {
                departments,
                teachers,
                students,
                courses,
                classrooms,
            };
            handle_populate(&pool, &config).await;
        }
        Commands::ClearData => handle_clear_data(&pool).await,
        Commands::CreateSuperuser {
            phone_number,
            password,
            first_name,
            last_name,
            staff,
            superuser,
        } => {
            let flags = SuperuserFlags {
                is_staff: staff,
                is_superuser: superuser,
            };
            handle_create_superuser(&pool, phone_number, password, first_name, last_name, flags)
                .await;
        }
    }
}

async fn handle_populate(pool: &sqlx::PgPool, config: &PopulateConfig) {
    match seeder::populate(pool, config).await {
        Ok(()) => println!("\n✅ Successfully populated the database with fake data."),
        Err(e) => {
            eprintln!("\n❌ Error populating the database: {}", e);
            std::process::exit(1);
        }
    }
}

async fn handle_clear_data(pool: &sqlx::PgPool) {
    match seeder::clear_all(pool).await {
        Ok(total) => println!("✅ Successfully cleared all populated data ({} rows).", total),
        Err(e) => {
            eprintln!("❌ Error clearing data: {}", e);
            std::process::exit(1);
        }
    }
}

async fn handle_create_superuser(
    pool: &sqlx::PgPool,
    phone_number: Option<String>,
    password: Option<String>,
    first_name: String,
    last_name: String,
    flags: SuperuserFlags,
) {
    let phone_number = phone_number.unwrap_or_else(|| {
        Input::new()
            .with_prompt("Phone number (+92-XXXXXXXXX-D)")
            .interact_text()
            .expect("Failed to read phone number")
    });

    let password = password.unwrap_or_else(|| {
        Password::new()
            .with_prompt("Password")
            .with_confirmation("Confirm password", "Passwords don't match")
            .interact()
            .expect("Failed to read password")
    });

    match superuser::create_superuser(
        pool,
        &phone_number,
        &password,
        &first_name,
        &last_name,
        flags,
    )
    .await
    {
        Ok(_) => {
            println!("\n✅ Superuser created successfully!");
            println!("   Phone: {}", phone_number);
        }
        Err(e) => {
            eprintln!("\n❌ Error creating superuser: {}", e);
            std::process::exit(1);
        }
    }
}
