use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;

use llmo::commands;
use llmo::runtime::Env;
use llmo::transport::Client;
use llmo::utils;

#[derive(Parser)]
#[command(name = "llmo", version, about = "LLM Operator command-line client")]
struct AppCli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// API key commands
    #[command(name = "api-keys", subcommand)]
    ApiKeys(ApiKeysCommand),
    /// Organization commands
    #[command(subcommand)]
    Organizations(OrganizationsCommand),
    /// Project commands
    #[command(subcommand)]
    Projects(ProjectsCommand),
    /// Legacy commands
    #[command(subcommand)]
    Legacy(LegacyCommand),
}

#[derive(clap::Args)]
struct Scope {
    /// Title of the organization
    #[arg(short = 'o', long = "organization-title")]
    organization_title: String,
    /// Title of the project
    #[arg(short = 'p', long = "project-title")]
    project_title: String,
}

#[derive(Subcommand)]
enum ApiKeysCommand {
    Create {
        /// Name of the API key
        #[arg(long)]
        name: String,
        #[command(flatten)]
        scope: Scope,
    },
    List {
        #[command(flatten)]
        scope: Scope,
    },
    Delete {
        /// Name of the API key
        #[arg(long)]
        name: String,
        #[command(flatten)]
        scope: Scope,
    },
}

#[derive(Subcommand)]
enum OrganizationsCommand {
    List,
}

#[derive(Subcommand)]
enum ProjectsCommand {
    List {
        /// Title of the organization
        #[arg(short = 'o', long = "organization-title")]
        organization_title: String,
    },
}

#[derive(Subcommand)]
enum LegacyCommand {
    /// Local notebook token store
    #[command(name = "notebook-token", subcommand)]
    NotebookToken(NotebookTokenCommand),
}

#[derive(Subcommand)]
enum NotebookTokenCommand {
    Save { notebook_id: String, token: String },
    Show { notebook_id: String },
}

async fn run_api_keys(client: &Client, cmd: ApiKeysCommand) -> Result<()> {
    match cmd {
        ApiKeysCommand::Create { name, scope } => {
            let (org, project) = commands::find_org_and_project(
                client,
                &scope.organization_title,
                &scope.project_title,
            )
            .await?;
            let key = commands::create_api_key(client, &org.id, &project.id, &name).await?;
            println!("Created a new API key. Secret: {}", key.secret);
        }
        ApiKeysCommand::List { scope } => {
            let (org, project) = commands::find_org_and_project(
                client,
                &scope.organization_title,
                &scope.project_title,
            )
            .await?;
            for key in commands::list_api_keys(client, &org.id, &project.id).await? {
                println!("{}\t{}\t{}", key.name, key.user.id, key.created_at);
            }
        }
        ApiKeysCommand::Delete { name, scope } => {
            let (org, project) = commands::find_org_and_project(
                client,
                &scope.organization_title,
                &scope.project_title,
            )
            .await?;
            let key = commands::find_api_key_by_name(client, &org.id, &project.id, &name)
                .await?
                .with_context(|| format!("API key {name:?} not found"))?;
            commands::delete_api_key(client, &org.id, &project.id, &key.id).await?;
            println!("Deleted the API key (ID: {:?}).", key.id);
        }
    }
    Ok(())
}

fn run_notebook_token(cmd: NotebookTokenCommand) -> Result<()> {
    match cmd {
        NotebookTokenCommand::Save { notebook_id, token } => {
            commands::save_notebook_token(&notebook_id, &token)?;
            println!("Saved the token for notebook {notebook_id:?}.");
        }
        NotebookTokenCommand::Show { notebook_id } => {
            println!("{}", commands::load_notebook_token(&notebook_id)?);
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    utils::logging::init();

    let args = AppCli::parse();
    debug!(version = llmo::VERSION, "starting");

    match args.command {
        Commands::Legacy(LegacyCommand::NotebookToken(cmd)) => run_notebook_token(cmd)?,
        Commands::ApiKeys(cmd) => {
            let client = Client::new(&Env::load()?);
            run_api_keys(&client, cmd).await?;
        }
        Commands::Organizations(OrganizationsCommand::List) => {
            let client = Client::new(&Env::load()?);
            for org in commands::list_organizations(&client).await? {
                println!("{}\t{}", org.id, org.title);
            }
        }
        Commands::Projects(ProjectsCommand::List { organization_title }) => {
            let client = Client::new(&Env::load()?);
            let org = commands::find_organization_by_title(&client, &organization_title)
                .await?
                .with_context(|| format!("organization {organization_title:?} not found"))?;
            for project in commands::list_projects(&client, &org.id).await? {
                println!("{}\t{}", project.id, project.title);
            }
        }
    }

    Ok(())
}
