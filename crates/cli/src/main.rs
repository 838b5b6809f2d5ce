//! Terminal front end for the Biblio library service.
//!
//! One subcommand per UI action: register/list/search/delete books, register/
//! list/delete users, borrow/return copies. Mutations print the refreshed
//! listing afterwards, and every failure travels the same path: up to `main`,
//! once to stderr, non-zero exit.

use std::io::{self, Write};

use anyhow::Context;
use clap::{Parser, Subcommand};

use biblio_client::{ApiClient, Book, NewBook, NewUser, User};
use biblio_kernel::settings::Settings;

#[derive(Parser)]
#[command(name = "biblio", version, about = "Library-management front end")]
struct Cli {
    /// API base URL; defaults to the configured client.base_url.
    #[arg(long, env = "BIBLIO_API_BASE", global = true)]
    base_url: Option<String>,

    /// Skip confirmation prompts.
    #[arg(long, global = true)]
    yes: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Manage books
    #[command(subcommand)]
    Books(BooksCommand),
    /// Manage users
    #[command(subcommand)]
    Users(UsersCommand),
    /// Borrow and return copies
    #[command(subcommand)]
    Loans(LoansCommand),
}

#[derive(Subcommand)]
enum BooksCommand {
    /// List all books
    List,
    /// Search books by title or author
    Search { query: String },
    /// Register a book
    Add {
        #[arg(long)]
        id: String,
        #[arg(long)]
        title: String,
        #[arg(long)]
        author: String,
        #[arg(long)]
        isbn: Option<String>,
    },
    /// Delete a book
    Rm { id: String },
}

#[derive(Subcommand)]
enum UsersCommand {
    /// List all users
    List,
    /// Register a user
    Add {
        #[arg(long)]
        id: String,
        #[arg(long)]
        name: String,
    },
    /// Delete a user
    Rm { id: String },
}

#[derive(Subcommand)]
enum LoansCommand {
    /// Borrow a book for a user
    Borrow {
        #[arg(long)]
        user: String,
        #[arg(long)]
        book: String,
    },
    /// Return a borrowed book
    Return {
        #[arg(long)]
        user: String,
        #[arg(long)]
        book: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let settings = Settings::load().with_context(|| "failed to load Biblio settings")?;
    biblio_telemetry::init(&settings.telemetry);

    let base_url = cli
        .base_url
        .clone()
        .unwrap_or_else(|| settings.client.base_url.clone());
    tracing::debug!(%base_url, "using API base URL");
    let client = ApiClient::new(&base_url);

    match cli.command {
        Command::Books(cmd) => run_books(&client, cmd, cli.yes).await,
        Command::Users(cmd) => run_users(&client, cmd, cli.yes).await,
        Command::Loans(cmd) => run_loans(&client, cmd).await,
    }
}

async fn run_books(client: &ApiClient, cmd: BooksCommand, assume_yes: bool) -> anyhow::Result<()> {
    match cmd {
        BooksCommand::List => {
            print_books(&client.list_books().await?);
        }
        BooksCommand::Search { query } => {
            print_books(&client.search_books(&query).await?);
        }
        BooksCommand::Add {
            id,
            title,
            author,
            isbn,
        } => {
            let created = client
                .create_book(&NewBook {
                    id,
                    title,
                    author,
                    isbn,
                })
                .await?;
            println!("registered book {}", created.id);
            print_books(&client.list_books().await?);
        }
        BooksCommand::Rm { id } => {
            if !confirm(&format!("delete book {id}?"), assume_yes)? {
                println!("aborted");
                return Ok(());
            }
            client.delete_book(&id).await?;
            println!("deleted book {id}");
            print_books(&client.list_books().await?);
        }
    }
    Ok(())
}

async fn run_users(client: &ApiClient, cmd: UsersCommand, assume_yes: bool) -> anyhow::Result<()> {
    match cmd {
        UsersCommand::List => {
            print_users(&client.list_users().await?);
        }
        UsersCommand::Add { id, name } => {
            let created = client.create_user(&NewUser { id, name }).await?;
            println!("registered user {}", created.id);
            print_users(&client.list_users().await?);
        }
        UsersCommand::Rm { id } => {
            if !confirm(&format!("delete user {id}?"), assume_yes)? {
                println!("aborted");
                return Ok(());
            }
            client.delete_user(&id).await?;
            println!("deleted user {id}");
            print_users(&client.list_users().await?);
        }
    }
    Ok(())
}

async fn run_loans(client: &ApiClient, cmd: LoansCommand) -> anyhow::Result<()> {
    match cmd {
        LoansCommand::Borrow { user, book } => {
            let status = client.borrow(&user, &book).await?;
            println!("{}: {book} -> {user}", status.status);
        }
        LoansCommand::Return { user, book } => {
            let status = client.return_book(&user, &book).await?;
            println!("{}: {book} <- {user}", status.status);
        }
    }
    print_books(&client.list_books().await?);
    Ok(())
}

fn print_books(books: &[Book]) {
    if books.is_empty() {
        println!("no books registered");
        return;
    }
    let id_w = column_width("ID", books.iter().map(|b| b.id.len()));
    let title_w = column_width("TITLE", books.iter().map(|b| b.title.len()));
    let author_w = column_width("AUTHOR", books.iter().map(|b| b.author.len()));

    println!("{:<id_w$}  {:<title_w$}  {:<author_w$}  AVAILABLE", "ID", "TITLE", "AUTHOR");
    for book in books {
        println!(
            "{:<id_w$}  {:<title_w$}  {:<author_w$}  {}",
            book.id,
            book.title,
            book.author,
            if book.available { "yes" } else { "no" }
        );
    }
}

fn print_users(users: &[User]) {
    if users.is_empty() {
        println!("no users registered");
        return;
    }
    let id_w = column_width("ID", users.iter().map(|u| u.id.len()));

    println!("{:<id_w$}  NAME", "ID");
    for user in users {
        println!("{:<id_w$}  {}", user.id, user.name);
    }
}

fn column_width(header: &str, widths: impl Iterator<Item = usize>) -> usize {
    widths.chain(std::iter::once(header.len())).max().unwrap_or(0)
}

fn confirm(prompt: &str, assume_yes: bool) -> anyhow::Result<bool> {
    if assume_yes {
        return Ok(true);
    }
    print!("{prompt} [y/N] ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    let answer = line.trim().to_lowercase();
    Ok(answer == "y" || answer == "yes")
}
