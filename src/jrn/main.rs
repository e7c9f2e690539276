use clap::Parser;
use colored::*;
use jrn::api::JournalApi;
use jrn::commands::list::{ListOptions, DEFAULT_QUANTITY};
use jrn::commands::{CmdMessage, JournalPaths, MessageLevel};
use jrn::config::JournalConfig;
use jrn::error::Result;
use jrn::model::{Note, DISPLAY_TIMESTAMP_FORMAT};
use jrn::store::JournalStore;
use std::io::{self, Write};
use unicode_width::UnicodeWidthStr;

mod args;
use args::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("{} {}", "Error:".red(), e);
        std::process::exit(1);
    }
}

fn init_logger(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp_secs()
        .init();
}

struct AppContext {
    api: JournalApi,
    journal_name: String,
}

fn run(cli: Cli) -> Result<()> {
    let config_file = JournalConfig::config_file();
    let mut config = JournalConfig::load(&config_file)?;

    // `load` switches journals before the store opens, so the journal
    // created/opened below is already the new one.
    if let Some(Commands::Load { journal }) = &cli.command {
        let result = jrn::commands::load::run(&mut config, &config_file, journal)?;
        print_messages(&result.messages);
    }

    if !config.journal_dir.exists() {
        std::fs::create_dir_all(&config.journal_dir)?;
    }

    let store = JournalStore::open(config.db_file())?;
    let paths = JournalPaths::from_config(&config);
    let ctx = AppContext {
        api: JournalApi::new(store, paths),
        journal_name: config.journal_name.clone(),
    };

    match cli.command {
        Some(Commands::Add {
            content,
            category,
            style,
        }) => handle_add(&ctx, content, category, style),
        Some(Commands::Edit { id }) => handle_edit(&ctx, id),
        Some(Commands::List {
            quantity,
            all,
            category,
            reverse,
        }) => handle_list(&ctx, quantity, all, category, reverse),
        Some(Commands::Delete { criteria }) => handle_delete(&ctx, criteria),
        Some(Commands::Erase { yes }) => handle_erase(&ctx, yes),
        Some(Commands::Backup { filename }) => handle_backup(&ctx, filename),
        Some(Commands::Restore { filename }) => handle_restore(&ctx, filename),
        Some(Commands::Search {
            terms,
            category,
            quantity,
            all,
        }) => handle_search(&ctx, terms, category, quantity, all),
        Some(Commands::Categories { filter }) => handle_categories(&ctx, filter),
        Some(Commands::Load { .. }) => Ok(()),
        None => handle_list(&ctx, None, false, None, false),
    }
}

fn handle_add(
    ctx: &AppContext,
    content: Vec<String>,
    category: String,
    style: Option<String>,
) -> Result<()> {
    let result = ctx.api.add_note(&category, &content, style.as_deref())?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_edit(ctx: &AppContext, id: Option<i64>) -> Result<()> {
    let note = ctx.api.note_to_edit(id)?;
    println!("Editing note #{}: \"{}\"", note.id, note.content);
    print!("Enter new note text: ");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    let new_content = input.trim_end_matches(['\n', '\r']);

    // Empty input keeps the old text
    let new_content = if new_content.is_empty() {
        note.content.as_str()
    } else {
        new_content
    };

    let result = ctx.api.edit_note(note.id, new_content)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(
    ctx: &AppContext,
    quantity: Option<usize>,
    all: bool,
    category: Option<String>,
    reverse: bool,
) -> Result<()> {
    let options = ListOptions {
        category,
        quantity: quantity.unwrap_or(DEFAULT_QUANTITY),
        all,
        reverse,
    };
    let result = ctx.api.list_notes(&options)?;
    print_notes(&ctx.journal_name, &result.listed_notes);
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &AppContext, criteria: Vec<String>) -> Result<()> {
    let result = ctx.api.delete_notes(&criteria)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_erase(ctx: &AppContext, yes: bool) -> Result<()> {
    let result = ctx.api.erase_notes(yes)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_backup(ctx: &AppContext, filename: Option<String>) -> Result<()> {
    let result = ctx.api.backup(filename.as_deref())?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_restore(ctx: &AppContext, filename: Option<String>) -> Result<()> {
    let result = ctx.api.restore(filename.as_deref())?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_search(
    ctx: &AppContext,
    terms: Vec<String>,
    category: Option<String>,
    quantity: Option<usize>,
    all: bool,
) -> Result<()> {
    let result = ctx
        .api
        .search_notes(&terms, category.as_deref(), quantity, all)?;
    print_notes(&ctx.journal_name, &result.listed_notes);
    print_messages(&result.messages);
    Ok(())
}

fn handle_categories(ctx: &AppContext, filter: Option<String>) -> Result<()> {
    let result = ctx.api.categories(filter.as_deref())?;
    for category in &result.categories {
        println!("{}", category);
    }
    print_messages(&result.messages);
    Ok(())
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

const ID_HEADER: &str = "ID";
const TIMESTAMP_HEADER: &str = "Timestamp";
const CATEGORY_HEADER: &str = "Category";
const CONTENT_HEADER: &str = "Content";
// Width of the display timestamp format: "MM-DD-YYYY HH:MM:SS"
const TIMESTAMP_WIDTH: usize = 19;

fn print_notes(title: &str, notes: &[Note]) {
    if notes.is_empty() {
        println!("{}", title.bold());
        println!("No notes found.");
        return;
    }

    let id_width = notes
        .iter()
        .map(|n| n.id.to_string().len())
        .chain([ID_HEADER.len()])
        .max()
        .unwrap_or(ID_HEADER.len());
    let category_width = notes
        .iter()
        .map(|n| n.category.width())
        .chain([CATEGORY_HEADER.len()])
        .max()
        .unwrap_or(CATEGORY_HEADER.len());

    // Pad before coloring: escape codes would throw off format-width padding
    let header = format!(
        "{:<id_width$}  {:<TIMESTAMP_WIDTH$}  {:<category_width$}  {}",
        ID_HEADER, TIMESTAMP_HEADER, CATEGORY_HEADER, CONTENT_HEADER,
    );
    println!("{}", title.bold());
    println!("{}", header.dimmed());

    for note in notes {
        let id = format!("{:>id_width$}", note.id);
        let timestamp = note.timestamp.format(DISPLAY_TIMESTAMP_FORMAT).to_string();
        let category_padding = category_width.saturating_sub(note.category.width());
        println!(
            "{}  {}  {}{}  {}",
            id.cyan(),
            timestamp,
            note.category.green(),
            " ".repeat(category_padding),
            note.content
        );
    }
}
