//! CLI command handlers

use anyhow::{Context, Result};
use clap_complete::generate;
use colored::Colorize;
use dialoguer::Input;
use futures::stream::{self, StreamExt};
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, warn};

use super::render::{print_main_menu, print_page, print_reply, summarize};
use cinepulse::catalog::{CatalogStore, Category};
use cinepulse::navigation::{total_pages, UserId, BACK, MAIN_MENU, NEXT};
use cinepulse::{BotConfig, CatalogBot, Notice, Reply};

const QUIT: &str = "/quit";

/// Where configuration and catalog data come from
#[derive(Debug, Clone, Default)]
pub struct Sources {
    pub config: Option<PathBuf>,
    pub data_dir: Option<PathBuf>,
}

/// Load config and catalog, and build the bot
async fn load_bot(sources: &Sources) -> Result<CatalogBot> {
    let mut config = BotConfig::load(sources.config.as_deref())?;
    if let Some(dir) = &sources.data_dir {
        config.data_dir = dir.clone();
    }

    let store = CatalogStore::load(&config.data_dir)
        .await
        .with_context(|| format!("Failed to load catalog from {:?}", config.data_dir))?;

    if store.is_empty() {
        warn!(
            "Catalog at {} is empty; check --data-dir",
            config.data_dir.display()
        );
    }

    Ok(CatalogBot::new(Arc::new(store), &config))
}

/// Handle the `chat` command
pub async fn chat(sources: &Sources, user: UserId) -> Result<()> {
    let bot = load_bot(sources).await?;

    println!("{}", "🎬 Welcome to CinePulseBot! 🍿".green().bold());
    println!(
        "Shortcuts: {} {} {} {}, a number picks an entry, {} exits.",
        "/next".cyan(),
        "/back".cyan(),
        "/menu".cyan(),
        "/c <category>".cyan(),
        QUIT.cyan()
    );
    println!();
    print_main_menu();

    let mut last_page: Option<Vec<String>> = None;
    loop {
        let line: String = Input::new()
            .with_prompt(format!("user {}", user))
            .allow_empty(true)
            .interact_text()
            .context("Failed to read input")?;

        let line = line.trim();
        if line == QUIT {
            break;
        }
        if line.is_empty() {
            continue;
        }

        let text = expand_shortcut(line, last_page.as_deref());
        let reply = bot.handle_input(user, &text);

        match &reply {
            Reply::Menu(page) => last_page = Some(page.labels().map(str::to_string).collect()),
            Reply::MainMenu => last_page = None,
            _ => {}
        }

        println!();
        print_reply(&reply);
        println!();
    }

    Ok(())
}

/// Map terminal shortcuts onto the button text a chat client would send
fn expand_shortcut(line: &str, page_labels: Option<&[String]>) -> String {
    match line {
        "/next" => return NEXT.to_string(),
        "/back" => return BACK.to_string(),
        "/menu" => return MAIN_MENU.to_string(),
        _ => {}
    }

    if let Some(slug) = line.strip_prefix("/c ") {
        if let Some(category) = Category::ALL.into_iter().find(|c| c.slug() == slug.trim()) {
            return category.button().to_string();
        }
    }

    if let (Ok(number), Some(labels)) = (line.parse::<usize>(), page_labels) {
        if let Some(label) = number.checked_sub(1).and_then(|i| labels.get(i)) {
            return label.clone();
        }
    }

    line.to_string()
}

/// Handle the `show` command
pub async fn show(sources: &Sources, category: Category, page: usize) -> Result<()> {
    let bot = load_bot(sources).await?;

    match bot.show_category(0, category, page) {
        Reply::Menu(rendered) => print_page(&rendered),
        other => print_reply(&other),
    }

    Ok(())
}

/// Handle the `search` command
pub async fn search(sources: &Sources, query: &str) -> Result<()> {
    let bot = load_bot(sources).await?;

    match bot.search(query) {
        Some(detail) => print_reply(&Reply::Entry(detail)),
        None => println!("{}", Notice::NoResults.message().yellow()),
    }

    Ok(())
}

/// Handle the `catalog` command
pub async fn catalog(sources: &Sources) -> Result<()> {
    let bot = load_bot(sources).await?;
    let store = bot.store();

    println!("{}", "Catalog:".green().bold());
    for category in Category::ALL {
        let count = store.len(category);
        println!(
            "  {:<10} {:>5} entries  {:>3} page(s)  nav: {:?}",
            category.slug().cyan(),
            count,
            total_pages(count),
            bot.nav_style(category)
        );
    }
    println!();
    println!(
        "  {} entries, {} distinct searchable titles",
        store.total_entries(),
        bot.search_index().len()
    );

    Ok(())
}

/// Parse a transcript into per-user message lists, keeping first-seen user
/// order and each user's message order
fn parse_transcript(contents: &str) -> Result<Vec<(UserId, Vec<String>)>> {
    let mut order = Vec::new();
    let mut by_user: HashMap<UserId, Vec<String>> = HashMap::new();

    for (number, line) in contents.lines().enumerate() {
        if line.trim().is_empty() || line.starts_with('#') {
            continue;
        }

        let (user, text) = line
            .split_once('\t')
            .with_context(|| format!("Line {}: expected `user_id<TAB>text`", number + 1))?;
        let user: UserId = user
            .trim()
            .parse()
            .with_context(|| format!("Line {}: invalid user id {:?}", number + 1, user))?;

        by_user
            .entry(user)
            .or_insert_with(|| {
                order.push(user);
                Vec::new()
            })
            .push(text.to_string());
    }

    Ok(order
        .into_iter()
        .map(|user| {
            let messages = by_user.remove(&user).unwrap_or_default();
            (user, messages)
        })
        .collect())
}

/// Handle the `replay` command
pub async fn replay(sources: &Sources, file: &Path, parallel: usize) -> Result<()> {
    let contents = tokio::fs::read_to_string(file)
        .await
        .with_context(|| format!("Failed to read transcript {:?}", file))?;
    let conversations = parse_transcript(&contents)?;

    let bot = Arc::new(load_bot(sources).await?);
    info!(
        "Replaying {} conversation(s), {} at a time",
        conversations.len(),
        parallel.max(1)
    );

    let results: Vec<_> = stream::iter(conversations)
        .map(|(user, messages)| {
            let bot = Arc::clone(&bot);
            tokio::spawn(async move {
                let replies: Vec<(String, String)> = messages
                    .into_iter()
                    .map(|text| {
                        let reply = bot.handle_input(user, &text);
                        (text, summarize(&reply))
                    })
                    .collect();
                (user, replies)
            })
        })
        .buffer_unordered(parallel.max(1))
        .collect()
        .await;

    let mut transcripts = Vec::with_capacity(results.len());
    for result in results {
        transcripts.push(result.context("Replay task panicked")?);
    }
    transcripts.sort_by_key(|(user, _)| *user);

    for (user, replies) in transcripts {
        println!("{}", format!("User {}", user).green().bold());
        for (text, reply) in replies {
            println!("  {} {}", ">".cyan(), text);
            println!("    {}", reply);
        }
        println!();
    }

    Ok(())
}

/// Handle the `init-config` command
pub fn init_config(force: bool) -> Result<()> {
    let path = BotConfig::config_path()?;
    if path.exists() && !force {
        anyhow::bail!(
            "Config already exists at {}. Use --force to overwrite.",
            path.display()
        );
    }

    let path = BotConfig::default().save()?;
    println!("Wrote default config to {}", path.display().to_string().green());

    Ok(())
}

/// Handle the `completion` command
pub fn completion(shell: clap_complete::Shell) {
    let mut cmd = super::Cli::command();
    generate(shell, &mut cmd, "cinepulse", &mut io::stdout());
}

// Extension trait for Cli to get clap Command
impl super::Cli {
    fn command() -> clap::Command {
        <Self as clap::CommandFactory>::command()
    }
}
