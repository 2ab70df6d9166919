//! Terminal rendering of bot replies

use colored::Colorize;

use cinepulse::bot::{main_menu, EntryDetail, Reply};
use cinepulse::caption::Delivery;
use cinepulse::navigation::Page;

pub const SEARCH_PROMPT: &str = "🔍 Please type the name of the movie or series to search.";

/// Print a reply the way a chat client would lay it out
pub fn print_reply(reply: &Reply) {
    match reply {
        Reply::Menu(page) => print_page(page),
        Reply::Entry(detail) => print_entry(detail),
        Reply::MainMenu => {
            println!("{}", "🏠 Back to main menu".green());
            print_main_menu();
        }
        Reply::SearchPrompt => println!("{}", SEARCH_PROMPT.cyan()),
        Reply::HowToUse => println!("{}", "(usage guide is sent by the chat transport)".dimmed()),
        Reply::RequestContent => {
            println!("{}", "(content requests are handled by the chat transport)".dimmed())
        }
        Reply::Notice(notice) => println!("{}", notice.message().yellow()),
    }
}

/// Print the top-level keyboard
pub fn print_main_menu() {
    for row in main_menu() {
        println!("  {}", row.join("  |  "));
    }
}

/// Print a category page, numbering labels so they can be picked by index
pub fn print_page(page: &Page) {
    println!(
        "{}  {}",
        page.heading.bold(),
        format!("(page {}/{})", page.number, page.total_pages).dimmed()
    );

    let mut index = 1;
    for row in &page.rows {
        let cells: Vec<String> = row
            .iter()
            .map(|label| {
                let cell = format!("{:>2}. {}", index, label);
                index += 1;
                cell
            })
            .collect();
        println!("  {}", cells.join("    "));
    }

    for row in &page.controls {
        println!("  {}", row.join("  |  ").cyan());
    }
}

fn print_entry(detail: &EntryDetail) {
    match &detail.delivery {
        Delivery::Photo { poster, caption } => {
            println!("{} {}", "[photo]".magenta(), poster);
            println!("{}", caption);
        }
        Delivery::Split { poster, caption } => {
            println!("{} {}", "[photo]".magenta(), poster);
            println!("{}", "[message]".magenta());
            println!("{}", caption);
        }
        Delivery::Text { text } => println!("{}", text),
    }
}

/// One-line description of a reply, for transcripts
pub fn summarize(reply: &Reply) -> String {
    match reply {
        Reply::Menu(page) => format!(
            "menu {} page {}/{} ({} entries)",
            page.category,
            page.number,
            page.total_pages,
            page.labels().count()
        ),
        Reply::Entry(detail) => {
            let kind = match detail.delivery {
                Delivery::Photo { .. } => "photo",
                Delivery::Split { .. } => "photo + message",
                Delivery::Text { .. } => "text",
            };
            format!("entry {:?} from {} [{}]", detail.title, detail.category, kind)
        }
        Reply::MainMenu => "main menu".to_string(),
        Reply::SearchPrompt => "search prompt".to_string(),
        Reply::HowToUse => "how to use".to_string(),
        Reply::RequestContent => "request content".to_string(),
        Reply::Notice(notice) => notice.message().to_string(),
    }
}
