//! 노트 명령어

use std::io::{BufRead, Write};

use notes_client::Note;

use crate::commands::http;
use crate::commands::OutputFormat;
use crate::config::CliConfig;

pub async fn list(
    config: &CliConfig,
    api_url: Option<&str>,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let api = http::client(config, api_url)?;
    http::require_login(&api)?;

    let notes = http::load_or_logout(&api, api.get_tasks()).await?;

    if format.print_json(&notes)? {
        return Ok(());
    }
    if notes.is_empty() {
        println!("No notes.");
        return Ok(());
    }
    for note in &notes {
        print_note(note);
    }
    Ok(())
}

pub async fn create(
    config: &CliConfig,
    api_url: Option<&str>,
    format: OutputFormat,
    title: &str,
    content: &str,
) -> anyhow::Result<()> {
    http::require_fields(&[title, content], "Title and content are required")?;
    let api = http::client(config, api_url)?;
    http::require_login(&api)?;

    let note = api.create_task(title, content).await?;

    if format.print_json(&note)? {
        return Ok(());
    }
    println!("Note created successfully!");
    print_note(&note);
    Ok(())
}

pub async fn update(
    config: &CliConfig,
    api_url: Option<&str>,
    format: OutputFormat,
    id: &str,
    title: &str,
    content: &str,
) -> anyhow::Result<()> {
    http::require_fields(&[title, content], "Title and content are required")?;
    let api = http::client(config, api_url)?;
    http::require_login(&api)?;

    let note = api.update_task(id, title, content).await?;

    if format.print_json(&note)? {
        return Ok(());
    }
    println!("Note updated successfully!");
    print_note(&note);
    Ok(())
}

pub async fn delete(
    config: &CliConfig,
    api_url: Option<&str>,
    format: OutputFormat,
    id: &str,
    yes: bool,
) -> anyhow::Result<()> {
    let api = http::client(config, api_url)?;
    http::require_login(&api)?;

    if !yes && !confirm("Are you sure you want to delete this note?")? {
        println!("Cancelled.");
        return Ok(());
    }

    let ack = api.delete_task(id).await?;

    if format.print_json(&ack)? {
        return Ok(());
    }
    println!("Note deleted successfully!");
    Ok(())
}

fn print_note(note: &Note) {
    let id = note.id().unwrap_or("?");
    let title = note.title().unwrap_or("(untitled)");
    match note.created_at() {
        Some(created_at) => println!("- {} {} (created {})", id, title, created_at),
        None => println!("- {} {}", id, title),
    }
    for line in note.content().unwrap_or_default().lines() {
        println!("    {}", line);
    }
}

fn confirm(prompt: &str) -> anyhow::Result<bool> {
    print!("{} [y/N] ", prompt);
    std::io::stdout().flush()?;

    let mut answer = String::new();
    std::io::stdin().lock().read_line(&mut answer)?;
    Ok(is_yes(&answer))
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
