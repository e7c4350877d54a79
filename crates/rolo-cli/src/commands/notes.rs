use crate::commands::{print_json, Context};
use crate::prompt::StdinChooser;
use crate::util::{now_utc, resolve_selection};
use anyhow::Result;
use clap::{Args, Subcommand};
use rolo_core::Note;

#[derive(Debug, Subcommand)]
pub enum NoteCommand {
    /// Attach a note to a contact
    Add(AddNoteArgs),
    /// Rewrite a selected note
    Edit(EditNoteArgs),
    /// Delete a selected note
    Rm(RemoveNoteArgs),
    /// List a contact's notes
    Ls(ListNotesArgs),
    /// Search notes and show the selected one
    Find(FindNoteArgs),
    /// Show the selected note carrying an exact tag
    FindByTag(FindByTagArgs),
}

#[derive(Debug, Args)]
pub struct AddNoteArgs {
    pub contact: String,
    #[arg(long)]
    pub content: String,
    #[arg(long)]
    pub title: Option<String>,
    /// Comma-separated tags
    #[arg(long)]
    pub tags: Option<String>,
}

#[derive(Debug, Args)]
pub struct EditNoteArgs {
    pub contact: String,
    /// Substring matched against content, title and tags
    pub query: String,
    #[arg(long)]
    pub content: String,
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long)]
    pub tags: Option<String>,
}

#[derive(Debug, Args)]
pub struct RemoveNoteArgs {
    pub contact: String,
    pub query: String,
}

#[derive(Debug, Args)]
pub struct ListNotesArgs {
    pub contact: String,
}

#[derive(Debug, Args)]
pub struct FindNoteArgs {
    pub contact: String,
    pub query: String,
}

#[derive(Debug, Args)]
pub struct FindByTagArgs {
    pub contact: String,
    pub tag: String,
}

pub fn add_note(ctx: &mut Context, args: AddNoteArgs) -> Result<()> {
    let note = Note::new(
        &args.content,
        args.title.as_deref(),
        args.tags.as_deref(),
        now_utc(),
    )?;
    let summary = note.summary();
    ctx.contact_mut(&args.contact)?.add_note(note);
    ctx.save()?;
    println!("added note {}", summary);
    Ok(())
}

pub fn edit_note(ctx: &mut Context, args: EditNoteArgs) -> Result<()> {
    let Some(index) = pick_note(ctx, &args.contact, &args.query)? else {
        println!("no selection");
        return Ok(());
    };
    let contact = ctx.contact_mut(&args.contact)?;
    contact.edit_note(
        index,
        &args.content,
        args.title.as_deref(),
        args.tags.as_deref(),
    )?;
    ctx.save()?;
    println!("note updated");
    Ok(())
}

pub fn remove_note(ctx: &mut Context, args: RemoveNoteArgs) -> Result<()> {
    let Some(index) = pick_note(ctx, &args.contact, &args.query)? else {
        println!("no selection");
        return Ok(());
    };
    let removed = ctx.contact_mut(&args.contact)?.delete_note(index)?;
    ctx.save()?;
    println!("deleted note {}", removed.summary());
    Ok(())
}

pub fn list_notes(ctx: &Context, args: ListNotesArgs) -> Result<()> {
    let contact = ctx.contact(&args.contact)?;
    if ctx.json {
        print_json(&contact.notes)?;
        return Ok(());
    }
    if contact.notes.is_empty() {
        println!("no notes");
        return Ok(());
    }
    for note in &contact.notes {
        println!("{}", note.render());
        println!();
    }
    Ok(())
}

pub fn find_note(ctx: &Context, args: FindNoteArgs) -> Result<()> {
    let Some(index) = pick_note(ctx, &args.contact, &args.query)? else {
        println!("no selection");
        return Ok(());
    };
    show_note(ctx, &args.contact, index)
}

pub fn find_note_by_tag(ctx: &Context, args: FindByTagArgs) -> Result<()> {
    let contact = ctx.contact(&args.contact)?;
    let matches = contact.notes_with_tag(&args.tag);
    let options: Vec<String> = matches
        .iter()
        .map(|&index| contact.notes[index].summary())
        .collect();
    let selection = rolo_core::select_index("Select note", &options, &mut StdinChooser)
        .map(|picked| matches[picked]);
    let Some(index) = resolve_selection(selection, "note")? else {
        println!("no selection");
        return Ok(());
    };
    show_note(ctx, &args.contact, index)
}

fn show_note(ctx: &Context, contact: &str, index: usize) -> Result<()> {
    let note = &ctx.contact(contact)?.notes[index];
    if ctx.json {
        print_json(note)?;
    } else {
        println!("{}", note.render());
    }
    Ok(())
}

fn pick_note(ctx: &Context, contact: &str, query: &str) -> Result<Option<usize>> {
    let selection = ctx.contact(contact)?.select_note(query, &mut StdinChooser);
    resolve_selection(selection, "note")
}
