//! Interactive session. The vocabulary depends on whether a contact is
//! active: book-level commands operate on the whole book, contact-level
//! commands on the active contact. Errors are printed and the loop goes on.

use crate::commands::Context;
use crate::prompt::{ask_text, confirm, read_line, StdinChooser};
use crate::util::{
    describe_addresses, describe_emails, describe_phones, now_utc, select_among, today_local,
};
use anyhow::Result;
use clap::Args;
use rolo_core::{
    birthdays_this_week, Address, Birthday, Email, Note, Phone, Selection, BIRTHDAY_FORMAT,
};

#[derive(Debug, Args)]
pub struct ShellArgs {}

enum Flow {
    Continue,
    Exit,
}

pub fn run_shell(ctx: &mut Context, _args: ShellArgs) -> Result<()> {
    println!("type 'help' for commands, 'exit' to quit");
    loop {
        let label = match ctx.book.active_id().and_then(|id| ctx.book.get(id)) {
            Some(contact) => format!("rolo ({})> ", contact.name),
            None => "rolo> ".to_string(),
        };
        let Some(line) = read_line(&label)? else {
            break;
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let (command, rest) = split_command(line);
        let outcome = if ctx.book.active_id().is_some() {
            contact_command(ctx, command, rest)
        } else {
            book_command(ctx, command, rest)
        };
        match outcome {
            Ok(Flow::Continue) => {}
            Ok(Flow::Exit) => break,
            Err(err) => eprintln!("error: {:#}", err),
        }
    }
    ctx.save()?;
    println!("saved");
    Ok(())
}

fn split_command(line: &str) -> (&str, &str) {
    match line.split_once(char::is_whitespace) {
        Some((head, tail)) => (head, tail.trim()),
        None => (line, ""),
    }
}

/// Saves after a mutating command when configured to; `exit` saves anyway.
fn persist(ctx: &Context) -> Result<()> {
    if ctx.config.save_on_change {
        ctx.save()?;
    }
    Ok(())
}

fn book_command(ctx: &mut Context, command: &str, rest: &str) -> Result<Flow> {
    match command {
        "help" => {
            println!("book commands:");
            println!("  add NAME        create a contact");
            println!("  find QUERY      pick a contact and make it active");
            println!("  ls              list contacts");
            println!("  rm NAME         delete a contact");
            println!("  birthdays       birthdays in the current week");
            println!("  exit            save and quit");
        }
        "add" => {
            let contact = ctx.book.add_contact(rest)?;
            println!("created {}", contact.name);
            persist(ctx)?;
        }
        "find" => match ctx.book.select_active_contact(rest, &mut StdinChooser) {
            Selection::Picked(id) => {
                let name = ctx.book.get(id).map(|c| c.name.to_string()).unwrap_or_default();
                println!("now working on {}", name);
            }
            Selection::NotFound => println!("no matching contact"),
            Selection::Cancelled => println!("no selection"),
        },
        "ls" => {
            if ctx.book.contacts.is_empty() {
                println!("no contacts");
            }
            for contact in &ctx.book.contacts {
                println!("{}", contact.name);
            }
        }
        "rm" => {
            let id = ctx.contact(rest)?.id;
            if confirm(&format!("delete '{}'?", rest))? {
                let removed = ctx.book.delete_contact(id)?;
                println!("deleted {}", removed.name);
                persist(ctx)?;
            }
        }
        "birthdays" => {
            let upcoming = birthdays_this_week(&ctx.book.contacts, today_local());
            if upcoming.is_empty() {
                println!("no birthdays");
            }
            for (name, date) in upcoming {
                println!("{}  {}", name, date.format(BIRTHDAY_FORMAT));
            }
        }
        "exit" | "quit" => return Ok(Flow::Exit),
        other => println!("unknown command '{}'; type 'help'", other),
    }
    Ok(Flow::Continue)
}

fn contact_command(ctx: &mut Context, command: &str, rest: &str) -> Result<Flow> {
    match command {
        "help" => {
            println!("contact commands:");
            println!("  show                     full card");
            println!("  rename NEW_NAME          rename the contact");
            println!("  phone add|rm|set-main|ls");
            println!("  email add|rm|set-main|ls");
            println!("  address add|rm|set-main|ls");
            println!("  note add|find QUERY|rm QUERY|ls");
            println!("  birthday set DATE|show");
            println!("  back                     return to the book");
            println!("  exit                     save and quit");
        }
        "show" => {
            let contact = ctx.book.active()?;
            println!("name: {}", contact.name);
            if let Some(birthday) = contact.birthday.as_ref() {
                println!("birthday: {} (age {})", birthday, birthday.age(today_local()));
            }
            for line in describe_phones(contact) {
                println!("phone: {}", line);
            }
            for line in describe_emails(contact) {
                println!("email: {}", line);
            }
            for line in describe_addresses(contact) {
                println!("address: {}", line);
            }
            for note in &contact.notes {
                println!("note: {}", note.summary());
            }
        }
        "rename" => {
            let id = ctx.book.active()?.id;
            ctx.book.rename_contact(id, rest)?;
            println!("renamed to {}", rest.trim());
            persist(ctx)?;
        }
        "phone" => phone_command(ctx, rest)?,
        "email" => email_command(ctx, rest)?,
        "address" => address_command(ctx, rest)?,
        "note" => note_command(ctx, rest)?,
        "birthday" => birthday_command(ctx, rest)?,
        "back" => ctx.book.back_to_book(),
        "exit" | "quit" => return Ok(Flow::Exit),
        other => println!("unknown command '{}'; type 'help'", other),
    }
    Ok(Flow::Continue)
}

fn phone_command(ctx: &mut Context, rest: &str) -> Result<()> {
    let (action, _) = split_command(rest);
    match action {
        "add" => {
            let Some(number) = ask_text("number", None)? else {
                return Ok(());
            };
            let main = confirm("main?")?;
            let phone = Phone::new(&number, main)?;
            println!("added phone {}", phone.number);
            ctx.book.active_mut()?.add_phone(phone);
            persist(ctx)?;
        }
        "rm" => {
            if let Some(index) = pick(ctx, "Select phone", describe_phones)? {
                let removed = ctx.book.active_mut()?.delete_phone(index)?;
                println!("deleted phone {}", removed.number);
                persist(ctx)?;
            }
        }
        "set-main" => {
            if let Some(index) = pick(ctx, "Select phone", describe_phones)? {
                ctx.book.active_mut()?.set_main_phone(index)?;
                println!("main phone updated");
                persist(ctx)?;
            }
        }
        "ls" => {
            for line in describe_phones(ctx.book.active()?) {
                println!("{}", line);
            }
        }
        other => println!("unknown phone action '{}'", other),
    }
    Ok(())
}

fn email_command(ctx: &mut Context, rest: &str) -> Result<()> {
    let (action, _) = split_command(rest);
    match action {
        "add" => {
            let Some(address) = ask_text("email", None)? else {
                return Ok(());
            };
            let main = confirm("main?")?;
            let email = Email::new(&address, main)?;
            println!("added email {}", email.address);
            ctx.book.active_mut()?.add_email(email);
            persist(ctx)?;
        }
        "rm" => {
            if let Some(index) = pick(ctx, "Select email", describe_emails)? {
                let removed = ctx.book.active_mut()?.delete_email(index)?;
                println!("deleted email {}", removed.address);
                persist(ctx)?;
            }
        }
        "set-main" => {
            if let Some(index) = pick(ctx, "Select email", describe_emails)? {
                ctx.book.active_mut()?.set_main_email(index)?;
                println!("main email updated");
                persist(ctx)?;
            }
        }
        "ls" => {
            for line in describe_emails(ctx.book.active()?) {
                println!("{}", line);
            }
        }
        other => println!("unknown email action '{}'", other),
    }
    Ok(())
}

fn address_command(ctx: &mut Context, rest: &str) -> Result<()> {
    let (action, _) = split_command(rest);
    match action {
        "add" => {
            let Some(country) = ask_text("country", None)? else {
                return Ok(());
            };
            let Some(city) = ask_text("city", None)? else {
                return Ok(());
            };
            let Some(street) = ask_text("street", None)? else {
                return Ok(());
            };
            let Some(zip) = ask_text("zip", None)? else {
                return Ok(());
            };
            let main = confirm("main?")?;
            let address = Address::new(&country, &city, &street, &zip, main)?;
            println!("added address {}", address);
            ctx.book.active_mut()?.add_address(address);
            persist(ctx)?;
        }
        "rm" => {
            if let Some(index) = pick(ctx, "Select address", describe_addresses)? {
                let removed = ctx.book.active_mut()?.delete_address(index)?;
                println!("deleted address {}", removed);
                persist(ctx)?;
            }
        }
        "set-main" => {
            if let Some(index) = pick(ctx, "Select address", describe_addresses)? {
                ctx.book.active_mut()?.set_main_address(index)?;
                println!("main address updated");
                persist(ctx)?;
            }
        }
        "ls" => {
            for line in describe_addresses(ctx.book.active()?) {
                println!("{}", line);
            }
        }
        other => println!("unknown address action '{}'", other),
    }
    Ok(())
}

fn note_command(ctx: &mut Context, rest: &str) -> Result<()> {
    let (action, tail) = split_command(rest);
    match action {
        "add" => {
            let Some(content) = ask_text("content", None)? else {
                return Ok(());
            };
            let title = ask_text("title (optional)", Some(""))?;
            let tags = ask_text("tags, comma separated (optional)", Some(""))?;
            let note = Note::new(
                &content,
                title.as_deref().filter(|t| !t.is_empty()),
                tags.as_deref().filter(|t| !t.is_empty()),
                now_utc(),
            )?;
            println!("added note {}", note.summary());
            ctx.book.active_mut()?.add_note(note);
            persist(ctx)?;
        }
        "find" => {
            let contact = ctx.book.active()?;
            match contact.select_note(tail, &mut StdinChooser) {
                Selection::Picked(index) => println!("{}", contact.notes[index].render()),
                Selection::NotFound => println!("no matching note"),
                Selection::Cancelled => println!("no selection"),
            }
        }
        "rm" => {
            let selection = ctx.book.active()?.select_note(tail, &mut StdinChooser);
            match selection {
                Selection::Picked(index) => {
                    let removed = ctx.book.active_mut()?.delete_note(index)?;
                    println!("deleted note {}", removed.summary());
                    persist(ctx)?;
                }
                Selection::NotFound => println!("no matching note"),
                Selection::Cancelled => println!("no selection"),
            }
        }
        "ls" => {
            for note in &ctx.book.active()?.notes {
                println!("{}", note.summary());
            }
        }
        other => println!("unknown note action '{}'", other),
    }
    Ok(())
}

fn birthday_command(ctx: &mut Context, rest: &str) -> Result<()> {
    let (action, tail) = split_command(rest);
    match action {
        "set" => {
            let birthday = Birthday::new(tail, today_local())?;
            println!("birthday set to {}", birthday.value);
            ctx.book.active_mut()?.set_birthday(birthday);
            persist(ctx)?;
        }
        "show" => match ctx.book.active()?.birthday.as_ref() {
            Some(birthday) => {
                println!("{} (age {})", birthday, birthday.age(today_local()));
            }
            None => println!("no birthday set"),
        },
        other => println!("unknown birthday action '{}'", other),
    }
    Ok(())
}

fn pick(
    ctx: &Context,
    prompt: &str,
    describe: fn(&rolo_core::Contact) -> Vec<String>,
) -> Result<Option<usize>> {
    let contact = ctx.book.active()?;
    let selection = select_among(prompt, describe(contact), |_| true, &mut StdinChooser);
    match selection {
        Selection::Picked(index) => Ok(Some(index)),
        Selection::Cancelled => {
            println!("no selection");
            Ok(None)
        }
        Selection::NotFound => {
            println!("nothing to select");
            Ok(None)
        }
    }
}
