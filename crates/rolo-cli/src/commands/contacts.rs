use crate::commands::{print_json, Context};
use crate::util::today_local;
use anyhow::Result;
use clap::Args;
use rolo_core::{Contact, ContactSummaryDto};

#[derive(Debug, Args)]
pub struct AddContactArgs {
    pub name: String,
}

#[derive(Debug, Args)]
pub struct RenameContactArgs {
    pub name: String,
    #[arg(long)]
    pub new_name: String,
}

#[derive(Debug, Args)]
pub struct ShowArgs {
    pub name: String,
}

#[derive(Debug, Args)]
pub struct ListArgs {}

#[derive(Debug, Args)]
pub struct DeleteArgs {
    pub name: String,
}

pub fn add_contact(ctx: &mut Context, args: AddContactArgs) -> Result<()> {
    let contact = ctx.book.add_contact(&args.name)?;
    let summary = summarize(contact);
    ctx.save()?;
    if ctx.json {
        print_json(&summary)?;
    } else {
        println!("created {} {}", summary.id, summary.name);
    }
    Ok(())
}

pub fn rename_contact(ctx: &mut Context, args: RenameContactArgs) -> Result<()> {
    let id = ctx.contact(&args.name)?.id;
    ctx.book.rename_contact(id, &args.new_name)?;
    ctx.save()?;
    if ctx.json {
        print_json(&summarize(ctx.book.get(id).expect("renamed contact exists")))?;
    } else {
        println!("renamed {} to {}", args.name, args.new_name.trim());
    }
    Ok(())
}

pub fn show_contact(ctx: &Context, args: ShowArgs) -> Result<()> {
    let contact = ctx.contact(&args.name)?;
    if ctx.json {
        print_json(contact)?;
        return Ok(());
    }

    println!("id: {}", contact.id);
    println!("name: {}", contact.name);
    if let Some(birthday) = contact.birthday.as_ref() {
        println!(
            "birthday: {} (age {})",
            birthday,
            birthday.age(today_local())
        );
    }
    if contact.phones.is_empty() {
        println!("phones: none");
    } else {
        println!("phones:");
        for line in crate::util::describe_phones(contact) {
            println!("  {}", line);
        }
    }
    if contact.emails.is_empty() {
        println!("emails: none");
    } else {
        println!("emails:");
        for line in crate::util::describe_emails(contact) {
            println!("  {}", line);
        }
    }
    if contact.addresses.is_empty() {
        println!("addresses: none");
    } else {
        println!("addresses:");
        for line in crate::util::describe_addresses(contact) {
            println!("  {}", line);
        }
    }
    if contact.notes.is_empty() {
        println!("notes: none");
    } else {
        println!("notes:");
        for note in &contact.notes {
            for line in note.render().lines() {
                println!("  {}", line);
            }
            println!();
        }
    }
    Ok(())
}

pub fn list_contacts(ctx: &Context, _args: ListArgs) -> Result<()> {
    let items: Vec<ContactSummaryDto> = ctx.book.contacts.iter().map(summarize).collect();

    if ctx.json {
        print_json(&items)?;
        return Ok(());
    }

    if items.is_empty() {
        println!("no contacts");
        return Ok(());
    }

    for item in items {
        let phone = item.main_phone.as_deref().unwrap_or("-");
        let email = item.main_email.as_deref().unwrap_or("-");
        let birthday = item.birthday.as_deref().unwrap_or("-");
        println!(
            "{}  {}  {}  {}  {} notes",
            item.name, phone, email, birthday, item.note_count
        );
    }
    Ok(())
}

pub fn delete_contact(ctx: &mut Context, args: DeleteArgs) -> Result<()> {
    let id = ctx.contact(&args.name)?.id;
    let removed = ctx.book.delete_contact(id)?;
    ctx.save()?;
    if ctx.json {
        print_json(&serde_json::json!({ "id": removed.id }))?;
    } else {
        println!("deleted {}", removed.name);
    }
    Ok(())
}

pub fn summarize(contact: &Contact) -> ContactSummaryDto {
    ContactSummaryDto {
        id: contact.id,
        name: contact.name.to_string(),
        main_phone: contact.main_phone().map(|p| p.number.clone()),
        main_email: contact.main_email().map(|e| e.address.clone()),
        birthday: contact.birthday.as_ref().map(|b| b.value.clone()),
        note_count: contact.notes.len(),
    }
}
