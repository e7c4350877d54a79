use crate::commands::{print_json, Context};
use crate::prompt::StdinChooser;
use crate::util::{describe_emails, resolve_selection, select_among};
use anyhow::Result;
use clap::{Args, Subcommand};
use rolo_core::Email;

#[derive(Debug, Subcommand)]
pub enum EmailCommand {
    /// Add an email address to a contact
    Add(AddEmailArgs),
    /// Replace the address of a selected email
    Edit(EditEmailArgs),
    /// Delete a selected email
    Rm(RemoveEmailArgs),
    /// List a contact's emails
    Ls(ListEmailsArgs),
    /// Flag a selected email as the main one
    SetMain(SetMainEmailArgs),
}

#[derive(Debug, Args)]
pub struct AddEmailArgs {
    pub contact: String,
    pub address: String,
    #[arg(long)]
    pub main: bool,
}

#[derive(Debug, Args)]
pub struct EditEmailArgs {
    pub contact: String,
    pub new_address: String,
    #[arg(long = "match", value_name = "SUBSTR")]
    pub matching: Option<String>,
}

#[derive(Debug, Args)]
pub struct RemoveEmailArgs {
    pub contact: String,
    #[arg(long = "match", value_name = "SUBSTR")]
    pub matching: Option<String>,
}

#[derive(Debug, Args)]
pub struct ListEmailsArgs {
    pub contact: String,
}

#[derive(Debug, Args)]
pub struct SetMainEmailArgs {
    pub contact: String,
    #[arg(long = "match", value_name = "SUBSTR")]
    pub matching: Option<String>,
}

pub fn add_email(ctx: &mut Context, args: AddEmailArgs) -> Result<()> {
    let email = Email::new(&args.address, args.main)?;
    let address = email.address.clone();
    ctx.contact_mut(&args.contact)?.add_email(email);
    ctx.save()?;
    println!("added email {}", address);
    Ok(())
}

pub fn edit_email(ctx: &mut Context, args: EditEmailArgs) -> Result<()> {
    let Some(index) = pick_email(ctx, &args.contact, args.matching.as_deref())? else {
        println!("no selection");
        return Ok(());
    };
    let contact = ctx.contact_mut(&args.contact)?;
    contact.edit_email(index, &args.new_address)?;
    let address = contact.emails[index].address.clone();
    ctx.save()?;
    println!("email updated to {}", address);
    Ok(())
}

pub fn remove_email(ctx: &mut Context, args: RemoveEmailArgs) -> Result<()> {
    let Some(index) = pick_email(ctx, &args.contact, args.matching.as_deref())? else {
        println!("no selection");
        return Ok(());
    };
    let removed = ctx.contact_mut(&args.contact)?.delete_email(index)?;
    ctx.save()?;
    println!("deleted email {}", removed.address);
    Ok(())
}

pub fn list_emails(ctx: &Context, args: ListEmailsArgs) -> Result<()> {
    let contact = ctx.contact(&args.contact)?;
    if ctx.json {
        print_json(&contact.emails)?;
        return Ok(());
    }
    if contact.emails.is_empty() {
        println!("no emails");
        return Ok(());
    }
    for line in describe_emails(contact) {
        println!("{}", line);
    }
    Ok(())
}

pub fn set_main_email(ctx: &mut Context, args: SetMainEmailArgs) -> Result<()> {
    let Some(index) = pick_email(ctx, &args.contact, args.matching.as_deref())? else {
        println!("no selection");
        return Ok(());
    };
    let contact = ctx.contact_mut(&args.contact)?;
    contact.set_main_email(index)?;
    let address = contact.emails[index].address.clone();
    ctx.save()?;
    println!("main email set to {}", address);
    Ok(())
}

fn pick_email(ctx: &Context, contact: &str, matching: Option<&str>) -> Result<Option<usize>> {
    let contact = ctx.contact(contact)?;
    let needle = matching.map(str::to_lowercase);
    let selection = select_among(
        "Select email",
        describe_emails(contact),
        |i| {
            needle
                .as_deref()
                .is_none_or(|n| contact.emails[i].address.contains(n))
        },
        &mut StdinChooser,
    );
    resolve_selection(selection, "email")
}
