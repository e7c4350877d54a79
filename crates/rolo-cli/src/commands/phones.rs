use crate::commands::{print_json, Context};
use crate::prompt::StdinChooser;
use crate::util::{describe_phones, resolve_selection, select_among};
use anyhow::Result;
use clap::{Args, Subcommand};
use rolo_core::Phone;

#[derive(Debug, Subcommand)]
pub enum PhoneCommand {
    /// Add a phone number to a contact
    Add(AddPhoneArgs),
    /// Replace the number of a selected phone
    Edit(EditPhoneArgs),
    /// Delete a selected phone
    Rm(RemovePhoneArgs),
    /// List a contact's phones
    Ls(ListPhonesArgs),
    /// Flag a selected phone as the main one
    SetMain(SetMainPhoneArgs),
}

#[derive(Debug, Args)]
pub struct AddPhoneArgs {
    pub contact: String,
    pub number: String,
    #[arg(long)]
    pub main: bool,
}

#[derive(Debug, Args)]
pub struct EditPhoneArgs {
    pub contact: String,
    pub new_number: String,
    /// Narrow the candidates to numbers containing this substring
    #[arg(long = "match", value_name = "SUBSTR")]
    pub matching: Option<String>,
}

#[derive(Debug, Args)]
pub struct RemovePhoneArgs {
    pub contact: String,
    #[arg(long = "match", value_name = "SUBSTR")]
    pub matching: Option<String>,
}

#[derive(Debug, Args)]
pub struct ListPhonesArgs {
    pub contact: String,
}

#[derive(Debug, Args)]
pub struct SetMainPhoneArgs {
    pub contact: String,
    #[arg(long = "match", value_name = "SUBSTR")]
    pub matching: Option<String>,
}

pub fn add_phone(ctx: &mut Context, args: AddPhoneArgs) -> Result<()> {
    let phone = Phone::new(&args.number, args.main)?;
    let number = phone.number.clone();
    ctx.contact_mut(&args.contact)?.add_phone(phone);
    ctx.save()?;
    println!("added phone {}", number);
    Ok(())
}

pub fn edit_phone(ctx: &mut Context, args: EditPhoneArgs) -> Result<()> {
    let Some(index) = pick_phone(ctx, &args.contact, args.matching.as_deref())? else {
        println!("no selection");
        return Ok(());
    };
    let contact = ctx.contact_mut(&args.contact)?;
    contact.edit_phone(index, &args.new_number)?;
    let number = contact.phones[index].number.clone();
    ctx.save()?;
    println!("phone updated to {}", number);
    Ok(())
}

pub fn remove_phone(ctx: &mut Context, args: RemovePhoneArgs) -> Result<()> {
    let Some(index) = pick_phone(ctx, &args.contact, args.matching.as_deref())? else {
        println!("no selection");
        return Ok(());
    };
    let removed = ctx.contact_mut(&args.contact)?.delete_phone(index)?;
    ctx.save()?;
    println!("deleted phone {}", removed.number);
    Ok(())
}

pub fn list_phones(ctx: &Context, args: ListPhonesArgs) -> Result<()> {
    let contact = ctx.contact(&args.contact)?;
    if ctx.json {
        print_json(&contact.phones)?;
        return Ok(());
    }
    if contact.phones.is_empty() {
        println!("no phones");
        return Ok(());
    }
    for line in describe_phones(contact) {
        println!("{}", line);
    }
    Ok(())
}

pub fn set_main_phone(ctx: &mut Context, args: SetMainPhoneArgs) -> Result<()> {
    let Some(index) = pick_phone(ctx, &args.contact, args.matching.as_deref())? else {
        println!("no selection");
        return Ok(());
    };
    let contact = ctx.contact_mut(&args.contact)?;
    contact.set_main_phone(index)?;
    let number = contact.phones[index].number.clone();
    ctx.save()?;
    println!("main phone set to {}", number);
    Ok(())
}

fn pick_phone(ctx: &Context, contact: &str, matching: Option<&str>) -> Result<Option<usize>> {
    let contact = ctx.contact(contact)?;
    let needle = matching.map(str::to_lowercase);
    let selection = select_among(
        "Select phone",
        describe_phones(contact),
        |i| {
            needle
                .as_deref()
                .is_none_or(|n| contact.phones[i].number.to_lowercase().contains(n))
        },
        &mut StdinChooser,
    );
    resolve_selection(selection, "phone")
}
