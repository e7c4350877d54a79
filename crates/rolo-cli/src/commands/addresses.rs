use crate::commands::{print_json, Context};
use crate::prompt::StdinChooser;
use crate::util::{describe_addresses, resolve_selection, select_among};
use anyhow::Result;
use clap::{Args, Subcommand};
use rolo_core::Address;

#[derive(Debug, Subcommand)]
pub enum AddressCommand {
    /// Add a postal address to a contact
    Add(AddAddressArgs),
    /// Update fields of a selected address
    Edit(EditAddressArgs),
    /// Delete a selected address
    Rm(RemoveAddressArgs),
    /// List a contact's addresses
    Ls(ListAddressesArgs),
    /// Flag a selected address as the main one
    SetMain(SetMainAddressArgs),
}

#[derive(Debug, Args)]
pub struct AddAddressArgs {
    pub contact: String,
    #[arg(long)]
    pub country: String,
    #[arg(long)]
    pub city: String,
    #[arg(long)]
    pub street: String,
    #[arg(long)]
    pub zip: String,
    #[arg(long)]
    pub main: bool,
}

#[derive(Debug, Args)]
pub struct EditAddressArgs {
    pub contact: String,
    #[arg(long)]
    pub country: Option<String>,
    #[arg(long)]
    pub city: Option<String>,
    #[arg(long)]
    pub street: Option<String>,
    #[arg(long)]
    pub zip: Option<String>,
    #[arg(long = "match", value_name = "SUBSTR")]
    pub matching: Option<String>,
}

#[derive(Debug, Args)]
pub struct RemoveAddressArgs {
    pub contact: String,
    #[arg(long = "match", value_name = "SUBSTR")]
    pub matching: Option<String>,
}

#[derive(Debug, Args)]
pub struct ListAddressesArgs {
    pub contact: String,
}

#[derive(Debug, Args)]
pub struct SetMainAddressArgs {
    pub contact: String,
    #[arg(long = "match", value_name = "SUBSTR")]
    pub matching: Option<String>,
}

pub fn add_address(ctx: &mut Context, args: AddAddressArgs) -> Result<()> {
    let address = Address::new(&args.country, &args.city, &args.street, &args.zip, args.main)?;
    let formatted = address.to_string();
    ctx.contact_mut(&args.contact)?.add_address(address);
    ctx.save()?;
    println!("added address {}", formatted);
    Ok(())
}

pub fn edit_address(ctx: &mut Context, args: EditAddressArgs) -> Result<()> {
    let Some(index) = pick_address(ctx, &args.contact, args.matching.as_deref())? else {
        println!("no selection");
        return Ok(());
    };
    let contact = ctx.contact_mut(&args.contact)?;
    contact.edit_address(
        index,
        args.country.as_deref(),
        args.city.as_deref(),
        args.street.as_deref(),
        args.zip.as_deref(),
    )?;
    let formatted = contact.addresses[index].to_string();
    ctx.save()?;
    println!("address updated to {}", formatted);
    Ok(())
}

pub fn remove_address(ctx: &mut Context, args: RemoveAddressArgs) -> Result<()> {
    let Some(index) = pick_address(ctx, &args.contact, args.matching.as_deref())? else {
        println!("no selection");
        return Ok(());
    };
    let removed = ctx.contact_mut(&args.contact)?.delete_address(index)?;
    ctx.save()?;
    println!("deleted address {}", removed);
    Ok(())
}

pub fn list_addresses(ctx: &Context, args: ListAddressesArgs) -> Result<()> {
    let contact = ctx.contact(&args.contact)?;
    if ctx.json {
        print_json(&contact.addresses)?;
        return Ok(());
    }
    if contact.addresses.is_empty() {
        println!("no addresses");
        return Ok(());
    }
    for line in describe_addresses(contact) {
        println!("{}", line);
    }
    Ok(())
}

pub fn set_main_address(ctx: &mut Context, args: SetMainAddressArgs) -> Result<()> {
    let Some(index) = pick_address(ctx, &args.contact, args.matching.as_deref())? else {
        println!("no selection");
        return Ok(());
    };
    let contact = ctx.contact_mut(&args.contact)?;
    contact.set_main_address(index)?;
    let formatted = contact.addresses[index].to_string();
    ctx.save()?;
    println!("main address set to {}", formatted);
    Ok(())
}

fn pick_address(ctx: &Context, contact: &str, matching: Option<&str>) -> Result<Option<usize>> {
    let contact = ctx.contact(contact)?;
    let needle = matching.map(str::to_lowercase);
    let selection = select_among(
        "Select address",
        describe_addresses(contact),
        |i| {
            needle
                .as_deref()
                .is_none_or(|n| contact.addresses[i].to_string().to_lowercase().contains(n))
        },
        &mut StdinChooser,
    );
    resolve_selection(selection, "address")
}
