use crate::commands::{print_json, Context};
use crate::error::invalid_input;
use crate::util::today_local;
use anyhow::Result;
use chrono::NaiveDate;
use clap::{Args, Subcommand};
use rolo_core::{birthdays_this_day, birthdays_this_week, Birthday, BirthdayDto, BIRTHDAY_FORMAT};

#[derive(Debug, Subcommand)]
pub enum BirthdayCommand {
    /// Set or replace a contact's birthday
    Set(SetBirthdayArgs),
    /// Show a contact's birthday and current age
    Show(ShowBirthdayArgs),
}

#[derive(Debug, Args)]
pub struct SetBirthdayArgs {
    pub contact: String,
    /// Date in DD.MM.YYYY form
    pub date: String,
}

#[derive(Debug, Args)]
pub struct ShowBirthdayArgs {
    pub contact: String,
}

#[derive(Debug, Args)]
pub struct BirthdaysArgs {
    /// Override the reference date (DD.MM.YYYY), mostly for scripting
    #[arg(long)]
    pub today: Option<String>,
    /// Only contacts whose birthday falls on the reference date itself
    #[arg(long)]
    pub day: bool,
}

pub fn set_birthday(ctx: &mut Context, args: SetBirthdayArgs) -> Result<()> {
    let birthday = Birthday::new(&args.date, today_local())?;
    let value = birthday.value.clone();
    ctx.contact_mut(&args.contact)?.set_birthday(birthday);
    ctx.save()?;
    println!("birthday set to {}", value);
    Ok(())
}

pub fn show_birthday(ctx: &Context, args: ShowBirthdayArgs) -> Result<()> {
    let contact = ctx.contact(&args.contact)?;
    let today = today_local();
    match contact.birthday.as_ref() {
        Some(birthday) => {
            if ctx.json {
                print_json(&BirthdayDto {
                    value: birthday.value.clone(),
                    age: birthday.age(today),
                    has_had_birthday_this_year: birthday.has_had_birthday_this_year(today),
                })?;
            } else {
                println!("{} (age {})", birthday, birthday.age(today));
            }
        }
        None => println!("no birthday set"),
    }
    Ok(())
}

pub fn upcoming_birthdays(ctx: &Context, args: BirthdaysArgs) -> Result<()> {
    let today = match args.today.as_deref() {
        Some(raw) => NaiveDate::parse_from_str(raw, BIRTHDAY_FORMAT)
            .map_err(|_| invalid_input(format!("invalid date: '{}'", raw)))?,
        None => today_local(),
    };
    let upcoming = if args.day {
        birthdays_this_day(&ctx.book.contacts, today)
    } else {
        birthdays_this_week(&ctx.book.contacts, today)
    };
    if ctx.json {
        print_json(&upcoming)?;
        return Ok(());
    }
    if upcoming.is_empty() {
        println!("no birthdays");
        return Ok(());
    }
    for (name, date) in upcoming {
        println!("{}  {}", name, date.format(BIRTHDAY_FORMAT));
    }
    Ok(())
}
