//! Subcommand handlers. Each maps onto one action of the list or form screen.

use std::process::ExitCode;

use anyhow::Context as _;
use carnet_core::{
  Contact, Error, Gender, Outcome,
  form::{delete_contact, load_for_edit, submit},
  store::ContactStore,
};
use clap::Args;

/// Fields of the contact form in create mode.
#[derive(Args, Debug)]
pub struct AddArgs {
  #[arg(long)]
  pub name:      String,
  #[arg(long)]
  pub firstname: String,
  /// Date of birth as DD/MM/YYYY.
  #[arg(long)]
  pub birthdate: String,
  #[arg(long, default_value = "")]
  pub phone:     String,
  #[arg(long)]
  pub email:     String,
  /// `F`, `M`, or anything else for "other".
  #[arg(long, default_value = "O")]
  pub gender:    String,
}

/// Fields of the contact form in edit mode. Omitted fields keep their stored
/// value.
#[derive(Args, Debug)]
pub struct EditArgs {
  /// Email of the contact to edit.
  pub email:     String,
  #[arg(long)]
  pub name:      Option<String>,
  #[arg(long)]
  pub firstname: Option<String>,
  #[arg(long)]
  pub birthdate: Option<String>,
  #[arg(long)]
  pub phone:     Option<String>,
  /// New email address.
  #[arg(long = "email")]
  pub new_email: Option<String>,
  #[arg(long)]
  pub gender:    Option<String>,
}

impl EditArgs {
  /// Overlay the supplied fields on `previous`.
  fn apply_to(self, previous: &Contact) -> Contact {
    let mut contact = previous.clone();
    if let Some(v) = self.name {
      contact.name = v;
    }
    if let Some(v) = self.firstname {
      contact.firstname = v;
    }
    if let Some(v) = self.birthdate {
      contact.birthdate = v;
    }
    if let Some(v) = self.phone {
      contact.phone = v;
    }
    if let Some(v) = self.new_email {
      contact.email = v;
    }
    if let Some(v) = self.gender {
      contact.gender = Gender::from(v);
    }
    contact
  }
}

// ─── List screen ──────────────────────────────────────────────────────────────

pub fn list<S: ContactStore>(store: &S, json: bool) -> anyhow::Result<ExitCode> {
  let rows = store.list_all().context("failed to list contacts")?;

  if json {
    println!("{}", serde_json::to_string_pretty(&rows)?);
  } else {
    for row in &rows {
      println!("{row}\n");
    }
  }
  Ok(ExitCode::SUCCESS)
}

// ─── Form screen ──────────────────────────────────────────────────────────────

pub fn show<S: ContactStore>(
  store: &S,
  email: &str,
  json: bool,
) -> anyhow::Result<ExitCode> {
  let contact = match load_for_edit(store, email) {
    Ok(c) => c,
    Err(Error::NotFound(_)) => {
      eprintln!("Error: no contact uses {email}");
      return Ok(ExitCode::FAILURE);
    }
    Err(e) => return Err(e).context("failed to load contact"),
  };

  if json {
    println!("{}", serde_json::to_string_pretty(&contact)?);
  } else {
    println!("Name:      {}", contact.name);
    println!("Firstname: {}", contact.firstname);
    println!("Birthdate: {}", contact.birthdate);
    println!("Phone:     {}", contact.phone);
    println!("Email:     {}", contact.email);
    println!("Gender:    {}", contact.gender);
  }
  Ok(ExitCode::SUCCESS)
}

pub fn add<S: ContactStore>(store: &S, args: AddArgs) -> ExitCode {
  let contact = Contact {
    name:      args.name,
    firstname: args.firstname,
    birthdate: args.birthdate,
    phone:     args.phone,
    email:     args.email,
    gender:    Gender::from(args.gender),
  };
  report(submit(store, &contact, None))
}

pub fn edit<S: ContactStore>(store: &S, args: EditArgs) -> anyhow::Result<ExitCode> {
  let previous = match load_for_edit(store, &args.email) {
    Ok(c) => c,
    Err(Error::NotFound(_)) => {
      eprintln!("Error: no contact uses {}", args.email);
      return Ok(ExitCode::FAILURE);
    }
    Err(e) => return Err(e).context("failed to load contact"),
  };
  let contact = args.apply_to(&previous);
  Ok(report(submit(store, &contact, Some(&previous))))
}

pub fn delete<S: ContactStore>(store: &S, email: &str) -> ExitCode {
  report(delete_contact(store, email))
}

fn report(outcome: Outcome) -> ExitCode {
  if outcome.is_success() {
    println!("{}", outcome.message);
    ExitCode::SUCCESS
  } else {
    eprintln!("{}", outcome.message);
    ExitCode::FAILURE
  }
}
