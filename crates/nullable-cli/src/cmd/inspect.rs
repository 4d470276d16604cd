//! `nullable inspect`: decode people records and report each field's state.
//!
//! Reads a JSON array of records (or a single record) from a file or stdin.

use crate::output::{OutputMode, Renderable, pretty_kv, pretty_section, render_list};
use crate::record::{Person, decode_people};
use anyhow::Context;
use clap::Args;
use nullable_core::{Error, FieldState};
use serde::Serialize;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Args, Debug)]
pub struct InspectArgs {
    /// JSON file to read. Reads stdin when omitted or `-`.
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,
}

/// State of one tri-state field plus its encoded payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldReport {
    pub state: FieldState,
    /// Raw JSON produced by the field's marshal hook; omitted when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub json: Option<String>,
}

impl FieldReport {
    fn from_marshaled(state: FieldState, bytes: &[u8]) -> Self {
        let json = (!bytes.is_empty()).then(|| String::from_utf8_lossy(bytes).into_owned());
        Self { state, json }
    }

    fn display(&self) -> &str {
        self.json.as_deref().unwrap_or("(absent)")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PersonReport {
    pub name: String,
    pub birthday: FieldReport,
    pub age: FieldReport,
}

impl PersonReport {
    pub fn from_person(person: &Person) -> anyhow::Result<Self> {
        let birthday = with_error_code(person.birthday.marshal_json(), || {
            format!("birthday of {}", person.name)
        })?;
        let age = with_error_code(person.age.marshal_json(), || {
            format!("age of {}", person.name)
        })?;

        Ok(Self {
            name: person.name.clone(),
            birthday: FieldReport::from_marshaled(person.birthday.state(), &birthday),
            age: FieldReport::from_marshaled(person.age.state(), &age),
        })
    }
}

impl Renderable for PersonReport {
    fn render_human(&self, w: &mut dyn Write) -> io::Result<()> {
        pretty_section(w, &self.name)?;
        pretty_kv(
            w,
            "birthday",
            format!("{:<7} {}", self.birthday.state, self.birthday.display()),
        )?;
        pretty_kv(
            w,
            "age",
            format!("{:<7} {}", self.age.state, self.age.display()),
        )?;
        writeln!(w)
    }

    fn render_json(&self, w: &mut dyn Write) -> io::Result<()> {
        serde_json::to_writer(&mut *w, self).map_err(io::Error::other)
    }

    fn render_table(&self, w: &mut dyn Write) -> io::Result<()> {
        writeln!(
            w,
            "{}\t{}\t{}\t{}\t{}",
            self.name,
            self.birthday.state,
            self.birthday.json.as_deref().unwrap_or("-"),
            self.age.state,
            self.age.json.as_deref().unwrap_or("-"),
        )
    }

    fn table_headers() -> &'static [&'static str] {
        &["NAME", "BIRTHDAY", "BIRTHDAY_JSON", "AGE", "AGE_JSON"]
    }
}

/// Prefix a marshal hook failure with its stable code, e.g.
/// `E1001: Payload could not be encoded (age of John Doe)`.
fn with_error_code<T>(
    result: Result<T, Error>,
    field: impl FnOnce() -> String,
) -> anyhow::Result<T> {
    result.map_err(|err| {
        let kind = err.kind();
        let context = format!("{}: {} ({})", kind.code(), kind.message(), field());
        anyhow::Error::new(err).context(context)
    })
}

fn read_input(file: Option<&Path>) -> anyhow::Result<String> {
    match file {
        Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        _ => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            Ok(buf)
        }
    }
}

/// Decode records and build one report per person.
pub fn inspect_str(input: &str) -> anyhow::Result<Vec<PersonReport>> {
    let raw: serde_json::Value =
        serde_json::from_str(input).context("Failed to parse people JSON")?;
    let people = decode_people(raw).context("Failed to decode people records")?;
    debug!(count = people.len(), "decoded records");
    people.iter().map(PersonReport::from_person).collect()
}

pub fn run_inspect(
    args: &InspectArgs,
    mode: OutputMode,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    let input = read_input(args.file.as_deref())?;
    let reports = inspect_str(&input)?;
    info!(records = reports.len(), "inspected records");
    render_list(&reports, mode, out)?;
    Ok(())
}
