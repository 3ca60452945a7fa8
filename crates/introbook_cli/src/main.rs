//! Registry maintenance command.
//!
//! # Responsibility
//! - Load a household registry snapshot from JSON.
//! - Report promotion eligibility per family, or apply one promotion.
//! - Keep output deterministic for scripted use.

use introbook_core::{
    can_rebase, rebase, DirectoryService, Household, HouseholdListQuery,
    InMemoryHouseholdDirectory,
};
use std::process;
use uuid::Uuid;

const USAGE: &str = "usage: introbook_cli <registry.json> [options]

options:
  --household <uuid>         inspect one household's eligibility
  --promote <member-uuid>    promote a member to head (requires --household)
  --dry-run                  with --promote: show the result, commit nothing
  --out <path>               write the updated registry (tombstones included)";

struct Args {
    registry_path: String,
    household: Option<Uuid>,
    promote: Option<Uuid>,
    dry_run: bool,
    out: Option<String>,
}

fn main() {
    let args = match parse_args() {
        Ok(args) => args,
        Err(message) => {
            eprintln!("{message}");
            eprintln!("{USAGE}");
            process::exit(2);
        }
    };

    if let Err(message) = run(&args) {
        eprintln!("error: {message}");
        process::exit(1);
    }
}

fn parse_args() -> Result<Args, String> {
    let mut raw = std::env::args().skip(1);
    let registry_path = raw.next().ok_or("missing registry path")?;

    let mut args = Args {
        registry_path,
        household: None,
        promote: None,
        dry_run: false,
        out: None,
    };

    while let Some(flag) = raw.next() {
        match flag.as_str() {
            "--household" => args.household = Some(parse_uuid_arg(&flag, raw.next())?),
            "--promote" => args.promote = Some(parse_uuid_arg(&flag, raw.next())?),
            "--dry-run" => args.dry_run = true,
            "--out" => args.out = Some(raw.next().ok_or("--out requires a path")?),
            other => return Err(format!("unknown option `{other}`")),
        }
    }

    if args.promote.is_some() && args.household.is_none() {
        return Err("--promote requires --household".to_string());
    }

    Ok(args)
}

fn parse_uuid_arg(flag: &str, value: Option<String>) -> Result<Uuid, String> {
    let value = value.ok_or_else(|| format!("{flag} requires a uuid"))?;
    Uuid::parse_str(&value).map_err(|_| format!("{flag}: `{value}` is not a valid uuid"))
}

fn run(args: &Args) -> Result<(), String> {
    let mut service = load_registry(&args.registry_path)?;

    match (args.household, args.promote) {
        (None, _) => list_households(&service),
        (Some(household_id), None) => report_eligibility(&service, household_id)?,
        (Some(household_id), Some(member_id)) if args.dry_run => {
            dry_run_promotion(&service, household_id, member_id)?
        }
        (Some(household_id), Some(member_id)) => {
            let outcome = service
                .promote(household_id, member_id)
                .map_err(|err| err.to_string())?;
            println!(
                "promoted {} to head of household {}",
                outcome.household.head.full_name(),
                outcome.record.replacement_household
            );
            print_members(&outcome.household);
        }
    }

    if let Some(out_path) = &args.out {
        write_registry(&service, out_path)?;
    }

    Ok(())
}

fn load_registry(path: &str) -> Result<DirectoryService<InMemoryHouseholdDirectory>, String> {
    let raw = std::fs::read_to_string(path)
        .map_err(|err| format!("cannot read registry `{path}`: {err}"))?;
    let households: Vec<Household> = serde_json::from_str(&raw)
        .map_err(|err| format!("cannot parse registry `{path}`: {err}"))?;

    let mut service = DirectoryService::new(InMemoryHouseholdDirectory::new());
    for household in &households {
        service
            .register_household(household)
            .map_err(|err| format!("cannot load household {}: {err}", household.id))?;
    }
    Ok(service)
}

fn list_households(service: &DirectoryService<InMemoryHouseholdDirectory>) {
    let households = match service.list_households(&HouseholdListQuery::default()) {
        Ok(households) => households,
        Err(err) => {
            eprintln!("error: {err}");
            return;
        }
    };

    for household in households {
        let eligible = can_rebase(&household);
        println!(
            "{}  {}  members={}  eligible={}",
            household.id,
            household.head.full_name(),
            household.members.len(),
            eligible
        );
    }
}

fn report_eligibility(
    service: &DirectoryService<InMemoryHouseholdDirectory>,
    household_id: Uuid,
) -> Result<(), String> {
    let report = service
        .eligibility(household_id)
        .map_err(|err| err.to_string())?;

    if !report.can_rebase {
        println!("household {household_id}: not eligible (a parent relation is recorded)");
        return Ok(());
    }

    println!("household {household_id}: eligible; members who could become head:");
    for row in report.eligible_members {
        let marker = if row.promotable { "" } else { " (not promotable)" };
        println!("  {}  {}  ({}){marker}", row.id, row.full_name, row.relation);
    }
    Ok(())
}

fn dry_run_promotion(
    service: &DirectoryService<InMemoryHouseholdDirectory>,
    household_id: Uuid,
    member_id: Uuid,
) -> Result<(), String> {
    let household = service.household(household_id).map_err(|err| err.to_string())?;
    if !can_rebase(&household) {
        return Err(format!(
            "household {household_id} is not eligible for promotion"
        ));
    }

    let preview = rebase(&household, member_id).map_err(|err| err.to_string())?;
    println!(
        "dry run: {} would become head of a new household",
        preview.head.full_name()
    );
    print_members(&preview);
    Ok(())
}

fn print_members(household: &Household) {
    for member in &household.members {
        println!(
            "  {}  {}  ({})",
            member.id,
            member.person.full_name(),
            member.relation.display()
        );
    }
}

fn write_registry(
    service: &DirectoryService<InMemoryHouseholdDirectory>,
    path: &str,
) -> Result<(), String> {
    let households = service
        .list_households(&HouseholdListQuery {
            include_retired: true,
            ..HouseholdListQuery::default()
        })
        .map_err(|err| err.to_string())?;
    let rendered = serde_json::to_string_pretty(&households)
        .map_err(|err| format!("cannot render registry: {err}"))?;
    std::fs::write(path, rendered).map_err(|err| format!("cannot write `{path}`: {err}"))?;
    println!("wrote {} households to {path}", households.len());
    Ok(())
}
