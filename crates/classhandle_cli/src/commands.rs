//! Command dispatch and text rendering.
//!
//! Every command goes through `ClassService`, so mutations are saved before
//! anything is printed.

use crate::cli::{CategoryCommand, Command, EntryCommand};
use anyhow::{anyhow, Context};
use classhandle_core::{
    resource, CategoryFilter, ClassService, Entry, EntryDraft, EntryId, EntryRow, StoreRepository,
    Summary,
};
use std::io::Write;

pub fn dispatch<R: StoreRepository>(
    service: &mut ClassService<R>,
    command: Command,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    match command {
        Command::Entry { entry_command } => run_entry(service, entry_command, out),
        Command::Category { category_command } => run_category(service, category_command, out),
        Command::Summary { category } => {
            let filter = CategoryFilter::from(category.as_deref());
            writeln!(out, "{}", service.summarize(&filter).display_line())?;
            Ok(())
        }
    }
}

fn run_entry<R: StoreRepository>(
    service: &mut ClassService<R>,
    command: EntryCommand,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    match command {
        EntryCommand::Add {
            category,
            description,
            pdf,
            video,
            notes,
        } => {
            let draft = EntryDraft::new(category, description)
                .with_pdf(pdf.unwrap_or_default())
                .with_video(video.unwrap_or_default())
                .with_notes(notes.unwrap_or_default());
            let entry = service.add_entry(draft).context("Failed to add entry")?;
            writeln!(out, "Added entry {} ({})", entry.description, entry.id)?;
        }
        EntryCommand::Edit {
            id,
            category,
            description,
            pdf,
            video,
            notes,
        } => {
            let current = require_entry(service, &id)?;
            let mut draft = EntryDraft::from_entry(current);
            if let Some(category) = category {
                draft.category = category;
            }
            if let Some(description) = description {
                draft.description = description;
            }
            if let Some(pdf) = pdf {
                draft.pdf_path = pdf;
            }
            if let Some(video) = video {
                draft.video_link = video;
            }
            if let Some(notes) = notes {
                draft.notes = notes;
            }
            let entry = service
                .update_entry(&id, draft)
                .context("Failed to update entry")?;
            writeln!(out, "Updated entry {} ({})", entry.description, entry.id)?;
        }
        EntryCommand::Remove { id } => {
            let entry = service.delete_entry(&id).context("Failed to remove entry")?;
            writeln!(out, "Removed entry {} ({})", entry.description, entry.id)?;
        }
        EntryCommand::Toggle { id } => {
            let entry = service
                .toggle_completed(&id)
                .context("Failed to toggle entry")?;
            let state = if entry.completed { "viewed" } else { "not viewed" };
            writeln!(out, "Marked {} as {state}", entry.description)?;
        }
        EntryCommand::Show { id } => {
            write_entry_detail(out, require_entry(service, &id)?)?;
        }
        EntryCommand::List { category } => {
            let filter = CategoryFilter::from(category.as_deref());
            write_rows(out, &service.entry_rows(&filter))?;
            write_summary(out, &service.summarize(&filter))?;
        }
        EntryCommand::Open { id, resource } => {
            let entry = require_entry(service, &id)?;
            let target = resource::resolve(entry, resource.into())?;
            writeln!(out, "{}", target.display_uri())?;
        }
    }
    Ok(())
}

fn run_category<R: StoreRepository>(
    service: &mut ClassService<R>,
    command: CategoryCommand,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    match command {
        CategoryCommand::Add { name } => {
            let name = service
                .add_category(&name)
                .context("Failed to add category")?;
            writeln!(out, "Added category {name}")?;
        }
        CategoryCommand::Remove { name } => {
            service
                .remove_category(&name)
                .context("Failed to remove category")?;
            writeln!(out, "Removed category {}", name.trim())?;
        }
        CategoryCommand::List => {
            for name in service.list_categories() {
                writeln!(out, "{name}")?;
            }
        }
    }
    Ok(())
}

fn require_entry<'s, R: StoreRepository>(
    service: &'s ClassService<R>,
    id: &EntryId,
) -> anyhow::Result<&'s Entry> {
    service
        .get_entry(id)
        .ok_or_else(|| anyhow!("Entry {id} does not exist"))
}

fn write_rows(out: &mut impl Write, rows: &[EntryRow]) -> std::io::Result<()> {
    writeln!(
        out,
        "{:<6}  {:<32}  {:<3}  {:<5}  {:<36}  Notes",
        "Viewed", "Description", "PDF", "Video", "ID"
    )?;
    for row in rows {
        let notes = row.notes.lines().next().unwrap_or_default();
        writeln!(
            out,
            "{:<6}  {:<32}  {:<3}  {:<5}  {:<36}  {}",
            row.status, row.description, row.pdf, row.video, row.id, notes
        )?;
    }
    Ok(())
}

fn write_summary(out: &mut impl Write, summary: &Summary) -> std::io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", summary.display_line())
}

fn write_entry_detail(out: &mut impl Write, entry: &Entry) -> std::io::Result<()> {
    writeln!(out, "{} ({}):", entry.description, entry.id)?;
    writeln!(out, "\tcategory: {}", entry.category)?;
    writeln!(out, "\tviewed: {}", if entry.completed { "yes" } else { "no" })?;
    writeln!(out, "\tpdf: {}", or_none(&entry.pdf_path))?;
    writeln!(out, "\tvideo: {}", or_none(&entry.video_link))?;
    writeln!(out, "\tnotes: {}", or_none(&entry.notes))
}

fn or_none(value: &str) -> &str {
    if value.is_empty() {
        "-"
    } else {
        value
    }
}
