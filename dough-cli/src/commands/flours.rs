use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use comfy_table::Cell;
use dough_core::{DoughStyle, FlourProduct, recommend_flours};

use super::{Output, StyleFlag, load_catalog};
use crate::i18n::{Label, t};
use crate::render::{fmt_pct, table};

#[derive(Args, Debug)]
pub struct FloursArgs {
    /// Only flours recommended for this style
    #[arg(long, value_enum)]
    style: Option<StyleFlag>,

    /// Replacement flour catalog (JSON array)
    #[arg(long)]
    catalog: Option<PathBuf>,
}

pub fn run(args: FloursArgs, out: Output) -> Result<()> {
    let catalog = load_catalog(args.catalog.as_deref())?;
    let shown: Vec<&FlourProduct> = match args.style {
        Some(style) => recommend_flours(DoughStyle::from(style).tag(), &catalog),
        None => catalog.iter().collect(),
    };

    if out.json {
        println!("{}", serde_json::to_string_pretty(&shown)?);
        return Ok(());
    }

    let lang = out.lang;
    if shown.is_empty() {
        println!("{}", t(Label::NoFlour, lang));
        return Ok(());
    }

    let mut tbl = table(&[
        t(Label::Identifier, lang),
        t(Label::Name, lang),
        t(Label::Protein, lang),
        t(Label::Ash, lang),
        t(Label::Styles, lang),
    ]);
    for f in shown {
        let styles: Vec<&str> = f.compatible_styles.iter().map(String::as_str).collect();
        tbl.add_row(vec![
            Cell::new(&f.identifier),
            Cell::new(f.name(lang.code())),
            Cell::new(fmt_pct(f.protein_percent, 2)),
            Cell::new(fmt_pct(f.ash_percent, 2)),
            Cell::new(styles.join(", ")),
        ]);
    }
    println!("{tbl}");
    Ok(())
}
