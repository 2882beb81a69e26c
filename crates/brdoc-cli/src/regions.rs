//! # Regions Subcommand
//!
//! `brdoc regions` prints the CPF fiscal region table.

use std::io::Write;

use anyhow::{Context, Result};
use clap::Args;

use brdoc_core::{Uf, FISCAL_REGIONS};

/// Arguments for the regions subcommand.
#[derive(Args, Debug)]
pub struct RegionsArgs {
    /// Only show the region serving this UF.
    #[arg(long)]
    pub uf: Option<Uf>,

    /// Emit JSON instead of a table.
    #[arg(long)]
    pub json: bool,
}

/// Execute the regions subcommand.
pub fn run_regions(args: &RegionsArgs, out: &mut dyn Write) -> Result<u8> {
    let regions: Vec<_> = match args.uf {
        Some(uf) => vec![uf.fiscal_region()],
        None => FISCAL_REGIONS.iter().collect(),
    };

    if args.json {
        serde_json::to_writer_pretty(&mut *out, &regions).context("writing JSON output")?;
        writeln!(out)?;
        return Ok(0);
    }

    for region in regions {
        let ufs: Vec<&str> = region.ufs.iter().map(|uf| uf.as_str()).collect();
        writeln!(out, "{}  {:<18} {}", region.digit, region.name, ufs.join(" "))?;
    }
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_lists_all_regions() {
        let args = RegionsArgs { uf: None, json: false };
        let mut out = Vec::new();
        assert_eq!(run_regions(&args, &mut out).unwrap(), 0);
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 10);
        assert!(text.lines().last().unwrap().starts_with("0  10ª Região Fiscal"));
    }

    #[test]
    fn filter_by_uf_as_json() {
        let args = RegionsArgs {
            uf: Some(Uf::Sp),
            json: true,
        };
        let mut out = Vec::new();
        run_regions(&args, &mut out).unwrap();
        let body: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(body[0]["digit"], "8");
        assert_eq!(body[0]["ufs"], serde_json::json!(["SP"]));
    }
}
