//! Entry selection parsing for `playlist --items`.
//!
//! Accepts comma-separated 1-based indices and inclusive ranges, e.g.
//! `1,3,5-7`. Every index is validated against the listing length before
//! any range is expanded, so a typo'd huge range fails fast instead of
//! materializing. The result is sorted and de-duplicated.

use anyhow::{anyhow, bail, Result};
use std::collections::BTreeSet;

pub fn parse_items(spec: &str, len: usize) -> Result<Vec<usize>> {
    let mut picked = BTreeSet::new();
    for token in spec.split(',') {
        let token = token.trim();
        if token.is_empty() {
            bail!("empty entry in item selection '{spec}'");
        }
        match token.split_once('-') {
            Some((lo, hi)) => {
                let lo = parse_index(lo, spec, len)?;
                let hi = parse_index(hi, spec, len)?;
                if lo > hi {
                    bail!("range {lo}-{hi} is reversed in item selection '{spec}'");
                }
                // Both ends are within the listing, so this is bounded by len.
                picked.extend(lo..=hi);
            }
            None => {
                picked.insert(parse_index(token, spec, len)?);
            }
        }
    }
    Ok(picked.into_iter().collect())
}

fn parse_index(token: &str, spec: &str, len: usize) -> Result<usize> {
    let n: usize = token
        .trim()
        .parse()
        .map_err(|_| anyhow!("invalid item '{token}' in selection '{spec}'"))?;
    if n == 0 {
        bail!("items are numbered from 1 in selection '{spec}'");
    }
    if n > len {
        bail!("item {n} is out of range (the listing has {len} entries)");
    }
    Ok(n)
}
