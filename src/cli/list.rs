// src/cli/list.rs
// `letterhammer list`

use anyhow::Result;

use crate::catalog::Catalog;

/// One block per scenario: name, then `  id: label` per field
pub fn format_catalog(catalog: &Catalog) -> String {
    let mut out = String::new();
    for (i, scenario) in catalog.scenarios().iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(scenario.name);
        out.push('\n');
        for f in scenario.fields {
            out.push_str(&format!("  {}: {}\n", f.id, f.label));
        }
    }
    out
}

pub fn run_list(catalog: &Catalog) -> Result<()> {
    print!("{}", format_catalog(catalog));
    Ok(())
}
