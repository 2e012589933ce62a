use std::process::ExitCode;

use extractsum_scoring::{COMBINED, VARIANTS};
use serde::Serialize;

use crate::output::{print_json, print_table};

#[derive(Serialize)]
struct VariantInfo {
    number: usize,
    name: &'static str,
    slug: &'static str,
    folder: &'static str,
    features: Vec<&'static str>,
}

pub fn execute(json: bool) -> anyhow::Result<ExitCode> {
    let variants: Vec<VariantInfo> = VARIANTS
        .iter()
        .chain([&COMBINED])
        .map(|v| VariantInfo {
            number: v.number,
            name: v.name,
            slug: v.slug,
            folder: v.folder,
            features: v.features.iter().map(|f| f.label()).collect(),
        })
        .collect();

    if json {
        print_json(&variants)?;
    } else {
        let rows: Vec<Vec<String>> = variants
            .iter()
            .map(|v| {
                vec![
                    v.number.to_string(),
                    v.name.to_string(),
                    v.folder.to_string(),
                    v.features.join(" + "),
                ]
            })
            .collect();
        print_table(&["#", "Variant", "Folder", "Features"], &rows);
    }
    Ok(ExitCode::SUCCESS)
}
