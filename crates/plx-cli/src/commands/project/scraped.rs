use anyhow::Context;
use plx_client::actions::scraped_data_action;
use serde::Serialize;

use crate::cli::{GlobalFlags, OutputFormat};
use crate::context::AppContext;
use crate::output::{output, output_rows};

#[derive(Debug, Serialize)]
struct ScrapedFileResponse<'a> {
    variant: &'a str,
    filename: &'a str,
    content: &'a str,
}

pub async fn run(
    id: &str,
    file: Option<&str>,
    variant: Option<&str>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let data = scraped_data_action(&ctx.client, id)
        .await
        .with_context(|| format!("failed to load scraped data of project {id}"))?;

    if let Some(filename) = file {
        let (variant, file) = data.find(filename, variant)?;
        if flags.format == OutputFormat::Json {
            return output(
                &ScrapedFileResponse {
                    variant,
                    filename: &file.filename,
                    content: &file.content,
                },
                flags.format,
            );
        }
        println!("{}", file.content);
        return Ok(());
    }

    let rows: Vec<Vec<String>> = data
        .variants
        .iter()
        .flat_map(|(variant, files)| {
            files.iter().map(move |f| {
                vec![
                    variant.clone(),
                    f.filename.clone(),
                    f.content.chars().count().to_string(),
                ]
            })
        })
        .collect();
    output_rows(&data, flags.format, &["variant", "filename", "chars"], &rows)
}
