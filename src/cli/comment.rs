use std::path::Path;

use anyhow::{bail, Context as _, Result};
use mapref_core::Reference;

use super::read_input;

pub fn run(url: Option<&str>, inline: Option<&Path>, multiline: bool) -> Result<()> {
    let reference = match (url, inline) {
        (Some(url), _) => Reference::External {
            url: url.to_string(),
            multiline,
        },
        (None, Some(path)) => {
            let content = read_input(path)?;
            let sourcemap = serde_json::from_slice(&content)
                .with_context(|| format!("{} is not valid JSON", path.display()))?;
            Reference::Inline {
                sourcemap,
                multiline,
            }
        }
        (None, None) => bail!("either --url or --inline is required"),
    };

    let comment = mapref_core::to_comment(&reference)?;

    // Refuse to print a comment that would not be read back as written
    match mapref_core::parse(&comment) {
        Ok(Some(parsed)) if parsed == reference => {}
        Ok(_) => bail!("'{comment}' would not be recognized as a source map comment"),
        Err(e) => return Err(e.into()),
    }

    println!("{comment}");
    Ok(())
}
