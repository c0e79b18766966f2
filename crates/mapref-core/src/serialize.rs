use crate::codec;
use crate::error::Result;
use crate::types::Reference;

const INLINE_PREFIX: &str = "data:application/json;charset=utf-8;base64,";

/// Build the comment line that points at `reference`, in its own style.
pub fn to_comment(reference: &Reference) -> Result<String> {
    let value = match reference {
        Reference::External { url, .. } => url.clone(),
        Reference::Inline { sourcemap, .. } => {
            let json = serde_json::to_vec(sourcemap)?;
            format!("{INLINE_PREFIX}{}", codec::encode(&json))
        }
    };

    let (open, close) = reference.style().delimiters();
    Ok(format!("{open}# sourceMappingURL={value}{close}"))
}
