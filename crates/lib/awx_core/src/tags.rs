// @awa-component: AWX-TagFilter
//
//! Tag filter normalization.
//!
//! AWX expects `job_tags` and `skip_tags` as a single comma-delimited
//! string. Callers hand us ordered lists; this module is the only place
//! that turns one into the other.

use crate::error::{AwxError, Result};

/// Delimiter AWX uses between tag names.
pub const TAG_DELIMITER: char = ',';

/// Normalize an ordered list of tag names into an AWX tag filter string.
///
/// Returns `Ok(None)` when the list is absent or empty: the field must then
/// be left out of the payload entirely, because AWX treats a present field as
/// "apply this filter". Otherwise returns the tags joined by `,` in caller
/// order. Duplicates are passed through as given.
///
/// Fails with [`AwxError::InvalidTag`] if any tag is blank, has surrounding
/// whitespace, or contains the delimiter.
pub fn normalize_tag_filter(tags: Option<&[String]>) -> Result<Option<String>> {
    match tags {
        None => Ok(None),
        Some([]) => Ok(None),
        Some(tags) => {
            let mut joined = String::new();
            for (i, tag) in tags.iter().enumerate() {
                validate_tag(tag)?;
                if i > 0 {
                    joined.push(TAG_DELIMITER);
                }
                joined.push_str(tag);
            }
            Ok(Some(joined))
        }
    }
}

fn validate_tag(tag: &str) -> Result<()> {
    if tag.trim().is_empty() {
        return Err(AwxError::InvalidTag {
            tag: tag.to_string(),
            reason: "tag name must not be empty",
        });
    }
    if tag.trim() != tag {
        return Err(AwxError::InvalidTag {
            tag: tag.to_string(),
            reason: "tag name must not have surrounding whitespace",
        });
    }
    if tag.contains(TAG_DELIMITER) {
        return Err(AwxError::InvalidTag {
            tag: tag.to_string(),
            reason: "tag name must not contain ','",
        });
    }
    Ok(())
}
