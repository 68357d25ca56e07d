use std::borrow::Cow;

use crate::error::Error;

/// Resolve predefined entities and character references.
///
/// Returns the input slice untouched when it contains no `&`.
pub(crate) fn parse_entities(content: &str) -> Result<Cow<'_, str>, Error> {
    if !content.contains('&') {
        return Ok(Cow::Borrowed(content));
    }
    let mut result = String::with_capacity(content.len());
    let mut chars = content.chars();
    while let Some(c) = chars.next() {
        if c != '&' {
            result.push(c);
            continue;
        }
        let mut entity = String::new();
        let mut is_complete = false;
        for c in chars.by_ref() {
            if c == ';' {
                is_complete = true;
                break;
            }
            entity.push(c);
        }
        if !is_complete {
            return Err(Error::UnclosedEntity(entity));
        }
        match entity.as_str() {
            "amp" => result.push('&'),
            "apos" => result.push('\''),
            "gt" => result.push('>'),
            "lt" => result.push('<'),
            "quot" => result.push('"'),
            reference => {
                let c = parse_char_reference(reference)
                    .ok_or_else(|| Error::InvalidEntity(reference.to_string()))?;
                result.push(c);
            }
        }
    }
    Ok(Cow::Owned(result))
}

fn parse_char_reference(entity: &str) -> Option<char> {
    let code = entity.strip_prefix('#')?;
    let code = match code.strip_prefix('x') {
        Some(hex) => u32::from_str_radix(hex, 16).ok()?,
        None => code.parse::<u32>().ok()?,
    };
    char::from_u32(code)
}
