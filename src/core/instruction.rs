use crate::domain::model::Instruction;

/// Split `<mode>,<travel time>,<direction>[,...]` into an [`Instruction`].
///
/// Fields keep their whitespace. Trailing empty fields do not count, so
/// `"Walk,60 min,"` has only two fields. Lines with fewer than three fields
/// yield `None` and should be skipped.
pub fn parse_instruction(line: &str) -> Option<Instruction> {
    let mut fields: Vec<&str> = line.split(',').collect();
    while fields.last().is_some_and(|field| field.is_empty()) {
        fields.pop();
    }

    if fields.len() < 3 {
        tracing::debug!("Skipping malformed instruction '{}'", line);
        return None;
    }

    Some(Instruction::new(
        fields[0],
        Some(fields[1].to_string()),
        Some(fields[2].to_string()),
    ))
}
